//! Currency service for display formatting and exchange.
//!
//! This module provides the main service interface for currency operations:
//! symbol resolution, two-decimal formatting, and rate-table conversion.

use bankdash_shared::RoundingMode;
use bankdash_shared::types::Money;
use rust_decimal::Decimal;

use super::error::CurrencyError;
use super::tables::ReferenceTables;

/// Currency used when a caller does not name one.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Decimal places shown for every currency.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Currency service bound to a set of reference tables.
///
/// Every method is deterministic: the same inputs always give the same output.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyService<'a> {
    tables: &'a ReferenceTables,
    rounding: RoundingMode,
}

impl<'a> CurrencyService<'a> {
    /// Creates a service that rounds half away from zero.
    #[must_use]
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self {
            tables,
            rounding: RoundingMode::default(),
        }
    }

    /// Creates a service over the process-wide standard tables.
    #[must_use]
    pub fn standard() -> CurrencyService<'static> {
        CurrencyService::new(ReferenceTables::global())
    }

    /// Overrides the rounding rule used by [`Self::format_currency`].
    #[must_use]
    pub const fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Resolves the display symbol for a code.
    ///
    /// Unknown codes are returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use bankdash_core::currency::CurrencyService;
    ///
    /// let service = CurrencyService::standard();
    /// assert_eq!(service.symbol("GBP"), "£");
    /// assert_eq!(service.symbol("XYZ"), "XYZ");
    /// ```
    #[must_use]
    pub fn symbol<'s>(&'s self, code: &'s str) -> &'s str {
        self.tables.symbol(code).unwrap_or(code)
    }

    /// Rounds to two decimals with the configured rule.
    ///
    /// A result of zero is always positive, so `-0.001` never shows as `-0.00`.
    /// Near the top of the `Decimal` range the scale can stay below two; the
    /// formatter pads those.
    #[must_use]
    pub fn round(&self, amount: Decimal) -> Decimal {
        let mut rounded = amount.round_dp_with_strategy(DISPLAY_DECIMALS, self.rounding.strategy());
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        rounded.rescale(DISPLAY_DECIMALS);
        rounded
    }

    /// Formats an amount as symbol followed by a two-decimal number, with no
    /// separator. `None` means [`DEFAULT_CURRENCY`].
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use bankdash_core::currency::CurrencyService;
    ///
    /// let service = CurrencyService::standard();
    /// assert_eq!(service.format_currency(dec!(-12.345), Some("USD")), "$-12.35");
    /// assert_eq!(service.format_currency(dec!(0), None), "€0.00");
    /// ```
    #[must_use]
    pub fn format_currency(&self, amount: Decimal, currency: Option<&str>) -> String {
        let code = currency.unwrap_or(DEFAULT_CURRENCY);
        format!("{}{:.2}", self.symbol(code), self.round(amount))
    }

    /// Formats a [`Money`] value in its own currency.
    #[must_use]
    pub fn format_money(&self, money: &Money) -> String {
        self.format_currency(money.amount, Some(money.currency.as_str()))
    }

    /// Converts `amount` from one currency to another.
    ///
    /// Identity conversion returns `amount` untouched. The product is not
    /// rounded; pass it through [`Self::format_currency`] for display.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::NoExchangeRate` when the table has no entry
    /// for the ordered pair, and `CurrencyError::Overflow` when the product
    /// does not fit.
    pub fn try_exchange(&self, amount: Decimal, from: &str, to: &str) -> Result<Decimal, CurrencyError> {
        if from == to {
            return Ok(amount);
        }

        let rate = self
            .tables
            .rate(from, to)
            .ok_or_else(|| CurrencyError::NoExchangeRate {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        amount.checked_mul(rate).ok_or_else(|| CurrencyError::Overflow {
            amount,
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    /// Converts `amount`, returning zero when no conversion is possible.
    ///
    /// A zero result for a non-zero input means "rate unavailable". Use
    /// [`Self::try_exchange`] to tell the two apart.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use bankdash_core::currency::CurrencyService;
    ///
    /// let service = CurrencyService::standard();
    /// assert_eq!(service.calculate_exchange(dec!(100), "EUR", "USD"), dec!(106.05));
    /// assert_eq!(service.calculate_exchange(dec!(100), "EUR", "JPY"), dec!(0));
    /// ```
    #[must_use]
    pub fn calculate_exchange(&self, amount: Decimal, from: &str, to: &str) -> Decimal {
        self.try_exchange(amount, from, to).unwrap_or_else(|err| {
            tracing::debug!(%amount, from, to, error = %err, "exchange unavailable, using zero");
            Decimal::ZERO
        })
    }

    /// Converts a [`Money`] value into `to`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::try_exchange`].
    pub fn exchange_money(&self, money: &Money, to: &str) -> Result<Money, CurrencyError> {
        let amount = self.try_exchange(money.amount, money.currency.as_str(), to)?;
        Ok(Money::new(amount, to))
    }
}

/// Formats with the standard tables. `None` means EUR.
#[must_use]
pub fn format_currency(amount: Decimal, currency: Option<&str>) -> String {
    CurrencyService::standard().format_currency(amount, currency)
}

/// Converts with the standard tables, yielding zero for unknown pairs.
#[must_use]
pub fn calculate_exchange(amount: Decimal, from: &str, to: &str) -> Decimal {
    CurrencyService::standard().calculate_exchange(amount, from, to)
}
