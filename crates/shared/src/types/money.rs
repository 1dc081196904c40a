//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal`, which is always finite, so
//! `NaN` and infinities are rejected once at the boundary in
//! [`Money::try_from_f64`] and never reach the formatters.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Currencies the dashboard recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro
    #[default]
    Eur,
    /// US Dollar
    Usd,
    /// Pound Sterling
    Gbp,
    /// Swiss Franc
    Chf,
}

impl Currency {
    /// Every recognized currency, in display order.
    pub const ALL: [Self; 4] = [Self::Eur, Self::Usd, Self::Gbp, Self::Chf];

    /// Returns the ISO-like code for this currency.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Chf => "CHF",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "GBP" => Ok(Self::Gbp),
            "CHF" => Ok(Self::Chf),
            _ => Err(AppError::Validation(format!("Unknown currency: {s}"))),
        }
    }
}

/// A currency code exactly as supplied by the data-producing side.
///
/// Unlike [`Currency`], this accepts any string: lookups against the
/// reference tables degrade gracefully for codes they do not know, and the
/// raw text is what gets displayed in that case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Wraps a raw code without validation.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the raw code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the recognized currency, if the code matches one exactly.
    ///
    /// Matching is case-sensitive, same as the table lookups.
    #[must_use]
    pub fn known(&self) -> Option<Currency> {
        Currency::ALL.into_iter().find(|c| c.code() == self.0)
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Currency::default().into()
    }
}

impl From<Currency> for CurrencyCode {
    fn from(currency: Currency) -> Self {
        Self(currency.code().to_string())
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a monetary amount with currency: an account balance or a
/// transaction amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Signed amount in major units (e.g., 12.50 euros).
    pub amount: Decimal,
    /// Currency of the amount.
    pub currency: CurrencyCode,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub fn new(amount: Decimal, currency: impl Into<CurrencyCode>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Builds an amount from a float produced outside the money model.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for `NaN`, infinities, and values
    /// outside the range `Decimal` can hold.
    pub fn try_from_f64(amount: f64, currency: impl Into<CurrencyCode>) -> AppResult<Self> {
        if !amount.is_finite() {
            return Err(AppError::Validation(format!(
                "Amount must be finite, got {amount}"
            )));
        }
        let amount = Decimal::from_f64(amount).ok_or_else(|| {
            AppError::Validation(format!("Amount {amount} is out of range"))
        })?;
        Ok(Self::new(amount, currency))
    }

    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BusinessRule` when the currencies differ; such
    /// amounts must be converted first.
    pub fn checked_add(&self, other: &Self) -> AppResult<Self> {
        if self.currency != other.currency {
            return Err(AppError::BusinessRule(format!(
                "Cannot add {} to {} without conversion",
                other.currency, self.currency
            )));
        }
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| AppError::Validation("Amount overflow".to_string()))?;
        Ok(Self::new(amount, self.currency.clone()))
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}
