//! Static reference tables: currency symbols and exchange rates.
//!
//! Tables are built once and only read afterwards. Callers either build
//! their own value and pass it by reference, or borrow the process-wide
//! [`ReferenceTables::global`] instance.

use std::collections::HashMap;

use bankdash_shared::types::Currency;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use super::error::CurrencyError;

static STANDARD: Lazy<ReferenceTables> = Lazy::new(ReferenceTables::standard);

/// Display symbols for the recognized currencies.
const STANDARD_SYMBOLS: [(Currency, &str); 4] = [
    (Currency::Eur, "€"),
    (Currency::Usd, "$"),
    (Currency::Gbp, "£"),
    (Currency::Chf, "CHF"),
];

/// `(from, to, mantissa, scale)`: 1 `from` = mantissa * 10^-scale `to`.
const STANDARD_RATES: [(Currency, Currency, i64, u32); 12] = [
    (Currency::Eur, Currency::Usd, 10605, 4),
    (Currency::Eur, Currency::Gbp, 8312, 4),
    (Currency::Eur, Currency::Chf, 9387, 4),
    (Currency::Usd, Currency::Eur, 9430, 4),
    (Currency::Usd, Currency::Gbp, 7838, 4),
    (Currency::Usd, Currency::Chf, 8852, 4),
    (Currency::Gbp, Currency::Eur, 12031, 4),
    (Currency::Gbp, Currency::Usd, 12758, 4),
    (Currency::Gbp, Currency::Chf, 11293, 4),
    (Currency::Chf, Currency::Eur, 10653, 4),
    (Currency::Chf, Currency::Usd, 11297, 4),
    (Currency::Chf, Currency::Gbp, 8855, 4),
];

/// Symbol table plus ordered-pair rate table.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    symbols: HashMap<String, String>,
    rates: HashMap<String, HashMap<String, Decimal>>,
}

impl ReferenceTables {
    /// Creates empty tables.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the standard EUR/USD/GBP/CHF tables.
    #[must_use]
    pub fn standard() -> Self {
        let mut tables = Self::empty();
        for (currency, symbol) in STANDARD_SYMBOLS {
            tables
                .symbols
                .insert(currency.code().to_string(), symbol.to_string());
        }
        for (from, to, mantissa, scale) in STANDARD_RATES {
            tables.insert_rate(from.code(), to.code(), Decimal::new(mantissa, scale));
        }
        tables
    }

    /// Returns the process-wide standard tables, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &STANDARD
    }

    /// Adds or replaces a display symbol.
    #[must_use]
    pub fn with_symbol(mut self, code: &str, symbol: &str) -> Self {
        self.symbols.insert(code.to_string(), symbol.to_string());
        self
    }

    /// Adds or replaces the rate for `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::InvalidRate` for zero or negative rates.
    pub fn with_rate(mut self, from: &str, to: &str, rate: Decimal) -> Result<Self, CurrencyError> {
        if rate <= Decimal::ZERO {
            return Err(CurrencyError::InvalidRate {
                from: from.to_string(),
                to: to.to_string(),
                rate,
            });
        }
        self.insert_rate(from, to, rate);
        Ok(self)
    }

    /// Returns the symbol for a code, if the table knows it.
    #[must_use]
    pub fn symbol(&self, code: &str) -> Option<&str> {
        self.symbols.get(code).map(String::as_str)
    }

    /// Returns the multiplier for `from -> to`, if the table has one.
    ///
    /// Self-pairs are not stored; identity conversion never reaches here.
    #[must_use]
    pub fn rate(&self, from: &str, to: &str) -> Option<Decimal> {
        self.rates.get(from).and_then(|targets| targets.get(to)).copied()
    }

    /// Number of ordered pairs with a rate.
    #[must_use]
    pub fn rate_count(&self) -> usize {
        self.rates.values().map(HashMap::len).sum()
    }

    fn insert_rate(&mut self, from: &str, to: &str, rate: Decimal) {
        self.rates
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), rate);
    }
}
