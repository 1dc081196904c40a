//! Currency error types.

use bankdash_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from exchange-rate lookups and reference-table construction.
///
/// Symbol lookups never fail; an unknown code is displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// The rate table has no entry for this ordered pair.
    #[error("No exchange rate found for {from} to {to}")]
    NoExchangeRate {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
    },

    /// Rates must be strictly positive multipliers.
    #[error("Exchange rate for {from} to {to} must be positive, got {rate}")]
    InvalidRate {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
        /// Rejected rate.
        rate: Decimal,
    },

    /// `amount * rate` does not fit in a `Decimal`.
    #[error("Converting {amount} from {from} to {to} overflows")]
    Overflow {
        /// Amount being converted.
        amount: Decimal,
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
    },
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::NoExchangeRate { .. } => Self::NotFound(err.to_string()),
            CurrencyError::InvalidRate { .. } | CurrencyError::Overflow { .. } => {
                Self::Validation(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_rate_maps_to_not_found() {
        let err: AppError = CurrencyError::NoExchangeRate {
            from: "EUR".into(),
            to: "JPY".into(),
        }
        .into();
        assert_eq!(err, AppError::NotFound("No exchange rate found for EUR to JPY".into()));
    }

    #[test]
    fn test_invalid_rate_maps_to_validation() {
        let err: AppError = CurrencyError::InvalidRate {
            from: "EUR".into(),
            to: "USD".into(),
            rate: dec!(-1),
        }
        .into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
