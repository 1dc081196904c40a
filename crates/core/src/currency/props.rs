//! Property-based tests for currency operations.
//!
//! - Formatting always yields symbol + exactly two decimals, at any magnitude
//! - Rounding never moves an amount by more than half a cent
//! - Exchange is deterministic and identity-preserving

use proptest::prelude::*;
use rust_decimal::Decimal;

use bankdash_shared::RoundingMode;
use bankdash_shared::types::Currency;

use super::service::CurrencyService;

/// Signed amounts with up to 4 decimals (-10,000,000.0000 to 10,000,000.0000).
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000_000i64..100_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Any representable decimal, up to the full 96-bit mantissa and scale 28.
fn any_decimal() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28)
        .prop_map(|(lo, mid, hi, negative, scale)| Decimal::from_parts(lo, mid, hi, negative, scale))
}

fn known_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![Just(RoundingMode::HalfAwayFromZero), Just(RoundingMode::HalfEven)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The number part always carries exactly two decimals.
    #[test]
    fn prop_format_has_two_decimals(
        amount in signed_amount(),
        currency in known_currency(),
        rounding in rounding_mode(),
    ) {
        let service = CurrencyService::standard().with_rounding(rounding);
        let label = service.format_currency(amount, Some(currency.code()));
        let number = label.strip_prefix(service.symbol(currency.code())).unwrap_or_default();

        let (_, decimals) = number.split_once('.').unwrap_or_default();
        prop_assert_eq!(decimals.len(), 2, "label {} should have two decimals", label);
        prop_assert!(number.parse::<Decimal>().is_ok(), "label {} should parse", label);
    }

    /// Two decimals hold across the whole `Decimal` range.
    #[test]
    fn prop_format_has_two_decimals_for_any_decimal(
        amount in any_decimal(),
        rounding in rounding_mode(),
    ) {
        let label = CurrencyService::standard().with_rounding(rounding).format_currency(amount, None);
        let number = label.strip_prefix("€").unwrap_or_default();

        let (_, decimals) = number.split_once('.').unwrap_or_default();
        prop_assert_eq!(decimals.len(), 2, "label {} should have two decimals", label);
    }

    /// Unknown codes are prefixed verbatim.
    #[test]
    fn prop_unknown_code_is_prefixed(
        amount in signed_amount(),
        code in "[A-Z]{3}".prop_filter("not a known code", |c| {
            Currency::ALL.iter().all(|k| k.code() != c.as_str())
        }),
    ) {
        let label = CurrencyService::standard().format_currency(amount, Some(&code));
        prop_assert!(label.starts_with(&code));
    }

    /// Rounding moves an amount by at most half a cent.
    #[test]
    fn prop_round_is_within_half_cent(
        amount in signed_amount(),
        rounding in rounding_mode(),
    ) {
        let rounded = CurrencyService::standard().with_rounding(rounding).round(amount);
        prop_assert!((rounded - amount).abs() <= Decimal::new(5, 3));
        prop_assert_eq!(rounded.scale(), 2);
    }

    /// Formatting is deterministic.
    #[test]
    fn prop_format_is_idempotent(amount in signed_amount(), currency in known_currency()) {
        let service = CurrencyService::standard();
        prop_assert_eq!(
            service.format_currency(amount, Some(currency.code())),
            service.format_currency(amount, Some(currency.code()))
        );
    }

    /// Same-currency exchange returns the input exactly.
    #[test]
    fn prop_identity_exchange(amount in signed_amount(), currency in known_currency()) {
        let result = CurrencyService::standard()
            .calculate_exchange(amount, currency.code(), currency.code());
        prop_assert_eq!(result, amount);
        prop_assert_eq!(result.scale(), amount.scale());
    }

    /// Exchange between known currencies is deterministic and sign-preserving.
    #[test]
    fn prop_exchange_known_pairs(
        amount in signed_amount(),
        from in known_currency(),
        to in known_currency(),
    ) {
        let service = CurrencyService::standard();
        let first = service.try_exchange(amount, from.code(), to.code());
        let second = service.try_exchange(amount, from.code(), to.code());
        prop_assert_eq!(&first, &second);

        let converted = first.unwrap_or_default();
        prop_assert_eq!(converted.is_zero(), amount.is_zero());
        if !amount.is_zero() {
            prop_assert_eq!(converted.is_sign_negative(), amount.is_sign_negative());
        }
    }
}
