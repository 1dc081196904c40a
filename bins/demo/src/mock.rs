//! Mock accounts and transactions, dated relative to a reference instant.

use bankdash_core::category::Category;
use bankdash_core::dashboard::{AccountRecord, TransactionRecord};
use bankdash_shared::types::{AccountId, CurrencyCode, TemporalPoint, TransactionId};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

/// Account fixtures: `(name, currency, balance in cents)`.
const ACCOUNTS: [(&str, &str, i64); 4] = [
    ("Main Checking", "EUR", 524_350),
    ("Savings", "EUR", 1_820_000),
    ("US Travel Card", "USD", 84_012),
    ("London Account", "GBP", 231_075),
];

/// Transaction fixtures: `(name, minutes before now, cents, currency, category)`.
const TRANSACTIONS: [(&str, i64, i64, &str, Category); 8] = [
    ("Albert Heijn", 35, -4_219, "EUR", Category::Groceries),
    ("NS Reizigers", 190, -1_280, "EUR", Category::Transport),
    ("Salary Acme B.V.", 60 * 20, 385_000, "EUR", Category::Salary),
    ("Pret A Manger", 60 * 26, -745, "GBP", Category::Dining),
    ("Netflix", 60 * 50, -1_399, "EUR", Category::Entertainment),
    ("Vattenfall", 60 * 24 * 4, -11_250, "EUR", Category::Utilities),
    ("Transfer to Savings", 60 * 24 * 6, -50_000, "EUR", Category::Transfer),
    ("Apple Store", 60 * 24 * 9, -129_900, "USD", Category::Shopping),
];

/// Builds the mock accounts.
pub fn accounts() -> Vec<AccountRecord> {
    ACCOUNTS
        .iter()
        .zip(1u128..)
        .map(|(&(name, currency, cents), id)| AccountRecord {
            id: AccountId::from_u128(id),
            name: name.to_string(),
            currency: CurrencyCode::new(currency),
            balance: Decimal::new(cents, 2),
        })
        .collect()
}

/// Builds the mock transactions, dated backwards from `now`.
pub fn transactions(now: DateTime<Utc>) -> Vec<TransactionRecord> {
    TRANSACTIONS
        .iter()
        .zip(1u128..)
        .map(
            |(&(name, minutes_ago, cents, currency, category), id)| TransactionRecord {
                id: TransactionId::from_u128(id),
                name: name.to_string(),
                date: TemporalPoint::from(now - Duration::minutes(minutes_ago)),
                amount: Decimal::new(cents, 2),
                currency: CurrencyCode::new(currency),
                category,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_accounts_have_unique_ids() {
        let accounts = accounts();
        let mut ids: Vec<_> = accounts.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ACCOUNTS.len());
    }

    #[test]
    fn test_transactions_are_in_the_past() {
        let now = Utc.with_ymd_and_hms(2024, 3, 12, 18, 0, 0).unwrap();
        for tx in transactions(now) {
            assert!(tx.date.as_utc() < now, "{} is not in the past", tx.name);
        }
    }
}
