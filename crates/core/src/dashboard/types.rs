//! Dashboard record and view types.
//!
//! Records come from the data-producing side (mock data or a future API);
//! views carry only display strings for the view layer.

use bankdash_shared::types::{AccountId, CurrencyCode, Money, TemporalPoint, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::datetime::DateBucket;

/// An account as supplied to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Account ID.
    pub id: AccountId,
    /// Account name (e.g., "Main Checking").
    pub name: String,
    /// Currency the account is held in.
    pub currency: CurrencyCode,
    /// Current balance.
    pub balance: Decimal,
}

impl AccountRecord {
    /// Returns the balance as a [`Money`] value.
    #[must_use]
    pub fn balance(&self) -> Money {
        Money::new(self.balance, self.currency.clone())
    }
}

/// A transaction as supplied to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction ID.
    pub id: TransactionId,
    /// Counterparty or description.
    pub name: String,
    /// When the transaction happened.
    pub date: TemporalPoint,
    /// Signed amount; negative for money leaving the account.
    pub amount: Decimal,
    /// Currency of the amount.
    pub currency: CurrencyCode,
    /// Category.
    #[serde(default)]
    pub category: Category,
}

impl TransactionRecord {
    /// Returns the amount as a [`Money`] value.
    #[must_use]
    pub fn amount(&self) -> Money {
        Money::new(self.amount, self.currency.clone())
    }
}

/// Account card contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountView {
    /// Account ID.
    pub id: AccountId,
    /// Account name.
    pub name: String,
    /// Balance in the account's own currency, e.g. "£1200.00".
    pub balance_label: String,
    /// Balance in the display currency, when it differs and a rate exists.
    pub converted_label: Option<String>,
}

/// Transaction list item contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionView {
    /// Transaction ID.
    pub id: TransactionId,
    /// Counterparty or description.
    pub name: String,
    /// "Today, 14:30", "Yesterday, 09:05", or "03 Mar, 18:00".
    pub date_label: String,
    /// Relative-date bucket, for grouping.
    pub bucket: DateBucket,
    /// Amount in the transaction's own currency.
    pub amount_label: String,
    /// Category label.
    pub category_label: &'static str,
    /// Category icon key.
    pub icon: &'static str,
    /// True when money left the account.
    pub is_debit: bool,
}

/// Everything the dashboard page renders from the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// Display currency used for the total.
    pub display_currency: CurrencyCode,
    /// Account cards, in input order.
    pub accounts: Vec<AccountView>,
    /// Transaction list, newest first.
    pub transactions: Vec<TransactionView>,
    /// Sum of convertible balances in the display currency.
    pub total_balance_label: String,
    /// Accounts left out of the total: no rate to the display currency, or
    /// a converted balance that would overflow the sum.
    pub unconverted_accounts: Vec<AccountId>,
}
