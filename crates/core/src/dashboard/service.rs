//! Dashboard view-model assembly.

use bankdash_shared::types::{AccountId, CurrencyCode};
use bankdash_shared::{AppResult, DisplayConfig};
use rust_decimal::Decimal;

use super::types::{
    AccountRecord, AccountView, DashboardSummary, TransactionRecord, TransactionView,
};
use crate::currency::{CurrencyService, ReferenceTables};
use crate::datetime::{DisplayTimeZone, RenderClock};

/// Turns account and transaction records into display strings.
#[derive(Debug, Clone)]
pub struct DashboardService<'a> {
    currency: CurrencyService<'a>,
    display_currency: CurrencyCode,
    zone: DisplayTimeZone,
}

impl<'a> DashboardService<'a> {
    /// Creates a service with an explicit display currency and zone.
    #[must_use]
    pub fn new(
        currency: CurrencyService<'a>,
        display_currency: CurrencyCode,
        zone: DisplayTimeZone,
    ) -> Self {
        Self {
            currency,
            display_currency,
            zone,
        }
    }

    /// Builds a service from display configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` for an unknown time zone name.
    pub fn from_config(tables: &'a ReferenceTables, config: &DisplayConfig) -> AppResult<Self> {
        let zone = DisplayTimeZone::parse(config.timezone.as_deref())?;
        let currency = CurrencyService::new(tables).with_rounding(config.rounding);
        Ok(Self::new(currency, config.currency.clone(), zone))
    }

    /// The display currency.
    #[must_use]
    pub fn display_currency(&self) -> &CurrencyCode {
        &self.display_currency
    }

    /// The zone dates are labelled in.
    #[must_use]
    pub const fn zone(&self) -> DisplayTimeZone {
        self.zone
    }

    /// Builds one account card.
    #[must_use]
    pub fn account_view(&self, account: &AccountRecord) -> AccountView {
        let display = self.display_currency.as_str();
        let converted_label = (account.currency != self.display_currency)
            .then(|| {
                self.currency
                    .try_exchange(account.balance, account.currency.as_str(), display)
                    .ok()
            })
            .flatten()
            .map(|amount| self.currency.format_currency(amount, Some(display)));

        AccountView {
            id: account.id,
            name: account.name.clone(),
            balance_label: self.currency.format_money(&account.balance()),
            converted_label,
        }
    }

    /// Builds one transaction list item against the given clock.
    #[must_use]
    pub fn transaction_view(&self, tx: &TransactionRecord, clock: &RenderClock) -> TransactionView {
        let amount = tx.amount();
        TransactionView {
            id: tx.id,
            name: tx.name.clone(),
            date_label: clock.format(&tx.date),
            bucket: clock.bucket(&tx.date),
            amount_label: self.currency.format_money(&amount),
            category_label: tx.category.label(),
            icon: tx.category.icon(),
            is_debit: amount.is_negative(),
        }
    }

    /// Sums all balances in the display currency.
    ///
    /// Returns the total and the accounts that could not be converted.
    /// Those are excluded rather than counted as zero. An account whose
    /// converted balance would overflow the running total is excluded too.
    #[must_use]
    pub fn total_balance(&self, accounts: &[AccountRecord]) -> (Decimal, Vec<AccountId>) {
        let target = self.display_currency.as_str();
        let mut total = Decimal::ZERO;
        let mut unconverted = Vec::new();

        for account in accounts {
            let converted = match self
                .currency
                .try_exchange(account.balance, account.currency.as_str(), target)
            {
                Ok(amount) => amount,
                Err(err) => {
                    tracing::warn!(
                        account = %account.id,
                        error = %err,
                        "account excluded from total balance"
                    );
                    unconverted.push(account.id);
                    continue;
                }
            };

            match total.checked_add(converted) {
                Some(sum) => total = sum,
                None => {
                    tracing::warn!(
                        account = %account.id,
                        %converted,
                        "total balance overflow, account excluded"
                    );
                    unconverted.push(account.id);
                }
            }
        }

        if !unconverted.is_empty() {
            tracing::debug!(
                display_currency = self.display_currency.as_str(),
                count = unconverted.len(),
                "total balance is partial"
            );
        }

        (total, unconverted)
    }

    /// Renders the dashboard against a freshly captured clock.
    #[must_use]
    pub fn render(
        &self,
        accounts: &[AccountRecord],
        transactions: &[TransactionRecord],
    ) -> DashboardSummary {
        self.render_at(accounts, transactions, &RenderClock::capture(self.zone))
    }

    /// Renders the dashboard, labelling every date against `clock`.
    #[must_use]
    pub fn render_at(
        &self,
        accounts: &[AccountRecord],
        transactions: &[TransactionRecord],
        clock: &RenderClock,
    ) -> DashboardSummary {
        let mut ordered: Vec<&TransactionRecord> = transactions.iter().collect();
        ordered.sort_by(|a, b| b.date.cmp(&a.date));

        let (total, unconverted_accounts) = self.total_balance(accounts);

        tracing::debug!(
            accounts = accounts.len(),
            transactions = transactions.len(),
            now = %clock.now(),
            "rendering dashboard"
        );

        DashboardSummary {
            display_currency: self.display_currency.clone(),
            accounts: accounts.iter().map(|a| self.account_view(a)).collect(),
            transactions: ordered
                .into_iter()
                .map(|tx| self.transaction_view(tx, clock))
                .collect(),
            total_balance_label: self
                .currency
                .format_currency(total, Some(self.display_currency.as_str())),
            unconverted_accounts,
        }
    }
}
