//! Transaction category reference table.
//!
//! Maps each category to the label and icon key the view layer renders.
//! Unknown category names degrade to [`Category::Other`].

use serde::{Deserialize, Serialize};

/// Spending or income category attached to a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Supermarkets and food shopping.
    Groceries,
    /// Restaurants, cafés, takeaway.
    Dining,
    /// Public transport, fuel, taxis.
    Transport,
    /// Retail purchases.
    Shopping,
    /// Energy, water, phone, internet.
    Utilities,
    /// Streaming, cinema, events.
    Entertainment,
    /// Incoming salary.
    Salary,
    /// Transfers between accounts.
    Transfer,
    /// Pharmacy, doctor, insurance.
    Health,
    /// Anything unrecognized.
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 10] = [
        Self::Groceries,
        Self::Dining,
        Self::Transport,
        Self::Shopping,
        Self::Utilities,
        Self::Entertainment,
        Self::Salary,
        Self::Transfer,
        Self::Health,
        Self::Other,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Dining => "Dining",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Salary => "Salary",
            Self::Transfer => "Transfer",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }

    /// Icon key understood by the icon renderer.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Groceries => "shopping-cart",
            Self::Dining => "utensils",
            Self::Transport => "car",
            Self::Shopping => "shopping-bag",
            Self::Utilities => "zap",
            Self::Entertainment => "film",
            Self::Salary => "briefcase",
            Self::Transfer => "repeat",
            Self::Health => "heart",
            Self::Other => "circle",
        }
    }

    /// Parses a category name, case-insensitively. Never fails.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Self::Other)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
