//! Record identifiers.
//!
//! Accounts and transactions get distinct wrapper types so a list item can
//! never be looked up with the other kind's key.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Builds the id from a fixed number, as mock data and fixtures do.
            #[must_use]
            pub const fn from_u128(value: u128) -> Self {
                Self(Uuid::from_u128(value))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

record_id!(
    /// Identifies a bank account card on the dashboard.
    AccountId
);

record_id!(
    /// Identifies one row of the recent-transactions list.
    TransactionId
);
