//! Dashboard view models.
//!
//! This module turns raw records into display strings:
//! - Account cards with native and converted balances
//! - Transaction list items with relative dates and category icons
//! - A total balance in the display currency

pub mod service;
pub mod types;


pub use service::DashboardService;
pub use types::*;
