//! Common value types used across the application.

pub mod id;
pub mod money;
pub mod temporal;

#[cfg(test)]
mod id_tests;

pub use id::*;
pub use money::{Currency, CurrencyCode, Money};
pub use temporal::TemporalPoint;
