//! Currency symbols, display formatting, and static-rate exchange.

pub mod error;
pub mod service;
pub mod tables;

#[cfg(test)]
mod props;

pub use error::CurrencyError;
pub use service::{
    CurrencyService, DEFAULT_CURRENCY, DISPLAY_DECIMALS, calculate_exchange, format_currency,
};
pub use tables::ReferenceTables;
