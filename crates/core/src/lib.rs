//! Core display logic for Bankdash.
//!
//! This crate contains pure formatting and conversion logic with ZERO I/O.
//! View components call into it and render the strings it returns.
//!
//! # Modules
//!
//! - `currency` - Symbol table, exchange-rate table, formatting and conversion
//! - `datetime` - Relative date labels ("Today", "Yesterday", "03 Mar")
//! - `category` - Transaction category labels and icons
//! - `dashboard` - Account and transaction view models

pub mod category;
pub mod currency;
pub mod dashboard;
pub mod datetime;
