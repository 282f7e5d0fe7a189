//! Shared helpers.
//!
//! - [`path`]: filesystem normalization and site route helpers
//! - [`plural`]: count formatting for log output

pub mod path;
mod plural;

pub use plural::plural_count;
