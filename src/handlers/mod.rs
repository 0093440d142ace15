//! HTTP handlers for supplier creation and listing.

pub mod supplier;
pub use supplier::*;
