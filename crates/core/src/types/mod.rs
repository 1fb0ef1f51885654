//! Core types for the Golden Fork storefront widget.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;

pub use id::*;
pub use price::{Price, PriceParseError};
pub use product::Product;
