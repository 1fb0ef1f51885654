//! Golden Fork Core - Shared types library.
//!
//! This crate provides common types used across the Golden Fork storefront
//! widget:
//! - `widget` - The cart widget engine
//! - `integration-tests` - End-to-end scenarios
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   `Product` catalog entity

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
