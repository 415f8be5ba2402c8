//! Stockbook Core - Shared types library.
//!
//! This crate provides common types used across all Stockbook components:
//! - `inventory` - Inventory store, transaction engine, and metrics
//! - `integration-tests` - End-to-end test flows
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, quantities, prices,
//!   and transaction directions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
