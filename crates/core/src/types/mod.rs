//! Core types for Stockbook.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod direction;
pub mod id;
pub mod price;
pub mod quantity;

pub use direction::Direction;
pub use id::*;
pub use price::{Price, PriceError};
pub use quantity::{Quantity, QuantityError};
