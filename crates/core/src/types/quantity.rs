//! Transaction quantity type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The quantity is zero.
    #[error("quantity must be greater than zero")]
    Zero,
}

/// A stock transaction quantity.
///
/// Every stock movement transfers a strictly positive whole number of
/// units; zero-quantity transactions are rejected at construction so the
/// rest of the system never has to re-check.
///
/// ## Examples
///
/// ```
/// use stockbook_core::Quantity;
///
/// assert!(Quantity::new(3).is_ok());
/// assert!(Quantity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Create a `Quantity` from a unit count.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Zero`] if `units` is zero.
    pub const fn new(units: u32) -> Result<Self, QuantityError> {
        if units == 0 {
            return Err(QuantityError::Zero);
        }
        Ok(Self(units))
    }

    /// Returns the number of units.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(units: u32) -> Result<Self, Self::Error> {
        Self::new(units)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}
