//! # Traits
//!
//! The simplex method is defined over the ordered fields. The tableau in this crate is dense and
//! compares against a tolerance, so it is defined over floating point numbers instead of exact
//! fractions. The contracts that these traits imply can therefore only be kept approximately.
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::{Float, FromPrimitive};

/// Numbers the tableau can be computed with.
///
/// Automatically implemented for all types satisfying the trait's bounds, in particular `f64` and
/// `f32`.
pub trait OrderedField:
    Float +
    FromPrimitive +
    AddAssign +
    SubAssign +
    MulAssign +
    DivAssign +
    Sum +
    Debug +
    Display +
    Send +
    Sync +
    'static
{
    /// Convert a tolerance given as `f64` into this number type.
    ///
    /// Falls back to the machine epsilon of the type when the value can't be represented.
    fn tolerance(eps: f64) -> Self {
        Self::from_f64(eps).unwrap_or_else(Self::epsilon)
    }

    /// Whether this value is larger than `eps` in absolute value.
    fn is_significant(self, eps: Self) -> bool {
        self.abs() > eps
    }
}

impl<T> OrderedField for T
where
    T: Float + FromPrimitive + AddAssign + SubAssign + MulAssign + DivAssign + Sum + Debug + Display
        + Send + Sync + 'static,
{
}
