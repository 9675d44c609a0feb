//! # Number types
//!
//! Different data structures and different algorithms are defined over different spaces. This
//! module defines the space the tableau is computed in.
pub mod traits;
