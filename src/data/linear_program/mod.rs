//! # Representing linear programs
//!
//! A linear program in general form may contain any type of constraint. Solving it results in a
//! `Solution` for the variables of that general form.
pub mod elements;
pub mod general_form;
pub mod solution;
