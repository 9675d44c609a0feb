//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn general_form()`
//! * `fn cost()`
//! * `fn tableau_form()`, and variants like `fn infeasible_tableau_form()`
