//! UI components for the employee directory
//!
//! These modules extend the `App` struct with rendering methods.
//! They are imported for their side effects (impl blocks).

mod banner;
mod form;
mod header;
mod table;
