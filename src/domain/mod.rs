//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, scale values, errors)
//! - `sheet` - The problem solver sheet: model, list editors, wizard, derived views

pub mod foundation;
pub mod sheet;
