//! Prelude module for the elapsed_days crate.
//!
//! Re-exports the derive macros shared by the date and error types.

pub use derive_more::Display;
