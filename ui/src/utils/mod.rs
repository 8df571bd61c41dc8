//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped browser console logging
//! - **validation**: per-field CSS helpers for validation state

pub mod console_macros;
pub mod validation;

pub use validation::*;
