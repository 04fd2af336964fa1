//! Utility functions shared across layers.
//!
//! - [`sanitize`] - HTML sanitization for free-text fields

pub mod sanitize;
