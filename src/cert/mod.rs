//! Certificate operations module.
//!
//! Self-signed X.509 certificate construction and PEM loading.

pub mod builder;
pub mod loader;
