//! devcert: self-signed TLS credentials for local development
//!
//! This library generates an RSA private key and a matching self-signed
//! X.509 certificate suitable for a local TLS test server (e.g. nginx).
//! It provides:
//!
//! - RSA key pair generation with passphrase-encrypted PKCS#1 PEM output
//! - Self-signed certificate construction with a SAN DNS entry
//! - A one-call generator that writes both artifacts to disk as PEM files
//!
//! # Architecture
//!
//! The library follows a functional style where the end-to-end generator
//! is composed from smaller, testable functions. All operations return
//! `Result` types - no `unwrap()` or panic outside of tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use devcert::error::Result;
//!
//! fn example() -> Result<()> {
//!     // Write server-key.pem and server-certificate.pem into /tmp
//!     let paths = devcert::generator::generate_into(std::path::Path::new("/tmp"))?;
//!     println!("Wrote certificate to {}", paths.certificate.display());
//!     Ok(())
//! }
//! ```

pub mod cert;
pub mod crypto;
pub mod error;
pub mod generator;

// Re-export commonly used types
pub use error::{DevcertError, Result};
