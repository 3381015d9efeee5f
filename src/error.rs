//! Error types for the devcert library.
//!
//! This module defines all error types used throughout the library.
//! All errors implement `std::error::Error` and carry enough context
//! to explain what failed.

use thiserror::Error;

/// The main error type for devcert operations.
///
/// This enum covers all possible errors that can occur during key
/// generation, certificate construction, and file output.
#[derive(Error, Debug)]
pub enum DevcertError {
    /// An OpenSSL primitive failed (key generation, signing, PEM codec)
    #[error("OpenSSL error: {0}")]
    Openssl(#[from] openssl::error::ErrorStack),

    /// Filesystem I/O error while reading or writing a PEM file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A loaded PEM file did not contain the expected content
    #[error("Invalid PEM content: {0}")]
    InvalidPem(String),
}

/// A specialized Result type for devcert operations.
pub type Result<T> = std::result::Result<T, DevcertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DevcertError::InvalidPem("missing certificate".to_string());
        assert_eq!(err.to_string(), "Invalid PEM content: missing certificate");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DevcertError = io_err.into();
        assert!(matches!(err, DevcertError::Io(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DevcertError>();
    }
}
