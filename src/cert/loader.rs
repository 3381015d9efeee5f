//! Certificate and key loading from PEM files.
//!
//! This module reads back the artifacts the generator writes, for
//! inspection or for wiring them into a local TLS server config.

use crate::crypto::rsa::private_key_from_encrypted_pem;
use crate::error::{DevcertError, Result};
use openssl::pkey::{PKey, Private};
use openssl::x509::X509;
use std::fs;
use std::path::Path;

/// Load an X.509 certificate from a PEM file.
///
/// # Example
///
/// ```rust,no_run
/// use devcert::cert::loader::load_certificate;
///
/// # fn example() -> devcert::error::Result<()> {
/// let cert = load_certificate("server-certificate.pem")?;
/// println!("serial: {:?}", cert.serial_number().to_bn());
/// # Ok(())
/// # }
/// ```
pub fn load_certificate(path: impl AsRef<Path>) -> Result<X509> {
    let pem = fs::read(path.as_ref())?;
    X509::from_pem(&pem).map_err(|e| {
        DevcertError::InvalidPem(format!(
            "{} is not a PEM certificate: {}",
            path.as_ref().display(),
            e
        ))
    })
}

/// Load and decrypt an RSA private key from an encrypted PEM file.
///
/// # Example
///
/// ```rust,no_run
/// use devcert::cert::loader::load_private_key;
///
/// # fn example() -> devcert::error::Result<()> {
/// let key = load_private_key("server-key.pem", b"passphrase")?;
/// assert_eq!(key.bits(), 2048);
/// # Ok(())
/// # }
/// ```
pub fn load_private_key(path: impl AsRef<Path>, passphrase: &[u8]) -> Result<PKey<Private>> {
    let pem = fs::read(path.as_ref())?;
    private_key_from_encrypted_pem(&pem, passphrase)
}
