//! End-to-end credential generation.
//!
//! This module composes the key and certificate primitives into the one
//! operation this crate exists for: write a fresh encrypted server key
//! and a matching self-signed certificate as PEM files. Both files are
//! overwritten unconditionally on every run.

use crate::cert::builder::{build_self_signed, certificate_to_pem};
use crate::crypto::rsa::{generate_rsa_keypair, private_key_to_encrypted_pem};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Output file name for the encrypted private key.
pub const KEY_FILE: &str = "server-key.pem";

/// Output file name for the self-signed certificate.
pub const CERT_FILE: &str = "server-certificate.pem";

/// Passphrase protecting the private key file.
///
/// Fixed on purpose: these credentials are for local TLS testing only
/// and the consuming server config carries the same literal.
pub const PASSPHRASE: &[u8] = b"passphrase";

/// Organization name used as both subject and issuer.
pub const ORG_NAME: &str = "Marky Mark and the Funky Bunch";

/// DNS name placed in the certificate's Subject Alternative Name.
pub const SAN_DNS: &str = "localhost";

/// Certificate validity in days.
pub const VALIDITY_DAYS: u32 = 365;

/// Paths of the two files written by a generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPaths {
    pub key: PathBuf,
    pub certificate: PathBuf,
}

/// Generate server credentials into the given directory.
///
/// Writes `server-key.pem` (encrypted PKCS#1 PEM) and
/// `server-certificate.pem` (self-signed, SAN `localhost`), overwriting
/// any existing files of those names.
///
/// # Example
///
/// ```rust,no_run
/// use devcert::generator::generate_into;
///
/// # fn example() -> devcert::error::Result<()> {
/// let paths = generate_into(std::path::Path::new("/tmp"))?;
/// assert!(paths.key.ends_with("server-key.pem"));
/// # Ok(())
/// # }
/// ```
pub fn generate_into(dir: &Path) -> Result<GeneratedPaths> {
    let key = generate_rsa_keypair()?;

    let key_path = dir.join(KEY_FILE);
    fs::write(&key_path, private_key_to_encrypted_pem(&key, PASSPHRASE)?)?;

    let cert = build_self_signed(&key, ORG_NAME, SAN_DNS, VALIDITY_DAYS)?;

    let cert_path = dir.join(CERT_FILE);
    fs::write(&cert_path, certificate_to_pem(&cert)?)?;

    Ok(GeneratedPaths {
        key: key_path,
        certificate: cert_path,
    })
}

/// Generate server credentials into the current working directory.
pub fn generate() -> Result<GeneratedPaths> {
    generate_into(Path::new("."))
}
