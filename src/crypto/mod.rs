//! Cryptographic operations module.
//!
//! This module provides the key-level primitives for devcert:
//!
//! - RSA key pair generation
//! - Passphrase-based private key encryption in traditional PKCS#1 PEM
//!
//! # Example
//!
//! ```rust
//! use devcert::crypto::rsa::{
//!     generate_rsa_keypair, private_key_from_encrypted_pem, private_key_to_encrypted_pem,
//! };
//!
//! # fn example() -> devcert::error::Result<()> {
//! // Generate a key pair
//! let key = generate_rsa_keypair()?;
//!
//! // Encrypt the private key with a passphrase
//! let pem = private_key_to_encrypted_pem(&key, b"secret")?;
//!
//! // Decrypt it back
//! let decrypted = private_key_from_encrypted_pem(&pem, b"secret")?;
//! assert_eq!(key.public_key_to_pem()?, decrypted.public_key_to_pem()?);
//! # Ok(())
//! # }
//! ```

pub mod rsa;
