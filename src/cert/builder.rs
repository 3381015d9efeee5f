//! Self-signed certificate construction.
//!
//! This module builds X.509v3 certificates where subject and issuer are
//! identical and the certificate is signed by its own key.

use crate::error::Result;
use openssl::asn1::{Asn1Integer, Asn1Time};
use openssl::bn::{BigNum, MsbOption};
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkey::{PKey, Private};
use openssl::x509::extension::SubjectAlternativeName;
use openssl::x509::{X509, X509Name};

/// Number of random bits in a generated serial number.
///
/// 159 bits keeps the serial positive within the 20-octet limit of
/// RFC 5280 section 4.1.2.2.
const SERIAL_BITS: i32 = 159;

/// Build a self-signed X.509v3 certificate for the given key.
///
/// The certificate carries a single Organization Name attribute as both
/// subject and issuer, a random serial, a validity window of
/// `validity_days` starting now, one non-critical SAN DNS entry, and a
/// SHA-256 signature made with `key`.
///
/// Both validity bounds take their own "now"; the windows of two
/// back-to-back builds may differ by under a second.
///
/// # Example
///
/// ```
/// use devcert::crypto::rsa::generate_rsa_keypair;
/// use devcert::cert::builder::build_self_signed;
///
/// # fn example() -> devcert::error::Result<()> {
/// let key = generate_rsa_keypair()?;
/// let cert = build_self_signed(&key, "Example Org", "localhost", 365)?;
/// assert!(cert.verify(&key)?);
/// # Ok(())
/// # }
/// ```
pub fn build_self_signed(
    key: &PKey<Private>,
    org_name: &str,
    dns_name: &str,
    validity_days: u32,
) -> Result<X509> {
    let name = organization_name(org_name)?;
    let serial = random_serial()?;

    let mut builder = X509::builder()?;
    builder.set_version(2)?; // X.509v3
    builder.set_serial_number(&serial)?;
    builder.set_subject_name(&name)?;
    builder.set_issuer_name(&name)?;
    builder.set_pubkey(key)?;
    let not_before = Asn1Time::days_from_now(0)?;
    let not_after = Asn1Time::days_from_now(validity_days)?;
    builder.set_not_before(&not_before)?;
    builder.set_not_after(&not_after)?;

    // Non-critical by default
    let san = SubjectAlternativeName::new()
        .dns(dns_name)
        .build(&builder.x509v3_context(None, None))?;
    builder.append_extension(san)?;

    builder.sign(key, MessageDigest::sha256())?;

    Ok(builder.build())
}

/// Serialize a certificate to PEM format.
pub fn certificate_to_pem(cert: &X509) -> Result<Vec<u8>> {
    Ok(cert.to_pem()?)
}

/// Build an X.509 name with a single Organization Name attribute.
fn organization_name(org: &str) -> Result<X509Name> {
    let mut name = X509Name::builder()?;
    name.append_entry_by_nid(Nid::ORGANIZATIONNAME, org)?;
    Ok(name.build())
}

/// Generate a cryptographically random, positive serial number.
fn random_serial() -> Result<Asn1Integer> {
    let mut bn = BigNum::new()?;
    bn.rand(SERIAL_BITS, MsbOption::MAYBE_ZERO, false)?;
    Ok(bn.to_asn1_integer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::rsa::generate_rsa_keypair;

    #[test]
    fn test_build_self_signed_verifies_with_own_key() {
        let key = generate_rsa_keypair().unwrap();
        let cert = build_self_signed(&key, "Test Org", "localhost", 365).unwrap();

        assert!(cert.verify(&key).unwrap());
    }

    #[test]
    fn test_subject_equals_issuer() {
        let key = generate_rsa_keypair().unwrap();
        let cert = build_self_signed(&key, "Test Org", "localhost", 365).unwrap();

        assert_eq!(
            cert.subject_name().to_der().unwrap(),
            cert.issuer_name().to_der().unwrap()
        );
    }

    #[test]
    fn test_subject_has_single_organization_entry() {
        let key = generate_rsa_keypair().unwrap();
        let cert = build_self_signed(&key, "Test Org", "localhost", 365).unwrap();

        let entries: Vec<_> = cert.subject_name().entries().collect();
        assert_eq!(entries.len(), 1);

        let org = cert
            .subject_name()
            .entries_by_nid(Nid::ORGANIZATIONNAME)
            .next()
            .unwrap();
        assert_eq!(org.data().as_utf8().unwrap().to_string(), "Test Org");
    }

    #[test]
    fn test_san_contains_single_dns_entry() {
        let key = generate_rsa_keypair().unwrap();
        let cert = build_self_signed(&key, "Test Org", "localhost", 365).unwrap();

        let sans = cert.subject_alt_names().unwrap();
        assert_eq!(sans.len(), 1);
        assert_eq!(sans[0].dnsname(), Some("localhost"));
    }

    #[test]
    fn test_validity_window_matches_requested_days() {
        let key = generate_rsa_keypair().unwrap();
        let cert = build_self_signed(&key, "Test Org", "localhost", 365).unwrap();

        let diff = cert.not_before().diff(cert.not_after()).unwrap();
        assert_eq!(diff.days, 365);
        // Each bound captures its own "now"
        assert!(diff.secs <= 1);
    }

    #[test]
    fn test_embedded_public_key_matches_signing_key() {
        let key = generate_rsa_keypair().unwrap();
        let cert = build_self_signed(&key, "Test Org", "localhost", 365).unwrap();

        assert_eq!(
            cert.public_key().unwrap().public_key_to_pem().unwrap(),
            key.public_key_to_pem().unwrap()
        );
    }

    #[test]
    fn test_serial_numbers_differ_across_builds() {
        let key = generate_rsa_keypair().unwrap();
        let cert1 = build_self_signed(&key, "Test Org", "localhost", 365).unwrap();
        let cert2 = build_self_signed(&key, "Test Org", "localhost", 365).unwrap();

        let serial1 = cert1.serial_number().to_bn().unwrap();
        let serial2 = cert2.serial_number().to_bn().unwrap();
        assert_ne!(serial1, serial2);
    }

    #[test]
    fn test_certificate_to_pem_format() {
        let key = generate_rsa_keypair().unwrap();
        let cert = build_self_signed(&key, "Test Org", "localhost", 365).unwrap();

        let pem = String::from_utf8(certificate_to_pem(&cert).unwrap()).unwrap();
        assert!(pem.starts_with("-----BEGIN CERTIFICATE-----"));
        assert!(pem.trim_end().ends_with("-----END CERTIFICATE-----"));
    }
}
