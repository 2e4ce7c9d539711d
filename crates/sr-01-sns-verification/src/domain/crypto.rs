//! # RSA Verification
//!
//! Pure cryptographic checks: no I/O.
//!
//! ## Scheme
//!
//! - RSASSA-PKCS1-v1_5 over the canonical string bytes
//! - SHA-1 for signature version 1 (`sha1WithRSAEncryption`), SHA-256 for 2
//! - The public key is taken from the first (leaf) certificate in the PEM
//!   body. No chain building, no revocation.

use super::entities::SignatureDigest;
use super::errors::VerificationError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::pkcs8::DecodePublicKey;
use rsa::signature::Verifier;
use rsa::RsaPublicKey;
use sha1::Sha1;
use sha2::Sha256;
use x509_cert::der::{DecodePem, Encode};
use x509_cert::Certificate;

const PEM_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const PEM_END: &str = "-----END CERTIFICATE-----";

// =============================================================================
// CERTIFICATE HANDLING
// =============================================================================

/// Return the first `CERTIFICATE` PEM block of `body`, boundaries included.
pub fn leaf_certificate_pem(body: &str) -> Option<&str> {
    let start = body.find(PEM_BEGIN)?;
    let end = start + body[start..].find(PEM_END)? + PEM_END.len();
    Some(&body[start..end])
}

/// Decode the leaf certificate in `body` and return its RSA public key.
pub fn public_key_from_pem(body: &str) -> Result<RsaPublicKey, VerificationError> {
    let pem = leaf_certificate_pem(body).ok_or(VerificationError::EmptyCertificate)?;

    // Decoder expects a terminated final line.
    let mut block = String::with_capacity(pem.len() + 1);
    block.push_str(pem);
    block.push('\n');

    let certificate = Certificate::from_pem(block.as_bytes())
        .map_err(|e| VerificationError::MalformedCertificate(e.to_string()))?;
    let spki = certificate
        .tbs_certificate
        .subject_public_key_info
        .to_der()
        .map_err(|e| VerificationError::MalformedCertificate(e.to_string()))?;

    RsaPublicKey::from_public_key_der(&spki)
        .map_err(|e| VerificationError::UnsupportedKey(e.to_string()))
}

// =============================================================================
// SIGNATURE CHECK
// =============================================================================

/// Decode the envelope's base64 `Signature`.
pub fn decode_signature(encoded: &str) -> Result<Vec<u8>, VerificationError> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Err(VerificationError::MalformedSignature(
            "empty signature".to_string(),
        ));
    }
    STANDARD
        .decode(encoded)
        .map_err(|e| VerificationError::MalformedSignature(e.to_string()))
}

/// Verify `signature` over `message` with `key`.
pub fn verify_rsa(
    key: &RsaPublicKey,
    digest: SignatureDigest,
    message: &[u8],
    signature: &[u8],
) -> Result<(), VerificationError> {
    let signature = Signature::try_from(signature)
        .map_err(|e| VerificationError::MalformedSignature(e.to_string()))?;

    let outcome = match digest {
        SignatureDigest::Sha1 => VerifyingKey::<Sha1>::new(key.clone()).verify(message, &signature),
        SignatureDigest::Sha256 => {
            VerifyingKey::<Sha256>::new(key.clone()).verify(message, &signature)
        }
    };

    outcome.map_err(|_| VerificationError::SignatureMismatch)
}

// =============================================================================
// TESTS
// =============================================================================
