//! Session signature trust anchor
//!
//! One fixed public key, compiled into the binary, answers "did the identity
//! provider sign this payload?". Only the verification predicate is exposed;
//! the key material itself never leaves this module.

use std::sync::LazyLock;

use rsa::RsaPublicKey;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::pkcs8::DecodePublicKey;
use rsa::signature::Verifier;
use sha1::Sha1;

use crate::constant::SESSION_PUBLIC_KEY_DER;
use crate::error::Error;

static SESSION_ANCHOR: LazyLock<TrustAnchor> = LazyLock::new(|| {
    TrustAnchor::from_spki_der(SESSION_PUBLIC_KEY_DER)
        .expect("embedded session public key failed to decode")
});

/// Verifies provider-issued property signatures against a fixed RSA key.
///
/// The key is read-only after construction, so [`TrustAnchor::verify`] can be
/// called concurrently from any number of threads without locking.
pub struct TrustAnchor {
    key: VerifyingKey<Sha1>,
}

impl TrustAnchor {
    /// The process-wide anchor holding the embedded session key.
    ///
    /// The key is decoded exactly once, on first use. Decode failure means
    /// the compiled-in key material is corrupt and panics immediately; it
    /// cannot occur in a correct build and is never raised per call.
    pub fn session() -> &'static TrustAnchor {
        &SESSION_ANCHOR
    }

    /// Build an anchor from X.509 `SubjectPublicKeyInfo` DER bytes.
    ///
    /// Deployments running their own signing service verify against that
    /// service's key instead of the embedded one.
    pub fn from_spki_der(der: &[u8]) -> Result<Self, Error> {
        let key = RsaPublicKey::from_public_key_der(der)?;
        Ok(Self {
            key: VerifyingKey::new(key),
        })
    }

    /// Check `signature` over `payload` using SHA1 with RSA PKCS#1 v1.5.
    ///
    /// Fails closed: malformed signature bytes count as a failed
    /// verification, never a panic or an error.
    pub fn verify(&self, payload: &[u8], signature: &[u8]) -> bool {
        match Signature::try_from(signature) {
            Ok(signature) => self.key.verify(payload, &signature).is_ok(),
            Err(_) => false,
        }
    }
}
