//! SRK errors

/// SRK error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A trust anchor public key failed to decode from its DER encoding.
    ///
    /// For the embedded session key this is a fatal build defect surfaced
    /// once at initialization, never per verification call.
    #[error("invalid trust anchor public key: {0}")]
    InvalidAnchorKey(#[from] rsa::pkcs8::spki::Error),
}
