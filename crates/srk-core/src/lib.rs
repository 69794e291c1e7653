//! Verification and restoration pipeline for signed game profile skin textures
//!
//! This crate sits on the trust boundary between an identity provider that
//! signs texture metadata and a consumer that must decide whether to accept a
//! skin as-is, reject it, or queue it for repair. One pass per profile:
//! extract the texture descriptor, verify its signature against the embedded
//! session key, and only for untrusted textures fetch the image through an
//! injected transport and validate its binary format.
//!
//! The crate performs no HTTP itself; production deployments pair it with
//! `srk-http`, which supplies the configured transport chain.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::bare_urls)]
#![doc = include_str!("../README.md")]

pub mod anchor;
mod constant;
pub mod error;
pub mod prelude;
pub mod profile;
pub mod restorer;
pub mod skin;
#[cfg(test)]
pub mod test_util;
pub mod textures;
pub mod transport;

pub use self::anchor::TrustAnchor;
pub use self::error::Error;
pub use self::profile::{GameProfile, ProfileProperty};
pub use self::restorer::{RestoreOutcome, SkinRestorer};
