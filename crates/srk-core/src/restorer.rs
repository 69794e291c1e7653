//! Restoration orchestrator
//!
//! Single-pass classification of a profile's skin texture: extract the
//! descriptor, check the provider signature, and only for untrusted textures
//! fetch and validate the image. Every pass terminates in exactly one
//! [`RestoreOutcome`]; no state is revisited and no I/O happens here beyond
//! delegating to the transport.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::anchor::TrustAnchor;
use crate::constant::TEXTURES_PROPERTY;
use crate::profile::{GameProfile, ProfileProperty};
use crate::skin::{self, SkinError, ValidatedSkin};
use crate::textures::TextureDescriptor;
use crate::transport::SkinTransport;

/// Classification of a profile's skin texture, produced exactly once per
/// [`SkinRestorer::restore`] call.
#[derive(Debug)]
pub enum RestoreOutcome {
    /// The profile carries no texture property, or the property payload does
    /// not have the required shape.
    NoSkin,
    /// The property signature verifies against the trust anchor; the texture
    /// is trusted as-is and the skin is never fetched.
    SignatureValid,
    /// The signature failed and the fetched image is not a structurally
    /// valid skin.
    BadSkin(SkinError),
    /// The signature failed but the image is structurally valid. Repair is
    /// not performed yet; this terminal state carries what the repair stage
    /// will need.
    PendingRestoration(ValidatedSkin),
}

/// Verifies one profile's skin texture against a trust anchor and, for
/// untrusted textures, fetches and validates the raw image.
///
/// The profile is snapshotted at construction: mutating the caller's copy
/// after [`SkinRestorer::new`] has no effect on a pass in flight.
pub struct SkinRestorer<'a, T> {
    transport: T,
    anchor: &'a TrustAnchor,
    profile: GameProfile,
}

impl<T: SkinTransport> SkinRestorer<'static, T> {
    /// Create a restorer for `profile` verifying against the embedded
    /// session key.
    pub fn new(transport: T, profile: &GameProfile) -> Self {
        Self::with_anchor(transport, TrustAnchor::session(), profile)
    }
}

impl<'a, T: SkinTransport> SkinRestorer<'a, T> {
    /// Create a restorer verifying against a custom trust anchor.
    pub fn with_anchor(transport: T, anchor: &'a TrustAnchor, profile: &GameProfile) -> Self {
        Self {
            transport,
            anchor,
            profile: profile.clone(),
        }
    }

    /// Run one verification pass and classify the texture.
    pub fn restore(&self) -> RestoreOutcome {
        let Some(property) = self.profile.property(TEXTURES_PROPERTY) else {
            tracing::debug!(
                target: "srk_core::restorer",
                profile = %self.profile.name,
                "profile has no textures property"
            );
            return RestoreOutcome::NoSkin;
        };

        let Some(descriptor) = TextureDescriptor::from_property(property) else {
            tracing::debug!(
                target: "srk_core::restorer",
                profile = %self.profile.name,
                "texture payload is unusable"
            );
            return RestoreOutcome::NoSkin;
        };

        if self.signature_valid(property) {
            tracing::debug!(
                target: "srk_core::restorer",
                profile = %self.profile.name,
                "texture signature is trusted"
            );
            return RestoreOutcome::SignatureValid;
        }

        match skin::fetch_and_validate(&self.transport, &descriptor.skin_url, descriptor.slim) {
            Ok(validated) => RestoreOutcome::PendingRestoration(validated),
            Err(cause) => {
                tracing::debug!(
                    target: "srk_core::restorer",
                    profile = %self.profile.name,
                    %cause,
                    "untrusted skin rejected"
                );
                RestoreOutcome::BadSkin(cause)
            }
        }
    }

    /// Signature check over the UTF-8 bytes of the *encoded* `value` string.
    ///
    /// A property without a signature, or whose signature is not valid
    /// base64, fails closed into the fetch path.
    fn signature_valid(&self, property: &ProfileProperty) -> bool {
        let Some(signature) = property.signature.as_deref() else {
            return false;
        };
        match BASE64.decode(signature) {
            Ok(raw) => self.anchor.verify(property.value.as_bytes(), &raw),
            Err(_) => false,
        }
    }
}
