//! SRK public prelude
//!
//! The types a consumer needs to run a verification pass and act on its
//! outcome. Transport implementations (e.g. `srk-http`) are imported
//! separately.

/// Trust anchor for provider signatures
pub use crate::anchor::TrustAnchor;
/// SRK error type
pub use crate::error::Error;
/// Profile snapshot types
pub use crate::profile::{GameProfile, ProfileProperty};
/// Orchestrator and its outcome surface
pub use crate::restorer::{RestoreOutcome, SkinRestorer};
/// Skin validation results and causes
pub use crate::skin::{SkinError, SkinLayout, ValidatedSkin};
/// Decoded texture descriptor
pub use crate::textures::TextureDescriptor;
/// Transport seam
pub use crate::transport::{SkinTransport, TransportError};
