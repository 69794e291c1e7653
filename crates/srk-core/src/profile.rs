//! Game profile snapshots
//!
//! The restorer never works on a caller's live profile object: it clones the
//! profile at entry so a concurrent mutation on the caller's side cannot race
//! a verification pass. These types are plain values for exactly that reason.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, provider-signed property attached to a game profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProperty {
    /// Opaque base64 payload. For the textures property this decodes to a
    /// UTF-8 JSON document describing the skin.
    pub value: String,
    /// Base64 RSA signature computed over the UTF-8 bytes of the *encoded*
    /// `value` string (not the decoded JSON). Properties issued without a
    /// signature carry `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// An authenticated player's identity plus its signed properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProfile {
    /// Unique profile id assigned by the identity provider.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Properties keyed by name (e.g. `"textures"`).
    #[serde(default)]
    pub properties: HashMap<String, ProfileProperty>,
}

impl GameProfile {
    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&ProfileProperty> {
        self.properties.get(name)
    }
}
