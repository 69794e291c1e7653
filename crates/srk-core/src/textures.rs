//! Texture descriptor extraction
//!
//! The texture property payload is attacker-influenced whenever its signature
//! does not verify, so the shape of the decoded JSON is never trusted: every
//! field is confirmed present before it is dereferenced, and anything
//! malformed degrades to "no skin" rather than an error.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;
use url::Url;

use crate::constant::SLIM_MODEL;
use crate::profile::ProfileProperty;

/// The decoded skin location and model variant of a texture property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDescriptor {
    /// Where the skin image is hosted.
    pub skin_url: Url,
    /// True for the slim-armed model, false for classic.
    pub slim: bool,
}

impl TextureDescriptor {
    /// Decode a texture property into a descriptor.
    ///
    /// Returns `None` when the payload is unusable: malformed base64 or
    /// JSON, any of `textures`, `textures.SKIN`, or `textures.SKIN.url`
    /// missing, an empty or non-string `url`, or a `url` that does not
    /// parse. Absence and malformation are deliberately indistinguishable;
    /// callers treat both as "no skin".
    pub fn from_property(property: &ProfileProperty) -> Option<Self> {
        let decoded = BASE64.decode(&property.value).ok()?;
        let root: Value = serde_json::from_slice(&decoded).ok()?;

        // Each `?` confirms one level before the next is dereferenced, so
        // an absent parent short-circuits without touching its children.
        let skin = root.get("textures")?.get("SKIN")?;
        let url = skin.get("url")?.as_str()?;
        if url.is_empty() {
            return None;
        }

        let slim = skin
            .get("metadata")
            .and_then(|metadata| metadata.get("model"))
            .and_then(Value::as_str)
            == Some(SLIM_MODEL);

        Some(Self {
            skin_url: Url::parse(url).ok()?,
            slim,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{encode_textures, texture_value};
    use serde_json::json;

    fn property(value: String) -> ProfileProperty {
        ProfileProperty {
            value,
            signature: None,
        }
    }

    fn extract(value: String) -> Option<TextureDescriptor> {
        TextureDescriptor::from_property(&property(value))
    }

    #[test]
    fn extracts_url_and_defaults_to_classic() {
        let descriptor = extract(texture_value("https://textures.example/skin.png")).unwrap();
        assert_eq!(
            descriptor.skin_url.as_str(),
            "https://textures.example/skin.png"
        );
        assert!(!descriptor.slim);
    }

    #[test]
    fn detects_slim_model() {
        let value = encode_textures(json!({
            "textures": {
                "SKIN": {
                    "url": "https://textures.example/skin.png",
                    "metadata": { "model": "slim" }
                }
            }
        }));
        assert!(extract(value).unwrap().slim);
    }

    #[test]
    fn explicit_classic_model_is_not_slim() {
        let value = encode_textures(json!({
            "textures": {
                "SKIN": {
                    "url": "https://textures.example/skin.png",
                    "metadata": { "model": "classic" }
                }
            }
        }));
        assert!(!extract(value).unwrap().slim);
    }

    #[test]
    fn metadata_without_model_is_not_slim() {
        let value = encode_textures(json!({
            "textures": {
                "SKIN": {
                    "url": "https://textures.example/skin.png",
                    "metadata": {}
                }
            }
        }));
        assert!(!extract(value).unwrap().slim);
    }

    #[test]
    fn missing_textures_object_yields_none() {
        assert!(extract(encode_textures(json!({}))).is_none());
    }

    #[test]
    fn missing_skin_object_yields_none() {
        assert!(extract(encode_textures(json!({ "textures": {} }))).is_none());
    }

    #[test]
    fn missing_url_field_yields_none() {
        assert!(extract(encode_textures(json!({ "textures": { "SKIN": {} } }))).is_none());
    }

    #[test]
    fn empty_url_yields_none() {
        let value = encode_textures(json!({ "textures": { "SKIN": { "url": "" } } }));
        assert!(extract(value).is_none());
    }

    #[test]
    fn non_string_url_yields_none() {
        let value = encode_textures(json!({ "textures": { "SKIN": { "url": 7 } } }));
        assert!(extract(value).is_none());
    }

    #[test]
    fn unparseable_url_yields_none() {
        let value = encode_textures(json!({ "textures": { "SKIN": { "url": "not a url" } } }));
        assert!(extract(value).is_none());
    }

    #[test]
    fn malformed_base64_yields_none() {
        assert!(extract("!!! not base64 !!!".to_string()).is_none());
    }

    #[test]
    fn malformed_json_yields_none() {
        assert!(extract(BASE64.encode("{ not json")).is_none());
    }
}
