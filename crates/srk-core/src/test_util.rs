//! Test helpers shared across the crate's unit tests.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::{ImageBuffer, ImageFormat, Rgba};
use rsa::RsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::EncodePublicKey;
use rsa::signature::{SignatureEncoding, Signer};
use sha1::Sha1;
use uuid::Uuid;

use crate::profile::{GameProfile, ProfileProperty};

/// Smaller than the embedded production key so test start-up stays fast.
const TEST_KEY_BITS: usize = 2048;

/// SHA1-with-RSA signer whose public half tests feed to a custom anchor.
pub(crate) struct TestSigner {
    signing_key: SigningKey<Sha1>,
    /// X.509 SubjectPublicKeyInfo DER of the matching public key.
    pub(crate) spki_der: Vec<u8>,
}

impl TestSigner {
    pub(crate) fn sign(&self, payload: &[u8]) -> Vec<u8> {
        self.signing_key.sign(payload).to_vec()
    }
}

/// Shared signer; the RSA keypair is generated once per test run.
pub(crate) fn test_signer() -> &'static TestSigner {
    static SIGNER: LazyLock<TestSigner> = LazyLock::new(|| {
        let private =
            RsaPrivateKey::new(&mut rand::thread_rng(), TEST_KEY_BITS).expect("test key generation");
        let spki_der = private
            .to_public_key()
            .to_public_key_der()
            .expect("test key encoding")
            .as_bytes()
            .to_vec();
        TestSigner {
            signing_key: SigningKey::new(private),
            spki_der,
        }
    });
    &SIGNER
}

/// Sign `value` with the shared test key and return the base64 signature.
pub(crate) fn signed_b64(value: &str) -> String {
    BASE64.encode(test_signer().sign(value.as_bytes()))
}

/// Encode a texture payload JSON document the way the provider does.
pub(crate) fn encode_textures(payload: serde_json::Value) -> String {
    BASE64.encode(payload.to_string())
}

/// Minimal well-formed texture payload pointing at `url`.
pub(crate) fn texture_value(url: &str) -> String {
    encode_textures(serde_json::json!({
        "textures": { "SKIN": { "url": url } }
    }))
}

/// A profile with no properties at all.
pub(crate) fn empty_profile() -> GameProfile {
    GameProfile {
        id: Uuid::new_v4(),
        name: "steve".into(),
        properties: HashMap::new(),
    }
}

/// A profile carrying a single textures property.
pub(crate) fn profile_with_textures(value: String, signature: Option<String>) -> GameProfile {
    let mut profile = empty_profile();
    profile
        .properties
        .insert("textures".into(), ProfileProperty { value, signature });
    profile
}

/// Encode a `width` x `height` RGBA PNG in memory.
pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = ImageBuffer::from_pixel(width, height, Rgba([120u8, 84, 52, 255]));
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .expect("png encoding");
    out
}
