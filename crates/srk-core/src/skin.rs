//! Skin retrieval and binary format validation
//!
//! A skin fetched for an untrusted texture must look like a skin before any
//! repair may run: the image has to decode, be exactly 64 pixels wide, and be
//! either 32 (legacy) or 64 (modern) pixels tall. Dimensions are probed from
//! the image header without decoding pixel data.

use std::io::Cursor;

use image::ImageReader;
use url::Url;

use crate::constant::{LEGACY_SKIN_HEIGHT, MODERN_SKIN_HEIGHT, SKIN_WIDTH};
use crate::transport::{SkinTransport, TransportError};

/// Pixel layout of a validated skin image, derived from its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinLayout {
    /// 64x32, the pre-1.8 format.
    Legacy,
    /// 64x64, the 1.8+ format with overlay regions.
    Modern,
}

/// A fetched skin that passed binary format validation.
#[derive(Debug, Clone)]
pub struct ValidatedSkin {
    /// Raw image bytes exactly as fetched; the repair stage operates on
    /// these.
    pub data: Vec<u8>,
    /// Layout derived from the image height.
    pub layout: SkinLayout,
    /// Model variant carried over from the texture descriptor. Validation
    /// ignores it; the repair stage needs it.
    pub slim: bool,
}

/// Why a fetched skin was rejected.
#[derive(Debug, thiserror::Error)]
pub enum SkinError {
    /// The transport could not produce the image bytes.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The bytes are not a decodable image.
    #[error("skin is not a decodable image: {reason}")]
    Decode {
        /// Decoder failure description.
        reason: String,
    },

    /// The image width is not exactly 64 pixels.
    #[error("skin width is {width}, expected 64")]
    WidthMismatch {
        /// The actual width in pixels.
        width: u32,
    },

    /// The image height is neither 32 nor 64 pixels.
    #[error("skin height is {height}, expected 32 or 64")]
    HeightMismatch {
        /// The actual height in pixels.
        height: u32,
    },
}

/// Fetch `url` through `transport` and validate the result.
///
/// Exactly one fetch is performed; this layer neither retries nor times out
/// on its own.
pub fn fetch_and_validate<T: SkinTransport>(
    transport: &T,
    url: &Url,
    slim: bool,
) -> Result<ValidatedSkin, SkinError> {
    let data = transport.fetch(url)?;
    let layout = validate_format(&data)?;
    tracing::debug!(
        target: "srk_core::skin",
        %url,
        ?layout,
        bytes = data.len(),
        "fetched skin passed format validation"
    );
    Ok(ValidatedSkin { data, layout, slim })
}

/// Check the binary structure of `data` and derive its layout.
///
/// The rules run in order, each with its own failure cause: decodability,
/// then width, then height.
pub fn validate_format(data: &[u8]) -> Result<SkinLayout, SkinError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| SkinError::Decode {
            reason: e.to_string(),
        })?;
    let (width, height) = reader.into_dimensions().map_err(|e| SkinError::Decode {
        reason: e.to_string(),
    })?;

    if width != SKIN_WIDTH {
        return Err(SkinError::WidthMismatch { width });
    }
    if height != LEGACY_SKIN_HEIGHT && height != MODERN_SKIN_HEIGHT {
        return Err(SkinError::HeightMismatch { height });
    }

    // TODO: inspect the overlay region for translucent pixels so the repair
    // stage knows whether the second layer needs flattening.

    Ok(if height == MODERN_SKIN_HEIGHT {
        SkinLayout::Modern
    } else {
        SkinLayout::Legacy
    })
}
