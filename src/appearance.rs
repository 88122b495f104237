//! Skin and hair colours reported alongside a rebuilt face model.
//!
//! These are display-only values; the mesh never reads them.

use serde::{Deserialize, Serialize};

/// 8-bit ARGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Argb {
    /// Alpha
    pub a: u8,
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Argb {
    /// Decode a colour packed as `0xAARRGGBB`
    #[must_use]
    pub fn from_packed(color: u32) -> Self {
        let [a, r, g, b] = color.to_be_bytes();
        Self { a, r, g, b }
    }

    /// Pack back into `0xAARRGGBB`
    #[must_use]
    pub fn to_packed(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }
}

/// Colours of the currently tracked face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaceAppearance {
    /// Skin colour
    pub skin: Argb,
    /// Hair colour
    pub hair: Argb,
}

impl FaceAppearance {
    /// Build from the packed values a face model reports
    #[must_use]
    pub fn from_packed(skin: u32, hair: u32) -> Self {
        Self {
            skin: Argb::from_packed(skin),
            hair: Argb::from_packed(hair),
        }
    }
}
