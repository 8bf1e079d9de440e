use serde::{Deserialize, Serialize};

/// 24-bit RGB color stored as `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);
    pub const BLACK: Color = Color(0x000000);

    /// Largest representable color value
    pub const MAX: u32 = 0xffffff;

    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & Self::MAX)
    }

    pub const fn hex(&self) -> u32 {
        self.0
    }

    /// Channels as floats in [0, 1]
    pub fn to_array(&self) -> [f32; 3] {
        [
            ((self.0 >> 16) & 0xff) as f32 / 255.0,
            ((self.0 >> 8) & 0xff) as f32 / 255.0,
            (self.0 & 0xff) as f32 / 255.0,
        ]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Pack linear [0, 1] channels into an opaque RGBA8 pixel
pub fn to_rgba8(rgb: [f32; 3]) -> [u8; 4] {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [channel(rgb[0]), channel(rgb[1]), channel(rgb[2]), 255]
}
