//! RGBA color used by debug drawing

use serde::{Deserialize, Serialize};

/// Luma weights from ITU-R BT.601
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Linear RGBA color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Opaque black
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);

    /// Create a color from all four channels
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Perceptual gray level (BT.601 luma) of the RGB channels
    pub fn gray(&self) -> f32 {
        self.r * LUMA_R + self.g * LUMA_G + self.b * LUMA_B
    }

    /// Same color with every RGB channel set to its gray level; alpha is kept
    pub fn desaturated(&self) -> Self {
        let g = self.gray();
        Self::rgba(g, g, g, self.a)
    }

    /// Same color with a different alpha
    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }
}
