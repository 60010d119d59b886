//! Color type and the project's named colors.

use serde::{Deserialize, Serialize};

/// An RGBA color with linear `f32` channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// The project's brown, used for dirt and wood markers.
    pub const BROWN: Self = Self::rgba(0.5, 0.25, 0.016, 1.0);
    /// The project's orange, used for highlight markers.
    pub const ORANGE: Self = Self::rgba(1.0, 0.55, 0.1, 1.0);

    /// Create an opaque color from red, green, and blue channels.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from all four channels.
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the channels as an `[r, g, b, a]` array.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_is_opaque() {
        let c = Color::rgb(0.2, 0.4, 0.6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::BROWN.to_array(), [0.5, 0.25, 0.016, 1.0]);
        assert_eq!(Color::ORANGE.to_array(), [1.0, 0.55, 0.1, 1.0]);
    }

    #[test]
    fn test_array_conversion_roundtrip() {
        let c = Color::rgba(0.1, 0.2, 0.3, 0.4);
        assert_eq!(Color::from(c.to_array()), c);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let c = Color::ORANGE;
        let bytes = rmp_serde::to_vec(&c).unwrap();
        let restored: Color = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(c, restored);
    }
}
