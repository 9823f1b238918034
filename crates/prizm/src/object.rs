//! Utility module with prizm's high-level color object.

use crate::core::{
    clip, from_24bit, hsl_to_srgb, oklch_to_srgb, parse, srgb_to_hsl, srgb_to_oklch, to_24bit,
    to_eq_channels,
};
use crate::error::ParseError;
use crate::Float;

/// A color with alpha.
///
/// Every color is canonically represented by its gamma-corrected sRGB
/// coordinates, each in unit range, plus an alpha in unit range. Parsing any
/// supported notation and converting from any supported color space
/// normalizes into this representation, so two colors written differently
/// but naming the same point compare equal.
///
/// Since coordinates are floating point numbers, equality and hashing
/// normalize channels first, zeroing out not-a-numbers, dropping negative
/// zeros, and reducing precision. Two colors that differ by less than the
/// reduced precision are equal and hash to the same value.
#[derive(Copy, Clone, Debug)]
pub struct Color {
    coordinates: [Float; 3],
    alpha: Float,
}

impl Color {
    /// Instantiate a new opaque color from its sRGB coordinates.
    ///
    /// Coordinates outside unit range are clipped into the sRGB gamut.
    pub fn new(coordinates: [Float; 3]) -> Self {
        Self {
            coordinates: clip(&coordinates),
            alpha: 1.0,
        }
    }

    /// Instantiate a new opaque sRGB color from its 8-bit channel values.
    pub fn srgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            coordinates: from_24bit(r, g, b),
            alpha: 1.0,
        }
    }

    /// Instantiate a new opaque sRGB color from its 24-bit representation,
    /// with the red channel in the most significant byte.
    pub fn from_24bit(value: u32) -> Self {
        let [_, r, g, b] = value.to_be_bytes();
        Self {
            coordinates: from_24bit(r, g, b),
            alpha: 1.0,
        }
    }

    /// Instantiate a new color from HSL coordinates, with the hue in degrees
    /// and saturation and lightness in unit range.
    ///
    /// The hue is normalized into `0..360` degrees; saturation and lightness
    /// are clamped into unit range.
    pub fn from_hsl(hue: Float, saturation: Float, lightness: Float) -> Self {
        Self {
            coordinates: hsl_to_srgb(&[
                hue.rem_euclid(360.0),
                saturation.clamp(0.0, 1.0),
                lightness.clamp(0.0, 1.0),
            ]),
            alpha: 1.0,
        }
    }

    /// Instantiate a new color from Oklch coordinates.
    ///
    /// The resulting coordinates are clipped into the sRGB gamut, since even
    /// moderate chroma values name colors outside it.
    pub fn from_oklch(lightness: Float, chroma: Float, hue: Float) -> Self {
        Self {
            coordinates: clip(&oklch_to_srgb(&[
                lightness,
                chroma,
                hue.rem_euclid(360.0),
            ])),
            alpha: 1.0,
        }
    }

    /// Create a copy of this color with the given alpha, clamped into unit
    /// range.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_alpha(&self, alpha: Float) -> Self {
        Self {
            coordinates: self.coordinates,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access this color's sRGB coordinates.
    pub fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }

    /// Access this color's alpha.
    pub fn alpha(&self) -> Float {
        self.alpha
    }

    /// Determine whether this color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    /// Convert this color to its 8-bit sRGB channel values.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&self.coordinates)
    }

    /// Convert this color to HSL coordinates, with the hue in degrees and
    /// saturation and lightness in unit range.
    pub fn to_hsl(&self) -> [Float; 3] {
        srgb_to_hsl(&self.coordinates)
    }

    /// Convert this color to Oklch coordinates.
    pub fn to_oklch(&self) -> [Float; 3] {
        srgb_to_oklch(&self.coordinates)
    }

    /// Format this color as a lowercase hex string, `#rrggbb` for opaque
    /// colors and `#rrggbbaa` otherwise.
    pub fn hex(&self) -> String {
        let [r, g, b] = self.to_24bit();
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            let alpha = (self.alpha * 255.0).round() as u8;
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, alpha)
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl Default for Color {
    /// Create an instance of the default color, opaque black.
    fn default() -> Self {
        Self::srgb(0, 0, 0)
    }
}

impl std::str::FromStr for Color {
    type Err = ParseError;

    /// Instantiate a color from its string representation in any supported
    /// notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|(coordinates, alpha)| Self { coordinates, alpha })
    }
}

impl std::fmt::Display for Color {
    /// Display this color as a hex string.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex())
    }
}

impl std::hash::Hash for Color {
    /// Hash this color after normalizing its channels.
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_channels(&self.coordinates, self.alpha).hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color after normalizing
    /// both colors' channels.
    fn eq(&self, other: &Self) -> bool {
        to_eq_channels(&self.coordinates, self.alpha)
            == to_eq_channels(&other.coordinates, other.alpha)
    }
}

impl Eq for Color {}

// ====================================================================================================================
