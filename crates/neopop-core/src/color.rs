//! sRGB color representation and derivation helpers.
//!
//! This module provides the [`Color`] type used throughout NeoPop, along
//! with the conversions the styling layer builds on:
//!
//! - Hex parsing and formatting (`#RGB` shorthand and `#RRGGBB`)
//! - CSS `rgb()`/`rgba()` function-notation output
//! - HSL conversion via [`Hsl`], used for controlled lightness adjustment
//! - WCAG relative luminance, dark/light classification, and contrast
//!   color selection
//!
//! # Color Representation
//!
//! Colors are stored as 8-bit sRGB channels. The NeoPop surface math only
//! ever needs opaque face/edge colors; translucency is layered on top by
//! the styling crate where a handful of tokens require it.
//!
//! # Examples
//!
//! ```
//! use neopop_core::color::Color;
//!
//! // From hex string (shorthand expands nibble-wise)
//! let coral = Color::from_hex("#EE4D37").unwrap();
//! let white = Color::from_hex("fff").unwrap();
//! assert_eq!(white, Color::WHITE);
//!
//! // Always normalizes to lowercase 6-digit form
//! assert_eq!(coral.to_hex(), "#ee4d37");
//!
//! // Pick legible text for a background
//! assert_eq!(Color::WHITE.contrast_color(), Color::NEAR_BLACK);
//! ```

use crate::error::ColorParseError;
use std::fmt;
use std::str::FromStr;

/// Colors with a WCAG relative luminance below this are treated as dark
/// surfaces by the edge-derivation rules.
///
/// This is a perceptual calibration for extrusion shading, not the WCAG
/// midpoint, and it is independent of [`CONTRAST_LUMINANCE_CUTOFF`].
pub const DARK_LUMINANCE_CUTOFF: f32 = 0.3;

/// Luminance above which near-black text is more legible than white.
///
/// Deliberately a separate constant from [`DARK_LUMINANCE_CUTOFF`]: the two
/// cutoffs are calibrated independently and must not be unified, or edge
/// shading and text contrast would shift across the whole library.
pub const CONTRAST_LUMINANCE_CUTOFF: f32 = 0.179;

/// An opaque sRGB color with 8-bit channels.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// ============================================================================
// Constants and constructors
// ============================================================================

impl Color {
    /// Pure black (#000000).
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white (#ffffff).
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// The NeoPop near-black (#0d0d0d) used for text on light surfaces.
    pub const NEAR_BLACK: Self = Self::rgb(0x0d, 0x0d, 0x0d);

    /// Creates a color from 8-bit RGB channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray with all three channels set to `value`.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Returns the channels as a `(r, g, b)` tuple.
    #[inline]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

// ============================================================================
// Hex parsing and formatting
// ============================================================================

impl Color {
    /// Parses a color from a hex string.
    ///
    /// Supports `#RGB` shorthand (expanded nibble-wise, `#abc` → `#aabbcc`)
    /// and the standard 6-digit `#RRGGBB` form. The `#` prefix is optional
    /// and digits are case-insensitive.
    ///
    /// Malformed input (empty, wrong length, non-hex digit) is an error;
    /// no garbage color is ever produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use neopop_core::color::Color;
    ///
    /// let green = Color::from_hex("#06C270").unwrap();
    /// let same = Color::from_hex("06c270").unwrap();
    /// assert_eq!(green, same);
    ///
    /// assert!(Color::from_hex("#12345").is_err());
    /// assert!(Color::from_hex("#gggggg").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }

        let nibble = |c: u8| -> Result<u8, ColorParseError> {
            match c {
                b'0'..=b'9' => Ok(c - b'0'),
                b'a'..=b'f' => Ok(c - b'a' + 10),
                b'A'..=b'F' => Ok(c - b'A' + 10),
                _ => Err(ColorParseError::InvalidHexChar),
            }
        };

        let bytes = hex.as_bytes();
        match bytes.len() {
            3 => {
                let r = nibble(bytes[0])?;
                let g = nibble(bytes[1])?;
                let b = nibble(bytes[2])?;
                // 0xA -> 0xAA
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let byte = |hi: u8, lo: u8| -> Result<u8, ColorParseError> {
                    Ok((nibble(hi)? << 4) | nibble(lo)?)
                };
                Ok(Self::rgb(
                    byte(bytes[0], bytes[1])?,
                    byte(bytes[2], bytes[3])?,
                    byte(bytes[4], bytes[5])?,
                ))
            }
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }

    /// Formats the color as a lowercase 6-digit `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ============================================================================
// CSS function-notation output
// ============================================================================

impl Color {
    /// Formats the color as a CSS `rgb(r,g,b)` string.
    pub fn to_css_rgb(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Formats the color as a CSS `rgba(r,g,b,a)` string.
    ///
    /// `alpha` is clamped to [0, 1].
    pub fn to_css_rgba(self, alpha: f32) -> String {
        format!(
            "rgba({},{},{},{})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

// ============================================================================
// HSL conversion
// ============================================================================

/// A color in HSL space.
///
/// Used as the intermediate representation for lightness adjustment; the
/// styling layer never hands `Hsl` values to drawing code directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue as a turn fraction in [0, 1), not degrees. Achromatic colors
    /// report hue 0.
    pub h: f32,
    /// Saturation in [0, 1].
    pub s: f32,
    /// Lightness in [0, 1].
    pub l: f32,
}

impl Hsl {
    /// Creates an HSL value from its components.
    #[inline]
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Returns the same hue and saturation at a different lightness.
    #[inline]
    pub fn with_lightness(self, l: f32) -> Self {
        Self { l, ..self }
    }

    /// Converts back to an 8-bit sRGB color.
    ///
    /// The achromatic case (`s == 0`) short-circuits to an exact gray so
    /// grays survive the round trip bit-for-bit.
    pub fn to_color(self) -> Color {
        if self.s == 0.0 {
            let v = (self.l * 255.0).round() as u8;
            return Color::gray(v);
        }

        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;

        let channel = |t: f32| (hue_to_channel(p, q, t) * 255.0).round() as u8;

        Color::rgb(
            channel(self.h + 1.0 / 3.0),
            channel(self.h),
            channel(self.h - 1.0 / 3.0),
        )
    }
}

/// Reconstructs one RGB channel from the hue sector.
fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl Color {
    /// Converts the color to HSL.
    ///
    /// Round-trip contract: `color.to_hsl().to_color()` matches `color`
    /// within ±1 per channel for every 8-bit triple.
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };

        Hsl::new(h, s, l)
    }

    /// Shifts the color's HSL lightness by `delta`, clamping to [0, 1].
    ///
    /// Positive deltas lighten, negative deltas darken; the result never
    /// wraps around at either extreme.
    pub fn adjust_lightness(self, delta: f32) -> Self {
        let hsl = self.to_hsl();
        hsl.with_lightness((hsl.l + delta).clamp(0.0, 1.0)).to_color()
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        hsl.to_color()
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        color.to_hsl()
    }
}

// ============================================================================
// Luminance and contrast
// ============================================================================

impl Color {
    /// Returns the WCAG relative luminance in [0, 1].
    ///
    /// Each channel is gamma-expanded
    /// (`c <= 0.03928 ? c/12.92 : ((c+0.055)/1.055)^2.4`) before the
    /// 0.2126/0.7152/0.0722 weighted sum.
    pub fn relative_luminance(self) -> f32 {
        fn linearize(channel: u8) -> f32 {
            let c = channel as f32 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// Returns `true` if the color reads as a dark surface.
    ///
    /// Cutoff: [`DARK_LUMINANCE_CUTOFF`].
    #[inline]
    pub fn is_dark(self) -> bool {
        self.relative_luminance() < DARK_LUMINANCE_CUTOFF
    }

    /// Returns the legible text color for this background: near-black on
    /// bright surfaces, white otherwise.
    ///
    /// Cutoff: [`CONTRAST_LUMINANCE_CUTOFF`].
    #[inline]
    pub fn contrast_color(self) -> Self {
        if self.relative_luminance() > CONTRAST_LUMINANCE_CUTOFF {
            Self::NEAR_BLACK
        } else {
            Self::WHITE
        }
    }
}

// ============================================================================
// Type conversions
// ============================================================================

impl From<(u8, u8, u8)> for Color {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Color> for (u8, u8, u8) {
    #[inline]
    fn from(color: Color) -> Self {
        color.channels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod hex_tests {
        use super::*;

        #[test]
        fn test_from_hex_6digit() {
            let c = Color::from_hex("#EE4D37").unwrap();
            assert_eq!(c, Color::rgb(0xEE, 0x4D, 0x37));
        }

        #[test]
        fn test_from_hex_3digit() {
            let c = Color::from_hex("#f80").unwrap();
            assert_eq!(c, Color::rgb(255, 136, 0));
        }

        #[test]
        fn test_from_hex_no_hash() {
            let c = Color::from_hex("144CC7").unwrap();
            assert_eq!(c, Color::rgb(0x14, 0x4C, 0xC7));
        }

        #[test]
        fn test_from_hex_case_insensitive() {
            assert_eq!(
                Color::from_hex("#06c270").unwrap(),
                Color::from_hex("#06C270").unwrap()
            );
        }

        #[test]
        fn test_from_hex_empty() {
            assert_eq!(Color::from_hex(""), Err(ColorParseError::EmptyInput));
            assert_eq!(Color::from_hex("#"), Err(ColorParseError::EmptyInput));
        }

        #[test]
        fn test_from_hex_invalid_length() {
            assert_eq!(
                Color::from_hex("#12345"),
                Err(ColorParseError::InvalidLength(5))
            );
            assert_eq!(
                Color::from_hex("#1234567"),
                Err(ColorParseError::InvalidLength(7))
            );
        }

        #[test]
        fn test_from_hex_invalid_char() {
            assert_eq!(
                Color::from_hex("#gggggg"),
                Err(ColorParseError::InvalidHexChar)
            );
            assert_eq!(
                Color::from_hex("#12 456"),
                Err(ColorParseError::InvalidHexChar)
            );
        }

        #[test]
        fn test_to_hex_lowercase() {
            assert_eq!(Color::rgb(0xEE, 0x4D, 0x37).to_hex(), "#ee4d37");
            assert_eq!(Color::BLACK.to_hex(), "#000000");
        }

        #[test]
        fn test_normalization_is_idempotent() {
            for input in ["#ABC", "abc", "#aAbBcC", "aabbcc"] {
                let once = Color::from_hex(input).unwrap().to_hex();
                let twice = Color::from_hex(&once).unwrap().to_hex();
                assert_eq!(once, twice);
            }
        }

        #[test]
        fn test_from_str() {
            let c: Color = "#0d0d0d".parse().unwrap();
            assert_eq!(c, Color::NEAR_BLACK);
        }

        #[test]
        fn test_display_is_hex() {
            assert_eq!(Color::WHITE.to_string(), "#ffffff");
        }
    }

    mod css_tests {
        use super::*;

        #[test]
        fn test_to_css_rgb() {
            assert_eq!(Color::rgb(255, 248, 229).to_css_rgb(), "rgb(255,248,229)");
        }

        #[test]
        fn test_to_css_rgba() {
            assert_eq!(
                Color::rgb(255, 248, 229).to_css_rgba(0.49),
                "rgba(255,248,229,0.49)"
            );
        }

        #[test]
        fn test_to_css_rgba_clamps_alpha() {
            assert_eq!(Color::BLACK.to_css_rgba(1.5), "rgba(0,0,0,1)");
            assert_eq!(Color::BLACK.to_css_rgba(-0.5), "rgba(0,0,0,0)");
        }
    }

    mod hsl_tests {
        use super::*;

        #[test]
        fn test_primaries() {
            let red = Color::rgb(255, 0, 0).to_hsl();
            assert!((red.h - 0.0).abs() < 1e-6);
            assert!((red.s - 1.0).abs() < 1e-6);
            assert!((red.l - 0.5).abs() < 1e-6);

            let green = Color::rgb(0, 255, 0).to_hsl();
            assert!((green.h - 1.0 / 3.0).abs() < 1e-6);

            let blue = Color::rgb(0, 0, 255).to_hsl();
            assert!((blue.h - 2.0 / 3.0).abs() < 1e-6);
        }

        #[test]
        fn test_achromatic() {
            let gray = Color::gray(128).to_hsl();
            assert_eq!(gray.h, 0.0);
            assert_eq!(gray.s, 0.0);

            // Grays reconstruct exactly through the s == 0 short circuit.
            assert_eq!(gray.to_color(), Color::gray(128));
            assert_eq!(Color::BLACK.to_hsl().to_color(), Color::BLACK);
            assert_eq!(Color::WHITE.to_hsl().to_color(), Color::WHITE);
        }

        #[test]
        fn test_hue_is_turn_fraction() {
            // Every hue stays inside [0, 1).
            for r in (0..=255).step_by(51) {
                for g in (0..=255).step_by(51) {
                    for b in (0..=255).step_by(51) {
                        let h = Color::rgb(r as u8, g as u8, b as u8).to_hsl().h;
                        assert!((0.0..1.0).contains(&h), "hue {} out of range", h);
                    }
                }
            }
        }

        #[test]
        fn test_roundtrip_within_one() {
            // Stride includes both 0 and 255.
            for r in (0..=255).step_by(15) {
                for g in (0..=255).step_by(15) {
                    for b in (0..=255).step_by(15) {
                        let original = Color::rgb(r as u8, g as u8, b as u8);
                        let back = original.to_hsl().to_color();
                        assert!(
                            original.r.abs_diff(back.r) <= 1
                                && original.g.abs_diff(back.g) <= 1
                                && original.b.abs_diff(back.b) <= 1,
                            "roundtrip drifted: {:?} -> {:?}",
                            original,
                            back
                        );
                    }
                }
            }
        }

        #[test]
        fn test_adjust_lightness_direction() {
            let base = Color::from_hex("#144CC7").unwrap();
            assert!(base.adjust_lightness(0.2).to_hsl().l > base.to_hsl().l);
            assert!(base.adjust_lightness(-0.2).to_hsl().l < base.to_hsl().l);
        }

        #[test]
        fn test_adjust_lightness_clamps() {
            assert_eq!(Color::WHITE.adjust_lightness(0.3), Color::WHITE);
            assert_eq!(Color::BLACK.adjust_lightness(-0.3), Color::BLACK);
        }

        #[test]
        fn test_adjust_lightness_zero_is_stable() {
            let base = Color::from_hex("#06C270").unwrap();
            let same = base.adjust_lightness(0.0);
            assert!(
                base.r.abs_diff(same.r) <= 1
                    && base.g.abs_diff(same.g) <= 1
                    && base.b.abs_diff(same.b) <= 1
            );
        }
    }

    mod luminance_tests {
        use super::*;

        #[test]
        fn test_extremes() {
            assert!(Color::BLACK.relative_luminance() < 1e-6);
            assert!((Color::WHITE.relative_luminance() - 1.0).abs() < 1e-4);
        }

        #[test]
        fn test_is_dark() {
            assert!(Color::BLACK.is_dark());
            assert!(Color::NEAR_BLACK.is_dark());
            assert!(!Color::WHITE.is_dark());
        }

        #[test]
        fn test_contrast_color() {
            assert_eq!(Color::WHITE.contrast_color(), Color::NEAR_BLACK);
            assert_eq!(Color::BLACK.contrast_color(), Color::WHITE);
            // Mid-brightness green sits above the contrast cutoff.
            let green = Color::from_hex("#06C270").unwrap();
            assert_eq!(green.contrast_color(), Color::NEAR_BLACK);
        }

        #[test]
        fn test_cutoffs_are_distinct() {
            // A color between the two cutoffs: bright enough for dark text,
            // still classified as a dark surface for edge shading.
            assert!(CONTRAST_LUMINANCE_CUTOFF < DARK_LUMINANCE_CUTOFF);
            let mid = Color::gray(128);
            let lum = mid.relative_luminance();
            assert!(lum > CONTRAST_LUMINANCE_CUTOFF && lum < DARK_LUMINANCE_CUTOFF);
            assert!(mid.is_dark());
            assert_eq!(mid.contrast_color(), Color::NEAR_BLACK);
        }
    }
}
