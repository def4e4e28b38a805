//! The NeoPop color palette.
//!
//! Base colors, the pop black/white scales, brand palettes, and semantic
//! ramps. Scales are ordered lightest-to-darkest for `POP_BLACK` and
//! darkest-to-lightest for `POP_WHITE`, matching how the design system
//! numbers its steps (100 → 500).
//!
//! Everything here is plain `const` data; components and themes reference
//! these rather than restating channel values.

use neopop_core::Color;

/// Builds a [`Color`] from a packed `0xRRGGBB` literal.
const fn rgb24(value: u32) -> Color {
    Color::rgb(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    )
}

// ============================================================================
// Base colors
// ============================================================================

/// The NeoPop black (#0d0d0d). Softer than pure black.
pub const COLOR_BLACK: Color = rgb24(0x0D0D0D);
/// Pure white (#ffffff).
pub const COLOR_WHITE: Color = rgb24(0xFFFFFF);
/// Brand red (#ee4d37).
pub const COLOR_RED: Color = rgb24(0xEE4D37);
/// Brand yellow (#f08d32).
pub const COLOR_YELLOW: Color = rgb24(0xF08D32);
/// Brand blue (#144cc7).
pub const COLOR_BLUE: Color = rgb24(0x144CC7);
/// Brand green (#06c270).
pub const COLOR_GREEN: Color = rgb24(0x06C270);

// ============================================================================
// Pop scales
// ============================================================================

/// Pop black scale, steps 100..500 (lightest → darkest).
pub const POP_BLACK: [Color; 5] = [
    rgb24(0x8A8A8A),
    rgb24(0x3D3D3D),
    rgb24(0x161616),
    rgb24(0x121212),
    rgb24(0x0D0D0D),
];

/// Pop white scale, steps 100..500 (darkest → lightest).
pub const POP_WHITE: [Color; 5] = [
    rgb24(0xD2D2D2),
    rgb24(0xE0E0E0),
    rgb24(0xEFEFEF),
    rgb24(0xFBFBFB),
    rgb24(0xFFFFFF),
];

// ============================================================================
// Brand palettes (8 steps: lightest → darkest)
// ============================================================================

/// Poli purple brand palette.
pub const POLI_PURPLE: [Color; 8] = [
    rgb24(0xF5F0FF),
    rgb24(0xE8DFFF),
    rgb24(0xD4C4FF),
    rgb24(0xB59EFF),
    rgb24(0x7C5CFC),
    rgb24(0x5B35D5),
    rgb24(0x3A1FA0),
    rgb24(0x20104D),
];

/// Orange sunshine brand palette.
pub const ORANGE_SUNSHINE: [Color; 8] = [
    rgb24(0xFFF5EF),
    rgb24(0xFFEFE6),
    rgb24(0xFFD9BF),
    rgb24(0xFFB985),
    rgb24(0xFF8C3B),
    rgb24(0xD96020),
    rgb24(0xA03610),
    rgb24(0x4D2914),
];

/// Park green brand palette.
pub const PARK_GREEN: [Color; 8] = [
    rgb24(0xF0FFF8),
    rgb24(0xDDFFF1),
    rgb24(0xAAFFD9),
    rgb24(0x6AFFB8),
    rgb24(0x2ECC84),
    rgb24(0x1A9960),
    rgb24(0x0F6640),
    rgb24(0x124D34),
];

/// Pink pong brand palette.
pub const PINK_PONG: [Color; 8] = [
    rgb24(0xFFF0F3),
    rgb24(0xFFE1E9),
    rgb24(0xFFC2D1),
    rgb24(0xFF8DAA),
    rgb24(0xFF4D72),
    rgb24(0xCC2248),
    rgb24(0x99132C),
    rgb24(0x4D1421),
];

/// Mannna yellow brand palette.
pub const MANNNA: [Color; 8] = [
    rgb24(0xFFFDF0),
    rgb24(0xFFF8E5),
    rgb24(0xFFF0BF),
    rgb24(0xFFE080),
    rgb24(0xFFCC33),
    rgb24(0xCC9900),
    rgb24(0x996600),
    rgb24(0x4D3D15),
];

/// Neo paccha green brand palette.
pub const NEO_PACCHA: [Color; 8] = [
    rgb24(0xFAFFF0),
    rgb24(0xFBFFE6),
    rgb24(0xF2FFBF),
    rgb24(0xE0FF80),
    rgb24(0xBBFF33),
    rgb24(0x88CC00),
    rgb24(0x557A00),
    rgb24(0x454C13),
];

/// Yoyo violet brand palette.
pub const YOYO: [Color; 8] = [
    rgb24(0xFAF0FF),
    rgb24(0xF4E5FF),
    rgb24(0xE8CCFF),
    rgb24(0xD1A3FF),
    rgb24(0xA94DFF),
    rgb24(0x7B1FD4),
    rgb24(0x52119E),
    rgb24(0x33134D),
];

// ============================================================================
// Semantic ramps (5 steps: lightest → brand)
// ============================================================================

/// Error ramp ending at the brand red.
pub const SEMANTIC_ERROR: [Color; 5] = [
    rgb24(0xFCE2DD),
    rgb24(0xF9C4BB),
    rgb24(0xF59D90),
    rgb24(0xF17060),
    rgb24(0xEE4D37),
];

/// Warning ramp ending at the brand yellow.
pub const SEMANTIC_WARNING: [Color; 5] = [
    rgb24(0xFBDDC2),
    rgb24(0xF8C49A),
    rgb24(0xF5A870),
    rgb24(0xF29848),
    rgb24(0xF08D32),
];

/// Info ramp ending at the brand blue.
pub const SEMANTIC_INFO: [Color; 5] = [
    rgb24(0xC2D0F2),
    rgb24(0x9BB0E8),
    rgb24(0x6E8EDC),
    rgb24(0x4068CF),
    rgb24(0x144CC7),
];

/// Success ramp ending at the brand green.
pub const SEMANTIC_SUCCESS: [Color; 5] = [
    rgb24(0xE6F9F1),
    rgb24(0xBFEDDA),
    rgb24(0x86DDB8),
    rgb24(0x3ECA8A),
    rgb24(0x06C270),
];

// ============================================================================
// Tint: a color with an opacity
// ============================================================================

/// A color paired with an opacity, for the handful of translucent tokens
/// (shimmer strips, sheet overlays).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    /// The underlying opaque color.
    pub color: Color,
    /// Opacity in [0, 1].
    pub opacity: f32,
}

impl Tint {
    /// Creates a tint from a color and opacity.
    #[inline]
    pub const fn new(color: Color, opacity: f32) -> Self {
        Self { color, opacity }
    }

    /// Creates a fully opaque tint.
    #[inline]
    pub const fn opaque(color: Color) -> Self {
        Self::new(color, 1.0)
    }

    /// Formats the tint as a CSS `rgba()` string.
    pub fn to_css(self) -> String {
        self.color.to_css_rgba(self.opacity)
    }
}

impl From<Color> for Tint {
    fn from(color: Color) -> Self {
        Self::opaque(color)
    }
}

/// Default shimmer strip tint (warm white at 49% opacity).
pub const SHIMMER_DEFAULT: Tint = Tint::new(rgb24(0xFFF8E5), 0.49);

/// Disabled surface fill.
pub const DISABLED_BG: Color = rgb24(0x8A8A8A);

/// Toggle "off" track fill.
pub const SWITCH_OFF: Color = rgb24(0xE0E0E0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_colors_round_trip_hex() {
        assert_eq!(COLOR_BLACK.to_hex(), "#0d0d0d");
        assert_eq!(COLOR_GREEN.to_hex(), "#06c270");
        assert_eq!(COLOR_BLUE, Color::from_hex("#144CC7").unwrap());
    }

    #[test]
    fn test_pop_scales_run_in_order() {
        // POP_BLACK darkens step by step; POP_WHITE lightens.
        for pair in POP_BLACK.windows(2) {
            assert!(pair[0].relative_luminance() > pair[1].relative_luminance());
        }
        for pair in POP_WHITE.windows(2) {
            assert!(pair[0].relative_luminance() < pair[1].relative_luminance());
        }
    }

    #[test]
    fn test_ramps_end_at_brand_colors() {
        assert_eq!(SEMANTIC_ERROR[4], COLOR_RED);
        assert_eq!(SEMANTIC_WARNING[4], COLOR_YELLOW);
        assert_eq!(SEMANTIC_INFO[4], COLOR_BLUE);
        assert_eq!(SEMANTIC_SUCCESS[4], COLOR_GREEN);
    }

    #[test]
    fn test_tint_css() {
        assert_eq!(SHIMMER_DEFAULT.to_css(), "rgba(255,248,229,0.49)");
        assert_eq!(Tint::opaque(COLOR_WHITE).to_css(), "rgba(255,255,255,1)");
    }
}
