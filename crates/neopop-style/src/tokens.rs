//! Design tokens: sizes, timings, and opacity steps.
//!
//! Numeric constants shared by the widget implementations. Lengths are
//! logical units; timings are [`Duration`]s.

use crate::palette::Tint;
use std::time::Duration;

// ============================================================================
// Shimmer
// ============================================================================

/// Width of one shimmer strip.
pub const SHIMMER_WIDTH: f32 = 20.0;
/// Gap between the two shimmer strips.
pub const SHIMMER_GAP_WIDTH: f32 = 5.0;
/// One shimmer sweep.
pub const SHIMMER_DURATION: Duration = Duration::from_millis(2000);
/// Pause between shimmer sweeps.
pub const SHIMMER_DELAY: Duration = Duration::from_millis(2000);
/// Skew angle of the shimmer strips, in degrees.
pub const SHIMMER_ANGLE_DEGREES: f32 = 20.0;

/// Configuration for a shimmer overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShimmerConfig {
    /// Whether the shimmer runs at all.
    pub enabled: bool,
    /// Strip tint; `None` uses the theme's shimmer color.
    pub color: Option<Tint>,
    /// Strip width.
    pub width: f32,
    /// Gap between the two strips.
    pub gap: f32,
    /// One sweep.
    pub duration: Duration,
    /// Delay before the first sweep.
    pub delay: Duration,
    /// Pause between sweeps.
    pub repeat_delay: Duration,
    /// Strip skew angle in degrees.
    pub angle_degrees: f32,
}

impl Default for ShimmerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            color: None,
            width: SHIMMER_WIDTH,
            gap: SHIMMER_GAP_WIDTH,
            duration: SHIMMER_DURATION,
            delay: SHIMMER_DELAY,
            repeat_delay: SHIMMER_DELAY,
            angle_degrees: SHIMMER_ANGLE_DEGREES,
        }
    }
}

// ============================================================================
// Tilted button
// ============================================================================

/// Extrusion depth of the tilted button.
pub const TILTED_BUTTON_DEPTH: f32 = 8.0;
/// Plunk offset distance of the tilted button.
pub const TILTED_BUTTON_SHADOW_DISTANCE: f32 = 20.0;
/// Divisor applied to the float height when bobbing.
pub const TILTED_BUTTON_Y_POS_FACTOR: f32 = 6.0;
/// One floating bob cycle.
pub const TILTED_BUTTON_FLOATING: Duration = Duration::from_millis(1500);
/// Delay before the floating bob starts.
pub const TILTED_BUTTON_FLOAT_DELAY: Duration = Duration::from_millis(750);
/// Tap press-down travel time.
pub const TILTED_BUTTON_TAP: Duration = Duration::from_millis(100);
/// Shimmer strip width on the tilted button.
pub const TILTED_BUTTON_SHIMMER_WIDTH: f32 = 24.0;
/// Shimmer start delay on the tilted button.
pub const TILTED_BUTTON_SHIMMER_DELAY: Duration = Duration::from_millis(2000);
/// Shimmer sweep on the tilted button.
pub const TILTED_BUTTON_SHIMMER_DURATION: Duration = Duration::from_millis(1500);

// ============================================================================
// Button press animation
// ============================================================================

/// Press-down travel time.
pub const BUTTON_PRESS_DURATION: Duration = Duration::from_millis(80);
/// Spring damping on release.
pub const BUTTON_RELEASE_DAMPING: f32 = 15.0;
/// Spring stiffness on release.
pub const BUTTON_RELEASE_STIFFNESS: f32 = 300.0;

// ============================================================================
// Opacity
// ============================================================================

/// The opacity scale steps (0, 5, 10, 20, …, 90, 95, 100 percent).
pub const OPACITY_SCALE: [f32; 13] = [
    0.0, 0.05, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 0.95, 1.0,
];

/// Opacity for disabled surfaces.
pub const DISABLED_OPACITY: f32 = 0.4;
/// Opacity for modal overlays.
pub const OVERLAY_OPACITY: f32 = 0.6;
/// Opacity for shimmer strips.
pub const SHIMMER_OPACITY: f32 = 0.5;
/// Opacity while pressed.
pub const PRESSED_OPACITY: f32 = 0.8;
/// Opacity for hint text.
pub const HINT_OPACITY: f32 = 0.6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_scale_is_monotonic() {
        for pair in OPACITY_SCALE.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(OPACITY_SCALE[0], 0.0);
        assert_eq!(OPACITY_SCALE[12], 1.0);
    }

    #[test]
    fn test_semantic_opacities_are_scale_steps() {
        for alias in [
            DISABLED_OPACITY,
            OVERLAY_OPACITY,
            SHIMMER_OPACITY,
            PRESSED_OPACITY,
            HINT_OPACITY,
        ] {
            assert!(OPACITY_SCALE.contains(&alias));
        }
    }

    #[test]
    fn test_shimmer_defaults() {
        let config = ShimmerConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.width, SHIMMER_WIDTH);
        assert_eq!(config.duration, SHIMMER_DURATION);
        assert!(config.color.is_none());
    }
}
