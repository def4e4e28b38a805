//! Score meter (gauge) math.
//!
//! The score meter draws a 180° arc from the 9-o'clock position, sweeping
//! clockwise. A reading inside `[lower, upper]` maps linearly onto the
//! sweep; readings outside the limits pin to the ends. Stroke color is
//! picked per score band.

use crate::palette;
use crate::resolve::ColorSources;
use crate::theme::Theme;
use neopop_core::Color;
use std::time::Duration;

/// Default lower reading limit.
pub const SCORE_LOWER_LIMIT: f32 = 300.0;
/// Default upper reading limit.
pub const SCORE_UPPER_LIMIT: f32 = 900.0;
/// Full arc extent in degrees.
pub const METER_SWEEP_DEGREES: f32 = 180.0;
/// Arc sweep animation time.
pub const METER_SWEEP_DURATION: Duration = Duration::from_millis(1400);

/// Default stroke for the average band (amber, outside the semantic
/// ramps).
pub const AVERAGE_STROKE: Color = Color::rgb(0xF5, 0xA6, 0x23);

/// Qualitative band a reading falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    /// Good reading, green stroke.
    Excellent,
    /// Middling reading, amber stroke.
    Average,
    /// Poor reading, red stroke.
    Poor,
}

impl ScoreBand {
    /// Resolves the arc stroke color for this band against a theme.
    pub fn stroke_color(self, theme: &Theme) -> Color {
        let stroke = theme.score_meter.stroke;
        match self {
            Self::Excellent => ColorSources::new()
                .then(stroke.excellent)
                .resolve_or(palette::SEMANTIC_SUCCESS[4]),
            Self::Average => ColorSources::new()
                .then(stroke.average)
                .resolve_or(AVERAGE_STROKE),
            Self::Poor => ColorSources::new()
                .then(stroke.poor)
                .resolve_or(palette::SEMANTIC_ERROR[4]),
        }
    }
}

/// Maps a reading in `[lower, upper]` onto a sweep angle in degrees.
///
/// 0 is the leftmost arc position, [`METER_SWEEP_DEGREES`] the rightmost.
/// Readings outside the limits clamp to the ends; a zero-width range maps
/// everything to 0.
pub fn score_to_sweep(score: f32, lower: f32, upper: f32) -> f32 {
    let range = upper - lower;
    if range == 0.0 {
        return 0.0;
    }
    let clamped = lower.max(upper.min(score));
    (clamped - lower) / range * METER_SWEEP_DEGREES
}

#[cfg(test)]
mod tests {
    use super::*;

    mod sweep_tests {
        use super::*;

        #[test]
        fn test_endpoints() {
            assert_eq!(score_to_sweep(300.0, SCORE_LOWER_LIMIT, SCORE_UPPER_LIMIT), 0.0);
            assert_eq!(
                score_to_sweep(900.0, SCORE_LOWER_LIMIT, SCORE_UPPER_LIMIT),
                METER_SWEEP_DEGREES
            );
        }

        #[test]
        fn test_midpoint() {
            assert_eq!(score_to_sweep(600.0, 300.0, 900.0), 90.0);
        }

        #[test]
        fn test_clamps_out_of_range_readings() {
            assert_eq!(score_to_sweep(100.0, 300.0, 900.0), 0.0);
            assert_eq!(score_to_sweep(1200.0, 300.0, 900.0), METER_SWEEP_DEGREES);
        }

        #[test]
        fn test_zero_range_is_zero_sweep() {
            assert_eq!(score_to_sweep(500.0, 500.0, 500.0), 0.0);
        }
    }

    mod band_tests {
        use super::*;

        #[test]
        fn test_theme_strokes_win() {
            let theme = Theme::dark();
            assert_eq!(
                ScoreBand::Excellent.stroke_color(&theme),
                palette::SEMANTIC_SUCCESS[4]
            );
            assert_eq!(ScoreBand::Average.stroke_color(&theme), AVERAGE_STROKE);
            assert_eq!(ScoreBand::Poor.stroke_color(&theme), palette::SEMANTIC_ERROR[4]);
        }

        #[test]
        fn test_unset_theme_falls_back() {
            let mut theme = Theme::dark();
            theme.score_meter.stroke.poor = None;
            assert_eq!(
                ScoreBand::Poor.stroke_color(&theme),
                palette::SEMANTIC_ERROR[4]
            );
        }
    }
}
