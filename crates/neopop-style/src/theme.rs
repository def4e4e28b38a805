//! The NeoPop theme model.
//!
//! A [`Theme`] is a plain value: global surface colors plus one record per
//! component family, every leaf an `Option`. The two built-in themes
//! ([`Theme::dark`], [`Theme::light`]) wire the palette into those
//! records; applications overlay partial themes on top with
//! [`Theme::merge`], and widgets resolve their final colors through the
//! explicit chains in [`resolve`](crate::resolve): explicit override
//! first, then the theme entry, then a derived or hard fallback.
//!
//! Themes are passed into drawing calls as arguments. Nothing here is
//! ambient or implicitly scoped.
//!
//! # Examples
//!
//! ```
//! use neopop_style::theme::{ButtonTheme, Theme};
//! use neopop_style::palette;
//!
//! let patch = Theme {
//!     button: ButtonTheme {
//!         color: Some(palette::COLOR_GREEN),
//!         ..ButtonTheme::default()
//!     },
//!     ..Theme::default()
//! };
//! let theme = Theme::dark().merge(&patch);
//!
//! assert_eq!(theme.button_face_color(None), palette::COLOR_GREEN);
//! // Unpatched entries keep their dark-theme wiring.
//! assert_eq!(theme.colors.background, Some(palette::COLOR_BLACK));
//! ```

use crate::edge::EdgeColors;
use crate::palette::{self, Tint};
use crate::resolve::ColorSources;
use crate::meter::AVERAGE_STROKE;
use neopop_core::Color;

/// Global color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Dark surfaces, light content.
    #[default]
    Dark,
    /// Light surfaces, dark content.
    Light,
}

// ============================================================================
// Component records
// ============================================================================

/// Global surface colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceColors {
    /// Page background.
    pub background: Option<Color>,
    /// Raised surface fill.
    pub surface: Option<Color>,
    /// Primary text.
    pub text: Option<Color>,
    /// Secondary text.
    pub subtext: Option<Color>,
    /// Hairline borders.
    pub border: Option<Color>,
}

impl SurfaceColors {
    fn merge(self, patch: Self) -> Self {
        Self {
            background: patch.background.or(self.background),
            surface: patch.surface.or(self.surface),
            text: patch.text.or(self.text),
            subtext: patch.subtext.or(self.subtext),
            border: patch.border.or(self.border),
        }
    }
}

/// Button colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonTheme {
    /// Face fill.
    pub color: Option<Color>,
    /// Edge surface colors.
    pub edge_colors: EdgeColors,
    /// Stroke-variant border.
    pub border_color: Option<Color>,
    /// Face fill while disabled.
    pub disabled_color: Option<Color>,
    /// Edge fill while disabled.
    pub disabled_edge_color: Option<Color>,
}

impl ButtonTheme {
    fn merge(self, patch: Self) -> Self {
        Self {
            color: patch.color.or(self.color),
            edge_colors: self.edge_colors.merge(patch.edge_colors),
            border_color: patch.border_color.or(self.border_color),
            disabled_color: patch.disabled_color.or(self.disabled_color),
            disabled_edge_color: patch.disabled_edge_color.or(self.disabled_edge_color),
        }
    }
}

/// Card colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardTheme {
    /// Face fill.
    pub color: Option<Color>,
    /// Edge surface colors.
    pub edge_colors: EdgeColors,
    /// Border.
    pub border_color: Option<Color>,
}

impl CardTheme {
    fn merge(self, patch: Self) -> Self {
        Self {
            color: patch.color.or(self.color),
            edge_colors: self.edge_colors.merge(patch.edge_colors),
            border_color: patch.border_color.or(self.border_color),
        }
    }
}

/// Shimmer overlay colors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShimmerTheme {
    /// Strip tint.
    pub color: Option<Tint>,
}

impl ShimmerTheme {
    fn merge(self, patch: Self) -> Self {
        Self {
            color: patch.color.or(self.color),
        }
    }
}

/// Colors for one toggle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleStateColors {
    /// Track fill.
    pub switch_background: Option<Color>,
    /// Track border.
    pub switch_border: Option<Color>,
    /// Knob fill.
    pub button_background: Option<Color>,
    /// Knob border.
    pub button_border: Option<Color>,
    /// Knob mark fill.
    pub button_mark_background: Option<Color>,
}

impl ToggleStateColors {
    fn merge(self, patch: Self) -> Self {
        Self {
            switch_background: patch.switch_background.or(self.switch_background),
            switch_border: patch.switch_border.or(self.switch_border),
            button_background: patch.button_background.or(self.button_background),
            button_border: patch.button_border.or(self.button_border),
            button_mark_background: patch.button_mark_background.or(self.button_mark_background),
        }
    }
}

/// Toggle colors for both states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleTheme {
    /// Colors while on.
    pub on: ToggleStateColors,
    /// Colors while off.
    pub off: ToggleStateColors,
}

impl ToggleTheme {
    fn merge(self, patch: Self) -> Self {
        Self {
            on: self.on.merge(patch.on),
            off: self.off.merge(patch.off),
        }
    }
}

/// Input field colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFieldTheme {
    /// Entered text.
    pub text_color: Option<Color>,
    /// Floating label.
    pub label_color: Option<Color>,
    /// Caret.
    pub caret_color: Option<Color>,
    /// Error text and border.
    pub error_color: Option<Color>,
    /// Placeholder text.
    pub placeholder_color: Option<Color>,
    /// Resting border.
    pub border_color: Option<Color>,
    /// Border while focused.
    pub active_border_color: Option<Color>,
    /// Field background.
    pub background_color: Option<Color>,
}

impl InputFieldTheme {
    fn merge(self, patch: Self) -> Self {
        Self {
            text_color: patch.text_color.or(self.text_color),
            label_color: patch.label_color.or(self.label_color),
            caret_color: patch.caret_color.or(self.caret_color),
            error_color: patch.error_color.or(self.error_color),
            placeholder_color: patch.placeholder_color.or(self.placeholder_color),
            border_color: patch.border_color.or(self.border_color),
            active_border_color: patch.active_border_color.or(self.active_border_color),
            background_color: patch.background_color.or(self.background_color),
        }
    }
}

/// Bottom sheet colors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BottomSheetTheme {
    /// Sheet fill.
    pub background: Option<Color>,
    /// Drag notch.
    pub notch_color: Option<Color>,
    /// Scrim behind the sheet.
    pub overlay_color: Option<Tint>,
    /// Plunk edge above the sheet.
    pub plunk_color: Option<Color>,
}

impl BottomSheetTheme {
    fn merge(self, patch: Self) -> Self {
        Self {
            background: patch.background.or(self.background),
            notch_color: patch.notch_color.or(self.notch_color),
            overlay_color: patch.overlay_color.or(self.overlay_color),
            plunk_color: patch.plunk_color.or(self.plunk_color),
        }
    }
}

/// Floating button colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloatingButtonTheme {
    /// Face fill.
    pub color: Option<Color>,
    /// Border.
    pub border_color: Option<Color>,
    /// Extrusion edge.
    pub edge_color: Option<Color>,
    /// Drop shadow.
    pub shadow_color: Option<Color>,
    /// Face fill while disabled.
    pub disabled_color: Option<Color>,
}

impl FloatingButtonTheme {
    fn merge(self, patch: Self) -> Self {
        Self {
            color: patch.color.or(self.color),
            border_color: patch.border_color.or(self.border_color),
            edge_color: patch.edge_color.or(self.edge_color),
            shadow_color: patch.shadow_color.or(self.shadow_color),
            disabled_color: patch.disabled_color.or(self.disabled_color),
        }
    }
}

/// Tilted button colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TiltedButtonTheme {
    /// Face fill.
    pub color: Option<Color>,
    /// Plunk polygon fill.
    pub plunk_color: Option<Color>,
    /// Shadow polygon fill.
    pub shadow_color: Option<Color>,
    /// Face border.
    pub border_color: Option<Color>,
}

impl TiltedButtonTheme {
    fn merge(self, patch: Self) -> Self {
        Self {
            color: patch.color.or(self.color),
            plunk_color: patch.plunk_color.or(self.plunk_color),
            shadow_color: patch.shadow_color.or(self.shadow_color),
            border_color: patch.border_color.or(self.border_color),
        }
    }
}

/// Arc stroke colors per score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeterStroke {
    /// Stroke for excellent readings.
    pub excellent: Option<Color>,
    /// Stroke for average readings.
    pub average: Option<Color>,
    /// Stroke for poor readings.
    pub poor: Option<Color>,
}

impl MeterStroke {
    fn merge(self, patch: Self) -> Self {
        Self {
            excellent: patch.excellent.or(self.excellent),
            average: patch.average.or(self.average),
            poor: patch.poor.or(self.poor),
        }
    }
}

/// Score meter colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreMeterTheme {
    /// Arc stroke per band.
    pub stroke: MeterStroke,
    /// Unfilled arc track.
    pub stroke_background: Option<Color>,
    /// Reading dot.
    pub dot_color: Option<Color>,
    /// Score text.
    pub score_color: Option<Color>,
    /// Score container fill.
    pub container_background: Option<Color>,
    /// Score container border.
    pub container_border: Option<Color>,
}

impl ScoreMeterTheme {
    fn merge(self, patch: Self) -> Self {
        Self {
            stroke: self.stroke.merge(patch.stroke),
            stroke_background: patch.stroke_background.or(self.stroke_background),
            dot_color: patch.dot_color.or(self.dot_color),
            score_color: patch.score_color.or(self.score_color),
            container_background: patch.container_background.or(self.container_background),
            container_border: patch.container_border.or(self.container_border),
        }
    }
}

/// Toast colors. Unset entries fall back to the per-kind table on
/// [`ToastKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToastTheme {
    /// Toast fill.
    pub background: Option<Color>,
    /// Toast text.
    pub color: Option<Color>,
}

impl ToastTheme {
    fn merge(self, patch: Self) -> Self {
        Self {
            background: patch.background.or(self.background),
            color: patch.color.or(self.color),
        }
    }
}

/// Semantic kind of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    /// Positive confirmation.
    Success,
    /// Failure.
    Error,
    /// Caution.
    Warning,
    /// Neutral, caller-styled.
    #[default]
    Custom,
}

impl ToastKind {
    /// Returns the `(background, text)` pair for this kind.
    pub const fn colors(self) -> (Color, Color) {
        match self {
            Self::Success => (palette::COLOR_GREEN, palette::COLOR_WHITE),
            Self::Error => (palette::COLOR_RED, palette::COLOR_WHITE),
            Self::Warning => (Color::rgb(0xF7, 0xB5, 0x00), palette::COLOR_BLACK),
            Self::Custom => (Color::rgb(0x1C, 0x1C, 0x1C), palette::COLOR_WHITE),
        }
    }
}

// ============================================================================
// Theme
// ============================================================================

/// A complete theme: global surface colors plus per-component records.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Theme {
    /// Which mode this theme was built for.
    pub mode: ColorMode,
    /// Global surface colors.
    pub colors: SurfaceColors,
    /// Button colors.
    pub button: ButtonTheme,
    /// Card colors.
    pub card: CardTheme,
    /// Shimmer colors.
    pub shimmer: ShimmerTheme,
    /// Toggle colors.
    pub toggle: ToggleTheme,
    /// Input field colors.
    pub input_field: InputFieldTheme,
    /// Bottom sheet colors.
    pub bottom_sheet: BottomSheetTheme,
    /// Floating button colors.
    pub floating_button: FloatingButtonTheme,
    /// Tilted button colors.
    pub tilted_button: TiltedButtonTheme,
    /// Score meter colors.
    pub score_meter: ScoreMeterTheme,
    /// Toast colors.
    pub toast: ToastTheme,
}

impl Theme {
    /// The built-in theme for the given mode.
    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Dark => Self::dark(),
            ColorMode::Light => Self::light(),
        }
    }

    /// The built-in dark theme.
    pub fn dark() -> Self {
        Self {
            mode: ColorMode::Dark,
            colors: SurfaceColors {
                background: Some(palette::COLOR_BLACK),
                surface: Some(palette::POP_BLACK[2]),
                text: Some(palette::COLOR_WHITE),
                subtext: Some(palette::POP_BLACK[0]),
                border: Some(palette::POP_BLACK[1]),
            },
            button: ButtonTheme {
                color: Some(palette::COLOR_WHITE),
                edge_colors: EdgeColors::new()
                    .right(palette::POP_BLACK[0])
                    .bottom(palette::POP_BLACK[0]),
                border_color: Some(palette::COLOR_WHITE),
                disabled_color: Some(palette::POP_BLACK[0]),
                disabled_edge_color: Some(palette::POP_BLACK[1]),
            },
            card: CardTheme {
                color: Some(palette::POP_BLACK[2]),
                edge_colors: EdgeColors::new()
                    .right(palette::POP_BLACK[1])
                    .bottom(palette::POP_BLACK[1]),
                border_color: Some(palette::POP_BLACK[1]),
            },
            shimmer: ShimmerTheme {
                color: Some(palette::SHIMMER_DEFAULT),
            },
            toggle: ToggleTheme {
                on: ToggleStateColors {
                    switch_background: Some(palette::COLOR_GREEN),
                    switch_border: Some(palette::COLOR_GREEN),
                    button_background: Some(palette::COLOR_WHITE),
                    button_border: Some(palette::COLOR_WHITE),
                    button_mark_background: Some(palette::COLOR_GREEN),
                },
                off: ToggleStateColors {
                    switch_background: Some(palette::POP_BLACK[1]),
                    switch_border: Some(palette::POP_BLACK[0]),
                    button_background: Some(palette::POP_WHITE[1]),
                    button_border: Some(palette::POP_WHITE[1]),
                    button_mark_background: Some(palette::POP_BLACK[0]),
                },
            },
            input_field: InputFieldTheme {
                text_color: Some(palette::COLOR_WHITE),
                label_color: Some(palette::POP_BLACK[0]),
                caret_color: Some(palette::COLOR_WHITE),
                error_color: Some(palette::SEMANTIC_ERROR[4]),
                placeholder_color: Some(palette::POP_BLACK[0]),
                border_color: Some(palette::POP_BLACK[1]),
                active_border_color: Some(palette::COLOR_WHITE),
                background_color: Some(palette::COLOR_BLACK),
            },
            bottom_sheet: BottomSheetTheme {
                background: Some(palette::POP_BLACK[2]),
                notch_color: Some(palette::POP_BLACK[1]),
                overlay_color: Some(Tint::new(Color::BLACK, 0.7)),
                plunk_color: Some(palette::POP_BLACK[0]),
            },
            floating_button: FloatingButtonTheme {
                color: Some(palette::COLOR_WHITE),
                border_color: Some(palette::COLOR_WHITE),
                edge_color: Some(palette::POP_BLACK[0]),
                shadow_color: Some(palette::POP_BLACK[1]),
                disabled_color: Some(palette::POP_BLACK[0]),
            },
            tilted_button: TiltedButtonTheme {
                color: Some(palette::COLOR_WHITE),
                plunk_color: Some(palette::POP_BLACK[0]),
                shadow_color: Some(palette::POP_BLACK[1]),
                border_color: Some(palette::COLOR_WHITE),
            },
            score_meter: ScoreMeterTheme {
                stroke: MeterStroke {
                    excellent: Some(palette::SEMANTIC_SUCCESS[4]),
                    average: Some(AVERAGE_STROKE),
                    poor: Some(palette::SEMANTIC_ERROR[4]),
                },
                stroke_background: Some(palette::POP_BLACK[1]),
                dot_color: Some(palette::COLOR_WHITE),
                score_color: Some(palette::COLOR_WHITE),
                container_background: Some(palette::COLOR_BLACK),
                container_border: Some(palette::POP_BLACK[1]),
            },
            toast: ToastTheme::default(),
        }
    }

    /// The built-in light theme.
    pub fn light() -> Self {
        Self {
            mode: ColorMode::Light,
            colors: SurfaceColors {
                background: Some(palette::COLOR_WHITE),
                surface: Some(palette::POP_WHITE[2]),
                text: Some(palette::COLOR_BLACK),
                subtext: Some(palette::POP_BLACK[0]),
                border: Some(palette::POP_WHITE[0]),
            },
            button: ButtonTheme {
                color: Some(palette::COLOR_BLACK),
                edge_colors: EdgeColors::new()
                    .right(palette::POP_BLACK[0])
                    .bottom(palette::POP_BLACK[0]),
                border_color: Some(palette::COLOR_BLACK),
                disabled_color: Some(palette::POP_WHITE[0]),
                disabled_edge_color: Some(palette::POP_WHITE[1]),
            },
            card: CardTheme {
                color: Some(palette::COLOR_WHITE),
                edge_colors: EdgeColors::new()
                    .right(palette::POP_WHITE[0])
                    .bottom(palette::POP_WHITE[0]),
                border_color: Some(palette::POP_WHITE[0]),
            },
            shimmer: ShimmerTheme {
                color: Some(Tint::new(palette::COLOR_WHITE, 0.6)),
            },
            toggle: ToggleTheme {
                on: ToggleStateColors {
                    switch_background: Some(palette::COLOR_GREEN),
                    switch_border: Some(palette::COLOR_GREEN),
                    button_background: Some(palette::COLOR_WHITE),
                    button_border: Some(palette::COLOR_WHITE),
                    button_mark_background: Some(palette::COLOR_GREEN),
                },
                off: ToggleStateColors {
                    switch_background: Some(palette::POP_WHITE[1]),
                    switch_border: Some(palette::POP_WHITE[0]),
                    button_background: Some(palette::POP_BLACK[0]),
                    button_border: Some(palette::POP_BLACK[0]),
                    button_mark_background: Some(palette::POP_WHITE[0]),
                },
            },
            input_field: InputFieldTheme {
                text_color: Some(palette::COLOR_BLACK),
                label_color: Some(palette::POP_BLACK[0]),
                caret_color: Some(palette::COLOR_BLACK),
                error_color: Some(palette::SEMANTIC_ERROR[4]),
                placeholder_color: Some(palette::POP_BLACK[0]),
                border_color: Some(palette::POP_WHITE[0]),
                active_border_color: Some(palette::COLOR_BLACK),
                background_color: Some(palette::COLOR_WHITE),
            },
            bottom_sheet: BottomSheetTheme {
                background: Some(palette::COLOR_WHITE),
                notch_color: Some(palette::POP_WHITE[0]),
                overlay_color: Some(Tint::new(Color::BLACK, 0.4)),
                plunk_color: Some(palette::POP_WHITE[0]),
            },
            floating_button: FloatingButtonTheme {
                color: Some(palette::COLOR_BLACK),
                border_color: Some(palette::COLOR_BLACK),
                edge_color: Some(palette::POP_WHITE[0]),
                shadow_color: Some(palette::POP_WHITE[1]),
                disabled_color: Some(palette::POP_WHITE[0]),
            },
            tilted_button: TiltedButtonTheme {
                color: Some(palette::COLOR_BLACK),
                plunk_color: Some(palette::POP_WHITE[0]),
                shadow_color: Some(palette::POP_WHITE[1]),
                border_color: Some(palette::COLOR_BLACK),
            },
            score_meter: ScoreMeterTheme {
                stroke: MeterStroke {
                    excellent: Some(palette::SEMANTIC_SUCCESS[4]),
                    average: Some(AVERAGE_STROKE),
                    poor: Some(palette::SEMANTIC_ERROR[4]),
                },
                stroke_background: Some(palette::POP_WHITE[0]),
                dot_color: Some(palette::COLOR_BLACK),
                score_color: Some(palette::COLOR_BLACK),
                container_background: Some(palette::COLOR_WHITE),
                container_border: Some(palette::POP_WHITE[0]),
            },
            toast: ToastTheme::default(),
        }
    }

    /// Overlays a partial theme on this one. Entries set in `patch` win;
    /// everything else keeps this theme's value. The mode is not patched:
    /// it names which base the theme was built from.
    pub fn merge(&self, patch: &Self) -> Self {
        Self {
            mode: self.mode,
            colors: self.colors.merge(patch.colors),
            button: self.button.merge(patch.button),
            card: self.card.merge(patch.card),
            shimmer: self.shimmer.merge(patch.shimmer),
            toggle: self.toggle.merge(patch.toggle),
            input_field: self.input_field.merge(patch.input_field),
            bottom_sheet: self.bottom_sheet.merge(patch.bottom_sheet),
            floating_button: self.floating_button.merge(patch.floating_button),
            tilted_button: self.tilted_button.merge(patch.tilted_button),
            score_meter: self.score_meter.merge(patch.score_meter),
            toast: self.toast.merge(patch.toast),
        }
    }
}

// ============================================================================
// Resolution helpers
// ============================================================================

impl Theme {
    /// Resolves a button face color: explicit override, then the theme
    /// entry, then white.
    pub fn button_face_color(&self, explicit: Option<Color>) -> Color {
        ColorSources::new()
            .then(explicit)
            .then(self.button.color)
            .resolve_or(palette::COLOR_WHITE)
    }

    /// Resolves the button edge colors around a face: per-side explicit
    /// override, then the theme entry, then the derived shadow. `top` and
    /// `left` have no derived fallback.
    pub fn button_edge_colors(&self, overrides: EdgeColors, face: Color) -> EdgeColors {
        let derived = EdgeColors::derive(face);
        let themed = self.button.edge_colors;
        EdgeColors {
            top: ColorSources::new()
                .then(overrides.top)
                .then(themed.top)
                .resolve(),
            right: ColorSources::new()
                .then(overrides.right)
                .then(themed.right)
                .then(derived.right)
                .resolve(),
            bottom: ColorSources::new()
                .then(overrides.bottom)
                .then(themed.bottom)
                .then(derived.bottom)
                .resolve(),
            left: ColorSources::new()
                .then(overrides.left)
                .then(themed.left)
                .resolve(),
        }
    }

    /// Resolves a card face color: explicit override, then the card entry,
    /// then the button entry, then near-black.
    pub fn card_face_color(&self, explicit: Option<Color>) -> Color {
        ColorSources::new()
            .then(explicit)
            .then(self.card.color)
            .then(self.button.color)
            .resolve_or(Color::rgb(0x1A, 0x1A, 0x1A))
    }

    /// Resolves the tilted button face color.
    pub fn tilted_face_color(&self, explicit: Option<Color>) -> Color {
        ColorSources::new()
            .then(explicit)
            .then(self.tilted_button.color)
            .resolve_or(palette::COLOR_WHITE)
    }

    /// Resolves the tilted button plunk color.
    pub fn tilted_plunk_color(&self, explicit: Option<Color>) -> Color {
        ColorSources::new()
            .then(explicit)
            .then(self.tilted_button.plunk_color)
            .resolve_or(palette::POP_BLACK[1])
    }

    /// Resolves the tilted button shadow color.
    pub fn tilted_shadow_color(&self, explicit: Option<Color>) -> Color {
        ColorSources::new()
            .then(explicit)
            .then(self.tilted_button.shadow_color)
            .resolve_or(palette::POP_BLACK[2])
    }

    /// Resolves toast colors for a kind: the theme entries win over the
    /// kind's fixed pair.
    pub fn toast_colors(&self, kind: ToastKind) -> (Color, Color) {
        let (background, text) = kind.colors();
        (
            ColorSources::new()
                .then(self.toast.background)
                .resolve_or(background),
            ColorSources::new().then(self.toast.color).resolve_or(text),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod builtin_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_modes() {
            assert_eq!(Theme::dark().mode, ColorMode::Dark);
            assert_eq!(Theme::light().mode, ColorMode::Light);
            assert_eq!(Theme::for_mode(ColorMode::Light).mode, ColorMode::Light);
        }

        #[test]
        fn test_dark_wiring() {
            let theme = Theme::dark();
            assert_eq!(theme.colors.background, Some(palette::COLOR_BLACK));
            assert_eq!(theme.button.color, Some(palette::COLOR_WHITE));
            assert_eq!(
                theme.button.edge_colors.right,
                Some(palette::POP_BLACK[0])
            );
            assert_eq!(theme.shimmer.color, Some(palette::SHIMMER_DEFAULT));
        }

        #[test]
        fn test_light_wiring() {
            let theme = Theme::light();
            assert_eq!(theme.colors.background, Some(palette::COLOR_WHITE));
            assert_eq!(theme.button.color, Some(palette::COLOR_BLACK));
            assert_eq!(theme.card.edge_colors.bottom, Some(palette::POP_WHITE[0]));
        }

        #[test]
        fn test_both_modes_share_toggle_on_colors() {
            assert_eq!(Theme::dark().toggle.on, Theme::light().toggle.on);
        }
    }

    mod merge_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_patch_wins_field_wise() {
            let patch = Theme {
                button: ButtonTheme {
                    color: Some(palette::COLOR_GREEN),
                    ..ButtonTheme::default()
                },
                ..Theme::default()
            };
            let theme = Theme::dark().merge(&patch);

            assert_eq!(theme.button.color, Some(palette::COLOR_GREEN));
            // Untouched leaves keep the base wiring.
            assert_eq!(theme.button.border_color, Some(palette::COLOR_WHITE));
            assert_eq!(theme.card, Theme::dark().card);
        }

        #[test]
        fn test_nested_edge_merge() {
            let patch = Theme {
                button: ButtonTheme {
                    edge_colors: EdgeColors::new().right(palette::COLOR_RED),
                    ..ButtonTheme::default()
                },
                ..Theme::default()
            };
            let theme = Theme::dark().merge(&patch);

            assert_eq!(theme.button.edge_colors.right, Some(palette::COLOR_RED));
            assert_eq!(
                theme.button.edge_colors.bottom,
                Some(palette::POP_BLACK[0])
            );
        }

        #[test]
        fn test_empty_patch_is_identity() {
            let base = Theme::dark();
            assert_eq!(base.merge(&Theme::default()), base);
        }

        #[test]
        fn test_mode_is_not_patched() {
            let theme = Theme::dark().merge(&Theme::light());
            assert_eq!(theme.mode, ColorMode::Dark);
        }
    }

    mod resolution_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_button_face_precedence() {
            let theme = Theme::dark();
            assert_eq!(
                theme.button_face_color(Some(palette::COLOR_RED)),
                palette::COLOR_RED
            );
            assert_eq!(theme.button_face_color(None), palette::COLOR_WHITE);

            let bare = Theme::default();
            assert_eq!(bare.button_face_color(None), palette::COLOR_WHITE);
        }

        #[test]
        fn test_button_edges_fall_through_to_derived() {
            let bare = Theme::default();
            let face = palette::COLOR_BLUE;
            let edges = bare.button_edge_colors(EdgeColors::NONE, face);
            assert_eq!(edges, EdgeColors::derive(face));
        }

        #[test]
        fn test_button_edges_theme_beats_derived() {
            let theme = Theme::dark();
            let edges = theme.button_edge_colors(EdgeColors::NONE, palette::COLOR_BLUE);
            assert_eq!(edges.right, Some(palette::POP_BLACK[0]));
        }

        #[test]
        fn test_button_edges_override_beats_theme() {
            let theme = Theme::dark();
            let overrides = EdgeColors::new().bottom(palette::COLOR_YELLOW);
            let edges = theme.button_edge_colors(overrides, palette::COLOR_BLUE);
            assert_eq!(edges.bottom, Some(palette::COLOR_YELLOW));
            assert_eq!(edges.right, Some(palette::POP_BLACK[0]));
        }

        #[test]
        fn test_card_face_falls_back_through_button() {
            let mut theme = Theme::dark();
            theme.card.color = None;
            assert_eq!(theme.card_face_color(None), palette::COLOR_WHITE);

            theme.button.color = None;
            assert_eq!(theme.card_face_color(None), Color::rgb(0x1A, 0x1A, 0x1A));
        }

        #[test]
        fn test_tilted_fallbacks() {
            let bare = Theme::default();
            assert_eq!(bare.tilted_face_color(None), palette::COLOR_WHITE);
            assert_eq!(bare.tilted_plunk_color(None), palette::POP_BLACK[1]);
            assert_eq!(bare.tilted_shadow_color(None), palette::POP_BLACK[2]);
        }

        #[test]
        fn test_toast_kind_table() {
            let bare = Theme::default();
            assert_eq!(
                bare.toast_colors(ToastKind::Success),
                (palette::COLOR_GREEN, palette::COLOR_WHITE)
            );
            assert_eq!(
                bare.toast_colors(ToastKind::Warning).1,
                palette::COLOR_BLACK
            );
        }

        #[test]
        fn test_toast_theme_overrides_kind() {
            let mut theme = Theme::dark();
            theme.toast.background = Some(palette::COLOR_BLUE);
            let (background, text) = theme.toast_colors(ToastKind::Error);
            assert_eq!(background, palette::COLOR_BLUE);
            assert_eq!(text, palette::COLOR_WHITE);
        }
    }
}
