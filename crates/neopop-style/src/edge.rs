//! Edge surface colors for "pop" extrusions.
//!
//! An elevated NeoPop surface fakes its 3D depth with up to four flat edge
//! surfaces around the face. The shades are derived from the face color by
//! shifting HSL lightness, with the shift direction conditioned on how dark
//! the face reads: dark faces get *lighter* edges (a darker shade would
//! vanish against a near-black face), light faces get darker ones. The
//! right edge and bottom edge intentionally use different magnitudes so the
//! two visible surfaces read as lit differently.
//!
//! # Examples
//!
//! ```
//! use neopop_core::Color;
//! use neopop_style::edge::EdgeColors;
//!
//! let edges = EdgeColors::derive(Color::from_hex("#0d0d0d").unwrap());
//! // A near-black face pops lighter on both visible edges.
//! assert!(edges.right.unwrap().to_hsl().l > 0.05);
//! assert!(edges.top.is_none() && edges.left.is_none());
//! ```

use bitflags::bitflags;
use neopop_core::Color;

/// Lightness shift for the right (horizontal-shadow) edge of a dark face.
pub const HORIZONTAL_SHADOW_DARK_DELTA: f32 = 0.20;
/// Lightness shift for the right (horizontal-shadow) edge of a light face.
pub const HORIZONTAL_SHADOW_LIGHT_DELTA: f32 = -0.10;
/// Lightness shift for the bottom (vertical-shadow) edge of a dark face.
pub const VERTICAL_SHADOW_DARK_DELTA: f32 = 0.10;
/// Lightness shift for the bottom (vertical-shadow) edge of a light face.
pub const VERTICAL_SHADOW_LIGHT_DELTA: f32 = -0.20;
/// Lightness shift for a highlight edge of a dark face.
pub const HIGHLIGHT_DARK_DELTA: f32 = 0.30;
/// Lightness shift for a highlight edge of a light face.
pub const HIGHLIGHT_LIGHT_DELTA: f32 = -0.30;

bitflags! {
    /// The sides of a rectangular surface.
    ///
    /// Used both for "which edge surfaces are drawn" and for "which sides
    /// touch an adjacent surface".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        /// The top side.
        const TOP = 0b0001;
        /// The right side.
        const RIGHT = 0b0010;
        /// The bottom side.
        const BOTTOM = 0b0100;
        /// The left side.
        const LEFT = 0b1000;
    }
}

impl Edges {
    /// The sides that carry extrusion surfaces on a free-standing elevated
    /// surface: right and bottom.
    pub const POP: Self = Self::RIGHT.union(Self::BOTTOM);
}

/// Derives the right-edge (horizontal shadow) shade from a face color.
///
/// Dark face: lighten by 0.20. Light face: darken by 0.10.
pub fn horizontal_shadow(face: Color) -> Color {
    if face.is_dark() {
        face.adjust_lightness(HORIZONTAL_SHADOW_DARK_DELTA)
    } else {
        face.adjust_lightness(HORIZONTAL_SHADOW_LIGHT_DELTA)
    }
}

/// Derives the bottom-edge (vertical shadow) shade from a face color.
///
/// Dark face: lighten by 0.10. Light face: darken by 0.20.
pub fn vertical_shadow(face: Color) -> Color {
    if face.is_dark() {
        face.adjust_lightness(VERTICAL_SHADOW_DARK_DELTA)
    } else {
        face.adjust_lightness(VERTICAL_SHADOW_LIGHT_DELTA)
    }
}

/// Derives a highlight shade for an elevated stroke or inner border.
///
/// Dark face: lighten by 0.30. Light face: darken by 0.30.
pub fn highlight_edge(face: Color) -> Color {
    if face.is_dark() {
        face.adjust_lightness(HIGHLIGHT_DARK_DELTA)
    } else {
        face.adjust_lightness(HIGHLIGHT_LIGHT_DELTA)
    }
}

/// Per-side edge surface colors. An unset side means no surface is drawn
/// there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeColors {
    /// Top edge surface, if drawn.
    pub top: Option<Color>,
    /// Right edge surface, if drawn.
    pub right: Option<Color>,
    /// Bottom edge surface, if drawn.
    pub bottom: Option<Color>,
    /// Left edge surface, if drawn.
    pub left: Option<Color>,
}

impl EdgeColors {
    /// No edge surfaces.
    pub const NONE: Self = Self {
        top: None,
        right: None,
        bottom: None,
        left: None,
    };

    /// Creates an empty set of edge colors.
    #[inline]
    pub const fn new() -> Self {
        Self::NONE
    }

    /// Sets the top edge color.
    #[inline]
    pub const fn top(mut self, color: Color) -> Self {
        self.top = Some(color);
        self
    }

    /// Sets the right edge color.
    #[inline]
    pub const fn right(mut self, color: Color) -> Self {
        self.right = Some(color);
        self
    }

    /// Sets the bottom edge color.
    #[inline]
    pub const fn bottom(mut self, color: Color) -> Self {
        self.bottom = Some(color);
        self
    }

    /// Sets the left edge color.
    #[inline]
    pub const fn left(mut self, color: Color) -> Self {
        self.left = Some(color);
        self
    }

    /// Derives the standard edge shades for a face color: right and bottom
    /// shadows set, top and left absent.
    pub fn derive(face: Color) -> Self {
        Self {
            top: None,
            right: Some(horizontal_shadow(face)),
            bottom: Some(vertical_shadow(face)),
            left: None,
        }
    }

    /// Derives edge shades with per-side manual overrides.
    ///
    /// An override always wins for its side. Without an override, `right`
    /// and `bottom` fall back to the derived shadows while `top` and
    /// `left` stay absent (no surface), never a derived color.
    pub fn derive_with_overrides(face: Color, overrides: Self) -> Self {
        let derived = Self::derive(face);
        Self {
            top: overrides.top,
            right: overrides.right.or(derived.right),
            bottom: overrides.bottom.or(derived.bottom),
            left: overrides.left,
        }
    }

    /// Merges another set into this one; sides set in `patch` win.
    #[inline]
    pub fn merge(self, patch: Self) -> Self {
        Self {
            top: patch.top.or(self.top),
            right: patch.right.or(self.right),
            bottom: patch.bottom.or(self.bottom),
            left: patch.left.or(self.left),
        }
    }

    /// Returns which sides have a surface color set.
    pub fn sides(self) -> Edges {
        let mut sides = Edges::empty();
        if self.top.is_some() {
            sides |= Edges::TOP;
        }
        if self.right.is_some() {
            sides |= Edges::RIGHT;
        }
        if self.bottom.is_some() {
            sides |= Edges::BOTTOM;
        }
        if self.left.is_some() {
            sides |= Edges::LEFT;
        }
        sides
    }

    /// Returns `true` if no side has a surface color.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.sides().is_empty()
    }
}
