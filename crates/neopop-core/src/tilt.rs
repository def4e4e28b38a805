//! Parallelogram geometry for tilted "pop" extrusions.
//!
//! A tilted button is drawn as two polygons on one canvas: a skewed face
//! parallelogram and a plunk (shadow) parallelogram hanging off the face's
//! bottom edge. [`TiltConfig::geometry`] computes both, plus the canvas
//! extent, from the box dimensions and tilt parameters.
//!
//! The computation is pure and total: every finite input produces a
//! well-defined result. Negative dimensions are out of contract; they
//! yield a geometrically meaningless (but finite) result rather than a
//! panic.
//!
//! # Examples
//!
//! ```
//! use neopop_core::tilt::TiltConfig;
//!
//! let geometry = TiltConfig::new(200.0, 48.0).geometry();
//!
//! // The face's top edge is skewed relative to its bottom edge.
//! let [tl, _, _, bl] = geometry.face.points;
//! assert!(tl.x != bl.x);
//!
//! // The plunk hangs off the face's bottom edge.
//! assert_eq!(geometry.plunk.points[0], geometry.face.points[2]);
//! assert_eq!(geometry.plunk.points[1], geometry.face.points[3]);
//! ```

use crate::geometry::{Point, Quad, Size};
use std::f32::consts::PI;

/// Default tilt angle in radians (2π/5 = 72°).
pub const DEFAULT_TILT_ANGLE: f32 = 2.0 * PI / 5.0;

/// Default plunk offset distance in logical units.
pub const DEFAULT_SHADOW_DISTANCE: f32 = 20.0;

/// Which way the face's top edge leans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TiltDirection {
    /// Top edge skews toward the leading corner; the face is shifted right
    /// to keep its bottom edge at non-negative coordinates.
    #[default]
    Left,
    /// Mirror image of [`TiltDirection::Left`].
    Right,
}

impl TiltDirection {
    /// Sign applied to the horizontal skew.
    #[inline]
    pub const fn skew_sign(self) -> f32 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

/// Parameters for one tilted extrusion.
///
/// `width`, `height` and `depth` are logical units and expected to be
/// non-negative; negative values are out of contract (the result is
/// meaningless but no panic occurs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    /// Face width.
    pub width: f32,
    /// Face height.
    pub height: f32,
    /// Extrusion depth consumed by the press-animation layer; does not
    /// affect the static polygons.
    pub depth: f32,
    /// Tilt angle in radians.
    pub angle: f32,
    /// How far the plunk extends down-and-right from the face.
    pub shadow_distance: f32,
    /// Which way the face leans.
    pub direction: TiltDirection,
}

impl TiltConfig {
    /// Creates a config with the given face dimensions and default angle,
    /// shadow distance, and direction.
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            depth: 0.0,
            angle: DEFAULT_TILT_ANGLE,
            shadow_distance: DEFAULT_SHADOW_DISTANCE,
            direction: TiltDirection::Left,
        }
    }

    /// Sets the extrusion depth.
    #[inline]
    pub const fn depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the tilt angle in radians.
    #[inline]
    pub const fn angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the plunk offset distance.
    #[inline]
    pub const fn shadow_distance(mut self, shadow_distance: f32) -> Self {
        self.shadow_distance = shadow_distance;
        self
    }

    /// Sets the tilt direction.
    #[inline]
    pub const fn direction(mut self, direction: TiltDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Computes the face and plunk polygons and the canvas extent.
    ///
    /// The horizontal skew is `height · tan(angle)`, signed by direction;
    /// an angle of zero therefore degenerates to an axis-aligned
    /// rectangle, and zero width or height yields valid zero-area
    /// polygons.
    pub fn geometry(&self) -> TiltGeometry {
        let dx = self.height * self.angle.tan() * self.direction.skew_sign();

        let canvas = Size::new(
            self.width + dx.abs() + self.shadow_distance,
            self.height + self.shadow_distance,
        );

        let offset_x = match self.direction {
            TiltDirection::Left => dx.abs(),
            TiltDirection::Right => 0.0,
        };

        // Face parallelogram: top edge skewed by dx relative to the bottom.
        let face = Quad::new([
            Point::new(offset_x + dx, 0.0),
            Point::new(offset_x + dx + self.width, 0.0),
            Point::new(offset_x + self.width, self.height),
            Point::new(offset_x, self.height),
        ]);

        // Plunk: anchored to the face's bottom edge, extending
        // down-and-right regardless of tilt direction.
        let d = self.shadow_distance;
        let plunk = Quad::new([
            face.points[2],
            face.points[3],
            face.points[3].translate(d, d),
            face.points[2].translate(d, d),
        ]);

        TiltGeometry {
            face,
            plunk,
            canvas,
        }
    }
}

/// The polygons and canvas extent for one tilted extrusion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltGeometry {
    /// Face parallelogram in top-left, top-right, bottom-right,
    /// bottom-left order.
    pub face: Quad,
    /// Plunk parallelogram; its first two points are the face's
    /// bottom-right and bottom-left corners.
    pub plunk: Quad,
    /// Canvas extent sized for both polygons.
    pub canvas: Size,
}
