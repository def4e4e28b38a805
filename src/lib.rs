//! NeoPop: themeable "pop" UI primitives for Rust front ends.
//!
//! NeoPop fakes 3D extrusions on 2D surfaces. This crate bundles the two
//! layers that make that work:
//!
//! - [`core`]: value types and pure math: sRGB colors with a hex codec,
//!   HSL conversion, WCAG luminance, and the tilt geometry engine that
//!   produces the face/plunk parallelograms for tilted buttons
//! - [`style`]: the styling layer: edge-shade derivation from a face
//!   color, the NeoPop palette and design tokens, the theme model with
//!   explicit color-resolution chains, and the haptic capability trait
//!
//! # Example
//!
//! ```
//! use neopop::prelude::*;
//!
//! // Derive the extrusion edge shades for a button face.
//! let face = Color::from_hex("#144CC7")?;
//! let edges = EdgeColors::derive(face);
//! assert!(edges.right.is_some() && edges.bottom.is_some());
//!
//! // Compute the parallelogram geometry for a tilted button.
//! let geometry = TiltConfig::new(200.0, 48.0).depth(8.0).geometry();
//! assert!(geometry.canvas.width > 200.0);
//! # Ok::<(), neopop::core::ColorParseError>(())
//! ```

pub use neopop_core as core;
pub use neopop_style as style;

pub mod prelude {
    pub use neopop_core::{
        Color, ColorParseError, Hsl, Point, Quad, Size, TiltConfig, TiltDirection, TiltGeometry,
    };
    pub use neopop_style::{
        ButtonPosition, ButtonSize, ButtonVariant, ColorMode, ColorSources, EdgeColors, Edges,
        HapticPattern, HapticsProvider, NoopHaptics, ScoreBand, Theme, Tint, ToastKind,
    };
}
