//! Core types for `NeoPop`.
//!
//! This crate provides the value types and pure math underneath the `NeoPop`
//! styling layer:
//!
//! - [`color`]: sRGB color representation with a hex codec, HSL conversion,
//!   and WCAG luminance helpers
//! - [`geometry`]: 2D geometry primitives (Point, Size, Quad)
//! - [`tilt`]: parallelogram geometry for tilted "pop" extrusions
//! - [`error`]: error types for the core library
//!
//! Every operation here is a pure, synchronous function over value types:
//! no I/O, no shared state, no ordering requirements between calls.
//!
//! # Examples
//!
//! ## Working with colors
//!
//! ```
//! use neopop_core::color::Color;
//!
//! let face = Color::from_hex("#06C270").unwrap();
//!
//! // Perceptual classification drives edge derivation upstream.
//! assert!(!face.is_dark());
//!
//! // Lightness adjustment round-trips through HSL.
//! let shaded = face.adjust_lightness(-0.2);
//! assert!(shaded.to_hsl().l < face.to_hsl().l);
//! ```
//!
//! ## Computing tilt geometry
//!
//! ```
//! use neopop_core::tilt::{TiltConfig, TiltDirection};
//!
//! let geometry = TiltConfig::new(200.0, 48.0)
//!     .direction(TiltDirection::Left)
//!     .geometry();
//!
//! // The plunk shares the face's bottom edge.
//! assert_eq!(geometry.plunk.points[0], geometry.face.points[2]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::missing_errors_doc)]

pub mod color;
pub mod error;
pub mod geometry;
pub mod tilt;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, Hsl};
pub use error::ColorParseError;
pub use geometry::{Point, Quad, Size};
pub use tilt::{TiltConfig, TiltDirection, TiltGeometry};
