//! Styling layer for `NeoPop`.
//!
//! Everything above the core value math and below the widgets:
//!
//! - [`edge`]: edge-shade derivation from a face color, with per-side
//!   overrides and the [`Edges`] side set
//! - [`palette`]: the NeoPop color palette (base colors, pop scales,
//!   brand palettes, semantic ramps)
//! - [`tokens`]: numeric design tokens (sizes, timings, opacity steps)
//! - [`button`]: button variants, size classes, and cluster placement
//! - [`resolve`]: explicit ordered color-resolution chains
//! - [`theme`]: the theme model with built-in dark/light themes and typed
//!   overlay merging
//! - [`haptics`]: haptic feedback as an injected capability
//! - [`meter`]: score meter (gauge) sweep math and band strokes
//!
//! # Examples
//!
//! ```
//! use neopop_style::edge::EdgeColors;
//! use neopop_style::theme::Theme;
//!
//! let theme = Theme::dark();
//! let face = theme.button_face_color(None);
//! let edges = theme.button_edge_colors(EdgeColors::NONE, face);
//! assert!(edges.right.is_some() && edges.bottom.is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::float_cmp)]

pub mod button;
pub mod edge;
pub mod haptics;
pub mod meter;
pub mod palette;
pub mod resolve;
pub mod theme;
pub mod tokens;

// Re-export commonly used types at the crate root for convenience
pub use button::{ButtonPosition, ButtonSize, ButtonSizeToken, ButtonVariant};
pub use edge::{EdgeColors, Edges};
pub use haptics::{HapticPattern, HapticsProvider, NoopHaptics};
pub use meter::ScoreBand;
pub use palette::Tint;
pub use resolve::ColorSources;
pub use theme::{ColorMode, Theme, ToastKind};
pub use tokens::ShimmerConfig;
