//! Explicit color-resolution chains.
//!
//! Widget colors come from several places at once: an explicit per-call
//! override, a component's theme entry, a derived shade, and a hard
//! fallback. [`ColorSources`] names that precedence as an ordered list
//! resolved left to right, so the order is inspectable and testable
//! instead of living in a chain of `or` expressions at every call site.
//!
//! # Examples
//!
//! ```
//! use neopop_core::Color;
//! use neopop_style::resolve::ColorSources;
//!
//! let explicit: Option<Color> = None;
//! let themed = Some(Color::NEAR_BLACK);
//!
//! let face = ColorSources::new()
//!     .then(explicit)
//!     .then(themed)
//!     .resolve_or(Color::WHITE);
//! assert_eq!(face, Color::NEAR_BLACK);
//! ```

use neopop_core::Color;
use smallvec::SmallVec;

/// An ordered list of optional color sources, highest precedence first.
///
/// Chains are short (override → theme → derived → fallback), so sources
/// stay inline on the stack.
#[derive(Debug, Clone, Default)]
pub struct ColorSources {
    sources: SmallVec<[Option<Color>; 4]>,
}

impl ColorSources {
    /// Creates an empty chain.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next-lower-precedence source.
    #[inline]
    pub fn then(mut self, source: Option<Color>) -> Self {
        self.sources.push(source);
        self
    }

    /// Returns the first set source, if any.
    pub fn resolve(&self) -> Option<Color> {
        self.sources.iter().copied().flatten().next()
    }

    /// Returns the first set source, or `fallback` if every source is
    /// unset.
    #[inline]
    pub fn resolve_or(&self, fallback: Color) -> Color {
        self.resolve().unwrap_or(fallback)
    }

    /// Number of sources in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` if the chain has no sources at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
