//! Button variants, sizes, and placement.
//!
//! A NeoPop button cluster shares extrusion edges between neighbors: a
//! button drops the edge surfaces on sides where another button sits flush
//! against it, so the cluster reads as one extruded slab. Placement is
//! described by [`ButtonPosition`] (where the button sits inside the
//! cluster) plus an [`Edges`] set of explicitly adjacent sides.

use crate::edge::Edges;

/// Visual variant of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonVariant {
    /// Extruded face with edge surfaces and press-down travel.
    #[default]
    Elevated,
    /// Flat face, no extrusion.
    Flat,
    /// Transparent face with a stroked border.
    Stroke,
}

impl ButtonVariant {
    /// Returns whether this variant draws extrusion edges.
    #[inline]
    pub const fn is_elevated(self) -> bool {
        matches!(self, Self::Elevated)
    }
}

/// Size class of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonSize {
    /// 50 logical units tall.
    Big,
    /// 40 logical units tall.
    #[default]
    Medium,
    /// 30 logical units tall.
    Small,
}

/// The numeric tokens for one button size class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonSizeToken {
    /// Face height.
    pub height: f32,
    /// Horizontal content padding.
    pub padding_horizontal: f32,
    /// Icon edge length.
    pub icon_height: f32,
    /// Label font size.
    pub font_size: f32,
    /// Corner radius (NeoPop buttons are square-cornered).
    pub border_radius: f32,
}

impl ButtonSize {
    /// Returns the size tokens for this class.
    pub const fn token(self) -> ButtonSizeToken {
        match self {
            Self::Big => ButtonSizeToken {
                height: 50.0,
                padding_horizontal: 30.0,
                icon_height: 20.0,
                font_size: 16.0,
                border_radius: 0.0,
            },
            Self::Medium => ButtonSizeToken {
                height: 40.0,
                padding_horizontal: 20.0,
                icon_height: 16.0,
                font_size: 14.0,
                border_radius: 0.0,
            },
            Self::Small => ButtonSizeToken {
                height: 30.0,
                padding_horizontal: 25.0,
                icon_height: 14.0,
                font_size: 12.0,
                border_radius: 0.0,
            },
        }
    }
}

/// Where a button sits inside a cluster of flush neighbors.
///
/// A free-standing button is `BottomRight` (the default): nothing sits to
/// its right or below it, so both pop edges are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonPosition {
    /// Top-left corner of the cluster.
    TopLeft,
    /// Along the top edge, neighbors on both sides and below.
    TopEdge,
    /// Top-right corner of the cluster.
    TopRight,
    /// Along the left edge, neighbors above, below, and to the right.
    LeftEdge,
    /// Fully surrounded.
    Center,
    /// Along the right edge, neighbors above, below, and to the left.
    RightEdge,
    /// Bottom-left corner of the cluster.
    BottomLeft,
    /// Along the bottom edge, neighbors on both sides and above.
    BottomEdge,
    /// Bottom-right corner of the cluster (free-standing default).
    #[default]
    BottomRight,
}

impl ButtonPosition {
    /// The sides where this position has a flush neighbor.
    pub const fn shared_edges(self) -> Edges {
        match self {
            Self::TopLeft => Edges::RIGHT.union(Edges::BOTTOM),
            Self::TopEdge => Edges::LEFT.union(Edges::RIGHT).union(Edges::BOTTOM),
            Self::TopRight => Edges::LEFT.union(Edges::BOTTOM),
            Self::LeftEdge => Edges::TOP.union(Edges::RIGHT).union(Edges::BOTTOM),
            Self::Center => Edges::all(),
            Self::RightEdge => Edges::TOP.union(Edges::LEFT).union(Edges::BOTTOM),
            Self::BottomLeft => Edges::TOP.union(Edges::RIGHT),
            Self::BottomEdge => Edges::TOP.union(Edges::LEFT).union(Edges::RIGHT),
            Self::BottomRight => Edges::TOP.union(Edges::LEFT),
        }
    }

    /// The edge surfaces to draw for this position.
    ///
    /// Starts from the pop set (right + bottom), then removes sides shared
    /// with cluster neighbors and any explicitly adjacent sides.
    pub fn visible_edges(self, adjacent: Edges) -> Edges {
        Edges::POP
            .difference(self.shared_edges())
            .difference(adjacent)
    }
}
