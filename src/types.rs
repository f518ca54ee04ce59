/// An axis-aligned rectangle in global (root/window) coordinates.
///
/// Edges follow screen conventions: `top <= bottom`, `left <= right`, with y growing
/// downwards. Degenerate (zero-area) rects are valid inputs everywhere; one sitting on a
/// container boundary fails containment and classifies as [`VisibleState::Gone`], while a
/// strictly interior one still counts as contained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Rect {
    pub const fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Area as an `i64` so that screen-sized edge values cannot overflow the multiply.
    pub const fn area(&self) -> i64 {
        self.height() as i64 * self.width() as i64
    }

    pub const fn is_empty(&self) -> bool {
        self.top >= self.bottom || self.left >= self.right
    }

    /// Whether the rect is well-formed (`bottom >= top`, `right >= left`).
    pub const fn is_well_formed(&self) -> bool {
        self.bottom >= self.top && self.right >= self.left
    }
}

/// The classified visibility of an element.
///
/// States are categorical, not ranked: transitions between any pair are valid and no
/// "more visible than" order is assumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisibleState {
    /// The whole element lies inside the reference rect and nothing is clipped away.
    CompletelyVisible,
    /// The element lies inside the reference rect but part of its drawing region is clipped.
    PartiallyVisible,
    /// Not visible to the user (off-screen, detached, window hidden, or clipped to nothing).
    Gone,
}

impl VisibleState {
    /// `true` for [`CompletelyVisible`](Self::CompletelyVisible) and
    /// [`PartiallyVisible`](Self::PartiallyVisible).
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::CompletelyVisible | Self::PartiallyVisible)
    }
}
