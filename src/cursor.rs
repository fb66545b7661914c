use crate::Direction;

/// An index confined to `[start, end]` that either stops at or wraps past its bounds.
///
/// Item navigation and page navigation share this: items step over
/// `[start_item_index, end_item_index]`, pages over `[0, num_pages - 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundedCursor {
    pub start: usize,
    pub end: usize,
    pub wrap: bool,
}

impl BoundedCursor {
    pub fn new(start: usize, end: usize, wrap: bool) -> Self {
        debug_assert!(start <= end, "BoundedCursor: inverted bounds");
        Self {
            start,
            end: end.max(start),
            wrap,
        }
    }

    /// The index one step from `current` in `direction`.
    ///
    /// At the boundary being moved towards this returns the opposite boundary when wrapping,
    /// otherwise the boundary itself.
    pub fn step(&self, current: usize, direction: Direction) -> usize {
        let (boundary, opposite) = match direction {
            Direction::Forward => (self.end, self.start),
            Direction::Backward => (self.start, self.end),
        };
        if current == boundary {
            return if self.wrap { opposite } else { boundary };
        }
        match direction {
            Direction::Forward => current.saturating_add(1),
            Direction::Backward => current.saturating_sub(1),
        }
    }

    /// Whether stepping from `current` in `direction` crosses to the opposite boundary.
    pub fn wraps_from(&self, current: usize, direction: Direction) -> bool {
        let boundary = match direction {
            Direction::Forward => self.end,
            Direction::Backward => self.start,
        };
        self.wrap && current == boundary && self.start != self.end
    }
}
