use alloc::vec::Vec;

use crate::{Measurement, Positioning};

/// Number of whole items that fit in the mask, never less than one.
///
/// A zero item size (nothing measured yet) also yields one.
pub fn items_per_page(item_size: u32, mask_size: u32) -> usize {
    if item_size == 0 {
        return 1;
    }
    ((mask_size / item_size) as usize).max(1)
}

/// Returns the index of the first item of each page.
///
/// Pages stride by `items_per_page` over `real_count` items. For finite carousels a short last
/// page is pulled back so it ends exactly at the last item.
pub fn pages(real_count: usize, items_per_page: usize, infinite: bool) -> Vec<usize> {
    let per_page = items_per_page.max(1);
    let num_pages = real_count.div_ceil(per_page);
    let mut out: Vec<usize> = (0..num_pages).map(|page| page * per_page).collect();
    if !infinite && real_count % per_page != 0 {
        if let Some(last) = out.last_mut() {
            *last = real_count.saturating_sub(per_page);
        }
    }
    out
}

/// Maps between item indexes and container positions for one measurement.
///
/// Positions are container offsets in pixels: `0` shows the first slot, moving forward makes
/// the position more negative. `min_position` is therefore the largest value and
/// `max_position` the smallest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Geometry {
    pub measurement: Measurement,
    pub start_item_index: usize,
    pub end_item_index: usize,
    pub infinite: bool,
    pub positioning: Positioning,
}

impl Geometry {
    pub fn new(
        measurement: Measurement,
        start_item_index: usize,
        end_item_index: usize,
        infinite: bool,
        positioning: Positioning,
    ) -> Self {
        debug_assert!(
            start_item_index <= end_item_index,
            "Geometry: inverted bounds (start={start_item_index}, end={end_item_index})"
        );
        Self {
            measurement,
            start_item_index,
            end_item_index,
            infinite,
            positioning,
        }
    }

    pub fn item_size(&self) -> u32 {
        self.measurement.item_size
    }

    pub fn mask_size(&self) -> u32 {
        self.measurement.mask_size
    }

    pub fn container_size(&self) -> u32 {
        self.measurement.container_size
    }

    pub fn items_per_page(&self) -> usize {
        items_per_page(self.item_size(), self.mask_size())
    }

    /// Clamps `index` into `[start_item_index, end_item_index]`.
    pub fn force_valid_item_index(&self, index: usize) -> usize {
        index.clamp(self.start_item_index, self.end_item_index)
    }

    pub fn position_at_index(&self, index: usize) -> i64 {
        let index = self.force_valid_item_index(index) as i64;
        -(index * self.item_size() as i64)
    }

    pub fn index_at_position(&self, position: i64) -> usize {
        let item_size = self.item_size() as i64;
        if item_size == 0 {
            return self.start_item_index;
        }
        let index = position.unsigned_abs() / item_size as u64;
        self.force_valid_item_index(usize::try_from(index).unwrap_or(usize::MAX))
    }

    pub fn min_position(&self) -> i64 {
        self.position_at_index(self.start_item_index)
    }

    pub fn max_position(&self) -> i64 {
        let end = self.position_at_index(self.end_item_index);
        if self.infinite {
            // Trailing clones always fill the rest of the mask.
            return end;
        }
        end - (self.item_size() as i64 - self.mask_size() as i64)
    }

    /// Keeps a position from running past either edge.
    pub fn force_valid_position(&self, position: i64) -> i64 {
        let min = self.min_position();
        let max = self.max_position();
        if position < max {
            max
        } else if position > min {
            min
        } else {
            position
        }
    }

    pub fn position_to_percent(&self, position: i64) -> f32 {
        let basis = match self.positioning {
            Positioning::Transform => self.container_size(),
            Positioning::Offset => self.mask_size(),
        };
        if basis == 0 {
            return 0.0;
        }
        (position as f64 / basis as f64 * 100.0) as f32
    }

    pub fn first_visible_index_at(&self, position: i64) -> usize {
        self.index_at_position(position - 1)
    }

    /// The last item whose leading edge is inside the mask at `position`.
    pub fn last_visible_index_at(&self, position: i64) -> usize {
        self.index_at_position(position - self.mask_size() as i64 + 1)
    }

    /// Inclusive `(first, last)` indexes visible at `position`.
    pub fn visible_at(&self, position: i64) -> (usize, usize) {
        let first = self.first_visible_index_at(position);
        let last = self.last_visible_index_at(position).max(first);
        (first, last)
    }
}
