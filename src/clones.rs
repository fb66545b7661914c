use alloc::vec::Vec;

use crate::Item;

/// Leading/trailing clone bookkeeping for infinite carousels.
///
/// With `count` clones per side the sequence is laid out as
/// `[copies of the last `count` real items] [real items] [copies of the first `count` real items]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct CloneSet {
    count: usize,
}

impl CloneSet {
    /// Clones on each side.
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Regenerates clones for `per_page` items per page.
    ///
    /// Returns the indexes of freshly inserted clones, or `None` when the existing clones are
    /// already right. Fewer real items than `per_page` are repeated cyclically so both sides
    /// always hold exactly `per_page` clones.
    pub(crate) fn sync<T: Clone>(
        &mut self,
        items: &mut Vec<Item<T>>,
        per_page: usize,
    ) -> Option<Vec<usize>> {
        let present = items.iter().filter(|it| it.is_clone()).count();
        if self.count == per_page && present == per_page * 2 {
            return None;
        }

        self.strip(items);
        let real = items.len();
        if real == 0 || per_page == 0 {
            return Some(Vec::new());
        }

        let leading: Vec<Item<T>> = (0..per_page)
            .map(|k| Item::clone_of(items[k % real].value().clone()))
            .collect();
        let skip = (real * per_page.div_ceil(real)) - per_page;
        let trailing: Vec<Item<T>> = (0..per_page)
            .map(|k| Item::clone_of(items[(skip + k) % real].value().clone()))
            .collect();

        items.extend(leading);
        items.splice(0..0, trailing);
        self.count = per_page;

        rdebug!(per_page, real, "CloneSet::sync regenerated");
        let total = items.len();
        Some((0..per_page).chain(total - per_page..total).collect())
    }

    /// Removes every clone, leaving only real items.
    pub(crate) fn strip<T>(&mut self, items: &mut Vec<Item<T>>) {
        items.retain(|it| !it.is_clone());
        self.count = 0;
    }

    /// Substitutes an equivalent destination inside the clone region.
    ///
    /// Moving from one bound straight to the other would rewind across every item. When the
    /// previous position sits on the opposite bound, the destination is shifted by the width
    /// of one clone side so the host can jump there instantly and animate the short way.
    pub(crate) fn filter_position(
        &self,
        destination: i64,
        min: i64,
        max: i64,
        last_position: i64,
        item_size: u32,
    ) -> i64 {
        let offset = item_size as i64 * self.count as i64;
        if destination == min && last_position == max {
            destination + offset
        } else if destination == max && last_position == min {
            destination - offset
        } else {
            destination
        }
    }
}
