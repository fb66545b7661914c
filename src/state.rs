use alloc::vec::Vec;

/// Enabled state of the previous/next controls.
///
/// With `wraparound` both controls stay enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlState {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            previous_enabled: true,
            next_enabled: true,
        }
    }
}

/// A read-only snapshot of a carousel, handed to every event handler.
///
/// Indexes point into the full item sequence, clones included.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub current_item_index: usize,
    /// The index before the latest change; `None` until the first change.
    pub last_item_index: Option<usize>,
    pub start_item_index: usize,
    pub end_item_index: usize,
    pub start_page_item_index: usize,
    pub end_page_item_index: usize,
    pub current_page_index: usize,
    /// First item index of every page.
    pub pages: Vec<usize>,
    pub items_per_page: usize,
    pub item_count: usize,
    /// Clones on each side (infinite carousels only).
    pub clone_count: usize,
    pub item_size: u32,
    pub mask_size: u32,
    pub container_size: u32,
    /// Target position of the latest move, in pixels.
    pub position: i64,
    pub busy: bool,
    pub cycling: bool,
    pub enabled: bool,
    pub index_changed: bool,
    /// `None` when arrow controls are off or the carousel is disabled.
    pub controls: Option<ControlState>,
    pub focused_item_index: Option<usize>,
}

impl CarouselState {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
