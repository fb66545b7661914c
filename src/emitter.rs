use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::CarouselState;

/// Lifecycle notifications a carousel emits to its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// Setup completed.
    Ready,
    /// Before any reposition.
    BeforeMove,
    /// After any reposition.
    AfterMove,
    /// After a reposition that landed on a different item.
    AfterChange,
    /// The user activated the previous control.
    UserPrevious,
    /// The user activated the next control.
    UserNext,
    /// Autoplay advanced.
    Cycle,
}

impl Event {
    pub const ALL: [Event; 7] = [
        Event::Ready,
        Event::BeforeMove,
        Event::AfterMove,
        Event::AfterChange,
        Event::UserPrevious,
        Event::UserNext,
        Event::Cycle,
    ];
}

/// A handler invoked with a snapshot of the carousel state.
pub type EventCallback = Arc<dyn Fn(&CarouselState) + Send + Sync>;

/// Handle returned by [`crate::Carousel::on`], used to remove the listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// A per-instance listener table.
///
/// Listeners for the same event run in registration order.
#[derive(Clone, Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Event, EventCallback)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&mut self, event: Event, callback: EventCallback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, event, callback));
        id
    }

    /// Returns `false` if no listener had this id.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has(&self, event: Event) -> bool {
        self.entries.iter().any(|(_, e, _)| *e == event)
    }

    pub fn emit(&self, event: Event, state: &CarouselState) {
        for (_, e, callback) in &self.entries {
            if *e == event {
                callback(state);
            }
        }
    }
}

impl core::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(id, event, _)| (id, event)))
            .finish()
    }
}
