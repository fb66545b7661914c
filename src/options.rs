use alloc::sync::Arc;

use crate::{
    Direction, Easing, Event, EventCallback, HitArea, MeasureInput, Measurement, Mode,
    Positioning,
};

/// The host's measurement provider.
///
/// Called whenever the carousel is (re)measured, with the number of items currently in the
/// container (clones included).
pub type MeasureFn = Arc<dyn Fn(MeasureInput) -> Measurement + Send + Sync>;

/// Autoplay configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Automatic {
    pub enabled: bool,
    /// How long to wait between items, on top of the transition speed.
    pub pause_ms: u64,
    pub direction: Direction,
    /// When set, hovering this rectangle pauses autoplay instead of hovering the whole mask.
    pub hit_area: Option<HitArea>,
}

impl Default for Automatic {
    fn default() -> Self {
        Self {
            enabled: false,
            pause_ms: 4000,
            direction: Direction::Forward,
            hit_area: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlsOptions {
    /// Previous/next arrow controls.
    pub arrows: bool,
    /// Arrow-key navigation.
    pub key: bool,
}

impl Default for ControlsOptions {
    fn default() -> Self {
        Self {
            arrows: true,
            key: false,
        }
    }
}

/// Optional lifecycle handlers. A missing handler is simply skipped.
#[derive(Clone, Default)]
pub struct Callbacks {
    pub ready: Option<EventCallback>,
    pub before_move: Option<EventCallback>,
    pub after_move: Option<EventCallback>,
    pub after_change: Option<EventCallback>,
    pub user_previous: Option<EventCallback>,
    pub user_next: Option<EventCallback>,
    pub cycle: Option<EventCallback>,
}

impl Callbacks {
    pub fn get(&self, event: Event) -> Option<&EventCallback> {
        match event {
            Event::Ready => self.ready.as_ref(),
            Event::BeforeMove => self.before_move.as_ref(),
            Event::AfterMove => self.after_move.as_ref(),
            Event::AfterChange => self.after_change.as_ref(),
            Event::UserPrevious => self.user_previous.as_ref(),
            Event::UserNext => self.user_next.as_ref(),
            Event::Cycle => self.cycle.as_ref(),
        }
    }

    pub fn set(&mut self, event: Event, callback: Option<EventCallback>) {
        let slot = match event {
            Event::Ready => &mut self.ready,
            Event::BeforeMove => &mut self.before_move,
            Event::AfterMove => &mut self.after_move,
            Event::AfterChange => &mut self.after_change,
            Event::UserPrevious => &mut self.user_previous,
            Event::UserNext => &mut self.user_next,
            Event::Cycle => &mut self.cycle,
        };
        *slot = callback;
    }
}

impl core::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut set = f.debug_set();
        for event in Event::ALL {
            if self.get(event).is_some() {
                set.entry(&event);
            }
        }
        set.finish()
    }
}

/// Configuration for [`crate::Carousel`].
///
/// Fixed once the carousel is constructed. `infinite` implies `wraparound`; the carousel
/// enforces that when it takes the options.
#[derive(Clone)]
pub struct CarouselOptions {
    pub mode: Mode,
    /// Stepping past the last item lands on the first one (and vice versa).
    pub wraparound: bool,
    /// Seamless looping through cloned boundary items.
    pub infinite: bool,
    /// Zero-based index of the real item shown first.
    pub start_at_item: usize,
    pub lazy_load: bool,
    /// Track which item the user clicked or swiped to.
    pub auto_focus: bool,
    /// Follow touch drags.
    pub touch: bool,
    /// Default transition duration.
    pub speed_ms: u64,
    pub easing: Easing,
    pub positioning: Positioning,
    pub automatic: Automatic,
    pub controls: ControlsOptions,
    pub callbacks: Callbacks,
    pub measure: MeasureFn,
}

impl CarouselOptions {
    /// Creates options with the default settings and the given measurement provider.
    pub fn new(measure: impl Fn(MeasureInput) -> Measurement + Send + Sync + 'static) -> Self {
        Self {
            mode: Mode::Fluid,
            wraparound: false,
            infinite: false,
            start_at_item: 0,
            lazy_load: true,
            auto_focus: false,
            touch: true,
            speed_ms: 1250,
            easing: Easing::Swing,
            positioning: Positioning::Transform,
            automatic: Automatic::default(),
            controls: ControlsOptions::default(),
            callbacks: Callbacks::default(),
            measure: Arc::new(measure),
        }
    }

    /// Fluid mode: every item is exactly as wide as the mask.
    pub fn fluid(mask_size: u32) -> Self {
        Self::new(move |input| Measurement::uniform(mask_size, mask_size, input.item_count))
    }

    /// Fixed mode with uniform `item_size` items in a `mask_size` mask.
    pub fn fixed(item_size: u32, mask_size: u32) -> Self {
        Self::new(move |input| Measurement::uniform(item_size, mask_size, input.item_count))
            .with_mode(Mode::Fixed)
    }

    /// `wraparound`, taking `infinite` into account.
    pub fn wraps(&self) -> bool {
        self.wraparound || self.infinite
    }

    pub(crate) fn normalized(mut self) -> Self {
        if self.infinite {
            self.wraparound = true;
        }
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_wraparound(mut self, wraparound: bool) -> Self {
        self.wraparound = wraparound;
        self
    }

    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    pub fn with_start_at_item(mut self, start_at_item: usize) -> Self {
        self.start_at_item = start_at_item;
        self
    }

    pub fn with_lazy_load(mut self, lazy_load: bool) -> Self {
        self.lazy_load = lazy_load;
        self
    }

    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    pub fn with_speed_ms(mut self, speed_ms: u64) -> Self {
        self.speed_ms = speed_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_positioning(mut self, positioning: Positioning) -> Self {
        self.positioning = positioning;
        self
    }

    pub fn with_automatic(mut self, automatic: Automatic) -> Self {
        self.automatic = automatic;
        self
    }

    /// Enables autoplay with the given pause and the default direction.
    pub fn with_autoplay(mut self, pause_ms: u64) -> Self {
        self.automatic.enabled = true;
        self.automatic.pause_ms = pause_ms;
        self
    }

    pub fn with_controls(mut self, controls: ControlsOptions) -> Self {
        self.controls = controls;
        self
    }

    pub fn with_callback(
        mut self,
        event: Event,
        callback: Option<impl Fn(&crate::CarouselState) + Send + Sync + 'static>,
    ) -> Self {
        self.callbacks
            .set(event, callback.map(|f| Arc::new(f) as EventCallback));
        self
    }

    pub fn with_measure(
        mut self,
        measure: impl Fn(MeasureInput) -> Measurement + Send + Sync + 'static,
    ) -> Self {
        self.measure = Arc::new(measure);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("mode", &self.mode)
            .field("wraparound", &self.wraparound)
            .field("infinite", &self.infinite)
            .field("start_at_item", &self.start_at_item)
            .field("lazy_load", &self.lazy_load)
            .field("auto_focus", &self.auto_focus)
            .field("touch", &self.touch)
            .field("speed_ms", &self.speed_ms)
            .field("easing", &self.easing)
            .field("positioning", &self.positioning)
            .field("automatic", &self.automatic)
            .field("controls", &self.controls)
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}
