use revolver::{Animator, Carousel, CarouselOptions, InputEvent, Mode, Offset};

use crate::TweenAnimator;

/// A framework-neutral controller that wraps a `revolver::Carousel` driven by a
/// [`TweenAnimator`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - navigation methods / `handle_input` when UI events occur
/// - `tick(now_ms)` each frame/timer tick (tweens, seamless jumps, autoplay)
///
/// Apply the offset returned from `tick()` to the real container.
#[derive(Clone, Debug)]
pub struct Controller<T> {
    c: Carousel<T, TweenAnimator>,
    applied: Option<i64>,
}

impl<T: Clone> Controller<T> {
    pub fn new(items: impl IntoIterator<Item = T>, options: CarouselOptions, now_ms: u64) -> Self {
        Self::from_carousel(Carousel::new(
            items,
            options,
            TweenAnimator::new(),
            now_ms,
        ))
    }

    pub fn from_carousel(c: Carousel<T, TweenAnimator>) -> Self {
        Self { c, applied: None }
    }

    pub fn carousel(&self) -> &Carousel<T, TweenAnimator> {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<T, TweenAnimator> {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel<T, TweenAnimator> {
        self.c
    }

    pub fn is_animating(&self) -> bool {
        self.c.animator().is_animating()
    }

    /// The container's current position in pixels.
    pub fn position(&self) -> i64 {
        self.c.animator().position()
    }

    /// The current position in the unit the container expects (percent in fluid mode).
    pub fn offset(&self) -> Offset {
        let position = self.position();
        match self.c.options().mode {
            Mode::Fluid => Offset::Percent(self.c.geometry().position_to_percent(position)),
            Mode::Fixed => Offset::Pixels(position),
        }
    }

    pub fn next(&mut self, now_ms: u64) -> bool {
        self.c.next(now_ms)
    }

    pub fn previous(&mut self, now_ms: u64) -> bool {
        self.c.previous(now_ms)
    }

    pub fn to_page(&mut self, page: usize, now_ms: u64) -> bool {
        self.c.to_page(page, None, now_ms)
    }

    pub fn handle_input(&mut self, event: InputEvent, now_ms: u64) -> bool {
        self.c.handle_input(event, now_ms)
    }

    /// Advances the controller.
    ///
    /// Samples the active tween, reports its completion to the carousel, then lets the carousel
    /// run its own timers. Returns the new position if it changed since the previous tick.
    pub fn tick(&mut self, now_ms: u64) -> Option<i64> {
        if self.c.animator_mut().advance(now_ms) {
            self.c.transition_end();
        }
        self.c.tick(now_ms);

        let position = self.position();
        if self.applied == Some(position) {
            return None;
        }
        self.applied = Some(position);
        Some(position)
    }
}
