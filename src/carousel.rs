use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::clones::CloneSet;
use crate::cursor::BoundedCursor;
use crate::cycle::Cycle;
use crate::geometry::{self, Geometry};
use crate::input::{KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP, Touch};
use crate::{
    Animator, CarouselOptions, CarouselState, Completion, ControlState, Direction, Event,
    EventCallback, InputEvent, InstantAnimator, Item, ListenerId, Listeners, MeasureInput,
    Measurement, Mode, MoveRequest, Offset,
};

/// Delay between the instant jump into the clone region and the visible move that follows.
pub const JUMP_DELAY_MS: u64 = 1;

/// Second leg of a seamless jump, issued by `tick` once due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingJump {
    position: i64,
    duration_ms: u64,
    due_ms: u64,
}

/// A headless carousel.
///
/// This type holds no UI objects:
/// - Item sizes come from the measurement provider in [`CarouselOptions`].
/// - Transitions are delegated to an [`Animator`]; the host reports completion through
///   [`Carousel::transition_end`] unless the animator completes immediately.
/// - Time only enters through `now_ms` arguments; call [`Carousel::tick`] from a timer or
///   frame loop to drive autoplay and seamless jumps.
///
/// Indexes address the full item sequence, clones included. Out-of-range requests are clamped
/// and redundant ones are ignored; nothing here returns an error.
///
/// At most one transition is in flight. Navigation requests that arrive while the carousel
/// is busy are ignored and report `false`.
#[derive(Clone, Debug)]
pub struct Carousel<T, A = InstantAnimator> {
    options: CarouselOptions,
    animator: A,
    items: Vec<Item<T>>,
    clones: CloneSet,
    geometry: Geometry,
    pages: Vec<usize>,

    current_item_index: usize,
    last_item_index: Option<usize>,
    position: i64,
    busy: bool,
    enabled: bool,
    index_changed: bool,
    destroyed: bool,

    cycle: Cycle,
    jump: Option<PendingJump>,
    touch: Option<Touch>,
    focused_item_index: Option<usize>,
    controls: Option<ControlState>,
    lazy_queue: Vec<usize>,
    listeners: Listeners,
}

impl<T: Clone, A: Animator> Carousel<T, A> {
    /// Creates a carousel, measures it, and moves to `options.start_at_item`.
    ///
    /// With fewer than two items the carousel stays disabled and does not emit `Ready`.
    pub fn new(
        items: impl IntoIterator<Item = T>,
        options: CarouselOptions,
        animator: A,
        now_ms: u64,
    ) -> Self {
        let options = options.normalized();
        let items: Vec<Item<T>> = items.into_iter().map(Item::real).collect();
        rdebug!(
            count = items.len(),
            mode = ?options.mode,
            infinite = options.infinite,
            wraparound = options.wraparound,
            "Carousel::new"
        );
        let cycle = Cycle::new(&options.automatic, options.speed_ms);
        let mut c = Self {
            options,
            animator,
            items,
            clones: CloneSet::default(),
            geometry: Geometry::default(),
            pages: Vec::new(),
            current_item_index: 0,
            last_item_index: None,
            position: 0,
            busy: false,
            enabled: false,
            index_changed: false,
            destroyed: false,
            cycle,
            jump: None,
            touch: None,
            focused_item_index: None,
            controls: None,
            lazy_queue: Vec::new(),
            listeners: Listeners::new(),
        };
        c.setup(now_ms);
        c
    }

    fn setup(&mut self, now_ms: u64) {
        self.remeasure();
        self.last_item_index = None;

        if self.is_degenerate() {
            self.current_item_index = self.geometry.force_valid_item_index(0);
            self.disable();
        } else {
            let start = self
                .options
                .start_at_item
                .saturating_add(self.geometry.start_item_index);
            self.current_item_index = self.geometry.force_valid_item_index(start);
            self.enable(now_ms);
            self.position = self.current_position();
            self.sync_position(Some(0), now_ms);
            self.sync_controls();
        }

        if self.options.lazy_load {
            let position = self.geometry.position_at_index(self.current_item_index);
            self.lazy_visible_at(position);
        }

        if self.has_enough_items() {
            self.emit(Event::Ready);
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Every item in container order, clones included.
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// The item at `index`, clamped to the navigable bounds.
    ///
    /// Returns `None` only when there are no items at all.
    pub fn item_at(&self, index: usize) -> Option<&Item<T>> {
        self.items.get(self.geometry.force_valid_item_index(index))
    }

    pub fn real_count(&self) -> usize {
        self.items.len().saturating_sub(self.clones.count() * 2)
    }

    pub fn current_item_index(&self) -> usize {
        self.current_item_index
    }

    pub fn last_item_index(&self) -> Option<usize> {
        self.last_item_index
    }

    pub fn pages(&self) -> &[usize] {
        &self.pages
    }

    pub fn items_per_page(&self) -> usize {
        self.geometry.items_per_page()
    }

    /// The page containing the current item, looked up in the page table.
    pub fn current_page_index(&self) -> usize {
        match self.pages.binary_search(&self.current_item_index) {
            Ok(page) => page,
            Err(0) => 0,
            Err(next) => next - 1,
        }
    }

    /// Target position of the latest move, in pixels.
    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// A transition (or the hidden leg of a seamless jump) is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy || self.jump.is_some()
    }

    pub fn is_cycling(&self) -> bool {
        self.cycle.is_cycling()
    }

    /// The next autoplay deadline, either an advance or a pending restart.
    pub fn next_cycle_deadline_ms(&self) -> Option<u64> {
        self.cycle.next_tick_ms().or(self.cycle.restart_at_ms())
    }

    pub fn index_changed(&self) -> bool {
        self.index_changed
    }

    pub fn controls(&self) -> Option<ControlState> {
        self.controls
    }

    pub fn focused_item_index(&self) -> Option<usize> {
        self.focused_item_index
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> CarouselState {
        let m = self.geometry.measurement;
        CarouselState {
            current_item_index: self.current_item_index,
            last_item_index: self.last_item_index,
            start_item_index: self.geometry.start_item_index,
            end_item_index: self.geometry.end_item_index,
            start_page_item_index: self.start_page_item_index(),
            end_page_item_index: self.end_page_item_index(),
            current_page_index: self.current_page_index(),
            pages: self.pages.clone(),
            items_per_page: self.items_per_page(),
            item_count: self.items.len(),
            clone_count: self.clones.count(),
            item_size: m.item_size,
            mask_size: m.mask_size,
            container_size: m.container_size,
            position: self.position,
            busy: self.is_busy(),
            cycling: self.cycle.is_cycling(),
            enabled: self.enabled,
            index_changed: self.index_changed,
            controls: self.controls,
            focused_item_index: self.focused_item_index,
        }
    }

    /// Registers a listener; it runs after the matching option callback.
    pub fn on(
        &mut self,
        event: Event,
        f: impl Fn(&CarouselState) + Send + Sync + 'static,
    ) -> ListenerId {
        self.listeners.on(event, Arc::new(f) as EventCallback)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.listeners.off(id)
    }

    /// Drains the indexes whose lazy content should be loaded now.
    ///
    /// Indexes refer to the item sequence as it was when they were queued; drain after each
    /// call that can move or re-measure the carousel.
    pub fn take_lazy_loads(&mut self) -> Vec<usize> {
        core::mem::take(&mut self.lazy_queue)
    }

    // Public navigation. Every entry point defers autoplay first.

    pub fn next(&mut self, now_ms: u64) -> bool {
        self.reset_cycle(now_ms);
        self.next_internal(now_ms)
    }

    pub fn previous(&mut self, now_ms: u64) -> bool {
        self.reset_cycle(now_ms);
        self.previous_internal(now_ms)
    }

    /// Moves to the item at `index` over `duration_ms` (default: `speed_ms`).
    ///
    /// Returns `true` when the current index changed.
    pub fn to_item(&mut self, index: usize, duration_ms: Option<u64>, now_ms: u64) -> bool {
        self.reset_cycle(now_ms);
        self.to_item_internal(index, duration_ms, now_ms)
    }

    /// Moves to the first real item equal to `value`. Unknown values are ignored.
    pub fn to_item_value(&mut self, value: &T, duration_ms: Option<u64>, now_ms: u64) -> bool
    where
        T: PartialEq,
    {
        self.reset_cycle(now_ms);
        match self.index_of(value) {
            Some(index) => self.to_item_internal(index, duration_ms, now_ms),
            None => {
                rtrace!("to_item_value: no matching item");
                false
            }
        }
    }

    pub fn to_page(&mut self, page: usize, duration_ms: Option<u64>, now_ms: u64) -> bool {
        self.reset_cycle(now_ms);
        self.to_page_internal(page, duration_ms, now_ms)
    }

    pub fn to_next_item(&mut self, now_ms: u64) -> bool {
        self.reset_cycle(now_ms);
        self.step_item(Direction::Forward, now_ms)
    }

    pub fn to_previous_item(&mut self, now_ms: u64) -> bool {
        self.reset_cycle(now_ms);
        self.step_item(Direction::Backward, now_ms)
    }

    pub fn to_next_page(&mut self, now_ms: u64) -> bool {
        self.reset_cycle(now_ms);
        self.step_page(Direction::Forward, now_ms)
    }

    pub fn to_previous_page(&mut self, now_ms: u64) -> bool {
        self.reset_cycle(now_ms);
        self.step_page(Direction::Backward, now_ms)
    }

    /// The previous-control action: `previous` followed by `UserPrevious`.
    pub fn user_previous(&mut self, now_ms: u64) -> bool {
        if !self.enabled {
            return false;
        }
        let moved = self.previous(now_ms);
        self.emit(Event::UserPrevious);
        moved
    }

    /// The next-control action: `next` followed by `UserNext`.
    pub fn user_next(&mut self, now_ms: u64) -> bool {
        if !self.enabled {
            return false;
        }
        let moved = self.next(now_ms);
        self.emit(Event::UserNext);
        moved
    }

    /// Index one item away from the current one, honoring `wraparound`.
    pub fn item_index(&self, direction: Direction) -> usize {
        self.item_cursor().step(self.current_item_index, direction)
    }

    /// Page one page away from the current one, honoring `wraparound`.
    pub fn page_index(&self, direction: Direction) -> usize {
        self.page_cursor().step(self.current_page_index(), direction)
    }

    /// Appends (or prepends) real items and re-measures.
    ///
    /// The current item stays current when items are prepended.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = T>, prepend: bool, now_ms: u64) {
        if self.destroyed {
            return;
        }
        let incoming: Vec<Item<T>> = items.into_iter().map(Item::real).collect();
        if incoming.is_empty() {
            return;
        }
        let added = incoming.len();

        let count = self.clones.count();
        self.clones.strip(&mut self.items);
        self.rebase(count, 0);

        if prepend {
            self.items.splice(0..0, incoming);
            self.rebase(0, added);
        } else {
            self.items.extend(incoming);
        }
        rdebug!(added, prepend, total = self.items.len(), "Carousel::add_items");

        self.resize(now_ms);
    }

    /// Re-measures after a viewport or content size change.
    ///
    /// Any in-flight transition is abandoned and the carousel snaps to the current item.
    pub fn resize(&mut self, now_ms: u64) {
        if self.destroyed {
            return;
        }
        if self.is_busy() || self.touch.is_some() {
            self.animator.stop();
            self.busy = false;
            self.jump = None;
            self.touch = None;
        }

        self.remeasure();

        if self.is_degenerate() {
            self.current_item_index = self.geometry.force_valid_item_index(0);
            self.disable();
            return;
        }

        self.enable(now_ms);
        self.current_item_index = self
            .geometry
            .force_valid_item_index(self.current_item_index);
        self.position = self.current_position();
        self.sync_position(Some(0), now_ms);
        self.sync_controls();
    }

    pub fn enable(&mut self, now_ms: u64) {
        if self.enabled || self.destroyed {
            return;
        }
        if !self.has_enough_items() {
            return;
        }
        self.controls = self.options.controls.arrows.then(ControlState::default);
        if self.options.automatic.enabled {
            self.cycle.init(now_ms);
        }
        self.enabled = true;
        rdebug!("Carousel::enable");
    }

    pub fn disable(&mut self) {
        if !self.enabled {
            return;
        }
        self.controls = None;
        self.animator.stop();
        self.busy = false;
        self.jump = None;
        self.touch = None;
        self.cycle.kill();
        self.enabled = false;
        rdebug!("Carousel::disable");
    }

    /// Disables the carousel, removes clones and listeners. Everything afterwards is a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.disable();
        let count = self.clones.count();
        self.clones.strip(&mut self.items);
        self.rebase(count, 0);
        self.listeners.clear();
        self.lazy_queue.clear();
        self.destroyed = true;
        rdebug!("Carousel::destroy");
    }

    /// Starts autoplay now, independent of `automatic.enabled`.
    pub fn start_cycle(&mut self, now_ms: u64) -> bool {
        if !self.enabled {
            return false;
        }
        self.cycle.start(now_ms)
    }

    pub fn stop_cycle(&mut self) -> bool {
        self.cycle.stop()
    }

    /// Advances timers: the second leg of a seamless jump, autoplay restarts and steps.
    pub fn tick(&mut self, now_ms: u64) {
        if self.destroyed {
            return;
        }

        if let Some(jump) = self.jump {
            if now_ms >= jump.due_ms {
                self.jump = None;
                rtrace!(position = jump.position, now_ms, "seamless jump: visible leg");
                let request = self.request(jump.position, jump.duration_ms, now_ms);
                if self.animator.move_to(&request) == Completion::Immediate {
                    self.complete_move();
                }
            }
        }

        if let Some(direction) = self.cycle.poll(now_ms) {
            if !self.enabled || self.is_busy() {
                rtrace!(now_ms, "cycle step skipped: busy or disabled");
                return;
            }
            match direction {
                Direction::Forward => self.next_internal(now_ms),
                Direction::Backward => self.previous_internal(now_ms),
            };
            self.emit(Event::Cycle);
        }
    }

    /// Reports that the animator finished the requested transition.
    ///
    /// Returns `false` when nothing was in flight.
    pub fn transition_end(&mut self) -> bool {
        if !self.busy {
            return false;
        }
        if self.touch.is_some_and(|t| t.is_swipe()) {
            return false;
        }
        self.complete_move();
        true
    }

    /// Marks `index` as focused (item click). Requires `auto_focus`.
    pub fn focus_item(&mut self, index: usize) -> bool {
        if !self.options.auto_focus || index >= self.items.len() {
            return false;
        }
        let changed = self.focused_item_index != Some(index);
        self.focused_item_index = Some(index);
        changed
    }

    /// Dispatches a normalized input event. Returns `true` when the carousel consumed it.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: u64) -> bool {
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y, now_ms),
            InputEvent::PointerUp | InputEvent::PointerCancel => self.pointer_up(now_ms),
            InputEvent::PointerEnter => {
                self.cycle.pointer_enter();
                false
            }
            InputEvent::PointerLeave => {
                self.cycle.pointer_leave(now_ms);
                false
            }
            InputEvent::KeyDown { key_code } => self.key_down(key_code, now_ms),
            InputEvent::Resize => {
                self.resize(now_ms);
                false
            }
        }
    }

    pub fn pointer_down(&mut self, x: i32, y: i32) -> bool {
        if !self.options.touch || !self.can_navigate() {
            return false;
        }
        self.touch = Some(Touch::new(x, y, self.animator.position()));
        true
    }

    /// Follows a drag 1:1 once it is known to be horizontal. Also polls the autoplay hit area.
    pub fn pointer_move(&mut self, x: i32, y: i32, now_ms: u64) -> bool {
        self.cycle.pointer_hover(x, y, now_ms);

        let Some(mut touch) = self.touch else {
            return false;
        };
        let undecided = touch.intent.is_none();
        let delta_x = touch.track(x, y);
        self.touch = Some(touch);
        if !touch.is_swipe() {
            return false;
        }
        if undecided {
            self.busy = true;
        }

        let position = self
            .geometry
            .force_valid_position(touch.start_position - delta_x);
        let request = self.request(position, 0, now_ms);
        self.animator.move_to(&request);
        true
    }

    /// Ends a gesture by snapping to the item under the container.
    pub fn pointer_up(&mut self, now_ms: u64) -> bool {
        let Some(touch) = self.touch.take() else {
            return false;
        };
        if !touch.is_swipe() {
            return false;
        }

        let mut index = self.geometry.index_at_position(self.animator.position());
        // Swiping forward snaps by the trailing edge instead of the leading one.
        if touch.moved_forward() {
            index = index.saturating_add(1);
        }
        let index = self.geometry.force_valid_item_index(index);
        rtrace!(index, "pointer_up: snap");

        self.busy = false;
        self.reset_cycle(now_ms);
        self.set_current_item_index(index);
        // The drag may already have left the container at the snap position.
        if !self.sync_position(None, now_ms) {
            self.settle_in_place();
        }
        true
    }

    pub fn key_down(&mut self, key_code: u32, now_ms: u64) -> bool {
        if !self.options.controls.key || !self.enabled {
            return false;
        }
        match key_code {
            KEY_LEFT | KEY_UP => {
                self.user_previous(now_ms);
                true
            }
            KEY_RIGHT | KEY_DOWN => {
                self.user_next(now_ms);
                true
            }
            _ => false,
        }
    }

    fn can_navigate(&self) -> bool {
        self.enabled && !self.destroyed && !self.is_busy() && self.geometry.measurement.is_measured()
    }

    fn has_enough_items(&self) -> bool {
        self.real_count() >= 2
    }

    fn is_degenerate(&self) -> bool {
        let m = self.geometry.measurement;
        !self.has_enough_items() || !m.is_measured() || m.container_size < m.mask_size
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items
            .iter()
            .position(|it| !it.is_clone() && it.value() == value)
    }

    fn reset_cycle(&mut self, now_ms: u64) {
        if self.enabled && self.options.automatic.enabled {
            self.cycle.reset(now_ms);
        }
    }

    fn next_internal(&mut self, now_ms: u64) -> bool {
        match self.options.mode {
            Mode::Fluid => self.step_item(Direction::Forward, now_ms),
            Mode::Fixed => self.step_page(Direction::Forward, now_ms),
        }
    }

    fn previous_internal(&mut self, now_ms: u64) -> bool {
        match self.options.mode {
            Mode::Fluid => self.step_item(Direction::Backward, now_ms),
            Mode::Fixed => self.step_page(Direction::Backward, now_ms),
        }
    }

    fn item_cursor(&self) -> BoundedCursor {
        BoundedCursor::new(
            self.geometry.start_item_index,
            self.geometry.end_item_index,
            self.options.wraps(),
        )
    }

    fn page_cursor(&self) -> BoundedCursor {
        BoundedCursor::new(0, self.pages.len().saturating_sub(1), self.options.wraps())
    }

    fn step_item(&mut self, direction: Direction, now_ms: u64) -> bool {
        if !self.can_navigate() {
            return false;
        }
        let target = self.item_index(direction);
        self.to_item_internal(target, None, now_ms)
    }

    fn step_page(&mut self, direction: Direction, now_ms: u64) -> bool {
        if !self.can_navigate() || self.pages.is_empty() {
            return false;
        }
        let cursor = self.page_cursor();
        let page = self.current_page_index();
        let target = cursor.step(page, direction);

        // Past the last anchor (reachable through `to_item`), "next page" must not snap back.
        if !cursor.wraps_from(page, direction) {
            let anchor = self.pages[target];
            let current = self.current_item_index;
            let backwards = if direction.is_forward() {
                anchor < current
            } else {
                anchor > current
            };
            if backwards {
                return false;
            }
        }
        self.to_page_internal(target, None, now_ms)
    }

    fn to_item_internal(&mut self, index: usize, duration_ms: Option<u64>, now_ms: u64) -> bool {
        if !self.can_navigate() {
            return false;
        }
        // Indexes that share the clamped end position are not a move.
        let index = self.geometry.force_valid_item_index(index);
        let position = self
            .geometry
            .force_valid_position(self.geometry.position_at_index(index));
        if index != self.current_item_index && position == self.animator.position() {
            rtrace!(index, position, "to_item: position unchanged");
            return false;
        }
        if !self.set_current_item_index(index) {
            return false;
        }
        self.sync_position(duration_ms, now_ms);
        true
    }

    fn to_page_internal(&mut self, page: usize, duration_ms: Option<u64>, now_ms: u64) -> bool {
        if !self.can_navigate() || self.pages.is_empty() {
            return false;
        }
        let last_page = self.pages.len() - 1;
        if page > last_page {
            rwarn!(page, last_page, "to_page: page out of range, clamped");
        }
        let page = page.min(last_page);
        let anchor = self.pages[page];
        if anchor == self.current_item_index {
            return false;
        }
        self.to_item_internal(anchor, duration_ms, now_ms)
    }

    /// Returns `true` if the clamped index differs from the current one.
    fn set_current_item_index(&mut self, index: usize) -> bool {
        let index = self.geometry.force_valid_item_index(index);
        if index == self.current_item_index {
            return false;
        }
        self.last_item_index = Some(self.current_item_index);
        self.current_item_index = index;
        self.index_changed = true;
        true
    }

    fn current_position(&self) -> i64 {
        let position = self.geometry.position_at_index(self.current_item_index);
        self.geometry.force_valid_position(position)
    }

    fn start_page_item_index(&self) -> usize {
        self.pages
            .first()
            .copied()
            .unwrap_or(self.geometry.start_item_index)
    }

    fn end_page_item_index(&self) -> usize {
        self.pages
            .last()
            .copied()
            .unwrap_or(self.geometry.end_item_index)
    }

    /// Returns `false` when the container was already in place.
    fn sync_position(&mut self, duration_ms: Option<u64>, now_ms: u64) -> bool {
        let position = self.current_position();
        self.position = position;
        let duration_ms = duration_ms.unwrap_or(self.options.speed_ms);
        self.move_to(position, duration_ms, now_ms)
    }

    /// Finalizes an index change that needed no reposition.
    fn settle_in_place(&mut self) {
        self.sync_controls();
        if self.index_changed {
            self.index_changed = false;
            self.emit(Event::AfterChange);
        }
    }

    // Every reposition goes through here.
    fn move_to(&mut self, position: i64, duration_ms: u64, now_ms: u64) -> bool {
        if position == self.animator.position() {
            rtrace!(position, "move_to: already there");
            return false;
        }

        let mut target = position;
        let mut duration = duration_ms;
        if self.options.infinite && self.jump.is_none() {
            if let Some(last) = self.last_item_index {
                let last_position = self.geometry.position_at_index(last);
                let jump = self.clones.filter_position(
                    position,
                    self.geometry.min_position(),
                    self.geometry.max_position(),
                    last_position,
                    self.geometry.item_size(),
                );
                if jump != position {
                    rdebug!(jump, position, "seamless jump: instant leg");
                    self.jump = Some(PendingJump {
                        position,
                        duration_ms,
                        due_ms: now_ms.saturating_add(JUMP_DELAY_MS),
                    });
                    target = jump;
                    duration = 0;
                }
            }
        }

        self.before_move();
        let request = self.request(target, duration, now_ms);
        if self.animator.move_to(&request) == Completion::Immediate {
            self.complete_move();
        }
        true
    }

    fn request(&self, position: i64, duration_ms: u64, now_ms: u64) -> MoveRequest {
        let offset = match self.options.mode {
            Mode::Fluid => Offset::Percent(self.geometry.position_to_percent(position)),
            Mode::Fixed => Offset::Pixels(position),
        };
        MoveRequest {
            position,
            offset,
            duration_ms,
            easing: self.options.easing,
            start_ms: now_ms,
        }
    }

    fn complete_move(&mut self) {
        // The instant leg of a seamless jump; `tick` issues the visible one.
        if self.jump.is_some() {
            return;
        }
        self.after_move();
    }

    fn before_move(&mut self) {
        if self.options.lazy_load {
            let position = self.geometry.position_at_index(self.current_item_index);
            self.lazy_visible_at(position);
        }
        self.sync_controls();
        self.busy = true;
        self.emit(Event::BeforeMove);
    }

    fn after_move(&mut self) {
        if self.options.lazy_load {
            self.lazy_visible_at(self.animator.position());
        }
        self.sync_controls();
        self.busy = false;
        self.emit(Event::AfterMove);

        if self.index_changed {
            self.index_changed = false;
            self.emit(Event::AfterChange);
        }
    }

    fn sync_controls(&mut self) {
        let current = self.current_item_index;
        if !self.options.wraps() {
            let previous_enabled = current > self.start_page_item_index();
            let next_enabled = current < self.end_page_item_index();
            if let Some(controls) = self.controls.as_mut() {
                controls.previous_enabled = previous_enabled;
                controls.next_enabled = next_enabled;
            }
        }
        if self.options.auto_focus && self.items_per_page() == 1 {
            self.focused_item_index = Some(current);
        }
    }

    fn lazy_visible_at(&mut self, position: i64) {
        if !self.geometry.measurement.is_measured() {
            return;
        }
        let (first, last) = self.geometry.visible_at(position);
        for index in first..=last {
            self.request_load(index);
        }
    }

    fn request_load(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            if item.request_load() {
                self.lazy_queue.push(index);
            }
        }
    }

    fn measure_now(&self) -> Measurement {
        (self.options.measure)(MeasureInput {
            mode: self.options.mode,
            item_count: self.items.len(),
        })
    }

    /// Measures, regenerates clones when needed, and rebuilds bounds and pages.
    fn remeasure(&mut self) {
        let infinite = self.options.infinite;
        let previous_clones = self.clones.count();
        let mut m = self.measure_now();
        let per_page = geometry::items_per_page(m.item_size, m.mask_size);

        if infinite {
            if let Some(fresh) = self.clones.sync(&mut self.items, per_page) {
                self.rebase(previous_clones, self.clones.count());
                m = self.measure_now();
                if self.options.lazy_load {
                    for index in fresh {
                        self.request_load(index);
                    }
                }
            }
        }

        let clone_count = self.clones.count();
        let real = self.real_count();
        let (start, end) = if infinite {
            (clone_count, clone_count + real.saturating_sub(per_page))
        } else {
            (0, real.saturating_sub(1))
        };
        let end = end.max(start);

        self.geometry = Geometry::new(m, start, end, infinite, self.options.positioning);
        self.pages = geometry::pages(real, per_page, infinite)
            .into_iter()
            .map(|anchor| (anchor + start).min(end))
            .collect();
        debug_assert!(
            self.pages.windows(2).all(|w| w[0] < w[1]),
            "page anchors must be strictly increasing: {:?}",
            self.pages
        );
        rtrace!(
            item_size = m.item_size,
            mask_size = m.mask_size,
            container_size = m.container_size,
            per_page,
            start,
            end,
            "remeasure"
        );
    }

    /// Shifts stored indexes after the clone prefix changed from `from` to `to` slots.
    fn rebase(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let shift = |index: usize| (index + to).saturating_sub(from);
        self.current_item_index = shift(self.current_item_index);
        self.last_item_index = self.last_item_index.map(shift);
        self.focused_item_index = self.focused_item_index.map(shift);
    }

    fn emit(&self, event: Event) {
        let callback = self.options.callbacks.get(event);
        if callback.is_none() && !self.listeners.has(event) {
            return;
        }
        rtrace!(?event, "emit");
        let state = self.state();
        if let Some(callback) = callback {
            callback(&state);
        }
        self.listeners.emit(event, &state);
    }
}
