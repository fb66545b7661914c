use crate::*;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_usize(start as usize, end_exclusive as usize) as u32
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Completes zero-duration moves at once and holds the rest until `finish`.
#[derive(Clone, Debug, Default)]
struct ManualAnimator {
    position: i64,
    target: Option<i64>,
    requests: Vec<MoveRequest>,
}

impl ManualAnimator {
    fn finish(&mut self) {
        if let Some(target) = self.target.take() {
            self.position = target;
        }
    }
}

impl Animator for ManualAnimator {
    fn move_to(&mut self, request: &MoveRequest) -> Completion {
        self.requests.push(*request);
        if request.is_instant() {
            self.position = request.position;
            self.target = None;
            Completion::Immediate
        } else {
            self.target = Some(request.position);
            Completion::Pending
        }
    }

    fn position(&self) -> i64 {
        self.position
    }

    fn stop(&mut self) {
        self.target = None;
    }
}

fn fluid(n: usize) -> Carousel<usize> {
    Carousel::new(0..n, CarouselOptions::fluid(100), InstantAnimator::new(), 0)
}

fn with_options(n: usize, options: CarouselOptions) -> Carousel<usize> {
    Carousel::new(0..n, options, InstantAnimator::new(), 0)
}

fn count<A: Animator>(c: &mut Carousel<usize, A>, event: Event) -> Arc<AtomicUsize> {
    let hits = Arc::new(AtomicUsize::new(0));
    let h = Arc::clone(&hits);
    c.on(event, move |_| {
        h.fetch_add(1, Ordering::SeqCst);
    });
    hits
}

fn hits(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}

fn values<A: Animator>(c: &Carousel<usize, A>) -> Vec<usize> {
    c.items().iter().map(|it| *it.value()).collect()
}

#[test]
fn items_per_page_never_below_one() {
    assert_eq!(geometry::items_per_page(100, 250), 2);
    assert_eq!(geometry::items_per_page(300, 100), 1);
    assert_eq!(geometry::items_per_page(0, 100), 1);
}

#[test]
fn pages_pull_back_a_short_last_page() {
    assert_eq!(geometry::pages(5, 2, false), vec![0, 2, 3]);
    assert_eq!(geometry::pages(6, 2, false), vec![0, 2, 4]);
    assert_eq!(geometry::pages(5, 2, true), vec![0, 2, 4]);
    assert_eq!(geometry::pages(1, 3, false), vec![0]);
}

#[test]
fn force_valid_item_index_stays_in_bounds() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..500 {
        let start = rng.gen_range_usize(0, 20);
        let end = start + rng.gen_range_usize(0, 50);
        let item = rng.gen_range_u32(1, 400);
        // The container always covers the mask.
        let mask = rng.gen_range_u32(1, item * (end - start + 1) as u32 + 1);
        let count = end + 1;
        let g = Geometry::new(
            Measurement::uniform(item, mask, count),
            start,
            end,
            rng.gen_bool(),
            Positioning::Transform,
        );

        let index = rng.gen_range_usize(0, 200);
        let clamped = g.force_valid_item_index(index);
        assert!(clamped >= start && clamped <= end, "index={index} clamped={clamped}");

        let position = -(rng.gen_range_usize(0, 100_000) as i64);
        let valid = g.force_valid_position(position);
        assert!(valid <= g.min_position() && valid >= g.max_position());
    }
}

#[test]
fn cursor_wraparound_returns_to_start() {
    let mut rng = Lcg::new(42);
    for _ in 0..200 {
        let start = rng.gen_range_usize(0, 10);
        let end = start + rng.gen_range_usize(0, 10);
        let cursor = BoundedCursor::new(start, end, true);
        let from = rng.gen_range_usize(start, end + 1);
        let direction = if rng.gen_bool() {
            Direction::Forward
        } else {
            Direction::Backward
        };

        let mut at = from;
        for _ in 0..(end - start + 1) {
            at = cursor.step(at, direction);
        }
        assert_eq!(at, from);
    }
}

#[test]
fn cursor_stops_at_bounds_without_wrap() {
    let cursor = BoundedCursor::new(2, 5, false);
    assert_eq!(cursor.step(5, Direction::Forward), 5);
    assert_eq!(cursor.step(2, Direction::Backward), 2);
    assert_eq!(cursor.step(3, Direction::Forward), 4);
    assert!(!cursor.wraps_from(5, Direction::Forward));
}

#[test]
fn fluid_wraparound_cycles_through_every_item() {
    let mut c = with_options(4, CarouselOptions::fluid(100).with_wraparound(true));
    let mut seen = Vec::new();
    for t in 0..4 {
        assert!(c.to_next_item(t));
        seen.push(c.current_item_index());
    }
    assert_eq!(seen, vec![1, 2, 3, 0]);
}

#[test]
fn fixed_five_items_two_per_page() {
    let mut c = with_options(5, CarouselOptions::fixed(100, 200));
    let s = c.state();
    assert_eq!(s.items_per_page, 2);
    assert_eq!(s.pages, vec![0, 2, 3]);
    assert_eq!((s.start_item_index, s.end_item_index), (0, 4));

    assert!(c.next(0));
    assert_eq!(c.current_item_index(), 2);
    assert!(c.next(1));
    assert_eq!(c.current_item_index(), 3);
    assert_eq!(c.position(), -300);
    assert!(!c.next(2));
    assert_eq!(c.current_item_index(), 3);

    let controls = c.controls().unwrap();
    assert!(controls.previous_enabled);
    assert!(!controls.next_enabled);
}

#[test]
fn last_page_shows_the_last_items() {
    let mut c = with_options(5, CarouselOptions::fixed(100, 200));
    assert!(c.to_page(2, None, 0));
    assert_eq!(c.geometry().visible_at(c.animator().position()), (3, 4));
}

#[test]
fn page_stepping_uses_the_page_table() {
    let mut c = with_options(5, CarouselOptions::fixed(100, 200));
    assert!(c.to_item(1, None, 0));
    assert_eq!(c.current_page_index(), 0);

    // Rounding 1/2 up would jump to page 2 (item 3) and skip item 2.
    assert!(c.next(1));
    assert_eq!(c.current_item_index(), 2);
}

#[test]
fn page_stepping_never_moves_backwards() {
    let mut c = with_options(5, CarouselOptions::fixed(100, 200));
    assert!(c.to_item(4, None, 0));
    assert_eq!(c.current_page_index(), 2);
    assert!(!c.next(1));
    assert_eq!(c.current_item_index(), 4);

    assert!(c.previous(2));
    assert_eq!(c.current_item_index(), 2);
}

#[test]
fn page_stepping_backwards_from_a_pulled_back_page() {
    let mut c = with_options(5, CarouselOptions::fixed(100, 200));
    assert!(c.to_item(3, None, 0));
    assert!(!Direction::Backward.is_forward());
    assert!(c.previous(1));
    assert_eq!(c.current_item_index(), 2);
    assert_eq!(c.position(), -200);
}

#[test]
fn index_on_the_clamped_position_is_ignored() {
    let mut c = with_options(5, CarouselOptions::fixed(100, 200));
    assert!(c.to_item(3, None, 0));
    assert_eq!(c.animator().position(), -300);

    let before = count(&mut c, Event::BeforeMove);
    let changes = count(&mut c, Event::AfterChange);
    // Item 4 sits on the same end position as item 3.
    assert!(!c.to_item(4, None, 1));
    assert_eq!(c.current_item_index(), 3);
    assert!(!c.index_changed());
    assert_eq!(c.last_item_index(), Some(0));
    assert_eq!(hits(&before), 0);
    assert_eq!(hits(&changes), 0);

    assert!(c.to_item(1, None, 2));
    assert_eq!(c.current_item_index(), 1);
    assert_eq!(hits(&changes), 1);
}

#[test]
fn to_item_twice_changes_once() {
    let mut c = fluid(4);
    let changes = count(&mut c, Event::AfterChange);
    let moves = count(&mut c, Event::AfterMove);

    assert!(c.to_item(2, None, 0));
    assert!(!c.to_item(2, None, 1));
    assert_eq!(hits(&changes), 1);
    assert_eq!(hits(&moves), 1);
    assert_eq!(c.last_item_index(), Some(0));
}

#[test]
fn to_item_value_finds_real_items_only() {
    let mut c = Carousel::new(
        ['a', 'b', 'c'],
        CarouselOptions::fluid(100).with_infinite(true),
        InstantAnimator::new(),
        0,
    );
    assert!(c.to_item_value(&'c', None, 0));
    assert_eq!(*c.item_at(c.current_item_index()).unwrap().value(), 'c');
    assert!(!c.item_at(c.current_item_index()).unwrap().is_clone());
    assert!(!c.to_item_value(&'z', None, 1));
}

#[test]
fn out_of_range_requests_are_clamped() {
    let mut c = fluid(3);
    assert!(c.to_item(99, Some(0), 0));
    assert_eq!(c.current_item_index(), 2);
    assert!(!c.to_page(99, None, 1));
    assert_eq!(c.item_at(50).map(|it| *it.value()), Some(2));
}

#[test]
fn boundary_controls_follow_the_current_item() {
    let mut c = fluid(3);
    assert_eq!(
        c.controls(),
        Some(ControlState {
            previous_enabled: false,
            next_enabled: true
        })
    );
    c.to_item(2, None, 0);
    assert_eq!(
        c.controls(),
        Some(ControlState {
            previous_enabled: true,
            next_enabled: false
        })
    );

    let wrapping = with_options(3, CarouselOptions::fluid(100).with_wraparound(true));
    assert_eq!(wrapping.controls(), Some(ControlState::default()));

    let no_arrows = with_options(
        3,
        CarouselOptions::fluid(100).with_controls(ControlsOptions {
            arrows: false,
            key: false,
        }),
    );
    assert_eq!(no_arrows.controls(), None);
}

#[test]
fn offsets_follow_mode_and_positioning() {
    let mut c = fluid(4);
    c.next(0);
    assert_eq!(c.animator().last_request().unwrap().offset, Offset::Percent(-25.0));

    let mut c = with_options(
        4,
        CarouselOptions::fluid(100).with_positioning(Positioning::Offset),
    );
    c.next(0);
    assert_eq!(c.animator().last_request().unwrap().offset, Offset::Percent(-100.0));

    let mut c = with_options(4, CarouselOptions::fixed(100, 200));
    c.next(0);
    let request = c.animator().last_request().unwrap();
    assert_eq!(request.offset, Offset::Pixels(-200));
    assert_eq!(request.duration_ms, 1250);
    assert_eq!(request.easing, Easing::Swing);
}

#[test]
fn infinite_bounds_and_clone_layout() {
    let c = with_options(6, CarouselOptions::fixed(100, 200).with_infinite(true));
    let s = c.state();
    assert_eq!(s.clone_count, 2);
    assert_eq!(s.item_count, 10);
    assert_eq!((s.start_item_index, s.end_item_index), (2, 6));
    assert_eq!(s.pages, vec![2, 4, 6]);
    assert_eq!(s.current_item_index, 2);
    assert_eq!(values(&c), vec![4, 5, 0, 1, 2, 3, 4, 5, 0, 1]);
    assert!(c.items()[0].is_clone() && c.items()[9].is_clone());
    assert!(c.options().wraparound);
}

#[test]
fn infinite_previous_jumps_through_the_clones() {
    let mut c = with_options(6, CarouselOptions::fixed(100, 200).with_infinite(true));
    let before = count(&mut c, Event::BeforeMove);
    let after = count(&mut c, Event::AfterMove);
    let changes = count(&mut c, Event::AfterChange);

    assert!(c.previous(10));
    assert_eq!(c.current_item_index(), 6);
    assert!(c.is_busy());
    let jump = c.animator().last_request().unwrap();
    assert_eq!(jump.position, -800);
    assert!(jump.is_instant());
    assert_eq!(hits(&before), 1);
    assert_eq!(hits(&after), 0);

    // Ignored until the visible leg completes.
    assert!(!c.next(10));

    c.tick(11);
    let visible = c.animator().last_request().unwrap();
    assert_eq!(visible.position, -600);
    assert_eq!(visible.duration_ms, 1250);
    assert!(!c.is_busy());
    assert_eq!(hits(&before), 1);
    assert_eq!(hits(&after), 1);
    assert_eq!(hits(&changes), 1);
}

#[test]
fn infinite_next_wraps_forward_through_the_clones() {
    let mut c = with_options(3, CarouselOptions::fluid(100).with_infinite(true));
    assert_eq!(c.current_item_index(), 1);
    // Going straight from the first to the last item also takes the short way.
    c.to_item(3, None, 0);
    assert_eq!(c.animator().last_request().unwrap().position, -400);
    c.tick(1);
    assert_eq!(c.animator().position(), -300);

    assert!(c.next(2));
    assert_eq!(c.current_item_index(), 1);
    assert_eq!(c.animator().last_request().unwrap().position, 0);
    // The clone at the jump target shows the item that was current.
    assert_eq!(*c.items()[0].value(), 2);

    c.tick(3);
    assert_eq!(c.animator().position(), -100);
    assert!(!c.is_busy());
}

#[test]
fn clone_invariant_survives_add_items_and_resize() {
    let mut c = with_options(3, CarouselOptions::fluid(100).with_infinite(true));
    assert_eq!(values(&c), vec![2, 0, 1, 2, 0]);

    c.add_items([3, 4], false, 0);
    assert_eq!(values(&c), vec![4, 0, 1, 2, 3, 4, 0]);
    let s = c.state();
    assert_eq!(s.item_count, c.real_count() + 2 * s.clone_count);

    let mask = Arc::new(AtomicU32::new(200));
    let m = Arc::clone(&mask);
    let mut c = with_options(
        6,
        CarouselOptions::fixed(100, 200)
            .with_infinite(true)
            .with_measure(move |input| {
                Measurement::uniform(100, m.load(Ordering::Relaxed), input.item_count)
            }),
    );
    assert_eq!(c.state().clone_count, 2);
    assert_eq!(c.current_item_index(), 2);

    mask.store(300, Ordering::Relaxed);
    c.resize(0);
    let s = c.state();
    assert_eq!(s.clone_count, 3);
    assert_eq!(s.item_count, 12);
    assert_eq!(values(&c)[..3], [3, 4, 5]);
    assert_eq!(c.current_item_index(), 3);
    assert_eq!(*c.item_at(3).unwrap().value(), 0);
}

#[test]
fn clones_repeat_when_items_do_not_fill_a_page() {
    let c = with_options(2, CarouselOptions::fixed(100, 300).with_infinite(true));
    let s = c.state();
    assert_eq!(s.clone_count, 3);
    assert_eq!(s.item_count, 8);
    assert_eq!(values(&c), vec![1, 0, 1, 0, 1, 0, 1, 0]);
}

#[test]
fn prepending_keeps_the_current_item() {
    let mut c = with_options(3, CarouselOptions::fluid(100).with_infinite(true));
    c.to_item(2, None, 0);
    assert_eq!(*c.item_at(c.current_item_index()).unwrap().value(), 1);

    c.add_items([7, 8], true, 1);
    assert_eq!(c.real_count(), 5);
    assert_eq!(c.current_item_index(), 4);
    assert_eq!(*c.item_at(c.current_item_index()).unwrap().value(), 1);
}

#[test]
fn adding_items_enables_a_single_item_carousel() {
    let mut c = fluid(1);
    assert!(!c.is_enabled());
    c.add_items([1], false, 0);
    assert!(c.is_enabled());
    assert!(c.next(1));
}

#[test]
fn cycle_reset_defers_the_next_advance() {
    let mut c = with_options(3, CarouselOptions::fluid(100).with_autoplay(500));
    assert!(c.is_cycling());
    assert_eq!(c.next_cycle_deadline_ms(), Some(1750));

    assert!(c.next(0));
    assert!(!c.is_cycling());
    assert_eq!(c.next_cycle_deadline_ms(), Some(1750));

    c.tick(1749);
    assert!(!c.is_cycling());
    c.tick(1750);
    assert!(c.is_cycling());
    assert_eq!(c.current_item_index(), 1);
    assert_eq!(c.next_cycle_deadline_ms(), Some(3500));

    let cycles = count(&mut c, Event::Cycle);
    c.tick(3499);
    assert_eq!(c.current_item_index(), 1);
    c.tick(3500);
    assert_eq!(c.current_item_index(), 2);
    assert_eq!(hits(&cycles), 1);
}

#[test]
fn cycle_collapses_missed_periods() {
    let mut c = with_options(
        4,
        CarouselOptions::fluid(100)
            .with_autoplay(0)
            .with_speed_ms(100)
            .with_wraparound(true),
    );
    c.tick(1000);
    assert_eq!(c.current_item_index(), 1);
    assert_eq!(c.next_cycle_deadline_ms(), Some(1100));
}

#[test]
fn cycle_steps_backwards_when_configured() {
    let mut c = with_options(
        3,
        CarouselOptions::fluid(100)
            .with_wraparound(true)
            .with_automatic(Automatic {
                enabled: true,
                pause_ms: 0,
                direction: Direction::Backward,
                hit_area: None,
            })
            .with_speed_ms(10),
    );
    c.tick(10);
    assert_eq!(c.current_item_index(), 2);
}

#[test]
fn cycle_skips_while_busy() {
    let mut c = Carousel::new(
        0..3,
        CarouselOptions::fluid(100).with_autoplay(500),
        ManualAnimator::default(),
        0,
    );
    let cycles = count(&mut c, Event::Cycle);

    c.tick(1750);
    assert_eq!(c.current_item_index(), 1);
    assert!(c.is_busy());
    assert_eq!(hits(&cycles), 1);

    c.tick(3500);
    assert_eq!(c.current_item_index(), 1);
    assert_eq!(hits(&cycles), 1);
}

#[test]
fn hover_pauses_autoplay() {
    let mut c = with_options(3, CarouselOptions::fluid(100).with_autoplay(500));
    assert!(!c.handle_input(InputEvent::PointerEnter, 10));
    assert!(!c.is_cycling());
    c.handle_input(InputEvent::PointerLeave, 20);
    assert!(c.is_cycling());
    assert_eq!(c.next_cycle_deadline_ms(), Some(1770));
}

#[test]
fn hit_area_pauses_autoplay_while_inside() {
    let mut c = with_options(
        3,
        CarouselOptions::fluid(100).with_automatic(Automatic {
            enabled: true,
            hit_area: Some(HitArea::new(0, 0, 100, 50)),
            ..Automatic::default()
        }),
    );
    assert!(c.is_cycling());

    c.pointer_move(10, 10, 0);
    assert!(!c.is_cycling());
    // Exactly on the edge is neither inside nor outside.
    c.pointer_move(100, 10, 1);
    assert!(!c.is_cycling());
    c.pointer_move(150, 10, 2);
    assert!(c.is_cycling());

    // Enter/leave are ignored when a hit area is configured.
    c.handle_input(InputEvent::PointerEnter, 3);
    assert!(c.is_cycling());
}

#[test]
fn disable_kills_autoplay() {
    let mut c = with_options(3, CarouselOptions::fluid(100).with_autoplay(500));
    c.disable();
    assert!(!c.is_cycling());
    assert_eq!(c.next_cycle_deadline_ms(), None);
    assert!(!c.next(0));

    c.enable(100);
    assert!(c.is_cycling());
    assert_eq!(c.next_cycle_deadline_ms(), Some(1850));
}

#[test]
fn busy_carousel_ignores_navigation() {
    let mut c = Carousel::new(
        0..3,
        CarouselOptions::fluid(100),
        ManualAnimator::default(),
        0,
    );
    let changes = count(&mut c, Event::AfterChange);

    assert!(c.next(0));
    assert!(c.state().busy);
    assert_eq!(c.animator().requests.last().map(|r| r.duration_ms), Some(1250));
    assert!(!c.next(10));
    assert!(!c.to_item(2, None, 10));
    assert_eq!(c.current_item_index(), 1);
    assert_eq!(hits(&changes), 0);

    c.animator_mut().finish();
    assert!(c.transition_end());
    assert!(!c.is_busy());
    assert_eq!(hits(&changes), 1);
    assert!(!c.transition_end());

    assert!(c.next(20));
    assert_eq!(c.current_item_index(), 2);
}

#[test]
fn resize_abandons_an_in_flight_move() {
    let mut c = Carousel::new(
        0..3,
        CarouselOptions::fluid(100),
        ManualAnimator::default(),
        0,
    );
    c.next(0);
    assert!(c.is_busy());

    c.handle_input(InputEvent::Resize, 5);
    assert!(!c.is_busy());
    assert_eq!(c.animator().position(), -100);
    assert_eq!(c.current_item_index(), 1);
}

#[test]
fn redundant_moves_emit_nothing() {
    let mut c = fluid(3);
    let before = count(&mut c, Event::BeforeMove);
    assert!(!c.to_item(0, None, 0));
    c.resize(1);
    assert_eq!(hits(&before), 0);
}

#[test]
fn swipe_forward_advances_one_item() {
    let mut c = fluid(3);
    let before = count(&mut c, Event::BeforeMove);
    let changes = count(&mut c, Event::AfterChange);

    assert!(c.handle_input(InputEvent::PointerDown { x: 50, y: 10 }, 0));
    assert!(c.handle_input(InputEvent::PointerMove { x: 20, y: 12 }, 5));
    assert!(c.is_busy());
    assert_eq!(c.animator().position(), -30);
    assert_eq!(hits(&before), 0);

    assert!(c.handle_input(InputEvent::PointerUp, 10));
    assert_eq!(c.current_item_index(), 1);
    assert_eq!(c.animator().position(), -100);
    assert!(!c.is_busy());
    assert_eq!(hits(&before), 1);
    assert_eq!(hits(&changes), 1);
}

#[test]
fn swipe_past_the_edge_snaps_back() {
    let mut c = fluid(3);
    let changes = count(&mut c, Event::AfterChange);

    c.pointer_down(20, 0);
    c.pointer_move(80, 0, 1);
    assert_eq!(c.animator().position(), 0);
    c.pointer_up(2);
    assert_eq!(c.current_item_index(), 0);
    assert_eq!(hits(&changes), 0);
}

#[test]
fn swipe_at_the_end_settles_in_place() {
    let mut c = with_options(5, CarouselOptions::fixed(100, 200));
    assert!(c.to_item(3, None, 0));
    let before = count(&mut c, Event::BeforeMove);
    let changes = count(&mut c, Event::AfterChange);

    assert!(c.pointer_down(150, 0));
    assert!(c.pointer_move(100, 0, 1));
    assert_eq!(c.animator().position(), -300);
    assert!(c.pointer_up(2));

    assert_eq!(c.current_item_index(), 4);
    assert!(!c.index_changed());
    assert!(!c.is_busy());
    assert_eq!(hits(&before), 0);
    assert_eq!(hits(&changes), 1);
    let controls = c.controls().unwrap();
    assert!(controls.previous_enabled);
    assert!(!controls.next_enabled);
}

#[test]
fn vertical_drag_is_left_to_the_page() {
    let mut c = fluid(3);
    c.pointer_down(50, 50);
    assert!(!c.pointer_move(48, 90, 1));
    assert!(!c.is_busy());
    assert!(!c.pointer_up(2));
    assert_eq!(c.current_item_index(), 0);

    let mut off = with_options(3, CarouselOptions::fluid(100).with_touch(false));
    assert!(!off.pointer_down(50, 50));
}

#[test]
fn arrow_keys_navigate_when_enabled() {
    let mut c = with_options(
        3,
        CarouselOptions::fluid(100).with_controls(ControlsOptions {
            arrows: true,
            key: true,
        }),
    );
    let user_next = count(&mut c, Event::UserNext);
    let user_previous = count(&mut c, Event::UserPrevious);

    assert!(c.handle_input(InputEvent::KeyDown { key_code: KEY_RIGHT }, 0));
    assert_eq!(c.current_item_index(), 1);
    assert!(c.key_down(KEY_DOWN, 1));
    assert!(c.key_down(KEY_UP, 2));
    assert_eq!(c.current_item_index(), 1);
    assert!(!c.key_down(13, 3));
    assert_eq!(hits(&user_next), 2);
    assert_eq!(hits(&user_previous), 1);

    let mut plain = fluid(3);
    assert!(!plain.key_down(KEY_LEFT, 0));
}

#[test]
fn user_events_fire_even_at_the_boundary() {
    let mut c = fluid(3);
    let user_previous = count(&mut c, Event::UserPrevious);
    assert!(!c.user_previous(0));
    assert_eq!(hits(&user_previous), 1);
}

#[test]
fn lazy_loads_follow_visibility() {
    let mut c = with_options(5, CarouselOptions::fixed(100, 200));
    assert_eq!(c.take_lazy_loads(), vec![0, 1]);
    c.next(0);
    assert_eq!(c.take_lazy_loads(), vec![2, 3]);
    c.previous(1);
    assert!(c.take_lazy_loads().is_empty());
    assert!(c.items()[3].load_requested());
    assert!(!c.items()[4].load_requested());

    let mut eager = with_options(5, CarouselOptions::fixed(100, 200).with_lazy_load(false));
    eager.next(0);
    assert!(eager.take_lazy_loads().is_empty());
}

#[test]
fn lazy_loads_include_fresh_clones() {
    let mut c = with_options(3, CarouselOptions::fluid(100).with_infinite(true));
    let mut loads = c.take_lazy_loads();
    loads.sort_unstable();
    assert_eq!(loads, vec![0, 1, 4]);
}

#[test]
fn degenerate_carousels_stay_disabled() {
    let ready = Arc::new(AtomicUsize::new(0));
    let r = Arc::clone(&ready);
    let options = CarouselOptions::fluid(100).with_callback(
        Event::Ready,
        Some(move |_: &CarouselState| {
            r.fetch_add(1, Ordering::SeqCst);
        }),
    );

    let mut single = with_options(1, options.clone());
    assert!(!single.is_enabled());
    assert!(!single.next(0));
    assert_eq!(hits(&ready), 0);

    let _pair = with_options(2, options);
    assert_eq!(hits(&ready), 1);

    let mut unmeasured = with_options(
        3,
        CarouselOptions::fluid(100).with_measure(|_| Measurement::default()),
    );
    assert!(!unmeasured.is_enabled());
    assert_eq!(unmeasured.current_item_index(), 0);
    assert!(!unmeasured.next(0));

    let narrow = with_options(
        2,
        CarouselOptions::fixed(100, 300).with_measure(|_| Measurement {
            item_size: 100,
            mask_size: 300,
            container_size: 200,
        }),
    );
    assert!(!narrow.is_enabled());
    assert_eq!(narrow.controls(), None);
}

#[test]
fn start_at_item_is_relative_to_real_items() {
    let c = with_options(4, CarouselOptions::fluid(100).with_start_at_item(2));
    assert_eq!(c.current_item_index(), 2);
    assert_eq!(c.animator().position(), -200);

    let c = with_options(3, CarouselOptions::fluid(100).with_infinite(true));
    assert_eq!(c.current_item_index(), 1);
    assert_eq!(*c.item_at(1).unwrap().value(), 0);
}

#[test]
fn auto_focus_tracks_the_current_item() {
    let mut c = with_options(3, CarouselOptions::fluid(100).with_auto_focus(true));
    assert_eq!(c.focused_item_index(), Some(0));
    c.next(0);
    assert_eq!(c.focused_item_index(), Some(1));
    assert!(c.focus_item(2));
    assert!(!c.focus_item(2));

    let mut plain = fluid(3);
    assert!(!plain.focus_item(1));
    assert_eq!(plain.focused_item_index(), None);
}

#[test]
fn callbacks_run_before_listeners() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let l = Arc::clone(&log);
    let mut c = with_options(
        3,
        CarouselOptions::fluid(100).with_callback(
            Event::AfterMove,
            Some(move |s: &CarouselState| {
                l.lock().unwrap().push(("option", s.current_item_index));
            }),
        ),
    );
    let l = Arc::clone(&log);
    let id = c.on(Event::AfterMove, move |s| {
        l.lock().unwrap().push(("listener", s.current_item_index));
    });

    c.next(0);
    assert_eq!(*log.lock().unwrap(), vec![("option", 1), ("listener", 1)]);

    assert!(c.off(id));
    assert!(!c.off(id));
    c.next(1);
    assert_eq!(log.lock().unwrap().len(), 3);
}

#[test]
fn destroy_removes_clones_and_listeners() {
    let mut c = with_options(
        3,
        CarouselOptions::fluid(100)
            .with_infinite(true)
            .with_autoplay(500),
    );
    let moves = count(&mut c, Event::AfterMove);

    c.destroy();
    assert!(c.is_destroyed());
    assert!(!c.is_enabled());
    assert!(!c.is_cycling());
    assert_eq!(values(&c), vec![0, 1, 2]);
    assert_eq!(c.current_item_index(), 0);

    assert!(!c.next(0));
    c.tick(5000);
    c.resize(5000);
    c.add_items([9], false, 5000);
    assert_eq!(c.real_count(), 3);
    assert_eq!(hits(&moves), 0);
}

#[test]
fn state_snapshot_reports_pages() {
    let mut c = with_options(6, CarouselOptions::fixed(100, 200));
    c.to_page(1, Some(0), 0);
    let s = c.state();
    assert_eq!(s.page_count(), 3);
    assert_eq!(s.current_page_index, 1);
    assert_eq!((s.start_page_item_index, s.end_page_item_index), (0, 4));
    assert_eq!(s.position, -200);
    assert_eq!(s.container_size, 600);
    assert!(!s.index_changed);
}

#[test]
fn easing_curves_hit_their_endpoints() {
    for easing in [
        Easing::Swing,
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
    ] {
        assert!(easing.sample(0.0).abs() < 1e-6, "{}", easing.name());
        assert!((easing.sample(1.0) - 1.0).abs() < 1e-6, "{}", easing.name());
    }
}
