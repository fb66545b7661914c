//! A headless carousel engine.
//!
//! For a tween-driven animator and a frame-loop controller, see the `revolver-adapter` crate.
//!
//! This crate owns the navigation logic of a horizontal carousel: page anchors, index ↔ position
//! mapping, wraparound and infinite (clone-based) looping, autoplay timers, touch swipes, lazy
//! load bookkeeping, and lifecycle events.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - item, mask and container sizes (through a measurement closure)
//! - an [`Animator`] that performs the requested moves
//! - normalized input ([`InputEvent`]) and a clock (`now_ms` arguments, [`Carousel::tick`])
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animator;
mod carousel;
mod clones;
pub mod cursor;
mod cycle;
mod emitter;
pub mod geometry;
mod input;
mod options;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use animator::{Animator, Completion, InstantAnimator, MoveRequest};
pub use carousel::{Carousel, JUMP_DELAY_MS};
pub use cursor::BoundedCursor;
pub use emitter::{Event, EventCallback, ListenerId, Listeners};
pub use geometry::Geometry;
pub use input::{InputEvent, KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP};
pub use options::{Automatic, CarouselOptions, Callbacks, ControlsOptions, MeasureFn};
pub use state::{CarouselState, ControlState};
pub use types::{
    Direction, Easing, HitArea, Item, ItemKind, MeasureInput, Measurement, Mode, Offset,
    Positioning,
};
