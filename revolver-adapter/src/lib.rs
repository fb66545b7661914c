//! Adapter utilities for the `revolver` crate.
//!
//! The `revolver` crate is UI-agnostic and never animates anything itself. This crate provides
//! small, framework-neutral helpers commonly needed by adapters:
//!
//! - A tween-based [`revolver::Animator`] sampled from the host's clock
//! - A controller that ties the tween, the carousel's timers and completion reporting to one
//!   `tick(now_ms)` call
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod animator;
mod controller;
mod tween;


pub use animator::TweenAnimator;
pub use controller::Controller;
pub use revolver::Easing;
pub use tween::Tween;
