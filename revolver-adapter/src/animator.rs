use revolver::{Animator, Completion, MoveRequest};

use crate::Tween;

/// An [`Animator`] that runs each move as a [`Tween`] sampled by the host's clock.
///
/// Zero-duration moves complete immediately. Anything longer reports
/// [`Completion::Pending`]; call [`TweenAnimator::advance`] every frame and report the end of
/// the tween to the carousel (the [`crate::Controller`] does both).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TweenAnimator {
    position: i64,
    tween: Option<Tween>,
}

impl TweenAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Samples the active tween at `now_ms`.
    ///
    /// Returns `true` when the tween finished during this call.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let Some(tween) = self.tween else {
            return false;
        };
        self.position = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
            return true;
        }
        false
    }
}

impl Animator for TweenAnimator {
    fn move_to(&mut self, request: &MoveRequest) -> Completion {
        if request.is_instant() {
            self.tween = None;
            self.position = request.position;
            return Completion::Immediate;
        }
        self.tween = Some(Tween::new(
            self.position,
            request.position,
            request.start_ms,
            request.duration_ms,
            request.easing,
        ));
        Completion::Pending
    }

    fn position(&self) -> i64 {
        self.position
    }

    fn stop(&mut self) {
        self.tween = None;
    }
}
