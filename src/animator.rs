use crate::{Easing, Offset};

/// A transition the carousel asks its animator to perform.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRequest {
    /// Destination in pixels.
    pub position: i64,
    /// Destination in the unit the host should apply (percent in fluid mode).
    pub offset: Offset,
    pub duration_ms: u64,
    pub easing: Easing,
    /// When the request was issued.
    pub start_ms: u64,
}

impl MoveRequest {
    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }
}

/// How a transition finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Already at the destination.
    Immediate,
    /// The host reports completion later through [`crate::Carousel::transition_end`].
    Pending,
}

/// Performs the visual transitions the carousel requests.
///
/// The carousel never animates anything itself. It only asks for "move to P over T with
/// easing E" and waits for the completion signal.
pub trait Animator {
    fn move_to(&mut self, request: &MoveRequest) -> Completion;

    /// The container's actual position in pixels (mid-transition if one is running).
    fn position(&self) -> i64;

    /// Abandons an in-flight transition at its current position.
    fn stop(&mut self) {}
}

/// An animator that applies every move immediately.
///
/// Useful for hosts without transitions, and for tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InstantAnimator {
    position: i64,
    last: Option<MoveRequest>,
    moves: usize,
}

impl InstantAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_request(&self) -> Option<MoveRequest> {
        self.last
    }

    /// Number of requests received so far.
    pub fn moves(&self) -> usize {
        self.moves
    }
}

impl Animator for InstantAnimator {
    fn move_to(&mut self, request: &MoveRequest) -> Completion {
        self.position = request.position;
        self.last = Some(*request);
        self.moves += 1;
        Completion::Immediate
    }

    fn position(&self) -> i64 {
        self.position
    }
}
