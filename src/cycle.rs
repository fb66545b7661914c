use crate::{Automatic, Direction, HitArea};

/// Autoplay timers, driven by deadlines instead of callbacks.
///
/// `idle → cycling → idle`. While cycling, an advance is due every `period_ms`
/// (`speed + pause`). `reset` tears everything down and arms a one-shot restart one period
/// later, which is how manual navigation defers the next automatic advance.
#[derive(Clone, Debug)]
pub(crate) struct Cycle {
    enabled: bool,
    period_ms: u64,
    direction: Direction,
    hit_area: Option<HitArea>,
    cycling: bool,
    /// Hover / hit-area tracking is active.
    listening: bool,
    next_tick_ms: Option<u64>,
    restart_at_ms: Option<u64>,
}

impl Cycle {
    pub(crate) fn new(automatic: &Automatic, speed_ms: u64) -> Self {
        Self {
            enabled: automatic.enabled,
            period_ms: speed_ms.saturating_add(automatic.pause_ms).max(1),
            direction: automatic.direction,
            hit_area: automatic.hit_area,
            cycling: false,
            listening: false,
            next_tick_ms: None,
            restart_at_ms: None,
        }
    }

    pub(crate) fn is_cycling(&self) -> bool {
        self.cycling
    }

    pub(crate) fn next_tick_ms(&self) -> Option<u64> {
        self.next_tick_ms
    }

    pub(crate) fn restart_at_ms(&self) -> Option<u64> {
        self.restart_at_ms
    }

    pub(crate) fn init(&mut self, now_ms: u64) {
        self.cycling = false;
        self.start(now_ms);
        self.listening = true;
    }

    pub(crate) fn start(&mut self, now_ms: u64) -> bool {
        if self.cycling {
            return false;
        }
        self.next_tick_ms = Some(now_ms.saturating_add(self.period_ms));
        self.cycling = true;
        rtrace!(now_ms, period_ms = self.period_ms, "Cycle::start");
        true
    }

    pub(crate) fn stop(&mut self) -> bool {
        if !self.cycling {
            return false;
        }
        self.next_tick_ms = None;
        self.cycling = false;
        rtrace!("Cycle::stop");
        true
    }

    /// Stops, detaches hover tracking, and drops any pending restart.
    pub(crate) fn kill(&mut self) {
        self.stop();
        self.listening = false;
        self.restart_at_ms = None;
    }

    pub(crate) fn reset(&mut self, now_ms: u64) {
        if !self.enabled {
            return;
        }
        self.kill();
        self.restart_at_ms = Some(now_ms.saturating_add(self.period_ms));
        rtrace!(now_ms, restart_at_ms = ?self.restart_at_ms, "Cycle::reset");
    }

    /// Processes deadlines up to `now_ms`.
    ///
    /// Returns the direction to advance in when an automatic step is due. Missed periods are
    /// collapsed into a single step.
    pub(crate) fn poll(&mut self, now_ms: u64) -> Option<Direction> {
        if let Some(at) = self.restart_at_ms {
            if now_ms >= at {
                self.restart_at_ms = None;
                self.listening = true;
                self.start(at);
            }
        }

        let due = self.next_tick_ms?;
        if now_ms < due {
            return None;
        }
        let behind = (now_ms - due) / self.period_ms;
        self.next_tick_ms = Some(due.saturating_add((behind + 1).saturating_mul(self.period_ms)));
        Some(self.direction)
    }

    pub(crate) fn pointer_enter(&mut self) {
        if self.listening && self.hit_area.is_none() {
            self.stop();
        }
    }

    pub(crate) fn pointer_leave(&mut self, now_ms: u64) {
        if self.listening && self.hit_area.is_none() {
            self.start(now_ms);
        }
    }

    /// Polls the hit area with a pointer position relative to the mask.
    pub(crate) fn pointer_hover(&mut self, x: i32, y: i32, now_ms: u64) {
        let Some(hit) = self.hit_area else {
            return;
        };
        if !self.listening {
            return;
        }
        if self.cycling {
            if hit.contains(x, y) {
                self.stop();
            }
        } else if !hit.contains(x, y) && !on_edge(&hit, x, y) {
            self.start(now_ms);
        }
    }
}

// Exactly on an edge counts as neither inside nor outside.
fn on_edge(hit: &HitArea, x: i32, y: i32) -> bool {
    let max_x = hit.x.saturating_add(hit.width);
    let max_y = hit.y.saturating_add(hit.height);
    let within_x = x >= hit.x && x <= max_x;
    let within_y = y >= hit.y && y <= max_y;
    within_x && within_y && !hit.contains(x, y)
}
