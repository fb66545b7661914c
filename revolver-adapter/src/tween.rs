use revolver::Easing;

/// A time-based interpolation between two container positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: i64,
    pub to: i64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: i64, to: i64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> i64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f64 / self.duration_ms as f64) as f32;
        let eased = self.easing.sample(t) as f64;

        let from = self.from as f64;
        let to = self.to as f64;
        (from + (to - from) * eased) as i64
    }

    /// Restarts from the current sample towards `new_to`.
    pub fn retarget(&mut self, now_ms: u64, new_to: i64, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}
