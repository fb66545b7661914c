/// Key codes that navigate when `controls.key` is on.
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

/// Normalized input delivered by the host's event layer.
///
/// Pointer coordinates are relative to the mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    PointerDown { x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
    PointerUp,
    PointerCancel,
    /// The pointer entered the mask.
    PointerEnter,
    /// The pointer left the mask.
    PointerLeave,
    KeyDown { key_code: u32 },
    /// The viewport or the items changed size.
    Resize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Intent {
    /// Vertical-dominant movement; left to the page.
    Scroll,
    /// Horizontal drag owned by the carousel.
    Swipe,
}

/// One touch gesture, from pointer down to pointer up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Touch {
    pub(crate) intent: Option<Intent>,
    pub(crate) start_x: i32,
    pub(crate) start_y: i32,
    pub(crate) last_x: i32,
    pub(crate) start_position: i64,
}

impl Touch {
    pub(crate) fn new(x: i32, y: i32, start_position: i64) -> Self {
        Self {
            intent: None,
            start_x: x,
            start_y: y,
            last_x: x,
            start_position,
        }
    }

    /// Records a pointer move and returns the horizontal travel since the start
    /// (positive when moving towards later items).
    ///
    /// The first move decides the gesture's intent.
    pub(crate) fn track(&mut self, x: i32, y: i32) -> i64 {
        let delta_x = self.start_x as i64 - x as i64;
        let delta_y = self.start_y as i64 - y as i64;
        self.last_x = x;
        if self.intent.is_none() {
            self.intent = Some(if delta_x.abs() < delta_y.abs() {
                Intent::Scroll
            } else {
                Intent::Swipe
            });
        }
        delta_x
    }

    pub(crate) fn is_swipe(&self) -> bool {
        self.intent == Some(Intent::Swipe)
    }

    /// Whether the finger ended up left of where it started.
    pub(crate) fn moved_forward(&self) -> bool {
        self.last_x < self.start_x
    }
}
