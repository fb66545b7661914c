/// How items are laid out inside the mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// One item per page, each item exactly as wide as the mask.
    #[default]
    Fluid,
    /// Fixed-width items; as many as fit in the mask make up a page.
    Fixed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }
}

/// How the host positions the container.
///
/// This only matters for [`Offset::Percent`] values: transforms are relative to the container,
/// plain offsets are relative to the mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Positioning {
    #[default]
    Transform,
    Offset,
}

/// Timing curve requested for a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    #[default]
    Swing,
    Linear,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn name(self) -> &'static str {
        match self {
            Self::Swing => "swing",
            Self::Linear => "linear",
            Self::SmoothStep => "smoothstep",
            Self::EaseInOutCubic => "ease-in-out-cubic",
        }
    }

    /// Maps linear progress `t` (clamped to `0..=1`) onto the curve.
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Swing => swing(t),
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

#[cfg(feature = "std")]
fn swing(t: f32) -> f32 {
    0.5 - (t * core::f32::consts::PI).cos() / 2.0
}

// `cos` needs std; smoothstep stays within 0.01 of the cosine curve.
#[cfg(not(feature = "std"))]
fn swing(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Sizes reported by the host's measurement provider, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub item_size: u32,
    pub mask_size: u32,
    pub container_size: u32,
}

impl Measurement {
    /// Uniform items laid out edge to edge: the container is `item_count * item_size` wide.
    pub fn uniform(item_size: u32, mask_size: u32, item_count: usize) -> Self {
        let count = u32::try_from(item_count).unwrap_or(u32::MAX);
        Self {
            item_size,
            mask_size,
            container_size: item_size.saturating_mul(count),
        }
    }

    /// A zero item size means the host has not laid anything out yet.
    pub fn is_measured(&self) -> bool {
        self.item_size > 0
    }
}

/// What the measurement provider is asked to measure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasureInput {
    pub mode: Mode,
    /// Number of items in the container, clones included.
    pub item_count: usize,
}

/// A container position in the unit the host should apply.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Offset {
    Pixels(i64),
    Percent(f32),
}

/// Pointer rectangle, relative to the mask, that pauses autoplay while hovered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitArea {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl HitArea {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges are exclusive on both sides.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let max_x = self.x.saturating_add(self.width);
        let max_y = self.y.saturating_add(self.height);
        x > self.x && y > self.y && x < max_x && y < max_y
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Real,
    Clone,
}

/// One slot in the carousel's item sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<T> {
    value: T,
    kind: ItemKind,
    load_requested: bool,
}

impl<T> Item<T> {
    pub(crate) fn real(value: T) -> Self {
        Self {
            value,
            kind: ItemKind::Real,
            load_requested: false,
        }
    }

    pub(crate) fn clone_of(value: T) -> Self {
        Self {
            value,
            kind: ItemKind::Clone,
            load_requested: false,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn is_clone(&self) -> bool {
        self.kind == ItemKind::Clone
    }

    /// Whether a lazy load has already been requested for this slot.
    pub fn load_requested(&self) -> bool {
        self.load_requested
    }

    /// Marks the slot as requested; returns `false` if it already was.
    pub(crate) fn request_load(&mut self) -> bool {
        !core::mem::replace(&mut self.load_requested, true)
    }
}
