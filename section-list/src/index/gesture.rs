use super::{LabelEntry, STRIP_INSET};

/// Measured vertical extent of the touchable strip, in absolute (page) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StripGeometry {
    pub origin: f32,
    pub height: f32,
}

impl StripGeometry {
    /// Builds the geometry from a layout measurement of the strip (page `y` and total height),
    /// excluding the inset at both ends.
    pub fn from_layout(page_y: f32, height: f32) -> Self {
        Self {
            origin: page_y + STRIP_INSET,
            height: (height - 2.0 * STRIP_INSET).max(0.0),
        }
    }

    pub fn contains(&self, y: f32) -> bool {
        y >= self.origin && y <= self.origin + self.height
    }

    /// Fractional position of `y` along the strip, in `[0, 1]`.
    ///
    /// Returns `None` when `y` is outside the strip or the strip has no usable height.
    pub fn fraction(&self, y: f32) -> Option<f32> {
        if !(self.height > 0.0) || !self.contains(y) {
            return None;
        }
        Some(((y - self.origin) / self.height).clamp(0.0, 1.0))
    }
}

/// Drag state of the index bar.
///
/// `Dragging` remembers the last dispatched label so the pointer can linger over a label
/// without dispatching it again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        last_index: Option<usize>,
    },
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn last_index(&self) -> Option<usize> {
        match *self {
            Self::Idle => None,
            Self::Dragging { last_index } => last_index,
        }
    }

    /// Pointer down: starts a fresh drag.
    pub fn begin(&mut self) {
        *self = Self::Dragging { last_index: None };
    }

    /// Pointer up or cancel.
    pub fn release(&mut self) {
        *self = Self::Idle;
    }

    /// Forgets the last dispatched label while keeping the drag alive.
    pub fn forget(&mut self) {
        if let Self::Dragging { last_index } = self {
            *last_index = None;
        }
    }

    /// Records `index` as hovered. Returns `true` when it differs from the last dispatched
    /// label and should be dispatched.
    ///
    /// Always `false` while idle.
    pub fn advance(&mut self, index: usize) -> bool {
        match self {
            Self::Idle => false,
            Self::Dragging { last_index } => {
                if *last_index == Some(index) {
                    return false;
                }
                *last_index = Some(index);
                true
            }
        }
    }
}

/// Maps a fractional label index (`fraction * (len - 1)`) onto a pressable label.
///
/// The nearest label wins; when that is an elision marker, the closer real neighbour is chosen
/// instead (ties go to the earlier one). Returns `None` when `labels` holds no real label.
pub fn resolve_index(labels: &[LabelEntry], raw: f32) -> Option<usize> {
    let last = labels.len().checked_sub(1)?;
    let raw = raw.clamp(0.0, last as f32);
    // round() for non-negative values.
    let index = ((raw + 0.5) as usize).min(last);
    if !labels[index].is_elision() {
        return Some(index);
    }

    let before = labels[..index].iter().rposition(|l| !l.is_elision());
    let after = labels[index + 1..]
        .iter()
        .position(|l| !l.is_elision())
        .map(|i| index + 1 + i);

    match (before, after) {
        (Some(b), Some(a)) => {
            if raw - b as f32 <= a as f32 - raw {
                Some(b)
            } else {
                Some(a)
            }
        }
        (b, a) => b.or(a),
    }
}
