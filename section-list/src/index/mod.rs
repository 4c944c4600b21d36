//! The index bar: a narrow strip of section labels that jumps the list to a section while the
//! pointer is dragged along it.
//!
//! - [`condense`] fits more labels than the strip can hold by stride sampling plus elision
//!   markers.
//! - [`StripGeometry`] and [`GestureState`] map pointer coordinates to a label without touching
//!   any UI object.
//! - [`SectionIndex`] ties both together and is what adapters drive.

mod condense;
mod gesture;
mod label;
mod navigator;
mod style;

pub use condense::{condense, condensed_stride, visible_capacity};
pub use gesture::{GestureState, StripGeometry, resolve_index};
pub use label::{ELISION_MARKER, LabelEntry, first_char_label};
pub use navigator::{GetLabel, IndexOptions, IndexPress, OnPressIndex, SectionIndex};
pub use style::{IndexBarStyle, Rgba, STRIP_INSET};
