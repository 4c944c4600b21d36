//! A headless sectioned list on top of a flat virtualizer.
//!
//! A virtualization engine only understands one flat sequence of items. This crate flattens an
//! ordered list of sections into that sequence (one header entry per section followed by its
//! rows) and answers everything the engine needs per flattened position: the item type, a
//! stable key, the sticky header set, column spans, separators, and what to render.
//!
//! The [`index`] module drives a compact index bar next to the list: it condenses section labels
//! to fit the measured strip and maps pointer coordinates to the section to jump to.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - renderers producing its own element type
//! - layout measurements of the index strip
//! - pointer events in page coordinates
//! - a scroll surface implementing [`ScrollToPosition`]
//!
//! For wiring into the `virtualizer` crate, see the `section-list-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod flatten;
pub mod index;
mod layout;
mod list;
mod options;
mod render;
mod separator;
mod types;

#[cfg(test)]
mod tests;

pub use flatten::FlatIndex;
pub use index::{IndexBarStyle, IndexOptions, IndexPress, LabelEntry, SectionIndex, condense};
pub use layout::{FlexDirection, ItemLayout, LayoutContext, enforce_span};
pub use list::{ScrollToPosition, SectionList};
pub use options::{
    KeyExtractor, LabelsKey, OnSectionIndexPress, OverrideItemLayout, SectionIndexOptions,
    SectionListOptions,
};
pub use render::{
    EntryContent, ItemInfo, RenderItem, RenderSection, RenderSeparator, RenderedEntry,
    RenderedSeparator, RowCell, SeparatorInfo,
};
pub use separator::{Junction, SeparatorKind, SeparatorOptions, SeparatorPlacement, junction_after};
pub use types::{EntryKey, EntrySlot, FlatEntry, ItemType, Section};
