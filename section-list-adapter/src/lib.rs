//! Binds `section-list` to the `virtualizer` engine.
//!
//! `section-list` answers per-position questions about a flattened sectioned list; this crate
//! turns those answers into `virtualizer::VirtualizerOptions` and keeps both in sync:
//!
//! - Options with per-type size estimates and stable entry keys
//! - A range extractor that keeps the active sticky header rendered
//! - Scroll anchoring across section changes
//! - A controller routing index-bar presses into virtualizer scrolls
//!
//! Like the crates it connects, this one is framework-agnostic.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod options;
mod sticky;


pub use anchor::{EntryAnchor, apply_anchor, capture_first_visible_anchor};
pub use controller::{SectionListController, VirtualizerScroll};
pub use options::{EstimateSize, virtualizer_options};
pub use sticky::{active_sticky, sticky_range_extractor};
