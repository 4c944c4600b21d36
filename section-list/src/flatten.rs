use alloc::vec::Vec;

use crate::{EntrySlot, FlatEntry, Section};

/// The flattened form of a section list: one header slot per section followed by one row slot
/// per item.
///
/// Positions in this sequence are what the virtualizer, sticky pinning, and index navigation
/// refer to. They are only meaningful for the sections the index was built from; rebuild it
/// whenever the sections change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlatIndex {
    slots: Vec<EntrySlot>,
    header_positions: Vec<usize>,
}

impl FlatIndex {
    pub fn build<L, T>(sections: &[Section<L, T>]) -> Self {
        let len = sections
            .iter()
            .fold(sections.len(), |acc, s| acc.saturating_add(s.items.len()));
        let mut slots = Vec::with_capacity(len);
        let mut header_positions = Vec::with_capacity(sections.len());

        for (section, s) in sections.iter().enumerate() {
            header_positions.push(slots.len());
            slots.push(EntrySlot::Header { section });
            slots.extend((0..s.items.len()).map(|item| EntrySlot::Row { section, item }));
        }

        sdebug!(
            sections = sections.len(),
            entries = slots.len(),
            "FlatIndex::build"
        );
        Self {
            slots,
            header_positions,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[EntrySlot] {
        &self.slots
    }

    pub fn slot(&self, position: usize) -> Option<EntrySlot> {
        self.slots.get(position).copied()
    }

    pub fn section_count(&self) -> usize {
        self.header_positions.len()
    }

    /// Positions of every header, ascending.
    pub fn header_positions(&self) -> &[usize] {
        &self.header_positions
    }

    pub fn header_position(&self, section: usize) -> Option<usize> {
        self.header_positions.get(section).copied()
    }

    /// Exclusive end position of a section (the next header, or the sequence length).
    pub fn section_end(&self, section: usize) -> Option<usize> {
        if section >= self.header_positions.len() {
            return None;
        }
        Some(
            self.header_positions
                .get(section + 1)
                .copied()
                .unwrap_or(self.slots.len()),
        )
    }

    /// Position of a section's trailing entry: its last row, or its header when it has no rows.
    pub fn last_position_of(&self, section: usize) -> Option<usize> {
        self.section_end(section).map(|end| end - 1)
    }

    pub fn section_of(&self, position: usize) -> Option<usize> {
        self.slot(position).map(EntrySlot::section)
    }

    /// Header positions when sticky headers are enabled, otherwise nothing.
    pub fn sticky_positions(&self, enabled: bool) -> Vec<usize> {
        if enabled {
            self.header_positions.clone()
        } else {
            Vec::new()
        }
    }

    /// Resolves a position against the sections this index was built from.
    ///
    /// Returns `None` for out-of-range positions or when `sections` no longer matches.
    pub fn resolve<'a, L, T>(
        &self,
        sections: &'a [Section<L, T>],
        position: usize,
    ) -> Option<FlatEntry<'a, L, T>> {
        match self.slot(position)? {
            EntrySlot::Header { section } => Some(FlatEntry::SectionHeader {
                section: sections.get(section)?,
                section_index: section,
            }),
            EntrySlot::Row { section, item } => {
                let s = sections.get(section)?;
                Some(FlatEntry::Row {
                    item: s.items.get(item)?,
                    section: s,
                    section_index: section,
                    item_index: item,
                })
            }
        }
    }
}
