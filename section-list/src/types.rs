use alloc::string::String;
use alloc::vec::Vec;

/// A labelled group of items displayed under one header.
///
/// Sections are owned by the caller; their order is the display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section<L, T> {
    pub label: L,
    pub items: Vec<T>,
}

impl<L, T> Section<L, T> {
    pub fn new(label: L, items: impl IntoIterator<Item = T>) -> Self {
        Self {
            label,
            items: items.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The "item type" discriminant handed to the virtualizer, so headers and rows are recycled
/// from separate pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemType {
    SectionHeader,
    Row,
}

impl ItemType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SectionHeader => "sectionHeader",
            Self::Row => "row",
        }
    }
}

/// An owned, index-based slot of the flattened sequence.
///
/// Slots are what [`crate::FlatIndex`] stores; they are resolved against the section slice into
/// borrowed [`FlatEntry`] values on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntrySlot {
    Header { section: usize },
    Row { section: usize, item: usize },
}

impl EntrySlot {
    pub fn item_type(self) -> ItemType {
        match self {
            Self::Header { .. } => ItemType::SectionHeader,
            Self::Row { .. } => ItemType::Row,
        }
    }

    pub fn is_header(self) -> bool {
        matches!(self, Self::Header { .. })
    }

    pub fn section(self) -> usize {
        match self {
            Self::Header { section } | Self::Row { section, .. } => section,
        }
    }
}

/// One entry of the flattened sequence, borrowed from the sections it was built from.
#[derive(Debug)]
pub enum FlatEntry<'a, L, T> {
    SectionHeader {
        section: &'a Section<L, T>,
        section_index: usize,
    },
    Row {
        item: &'a T,
        section: &'a Section<L, T>,
        section_index: usize,
        item_index: usize,
    },
}

impl<L, T> Clone for FlatEntry<'_, L, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, T> Copy for FlatEntry<'_, L, T> {}

impl<'a, L, T> FlatEntry<'a, L, T> {
    pub fn item_type(&self) -> ItemType {
        match self {
            Self::SectionHeader { .. } => ItemType::SectionHeader,
            Self::Row { .. } => ItemType::Row,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Self::SectionHeader { .. })
    }

    pub fn section(&self) -> &'a Section<L, T> {
        match *self {
            Self::SectionHeader { section, .. } | Self::Row { section, .. } => section,
        }
    }

    pub fn section_index(&self) -> usize {
        match *self {
            Self::SectionHeader { section_index, .. } | Self::Row { section_index, .. } => {
                section_index
            }
        }
    }

    /// Returns the row item, or `None` for a header.
    pub fn item(&self) -> Option<&'a T> {
        match *self {
            Self::SectionHeader { .. } => None,
            Self::Row { item, .. } => Some(item),
        }
    }

    pub fn slot(&self) -> EntrySlot {
        match *self {
            Self::SectionHeader { section_index, .. } => EntrySlot::Header {
                section: section_index,
            },
            Self::Row {
                section_index,
                item_index,
                ..
            } => EntrySlot::Row {
                section: section_index,
                item: item_index,
            },
        }
    }
}

/// Stable identity of a flattened entry, used as the virtualizer's measurement key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryKey {
    Header(usize),
    Row(usize, usize),
    /// Produced by a caller-supplied key extractor.
    Custom(String),
}

impl From<EntrySlot> for EntryKey {
    fn from(slot: EntrySlot) -> Self {
        match slot {
            EntrySlot::Header { section } => Self::Header(section),
            EntrySlot::Row { section, item } => Self::Row(section, item),
        }
    }
}
