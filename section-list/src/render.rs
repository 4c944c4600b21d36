use alloc::sync::Arc;

use crate::{FlatEntry, FlexDirection, ItemType, Section, SeparatorKind, SeparatorPlacement};

/// What a row renderer receives.
#[derive(Debug)]
pub struct ItemInfo<'a, L, T> {
    pub item: &'a T,
    /// Flattened position of the row.
    pub index: usize,
    pub item_index: usize,
    pub section: &'a Section<L, T>,
}

/// What a separator renderer receives: the entries on both sides of the junction.
#[derive(Debug)]
pub struct SeparatorInfo<'a, L, T> {
    /// Flattened position of the leading entry.
    pub index: usize,
    pub leading: FlatEntry<'a, L, T>,
    pub trailing: FlatEntry<'a, L, T>,
}

pub type RenderItem<L, T, E> = Arc<dyn Fn(ItemInfo<'_, L, T>) -> E + Send + Sync>;
pub type RenderSection<L, T, E> = Arc<dyn Fn(&Section<L, T>) -> Option<E> + Send + Sync>;
pub type RenderSeparator<L, T, E> = Arc<dyn Fn(SeparatorInfo<'_, L, T>) -> E + Send + Sync>;

/// A row's content wrapped in a directional container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowCell<E> {
    pub direction: FlexDirection,
    /// `None` when no row renderer is configured.
    pub child: Option<E>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryContent<E> {
    Header(Option<E>),
    Row(RowCell<E>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedSeparator<E> {
    pub kind: SeparatorKind,
    pub placement: SeparatorPlacement,
    pub element: E,
}

/// Everything drawn for one flattened entry, in the caller's element type `E`.
///
/// Drawing order is: a `Before` separator, the content, the footer (only on a section's trailing
/// entry), then an `After` separator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedEntry<E> {
    pub index: usize,
    pub item_type: ItemType,
    pub content: EntryContent<E>,
    pub footer: Option<E>,
    pub separator: Option<RenderedSeparator<E>>,
}

impl<E> RenderedEntry<E> {
    pub fn separator_before(&self) -> Option<&E> {
        self.separator
            .as_ref()
            .filter(|s| s.placement == SeparatorPlacement::Before)
            .map(|s| &s.element)
    }

    pub fn separator_after(&self) -> Option<&E> {
        self.separator
            .as_ref()
            .filter(|s| s.placement == SeparatorPlacement::After)
            .map(|s| &s.element)
    }
}
