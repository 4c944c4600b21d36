use alloc::string::String;
use alloc::vec::Vec;

use crate::index::{IndexPress, LabelEntry};
use crate::render::{
    EntryContent, ItemInfo, RenderedEntry, RenderedSeparator, RowCell, SeparatorInfo,
};
use crate::separator::{Junction, SeparatorKind, junction_after};
use crate::{
    EntryKey, FlatEntry, FlatIndex, ItemLayout, ItemType, LayoutContext, Section,
    SectionListOptions, enforce_span,
};

/// The imperative scroll surface of the primary list, as seen by index navigation.
pub trait ScrollToPosition {
    fn scroll_to_position(&mut self, position: usize);
}

/// A sectioned list flattened for a virtualizer that only knows a flat sequence.
///
/// This type does not hold any UI objects. It owns the sections and the derived state (the
/// flattened sequence and the sticky set), which are rebuilt wholesale whenever the sections or
/// options change. Everything a virtualizer asks for is answered by flattened position:
/// - `item_type` / `key_for` for recycling pools and measurement caches
/// - `sticky_positions` for pinning
/// - `override_item_layout` for column spans
/// - `render` for drawing, with separators and footers resolved
#[derive(Clone, Debug)]
pub struct SectionList<L, T, E> {
    options: SectionListOptions<L, T, E>,
    sections: Vec<Section<L, T>>,
    flat: FlatIndex,
    sticky: Vec<usize>,
}

impl<L, T, E> SectionList<L, T, E> {
    pub fn new(sections: Vec<Section<L, T>>, options: SectionListOptions<L, T, E>) -> Self {
        if options.layout.num_columns == 0 {
            swarn!("SectionList: num_columns is 0, treating as 1");
        }
        let flat = FlatIndex::build(&sections);
        let sticky = flat.sticky_positions(options.sticky_section_headers_enabled);
        Self {
            options,
            sections,
            flat,
            sticky,
        }
    }

    pub fn options(&self) -> &SectionListOptions<L, T, E> {
        &self.options
    }

    pub fn set_options(&mut self, options: SectionListOptions<L, T, E>) {
        if options.layout.num_columns == 0 {
            swarn!("SectionList: num_columns is 0, treating as 1");
        }
        self.options = options;
        self.sticky = self
            .flat
            .sticky_positions(self.options.sticky_section_headers_enabled);
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut SectionListOptions<L, T, E>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_sticky_section_headers_enabled(&mut self, enabled: bool) {
        self.update_options(|o| o.sticky_section_headers_enabled = enabled);
    }

    pub fn set_layout(&mut self, layout: LayoutContext) {
        self.update_options(|o| o.layout = layout);
    }

    pub fn layout(&self) -> LayoutContext {
        self.options.layout
    }

    pub fn sections(&self) -> &[Section<L, T>] {
        &self.sections
    }

    /// Replaces the sections and rebuilds every position-derived value.
    pub fn set_sections(&mut self, sections: Vec<Section<L, T>>) {
        self.sections = sections;
        self.flat = FlatIndex::build(&self.sections);
        self.sticky = self
            .flat
            .sticky_positions(self.options.sticky_section_headers_enabled);
    }

    pub fn into_sections(self) -> Vec<Section<L, T>> {
        self.sections
    }

    pub fn flat_index(&self) -> &FlatIndex {
        &self.flat
    }

    pub fn len(&self) -> usize {
        self.flat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }

    pub fn entry(&self, position: usize) -> Option<FlatEntry<'_, L, T>> {
        self.flat.resolve(&self.sections, position)
    }

    pub fn entries(&self) -> impl Iterator<Item = FlatEntry<'_, L, T>> + '_ {
        (0..self.flat.len()).filter_map(move |i| self.entry(i))
    }

    pub fn item_type(&self, position: usize) -> Option<ItemType> {
        self.flat.slot(position).map(|s| s.item_type())
    }

    pub fn key_for(&self, position: usize) -> Option<EntryKey> {
        match &self.options.key_extractor {
            Some(extract) => {
                let entry = self.entry(position)?;
                Some(EntryKey::Custom(extract(entry, position)))
            }
            None => self.flat.slot(position).map(EntryKey::from),
        }
    }

    /// Positions the virtualizer should pin; empty when sticky headers are disabled.
    pub fn sticky_positions(&self) -> &[usize] {
        &self.sticky
    }

    pub fn is_sticky(&self, position: usize) -> bool {
        self.sticky.binary_search(&position).is_ok()
    }

    /// The separator junction following `position`, if one is drawn there.
    pub fn separator_at(&self, position: usize) -> Option<Junction> {
        junction_after(
            self.flat.slots(),
            &self.sticky,
            position,
            self.options.layout.inverted,
            self.options.separators,
        )
    }

    /// Applies the caller's layout override, then the sectioning span rule, which always wins.
    pub fn override_item_layout(
        &self,
        position: usize,
        max_columns: u32,
        layout: &mut ItemLayout,
    ) {
        let Some(entry) = self.entry(position) else {
            swarn!(position, len = self.len(), "override_item_layout: out of range");
            return;
        };
        if let Some(override_layout) = &self.options.override_item_layout {
            override_layout(layout, entry, position, max_columns);
        }
        enforce_span(layout, entry.item_type(), max_columns);
    }

    pub fn item_layout(&self, position: usize, max_columns: u32) -> Option<ItemLayout> {
        self.entry(position)?;
        let mut layout = ItemLayout::default();
        self.override_item_layout(position, max_columns, &mut layout);
        Some(layout)
    }

    /// Renders the entry at `position`. Missing renderers render nothing.
    pub fn render(&self, position: usize) -> Option<RenderedEntry<E>> {
        let entry = self.entry(position)?;
        let content = match entry {
            FlatEntry::SectionHeader { section, .. } => EntryContent::Header(
                self.options
                    .render_section_header
                    .as_ref()
                    .and_then(|render| render(section)),
            ),
            FlatEntry::Row {
                item,
                section,
                item_index,
                ..
            } => EntryContent::Row(RowCell {
                direction: self.options.layout.row_direction(),
                child: self.options.render_item.as_ref().map(|render| {
                    render(ItemInfo {
                        item,
                        index: position,
                        item_index,
                        section,
                    })
                }),
            }),
        };

        let footer = if self.flat.last_position_of(entry.section_index()) == Some(position) {
            self.options
                .render_section_footer
                .as_ref()
                .and_then(|render| render(entry.section()))
        } else {
            None
        };

        Some(RenderedEntry {
            index: position,
            item_type: entry.item_type(),
            content,
            footer,
            separator: self.render_separator(position),
        })
    }

    fn render_separator(&self, position: usize) -> Option<RenderedSeparator<E>> {
        let junction = self.separator_at(position)?;
        let render = match junction.kind {
            SeparatorKind::Section => self.options.section_separator.as_ref(),
            SeparatorKind::Item => self.options.item_separator.as_ref(),
        }?;
        let leading = self.entry(position)?;
        let trailing = self.entry(position + 1)?;
        Some(RenderedSeparator {
            kind: junction.kind,
            placement: junction.placement,
            element: render(SeparatorInfo {
                index: position,
                leading,
                trailing,
            }),
        })
    }

    pub fn section_index_enabled(&self) -> bool {
        self.options.section_index.is_some()
    }

    /// One index-bar label per section, targeting its header. Empty when the index bar is off.
    pub fn section_index_labels(&self) -> Vec<LabelEntry> {
        let Some(index) = &self.options.section_index else {
            return Vec::new();
        };
        self.sections
            .iter()
            .zip(self.flat.header_positions())
            .map(|(section, &position)| {
                let label = (index.labels_key)(section).unwrap_or_else(|| {
                    swarn!(position, "section index label key resolved to nothing");
                    String::new()
                });
                LabelEntry::new(label, position)
            })
            .collect()
    }

    /// Scrolls to a pressed index label and fires `on_section_index_press` with its section.
    ///
    /// Returns `false` (and does nothing) for elision markers and stale targets.
    pub fn press_index(&self, press: &IndexPress, scroll: &mut impl ScrollToPosition) -> bool {
        let Some(position) = press.entry.target_position else {
            return false;
        };
        let Some(section) = self.flat.section_of(position) else {
            swarn!(position, len = self.len(), "press_index: stale target");
            return false;
        };
        sdebug!(position, section, ordinal = press.ordinal, "press_index");
        scroll.scroll_to_position(position);
        if let Some(on_press) = self
            .options
            .section_index
            .as_ref()
            .and_then(|o| o.on_section_index_press.as_ref())
        {
            on_press(section);
        }
        true
    }
}
