use alloc::sync::Arc;
use alloc::vec::Vec;

use section_list::{
    EntryKey, IndexBarStyle, IndexPress, ItemType, RenderedEntry, ScrollToPosition, Section,
    SectionIndex, SectionList, SectionListOptions,
};
use virtualizer::{Align, VirtualItem, Virtualizer};

use crate::{
    EntryAnchor, EstimateSize, active_sticky, apply_anchor, capture_first_visible_anchor,
    virtualizer_options,
};

/// Scrolls a virtualizer so that a flattened position lands at the start of the viewport.
pub struct VirtualizerScroll<'a>(pub &'a mut Virtualizer<EntryKey>);

impl ScrollToPosition for VirtualizerScroll<'_> {
    fn scroll_to_position(&mut self, position: usize) {
        let offset = self.0.scroll_to_index_offset(position, Align::Start);
        self.0.set_scroll_offset_clamped(offset);
    }
}

/// A framework-neutral controller that keeps a [`SectionList`], a `virtualizer::Virtualizer`
/// and the optional index bar in sync.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_size` / `on_scroll` when the list viewport changes
/// - `on_index_*` with the index strip's layout and pointer events
/// - `tick(now_ms)` each frame/timer tick (for `is_scrolling` debouncing)
///
/// Index presses scroll the virtualizer directly; read the new offset from
/// `virtualizer().scroll_offset()` and apply it to the real scroll container.
pub struct SectionListController<L, T, E> {
    list: SectionList<L, T, E>,
    v: Virtualizer<EntryKey>,
    index: Option<SectionIndex>,
    estimate_size: EstimateSize,
}

impl<L, T, E> SectionListController<L, T, E> {
    pub fn new(
        list: SectionList<L, T, E>,
        estimate_size: impl Fn(ItemType) -> u32 + Send + Sync + 'static,
    ) -> Self {
        let estimate_size: EstimateSize = Arc::new(estimate_size);
        let v = Virtualizer::new(virtualizer_options(&list, Arc::clone(&estimate_size)));
        let mut this = Self {
            list,
            v,
            index: None,
            estimate_size,
        };
        this.sync_index();
        this
    }

    pub fn list(&self) -> &SectionList<L, T, E> {
        &self.list
    }

    pub fn virtualizer(&self) -> &Virtualizer<EntryKey> {
        &self.v
    }

    pub fn virtualizer_mut(&mut self) -> &mut Virtualizer<EntryKey> {
        &mut self.v
    }

    /// `None` when the list has no section index configured.
    pub fn section_index(&self) -> Option<&SectionIndex> {
        self.index.as_ref()
    }

    pub fn into_list(self) -> SectionList<L, T, E> {
        self.list
    }

    /// Replaces the sections, keeping the first visible entry in place when it still exists.
    ///
    /// Returns `true` if the scroll position was re-anchored.
    pub fn set_sections(&mut self, sections: Vec<Section<L, T>>) -> bool {
        let anchor = capture_first_visible_anchor(&self.v);
        self.list.set_sections(sections);
        self.sync();
        self.restore(anchor)
    }

    pub fn set_options(&mut self, options: SectionListOptions<L, T, E>) -> bool {
        let anchor = capture_first_visible_anchor(&self.v);
        self.list.set_options(options);
        self.sync();
        self.restore(anchor)
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut SectionListOptions<L, T, E>)) -> bool {
        let mut next = self.list.options().clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn set_estimate_size(&mut self, f: impl Fn(ItemType) -> u32 + Send + Sync + 'static) {
        self.estimate_size = Arc::new(f);
        self.sync();
    }

    fn restore(&mut self, anchor: Option<EntryAnchor>) -> bool {
        let restored = anchor.is_some_and(|a| apply_anchor(&mut self.v, &self.list, &a));
        if !restored {
            let offset = self.v.scroll_offset();
            self.v.set_scroll_offset_clamped(offset);
        }
        restored
    }

    fn sync(&mut self) {
        let next = virtualizer_options(&self.list, Arc::clone(&self.estimate_size));
        self.v.update_options(|o| {
            o.count = next.count;
            o.estimate_size = next.estimate_size;
            o.get_item_key = next.get_item_key;
            o.range_extractor = next.range_extractor;
        });
        self.sync_index();
        adebug!(
            count = self.list.len(),
            sections = self.list.sections().len(),
            "SectionListController::sync"
        );
    }

    fn sync_index(&mut self) {
        let Some(options) = self.list.options().section_index.as_ref() else {
            self.index = None;
            return;
        };
        let labels = self.list.section_index_labels();
        match self.index.as_mut() {
            Some(index) => {
                index.set_options(options.index.clone());
                index.set_labels(labels);
            }
            None => self.index = Some(SectionIndex::with_labels(options.index.clone(), labels)),
        }
    }

    pub fn on_viewport_size(&mut self, viewport_main: u32) {
        self.v.set_viewport_size(viewport_main);
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    pub fn on_scroll(&mut self, scroll_offset: u64, now_ms: u64) {
        self.v.apply_scroll_offset_event(scroll_offset, now_ms);
    }

    pub fn tick(&mut self, now_ms: u64) {
        self.v.update_scrolling(now_ms);
    }

    /// Scrolls so that `position` starts the viewport and returns the new offset.
    pub fn scroll_to_position(&mut self, position: usize) -> u64 {
        VirtualizerScroll(&mut self.v).scroll_to_position(position);
        self.v.scroll_offset()
    }

    /// Scrolls to a section's header. Returns `None` if the section does not exist.
    pub fn scroll_to_section(&mut self, section: usize) -> Option<u64> {
        let position = self.list.flat_index().header_position(section)?;
        Some(self.scroll_to_position(position))
    }

    pub fn set_index_style(&mut self, style: IndexBarStyle) {
        self.list.update_options(|o| {
            if let Some(index) = o.section_index.as_mut() {
                index.index.style = style;
            }
        });
        self.sync_index();
    }

    /// The measured height of the container hosting the index bar.
    pub fn on_index_container_layout(&mut self, height: f32) {
        if let Some(index) = self.index.as_mut() {
            let area = index.style().visible_area(height);
            index.on_visible_area_layout(area);
        }
    }

    /// The measured page position and height of the index strip.
    pub fn on_index_strip_layout(&mut self, page_y: f32, height: f32) {
        if let Some(index) = self.index.as_mut() {
            index.on_strip_layout(page_y, height);
        }
    }

    pub fn on_index_pointer_down(&mut self, page_y: f32) -> Option<IndexPress> {
        let press = self.index.as_mut()?.pointer_down(page_y)?;
        self.route(&press);
        Some(press)
    }

    pub fn on_index_pointer_move(&mut self, page_y: f32) -> Option<IndexPress> {
        let press = self.index.as_mut()?.pointer_move(page_y)?;
        self.route(&press);
        Some(press)
    }

    pub fn on_index_pointer_up(&mut self) {
        if let Some(index) = self.index.as_mut() {
            index.pointer_up();
        }
    }

    fn route(&mut self, press: &IndexPress) {
        if self
            .list
            .press_index(press, &mut VirtualizerScroll(&mut self.v))
        {
            atrace!(
                ordinal = press.ordinal,
                offset = self.v.scroll_offset(),
                "index press routed"
            );
        }
    }

    /// Renders every entry the virtualizer currently wants on screen, including a pinned
    /// header that scrolled out of the overscanned range.
    pub fn render_visible(&self) -> Vec<(VirtualItem, RenderedEntry<E>)> {
        let mut out = Vec::new();
        self.v.for_each_virtual_item(|item| {
            if let Some(entry) = self.list.render(item.index) {
                out.push((item, entry));
            }
        });
        out
    }

    /// The header position to pin at the top of the viewport, if any.
    pub fn pinned_header(&self) -> Option<usize> {
        let visible = self.v.visible_range();
        if visible.is_empty() {
            return None;
        }
        active_sticky(self.list.sticky_positions(), visible.start_index)
    }

    /// The section under the top edge of the viewport.
    pub fn active_section(&self) -> Option<usize> {
        let visible = self.v.visible_range();
        if visible.is_empty() {
            return None;
        }
        self.list.flat_index().section_of(visible.start_index)
    }
}

impl<L: Clone, T: Clone, E: Clone> Clone for SectionListController<L, T, E> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            v: self.v.clone(),
            index: self.index.clone(),
            estimate_size: Arc::clone(&self.estimate_size),
        }
    }
}

impl<L: core::fmt::Debug, T: core::fmt::Debug, E: core::fmt::Debug> core::fmt::Debug
    for SectionListController<L, T, E>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SectionListController")
            .field("list", &self.list)
            .field("v", &self.v)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
