use alloc::string::String;
use alloc::sync::Arc;

use crate::index::IndexOptions;
use crate::{
    FlatEntry, IndexBarStyle, ItemInfo, ItemLayout, LayoutContext, RenderItem, RenderSection,
    RenderSeparator, Section, SeparatorInfo, SeparatorOptions,
};

/// Caller-side layout override, applied before the header/row span rule.
///
/// Arguments: the layout to mutate, the entry, its flattened position, and the column count.
pub type OverrideItemLayout<L, T> =
    Arc<dyn Fn(&mut ItemLayout, FlatEntry<'_, L, T>, usize, u32) + Send + Sync>;

/// Produces a stable key for an entry at a flattened position.
pub type KeyExtractor<L, T> = Arc<dyn Fn(FlatEntry<'_, L, T>, usize) -> String + Send + Sync>;

/// Resolves the index-bar label of a section. `None` renders an empty label.
pub type LabelsKey<L, T> = Arc<dyn Fn(&Section<L, T>) -> Option<String> + Send + Sync>;

/// Fired after an index-bar press scrolled the list; receives the pressed section's index.
pub type OnSectionIndexPress = Arc<dyn Fn(usize) + Send + Sync>;

/// Enables the index bar next to the list.
pub struct SectionIndexOptions<L, T> {
    pub labels_key: LabelsKey<L, T>,
    pub on_section_index_press: Option<OnSectionIndexPress>,
    pub index: IndexOptions,
}

impl<L, T> Clone for SectionIndexOptions<L, T> {
    fn clone(&self) -> Self {
        Self {
            labels_key: Arc::clone(&self.labels_key),
            on_section_index_press: self.on_section_index_press.clone(),
            index: self.index.clone(),
        }
    }
}

impl<L, T> SectionIndexOptions<L, T> {
    pub fn new(
        labels_key: impl Fn(&Section<L, T>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            labels_key: Arc::new(labels_key),
            on_section_index_press: None,
            index: IndexOptions::default(),
        }
    }

    pub fn with_on_section_index_press(
        mut self,
        f: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_section_index_press = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_index_options(mut self, index: IndexOptions) -> Self {
        self.index = index;
        self
    }

    pub fn with_style(mut self, style: IndexBarStyle) -> Self {
        self.index.style = style;
        self
    }
}

impl<L: AsRef<str>, T> SectionIndexOptions<L, T> {
    /// Uses each section's own label.
    pub fn from_labels() -> Self {
        Self::new(|section: &Section<L, T>| Some(String::from(section.label.as_ref())))
    }
}

impl<L, T> core::fmt::Debug for SectionIndexOptions<L, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SectionIndexOptions")
            .field(
                "on_section_index_press",
                &self.on_section_index_press.is_some(),
            )
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

/// Configuration for [`crate::SectionList`].
///
/// Callbacks are stored in `Arc`s, so cloning is cheap and adapters can tweak a field and call
/// `SectionList::set_options`.
pub struct SectionListOptions<L, T, E> {
    pub render_item: Option<RenderItem<L, T, E>>,
    pub render_section_header: Option<RenderSection<L, T, E>>,
    pub render_section_footer: Option<RenderSection<L, T, E>>,
    /// Drawn at junctions led by a header.
    pub section_separator: Option<RenderSeparator<L, T, E>>,
    /// Drawn at junctions led by a row.
    pub item_separator: Option<RenderSeparator<L, T, E>>,
    pub separators: SeparatorOptions,
    /// Defaults to `true`.
    pub sticky_section_headers_enabled: bool,
    pub layout: LayoutContext,
    pub override_item_layout: Option<OverrideItemLayout<L, T>>,
    pub key_extractor: Option<KeyExtractor<L, T>>,
    /// When set, the list exposes index-bar labels and accepts index presses.
    pub section_index: Option<SectionIndexOptions<L, T>>,
}

impl<L, T, E> Clone for SectionListOptions<L, T, E> {
    fn clone(&self) -> Self {
        Self {
            render_item: self.render_item.clone(),
            render_section_header: self.render_section_header.clone(),
            render_section_footer: self.render_section_footer.clone(),
            section_separator: self.section_separator.clone(),
            item_separator: self.item_separator.clone(),
            separators: self.separators,
            sticky_section_headers_enabled: self.sticky_section_headers_enabled,
            layout: self.layout,
            override_item_layout: self.override_item_layout.clone(),
            key_extractor: self.key_extractor.clone(),
            section_index: self.section_index.clone(),
        }
    }
}

impl<L, T, E> Default for SectionListOptions<L, T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, T, E> SectionListOptions<L, T, E> {
    pub fn new() -> Self {
        Self {
            render_item: None,
            render_section_header: None,
            render_section_footer: None,
            section_separator: None,
            item_separator: None,
            separators: SeparatorOptions::default(),
            sticky_section_headers_enabled: true,
            layout: LayoutContext::default(),
            override_item_layout: None,
            key_extractor: None,
            section_index: None,
        }
    }

    pub fn with_render_item(
        mut self,
        f: Option<impl Fn(ItemInfo<'_, L, T>) -> E + Send + Sync + 'static>,
    ) -> Self {
        self.render_item = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_render_section_header(
        mut self,
        f: Option<impl Fn(&Section<L, T>) -> Option<E> + Send + Sync + 'static>,
    ) -> Self {
        self.render_section_header = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_render_section_footer(
        mut self,
        f: Option<impl Fn(&Section<L, T>) -> Option<E> + Send + Sync + 'static>,
    ) -> Self {
        self.render_section_footer = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_section_separator(
        mut self,
        f: Option<impl Fn(SeparatorInfo<'_, L, T>) -> E + Send + Sync + 'static>,
    ) -> Self {
        self.section_separator = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_item_separator(
        mut self,
        f: Option<impl Fn(SeparatorInfo<'_, L, T>) -> E + Send + Sync + 'static>,
    ) -> Self {
        self.item_separator = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_separators(mut self, separators: SeparatorOptions) -> Self {
        self.separators = separators;
        self
    }

    pub fn with_sticky_section_headers_enabled(mut self, enabled: bool) -> Self {
        self.sticky_section_headers_enabled = enabled;
        self
    }

    pub fn with_layout(mut self, layout: LayoutContext) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.layout.horizontal = horizontal;
        self
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.layout.inverted = inverted;
        self
    }

    pub fn with_num_columns(mut self, num_columns: u32) -> Self {
        self.layout.num_columns = num_columns;
        self
    }

    pub fn with_override_item_layout(
        mut self,
        f: Option<
            impl Fn(&mut ItemLayout, FlatEntry<'_, L, T>, usize, u32) + Send + Sync + 'static,
        >,
    ) -> Self {
        self.override_item_layout = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_key_extractor(
        mut self,
        f: Option<impl Fn(FlatEntry<'_, L, T>, usize) -> String + Send + Sync + 'static>,
    ) -> Self {
        self.key_extractor = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_section_index(mut self, section_index: Option<SectionIndexOptions<L, T>>) -> Self {
        self.section_index = section_index;
        self
    }
}

impl<L, T, E> core::fmt::Debug for SectionListOptions<L, T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SectionListOptions")
            .field("separators", &self.separators)
            .field(
                "sticky_section_headers_enabled",
                &self.sticky_section_headers_enabled,
            )
            .field("layout", &self.layout)
            .field("section_index", &self.section_index)
            .finish_non_exhaustive()
    }
}
