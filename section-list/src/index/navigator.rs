use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use super::{
    GestureState, IndexBarStyle, LabelEntry, StripGeometry, condense, first_char_label,
    resolve_index, visible_capacity,
};

/// Formats a label for display.
pub type GetLabel = Arc<dyn Fn(&LabelEntry) -> String + Send + Sync>;

/// Fired for each label pressed or dragged onto; the second argument is the label's ordinal in
/// the displayed strip.
pub type OnPressIndex = Arc<dyn Fn(&LabelEntry, usize) + Send + Sync>;

/// A label press produced by a pointer event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexPress {
    pub entry: LabelEntry,
    /// Ordinal of `entry` in [`SectionIndex::displayed`].
    pub ordinal: usize,
}

/// Configuration for [`SectionIndex`].
#[derive(Clone, Default)]
pub struct IndexOptions {
    pub style: IndexBarStyle,
    /// Defaults to [`first_char_label`].
    pub get_label: Option<GetLabel>,
    pub on_press_index: Option<OnPressIndex>,
}

impl IndexOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: IndexBarStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_get_label(
        mut self,
        get_label: Option<impl Fn(&LabelEntry) -> String + Send + Sync + 'static>,
    ) -> Self {
        self.get_label = get_label.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_press_index(
        mut self,
        on_press_index: Option<impl Fn(&LabelEntry, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_press_index = on_press_index.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for IndexOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IndexOptions")
            .field("style", &self.style)
            .field("get_label", &self.get_label.is_some())
            .field("on_press_index", &self.on_press_index.is_some())
            .finish()
    }
}

/// Headless state of the index bar.
///
/// Adapters feed it:
/// - the section labels (`set_labels`) whenever sections change
/// - the height available to labels (`on_visible_area_layout`)
/// - the strip's page position and height (`on_strip_layout`)
/// - pointer events (`pointer_down` / `pointer_move` / `pointer_up`)
///
/// and draw [`Self::formatted_labels`] top to bottom in a strip [`Self::strip_width`] wide.
#[derive(Clone, Debug)]
pub struct SectionIndex {
    options: IndexOptions,
    labels: Vec<LabelEntry>,
    displayed: Vec<LabelEntry>,
    visible_area_height: Option<f32>,
    geometry: Option<StripGeometry>,
    gesture: GestureState,
}

impl SectionIndex {
    pub fn new(options: IndexOptions) -> Self {
        Self {
            options,
            labels: Vec::new(),
            displayed: Vec::new(),
            visible_area_height: None,
            geometry: None,
            gesture: GestureState::Idle,
        }
    }

    pub fn with_labels(options: IndexOptions, labels: Vec<LabelEntry>) -> Self {
        let mut index = Self::new(options);
        index.set_labels(labels);
        index
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: IndexOptions) {
        let restyled = options.style != self.options.style;
        self.options = options;
        if restyled {
            self.recondense();
        }
    }

    pub fn style(&self) -> IndexBarStyle {
        self.options.style
    }

    pub fn label_height(&self) -> f32 {
        self.options.style.label_height()
    }

    pub fn strip_width(&self) -> f32 {
        self.options.style.strip_width()
    }

    /// Replaces the candidate labels (one per section).
    pub fn set_labels(&mut self, labels: Vec<LabelEntry>) {
        if labels == self.labels {
            return;
        }
        self.labels = labels;
        self.recondense();
    }

    /// All candidate labels, before condensation.
    pub fn labels(&self) -> &[LabelEntry] {
        &self.labels
    }

    /// Labels currently shown in the strip, elision markers included.
    ///
    /// Empty until the visible area has been measured.
    pub fn displayed(&self) -> &[LabelEntry] {
        &self.displayed
    }

    pub fn formatted_labels(&self) -> Vec<String> {
        self.displayed
            .iter()
            .map(|entry| match &self.options.get_label {
                Some(get_label) => get_label(entry),
                None => first_char_label(entry),
            })
            .collect()
    }

    /// Number of labels the measured visible area can hold.
    pub fn visible_capacity(&self) -> Option<usize> {
        self.visible_area_height
            .map(|h| visible_capacity(h, self.label_height()))
    }

    /// Layout callback for the area labels may occupy.
    pub fn on_visible_area_layout(&mut self, height: f32) {
        if self.visible_area_height == Some(height) {
            return;
        }
        self.visible_area_height = Some(height);
        self.recondense();
    }

    /// Layout callback for the touchable strip, in page coordinates.
    pub fn on_strip_layout(&mut self, page_y: f32, height: f32) {
        self.geometry = Some(StripGeometry::from_layout(page_y, height));
    }

    pub fn geometry(&self) -> Option<StripGeometry> {
        self.geometry
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn pointer_down(&mut self, page_y: f32) -> Option<IndexPress> {
        if self.displayed.is_empty() {
            return None;
        }
        self.gesture.begin();
        self.track(page_y)
    }

    pub fn pointer_move(&mut self, page_y: f32) -> Option<IndexPress> {
        if !self.gesture.is_dragging() {
            return None;
        }
        self.track(page_y)
    }

    pub fn pointer_up(&mut self) {
        self.gesture.release();
    }

    fn track(&mut self, page_y: f32) -> Option<IndexPress> {
        let last = self.displayed.len().checked_sub(1)?;
        let fraction = self.geometry?.fraction(page_y)?;
        let ordinal = resolve_index(&self.displayed, fraction * last as f32)?;
        if !self.gesture.advance(ordinal) {
            return None;
        }

        let entry = self.displayed[ordinal].clone();
        strace!(ordinal, position = ?entry.target_position, "SectionIndex press");
        if let Some(on_press_index) = &self.options.on_press_index {
            on_press_index(&entry, ordinal);
        }
        Some(IndexPress { entry, ordinal })
    }

    fn recondense(&mut self) {
        self.displayed = match self.visible_capacity() {
            Some(capacity) => condense(&self.labels, capacity),
            None => Vec::new(),
        };
        self.gesture.forget();
        sdebug!(
            labels = self.labels.len(),
            displayed = self.displayed.len(),
            "SectionIndex::recondense"
        );
    }
}
