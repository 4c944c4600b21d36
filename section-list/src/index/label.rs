use alloc::string::String;

/// Text shown for an elision marker.
pub const ELISION_MARKER: &str = "・";

/// A label in the index bar.
///
/// `target_position` is the flattened position of the section header to scroll to. Elision
/// markers have no target and never receive a press.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelEntry {
    pub label: String,
    pub target_position: Option<usize>,
}

impl LabelEntry {
    pub fn new(label: impl Into<String>, target_position: usize) -> Self {
        Self {
            label: label.into(),
            target_position: Some(target_position),
        }
    }

    pub fn elision() -> Self {
        Self {
            label: String::from(ELISION_MARKER),
            target_position: None,
        }
    }

    pub fn is_elision(&self) -> bool {
        self.target_position.is_none()
    }
}

/// Default label formatter: the first character of the label, or nothing.
pub fn first_char_label(entry: &LabelEntry) -> String {
    entry.label.chars().next().map(String::from).unwrap_or_default()
}
