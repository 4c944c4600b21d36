use crate::ItemType;

/// Orientation and grid context of the underlying list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutContext {
    pub horizontal: bool,
    pub inverted: bool,
    pub num_columns: u32,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self {
            horizontal: false,
            inverted: false,
            num_columns: 1,
        }
    }
}

impl LayoutContext {
    /// Column count, never less than one.
    pub fn columns(&self) -> u32 {
        self.num_columns.max(1)
    }

    /// Main axis of the container wrapping each row.
    pub fn row_direction(&self) -> FlexDirection {
        if self.horizontal || self.columns() == 1 {
            FlexDirection::Column
        } else {
            FlexDirection::Row
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlexDirection {
    Column,
    Row,
}

/// Per-entry layout hints consumed by a multi-column virtualizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLayout {
    pub span: Option<u32>,
    pub size: Option<u32>,
}

/// Forces the sectioning span rule: headers span every column, rows span one.
pub fn enforce_span(layout: &mut ItemLayout, item_type: ItemType, max_columns: u32) {
    layout.span = Some(match item_type {
        ItemType::SectionHeader => max_columns,
        ItemType::Row => 1,
    });
}
