use section_list::{EntryKey, SectionList};
use virtualizer::Virtualizer;

/// A scroll anchor that keeps the same entry in place across section changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryAnchor {
    pub key: EntryKey,
    /// The distance from the anchor entry's start to the viewport's scroll offset.
    pub offset_in_viewport: u64,
}

/// Captures an anchor for the first visible entry.
///
/// Returns `None` if the virtualizer is disabled or the visible range is empty.
pub fn capture_first_visible_anchor(v: &Virtualizer<EntryKey>) -> Option<EntryAnchor> {
    let visible = v.visible_range();
    if visible.is_empty() {
        return None;
    }
    let index = visible.start_index;
    let start = v.item_start(index)?;
    Some(EntryAnchor {
        key: v.key_for(index),
        offset_in_viewport: v.scroll_offset().saturating_sub(start),
    })
}

/// Re-applies an anchor against the current sections of `list`.
///
/// Returns `true` when the anchored entry still exists and the scroll offset was adjusted.
pub fn apply_anchor<L, T, E>(
    v: &mut Virtualizer<EntryKey>,
    list: &SectionList<L, T, E>,
    anchor: &EntryAnchor,
) -> bool {
    let Some(position) = (0..list.len()).find(|&i| list.key_for(i).as_ref() == Some(&anchor.key))
    else {
        return false;
    };
    let Some(start) = v.item_start(position) else {
        return false;
    };
    v.set_scroll_offset_clamped(start.saturating_add(anchor.offset_in_viewport));
    true
}
