use alloc::sync::Arc;

use section_list::{EntryKey, ItemType, SectionList};
use virtualizer::VirtualizerOptions;

use crate::sticky_range_extractor;

/// Estimated main-axis size of an entry, by item type.
pub type EstimateSize = Arc<dyn Fn(ItemType) -> u32 + Send + Sync>;

/// Builds virtualizer options for the current flattened sequence of `list`.
///
/// Keys come from [`SectionList::key_for`], so measurements follow entries across section
/// changes. When sticky headers are enabled, a [`sticky_range_extractor`] keeps the active
/// header in the rendered range.
pub fn virtualizer_options<L, T, E>(
    list: &SectionList<L, T, E>,
    estimate_size: EstimateSize,
) -> VirtualizerOptions<EntryKey> {
    let types: Arc<[ItemType]> = list
        .flat_index()
        .slots()
        .iter()
        .map(|slot| slot.item_type())
        .collect();
    let keys: Arc<[EntryKey]> = (0..list.len()).filter_map(|i| list.key_for(i)).collect();
    debug_assert_eq!(keys.len(), list.len());

    let mut options = VirtualizerOptions::new_with_key(
        list.len(),
        move |i| estimate_size(types[i]),
        move |i| keys[i].clone(),
    );
    if !list.sticky_positions().is_empty() {
        options.range_extractor = Some(sticky_range_extractor(Arc::from(
            list.sticky_positions(),
        )));
    }
    options
}
