use alloc::sync::Arc;

use virtualizer::{IndexEmitter, Range, RangeExtractor};

/// The sticky position pinned while `first_visible` is the first visible index: the last sticky
/// position at or before it.
///
/// `sticky` must be sorted ascending.
pub fn active_sticky(sticky: &[usize], first_visible: usize) -> Option<usize> {
    let after = sticky.partition_point(|&p| p <= first_visible);
    after.checked_sub(1).map(|i| sticky[i])
}

/// A range extractor that keeps the active sticky header rendered ahead of the overscanned
/// range.
///
/// The header of the section under the viewport's top edge is emitted even when it scrolled
/// out, so the UI can pin it. Indexes are emitted in ascending order as the extractor contract
/// requires.
pub fn sticky_range_extractor(sticky: Arc<[usize]>) -> RangeExtractor {
    Arc::new(move |r: Range, emit: &mut dyn FnMut(usize)| {
        let mut e = IndexEmitter::new(r, emit);
        let overscanned_start = r.start_index.saturating_sub(r.overscan);
        if let Some(pinned) = active_sticky(&sticky, r.start_index) {
            if pinned < overscanned_start {
                e.emit_pinned(pinned);
            }
        }
        e.emit_overscanned();
    })
}
