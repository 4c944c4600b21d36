use alloc::vec::Vec;

use super::LabelEntry;

/// How many labels of `label_height` fit into `available_height`.
pub fn visible_capacity(available_height: f32, label_height: f32) -> usize {
    if !(available_height > 0.0 && label_height > 0.0) {
        return 0;
    }
    // Truncation is `floor` for non-negative values.
    (available_height / label_height) as usize
}

/// Smallest stride `k >= 2` such that keeping every `k`-th of `count` labels keeps at most
/// `budget` of them.
///
/// `budget` must be at least 1.
pub fn condensed_stride(count: usize, budget: usize) -> usize {
    debug_assert!(budget > 0, "condensed_stride: budget must be positive");
    let budget = budget.max(1);
    let mut stride = 2usize;
    while count.div_ceil(stride) > budget {
        stride += 1;
    }
    stride
}

/// Fits `labels` into a strip that holds `capacity` labels.
///
/// When everything fits the labels are returned unchanged. Otherwise every `k`-th label is kept
/// (see [`condensed_stride`]) with the budget set to half the capacity, the last kept label is
/// replaced by the last original one, and an elision marker is placed between each pair of kept
/// labels. The result always ends with the last label, and starts with the first one whenever
/// more than one label is kept.
pub fn condense(labels: &[LabelEntry], capacity: usize) -> Vec<LabelEntry> {
    if labels.len() <= capacity {
        return labels.to_vec();
    }

    // round(capacity / 2) for non-negative integers.
    let budget = capacity.div_ceil(2);
    if budget == 0 {
        swarn!(
            labels = labels.len(),
            "condense: index strip has no room for a single label"
        );
        return Vec::new();
    }

    let stride = condensed_stride(labels.len(), budget);
    let mut kept: Vec<&LabelEntry> = labels.iter().step_by(stride).collect();
    if let (Some(slot), Some(last)) = (kept.last_mut(), labels.last()) {
        *slot = last;
    }
    strace!(
        labels = labels.len(),
        capacity,
        stride,
        kept = kept.len(),
        "condense"
    );

    let mut out = Vec::with_capacity(kept.len() * 2 - 1);
    for (i, entry) in kept.into_iter().enumerate() {
        if i > 0 {
            out.push(LabelEntry::elision());
        }
        out.push(entry.clone());
    }
    out
}
