use crate::EntrySlot;

/// Which separator renderer a junction uses.
///
/// A junction whose leading entry is a header takes the section separator; every other junction
/// takes the item separator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeparatorKind {
    Section,
    Item,
}

/// Where a separator is drawn relative to the entry that owns the junction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeparatorPlacement {
    Before,
    After,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeparatorOptions {
    /// Drops any separator whose leading or trailing entry is a sticky position, so no seam shows
    /// right under a pinned header.
    pub suppress_around_sticky: bool,
}

/// The junction between the entries at `index` and `index + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Junction {
    pub index: usize,
    pub kind: SeparatorKind,
    pub placement: SeparatorPlacement,
}

/// Decides whether a separator follows the entry at `index`.
///
/// `sticky` must be sorted ascending. Inverted lists draw the separator before the entry so it
/// stays visually below it.
pub fn junction_after(
    slots: &[EntrySlot],
    sticky: &[usize],
    index: usize,
    inverted: bool,
    options: SeparatorOptions,
) -> Option<Junction> {
    let leading = slots.get(index)?;
    let next = index.checked_add(1)?;
    if next >= slots.len() {
        return None;
    }

    if options.suppress_around_sticky
        && (sticky.binary_search(&index).is_ok() || sticky.binary_search(&next).is_ok())
    {
        return None;
    }

    let kind = if leading.is_header() {
        SeparatorKind::Section
    } else {
        SeparatorKind::Item
    };
    let placement = if inverted {
        SeparatorPlacement::Before
    } else {
        SeparatorPlacement::After
    };

    Some(Junction {
        index,
        kind,
        placement,
    })
}
