use crate::index::*;
use crate::*;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        start + (self.next_u64() as usize % (end_exclusive - start))
    }
}

fn numbered_sections(counts: &[usize]) -> Vec<Section<String, u32>> {
    let mut next = 0u32;
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let items: Vec<u32> = (0..count as u32).map(|k| next + k).collect();
            next += count as u32;
            Section::new(format!("S{i}"), items)
        })
        .collect()
}

fn ab_sections() -> Vec<Section<&'static str, u32>> {
    vec![Section::new("A", [1, 2]), Section::new("B", [3])]
}

fn rendering_options() -> SectionListOptions<&'static str, u32, String> {
    SectionListOptions::new()
        .with_render_item(Some(|info: ItemInfo<'_, &'static str, u32>| {
            format!("R:{}", info.item)
        }))
        .with_render_section_header(Some(|s: &Section<&'static str, u32>| {
            Some(format!("H:{}", s.label))
        }))
        .with_render_section_footer(Some(|s: &Section<&'static str, u32>| {
            Some(format!("F:{}", s.label))
        }))
        .with_section_separator(Some(|info: SeparatorInfo<'_, &'static str, u32>| {
            format!("section:{}", info.index)
        }))
        .with_item_separator(Some(|info: SeparatorInfo<'_, &'static str, u32>| {
            format!("item:{}", info.index)
        }))
}

struct RecordingScroll(Vec<usize>);

impl ScrollToPosition for RecordingScroll {
    fn scroll_to_position(&mut self, position: usize) {
        self.0.push(position);
    }
}

fn labels(count: usize) -> Vec<LabelEntry> {
    (0..count)
        .map(|i| LabelEntry::new(format!("L{i}"), i * 3))
        .collect()
}

/// An index bar whose strip starts at page y=100 and is 216 tall: usable range is 108..=308.
fn laid_out_index(count: usize, visible_area: f32) -> SectionIndex {
    let mut index = SectionIndex::with_labels(IndexOptions::new(), labels(count));
    index.on_visible_area_layout(visible_area);
    index.on_strip_layout(100.0, 216.0);
    index
}

#[test]
fn flattens_two_sections_with_sticky_headers() {
    let list: SectionList<&str, u32, ()> =
        SectionList::new(ab_sections(), SectionListOptions::new());

    let got: Vec<(ItemType, Option<u32>)> = list
        .entries()
        .map(|e| (e.item_type(), e.item().copied()))
        .collect();
    assert_eq!(
        got,
        vec![
            (ItemType::SectionHeader, None),
            (ItemType::Row, Some(1)),
            (ItemType::Row, Some(2)),
            (ItemType::SectionHeader, None),
            (ItemType::Row, Some(3)),
        ]
    );
    assert_eq!(list.sticky_positions(), &[0, 3]);
    assert_eq!(list.item_type(3).map(ItemType::as_str), Some("sectionHeader"));
    assert_eq!(list.item_type(4).map(ItemType::as_str), Some("row"));
    assert_eq!(list.item_type(5), None);
}

#[test]
fn property_flattening_order_matches_cumulative_offsets() {
    let mut rng = Lcg(7);
    for _case in 0..200 {
        let n = rng.gen_range_usize(0, 12);
        let counts: Vec<usize> = (0..n).map(|_| rng.gen_range_usize(0, 6)).collect();
        let sections = numbered_sections(&counts);
        let flat = FlatIndex::build(&sections);

        assert_eq!(flat.len(), n + counts.iter().sum::<usize>());
        assert_eq!(flat.section_count(), n);

        let mut offset = 0usize;
        for (i, &count) in counts.iter().enumerate() {
            assert_eq!(flat.header_position(i), Some(offset));
            assert!(matches!(
                flat.resolve(&sections, offset),
                Some(FlatEntry::SectionHeader { section_index, .. }) if section_index == i
            ));
            for k in 0..count {
                let entry = flat.resolve(&sections, offset + 1 + k).unwrap();
                assert_eq!(entry.item(), Some(&sections[i].items[k]));
                assert_eq!(flat.section_of(offset + 1 + k), Some(i));
            }
            assert_eq!(flat.last_position_of(i), Some(offset + count));
            offset += count + 1;
        }
        assert_eq!(offset, flat.len());
    }
}

#[test]
fn empty_sections_keep_their_header() {
    let sections = numbered_sections(&[0, 2, 0]);
    let list: SectionList<String, u32, ()> = SectionList::new(sections, SectionListOptions::new());

    assert_eq!(list.len(), 5);
    assert_eq!(list.sticky_positions(), &[0, 1, 4]);
    assert_eq!(list.flat_index().last_position_of(0), Some(0));
    assert_eq!(list.flat_index().last_position_of(2), Some(4));
    assert!(list.entry(4).unwrap().is_header());
}

#[test]
fn no_sections_is_empty_everywhere() {
    let list: SectionList<String, u32, String> = SectionList::new(
        Vec::new(),
        SectionListOptions::new().with_section_index(Some(SectionIndexOptions::from_labels())),
    );

    assert!(list.is_empty());
    assert!(list.sticky_positions().is_empty());
    assert!(list.render(0).is_none());
    assert!(list.separator_at(0).is_none());
    assert!(list.section_index_labels().is_empty());
    assert!(list.item_layout(0, 3).is_none());
}

#[test]
fn disabling_sticky_headers_empties_the_sticky_set() {
    let mut list: SectionList<&str, u32, ()> = SectionList::new(
        ab_sections(),
        SectionListOptions::new().with_sticky_section_headers_enabled(false),
    );
    assert!(list.sticky_positions().is_empty());
    assert!(!list.is_sticky(0));

    list.set_sticky_section_headers_enabled(true);
    assert_eq!(list.sticky_positions(), &[0, 3]);
    assert!(list.is_sticky(3));
}

#[test]
fn set_sections_rebuilds_positions() {
    let mut list: SectionList<&str, u32, ()> =
        SectionList::new(ab_sections(), SectionListOptions::new());
    list.set_sections(vec![
        Section::new("A", []),
        Section::new("B", [1, 2, 3]),
        Section::new("C", [4]),
    ]);

    assert_eq!(list.len(), 7);
    assert_eq!(list.sticky_positions(), &[0, 1, 5]);
    assert_eq!(list.entry(6).and_then(|e| e.item().copied()), Some(4));
}

#[test]
fn header_and_row_spans_override_the_caller() {
    let list: SectionList<&str, u32, ()> = SectionList::new(
        ab_sections(),
        SectionListOptions::new()
            .with_num_columns(3)
            .with_override_item_layout(Some(
                |layout: &mut ItemLayout,
                 _entry: FlatEntry<'_, &'static str, u32>,
                 _position: usize,
                 _max_columns: u32| {
                    layout.span = Some(7);
                    layout.size = Some(42);
                },
            )),
    );

    for position in 0..list.len() {
        let layout = list.item_layout(position, 3).unwrap();
        let expected = if list.entry(position).unwrap().is_header() { 3 } else { 1 };
        assert_eq!(layout.span, Some(expected));
        assert_eq!(layout.size, Some(42));
    }
}

#[test]
fn separator_kinds_follow_the_leading_entry() {
    let list: SectionList<&str, u32, ()> = SectionList::new(
        ab_sections(),
        SectionListOptions::new().with_sticky_section_headers_enabled(true),
    );

    let kinds: Vec<Option<SeparatorKind>> = (0..list.len())
        .map(|i| list.separator_at(i).map(|j| j.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            Some(SeparatorKind::Section),
            Some(SeparatorKind::Item),
            Some(SeparatorKind::Item),
            Some(SeparatorKind::Section),
            None,
        ]
    );
    assert_eq!(
        list.separator_at(1).map(|j| j.placement),
        Some(SeparatorPlacement::After)
    );
}

#[test]
fn property_no_separator_after_last_entry() {
    let mut rng = Lcg(11);
    for _case in 0..100 {
        let n = rng.gen_range_usize(1, 8);
        let counts: Vec<usize> = (0..n).map(|_| rng.gen_range_usize(0, 4)).collect();
        let list: SectionList<String, u32, ()> =
            SectionList::new(numbered_sections(&counts), SectionListOptions::new());
        assert!(list.separator_at(list.len() - 1).is_none());
        assert!(list.separator_at(list.len()).is_none());
        for i in 0..list.len() - 1 {
            assert!(list.separator_at(i).is_some());
        }
    }
}

#[test]
fn inverted_lists_place_separators_before_the_entry() {
    let list = SectionList::new(ab_sections(), rendering_options().with_inverted(true));

    let junction = list.separator_at(0).unwrap();
    assert_eq!(junction.placement, SeparatorPlacement::Before);

    let rendered = list.render(1).unwrap();
    assert_eq!(rendered.separator_before(), Some(&"item:1".to_string()));
    assert_eq!(rendered.separator_after(), None);
}

#[test]
fn sticky_adjacent_separators_can_be_suppressed() {
    let strict = SeparatorOptions {
        suppress_around_sticky: true,
    };
    let list: SectionList<&str, u32, ()> = SectionList::new(
        ab_sections(),
        SectionListOptions::new().with_separators(strict),
    );
    let present: Vec<bool> = (0..list.len())
        .map(|i| list.separator_at(i).is_some())
        .collect();
    assert_eq!(present, vec![false, true, false, false, false]);

    let relaxed: SectionList<&str, u32, ()> = SectionList::new(
        ab_sections(),
        SectionListOptions::new()
            .with_separators(strict)
            .with_sticky_section_headers_enabled(false),
    );
    let present: Vec<bool> = (0..relaxed.len())
        .map(|i| relaxed.separator_at(i).is_some())
        .collect();
    assert_eq!(present, vec![true, true, true, true, false]);
}

#[test]
fn render_dispatches_by_entry_type() {
    let list = SectionList::new(ab_sections(), rendering_options());

    let header = list.render(0).unwrap();
    assert_eq!(header.item_type, ItemType::SectionHeader);
    assert_eq!(header.content, EntryContent::Header(Some("H:A".to_string())));
    assert_eq!(header.separator_after(), Some(&"section:0".to_string()));
    assert_eq!(header.footer, None);

    let last_row_of_a = list.render(2).unwrap();
    assert_eq!(
        last_row_of_a.content,
        EntryContent::Row(RowCell {
            direction: FlexDirection::Column,
            child: Some("R:2".to_string()),
        })
    );
    assert_eq!(last_row_of_a.footer, Some("F:A".to_string()));
    assert_eq!(last_row_of_a.separator_after(), Some(&"item:2".to_string()));

    let last = list.render(4).unwrap();
    assert_eq!(last.footer, Some("F:B".to_string()));
    assert!(last.separator.is_none());
}

#[test]
fn row_container_direction_depends_on_columns_and_orientation() {
    let grid = SectionList::new(ab_sections(), rendering_options().with_num_columns(3));
    let horizontal_grid = SectionList::new(
        ab_sections(),
        rendering_options().with_num_columns(3).with_horizontal(true),
    );

    let direction = |list: &SectionList<&str, u32, String>| match list.render(1).unwrap().content {
        EntryContent::Row(cell) => cell.direction,
        EntryContent::Header(_) => unreachable!(),
    };
    assert_eq!(direction(&grid), FlexDirection::Row);
    assert_eq!(direction(&horizontal_grid), FlexDirection::Column);
}

#[test]
fn missing_renderers_render_nothing() {
    let list: SectionList<&str, u32, String> = SectionList::new(
        vec![Section::new("A", []), Section::new("B", [1])],
        SectionListOptions::new(),
    );

    let header = list.render(0).unwrap();
    assert_eq!(header.content, EntryContent::Header(None));
    assert_eq!(header.footer, None);
    assert!(header.separator.is_none());

    let row = list.render(2).unwrap();
    assert_eq!(
        row.content,
        EntryContent::Row(RowCell {
            direction: FlexDirection::Column,
            child: None,
        })
    );
}

#[test]
fn empty_section_footer_follows_its_header() {
    let list = SectionList::new(
        vec![Section::new("A", []), Section::new("B", [1])],
        rendering_options(),
    );
    assert_eq!(list.render(0).unwrap().footer, Some("F:A".to_string()));
    assert_eq!(list.render(1).unwrap().footer, None);
}

#[test]
fn separator_renderers_receive_both_neighbours() {
    let list: SectionList<&str, u32, String> = SectionList::new(
        ab_sections(),
        SectionListOptions::new().with_item_separator(Some(
            |info: SeparatorInfo<'_, &'static str, u32>| {
                format!(
                    "{}->{}",
                    info.leading.item_type().as_str(),
                    info.trailing.item_type().as_str()
                )
            },
        )),
    );

    assert_eq!(list.render(0).unwrap().separator, None);
    assert_eq!(
        list.render(2).unwrap().separator_after(),
        Some(&"row->sectionHeader".to_string())
    );
}

#[test]
fn keys_default_to_slots_and_honour_the_extractor() {
    let list: SectionList<&str, u32, ()> =
        SectionList::new(ab_sections(), SectionListOptions::new());
    assert_eq!(list.key_for(0), Some(EntryKey::Header(0)));
    assert_eq!(list.key_for(2), Some(EntryKey::Row(0, 1)));

    let keyed: SectionList<&str, u32, ()> = SectionList::new(
        ab_sections(),
        SectionListOptions::new().with_key_extractor(Some(
            |entry: FlatEntry<'_, &'static str, u32>, _position: usize| match entry.item() {
                Some(item) => format!("item-{item}"),
                None => format!("section-{}", entry.section().label),
            },
        )),
    );
    assert_eq!(keyed.key_for(3), Some(EntryKey::Custom("section-B".to_string())));
    assert_eq!(keyed.key_for(4), Some(EntryKey::Custom("item-3".to_string())));
    assert_eq!(keyed.key_for(5), None);
}

#[test]
fn section_index_labels_target_headers() {
    let list: SectionList<&str, u32, ()> = SectionList::new(
        ab_sections(),
        SectionListOptions::new().with_section_index(Some(SectionIndexOptions::from_labels())),
    );
    assert_eq!(
        list.section_index_labels(),
        vec![LabelEntry::new("A", 0), LabelEntry::new("B", 3)]
    );

    let without: SectionList<&str, u32, ()> =
        SectionList::new(ab_sections(), SectionListOptions::new());
    assert!(!without.section_index_enabled());
    assert!(without.section_index_labels().is_empty());
}

#[test]
fn unresolved_label_keys_fall_back_to_empty_labels() {
    let list: SectionList<&str, u32, ()> = SectionList::new(
        ab_sections(),
        SectionListOptions::new().with_section_index(Some(SectionIndexOptions::new(
            |s: &Section<&'static str, u32>| (s.label == "B").then(|| "Bee".to_string()),
        ))),
    );
    assert_eq!(
        list.section_index_labels(),
        vec![LabelEntry::new("", 0), LabelEntry::new("Bee", 3)]
    );
    assert_eq!(first_char_label(&LabelEntry::new("", 0)), "");
}

#[test]
fn press_index_scrolls_and_reports_the_section() {
    let pressed = Arc::new(AtomicUsize::new(usize::MAX));
    let list: SectionList<&str, u32, ()> = SectionList::new(
        ab_sections(),
        SectionListOptions::new().with_section_index(Some(
            SectionIndexOptions::from_labels().with_on_section_index_press(Some({
                let pressed = Arc::clone(&pressed);
                move |section: usize| pressed.store(section, Ordering::Relaxed)
            })),
        )),
    );

    let mut scroll = RecordingScroll(Vec::new());
    let press = IndexPress {
        entry: LabelEntry::new("B", 3),
        ordinal: 1,
    };
    assert!(list.press_index(&press, &mut scroll));
    assert_eq!(scroll.0, vec![3]);
    assert_eq!(pressed.load(Ordering::Relaxed), 1);

    let elision = IndexPress {
        entry: LabelEntry::elision(),
        ordinal: 1,
    };
    assert!(!list.press_index(&elision, &mut scroll));

    let stale = IndexPress {
        entry: LabelEntry::new("Z", 99),
        ordinal: 0,
    };
    assert!(!list.press_index(&stale, &mut scroll));
    assert_eq!(scroll.0, vec![3]);
}

#[test]
fn condense_keeps_everything_that_fits() {
    let input = labels(10);
    assert_eq!(condense(&input, 10), input);
    assert_eq!(condense(&input, 25), input);
    assert!(condense(&[], 0).is_empty());
}

#[test]
fn condense_thirty_labels_into_ten_slots() {
    let input = labels(30);
    assert_eq!(condensed_stride(30, 5), 6);

    let out = condense(&input, 10);
    assert_eq!(out.len(), 9);
    let real: Vec<&str> = out
        .iter()
        .filter(|l| !l.is_elision())
        .map(|l| l.label.as_str())
        .collect();
    assert_eq!(real, vec!["L0", "L6", "L12", "L18", "L29"]);
    for (i, entry) in out.iter().enumerate() {
        assert_eq!(entry.is_elision(), i % 2 == 1);
    }
    assert_eq!(out[1].label, ELISION_MARKER);
}

#[test]
fn property_condensation_bounds() {
    for count in 1..80usize {
        for capacity in 3..40usize {
            let input = labels(count);
            let out = condense(&input, capacity);
            if count <= capacity {
                assert_eq!(out, input);
                continue;
            }

            let real: Vec<&LabelEntry> = out.iter().filter(|l| !l.is_elision()).collect();
            assert!(real.len() <= capacity.div_ceil(2), "count={count} capacity={capacity}");
            assert_eq!(real.first().copied(), input.first());
            assert_eq!(real.last().copied(), input.last());
            assert_eq!(out.len(), real.len() * 2 - 1);
            assert!(!out.last().unwrap().is_elision());
        }
    }
}

#[test]
fn condense_with_no_room_shows_nothing() {
    assert!(condense(&labels(4), 0).is_empty());
    assert_eq!(condense(&labels(4), 1), vec![LabelEntry::new("L3", 9)]);
}

#[test]
fn visible_capacity_floors() {
    assert_eq!(visible_capacity(95.0, 10.0), 9);
    assert_eq!(visible_capacity(100.0, 10.0), 10);
    assert_eq!(visible_capacity(0.0, 10.0), 0);
    assert_eq!(visible_capacity(100.0, 0.0), 0);
}

#[test]
fn index_bar_metrics_follow_font_scale() {
    let style = IndexBarStyle::default();
    assert_eq!(style.label_height(), 10.0);
    assert_eq!(style.strip_width(), 20.0);

    let scaled = style.with_font_scale(1.25);
    assert_eq!(scaled.label_height(), 13.0);
    assert_eq!(scaled.strip_width(), 23.0);

    assert_eq!(style.text_color().a, 0xff);
    assert_eq!(style.with_dark(true).text_color().a, 0xee);
}

#[test]
fn strip_geometry_excludes_the_inset() {
    let g = StripGeometry::from_layout(100.0, 216.0);
    assert_eq!(g.origin, 108.0);
    assert_eq!(g.height, 200.0);
    assert_eq!(g.fraction(108.0), Some(0.0));
    assert_eq!(g.fraction(308.0), Some(1.0));
    assert_eq!(g.fraction(208.0), Some(0.5));
    assert_eq!(g.fraction(107.0), None);
    assert_eq!(g.fraction(309.0), None);

    assert_eq!(StripGeometry::from_layout(0.0, 10.0).fraction(8.0), None);
}

#[test]
fn pointer_at_strip_ends_resolves_to_first_and_last() {
    let mut index = laid_out_index(5, 100.0);
    assert_eq!(index.displayed().len(), 5);

    let first = index.pointer_down(108.0).unwrap();
    assert_eq!(first.ordinal, 0);
    assert_eq!(first.entry.target_position, Some(0));

    let last = index.pointer_move(308.0).unwrap();
    assert_eq!(last.ordinal, 4);
    assert_eq!(last.entry.target_position, Some(12));
}

#[test]
fn pointer_outside_the_strip_is_ignored() {
    let mut index = laid_out_index(5, 100.0);

    assert_eq!(index.pointer_down(50.0), None);
    assert_eq!(index.gesture(), GestureState::Dragging { last_index: None });
    assert_eq!(index.pointer_move(400.0), None);
    assert_eq!(index.gesture().last_index(), None);

    assert_eq!(index.pointer_move(108.0).map(|p| p.ordinal), Some(0));
}

#[test]
fn dragging_over_the_same_label_dispatches_once() {
    let mut index = laid_out_index(5, 100.0);

    assert!(index.pointer_down(108.0).is_some());
    assert_eq!(index.pointer_move(110.0), None);
    assert_eq!(index.pointer_move(308.0).map(|p| p.ordinal), Some(4));
    assert_eq!(index.pointer_move(306.0), None);
    assert_eq!(index.pointer_move(108.0).map(|p| p.ordinal), Some(0));
}

#[test]
fn releasing_allows_the_same_label_again() {
    let mut index = laid_out_index(5, 100.0);

    assert!(index.pointer_down(108.0).is_some());
    index.pointer_up();
    assert_eq!(index.gesture(), GestureState::Idle);
    assert_eq!(index.pointer_move(108.0), None);
    assert_eq!(index.pointer_down(108.0).map(|p| p.ordinal), Some(0));
}

#[test]
fn property_drag_down_is_monotonic_without_repeats() {
    for count in [1usize, 2, 5, 9, 30, 57] {
        let mut index = laid_out_index(count, 100.0);
        let mut ordinals = Vec::new();
        let mut y = 100.0f32;
        let mut first = true;
        while y <= 320.0 {
            let press = if first {
                first = false;
                index.pointer_down(y)
            } else {
                index.pointer_move(y)
            };
            if let Some(press) = press {
                assert!(!press.entry.is_elision());
                ordinals.push(press.ordinal);
            }
            y += 0.5;
        }

        assert_eq!(ordinals.first(), Some(&0), "count={count}");
        assert_eq!(ordinals.last(), Some(&(index.displayed().len() - 1)));
        for w in ordinals.windows(2) {
            assert!(w[0] < w[1], "count={count} ordinals={ordinals:?}");
        }
    }
}

#[test]
fn elision_hits_resolve_to_the_nearest_real_label() {
    let strip = vec![
        LabelEntry::new("A", 0),
        LabelEntry::elision(),
        LabelEntry::new("B", 5),
    ];
    assert_eq!(resolve_index(&strip, 0.8), Some(0));
    assert_eq!(resolve_index(&strip, 1.0), Some(0));
    assert_eq!(resolve_index(&strip, 1.2), Some(2));
    assert_eq!(resolve_index(&strip, 2.0), Some(2));

    assert_eq!(resolve_index(&[LabelEntry::elision()], 0.0), None);
    assert_eq!(resolve_index(&[], 0.0), None);
}

#[test]
fn zero_labels_disable_the_gesture() {
    let mut index = laid_out_index(0, 100.0);
    assert!(index.displayed().is_empty());
    assert_eq!(index.pointer_down(200.0), None);
    assert_eq!(index.gesture(), GestureState::Idle);
}

#[test]
fn single_label_always_resolves_to_it() {
    let mut index = laid_out_index(1, 100.0);
    assert_eq!(index.pointer_down(250.0).map(|p| p.ordinal), Some(0));
}

#[test]
fn nothing_is_displayed_before_the_visible_area_is_measured() {
    let mut index = SectionIndex::with_labels(IndexOptions::new(), labels(5));
    index.on_strip_layout(100.0, 216.0);
    assert_eq!(index.visible_capacity(), None);
    assert!(index.displayed().is_empty());
    assert_eq!(index.pointer_down(150.0), None);

    index.on_visible_area_layout(30.0);
    assert_eq!(index.visible_capacity(), Some(3));
    assert_eq!(index.displayed().len(), 3);
}

#[test]
fn press_callback_and_label_formatting() {
    let last = Arc::new(AtomicUsize::new(usize::MAX));
    let options = IndexOptions::new()
        .with_get_label(Some(|entry: &LabelEntry| entry.label.to_lowercase()))
        .with_on_press_index(Some({
            let last = Arc::clone(&last);
            move |_entry: &LabelEntry, ordinal: usize| last.store(ordinal, Ordering::Relaxed)
        }));
    let mut index = SectionIndex::with_labels(options, labels(3));
    index.on_visible_area_layout(100.0);
    index.on_strip_layout(100.0, 216.0);

    assert_eq!(index.formatted_labels(), vec!["l0", "l1", "l2"]);
    index.pointer_down(308.0);
    assert_eq!(last.load(Ordering::Relaxed), 2);

    let plain = laid_out_index(3, 100.0);
    assert_eq!(plain.formatted_labels(), vec!["L", "L", "L"]);
    assert_eq!(laid_out_index(30, 100.0).formatted_labels()[1], ELISION_MARKER);
}

#[test]
fn new_labels_reset_the_last_dispatched_label() {
    let mut index = laid_out_index(5, 100.0);
    assert!(index.pointer_down(108.0).is_some());

    index.set_labels(labels(6));
    assert_eq!(index.gesture(), GestureState::Dragging { last_index: None });
    assert_eq!(index.pointer_move(108.0).map(|p| p.ordinal), Some(0));
}

#[test]
fn restyling_recomputes_capacity() {
    let mut index = laid_out_index(12, 100.0);
    assert_eq!(index.displayed().len(), 7);

    let options = IndexOptions::new().with_style(IndexBarStyle::default().with_font_size(5.0));
    index.set_options(options);
    assert_eq!(index.visible_capacity(), Some(20));
    assert_eq!(index.displayed(), labels(12).as_slice());
}

#[cfg(feature = "serde")]
#[test]
fn plain_configuration_deserializes() {
    let style: IndexBarStyle =
        serde_json::from_str(r#"{"font_size": 12.0, "dark": true}"#).unwrap();
    assert_eq!(style.font_size, 12.0);
    assert_eq!(style.font_scale, 1.0);
    assert!(style.dark);

    let layout: LayoutContext =
        serde_json::from_str(r#"{"horizontal": false, "inverted": true, "num_columns": 2}"#)
            .unwrap();
    assert_eq!(layout.row_direction(), FlexDirection::Row);

    let entry = LabelEntry::new("A", 4);
    let json = serde_json::to_string(&entry).unwrap();
    assert_eq!(serde_json::from_str::<LabelEntry>(&json).unwrap(), entry);
}
