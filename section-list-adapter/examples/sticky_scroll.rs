use section_list::{EntryContent, ItemInfo, ItemType, Section, SectionList, SectionListOptions};
use section_list_adapter::SectionListController;

fn main() {
    // Example: scroll a long sectioned list and keep the current header pinned.
    let sections: Vec<Section<String, u32>> = (0..8u32)
        .map(|s| Section::new(format!("Group {s}"), (0..15).map(move |i| s * 100 + i)))
        .collect();

    let options = SectionListOptions::new()
        .with_render_item(Some(|info: ItemInfo<'_, String, u32>| format!("row {}", info.item)))
        .with_render_section_header(Some(|section: &Section<String, u32>| {
            Some(section.label.clone())
        }));

    let list = SectionList::new(sections, options);
    let mut c = SectionListController::new(list, |t| match t {
        ItemType::SectionHeader => 2,
        ItemType::Row => 1,
    });
    c.on_viewport_size(8);

    for (now_ms, offset) in [(0u64, 0u64), (16, 25), (32, 60), (48, 90)] {
        c.on_scroll(offset, now_ms);
        println!(
            "offset={offset} active_section={:?} pinned={:?}",
            c.active_section(),
            c.pinned_header()
        );
        for (item, rendered) in c.render_visible() {
            let text = match rendered.content {
                EntryContent::Header(label) => format!("== {} ==", label.unwrap_or_default()),
                EntryContent::Row(cell) => cell.child.unwrap_or_default(),
            };
            println!("  [{:>3}] start={:>3} {text}", item.index, item.start);
        }
        c.tick(now_ms + 200);
    }
}
