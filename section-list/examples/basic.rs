use section_list::{
    EntryContent, FlatEntry, ItemInfo, ItemLayout, Section, SectionList, SectionListOptions,
    SeparatorInfo,
};

type Letter = &'static str;
type Contact = &'static str;

fn main() {
    // Example: flatten a contact list and render it as plain text lines.
    let sections = vec![
        Section::new("A", ["Ada", "Alan"]),
        Section::new("B", ["Barbara"]),
        Section::new("C", []),
        Section::new("D", ["Dennis", "Donald"]),
    ];

    let options = SectionListOptions::new()
        .with_num_columns(2)
        .with_render_item(Some(|info: ItemInfo<'_, Letter, Contact>| {
            format!("  {}. {}", info.item_index + 1, info.item)
        }))
        .with_render_section_header(Some(|section: &Section<Letter, Contact>| {
            Some(format!("[{}]", section.label))
        }))
        .with_render_section_footer(Some(|section: &Section<Letter, Contact>| {
            Some(format!("  ({} contacts)", section.len()))
        }))
        .with_item_separator(Some(|_: SeparatorInfo<'_, Letter, Contact>| {
            String::from("  ---")
        }))
        .with_override_item_layout(Some(
            |layout: &mut ItemLayout, entry: FlatEntry<'_, Letter, Contact>, _: usize, _: u32| {
                // Rows try to span everything; the list forces them back to one column.
                if !entry.is_header() {
                    layout.span = Some(99);
                }
            },
        ));

    let list = SectionList::new(sections, options);
    println!("entries={} sticky={:?}", list.len(), list.sticky_positions());

    for position in 0..list.len() {
        let Some(rendered) = list.render(position) else {
            continue;
        };
        let span = list.item_layout(position, 2).and_then(|l| l.span);
        if let Some(sep) = rendered.separator_before() {
            println!("{sep}");
        }
        match &rendered.content {
            EntryContent::Header(Some(text)) => println!("{text} span={span:?}"),
            EntryContent::Header(None) => {}
            EntryContent::Row(cell) => {
                if let Some(text) = &cell.child {
                    println!("{text} span={span:?} direction={:?}", cell.direction);
                }
            }
        }
        if let Some(footer) = &rendered.footer {
            println!("{footer}");
        }
        if let Some(sep) = rendered.separator_after() {
            println!("{sep}");
        }
    }
}
