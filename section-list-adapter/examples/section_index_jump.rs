use section_list::{IndexBarStyle, Section, SectionIndexOptions, SectionList, SectionListOptions};
use section_list_adapter::SectionListController;

fn main() {
    // Example: jump through a contact list with the section index bar, then prepend a section
    // without losing the scroll position.
    let names = [
        "Ada", "Alan", "Barbara", "Brian", "Claude", "Dennis", "Donald", "Edsger", "Frances",
        "Grace", "Guido", "Hedy", "Ivan", "John", "Ken", "Linus", "Margaret", "Niklaus",
    ];
    let sections = group_by_initial(&names);

    let index = SectionIndexOptions::from_labels()
        .with_style(IndexBarStyle::default().with_font_scale(1.2))
        .with_on_section_index_press(Some(|section: usize| {
            println!("  section {section} pressed");
        }));
    let options: SectionListOptions<String, &'static str, ()> = SectionListOptions::new()
        .with_section_index(Some(index))
        .with_key_extractor(Some(|entry: section_list::FlatEntry<'_, String, &'static str>, _| {
            match entry.item() {
                Some(name) => format!("contact:{name}"),
                None => format!("header:{}", entry.section().label),
            }
        }));

    let mut c = SectionListController::new(SectionList::new(sections, options), |_| 1);
    c.on_viewport_size(6);
    c.on_index_container_layout(120.0);
    c.on_index_strip_layout(20.0, 120.0);

    if let Some(index) = c.section_index() {
        println!("index labels={:?}", index.formatted_labels());
    }

    for (step, y) in [28.0, 60.0, 96.0, 132.0].into_iter().enumerate() {
        let press = if step == 0 {
            c.on_index_pointer_down(y)
        } else {
            c.on_index_pointer_move(y)
        };
        if let Some(press) = press {
            println!(
                "y={y} label={:?} offset={}",
                press.entry.label,
                c.virtualizer().scroll_offset()
            );
        }
    }
    c.on_index_pointer_up();

    let before = c.virtualizer().scroll_offset();
    let mut more = vec![Section::new(String::from("#"), ["0xCAFE", "42"])];
    more.extend(group_by_initial(&names));
    let anchored = c.set_sections(more);
    println!(
        "prepend: anchored={anchored} offset {before} -> {}",
        c.virtualizer().scroll_offset()
    );
}

fn group_by_initial(names: &[&'static str]) -> Vec<Section<String, &'static str>> {
    let mut sections: Vec<Section<String, &'static str>> = Vec::new();
    for &name in names {
        let initial = name.chars().next().map(String::from).unwrap_or_default();
        match sections.last_mut() {
            Some(section) if section.label == initial => section.items.push(name),
            _ => sections.push(Section::new(initial, [name])),
        }
    }
    sections
}
