use section_list::{IndexOptions, LabelEntry, SectionIndex};

fn main() {
    // Example: a 26-letter index bar squeezed into a short strip.
    let labels: Vec<LabelEntry> = (b'A'..=b'Z')
        .enumerate()
        .map(|(section, c)| LabelEntry::new(String::from(char::from(c)), section * 11))
        .collect();

    let mut index = SectionIndex::with_labels(
        IndexOptions::new().with_on_press_index(Some(|entry: &LabelEntry, ordinal: usize| {
            println!("  pressed #{ordinal} -> {:?}", entry.target_position);
        })),
        labels,
    );

    // The host reports the area available to labels, then the strip's page position.
    let container_height = 160.0;
    index.on_visible_area_layout(index.style().visible_area(container_height));
    index.on_strip_layout(40.0, container_height);

    println!(
        "capacity={:?} label_height={} strip_width={}",
        index.visible_capacity(),
        index.label_height(),
        index.strip_width()
    );
    println!("displayed={:?}", index.formatted_labels());

    // Drag from the top of the strip to the bottom.
    let geometry = index.geometry().expect("strip is laid out");
    let steps = 12;
    index.pointer_down(geometry.origin);
    for step in 1..=steps {
        let y = geometry.origin + geometry.height * step as f32 / steps as f32;
        index.pointer_move(y);
    }
    index.pointer_up();
}
