use pagecraft_engine::{BlockId, BlockInstance, Document, ZoneKey, props};

/// A page of `sections` grids, each with `depth` levels of nested grids and a
/// text block in every populated column.
#[allow(dead_code)]
pub fn generate_nested_grids(sections: usize, depth: usize) -> Document {
    let mut doc = Document::empty();
    for section in 0..sections {
        let id = format!("g{section}");
        doc.content.push(BlockInstance::new(
            id.as_str(),
            "Grid",
            props! { "columns" => 3u64 },
        ));
        fill_grid(&mut doc, &id, depth);
    }
    doc
}

fn fill_grid(doc: &mut Document, grid_id: &str, depth: usize) {
    let owner = BlockId::new(grid_id);
    for column in 0..3u64 {
        let key = ZoneKey::new(&owner, &format!("column-{column}"));
        let text_id = format!("{grid_id}-t{column}");
        let mut children = vec![BlockInstance::new(
            text_id.as_str(),
            "Text",
            props! { "content" => text_id.as_str() },
        )];
        if depth > 0 && column == 0 {
            let child = format!("{grid_id}-g");
            children.push(BlockInstance::new(
                child.as_str(),
                "Grid",
                props! { "columns" => 3u64 },
            ));
            fill_grid(doc, &child, depth - 1);
        }
        doc.zones.insert(key, children);
    }
}
