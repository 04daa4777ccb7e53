use pagecraft_engine::resolve::DEFAULT_MAX_DEPTH;
use pagecraft_engine::{
    BlockId, BlockInstance, Document, PropertyValue, Registry, Renderer, ReportKind, ResolveError,
    ResolvedBlock, Resolver, ValidationMode, ZoneKey, decode, encode, props,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn registry() -> Registry {
    Registry::standard().unwrap()
}

fn ids(blocks: &[ResolvedBlock]) -> Vec<&str> {
    blocks.iter().map(|block| block.id().as_str()).collect()
}

const TWO_COLUMN_GRID: &str = r#"{
    "root": { "props": {} },
    "content": [ { "id": "g1", "type": "Grid", "props": { "columns": 2 } } ],
    "zones": {
        "g1:column-0": [ { "id": "c1", "type": "Text", "props": { "content": "Hi" } } ],
        "g1:column-1": []
    }
}"#;

#[test]
fn grid_zones_resolve_per_column() {
    let registry = registry();
    let doc = decode(TWO_COLUMN_GRID).unwrap();

    let page = Resolver::new(&registry).resolve(&doc).unwrap();
    let grid = page.blocks[0].as_node().unwrap();

    assert_eq!(ids(grid.zone("column-0").unwrap()), vec!["c1"]);
    assert!(grid.zone("column-1").unwrap().is_empty());
    assert!(grid.zone("column-2").unwrap().is_empty());
    assert_eq!(grid.zones.len(), 6);
    assert!(page.reports.is_empty());
}

#[test]
fn grid_page_renders_requested_columns() {
    let registry = registry();
    let doc = decode(TWO_COLUMN_GRID).unwrap();

    let page = Resolver::new(&registry).resolve(&doc).unwrap();
    let html = Renderer::new(&registry).render_page(&page);

    insta::assert_snapshot!(html.as_str(), @r#"<main class="min-h-screen bg-white" data-title="My Page"><section class="bg-transparent py-12"><div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8"><div class="grid grid-cols-1 md:grid-cols-2 gap-6 items-stretch"><div class="min-h-[100px]"><p class="leading-relaxed text-base font-normal text-slate-900 text-left max-w-full">Hi</p></div><div class="min-h-[100px]"></div></div></div></section></main>"#);
}

#[rstest]
#[case::grid(TWO_COLUMN_GRID)]
#[case::unknown_keys(r#"{"content":[{"type":"Text","id":"t","note":"kept"}],"version":3}"#)]
#[case::ids_in_props(r#"{"content":[{"type":"Hero","props":{"id":"hero-1","title":"Hi"}}]}"#)]
#[case::empty(r#"{"content":[]}"#)]
fn decoded_documents_round_trip(#[case] text: &str) {
    let doc = decode(text).unwrap();
    assert_eq!(decode(&encode(&doc).unwrap()).unwrap(), doc);
}

#[test]
fn resolution_is_deterministic() {
    let registry = registry();
    let doc = decode(TWO_COLUMN_GRID).unwrap();
    let resolver = Resolver::new(&registry);

    assert_eq!(resolver.resolve(&doc).unwrap(), resolver.resolve(&doc).unwrap());
}

#[test]
fn empty_props_resolve_to_registry_defaults() {
    let registry = registry();
    for name in registry.type_names() {
        let mut doc = Document::empty();
        doc.content.push(BlockInstance::new("b", name, props! {}));

        let page = Resolver::new(&registry).resolve(&doc).unwrap();

        assert_eq!(
            page.blocks[0].as_node().unwrap().props,
            registry.lookup(name).unwrap().default_props,
            "{name}"
        );
    }
}

#[test]
fn sibling_order_is_preserved() {
    let registry = registry();
    let doc = decode(
        r#"{
            "content": [
                { "type": "Spacer", "id": "a" },
                { "type": "Grid", "id": "b" },
                { "type": "Spacer", "id": "c" }
            ],
            "zones": {
                "b:column-1": [
                    { "type": "Text", "id": "z" },
                    { "type": "Text", "id": "y" },
                    { "type": "Text", "id": "x" }
                ]
            }
        }"#,
    )
    .unwrap();

    let page = Resolver::new(&registry).resolve(&doc).unwrap();

    assert_eq!(ids(&page.blocks), vec!["a", "b", "c"]);
    let grid = page.blocks[1].as_node().unwrap();
    assert_eq!(ids(grid.zone("column-1").unwrap()), vec!["z", "y", "x"]);
}

#[test]
fn unknown_type_does_not_affect_siblings() {
    let registry = registry();
    let doc = decode(
        r#"{
            "content": [
                { "type": "Carousel", "id": "x" },
                { "type": "Text", "id": "y", "props": { "content": "still here" } }
            ],
            "zones": { "x:slides": [ { "type": "Text", "id": "inner" } ] }
        }"#,
    )
    .unwrap();

    let page = Resolver::new(&registry).resolve(&doc).unwrap();
    let html = Renderer::new(&registry).render_blocks(&page.blocks);

    assert!(matches!(
        page.blocks[0],
        ResolvedBlock::Unresolvable { reason: ReportKind::UnknownType, .. }
    ));
    assert!(html.as_str().contains("still here"));
    assert!(!html.as_str().contains("Lorem"));
    // The unknown block's own zone is skipped with it, not reported twice.
    assert_eq!(page.reports.len(), 1);
    assert_eq!(page.reports[0].kind, ReportKind::UnknownType);
}

#[test]
fn self_containing_grid_terminates_with_cycle_report() {
    let registry = registry();
    let doc = decode(
        r#"{
            "content": [ { "type": "Grid", "id": "A" } ],
            "zones": { "A:column-0": [ { "type": "Grid", "id": "A" } ] }
        }"#,
    )
    .unwrap();

    let page = Resolver::new(&registry).resolve(&doc).unwrap();

    assert_eq!(page.reports.len(), 1);
    assert_eq!(page.reports[0].kind, ReportKind::Cycle);
    assert_eq!(page.reports[0].block_id.as_str(), "A");
    let inner = page.blocks[0].as_node().unwrap().zone("column-0").unwrap();
    assert!(matches!(
        inner[0],
        ResolvedBlock::Unresolvable { reason: ReportKind::Cycle, .. }
    ));
}

#[test]
fn undeclared_zone_is_dangling() {
    let registry = registry();
    let doc = decode(
        r#"{
            "content": [ { "type": "Grid", "id": "g1" } ],
            "zones": {
                "g1:column-9": [ { "type": "Text", "id": "t" } ],
                "nobody:column-0": []
            }
        }"#,
    )
    .unwrap();

    let page = Resolver::new(&registry).resolve(&doc).unwrap();

    let dangling: Vec<_> = page
        .reports
        .iter()
        .map(|r| (r.kind, r.zone.clone()))
        .collect();
    assert_eq!(
        dangling,
        vec![
            (ReportKind::DanglingZone, Some(ZoneKey::from("g1:column-9"))),
            (ReportKind::DanglingZone, Some(ZoneKey::from("nobody:column-0"))),
        ]
    );
    assert_eq!(page.reports[0].type_name.as_deref(), Some("Grid"));
    assert_eq!(page.reports[1].type_name, None);
}

#[test]
fn strict_mode_rejects_what_lenient_mode_reports() {
    let registry = registry();
    let doc = decode(r#"{"content":[{"type":"Carousel","id":"x"}]}"#).unwrap();

    let lenient = Resolver::new(&registry).resolve(&doc).unwrap();
    let strict = Resolver::new(&registry)
        .with_mode(ValidationMode::Strict)
        .resolve(&doc);

    assert_eq!(lenient.reports.len(), 1);
    assert_eq!(strict, Err(ResolveError::Rejected(lenient.reports)));
}

#[test]
fn features_array_survives_round_trip_and_renders() {
    let registry = registry();
    let doc = decode(
        r#"{"content":[{"type":"Features","id":"f","props":{
            "variant":"simple",
            "features":[{"icon":"shield","title":"Safe","description":"Very"}]
        }}]}"#,
    )
    .unwrap();

    let page = Resolver::new(&registry).resolve(&doc).unwrap();
    let node = page.blocks[0].as_node().unwrap();
    let html = Renderer::new(&registry).render_blocks(&page.blocks);

    assert_eq!(
        node.props.get("features").and_then(PropertyValue::as_list).map(<[_]>::len),
        Some(1)
    );
    assert!(html.as_str().contains(r#"data-icon="shield""#));
    assert!(html.as_str().contains(">Safe</h3>"));
}

#[test]
fn out_of_range_grid_columns_are_reported() {
    let registry = registry();
    let doc = decode(r#"{"content":[{"id":"g1","type":"Grid","props":{"columns":5}}]}"#).unwrap();

    let page = Resolver::new(&registry).resolve(&doc).unwrap();

    assert_eq!(page.reports.len(), 1);
    assert_eq!(page.reports[0].kind, ReportKind::InvalidProp);
    assert_eq!(page.reports[0].block_id.as_str(), "g1");
    assert_eq!(
        page.reports[0].detail.as_deref(),
        Some("columns: 5 is not one of the allowed options")
    );
    // Lenient mode still renders the grid.
    assert!(page.blocks[0].as_node().is_some());

    let strict = Resolver::new(&registry)
        .with_mode(ValidationMode::Strict)
        .resolve(&doc);
    assert!(matches!(strict, Err(ResolveError::Rejected(_))));
}

fn grid_chain(depth: usize) -> Document {
    let mut doc = Document::empty();
    doc.content.push(BlockInstance::new("g0", "Grid", props! {}));
    for i in 0..depth {
        doc.zones.insert(
            ZoneKey::new(&BlockId::new(format!("g{i}")), "column-0"),
            vec![BlockInstance::new(format!("g{}", i + 1), "Grid", props! {})],
        );
    }
    doc
}

#[rstest]
#[case(2_000)]
#[case(20_000)]
fn deeply_nested_grids_are_cut_off_and_render(#[case] depth: usize) {
    let registry = registry();
    let doc = grid_chain(depth);

    let page = Resolver::new(&registry).resolve(&doc).unwrap();
    let html = Renderer::new(&registry).render_page(&page);

    let cut = format!("g{DEFAULT_MAX_DEPTH}");
    let reports: Vec<_> = page
        .reports
        .iter()
        .map(|r| (r.kind, r.block_id.as_str()))
        .collect();
    assert_eq!(reports, vec![(ReportKind::TooDeep, cut.as_str())]);
    assert_eq!(html.as_str().matches("<section").count(), DEFAULT_MAX_DEPTH);
}
