//! Multi-column layout. The only built-in container block.
//!
//! Zones `column-0` through `column-5` are always declared; the grid renders as
//! many of them as its `columns` prop asks for. Content stored in the columns
//! beyond that stays in the document and reappears if the count is raised.

use crate::props;
use crate::registry::BlockDescriptor;
use crate::render::{Markup, RenderedZones};
use crate::schema::{FieldOption, FieldSchema};
use crate::value::{Props, PropsExt};

use super::option_class;

pub const MAX_COLUMNS: u64 = 6;
const DEFAULT_COLUMNS: u64 = 2;

pub fn zone_name(index: u64) -> String {
    format!("column-{index}")
}

pub fn descriptor() -> BlockDescriptor {
    BlockDescriptor {
        type_name: "Grid",
        label: "Grid Layout",
        default_props: props! {
            "columns" => DEFAULT_COLUMNS,
            "gap" => "medium",
            "padding" => "medium",
            "backgroundColor" => "transparent",
            "maxWidth" => "container",
            "verticalAlign" => "stretch",
        },
        zones: (0..MAX_COLUMNS).map(zone_name).collect(),
        fields: vec![
            FieldSchema::radio(
                "columns",
                "Columns",
                vec![
                    FieldOption::new("1", 1u64),
                    FieldOption::new("2", 2u64),
                    FieldOption::new("3", 3u64),
                    FieldOption::new("4", 4u64),
                    FieldOption::new("6", 6u64),
                ],
            ),
            FieldSchema::radio("gap", "Gap", sizes()),
            FieldSchema::radio("padding", "Vertical Padding", sizes()),
            FieldSchema::select(
                "backgroundColor",
                "Background Color",
                vec![
                    FieldOption::new("Transparent", "transparent"),
                    FieldOption::new("White", "white"),
                    FieldOption::new("Gray", "gray"),
                    FieldOption::new("Dark", "dark"),
                ],
            ),
            FieldSchema::radio(
                "maxWidth",
                "Max Width",
                vec![
                    FieldOption::new("Full Width", "full"),
                    FieldOption::new("Container", "container"),
                    FieldOption::new("Narrow", "narrow"),
                ],
            ),
            FieldSchema::radio(
                "verticalAlign",
                "Vertical Alignment",
                vec![
                    FieldOption::new("Top", "top"),
                    FieldOption::new("Center", "center"),
                    FieldOption::new("Bottom", "bottom"),
                    FieldOption::new("Stretch", "stretch"),
                ],
            ),
        ],
        render,
    }
}

fn sizes() -> Vec<FieldOption> {
    vec![
        FieldOption::new("None", "none"),
        FieldOption::new("Small", "small"),
        FieldOption::new("Medium", "medium"),
        FieldOption::new("Large", "large"),
    ]
}

fn column_class(columns: u64) -> &'static str {
    match columns {
        1 => "grid-cols-1",
        2 => "grid-cols-1 md:grid-cols-2",
        3 => "grid-cols-1 md:grid-cols-2 lg:grid-cols-3",
        4 => "grid-cols-1 md:grid-cols-2 lg:grid-cols-4",
        6 => "grid-cols-2 md:grid-cols-3 lg:grid-cols-6",
        _ => column_class(DEFAULT_COLUMNS),
    }
}

/// Number of columns to lay out, clamped to the declared zones.
fn column_count(props: &Props) -> u64 {
    match props.u64_or("columns", DEFAULT_COLUMNS) {
        n @ 1..=MAX_COLUMNS => n,
        _ => DEFAULT_COLUMNS,
    }
}

fn render(props: &Props, zones: &RenderedZones) -> Markup {
    let bg = option_class(
        props,
        "backgroundColor",
        "transparent",
        &[
            ("transparent", "bg-transparent"),
            ("white", "bg-white"),
            ("gray", "bg-slate-100"),
            ("dark", "bg-slate-900"),
        ],
    );
    let padding = option_class(
        props,
        "padding",
        "medium",
        &[
            ("none", "py-0"),
            ("small", "py-4"),
            ("medium", "py-12"),
            ("large", "py-20"),
        ],
    );
    let max_width = option_class(
        props,
        "maxWidth",
        "container",
        &[
            ("full", "max-w-full"),
            ("container", "max-w-7xl"),
            ("narrow", "max-w-4xl"),
        ],
    );
    let gap = option_class(
        props,
        "gap",
        "medium",
        &[
            ("none", "gap-0"),
            ("small", "gap-2"),
            ("medium", "gap-6"),
            ("large", "gap-10"),
        ],
    );
    let align = option_class(
        props,
        "verticalAlign",
        "stretch",
        &[
            ("top", "items-start"),
            ("center", "items-center"),
            ("bottom", "items-end"),
            ("stretch", "items-stretch"),
        ],
    );
    let columns = column_count(props);

    let mut out = Markup::raw(format!(
        r#"<section class="{bg} {padding}"><div class="mx-auto {max_width} px-4 sm:px-6 lg:px-8"><div class="grid {} {gap} {align}">"#,
        column_class(columns)
    ));
    for index in 0..columns {
        out.push_str(r#"<div class="min-h-[100px]">"#);
        out.push(&zones.get(&zone_name(index)));
        out.push_str("</div>");
    }
    out.push_str("</div></div></section>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn declares_six_column_zones() {
        let d = descriptor();
        assert_eq!(d.zones.len(), 6);
        assert_eq!(d.zones[0], "column-0");
        assert_eq!(d.zones[5], "column-5");
    }

    #[rstest]
    #[case(props! { "columns" => 3u64 }, 3)]
    #[case(props! { "columns" => 0u64 }, 2)]
    #[case(props! { "columns" => 9u64 }, 2)]
    #[case(props! { "columns" => "three" }, 2)]
    #[case(props! {}, 2)]
    fn column_count_is_clamped(#[case] props: Props, #[case] expected: u64) {
        assert_eq!(column_count(&props), expected);
    }

    #[test]
    fn renders_only_the_requested_columns() {
        let mut zones = RenderedZones::new();
        for i in 0..MAX_COLUMNS {
            zones.insert(zone_name(i), Markup::raw(format!("<i>{i}</i>")));
        }

        let html = render(&props! { "columns" => 2u64 }, &zones);

        assert!(html.as_str().contains("<i>0</i>"));
        assert!(html.as_str().contains("<i>1</i>"));
        assert!(!html.as_str().contains("<i>2</i>"));
        assert_eq!(html.as_str().matches("min-h-[100px]").count(), 2);
    }

    #[test]
    fn five_columns_keep_five_zones_with_default_class() {
        let html = render(&props! { "columns" => 5u64 }, &RenderedZones::new());
        assert_eq!(html.as_str().matches("min-h-[100px]").count(), 5);
        assert!(html.as_str().contains("grid-cols-1 md:grid-cols-2 gap-6"));
    }
}
