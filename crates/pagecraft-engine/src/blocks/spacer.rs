use crate::props;
use crate::registry::BlockDescriptor;
use crate::render::{Markup, RenderedZones};
use crate::schema::{FieldOption, FieldSchema, yes_no};
use crate::value::{Props, PropsExt};

use super::option_class;

pub fn descriptor() -> BlockDescriptor {
    BlockDescriptor {
        type_name: "Spacer",
        label: "Spacer",
        default_props: props! {
            "size" => "md",
            "showDivider" => false,
            "dividerColor" => "light",
        },
        zones: Vec::new(),
        fields: vec![
            FieldSchema::radio(
                "size",
                "Size",
                vec![
                    FieldOption::new("XS (16px)", "xs"),
                    FieldOption::new("SM (32px)", "sm"),
                    FieldOption::new("MD (48px)", "md"),
                    FieldOption::new("LG (80px)", "lg"),
                    FieldOption::new("XL (128px)", "xl"),
                    FieldOption::new("2XL (192px)", "2xl"),
                ],
            ),
            FieldSchema::radio("showDivider", "Show Divider", yes_no()),
            FieldSchema::radio(
                "dividerColor",
                "Divider Color",
                vec![
                    FieldOption::new("Light", "light"),
                    FieldOption::new("Medium", "medium"),
                    FieldOption::new("Dark", "dark"),
                ],
            ),
        ],
        render,
    }
}

fn render(props: &Props, _zones: &RenderedZones) -> Markup {
    let size = option_class(
        props,
        "size",
        "md",
        &[
            ("xs", "h-4"),
            ("sm", "h-8"),
            ("md", "h-12"),
            ("lg", "h-20"),
            ("xl", "h-32"),
            ("2xl", "h-48"),
        ],
    );

    if !props.bool_or("showDivider", false) {
        return Markup::raw(format!(r#"<div class="{size}"></div>"#));
    }

    let divider = option_class(
        props,
        "dividerColor",
        "light",
        &[
            ("light", "border-slate-200"),
            ("medium", "border-slate-300"),
            ("dark", "border-slate-500"),
        ],
    );
    Markup::raw(format!(
        r#"<div class="{size} flex items-center"><div class="w-full border-t {divider}"></div></div>"#
    ))
}
