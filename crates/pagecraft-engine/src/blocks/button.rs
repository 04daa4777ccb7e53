use crate::props;
use crate::registry::BlockDescriptor;
use crate::render::{Markup, RenderedZones, attr};
use crate::schema::{FieldOption, FieldSchema, yes_no};
use crate::value::{Props, PropsExt};

use super::option_class;

pub fn descriptor() -> BlockDescriptor {
    BlockDescriptor {
        type_name: "Button",
        label: "Button",
        default_props: props! {
            "text" => "Click Me",
            "href" => "#",
            "variant" => "primary",
            "size" => "medium",
            "icon" => "arrow",
            "iconPosition" => "right",
            "fullWidth" => false,
            "alignment" => "left",
        },
        zones: Vec::new(),
        fields: vec![
            FieldSchema::text("text", "Button Text"),
            FieldSchema::text("href", "Link URL"),
            FieldSchema::radio(
                "variant",
                "Variant",
                vec![
                    FieldOption::new("Primary", "primary"),
                    FieldOption::new("Secondary", "secondary"),
                    FieldOption::new("Outline", "outline"),
                    FieldOption::new("Ghost", "ghost"),
                    FieldOption::new("Gradient", "gradient"),
                ],
            ),
            FieldSchema::radio(
                "size",
                "Size",
                vec![
                    FieldOption::new("Small", "small"),
                    FieldOption::new("Medium", "medium"),
                    FieldOption::new("Large", "large"),
                ],
            ),
            FieldSchema::select(
                "icon",
                "Icon",
                vec![
                    FieldOption::new("None", "none"),
                    FieldOption::new("Arrow", "arrow"),
                    FieldOption::new("External Link", "external"),
                    FieldOption::new("Download", "download"),
                    FieldOption::new("Chevron", "chevron"),
                ],
            ),
            FieldSchema::radio(
                "iconPosition",
                "Icon Position",
                vec![
                    FieldOption::new("Left", "left"),
                    FieldOption::new("Right", "right"),
                ],
            ),
            FieldSchema::radio("fullWidth", "Full Width", yes_no()),
            FieldSchema::radio("alignment", "Alignment", super::heading::alignments()),
        ],
        render,
    }
}

/// Icon names map to a `data-icon` marker; the host page supplies the glyphs.
fn icon(props: &Props) -> Option<&'static str> {
    match props.str_or("icon", "none") {
        "arrow" => Some("arrow-right"),
        "external" => Some("external-link"),
        "download" => Some("download"),
        "chevron" => Some("chevron-right"),
        _ => None,
    }
}

fn render(props: &Props, _zones: &RenderedZones) -> Markup {
    let variant = option_class(
        props,
        "variant",
        "primary",
        &[
            (
                "primary",
                "bg-purple-600 text-white hover:bg-purple-500 shadow-lg shadow-purple-500/30 hover:shadow-purple-500/50",
            ),
            (
                "secondary",
                "bg-slate-800 text-white hover:bg-slate-700 shadow-lg shadow-slate-800/30",
            ),
            (
                "outline",
                "border-2 border-purple-600 text-purple-600 hover:bg-purple-50",
            ),
            ("ghost", "text-purple-600 hover:bg-purple-50"),
            (
                "gradient",
                "bg-gradient-to-r from-purple-600 to-blue-500 text-white hover:from-purple-500 hover:to-blue-400 shadow-lg",
            ),
        ],
    );
    let size = option_class(
        props,
        "size",
        "medium",
        &[
            ("small", "px-4 py-2 text-sm"),
            ("medium", "px-6 py-3 text-base"),
            ("large", "px-8 py-4 text-lg"),
        ],
    );
    let align = option_class(
        props,
        "alignment",
        "left",
        &[
            ("left", "justify-start"),
            ("center", "justify-center"),
            ("right", "justify-end"),
        ],
    );
    let width = if props.bool_or("fullWidth", false) {
        "w-full justify-center"
    } else {
        ""
    };

    let icon_markup = icon(props)
        .map(|name| format!(r#"<span class="h-4 w-4" data-icon="{name}"></span>"#))
        .unwrap_or_default();
    let icon_left = props.str_or("iconPosition", "right") == "left";

    let mut out = Markup::raw(format!(
        r#"<div class="flex {align}"><a href="{}" class="inline-flex items-center gap-2 rounded-lg font-semibold transition-all {variant} {size} {width}">"#,
        attr(props.str_or("href", "#"))
    ));
    if icon_left {
        out.push_str(&icon_markup);
    }
    out.push(&Markup::text(props.str_or("text", "")));
    if !icon_left {
        out.push_str(&icon_markup);
    }
    out.push_str("</a></div>");
    out
}
