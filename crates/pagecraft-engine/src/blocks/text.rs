use crate::props;
use crate::registry::BlockDescriptor;
use crate::render::{Markup, RenderedZones};
use crate::schema::{FieldOption, FieldSchema};
use crate::value::{Props, PropsExt};

use super::option_class;

pub fn descriptor() -> BlockDescriptor {
    BlockDescriptor {
        type_name: "Text",
        label: "Text",
        default_props: props! {
            "content" => "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
            "size" => "medium",
            "weight" => "normal",
            "color" => "default",
            "alignment" => "left",
            "maxWidth" => "full",
        },
        zones: Vec::new(),
        fields: vec![
            FieldSchema::textarea("content", "Content"),
            FieldSchema::radio(
                "size",
                "Size",
                vec![
                    FieldOption::new("Small", "small"),
                    FieldOption::new("Medium", "medium"),
                    FieldOption::new("Large", "large"),
                    FieldOption::new("XLarge", "xlarge"),
                ],
            ),
            FieldSchema::radio(
                "weight",
                "Weight",
                vec![
                    FieldOption::new("Normal", "normal"),
                    FieldOption::new("Medium", "medium"),
                    FieldOption::new("Semibold", "semibold"),
                    FieldOption::new("Bold", "bold"),
                ],
            ),
            FieldSchema::select(
                "color",
                "Color",
                vec![
                    FieldOption::new("Default (Dark)", "default"),
                    FieldOption::new("Muted (Gray)", "muted"),
                    FieldOption::new("Primary (Purple)", "primary"),
                    FieldOption::new("White", "white"),
                ],
            ),
            FieldSchema::radio("alignment", "Alignment", super::heading::alignments()),
            FieldSchema::radio(
                "maxWidth",
                "Max Width",
                vec![
                    FieldOption::new("Full", "full"),
                    FieldOption::new("Prose", "prose"),
                    FieldOption::new("Narrow", "narrow"),
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
        "medium",
        &[
            ("small", "text-sm"),
            ("medium", "text-base"),
            ("large", "text-lg"),
            ("xlarge", "text-xl"),
        ],
    );
    let weight = option_class(
        props,
        "weight",
        "normal",
        &[
            ("normal", "font-normal"),
            ("medium", "font-medium"),
            ("semibold", "font-semibold"),
            ("bold", "font-bold"),
        ],
    );
    let color = option_class(
        props,
        "color",
        "default",
        &[
            ("default", "text-slate-900"),
            ("muted", "text-slate-600"),
            ("primary", "text-purple-600"),
            ("white", "text-white"),
        ],
    );
    let align = option_class(
        props,
        "alignment",
        "left",
        &[
            ("left", "text-left"),
            ("center", "text-center mx-auto"),
            ("right", "text-right ml-auto"),
        ],
    );
    let max_width = option_class(
        props,
        "maxWidth",
        "full",
        &[
            ("full", "max-w-full"),
            ("prose", "max-w-prose"),
            ("narrow", "max-w-2xl"),
        ],
    );

    let mut out = Markup::raw(format!(
        r#"<p class="leading-relaxed {size} {weight} {color} {align} {max_width}">"#
    ));
    out.push(&Markup::text(props.str_or("content", "")));
    out.push_str("</p>");
    out
}
