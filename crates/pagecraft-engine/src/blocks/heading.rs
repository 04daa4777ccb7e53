use crate::props;
use crate::registry::BlockDescriptor;
use crate::render::{Markup, RenderedZones};
use crate::schema::{FieldOption, FieldSchema};
use crate::value::{Props, PropsExt};

use super::option_class;

pub(crate) fn alignments() -> Vec<FieldOption> {
    vec![
        FieldOption::new("Left", "left"),
        FieldOption::new("Center", "center"),
        FieldOption::new("Right", "right"),
    ]
}

pub fn descriptor() -> BlockDescriptor {
    BlockDescriptor {
        type_name: "Heading",
        label: "Heading",
        default_props: props! {
            "text" => "Your Heading Here",
            "level" => "h2",
            "alignment" => "left",
            "color" => "default",
        },
        zones: Vec::new(),
        fields: vec![
            FieldSchema::text("text", "Text"),
            FieldSchema::radio(
                "level",
                "Heading Level",
                vec![
                    FieldOption::new("H1", "h1"),
                    FieldOption::new("H2", "h2"),
                    FieldOption::new("H3", "h3"),
                    FieldOption::new("H4", "h4"),
                ],
            ),
            FieldSchema::radio("alignment", "Alignment", alignments()),
            FieldSchema::select(
                "color",
                "Color",
                vec![
                    FieldOption::new("Default (Dark)", "default"),
                    FieldOption::new("Muted (Gray)", "muted"),
                    FieldOption::new("Primary (Purple)", "primary"),
                    FieldOption::new("White", "white"),
                    FieldOption::new("Gradient", "gradient"),
                ],
            ),
        ],
        render,
    }
}

const LEVELS: &[(&str, &str)] = &[
    ("h1", "text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight"),
    ("h2", "text-3xl md:text-4xl font-bold"),
    ("h3", "text-2xl md:text-3xl font-semibold"),
    ("h4", "text-xl md:text-2xl font-semibold"),
];

fn render(props: &Props, _zones: &RenderedZones) -> Markup {
    // The level doubles as the tag name, so only known levels get through.
    let tag = match props.str_or("level", "h2") {
        level @ ("h1" | "h2" | "h3" | "h4") => level,
        _ => "h2",
    };
    let level = option_class(props, "level", "h2", LEVELS);
    let align = option_class(
        props,
        "alignment",
        "left",
        &[
            ("left", "text-left"),
            ("center", "text-center"),
            ("right", "text-right"),
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
            (
                "gradient",
                "bg-gradient-to-r from-purple-600 to-blue-500 bg-clip-text text-transparent",
            ),
        ],
    );

    let mut out = Markup::raw(format!(r#"<{tag} class="{level} {align} {color}">"#));
    out.push(&Markup::text(props.str_or("text", "")));
    out.push_str(&format!("</{tag}>"));
    out
}
