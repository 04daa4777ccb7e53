use crate::props;
use crate::registry::BlockDescriptor;
use crate::render::{Markup, RenderedZones, attr};
use crate::schema::{FieldOption, FieldSchema};
use crate::value::{Props, PropsExt};

use super::option_class;

pub fn descriptor() -> BlockDescriptor {
    BlockDescriptor {
        type_name: "Card",
        label: "Card",
        default_props: props! {
            "image" => "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=800",
            "title" => "Card Title",
            "description" => "This is a description for the card. Add your content here.",
            "buttonText" => "Learn More",
            "buttonLink" => "#",
            "variant" => "default",
            "imageAspect" => "video",
        },
        zones: Vec::new(),
        fields: vec![
            FieldSchema::text("image", "Image URL"),
            FieldSchema::text("title", "Title"),
            FieldSchema::textarea("description", "Description"),
            FieldSchema::text("buttonText", "Button Text"),
            FieldSchema::text("buttonLink", "Button Link"),
            FieldSchema::radio(
                "variant",
                "Card Variant",
                vec![
                    FieldOption::new("Default", "default"),
                    FieldOption::new("Horizontal", "horizontal"),
                    FieldOption::new("Overlay", "overlay"),
                ],
            ),
            FieldSchema::radio(
                "imageAspect",
                "Image Aspect Ratio",
                vec![
                    FieldOption::new("Square (1:1)", "square"),
                    FieldOption::new("Video (16:9)", "video"),
                    FieldOption::new("Wide (21:9)", "wide"),
                ],
            ),
        ],
        render,
    }
}

struct Palette {
    title: &'static str,
    body: &'static str,
    link: &'static str,
}

const LIGHT: Palette = Palette {
    title: "text-slate-900",
    body: "text-slate-600",
    link: "font-medium text-purple-600 hover:text-purple-500",
};

const DARK: Palette = Palette {
    title: "text-white",
    body: "text-slate-300",
    link: "text-purple-400 hover:text-purple-300",
};

fn body(props: &Props, palette: &Palette) -> Markup {
    let mut out = Markup::raw(format!(r#"<h3 class="mb-2 text-xl font-bold {}">"#, palette.title));
    out.push(&Markup::text(props.str_or("title", "")));
    out.push_str(&format!(r#"</h3><p class="mb-4 {}">"#, palette.body));
    out.push(&Markup::text(props.str_or("description", "")));
    out.push_str("</p>");

    // Both text and link are needed for a call to action.
    let text = props.str_or("buttonText", "");
    let link = props.str_or("buttonLink", "");
    if !text.is_empty() && !link.is_empty() {
        out.push_str(&format!(
            r#"<a href="{}" class="inline-flex items-center gap-2 transition-colors {}">"#,
            attr(link),
            palette.link
        ));
        out.push(&Markup::text(text));
        out.push_str(r#"<span class="h-4 w-4" data-icon="arrow-right"></span></a>"#);
    }
    out
}

fn image(props: &Props, class: &str) -> Markup {
    let src = props.str_or("image", "");
    if src.is_empty() {
        return Markup::new();
    }
    Markup::raw(format!(
        r#"<img src="{}" alt="{}" class="{class}">"#,
        attr(src),
        attr(props.str_or("title", ""))
    ))
}

fn render(props: &Props, _zones: &RenderedZones) -> Markup {
    let aspect = option_class(
        props,
        "imageAspect",
        "video",
        &[
            ("square", "aspect-square"),
            ("video", "aspect-video"),
            ("wide", "aspect-[21/9]"),
        ],
    );

    let mut out;
    match props.str_or("variant", "default") {
        "overlay" => {
            out = Markup::raw(format!(
                r#"<div class="group relative overflow-hidden rounded-2xl"><div class="{aspect}">"#
            ));
            out.push(&image(props, "h-full w-full object-cover"));
            out.push_str(r#"<div class="absolute inset-0 bg-gradient-to-t from-slate-900/90 via-slate-900/50 to-transparent"></div></div><div class="absolute inset-x-0 bottom-0 p-6">"#);
            out.push(&body(props, &DARK));
            out.push_str("</div></div>");
        }
        "horizontal" => {
            out = Markup::raw(r#"<div class="group flex flex-col overflow-hidden rounded-2xl border border-slate-200 bg-white shadow-sm md:flex-row"><div class="md:w-2/5">"#);
            out.push(&image(props, "h-48 w-full object-cover md:h-full"));
            out.push_str(r#"</div><div class="flex flex-col justify-center p-6 md:w-3/5">"#);
            out.push(&body(props, &LIGHT));
            out.push_str("</div></div>");
        }
        _ => {
            out = Markup::raw(r#"<div class="group overflow-hidden rounded-2xl border border-slate-200 bg-white shadow-sm">"#);
            let img = image(props, "h-full w-full object-cover");
            if !img.is_empty() {
                out.push_str(&format!(r#"<div class="{aspect}">"#));
                out.push(&img);
                out.push_str("</div>");
            }
            out.push_str(r#"<div class="p-6">"#);
            out.push(&body(props, &LIGHT));
            out.push_str("</div></div>");
        }
    }
    out
}
