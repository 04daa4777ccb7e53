use crate::props;
use crate::registry::BlockDescriptor;
use crate::render::{Markup, RenderedZones, attr};
use crate::schema::{FieldSchema, yes_no};
use crate::value::{Props, PropsExt};

use super::option_class;

pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=1920";

pub fn descriptor() -> BlockDescriptor {
    BlockDescriptor {
        type_name: "Hero",
        label: "Hero Section",
        default_props: props! {
            "title" => "Build Amazing Websites Without Code",
            "description" => "Create stunning, responsive websites in minutes with our intuitive drag-and-drop builder. No coding skills required.",
            "image" => DEFAULT_IMAGE,
            "primaryButtonText" => "Get Started Free",
            "primaryButtonLink" => "#",
            "secondaryButtonText" => "Learn More",
            "secondaryButtonLink" => "#",
            "alignment" => "center",
            "showBadge" => true,
            "badgeText" => "New Feature Available",
        },
        zones: Vec::new(),
        fields: vec![
            FieldSchema::text("title", "Title"),
            FieldSchema::textarea("description", "Description"),
            FieldSchema::text("image", "Background Image URL"),
            FieldSchema::text("primaryButtonText", "Primary Button Text"),
            FieldSchema::text("primaryButtonLink", "Primary Button Link"),
            FieldSchema::text("secondaryButtonText", "Secondary Button Text"),
            FieldSchema::text("secondaryButtonLink", "Secondary Button Link"),
            FieldSchema::radio(
                "alignment",
                "Content Alignment",
                super::heading::alignments(),
            ),
            FieldSchema::radio("showBadge", "Show Badge", yes_no()),
            FieldSchema::text("badgeText", "Badge Text"),
        ],
        render,
    }
}

fn render(props: &Props, _zones: &RenderedZones) -> Markup {
    let alignment = props.str_or("alignment", "center");
    let content_align = option_class(
        props,
        "alignment",
        "center",
        &[
            ("left", "text-left items-start"),
            ("center", "text-center items-center mx-auto"),
            ("right", "text-right items-end ml-auto"),
        ],
    );
    let buttons_align = match alignment {
        "left" => "justify-start",
        "right" => "justify-end",
        _ => "justify-center",
    };

    let mut out = Markup::raw(
        r#"<section class="relative min-h-[600px] w-full overflow-hidden bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900">"#,
    );

    let image = props.str_or("image", "");
    if !image.is_empty() {
        out.push_str(&format!(
            r#"<div class="absolute inset-0"><img src="{}" alt="Hero background" class="h-full w-full object-cover opacity-20"></div>"#,
            attr(image)
        ));
    }

    out.push_str(&format!(
        r#"<div class="relative z-10 mx-auto flex min-h-[600px] max-w-7xl flex-col justify-center px-4 py-20"><div class="flex max-w-3xl flex-col gap-6 {content_align}">"#
    ));

    let badge = props.str_or("badgeText", "");
    if props.bool_or("showBadge", true) && !badge.is_empty() {
        out.push_str(r#"<div class="inline-flex items-center gap-2 rounded-full bg-purple-500/20 px-4 py-2 text-sm font-medium text-purple-300"><span class="h-4 w-4" data-icon="star"></span>"#);
        out.push(&Markup::text(badge));
        out.push_str("</div>");
    }

    out.push_str(r#"<h1 class="text-4xl font-bold tracking-tight text-white sm:text-5xl lg:text-6xl">"#);
    out.push(&Markup::text(props.str_or("title", "")));
    out.push_str(r#"</h1><p class="max-w-2xl text-lg leading-relaxed text-slate-300 sm:text-xl">"#);
    out.push(&Markup::text(props.str_or("description", "")));
    out.push_str("</p>");

    out.push_str(&format!(r#"<div class="flex flex-wrap gap-4 pt-4 {buttons_align}">"#));
    out.push_str(&format!(
        r#"<a href="{}" class="group inline-flex items-center gap-2 rounded-lg bg-purple-600 px-6 py-3 font-semibold text-white">"#,
        attr(props.str_or("primaryButtonLink", "#"))
    ));
    out.push(&Markup::text(props.str_or("primaryButtonText", "")));
    out.push_str(r#"<span class="h-4 w-4" data-icon="arrow-right"></span></a>"#);

    let secondary = props.str_or("secondaryButtonText", "");
    if !secondary.is_empty() {
        out.push_str(&format!(
            r#"<a href="{}" class="inline-flex items-center gap-2 rounded-lg border border-slate-600 px-6 py-3 font-semibold text-white">"#,
            attr(props.str_or("secondaryButtonLink", "#"))
        ));
        out.push(&Markup::text(secondary));
        out.push_str("</a>");
    }

    out.push_str("</div></div></div></section>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_hidden_when_disabled() {
        let mut props = descriptor().default_props;
        assert!(render(&props, &RenderedZones::new()).as_str().contains("New Feature Available"));

        props.insert("showBadge".into(), false.into());
        assert!(!render(&props, &RenderedZones::new()).as_str().contains("New Feature Available"));
    }

    #[test]
    fn secondary_button_is_optional() {
        let html = render(&props! { "primaryButtonText" => "Go" }, &RenderedZones::new());
        assert!(html.as_str().contains("Go<span"));
        assert!(!html.as_str().contains("border-slate-600"));
    }

    #[test]
    fn alignment_moves_buttons() {
        let html = render(&props! { "alignment" => "right" }, &RenderedZones::new());
        assert!(html.as_str().contains("justify-end"));
        assert!(html.as_str().contains("text-right items-end ml-auto"));
    }
}
