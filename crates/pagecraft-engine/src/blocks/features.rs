//! Feature grid section. The only built-in block with an array field.

use crate::props;
use crate::registry::BlockDescriptor;
use crate::render::{Markup, RenderedZones};
use crate::schema::{FieldOption, FieldSchema};
use crate::value::{PropertyValue, Props, PropsExt};

const ICONS: [&str; 6] = ["zap", "shield", "palette", "code", "smartphone", "rocket"];

fn feature(icon: &str, title: &str, description: &str) -> PropertyValue {
    props! { "icon" => icon, "title" => title, "description" => description }.into()
}

pub fn descriptor() -> BlockDescriptor {
    BlockDescriptor {
        type_name: "Features",
        label: "Features",
        default_props: props! {
            "sectionTitle" => "Everything You Need to Build",
            "sectionSubtitle" => "Our platform provides all the tools and features you need to create stunning websites.",
            "variant" => "cards",
            "columns" => 3u64,
            "features" => vec![
                feature("zap", "Lightning Fast", "Optimized for speed and performance. Your sites load instantly."),
                feature("shield", "Secure by Default", "Built-in security features to protect your site and visitors."),
                feature("palette", "Beautiful Design", "Stunning templates and components designed by professionals."),
                feature("code", "No Code Required", "Build complex layouts without writing a single line of code."),
                feature("smartphone", "Mobile Responsive", "Every component is optimized for all screen sizes."),
                feature("rocket", "Easy Deployment", "Publish your site with one click to any platform."),
            ],
        },
        zones: Vec::new(),
        fields: vec![
            FieldSchema::text("sectionTitle", "Section Title"),
            FieldSchema::textarea("sectionSubtitle", "Section Subtitle"),
            FieldSchema::radio(
                "variant",
                "Display Variant",
                vec![
                    FieldOption::new("Cards", "cards"),
                    FieldOption::new("Simple", "simple"),
                    FieldOption::new("Icons Left", "icons-left"),
                ],
            ),
            FieldSchema::radio(
                "columns",
                "Columns",
                vec![
                    FieldOption::new("2 Columns", 2u64),
                    FieldOption::new("3 Columns", 3u64),
                    FieldOption::new("4 Columns", 4u64),
                ],
            ),
            FieldSchema::array(
                "features",
                "Features",
                vec![
                    FieldSchema::select(
                        "icon",
                        "Icon",
                        vec![
                            FieldOption::new("Zap (Lightning)", "zap"),
                            FieldOption::new("Shield (Security)", "shield"),
                            FieldOption::new("Palette (Design)", "palette"),
                            FieldOption::new("Code (Development)", "code"),
                            FieldOption::new("Smartphone (Mobile)", "smartphone"),
                            FieldOption::new("Rocket (Launch)", "rocket"),
                        ],
                    ),
                    FieldSchema::text("title", "Title"),
                    FieldSchema::textarea("description", "Description"),
                ],
                props! {
                    "icon" => "zap",
                    "title" => "Feature Title",
                    "description" => "Feature description goes here.",
                },
            ),
        ],
        render,
    }
}

fn icon(item: &Props, class: &str) -> String {
    let name = item.str_or("icon", "zap");
    let name = if ICONS.contains(&name) { name } else { "zap" };
    format!(r#"<span class="{class}" data-icon="{name}"></span>"#)
}

fn render_item(variant: &str, item: &Props) -> Markup {
    let title = Markup::text(item.str_or("title", ""));
    let description = Markup::text(item.str_or("description", ""));

    let html = match variant {
        "simple" => format!(
            r#"<div class="text-center"><div class="mx-auto mb-4 flex h-14 w-14 items-center justify-center rounded-full bg-purple-100">{}</div><h3 class="mb-2 text-lg font-semibold text-slate-900">{title}</h3><p class="text-slate-600">{description}</p></div>"#,
            icon(item, "h-7 w-7 text-purple-600")
        ),
        "icons-left" => format!(
            r#"<div class="flex gap-4"><div class="flex-shrink-0"><div class="flex h-12 w-12 items-center justify-center rounded-lg bg-gradient-to-br from-purple-500 to-blue-500">{}</div></div><div><h3 class="mb-1 text-lg font-semibold text-slate-900">{title}</h3><p class="text-slate-600">{description}</p></div></div>"#,
            icon(item, "h-6 w-6 text-white")
        ),
        _ => format!(
            r#"<div class="group rounded-2xl border border-slate-200 bg-white p-6 shadow-sm"><div class="mb-4 flex h-12 w-12 items-center justify-center rounded-xl bg-gradient-to-br from-purple-500 to-blue-500">{}</div><h3 class="mb-2 text-xl font-semibold text-slate-900">{title}</h3><p class="leading-relaxed text-slate-600">{description}</p></div>"#,
            icon(item, "h-6 w-6 text-white")
        ),
    };
    Markup::raw(html)
}

fn render(props: &Props, _zones: &RenderedZones) -> Markup {
    let columns = match props.u64_or("columns", 3) {
        2 => "grid-cols-1 md:grid-cols-2",
        4 => "grid-cols-1 md:grid-cols-2 lg:grid-cols-4",
        _ => "grid-cols-1 md:grid-cols-2 lg:grid-cols-3",
    };
    let variant = props.str_or("variant", "cards");

    let mut out = Markup::raw(
        r#"<section class="bg-slate-50 py-20"><div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8"><div class="mx-auto mb-16 max-w-3xl text-center"><h2 class="mb-4 text-3xl font-bold text-slate-900 sm:text-4xl">"#,
    );
    out.push(&Markup::text(props.str_or("sectionTitle", "")));
    out.push_str(r#"</h2><p class="text-lg text-slate-600">"#);
    out.push(&Markup::text(props.str_or("sectionSubtitle", "")));
    out.push_str(&format!(r#"</p></div><div class="grid gap-8 {columns}">"#));

    // Items that are not maps are skipped.
    for item in props.list("features").iter().filter_map(PropertyValue::as_map) {
        out.push(&render_item(variant, item));
    }

    out.push_str("</div></div></section>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_list_six_features() {
        let d = descriptor();
        assert_eq!(d.default_props.list("features").len(), 6);
        let html = render(&d.default_props, &RenderedZones::new());
        assert_eq!(html.as_str().matches("<h3 ").count(), 6);
        assert!(html.as_str().contains(r#"data-icon="rocket""#));
    }

    #[test]
    fn unknown_icon_falls_back_to_zap() {
        let item = props! { "icon" => "sparkles", "title" => "T" };
        let html = render(
            &props! { "features" => vec![PropertyValue::from(item)] },
            &RenderedZones::new(),
        );
        assert!(html.as_str().contains(r#"data-icon="zap""#));
    }

    #[test]
    fn variant_and_columns_pick_layout() {
        let props = props! {
            "variant" => "icons-left",
            "columns" => 4u64,
            "features" => vec![feature("code", "A", "B")],
        };
        let html = render(&props, &RenderedZones::new());
        assert!(html.as_str().contains("lg:grid-cols-4"));
        assert!(html.as_str().contains(r#"<div class="flex gap-4">"#));
    }

    #[test]
    fn non_map_items_are_skipped() {
        let props = props! { "features" => vec![PropertyValue::from("oops"), feature("zap", "Kept", "")] };
        let html = render(&props, &RenderedZones::new());
        assert_eq!(html.as_str().matches("<h3 ").count(), 1);
        assert!(html.as_str().contains("Kept"));
    }
}
