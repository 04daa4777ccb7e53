//! # Built-in Blocks
//!
//! The standard page-building library. Each block is a plain descriptor: default
//! props, editable fields, declared zones and a pure render function emitting HTML
//! with utility classes. Option values outside a block's set fall back to the
//! default option instead of producing broken markup.
//!
//! ## Categories
//!
//! - **Layout**: `Grid`, `Spacer`
//! - **Sections**: `Hero`, `Features`
//! - **Content**: `Heading`, `Text`, `Card`
//! - **Interactive**: `Button`

pub mod button;
pub mod card;
pub mod features;
pub mod grid;
pub mod heading;
pub mod hero;
pub mod spacer;
pub mod text;

use crate::document::{BlockInstance, Document};
use crate::props;
use crate::registry::{Registry, RegistryError, RootDescriptor};
use crate::render::{Markup, attr};
use crate::schema::FieldSchema;
use crate::value::{Props, PropsExt};

/// Registry holding every built-in block.
pub fn standard_registry() -> Result<Registry, RegistryError> {
    Registry::builder()
        .root(root_descriptor())
        .register(hero::descriptor())?
        .register(features::descriptor())?
        .register(grid::descriptor())?
        .register(card::descriptor())?
        .register(text::descriptor())?
        .register(heading::descriptor())?
        .register(button::descriptor())?
        .register(spacer::descriptor())?
        .category("layout", "Layout", &["Grid", "Spacer"])
        .category("sections", "Sections", &["Hero", "Features"])
        .category("content", "Content", &["Heading", "Text", "Card"])
        .category("interactive", "Interactive", &["Button"])
        .build()
}

pub fn root_descriptor() -> RootDescriptor {
    RootDescriptor {
        default_props: props! { "title" => "My Page" },
        fields: vec![FieldSchema::text("title", "Page Title")],
        render: render_root,
    }
}

fn render_root(props: &Props, content: Markup) -> Markup {
    let mut out = Markup::raw(format!(
        r#"<main class="min-h-screen bg-white" data-title="{}">"#,
        attr(props.str_or("title", "My Page"))
    ));
    out.push(&content);
    out.push_str("</main>");
    out
}

/// A page with a single hero section, for new sites.
pub fn starter_document() -> Document {
    let mut doc = Document::empty();
    doc.root.props = props! { "title" => "My Website" };
    doc.content.push(BlockInstance::new(
        "hero-1",
        "Hero",
        props! {
            "id" => "hero-1",
            "title" => "Welcome to Your Website",
            "description" => "Start building amazing pages with our drag-and-drop builder. Add components from the sidebar and customize them to your needs.",
            "image" => hero::DEFAULT_IMAGE,
            "primaryButtonText" => "Get Started",
            "primaryButtonLink" => "#",
            "secondaryButtonText" => "Learn More",
            "secondaryButtonLink" => "#",
            "alignment" => "center",
            "showBadge" => true,
            "badgeText" => "New Release",
        },
    ));
    doc
}

/// Class list for a string option, falling back to the entry for `default`.
pub(crate) fn option_class(
    props: &Props,
    key: &str,
    default: &str,
    table: &[(&str, &'static str)],
) -> &'static str {
    let chosen = props.str_or(key, default);
    lookup_class(table, chosen)
        .or_else(|| lookup_class(table, default))
        .unwrap_or("")
}

fn lookup_class(table: &[(&str, &'static str)], value: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(option, _)| *option == value)
        .map(|(_, class)| *class)
}
