use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::props;
use crate::registry::{BlockDescriptor, Registry, RootDescriptor};
use crate::render::{Markup, RenderedZones};
use crate::value::{Props, PropsExt};

fn render_leaf(props: &Props, _zones: &RenderedZones) -> Markup {
    let mut out = Markup::raw("<leaf>");
    out.push(&Markup::text(props.str_or("label", "")));
    out.push_str("</leaf>");
    out
}

/// Renders each zone as `<name>children</name>` inside `<box>`.
fn render_box(_props: &Props, zones: &RenderedZones) -> Markup {
    let mut out = Markup::raw("<box>");
    for name in zones.names() {
        out.push_str(&format!("<{name}>"));
        out.push(&zones.get(name));
        out.push_str(&format!("</{name}>"));
    }
    out.push_str("</box>");
    out
}

fn render_page(_props: &Props, content: Markup) -> Markup {
    let mut out = Markup::raw("<page>");
    out.push(&content);
    out.push_str("</page>");
    out
}

/// A block without zones rendering its `label` prop.
pub fn leaf_descriptor(name: &'static str) -> BlockDescriptor {
    BlockDescriptor {
        type_name: name,
        label: name,
        default_props: props! { "label" => "leaf" },
        zones: Vec::new(),
        fields: Vec::new(),
        render: render_leaf,
    }
}

pub fn zoned_descriptor(name: &'static str, zones: &[&str]) -> BlockDescriptor {
    BlockDescriptor {
        type_name: name,
        label: name,
        default_props: Props::new(),
        zones: zones.iter().map(|zone| zone.to_string()).collect(),
        fields: Vec::new(),
        render: render_box,
    }
}

/// `Leaf`, a two-zone `Box` (`left`, `right`) and a `<page>` root titled "Untitled".
pub fn test_registry() -> Registry {
    Registry::builder()
        .root(RootDescriptor {
            default_props: props! { "title" => "Untitled" },
            fields: Vec::new(),
            render: render_page,
        })
        .register(leaf_descriptor("Leaf"))
        .unwrap()
        .register(zoned_descriptor("Box", &["left", "right"]))
        .unwrap()
        .build()
        .unwrap()
}

/// Create a temporary documents directory
pub fn create_test_documents_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
