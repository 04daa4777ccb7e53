use std::fmt;

use crate::registry::Registry;
use crate::resolve::{ResolvedBlock, ResolvedNode, ResolvedPage};

/// Rendered HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap text that is already valid HTML.
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escape plain text for an element body.
    pub fn text(text: &str) -> Self {
        Self(html_escape::encode_text(text).into_owned())
    }

    pub fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    pub fn push_str(&mut self, html: &str) {
        self.0.push_str(html);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::new();
        for part in iter {
            out.push(&part);
        }
        out
    }
}

/// Escape a value for use inside a double-quoted attribute.
pub fn attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

/// Rendered children of a container, one entry per declared zone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedZones {
    zones: Vec<(String, Markup)>,
}

impl RenderedZones {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, markup: Markup) {
        self.zones.push((name.into(), markup));
    }

    /// Markup for a zone; an unknown zone renders as nothing.
    pub fn get(&self, name: &str) -> Markup {
        self.zones
            .iter()
            .find(|(zone, _)| zone == name)
            .map(|(_, markup)| markup.clone())
            .unwrap_or_default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// Walks a resolved tree and calls each block's render function.
///
/// Layout is each container's own business: the renderer only hands it the
/// finished markup of every declared zone.
pub struct Renderer<'r> {
    registry: &'r Registry,
}

impl<'r> Renderer<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Render the whole page, wrapped by the root render function.
    pub fn render_page(&self, page: &ResolvedPage) -> Markup {
        let content = self.render_blocks(&page.blocks);
        (self.registry.root().render)(&page.root_props, content)
    }

    pub fn render_blocks(&self, blocks: &[ResolvedBlock]) -> Markup {
        blocks
            .iter()
            .filter_map(|block| match block {
                ResolvedBlock::Node(node) => self.render_node(node),
                ResolvedBlock::Unresolvable { .. } => None,
            })
            .collect()
    }

    fn render_node(&self, node: &ResolvedNode) -> Option<Markup> {
        // The tree was resolved against this registry; a miss means a
        // different registry was passed in, so render nothing.
        let descriptor = self.registry.lookup(&node.type_name)?;

        let mut zones = RenderedZones::new();
        for zone in &node.zones {
            zones.insert(zone.name.clone(), self.render_blocks(&zone.children));
        }

        Some((descriptor.render)(&node.props, &zones))
    }
}
