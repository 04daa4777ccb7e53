//! # Block Registry
//!
//! Maps a block type name to its defaults, editable fields, declared zones and
//! render function. A registry is built once through [`RegistryBuilder`] and is
//! read-only afterwards; it is passed by reference to whatever needs it.
//!
//! Configuration mistakes (two descriptors with one name, a category naming an
//! unregistered type) fail at build time rather than at render time.

use std::collections::BTreeMap;

use crate::render::{Markup, RenderedZones};
use crate::schema::FieldSchema;
use crate::value::Props;

/// Pure rendering function for one block type.
pub type RenderFn = fn(&Props, &RenderedZones) -> Markup;

/// Pure rendering function for the page root; receives the rendered top-level content.
pub type RootRenderFn = fn(&Props, Markup) -> Markup;

#[derive(Debug, Clone)]
pub struct BlockDescriptor {
    pub type_name: &'static str,
    pub label: &'static str,
    pub default_props: Props,
    /// Declared zone names in resolution order. Empty for leaf blocks.
    pub zones: Vec<String>,
    pub fields: Vec<FieldSchema>,
    pub render: RenderFn,
}

impl BlockDescriptor {
    pub fn declares_zone(&self, name: &str) -> bool {
        self.zones.iter().any(|zone| zone == name)
    }

    pub fn is_container(&self) -> bool {
        !self.zones.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RootDescriptor {
    pub default_props: Props,
    pub fields: Vec<FieldSchema>,
    pub render: RootRenderFn,
}

impl Default for RootDescriptor {
    fn default() -> Self {
        Self {
            default_props: Props::new(),
            fields: Vec::new(),
            render: |_, content| content,
        }
    }
}

/// Named sidebar grouping of block types. Metadata only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub title: &'static str,
    pub components: Vec<&'static str>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Block type registered twice: {0}")]
    DuplicateType(String),
    #[error("Category {category} lists unregistered block type {type_name}")]
    UnknownCategoryMember {
        category: String,
        type_name: String,
    },
    #[error("Block type {type_name} declares zone {zone:?} more than once or with an invalid name")]
    InvalidZone { type_name: String, zone: String },
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    root: RootDescriptor,
    blocks: BTreeMap<&'static str, BlockDescriptor>,
    categories: Vec<Category>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, root: RootDescriptor) -> Self {
        self.root = root;
        self
    }

    pub fn register(mut self, descriptor: BlockDescriptor) -> Result<Self, RegistryError> {
        if self.blocks.contains_key(descriptor.type_name) {
            return Err(RegistryError::DuplicateType(
                descriptor.type_name.to_string(),
            ));
        }
        for (i, zone) in descriptor.zones.iter().enumerate() {
            if zone.is_empty() || zone.contains(':') || descriptor.zones[..i].contains(zone) {
                return Err(RegistryError::InvalidZone {
                    type_name: descriptor.type_name.to_string(),
                    zone: zone.clone(),
                });
            }
        }
        self.blocks.insert(descriptor.type_name, descriptor);
        Ok(self)
    }

    pub fn category(
        mut self,
        key: &'static str,
        title: &'static str,
        components: &[&'static str],
    ) -> Self {
        self.categories.push(Category {
            key,
            title,
            components: components.to_vec(),
        });
        self
    }

    pub fn build(self) -> Result<Registry, RegistryError> {
        for category in &self.categories {
            if let Some(missing) = category
                .components
                .iter()
                .find(|name| !self.blocks.contains_key(*name))
            {
                return Err(RegistryError::UnknownCategoryMember {
                    category: category.key.to_string(),
                    type_name: missing.to_string(),
                });
            }
        }

        log::debug!(
            "registry built with {} block types in {} categories",
            self.blocks.len(),
            self.categories.len()
        );

        Ok(Registry {
            root: self.root,
            blocks: self.blocks,
            categories: self.categories,
        })
    }
}

/// Immutable table of block behaviour.
#[derive(Debug)]
pub struct Registry {
    root: RootDescriptor,
    blocks: BTreeMap<&'static str, BlockDescriptor>,
    categories: Vec<Category>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The built-in block library.
    pub fn standard() -> Result<Self, RegistryError> {
        crate::blocks::standard_registry()
    }

    /// `None` means the type is unknown; the resolver skips such blocks.
    pub fn lookup(&self, type_name: &str) -> Option<&BlockDescriptor> {
        self.blocks.get(type_name)
    }

    pub fn root(&self) -> &RootDescriptor {
        &self.root
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Registered type names in sorted order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.blocks.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{leaf_descriptor, zoned_descriptor};
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_finds_registered_types() {
        let registry = Registry::builder()
            .register(leaf_descriptor("Text"))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(registry.lookup("Text").unwrap().type_name, "Text");
        assert!(registry.lookup("Missing").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_registration_fails_immediately() {
        let result = Registry::builder()
            .register(leaf_descriptor("Text"))
            .unwrap()
            .register(leaf_descriptor("Text"));

        assert_eq!(
            result.unwrap_err(),
            RegistryError::DuplicateType("Text".to_string())
        );
    }

    #[test]
    fn zone_names_must_be_unique_and_colon_free() {
        let result = Registry::builder().register(zoned_descriptor("Box", &["a", "a"]));
        assert!(matches!(result, Err(RegistryError::InvalidZone { .. })));

        let result = Registry::builder().register(zoned_descriptor("Box", &["a:b"]));
        assert!(matches!(result, Err(RegistryError::InvalidZone { .. })));
    }

    #[test]
    fn categories_must_name_registered_types() {
        let result = Registry::builder()
            .register(leaf_descriptor("Text"))
            .unwrap()
            .category("content", "Content", &["Text", "Heading"])
            .build();

        assert_eq!(
            result.unwrap_err(),
            RegistryError::UnknownCategoryMember {
                category: "content".to_string(),
                type_name: "Heading".to_string(),
            }
        );
    }

    #[test]
    fn type_names_are_sorted() {
        let registry = Registry::builder()
            .register(leaf_descriptor("Text"))
            .unwrap()
            .register(zoned_descriptor("Grid", &["column-0"]))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(registry.type_names().collect::<Vec<_>>(), vec!["Grid", "Text"]);
        assert!(registry.lookup("Grid").unwrap().is_container());
        assert!(registry.lookup("Grid").unwrap().declares_zone("column-0"));
    }
}
