use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::value::{PropertyValue, Props};

/// Identifier of a block instance, unique within one document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BlockId(pub String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Address of one named region owned by one block: `<blockId>:<zoneName>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ZoneKey(pub String);

impl ZoneKey {
    pub const SEPARATOR: char = ':';

    pub fn new(owner: &BlockId, zone: &str) -> Self {
        Self(format!("{}{}{}", owner.as_str(), Self::SEPARATOR, zone))
    }

    /// Split into `(owner id, zone name)`.
    ///
    /// Zone names never contain `:`, block ids might, so the split is at the last
    /// separator. Returns `None` for a malformed key.
    pub fn split(&self) -> Option<(&str, &str)> {
        self.0
            .rsplit_once(Self::SEPARATOR)
            .filter(|(owner, zone)| !owner.is_empty() && !zone.is_empty())
    }

    pub fn owner(&self) -> Option<&str> {
        self.split().map(|(owner, _)| owner)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ZoneKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// One typed block with its property bag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockInstance {
    #[serde(rename = "type")]
    pub block_type: String,
    pub props: Props,
    pub id: BlockId,
    /// Keys this version does not understand, kept for re-encoding.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl BlockInstance {
    pub fn new(id: impl Into<String>, block_type: impl Into<String>, props: Props) -> Self {
        Self {
            block_type: block_type.into(),
            props,
            id: BlockId::new(id),
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RootData {
    pub props: Props,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A complete page: root properties, top-level content and the zone map.
///
/// Zone contents are stored flat, keyed by [`ZoneKey`], rather than nested inside
/// their owners. Documents are immutable snapshots from the engine's point of view;
/// an edit replaces the whole value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub root: RootData,
    pub content: Vec<BlockInstance>,
    pub zones: BTreeMap<ZoneKey, Vec<BlockInstance>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Document {
    /// A blank page titled "New Page".
    pub fn empty() -> Self {
        let mut root = RootData::default();
        root.props
            .insert("title".to_string(), PropertyValue::from("New Page"));
        Self {
            root,
            ..Self::default()
        }
    }

    /// Every block in the document: content first, then zones in key order.
    pub fn iter_blocks(&self) -> impl Iterator<Item = &BlockInstance> {
        self.content
            .iter()
            .chain(self.zones.values().flat_map(|blocks| blocks.iter()))
    }

    pub fn block_count(&self) -> usize {
        self.iter_blocks().count()
    }

    pub fn find_block(&self, id: &str) -> Option<&BlockInstance> {
        self.iter_blocks().find(|block| block.id.as_str() == id)
    }

    pub fn zone(&self, owner: &BlockId, zone: &str) -> Option<&[BlockInstance]> {
        self.zones
            .get(&ZoneKey::new(owner, zone))
            .map(Vec::as_slice)
    }
}
