//! JSON import/export of [`Document`]s.
//!
//! `decode` checks the shape of the text before it becomes a document. It does not
//! check id uniqueness, zone addressing or property schemas; resolution reports
//! those, so partially broken documents can still be loaded and repaired.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::document::{BlockId, BlockInstance, Document, RootData, ZoneKey};
use crate::value::{PropertyValue, Props};

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Invalid JSON syntax: {0}")]
    Syntax(#[source] serde_json::Error),
    #[error("Invalid document shape at {path}: {message}")]
    Shape { path: String, message: String },
    #[error("Failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),
}

impl CodecError {
    fn shape(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Shape {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::Shape { .. } | Self::Syntax(_))
    }
}

/// Parse document text.
pub fn decode(text: &str) -> Result<Document, CodecError> {
    let value: Value = serde_json::from_str(text).map_err(CodecError::Syntax)?;
    decode_value(value)
}

/// Build a document from an already-parsed JSON value.
pub fn decode_value(value: Value) -> Result<Document, CodecError> {
    let Value::Object(mut top) = value else {
        return Err(CodecError::shape("$", "document must be an object"));
    };

    let content = match top.remove("content") {
        Some(Value::Array(items)) => decode_blocks(items, "$.content")?,
        Some(_) => return Err(CodecError::shape("$.content", "must be an array")),
        None => return Err(CodecError::shape("$", r#"must contain a "content" array"#)),
    };

    let root = match top.remove("root") {
        Some(value) => decode_root(value)?,
        None => RootData::default(),
    };

    let zones = match top.remove("zones") {
        Some(Value::Object(entries)) => {
            let mut zones = BTreeMap::new();
            for (key, blocks) in entries {
                let path = format!("$.zones[{key:?}]");
                let Value::Array(items) = blocks else {
                    return Err(CodecError::shape(path, "zone must be an array"));
                };
                zones.insert(ZoneKey(key), decode_blocks(items, &path)?);
            }
            zones
        }
        Some(_) => return Err(CodecError::shape("$.zones", "must be an object")),
        None => BTreeMap::new(),
    };

    Ok(Document {
        root,
        content,
        zones,
        extra: top.into_iter().collect(),
    })
}

/// Pretty-printed JSON with two-space indentation.
pub fn encode(document: &Document) -> Result<String, CodecError> {
    serde_json::to_string_pretty(document).map_err(CodecError::Encode)
}

pub fn encode_compact(document: &Document) -> Result<String, CodecError> {
    serde_json::to_string(document).map_err(CodecError::Encode)
}

fn decode_root(value: Value) -> Result<RootData, CodecError> {
    let Value::Object(mut fields) = value else {
        return Err(CodecError::shape("$.root", "must be an object"));
    };
    let props = decode_props(fields.remove("props"), "$.root.props")?;
    Ok(RootData {
        props,
        extra: fields.into_iter().collect(),
    })
}

fn decode_blocks(items: Vec<Value>, path: &str) -> Result<Vec<BlockInstance>, CodecError> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| decode_block(item, &format!("{path}[{i}]")))
        .collect()
}

fn decode_block(value: Value, path: &str) -> Result<BlockInstance, CodecError> {
    let Value::Object(mut fields) = value else {
        return Err(CodecError::shape(path, "block must be an object"));
    };

    let block_type = match fields.remove("type") {
        Some(Value::String(name)) => name,
        Some(_) => return Err(CodecError::shape(format!("{path}.type"), "must be a string")),
        None => return Err(CodecError::shape(path, r#"block is missing "type""#)),
    };

    let props = decode_props(fields.remove("props"), &format!("{path}.props"))?;

    let id = match fields.remove("id") {
        Some(Value::String(id)) => id,
        Some(_) => return Err(CodecError::shape(format!("{path}.id"), "must be a string")),
        None => match props.get("id") {
            Some(PropertyValue::String(id)) => id.clone(),
            _ => generate_id(&block_type),
        },
    };

    Ok(BlockInstance {
        block_type,
        props,
        id: BlockId(id),
        extra: fields.into_iter().collect(),
    })
}

fn decode_props(value: Option<Value>, path: &str) -> Result<Props, CodecError> {
    let entries = match value {
        Some(Value::Object(entries)) => entries,
        Some(_) => return Err(CodecError::shape(path, "must be an object")),
        None => Map::new(),
    };

    entries
        .into_iter()
        .map(|(key, value)| {
            PropertyValue::from_json(value)
                .map(|v| (key.clone(), v))
                .map_err(|e| {
                    CodecError::shape(format!("{path}.{key}{}", e.path), "null is not allowed")
                })
        })
        .collect()
}

fn generate_id(block_type: &str) -> String {
    format!("{block_type}-{}", Uuid::new_v4())
}
