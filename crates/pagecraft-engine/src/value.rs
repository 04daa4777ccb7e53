use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Number, Value};

/// Property bag of a block or of the page root.
///
/// A `BTreeMap` keeps keys sorted so encoding and rendering are deterministic.
pub type Props = BTreeMap<String, PropertyValue>;

/// A serializable property value.
///
/// This is the closed subset of JSON that documents may carry. There is no null:
/// an absent key means "use the default".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Number(Number),
    Bool(bool),
    List(Vec<PropertyValue>),
    Map(Props),
}

/// Why a JSON value could not become a [`PropertyValue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotAPropertyValue {
    /// Path below the converted value, e.g. `features[2].title`.
    pub path: String,
}

impl PropertyValue {
    /// Convert a JSON value, rejecting `null` anywhere inside it.
    pub fn from_json(value: Value) -> Result<Self, NotAPropertyValue> {
        match value {
            Value::Null => Err(NotAPropertyValue {
                path: String::new(),
            }),
            Value::Bool(b) => Ok(Self::Bool(b)),
            Value::Number(n) => Ok(Self::Number(n)),
            Value::String(s) => Ok(Self::String(s)),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    Self::from_json(item).map_err(|e| NotAPropertyValue {
                        path: format!("[{i}]{}", e.path),
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            Value::Object(entries) => entries
                .into_iter()
                .map(|(key, item)| {
                    Self::from_json(item)
                        .map(|v| (key.clone(), v))
                        .map_err(|e| NotAPropertyValue {
                            path: format!(".{key}{}", e.path),
                        })
                })
                .collect::<Result<Props, _>>()
                .map(Self::Map),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[PropertyValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Props> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Short type name used in validation messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<u64> for PropertyValue {
    fn from(n: u64) -> Self {
        Self::Number(Number::from(n))
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(items: Vec<PropertyValue>) -> Self {
        Self::List(items)
    }
}

impl From<Props> for PropertyValue {
    fn from(map: Props) -> Self {
        Self::Map(map)
    }
}

/// Typed reads over a property bag with fallbacks for missing or mistyped keys.
pub trait PropsExt {
    fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str;
    fn bool_or(&self, key: &str, default: bool) -> bool;
    fn u64_or(&self, key: &str, default: u64) -> u64;
    fn list(&self, key: &str) -> &[PropertyValue];
    fn map(&self, key: &str) -> Option<&Props>;
}

impl PropsExt for Props {
    fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).and_then(PropertyValue::as_str).unwrap_or(default)
    }

    fn bool_or(&self, key: &str, default: bool) -> bool {
        self.get(key)
            .and_then(PropertyValue::as_bool)
            .unwrap_or(default)
    }

    fn u64_or(&self, key: &str, default: u64) -> u64 {
        self.get(key).and_then(PropertyValue::as_u64).unwrap_or(default)
    }

    fn list(&self, key: &str) -> &[PropertyValue] {
        self.get(key)
            .and_then(PropertyValue::as_list)
            .unwrap_or_default()
    }

    fn map(&self, key: &str) -> Option<&Props> {
        self.get(key).and_then(PropertyValue::as_map)
    }
}

/// Shallow merge: every key of `overrides` replaces the default of the same name.
pub fn merge_props(defaults: &Props, overrides: &Props) -> Props {
    let mut merged = defaults.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Build a [`Props`] map from literal pairs.
///
/// ```
/// use pagecraft_engine::props;
/// let p = props! { "title" => "Hello", "columns" => 2u64 };
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! props {
    () => { $crate::value::Props::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::value::Props::new();
        $(map.insert(::std::string::String::from($key), $crate::value::PropertyValue::from($value));)+
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn json_null_is_rejected_with_path() {
        let err = PropertyValue::from_json(json!({"items": [1, null]})).unwrap_err();
        assert_eq!(err.path, ".items[1]");
    }

    #[test]
    fn integers_stay_integers() {
        let value = PropertyValue::from_json(json!(3)).unwrap();
        assert_eq!(value.as_u64(), Some(3));
        assert_eq!(serde_json::to_string(&value).unwrap(), "3");
    }

    #[test]
    fn nested_values_convert() {
        let value = PropertyValue::from_json(json!([{"icon": "zap", "on": true}])).unwrap();
        let first = &value.as_list().unwrap()[0];
        assert_eq!(first.as_map().unwrap().str_or("icon", ""), "zap");
        assert!(first.as_map().unwrap().bool_or("on", false));
    }

    #[test]
    fn merge_overrides_win_and_defaults_fill_gaps() {
        let defaults = props! { "gap" => "medium", "columns" => 2u64 };
        let overrides = props! { "columns" => 3u64, "extra" => true };

        let merged = merge_props(&defaults, &overrides);

        assert_eq!(
            merged,
            props! { "gap" => "medium", "columns" => 3u64, "extra" => true }
        );
    }

    #[test]
    fn accessors_fall_back_on_wrong_type() {
        let p = props! { "columns" => "two", "title" => 5u64 };
        assert_eq!(p.u64_or("columns", 2), 2);
        assert_eq!(p.str_or("title", "fallback"), "fallback");
        assert!(p.list("missing").is_empty());
        assert!(p.map("title").is_none());
    }
}
