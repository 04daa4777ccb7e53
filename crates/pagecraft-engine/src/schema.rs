//! Editable-field descriptions for block properties.
//!
//! The editing surface builds its forms from these. The resolver checks every
//! block's own props against them and reports what does not fit.

use std::fmt;

use crate::value::{PropertyValue, Props};

#[derive(Debug, Clone, PartialEq)]
pub struct FieldOption {
    pub label: &'static str,
    pub value: PropertyValue,
}

impl FieldOption {
    pub fn new(label: &'static str, value: impl Into<PropertyValue>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Textarea,
    Radio(Vec<FieldOption>),
    Select(Vec<FieldOption>),
    Array {
        fields: Vec<FieldSchema>,
        default_item: Props,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSchema {
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
        }
    }

    pub fn textarea(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Textarea,
        }
    }

    pub fn radio(name: &'static str, label: &'static str, options: Vec<FieldOption>) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Radio(options),
        }
    }

    pub fn select(name: &'static str, label: &'static str, options: Vec<FieldOption>) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Select(options),
        }
    }

    pub fn array(
        name: &'static str,
        label: &'static str,
        fields: Vec<FieldSchema>,
        default_item: Props,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Array {
                fields,
                default_item,
            },
        }
    }

    /// Values a radio or select field accepts.
    pub fn options(&self) -> Option<&[FieldOption]> {
        match &self.kind {
            FieldKind::Radio(options) | FieldKind::Select(options) => Some(options),
            _ => None,
        }
    }
}

/// Yes/No radio options used by several blocks.
pub fn yes_no() -> Vec<FieldOption> {
    vec![FieldOption::new("Yes", true), FieldOption::new("No", false)]
}

/// One property that does not fit its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// Property path, e.g. `features[1].icon`.
    pub path: String,
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Check `props` against `fields`.
///
/// Missing keys are fine since defaults fill them in. Keys without a field are
/// ignored; the editing surface keeps bookkeeping such as `id` inside props.
pub fn validate_props(fields: &[FieldSchema], props: &Props) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();
    check_fields(fields, props, "", &mut violations);
    violations
}

fn check_fields(
    fields: &[FieldSchema],
    props: &Props,
    prefix: &str,
    violations: &mut Vec<SchemaViolation>,
) {
    for field in fields {
        let Some(value) = props.get(field.name) else {
            continue;
        };
        let path = format!("{prefix}{}", field.name);

        match &field.kind {
            FieldKind::Text | FieldKind::Textarea => {
                if value.as_str().is_none() {
                    violations.push(SchemaViolation {
                        message: format!("expected string, found {}", value.kind_name()),
                        path,
                    });
                }
            }
            FieldKind::Radio(options) | FieldKind::Select(options) => {
                if !options.iter().any(|option| &option.value == value) {
                    violations.push(SchemaViolation {
                        message: format!("{} is not one of the allowed options", json(value)),
                        path,
                    });
                }
            }
            FieldKind::Array { fields, .. } => {
                let Some(items) = value.as_list() else {
                    violations.push(SchemaViolation {
                        message: format!("expected list, found {}", value.kind_name()),
                        path,
                    });
                    continue;
                };
                for (i, item) in items.iter().enumerate() {
                    match item.as_map() {
                        Some(map) => {
                            check_fields(fields, map, &format!("{path}[{i}]."), violations)
                        }
                        None => violations.push(SchemaViolation {
                            path: format!("{path}[{i}]"),
                            message: format!("expected map, found {}", item.kind_name()),
                        }),
                    }
                }
            }
        }
    }
}

fn json(value: &PropertyValue) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| value.kind_name().to_string())
}
