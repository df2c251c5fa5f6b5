use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The flavour of an input control, as far as value extraction cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Text,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Other,
}

impl ControlKind {
    /// Checkboxes and radios resolve their name from `name` first.
    pub fn is_checkable(self) -> bool {
        matches!(self, ControlKind::Checkbox | ControlKind::Radio)
    }
}

/// Read-only view of a control, produced by the host toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDescriptor {
    pub id: Option<String>,
    pub name: Option<String>,
    pub kind: ControlKind,
    pub raw_value: String,

    /// Only meaningful for checkboxes and radios
    pub checked: bool,
}

impl ControlDescriptor {
    pub fn new(kind: ControlKind) -> Self {
        ControlDescriptor {
            id: None,
            name: None,
            kind,
            raw_value: String::new(),
            checked: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.raw_value = value.into();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// `id`, treating an empty attribute as absent.
    pub fn id_attr(&self) -> Option<&str> {
        self.id.as_deref().filter(|s| !s.is_empty())
    }

    /// `name`, treating an empty attribute as absent.
    pub fn name_attr(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }
}

/// A collected value.
///
/// `NotANumber` is what integer coercion produces for text with no leading
/// digits; it serializes as `null` and is never produced by deserializing.
/// `Json` carries configured defaults that fit no other variant (booleans,
/// floats, objects, `null`) through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    List(Vec<FieldValue>),
    #[serde(skip_deserializing)]
    NotANumber,
    Json(serde_json::Value),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn flag(on: bool) -> Self {
        FieldValue::Int(if on { 1 } else { 0 })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

/// Resolved field name → value, one entry per name.
pub type ResultMap = BTreeMap<String, FieldValue>;
