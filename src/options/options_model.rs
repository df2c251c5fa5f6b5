use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::control::control_model::FieldValue;

// ============================================================================
// Discovery selector
// ============================================================================

/// Which descendants of a container count as controls.
///
/// Handed to the host as-is; the built-in document host reads it as "these
/// tags, minus `<input>`s of these types".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,

    #[serde(default = "default_exclude_types", rename = "excludeTypes")]
    pub exclude_types: Vec<String>,
}

impl Default for Selector {
    fn default() -> Self {
        Self {
            tags: default_tags(),
            exclude_types: default_exclude_types(),
        }
    }
}

fn default_tags() -> Vec<String> {
    ["input", "select", "textarea"].iter().map(|s| s.to_string()).collect()
}

fn default_exclude_types() -> Vec<String> {
    ["button", "submit", "reset", "image", "file"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// ============================================================================
// Partial options (caller-supplied, process-wide, built-in)
// ============================================================================

/// A partial set of collection options.
///
/// Every field is optional so that layers can be merged: an unset field falls
/// through to the layer below. List options are comma-delimited strings and
/// are replaced whole, never merged element-wise. Unknown keys are ignored
/// when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<BTreeMap<String, FieldValue>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<String>,

    #[serde(alias = "multiCheckboxNames", skip_serializing_if = "Option::is_none")]
    pub multi_checkboxes: Option<String>,

    #[serde(alias = "valueCheckboxNames", skip_serializing_if = "Option::is_none")]
    pub value_checkboxes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_trim_fields: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub int_fields: Option<String>,

    #[serde(alias = "nameStripPattern", skip_serializing_if = "Option::is_none")]
    pub name_strip_regex: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_add_prefix: Option<String>,
}

impl CollectOptions {
    /// The bottom layer: every option set to its documented default.
    pub fn builtin() -> Self {
        CollectOptions {
            selector: Some(Selector::default()),
            defaults: Some(BTreeMap::new()),
            skip: Some(String::new()),
            multi_checkboxes: Some(String::new()),
            value_checkboxes: Some(String::new()),
            no_trim_fields: Some(String::new()),
            int_fields: Some(String::new()),
            name_strip_regex: Some(String::new()),
            name_add_prefix: Some(String::new()),
        }
    }

    /// Shallow merge: options set on `self` win, the rest come from `base`.
    pub fn merge_over(self, base: CollectOptions) -> CollectOptions {
        CollectOptions {
            selector: self.selector.or(base.selector),
            defaults: self.defaults.or(base.defaults),
            skip: self.skip.or(base.skip),
            multi_checkboxes: self.multi_checkboxes.or(base.multi_checkboxes),
            value_checkboxes: self.value_checkboxes.or(base.value_checkboxes),
            no_trim_fields: self.no_trim_fields.or(base.no_trim_fields),
            int_fields: self.int_fields.or(base.int_fields),
            name_strip_regex: self.name_strip_regex.or(base.name_strip_regex),
            name_add_prefix: self.name_add_prefix.or(base.name_add_prefix),
        }
    }

    // Builder helpers, mostly for callers assembling options in code.

    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.defaults
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = Some(selector);
        self
    }

    pub fn with_skip(mut self, list: impl Into<String>) -> Self {
        self.skip = Some(list.into());
        self
    }

    pub fn with_multi_checkboxes(mut self, list: impl Into<String>) -> Self {
        self.multi_checkboxes = Some(list.into());
        self
    }

    pub fn with_value_checkboxes(mut self, list: impl Into<String>) -> Self {
        self.value_checkboxes = Some(list.into());
        self
    }

    pub fn with_no_trim_fields(mut self, list: impl Into<String>) -> Self {
        self.no_trim_fields = Some(list.into());
        self
    }

    pub fn with_int_fields(mut self, list: impl Into<String>) -> Self {
        self.int_fields = Some(list.into());
        self
    }

    pub fn with_name_strip_regex(mut self, pattern: impl Into<String>) -> Self {
        self.name_strip_regex = Some(pattern.into());
        self
    }

    pub fn with_name_add_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_add_prefix = Some(prefix.into());
        self
    }
}
