use crate::control::control_model::{ControlDescriptor, ControlKind};
use crate::options::resolve::Configuration;

/// A control's resolved field name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldName {
    /// Key used in the result map
    pub key: String,

    /// Fully lower-cased key, used for option-list lookups
    pub lower: String,
}

impl FieldName {
    fn new(key: String) -> Self {
        let lower = key.to_lowercase();
        FieldName { key, lower }
    }
}

/// Pick the attribute a control's field name comes from.
///
/// Checkboxes and radios prefer `name`, everything else prefers `id`. A radio
/// without a `name` cannot form a group and yields `None`.
pub fn raw_name(control: &ControlDescriptor) -> Option<&str> {
    match control.kind {
        ControlKind::Radio => control.name_attr(),
        ControlKind::Checkbox => control.name_attr().or_else(|| control.id_attr()),
        _ => control.id_attr().or_else(|| control.name_attr()),
    }
}

/// Resolve a control's field name: strip, prefix, lower-case the first char.
pub fn resolve_name(control: &ControlDescriptor, config: &Configuration) -> Option<FieldName> {
    let raw = raw_name(control)?;
    let key = rewrite_name(raw, config);

    if key.is_empty() {
        return None;
    }

    Some(FieldName::new(key))
}

/// Apply the strip pattern and prefix to a raw name, then lower-case its
/// first character. Exposed on its own for callers building keys by hand.
pub fn rewrite_name(raw: &str, config: &Configuration) -> String {
    let stripped = match &config.name_strip_pattern {
        Some(pattern) => pattern.replace_all(raw, "").into_owned(),
        None => raw.to_string(),
    };

    let prefixed = format!("{}{}", config.name_add_prefix, stripped);
    lower_first(&prefixed)
}

/// `"FirstName"` → `"firstName"`; the rest of the string is untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
