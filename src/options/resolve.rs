use std::collections::BTreeMap;
use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

use crate::collect::error::CollectError;
use crate::control::control_model::FieldValue;
use crate::options::options_model::{CollectOptions, Selector};

/// A set of lower-cased field names parsed from a comma-delimited list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    names: HashSet<String>,
    all: bool,
}

impl FieldSet {
    /// Parse `"a, B,c"` into `{a, b, c}`. Blank entries are dropped.
    pub fn parse(list: &str) -> Self {
        let names = list
            .to_lowercase()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        FieldSet { names, all: false }
    }

    /// Like [`FieldSet::parse`], but a leading `*` entry matches every name.
    pub fn parse_with_wildcard(list: &str) -> Self {
        let all = list.split(',').next().map(str::trim) == Some("*");
        let mut set = Self::parse(list);
        set.names.remove("*");
        set.all = all;
        set
    }

    /// `name_lc` must already be lower-cased.
    pub fn contains(&self, name_lc: &str) -> bool {
        self.all || self.names.contains(name_lc)
    }

    pub fn is_wildcard(&self) -> bool {
        self.all
    }

    pub fn is_empty(&self) -> bool {
        !self.all && self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

/// Fully resolved options for one collection call.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub selector: Selector,
    pub defaults: BTreeMap<String, FieldValue>,
    pub skip: FieldSet,
    pub multi_checkboxes: FieldSet,
    pub value_checkboxes: FieldSet,
    pub no_trim_fields: FieldSet,
    pub int_fields: FieldSet,
    pub name_strip_pattern: Option<Regex>,
    pub name_add_prefix: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            selector: Selector::default(),
            defaults: BTreeMap::new(),
            skip: FieldSet::default(),
            multi_checkboxes: FieldSet::default(),
            value_checkboxes: FieldSet::default(),
            no_trim_fields: FieldSet::default(),
            int_fields: FieldSet::default(),
            name_strip_pattern: None,
            name_add_prefix: String::new(),
        }
    }
}

impl Configuration {
    /// Layer `call` over `process` over the built-in defaults.
    ///
    /// Fails only when the strip pattern does not compile.
    pub fn resolve(
        process: &CollectOptions,
        call: Option<&CollectOptions>,
    ) -> Result<Self, CollectError> {
        let merged = process.clone().merge_over(CollectOptions::builtin());
        let merged = match call {
            Some(call) => call.clone().merge_over(merged),
            None => merged,
        };
        Self::from_options(merged)
    }

    /// Build from a single options layer; unset fields take built-in values.
    pub fn from_options(options: CollectOptions) -> Result<Self, CollectError> {
        let options = options.merge_over(CollectOptions::builtin());

        let name_strip_pattern = match options.name_strip_regex.as_deref() {
            None | Some("") => None,
            Some(pattern) => Some(compile_strip_pattern(pattern)?),
        };

        Ok(Configuration {
            selector: options.selector.unwrap_or_default(),
            defaults: options.defaults.unwrap_or_default(),
            skip: FieldSet::parse(options.skip.as_deref().unwrap_or("")),
            multi_checkboxes: FieldSet::parse(options.multi_checkboxes.as_deref().unwrap_or("")),
            value_checkboxes: FieldSet::parse_with_wildcard(
                options.value_checkboxes.as_deref().unwrap_or(""),
            ),
            no_trim_fields: FieldSet::parse(options.no_trim_fields.as_deref().unwrap_or("")),
            int_fields: FieldSet::parse(options.int_fields.as_deref().unwrap_or("")),
            name_strip_pattern,
            name_add_prefix: options.name_add_prefix.unwrap_or_default(),
        })
    }
}

fn compile_strip_pattern(pattern: &str) -> Result<Regex, CollectError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| CollectError::InvalidStripPattern {
            pattern: pattern.to_string(),
            source,
        })
}
