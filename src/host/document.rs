use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::control::classifier::{classify_kind, is_control_tag, matches_selector};
use crate::control::control_model::{ControlDescriptor, ControlKind};
use crate::host::traits::ControlHost;
use crate::options::options_model::Selector;

// ============================================================================
// Element tree
// ============================================================================

/// One element of an in-memory UI tree, as loaded from JSON or YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub checked: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            id: None,
            name: None,
            r#type: None,
            value: String::new(),
            checked: false,
            children: Vec::new(),
        }
    }

    pub fn input(input_type: impl Into<String>) -> Self {
        let mut el = Element::new("input");
        el.r#type = Some(input_type.into());
        el
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
        self.value = value.into();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Handle to an element: child indices from the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodeRef(Vec<usize>);

impl NodeRef {
    pub fn root() -> Self {
        NodeRef(Vec::new())
    }

    fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        NodeRef(path)
    }
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read document '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write document '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("no element with id '{0}'")]
    UnknownElement(String),
}

// ============================================================================
// Document
// ============================================================================

/// An element tree that can stand in for a live UI toolkit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Document { root }
    }

    pub fn from_json_str(content: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, DocumentError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a document; `.yaml`/`.yml` files are YAML, anything else JSON.
    pub fn load(path: &str) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_string(),
            source,
        })?;

        if is_yaml_path(path) {
            Self::from_yaml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Write the (possibly updated) tree back out, same format rules as `load`.
    pub fn save(&self, path: &str) -> Result<(), DocumentError> {
        let content = if is_yaml_path(path) {
            serde_yaml::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };

        std::fs::write(path, content).map_err(|source| DocumentError::Write {
            path: path.to_string(),
            source,
        })
    }

    pub fn root(&self) -> NodeRef {
        NodeRef::root()
    }

    pub fn root_element(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, node: &NodeRef) -> Option<&Element> {
        node.0
            .iter()
            .try_fold(&self.root, |el, &index| el.children.get(index))
    }

    fn get_mut(&mut self, node: &NodeRef) -> Option<&mut Element> {
        node.0
            .iter()
            .try_fold(&mut self.root, |el, &index| el.children.get_mut(index))
    }

    /// First element in document order with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<NodeRef> {
        let mut found = None;
        self.walk(&self.root, NodeRef::root(), &mut |el, node| {
            if found.is_none() && el.id.as_deref() == Some(id) {
                found = Some(node.clone());
            }
        });
        found
    }

    /// Like [`Document::find_by_id`], but a miss is an error.
    pub fn require_id(&self, id: &str) -> Result<NodeRef, DocumentError> {
        self.find_by_id(id)
            .ok_or_else(|| DocumentError::UnknownElement(id.to_string()))
    }

    /// Pre-order walk: an element is visited before its children.
    fn walk(&self, el: &Element, node: NodeRef, visit: &mut dyn FnMut(&Element, &NodeRef)) {
        visit(el, &node);
        for (index, child) in el.children.iter().enumerate() {
            self.walk(child, node.child(index), visit);
        }
    }
}

fn is_yaml_path(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|e| e == "yaml" || e == "yml")
}

impl ControlHost for Document {
    type Node = NodeRef;

    fn is_control(&self, node: &NodeRef) -> bool {
        self.get(node).is_some_and(|el| is_control_tag(&el.tag))
    }

    fn find_controls(&self, container: &NodeRef, selector: &Selector) -> Vec<NodeRef> {
        let Some(start) = self.get(container) else {
            return Vec::new();
        };

        let mut controls = Vec::new();
        for (index, child) in start.children.iter().enumerate() {
            self.walk(child, container.child(index), &mut |el, node| {
                if matches_selector(&el.tag, el.r#type.as_deref(), selector) {
                    controls.push(node.clone());
                }
            });
        }
        controls
    }

    fn describe(&self, control: &NodeRef) -> ControlDescriptor {
        match self.get(control) {
            Some(el) => ControlDescriptor {
                id: el.id.clone(),
                name: el.name.clone(),
                kind: classify_kind(&el.tag, el.r#type.as_deref()).unwrap_or(ControlKind::Other),
                raw_value: el.value.clone(),
                checked: el.checked,
            },
            None => ControlDescriptor::new(ControlKind::Other),
        }
    }

    fn display_value(&self, control: &NodeRef) -> String {
        self.get(control).map(|el| el.value.clone()).unwrap_or_default()
    }

    fn set_display_value(&mut self, control: &NodeRef, value: &str) {
        if let Some(el) = self.get_mut(control) {
            el.value = value.to_string();
        }
    }
}
