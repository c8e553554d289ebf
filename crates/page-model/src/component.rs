use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::EventBinding;

/// Opaque, process-unique node identifier.
pub type ComponentId = String;

/// Open string-keyed map used for `props` and `style`.
pub type Props = Map<String, Value>;

/// Reserved `props` key naming the parent slot a node occupies.
pub const SLOT_KEY: &str = "_slot";

/// Closed set of component types a page may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentType {
    Container,
    Text,
    Image,
    Button,
    Divider,
    Row,
    Col,
    Card,
    Collapse,
    Tabs,
    Table,
    Statistic,
    Chart,
    List,
    Input,
    Select,
    DatePicker,
    Upload,
    PageRoot,
}

impl ComponentType {
    /// Every type, in catalog order.
    pub const ALL: [Self; 19] = [
        Self::Container,
        Self::Text,
        Self::Image,
        Self::Button,
        Self::Divider,
        Self::Row,
        Self::Col,
        Self::Card,
        Self::Collapse,
        Self::Tabs,
        Self::Table,
        Self::Statistic,
        Self::Chart,
        Self::List,
        Self::Input,
        Self::Select,
        Self::DatePicker,
        Self::Upload,
        Self::PageRoot,
    ];

    /// Serialized name, also used as the semantic id prefix (`button`, `datePicker`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Text => "text",
            Self::Image => "image",
            Self::Button => "button",
            Self::Divider => "divider",
            Self::Row => "row",
            Self::Col => "col",
            Self::Card => "card",
            Self::Collapse => "collapse",
            Self::Tabs => "tabs",
            Self::Table => "table",
            Self::Statistic => "statistic",
            Self::Chart => "chart",
            Self::List => "list",
            Self::Input => "input",
            Self::Select => "select",
            Self::DatePicker => "datePicker",
            Self::Upload => "upload",
            Self::PageRoot => "pageRoot",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the page tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSchema {
    /// Immutable identifier stamped at creation.
    pub id: ComponentId,
    /// Per-type sequence name (`button1`) used as the root token of `{{...}}` expressions.
    #[serde(default)]
    pub semantic_id: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub props: Props,
    #[serde(default)]
    pub style: Props,
    /// Present only for nestable types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Self>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventBinding>,
}

impl ComponentSchema {
    /// Create a bare node with empty maps and no children.
    pub fn new(id: impl Into<ComponentId>, component_type: ComponentType) -> Self {
        Self {
            id: id.into(),
            semantic_id: String::new(),
            component_type,
            label: String::new(),
            props: Props::new(),
            style: Props::new(),
            children: None,
            events: Vec::new(),
        }
    }

    /// Builder-style helper giving the node an (empty) children list.
    pub fn nestable(mut self) -> Self {
        self.children.get_or_insert_with(Vec::new);
        self
    }

    /// Builder-style helper setting the semantic id.
    pub fn with_semantic_id(mut self, semantic_id: impl Into<String>) -> Self {
        self.semantic_id = semantic_id.into();
        self
    }

    /// Builder-style helper setting one prop.
    pub fn with_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }

    /// Builder-style helper appending a child (the node becomes nestable).
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Whether this node accepts children.
    pub fn can_nest(&self) -> bool {
        self.children.is_some()
    }

    /// Children as a slice (empty for leaf types).
    pub fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Slot name from `props._slot`, when set to a non-empty string.
    pub fn slot(&self) -> Option<&str> {
        self.props
            .get(SLOT_KEY)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Depth-first pre-order walk over this node and all descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Ids of this node and every descendant, in walk order.
    pub fn subtree_ids(&self) -> Vec<ComponentId> {
        self.walk().map(|n| n.id.clone()).collect()
    }
}

/// Iterator returned by [`ComponentSchema::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a ComponentSchema>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a ComponentSchema;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
