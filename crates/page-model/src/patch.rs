use crate::{ComponentSchema, EventBinding, Props};

/// Shallow partial update of a node: each `Some` field replaces the node's field wholesale.
///
/// `id` and `type` are deliberately absent; both are immutable after creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentPatch {
    pub semantic_id: Option<String>,
    pub label: Option<String>,
    pub props: Option<Props>,
    pub style: Option<Props>,
    pub children: Option<Vec<ComponentSchema>>,
    pub events: Option<Vec<EventBinding>>,
}

impl ComponentPatch {
    pub fn props(props: Props) -> Self {
        Self {
            props: Some(props),
            ..Self::default()
        }
    }

    pub fn style(style: Props) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }

    /// Assign every present field onto `node`.
    pub fn apply_to(self, node: &mut ComponentSchema) {
        if let Some(v) = self.semantic_id {
            node.semantic_id = v;
        }
        if let Some(v) = self.label {
            node.label = v;
        }
        if let Some(v) = self.props {
            node.props = v;
        }
        if let Some(v) = self.style {
            node.style = v;
        }
        if let Some(v) = self.children {
            node.children = Some(v);
        }
        if let Some(v) = self.events {
            node.events = v;
        }
    }
}
