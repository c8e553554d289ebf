//! Static per-type descriptors used by the component factory.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{ComponentType, Props};

/// Palette grouping of a component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Base,
    Layout,
    Data,
    Form,
}

/// Editor widget used for a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropKind {
    Text,
    Number,
    Select,
    Color,
    Switch,
    Textarea,
    Json,
}

/// One editable property of a component type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropSchema {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: PropKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub bindable: bool,
}

/// An event trigger offered by a component type (`onClick` for buttons).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSpec {
    pub label: String,
    pub value: String,
}

/// Descriptor the factory reads defaults from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMeta {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub can_nest: bool,
    #[serde(default)]
    pub default_props: Props,
    #[serde(default)]
    pub default_style: Props,
    #[serde(default)]
    pub props_schema: Vec<PropSchema>,
    #[serde(default)]
    pub triggers: Vec<TriggerSpec>,
}

fn map(value: Value) -> Props {
    match value {
        Value::Object(m) => m,
        _ => Props::new(),
    }
}

fn text_prop(key: &str, label: &str, default: &str, bindable: bool) -> PropSchema {
    PropSchema {
        key: key.to_string(),
        label: label.to_string(),
        kind: PropKind::Text,
        default_value: Some(Value::String(default.to_string())),
        bindable,
    }
}

fn trigger(label: &str, value: &str) -> TriggerSpec {
    TriggerSpec {
        label: label.to_string(),
        value: value.to_string(),
    }
}

impl ComponentMeta {
    /// Built-in descriptor for `component_type`.
    pub fn builtin(component_type: ComponentType) -> Self {
        use ComponentType as T;

        let (name, category, can_nest) = match component_type {
            T::Container => ("Container", Category::Base, true),
            T::Text => ("Text", Category::Base, false),
            T::Image => ("Image", Category::Base, false),
            T::Button => ("Button", Category::Base, false),
            T::Divider => ("Divider", Category::Base, false),
            T::Row => ("Row", Category::Layout, true),
            T::Col => ("Column", Category::Layout, true),
            T::Card => ("Card", Category::Layout, true),
            T::Collapse => ("Collapse", Category::Layout, true),
            T::Tabs => ("Tabs", Category::Layout, true),
            T::Table => ("Table", Category::Data, false),
            T::Statistic => ("Statistic", Category::Data, false),
            T::Chart => ("Chart", Category::Data, false),
            T::List => ("List", Category::Data, false),
            T::Input => ("Input", Category::Form, false),
            T::Select => ("Select", Category::Form, false),
            T::DatePicker => ("Date Picker", Category::Form, false),
            T::Upload => ("Upload", Category::Form, false),
            T::PageRoot => ("Page", Category::Layout, true),
        };

        let mut meta = Self {
            component_type,
            name: name.to_string(),
            category,
            can_nest,
            default_props: Props::new(),
            default_style: Props::new(),
            props_schema: Vec::new(),
            triggers: Vec::new(),
        };

        match component_type {
            T::Text => {
                meta.props_schema = vec![text_prop("content", "Content", "Text", true)];
            }
            T::Button => {
                meta.props_schema = vec![text_prop("text", "Text", "Button", true)];
                meta.triggers = vec![trigger("Click", "onClick")];
            }
            T::Image => {
                meta.default_props = map(json!({ "fit": "cover" }));
            }
            T::Card => {
                meta.default_props = map(json!({ "title": "Card", "shadow": "always" }));
                meta.default_style = map(json!({ "padding": "16px", "borderRadius": "4px" }));
            }
            T::Row => {
                meta.default_props = map(json!({ "gutter": 20 }));
            }
            T::Col => {
                meta.default_props = map(json!({ "span": 12 }));
            }
            T::Collapse => {
                meta.default_props = map(json!({
                    "model-value": "1",
                    "items": [{ "name": "1", "title": "Item 1" }],
                }));
            }
            T::Tabs => {
                meta.default_props = map(json!({
                    "model-value": "1",
                    "type": "card",
                    "tabPosition": "top",
                    "items": [
                        { "name": "1", "title": "Tab 1" },
                        { "name": "2", "title": "Tab 2" },
                    ],
                }));
                meta.default_style = map(json!({ "minHeight": "100px" }));
            }
            T::Input => {
                meta.props_schema = vec![
                    text_prop("label", "Label", "Label", true),
                    text_prop("placeholder", "Placeholder", "Please input", false),
                ];
                meta.default_style = map(json!({ "width": "300px" }));
                meta.triggers = vec![
                    trigger("Value change", "onValueChange"),
                    trigger("Focus", "onFocus"),
                    trigger("Blur", "onBlur"),
                ];
            }
            T::Select | T::DatePicker => {
                meta.triggers = vec![trigger("Value change", "onValueChange")];
            }
            _ => {}
        }
        meta
    }
}
