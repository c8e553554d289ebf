//! Event bindings and the typed action payloads they carry.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Severity of a `showMessage` action; also the toast channel it goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKind {
    Success,
    Warning,
    Error,
    #[default]
    Info,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::Success),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            other => Err(format!("unknown message kind '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowMessageConfig {
    pub message: String,
    pub message_type: MessageKind,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallDataSourceConfig {
    pub data_source_id: String,
    /// Carried for the editor UI; the fetch itself uses the data source's own params.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub params: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdatePropertyConfig {
    pub target_component_id: String,
    pub target_property: String,
    pub new_value: Value,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunScriptConfig {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlComponentConfig {
    pub component_id: String,
    pub method: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoToUrlConfig {
    pub url: String,
    pub new_tab: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigateToConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CopyToClipboardConfig {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetGlobalDataConfig {
    pub key: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetLocalStorageConfig {
    pub key: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DownloadConfig {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// The eleven action kinds an event binding may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    ShowMessage,
    CallDataSource,
    UpdateProperty,
    RunScript,
    ControlComponent,
    GoToUrl,
    NavigateTo,
    CopyToClipboard,
    SetGlobalData,
    SetLocalStorage,
    Download,
}

impl ActionKind {
    pub const ALL: [Self; 11] = [
        Self::ShowMessage,
        Self::CallDataSource,
        Self::UpdateProperty,
        Self::RunScript,
        Self::ControlComponent,
        Self::GoToUrl,
        Self::NavigateTo,
        Self::CopyToClipboard,
        Self::SetGlobalData,
        Self::SetLocalStorage,
        Self::Download,
    ];

    /// Wire name used in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ShowMessage => "showMessage",
            Self::CallDataSource => "callDataSource",
            Self::UpdateProperty => "updateProperty",
            Self::RunScript => "runScript",
            Self::ControlComponent => "controlComponent",
            Self::GoToUrl => "goToUrl",
            Self::NavigateTo => "navigateTo",
            Self::CopyToClipboard => "copyToClipboard",
            Self::SetGlobalData => "setGlobalData",
            Self::SetLocalStorage => "setLocalStorage",
            Self::Download => "download",
        }
    }
}

impl FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown action type '{s}'"))
    }
}

/// One typed, side-effecting operation.
///
/// Documents written by newer editors may contain action types this runtime does not know;
/// those decode to [`Action::Unknown`] so the page still loads, and executing them only warns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAction", into = "RawAction")]
pub enum Action {
    ShowMessage(ShowMessageConfig),
    CallDataSource(CallDataSourceConfig),
    UpdateProperty(UpdatePropertyConfig),
    RunScript(RunScriptConfig),
    ControlComponent(ControlComponentConfig),
    GoToUrl(GoToUrlConfig),
    NavigateTo(NavigateToConfig),
    CopyToClipboard(CopyToClipboardConfig),
    SetGlobalData(SetGlobalDataConfig),
    SetLocalStorage(SetLocalStorageConfig),
    Download(DownloadConfig),
    Unknown { kind: String, config: Value },
}

impl Action {
    /// Known kind, or `None` for [`Action::Unknown`].
    pub fn kind(&self) -> Option<ActionKind> {
        Some(match self {
            Self::ShowMessage(_) => ActionKind::ShowMessage,
            Self::CallDataSource(_) => ActionKind::CallDataSource,
            Self::UpdateProperty(_) => ActionKind::UpdateProperty,
            Self::RunScript(_) => ActionKind::RunScript,
            Self::ControlComponent(_) => ActionKind::ControlComponent,
            Self::GoToUrl(_) => ActionKind::GoToUrl,
            Self::NavigateTo(_) => ActionKind::NavigateTo,
            Self::CopyToClipboard(_) => ActionKind::CopyToClipboard,
            Self::SetGlobalData(_) => ActionKind::SetGlobalData,
            Self::SetLocalStorage(_) => ActionKind::SetLocalStorage,
            Self::Download(_) => ActionKind::Download,
            Self::Unknown { .. } => return None,
        })
    }

    /// Wire name of the action type, including unknown ones.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Unknown { kind, .. } => kind,
            other => other.kind().map(ActionKind::as_str).unwrap_or_default(),
        }
    }
}

/// Wire shape of an action: `{ "type": "...", "config": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    config: Value,
}

impl TryFrom<RawAction> for Action {
    type Error = serde_json::Error;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let Ok(kind) = raw.kind.parse::<ActionKind>() else {
            return Ok(Self::Unknown {
                kind: raw.kind,
                config: raw.config,
            });
        };
        let config = match raw.config {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        Ok(match kind {
            ActionKind::ShowMessage => Self::ShowMessage(serde_json::from_value(config)?),
            ActionKind::CallDataSource => Self::CallDataSource(serde_json::from_value(config)?),
            ActionKind::UpdateProperty => Self::UpdateProperty(serde_json::from_value(config)?),
            ActionKind::RunScript => Self::RunScript(serde_json::from_value(config)?),
            ActionKind::ControlComponent => {
                Self::ControlComponent(serde_json::from_value(config)?)
            }
            ActionKind::GoToUrl => Self::GoToUrl(serde_json::from_value(config)?),
            ActionKind::NavigateTo => Self::NavigateTo(serde_json::from_value(config)?),
            ActionKind::CopyToClipboard => Self::CopyToClipboard(serde_json::from_value(config)?),
            ActionKind::SetGlobalData => Self::SetGlobalData(serde_json::from_value(config)?),
            ActionKind::SetLocalStorage => Self::SetLocalStorage(serde_json::from_value(config)?),
            ActionKind::Download => Self::Download(serde_json::from_value(config)?),
        })
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        let kind = action.type_name().to_string();
        let config = match action {
            Action::ShowMessage(c) => serde_json::to_value(c),
            Action::CallDataSource(c) => serde_json::to_value(c),
            Action::UpdateProperty(c) => serde_json::to_value(c),
            Action::RunScript(c) => serde_json::to_value(c),
            Action::ControlComponent(c) => serde_json::to_value(c),
            Action::GoToUrl(c) => serde_json::to_value(c),
            Action::NavigateTo(c) => serde_json::to_value(c),
            Action::CopyToClipboard(c) => serde_json::to_value(c),
            Action::SetGlobalData(c) => serde_json::to_value(c),
            Action::SetLocalStorage(c) => serde_json::to_value(c),
            Action::Download(c) => serde_json::to_value(c),
            Action::Unknown { config, .. } => Ok(config),
        };
        Self {
            kind,
            config: config.unwrap_or_default(),
        }
    }
}

/// "When `trigger` fires, run `actions`".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEventBinding")]
pub struct EventBinding {
    pub id: String,
    /// UI or lifecycle signal name (`onClick`, `onValueChange`, ...).
    pub trigger: String,
    /// Display/edit order; execution is concurrent.
    pub actions: Vec<Action>,
}

impl EventBinding {
    pub fn new(id: impl Into<String>, trigger: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            id: id.into(),
            trigger: trigger.into(),
            actions,
        }
    }
}

/// Accepts both the list form and the legacy single-`action` form.
#[derive(Deserialize)]
struct RawEventBinding {
    #[serde(default)]
    id: String,
    trigger: String,
    #[serde(default)]
    actions: Option<Vec<Action>>,
    #[serde(default)]
    action: Option<Action>,
}

impl From<RawEventBinding> for EventBinding {
    fn from(raw: RawEventBinding) -> Self {
        let actions = raw
            .actions
            .or_else(|| raw.action.map(|a| vec![a]))
            .unwrap_or_default();
        Self {
            id: raw.id,
            trigger: raw.trigger,
            actions,
        }
    }
}
