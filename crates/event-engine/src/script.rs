//! Sandboxed `runScript` bodies.
//!
//! Scripts are Rhai. They see one variable, `ctx`, with read access to the page and a set of
//! write methods that queue [`ScriptEffect`]s. The queue is handed back only when the script
//! finishes cleanly; a script that fails part way changes nothing.
//!
//! ```rhai
//! let q = ctx.get("input1.value");
//! if q == "" {
//!     ctx.toast("warning", "Type something first");
//! } else {
//!     ctx.set_state("results", "value", `Searching for ${q}`);
//!     ctx.call_data_source("ds-search");
//! }
//! ```

use std::{mem, result::Result as StdResult, sync::Arc};

use config::{ScriptConfig, excerpt_at};
use page_model::MessageKind;
use page_state::PageState;
use parking_lot::Mutex;
use rhai::{
    Dynamic, Engine, EvalAltResult, Position, Scope,
    serde::{from_dynamic, to_dynamic},
};
use serde_json::Value;
use tracing::{debug, info};

use crate::{Error, Result};

type RhaiResult<T> = StdResult<T, Box<EvalAltResult>>;

/// A page mutation requested by a script, applied after the script returns.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptEffect {
    /// Write form state for a component.
    SetState {
        component_id: String,
        key: String,
        value: Value,
    },
    /// Set a single prop on a component.
    UpdateProp {
        component_id: String,
        prop: String,
        value: Value,
    },
    /// Show a notification.
    Toast { kind: MessageKind, message: String },
    /// Fetch a data source.
    CallDataSource { data_source_id: String },
}

/// Executes `runScript` code.
pub trait ScriptHost: Send + Sync {
    /// Run `code` against `page` and return the effects it queued, in call order.
    fn run(&self, code: &str, page: &PageState) -> Result<Vec<ScriptEffect>>;
}

#[derive(Default)]
struct Shared {
    effects: Vec<ScriptEffect>,
}

/// The `ctx` value scripts see.
#[derive(Clone)]
struct ScriptCtx {
    page: PageState,
    shared: Arc<Mutex<Shared>>,
}

impl ScriptCtx {
    fn push_effect(&self, effect: ScriptEffect) {
        self.shared.lock().effects.push(effect);
    }

    fn take_effects(&self) -> Vec<ScriptEffect> {
        mem::take(&mut self.shared.lock().effects)
    }
}

/// Rhai-backed [`ScriptHost`] with operation and depth limits.
pub struct RhaiScriptHost {
    engine: Engine,
}

impl Default for RhaiScriptHost {
    fn default() -> Self {
        Self::new(&ScriptConfig::default())
    }
}

impl RhaiScriptHost {
    pub fn new(limits: &ScriptConfig) -> Self {
        let mut engine = Engine::new();
        configure_engine(&mut engine, limits);
        register_ctx(&mut engine);
        Self { engine }
    }
}

impl ScriptHost for RhaiScriptHost {
    fn run(&self, code: &str, page: &PageState) -> Result<Vec<ScriptEffect>> {
        let ctx = ScriptCtx {
            page: page.clone(),
            shared: Arc::new(Mutex::new(Shared::default())),
        };
        let mut scope = Scope::new();
        scope.push("ctx", ctx.clone());
        self.engine
            .run_with_scope(&mut scope, code)
            .map_err(|e| Error::Script(format_script_error(code, &e)))?;
        let effects = ctx.take_effects();
        debug!(effects = effects.len(), "script finished");
        Ok(effects)
    }
}

fn configure_engine(engine: &mut Engine, limits: &ScriptConfig) {
    engine.on_print(|s| info!(target: "event_engine::script", "{}", s));
    engine.on_debug(|s, src, pos| {
        debug!(target: "event_engine::script", "{} @ {:?}:{:?}", s, src, pos);
    });

    engine.set_max_operations(limits.max_operations);
    engine.set_max_call_levels(limits.max_call_levels);
    engine.set_max_expr_depths(limits.max_expr_depth, (limits.max_expr_depth / 2).max(1));
}

fn register_ctx(engine: &mut Engine) {
    engine.register_type_with_name::<ScriptCtx>("Ctx");

    engine.register_fn(
        "get",
        |ctx: &mut ScriptCtx, path: &str| -> RhaiResult<Dynamic> {
            match ctx.page.resolve_variable(path) {
                Some(v) => to_dynamic(v),
                None => Ok(Dynamic::UNIT),
            }
        },
    );
    engine.register_fn("resolve", |ctx: &mut ScriptCtx, template: &str| -> String {
        ctx.page.resolve_template(template)
    });
    engine.register_fn(
        "state",
        |ctx: &mut ScriptCtx,
         component_id: &str,
         key: &str|
         -> RhaiResult<Dynamic> {
            let value = ctx.page.forms().get(component_id, key).cloned();
            match value {
                Some(v) => to_dynamic(v),
                None => Ok(Dynamic::UNIT),
            }
        },
    );
    engine.register_fn(
        "set_state",
        |ctx: &mut ScriptCtx,
         component_id: &str,
         key: &str,
         value: Dynamic|
         -> RhaiResult<()> {
            ctx.push_effect(ScriptEffect::SetState {
                component_id: component_id.to_string(),
                key: key.to_string(),
                value: from_dynamic(&value)?,
            });
            Ok(())
        },
    );
    engine.register_fn(
        "update_prop",
        |ctx: &mut ScriptCtx,
         component_id: &str,
         prop: &str,
         value: Dynamic|
         -> RhaiResult<()> {
            ctx.push_effect(ScriptEffect::UpdateProp {
                component_id: component_id.to_string(),
                prop: prop.to_string(),
                value: from_dynamic(&value)?,
            });
            Ok(())
        },
    );
    engine.register_fn("toast", |ctx: &mut ScriptCtx, kind: &str, message: &str| {
        ctx.push_effect(ScriptEffect::Toast {
            kind: kind.parse().unwrap_or_default(),
            message: message.to_string(),
        });
    });
    engine.register_fn("call_data_source", |ctx: &mut ScriptCtx, id: &str| {
        ctx.push_effect(ScriptEffect::CallDataSource {
            data_source_id: id.to_string(),
        });
    });
}

fn format_script_error(code: &str, err: &EvalAltResult) -> String {
    match pos_to_line_col(err.position()) {
        Some((line, col)) => format!(
            "Script error at line {}, column {}\n{}\n{}",
            line,
            col,
            err,
            excerpt_at(code, line, col)
        ),
        None => format!("Script error\n{}", err),
    }
}

/// Convert a Rhai `Position` into a 1-based (line, col) pair.
fn pos_to_line_col(pos: Position) -> Option<(usize, usize)> {
    let line = pos.line()?;
    let col = pos.position().unwrap_or(1);
    Some((line.max(1), col.max(1)))
}
