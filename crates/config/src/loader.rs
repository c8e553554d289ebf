use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::{Error, RuntimeConfig, error::excerpt_at};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_FILE_NAME: &str = "pagert.ron";

static LOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+):(\d+)").expect("location regex compiles"));

/// Parse a configuration from RON text.
pub fn load_from_str(text: &str) -> Result<RuntimeConfig, Error> {
    let config: RuntimeConfig = ron::from_str(text).map_err(|e| parse_error(text, &e))?;
    validate(&config)?;
    Ok(config)
}

/// Read and parse a configuration file.
pub fn load_from_path(path: &Path) -> Result<RuntimeConfig, Error> {
    let text = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    let config = load_from_str(&text).map_err(|e| e.with_path(path))?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Pick the file to load: `explicit` if given, else `./pagert.ron` if it exists.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    let local = PathBuf::from(DEFAULT_FILE_NAME);
    local.is_file().then_some(local)
}

/// Load from the resolved path, or fall back to defaults when there is none.
pub fn load(explicit: Option<&Path>) -> Result<RuntimeConfig, Error> {
    match resolve_config_path(explicit) {
        Some(path) => load_from_path(&path),
        None => {
            debug!("no config file; using defaults");
            Ok(RuntimeConfig::default())
        }
    }
}

/// RON errors render as `line:col: message`; lift the location into a structured error.
fn parse_error(source: &str, err: &dyn fmt::Display) -> Error {
    let message = err.to_string();
    let (line, col) = LOCATION
        .captures(&message)
        .and_then(|c| Some((c[1].parse().ok()?, c[2].parse().ok()?)))
        .unwrap_or((1, 1));
    Error::Parse {
        path: None,
        line,
        col,
        excerpt: excerpt_at(source, line, col),
        message,
    }
}

fn validate(config: &RuntimeConfig) -> Result<(), Error> {
    let invalid = |message: &str| {
        Err(Error::Validation {
            path: None,
            message: message.to_string(),
        })
    };
    if config.http.timeout_ms == 0 {
        return invalid("http.timeout_ms must be greater than zero");
    }
    if config.script.max_operations == 0 {
        return invalid("script.max_operations must be greater than zero");
    }
    if config.script.max_call_levels == 0 || config.script.max_expr_depth == 0 {
        return invalid("script call and expression depth limits must be greater than zero");
    }
    Ok(())
}
