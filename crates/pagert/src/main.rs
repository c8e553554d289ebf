//! Binary entrypoint for pagert.
use std::{path::Path, process, sync::Arc};

use clap::Parser;
use config::RuntimeConfig;
use event_engine::fire_trigger;
use page_state::{HttpClient, ReqwestClient};
use tracing::debug;

mod cli;
mod commands;
mod error;
mod host;

#[cfg(test)]
mod test_commands;
#[cfg(test)]
mod test_host;

use crate::{
    cli::{Cli, Command},
    error::{Error, Result},
    host::TerminalHost,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log);

    if let Err(e) = run(cli).await {
        eprintln!("{}", e.pretty());
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cfg = config::load(cli.config.as_deref())?;
    debug!(?cfg, "runtime config loaded");

    match cli.command {
        Command::Check { page } => {
            let doc = commands::load_page(&page)?;
            let warnings = commands::check_report(&doc);
            for w in &warnings {
                println!("warning: {w}");
            }
            println!(
                "OK: {} ({} components, {} data sources, {} warnings)",
                doc.name,
                doc.root_component.walk().count(),
                doc.data_sources.len(),
                warnings.len()
            );
        }
        Command::Tree { page } => {
            let doc = commands::load_page(&page)?;
            print!("{}", commands::render_tree(&doc.root_component));
        }
        Command::Resolve { page, template } => {
            let state = commands::page_state(commands::load_page(&page)?, &cfg);
            println!("{}", state.resolve_template(&template));
        }
        Command::Fetch { page, source } => {
            let state = commands::page_state(commands::load_page(&page)?, &cfg);
            let http = ReqwestClient::new(&cfg.http)?;
            let data = commands::fetch_source(&state, &source, &http).await?;
            print_json(&data);
        }
        Command::Fire {
            page,
            component,
            trigger,
            auto_fetch,
        } => fire(&cfg, &page, &component, &trigger, auto_fetch).await?,
    }
    Ok(())
}

async fn fire(
    cfg: &RuntimeConfig,
    page: &Path,
    component: &str,
    trigger: &str,
    auto_fetch: bool,
) -> Result<()> {
    let state = commands::page_state(commands::load_page(page)?, cfg);
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestClient::new(&cfg.http)?);
    if auto_fetch {
        state.fetch_auto_sources(&*http).await;
    }
    let host = Arc::new(TerminalHost::new(cfg.storage.path.clone()));
    let ctx = commands::event_context(state, cfg, http, host.clone());

    let ran = fire_trigger(&ctx, component, trigger).await;
    if ran == 0 {
        return Err(Error::NotFound(format!(
            "no '{trigger}' bindings on component '{component}'"
        )));
    }
    println!("fired {ran} binding(s)");
    if let Some(text) = host.clipboard() {
        println!("clipboard: {text}");
    }
    Ok(())
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("Failed to serialize result: {e}"),
    }
}
