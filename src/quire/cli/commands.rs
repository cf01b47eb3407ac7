//! # CLI Layer
//!
//! The only place that knows about stdout, stderr and exit codes. It parses
//! arguments, resolves settings (flag > config file > default), builds the
//! [`QuireApi`], dispatches, and renders each `CmdResult`.

use super::browse::run_loop;
use super::render::{
    print_messages, render_full_documents, render_settings, render_text_list, render_tree,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use quire::api::{ConfigAction, QuireApi};
use quire::config::{QuireConfig, Settings};
use quire::error::Result;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = config_location(&cli);
    let config = load_config(&cli, config_path.as_deref())?;
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let settings = Settings::resolve(&config, cli.overrides(), cwd);
    debug!(?settings, "resolved settings");

    // Config inspection works even when the directory does not exist.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&settings, config_path, key.clone(), value.clone());
    }

    let mut api = QuireApi::new(settings)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&api),
        Some(Commands::View { selectors, peek }) => handle_view(&api, selectors, peek),
        Some(Commands::Open { selector }) => handle_open(&mut api, selector),
        Some(Commands::Path { selectors }) => handle_paths(&api, selectors),
        Some(Commands::Export { output }) => handle_export(&api, output),
        Some(Commands::Browse) => handle_browse(&mut api),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

/// stderr logger; `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn config_location(cli: &Cli) -> Option<PathBuf> {
    if cli.no_config {
        return None;
    }
    cli.config.clone().or_else(QuireConfig::default_path)
}

fn load_config(cli: &Cli, path: Option<&Path>) -> Result<QuireConfig> {
    match (path, cli.config.is_some()) {
        (None, _) => Ok(QuireConfig::default()),
        (Some(path), true) => QuireConfig::load(path),
        (Some(path), false) => QuireConfig::load_or_default(path),
    }
}

fn handle_list(api: &QuireApi) -> Result<()> {
    let result = api.list()?;
    if let (Some(tree), Some(summary)) = (&result.tree, &result.summary) {
        print!("{}", render_tree(tree, summary));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &QuireApi, selectors: Vec<String>, peek: bool) -> Result<()> {
    let result = api.view(&selectors)?;
    print!("{}", render_full_documents(&result.listed, peek));
    print_messages(&result.messages);
    Ok(())
}

fn handle_open(api: &mut QuireApi, selector: String) -> Result<()> {
    let result = api.open(&selector)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_paths(api: &QuireApi, selectors: Vec<String>) -> Result<()> {
    let result = api.paths(&selectors)?;
    let lines: Vec<String> = result
        .paths
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    print!("{}", render_text_list(&lines, "No document paths found."));
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(api: &QuireApi, output: Option<PathBuf>) -> Result<()> {
    let result = api.export(output.as_deref())?;
    if let Some(json) = &result.export_json {
        println!("{}", json);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    settings: &Settings,
    config_path: Option<PathBuf>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = QuireApi::config(settings, config_path.as_deref(), action)?;
    if let Some(settings) = &result.settings {
        print!("{}", render_settings(settings));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_browse(api: &mut QuireApi) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(api, stdin.lock(), &mut stdout)
}
