//! # API Facade
//!
//! [`QuireApi`] is the one entry point UI clients use. It owns the
//! [`Session`], turns raw user strings into [`DocSelector`]s, and dispatches to
//! the command layer. It never prints and never exits; every method returns a
//! [`CmdResult`] for the caller to render.

use crate::commands;
use crate::config::Settings;
use crate::editor::resolve_editor;
use crate::error::{QuireError, Result};
use crate::index::{self, DocSelector};
use crate::session::Session;
use crate::sort::SortPolicy;
use std::path::Path;

pub struct QuireApi {
    session: Session,
    settings: Settings,
}

impl QuireApi {
    /// Opens a session on `settings.directory` and performs the first scan.
    pub fn new(settings: Settings) -> Result<Self> {
        let session = Session::open(&settings.directory, settings.recursive, settings.sort)?;
        Ok(Self { session, settings })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.session)
    }

    pub fn view<I: AsRef<str>>(&self, inputs: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::view::run(&self.session, &selectors)
    }

    pub fn paths<I: AsRef<str>>(&self, inputs: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::paths::run(&self.session, &selectors)
    }

    /// Opens a single document with the configured or discovered editor.
    pub fn open(&mut self, input: &str) -> Result<commands::CmdResult> {
        let selector = parse_single(input)?;
        let editor = resolve_editor(self.settings.editor.as_deref());
        commands::open::run(&mut self.session, &selector, &editor)
    }

    pub fn export(&self, output: Option<&Path>) -> Result<commands::CmdResult> {
        commands::export::run(&self.session, output)
    }

    /// Config inspection and editing. Needs no session, so it works before
    /// (or without) a successful scan.
    pub fn config(
        settings: &Settings,
        config_path: Option<&Path>,
        action: commands::config::ConfigAction,
    ) -> Result<commands::CmdResult> {
        commands::config::run(settings, config_path, action)
    }

    pub fn refresh(&mut self) -> Result<()> {
        self.session.refresh()
    }

    pub fn set_sort(&mut self, sort: SortPolicy) -> Result<()> {
        self.settings.sort = sort;
        self.session.set_sort(sort)
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DocSelector>> {
    if inputs.is_empty() {
        return Err(QuireError::Api("No documents selected".to_string()));
    }
    index::parse_selectors(inputs).map_err(QuireError::Api)
}

fn parse_single(input: &str) -> Result<DocSelector> {
    input.parse::<DocSelector>().map_err(QuireError::Api)
}

pub use commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
