//! # API facade
//!
//! Thin entry point for all session operations, independent of the UI in
//! front of it. The facade dispatches to the command layer and returns
//! structured [`CmdResult`] values; it holds no business logic and performs
//! no I/O beyond what the config command needs.
//!
//! Consumers reach shared state through the [`Provider`] installed here, so
//! an operation invoked without its context fails fast instead of acting on
//! empty state.

use std::path::PathBuf;

use crate::archive::Archive;
use crate::commands;
use crate::commands::config::ConfigAction;
use crate::commands::CmdResult;
use crate::context::{PostContext, Provider};
use crate::error::Result;
use crate::store::Snapshot;

pub struct BlogApi {
    provider: Provider,
    archive: Archive,
    config_dir: PathBuf,
}

impl BlogApi {
    pub fn new(provider: Provider, archive: Archive, config_dir: PathBuf) -> Self {
        Self {
            provider,
            archive,
            config_dir,
        }
    }

    pub fn posts(&self) -> Result<&PostContext> {
        self.provider.posts()
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        Ok(self.posts()?.snapshot())
    }

    pub fn add_post(&self, title: &str, body: &str) -> Result<CmdResult> {
        commands::add::run(self.posts()?, title, body)
    }

    pub fn clear_posts(&self) -> Result<CmdResult> {
        commands::clear::run(self.posts()?)
    }

    pub fn search_posts(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(self.posts()?, term)
    }

    pub fn list_posts(&self) -> Result<CmdResult> {
        commands::list::run(self.posts()?)
    }

    pub fn toggle_archive(&mut self) -> Result<CmdResult> {
        commands::archive::toggle(&mut self.archive)
    }

    pub fn promote_post(&self, index: usize) -> Result<CmdResult> {
        commands::archive::promote(&self.archive, self.provider.posts()?, index)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}
