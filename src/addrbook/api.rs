//! # API Facade
//!
//! [`AddrBookApi`] is the single entry point for every UI (the one-shot CLI
//! and the interactive shell). It owns the [`AddressBook`] and the path it
//! persists to, dispatches each verb to its command module, and decides when
//! to save.
//!
//! ## Error policy
//!
//! Input mistakes (malformed phone or birthday, unknown contact, unknown
//! phone) never end a session: they come back as an `Ok(CmdResult)` holding
//! one error-level message. Everything else, notably I/O failures while
//! saving, is returned as `Err` because losing data silently is worse than
//! stopping.
//!
//! ## Saving
//!
//! With `autosave` on, every command that changes the book saves right away.
//! With it off, changes are written by [`AddrBookApi::flush`] or
//! [`AddrBookApi::close`].

use crate::commands::{self, CmdMessage, CmdResult};
use crate::config::AppConfig;
use crate::error::Result;
use crate::store::AddressBook;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct AddrBookApi {
    book: AddressBook,
    path: PathBuf,
    autosave: bool,
    page_size: usize,
    dirty: bool,
}

impl AddrBookApi {
    /// Starts with an empty book. Call [`AddrBookApi::load`] to read `path`.
    pub fn new(path: impl Into<PathBuf>, config: &AppConfig) -> Self {
        Self {
            book: AddressBook::new(),
            path: path.into(),
            autosave: config.autosave,
            page_size: config.page_size,
            dirty: false,
        }
    }

    pub fn load(&mut self) -> Result<CmdResult> {
        let result = commands::load::run(&mut self.book, &self.path)?;
        self.dirty = false;
        Ok(result)
    }

    pub fn hello(&self) -> CmdResult {
        CmdResult::default().with_message(CmdMessage::info("How can I help you?"))
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        birthday: Option<&str>,
    ) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.book, name, phone, birthday);
        self.finish(result)
    }

    pub fn change_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::change::run(&mut self.book, name, phone);
        self.finish(result)
    }

    pub fn find_phone(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::find::run(&self.book, name);
        self.finish(result)
    }

    pub fn show_all(&mut self) -> Result<CmdResult> {
        let result = commands::list::run(&self.book, self.page_size);
        self.finish(result)
    }

    pub fn search(&mut self, query: &str) -> Result<CmdResult> {
        let result = commands::search::run(&self.book, query);
        self.finish(result)
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        let result = commands::phones::edit(&mut self.book, name, old, new);
        self.finish(result)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::phones::remove(&mut self.book, name, phone);
        self.finish(result)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.book, name);
        self.finish(result)
    }

    pub fn birthday(&mut self, name: &str, date: Option<&str>) -> Result<CmdResult> {
        let today = Local::now().date_naive();
        let result = commands::birthday::run(&mut self.book, name, date, today);
        self.finish(result)
    }

    /// Saves unconditionally and marks the session as over.
    pub fn close(&mut self) -> Result<CmdResult> {
        let result = commands::close::run(&self.book, &self.path)?;
        self.dirty = false;
        Ok(result)
    }

    /// Saves if anything changed since the last save or load.
    pub fn flush(&mut self) -> Result<()> {
        if self.dirty {
            self.book.save(&self.path)?;
            self.dirty = false;
        }
        Ok(())
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn finish(&mut self, result: Result<CmdResult>) -> Result<CmdResult> {
        let result = recover(result)?;
        if result.is_mutation() {
            self.dirty = true;
            if self.autosave {
                self.flush()?;
            }
        }
        Ok(result)
    }
}

/// Turns input errors into an error message on a successful result.
fn recover(result: Result<CmdResult>) -> Result<CmdResult> {
    match result {
        Err(e) if e.is_user_error() => {
            debug!(error = %e, "command rejected");
            Ok(CmdResult::default().with_message(CmdMessage::error(e.to_string())))
        }
        other => other,
    }
}
