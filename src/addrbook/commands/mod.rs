//! # Command Layer
//!
//! One module per verb. Each `run` takes the [`AddressBook`] plus plain
//! arguments and returns a [`CmdResult`]: the records it touched or listed
//! and the messages to show. Nothing here prints or decides when to save;
//! that is the API layer's job.
//!
//! [`AddressBook`]: crate::store::AddressBook

use crate::model::Record;

pub mod add;
pub mod birthday;
pub mod change;
pub mod close;
pub mod delete;
pub mod find;
pub mod helpers;
pub mod list;
pub mod load;
pub mod phones;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, changed or removed. Non-empty means the book changed.
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub pages: Vec<Vec<Record>>,
    pub messages: Vec<CmdMessage>,
    /// Set by `close`: the session should end
    pub closed: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_pages(mut self, pages: Vec<Vec<Record>>) -> Self {
        self.pages = pages;
        self
    }

    pub fn is_mutation(&self) -> bool {
        !self.affected_records.is_empty()
    }

    /// Plain-text rendering: listed records, then paged records, then
    /// messages, one per line.
    pub fn text(&self) -> String {
        self.listed_records
            .iter()
            .chain(self.pages.iter().flatten())
            .map(ToString::to_string)
            .chain(self.messages.iter().map(|m| m.content.clone()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
