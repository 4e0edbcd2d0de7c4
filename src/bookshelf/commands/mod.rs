use crate::config::ShelfConfig;
use crate::model::Book;
use crate::render::ShelfView;
use std::path::PathBuf;

pub mod add;
pub mod completion;
pub mod config;
pub mod filter;
pub mod init;
pub mod list;
pub mod remove;

/// Filesystem locations the non-shelf commands (config, init) work with.
#[derive(Debug, Clone)]
pub struct ShelfPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
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
    /// Books created or changed by the command.
    pub affected_books: Vec<Book>,
    /// What to show after the command ran.
    pub view: Option<ShelfView>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
    /// Whether the shelf changed and has to be saved.
    pub mutated: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_view(mut self, view: ShelfView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn mutated(mut self) -> Self {
        self.mutated = true;
        self
    }
}
