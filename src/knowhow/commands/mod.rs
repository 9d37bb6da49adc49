use crate::config::KnowhowConfig;
use crate::index::DisplayNote;
use crate::model::UsageNote;

pub mod comment;
pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod increment;
pub mod reorder;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
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
    pub affected_notes: Vec<UsageNote>,
    pub listed_notes: Vec<DisplayNote>,
    pub config: Option<KnowhowConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<UsageNote>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_config(mut self, config: KnowhowConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Fold another result into this one, keeping message order.
    pub fn merge(&mut self, other: CmdResult) {
        self.affected_notes.extend(other.affected_notes);
        self.listed_notes.extend(other.listed_notes);
        if other.config.is_some() {
            self.config = other.config;
        }
        self.messages.extend(other.messages);
    }
}
