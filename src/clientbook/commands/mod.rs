use crate::model::{Client, Status};

pub mod create;
pub mod delete;
pub mod get;
pub mod query;
pub mod stats;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
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
}

/// Summary tiles: total plus one count per status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub by_status: Vec<(Status, usize)>,
}

impl Stats {
    pub fn count(&self, status: Status) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_clients: Vec<Client>,
    pub listed_clients: Vec<Client>,
    pub stats: Option<Stats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_clients(mut self, clients: Vec<Client>) -> Self {
        self.affected_clients = clients;
        self
    }

    pub fn with_listed_clients(mut self, clients: Vec<Client>) -> Self {
        self.listed_clients = clients;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }
}
