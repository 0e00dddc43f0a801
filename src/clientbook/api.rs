//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every clientbook operation, whatever front-end is driving it.
//!
//! [`ClientBook`] owns the store. Front-ends never hold the collection themselves: they
//! read lists and counts through it and submit drafts to it. That keeps the ordering and
//! id rules in one place instead of spread across call sites.
//!
//! ## Generic Over DataStore
//!
//! `ClientBook<S: DataStore>` is generic over the storage backend. The binary uses
//! `ClientBook<InMemoryStore>`; tests can swap in anything implementing the trait.
//!
//! ## Testing Strategy
//!
//! API tests check dispatch and return shapes. The rules themselves (validation,
//! ordering, matching) are tested in the command modules.

use crate::commands;
use crate::error::{ClientError, Result};
use crate::model::{Client, ClientDraft, ClientId, Status};
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;

pub use commands::{CmdMessage, CmdResult, MessageLevel, Stats};

/// The main API facade for client operations.
pub struct ClientBook<S: DataStore> {
    store: S,
}

impl ClientBook<InMemoryStore> {
    /// A session store pre-filled with the sample clients.
    pub fn seeded() -> Result<Self> {
        Ok(Self::new(InMemoryStore::with_clients(
            crate::seed::sample_clients(),
        )?))
    }

    pub fn empty() -> Self {
        Self::new(InMemoryStore::new())
    }
}

impl<S: DataStore> ClientBook<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create(&mut self, draft: ClientDraft) -> Result<CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn update(&mut self, id: ClientId, draft: ClientDraft) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, draft)
    }

    pub fn delete(&mut self, id: ClientId) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn get(&self, id: ClientId) -> Result<Client> {
        commands::get::run(&self.store, id)?
            .listed_clients
            .pop()
            .ok_or(ClientError::NotFound(id))
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::query::run(&self.store, "")
    }

    pub fn query(&self, term: &str) -> Result<CmdResult> {
        commands::query::run(&self.store, term)
    }

    pub fn count_by_status(&self, status: Status) -> Result<usize> {
        commands::stats::count_by_status(&self.store, status)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
