//! # Storage Layer
//!
//! This module defines the storage abstraction for clientbook. The [`DataStore`] trait
//! keeps the command layer independent of where records live.
//!
//! ## Ordering Contract
//!
//! A store is an *ordered* collection, not a map:
//! - [`DataStore::insert_first`] puts a record at the front (most recent first)
//! - [`DataStore::replace_client`] swaps a record in place, keeping its position
//! - [`DataStore::remove_client`] takes a record out without reordering the rest
//! - [`DataStore::list_clients`] returns records in that order
//!
//! ## Id Allocation
//!
//! Ids come from [`DataStore::allocate_id`], a monotonic counter owned by the store.
//! Ids are never handed out twice, even after the record holding one is deleted.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the session store. Nothing is persisted.

use crate::error::Result;
use crate::model::{Client, ClientId};

pub mod memory;

/// Abstract interface for client storage.
pub trait DataStore {
    /// Reserve the next unused id. Fails once the id space is used up.
    fn allocate_id(&mut self) -> Result<ClientId>;

    /// Insert a record at the front. Fails if its id is already present.
    fn insert_first(&mut self, client: Client) -> Result<()>;

    /// Get a client by ID
    fn get_client(&self, id: ClientId) -> Result<Client>;

    /// Replace the record with the same id, keeping its position
    fn replace_client(&mut self, client: Client) -> Result<()>;

    /// Remove a record. `Ok(None)` when the id is not present.
    fn remove_client(&mut self, id: ClientId) -> Result<Option<Client>>;

    /// All clients, most recent first
    fn list_clients(&self) -> Result<Vec<Client>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
