use super::DataStore;
use crate::error::{ClientError, Result};
use crate::model::{Client, ClientId};
use std::collections::HashSet;

/// Session storage: an ordered `Vec` plus the id counter.
/// Does NOT persist data.
#[derive(Debug)]
pub struct InMemoryStore {
    clients: Vec<Client>,
    next_id: u64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            clients: Vec::new(),
            next_id: 1,
        }
    }

    /// Start from existing records, kept in the given order.
    /// The id counter continues after the largest id present.
    pub fn with_clients(clients: Vec<Client>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(clients.len());
        for client in &clients {
            if !seen.insert(client.id) {
                return Err(ClientError::Store(format!(
                    "Duplicate client id in initial data: {}",
                    client.id
                )));
            }
        }
        let next_id = successor(clients.iter().map(|c| c.id.0).max().unwrap_or(0))?;
        Ok(Self { clients, next_id })
    }

    fn position(&self, id: ClientId) -> Option<usize> {
        self.clients.iter().position(|c| c.id == id)
    }
}

fn successor(id: u64) -> Result<u64> {
    id.checked_add(1)
        .ok_or_else(|| ClientError::Store("id space exhausted".to_string()))
}

impl DataStore for InMemoryStore {
    fn allocate_id(&mut self) -> Result<ClientId> {
        let id = ClientId(self.next_id);
        self.next_id = successor(self.next_id)?;
        Ok(id)
    }

    fn insert_first(&mut self, client: Client) -> Result<()> {
        if self.position(client.id).is_some() {
            return Err(ClientError::Store(format!(
                "Client id already in use: {}",
                client.id
            )));
        }
        // Keep the counter ahead of ids that were not allocated here.
        self.next_id = self.next_id.max(successor(client.id.0)?);
        self.clients.insert(0, client);
        Ok(())
    }

    fn get_client(&self, id: ClientId) -> Result<Client> {
        self.clients
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(ClientError::NotFound(id))
    }

    fn replace_client(&mut self, client: Client) -> Result<()> {
        let idx = self
            .position(client.id)
            .ok_or(ClientError::NotFound(client.id))?;
        self.clients[idx] = client;
        Ok(())
    }

    fn remove_client(&mut self, id: ClientId) -> Result<Option<Client>> {
        Ok(self.position(id).map(|idx| self.clients.remove(idx)))
    }

    fn list_clients(&self) -> Result<Vec<Client>> {
        Ok(self.clients.clone())
    }

    fn len(&self) -> usize {
        self.clients.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ClientDraft, Status};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn seeded() -> Self {
            Self {
                store: InMemoryStore::with_clients(crate::seed::sample_clients()).unwrap(),
            }
        }

        pub fn with_clients(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = ClientDraft::new(format!("Test Client {}", i + 1), format!("+1{}", i));
                self = self.with_draft(draft);
            }
            self
        }

        pub fn with_status_client(self, name: &str, status: Status) -> Self {
            self.with_draft(ClientDraft::new(name, "+100").with_status(status))
        }

        fn with_draft(mut self, draft: ClientDraft) -> Self {
            let id = self.store.allocate_id().unwrap();
            self.store
                .insert_first(Client::from_draft(id, draft))
                .unwrap();
            self
        }
    }
}
