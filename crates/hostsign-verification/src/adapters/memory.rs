//! # In-Memory Client Directory
//!
//! Directory backed by a `HashMap`. Embedding applications load it from
//! their own client store; records are owned and maintained outside the
//! verifier.

use crate::domain::entities::{ClientIdentity, ClientRecord};
use crate::domain::errors::DirectoryError;
use crate::ports::outbound::ClientDirectory;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Thread-safe in-memory `ClientDirectory`.
#[derive(Default)]
pub struct InMemoryClientDirectory {
    records: RwLock<HashMap<ClientIdentity, ClientRecord>>,
}

impl InMemoryClientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from records. Later duplicates replace earlier ones.
    pub fn from_records(records: impl IntoIterator<Item = ClientRecord>) -> Self {
        let directory = Self::new();
        for record in records {
            directory.insert(record);
        }
        directory
    }

    /// Insert or replace a record, returning the previous one.
    pub fn insert(&self, record: ClientRecord) -> Option<ClientRecord> {
        self.records.write().insert(record.identity.clone(), record)
    }

    pub fn remove(&self, identity: &ClientIdentity) -> Option<ClientRecord> {
        self.records.write().remove(identity)
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl ClientDirectory for InMemoryClientDirectory {
    async fn find_by_identity(
        &self,
        identity: &ClientIdentity,
    ) -> Result<Option<ClientRecord>, DirectoryError> {
        Ok(self.records.read().get(identity).cloned())
    }
}
