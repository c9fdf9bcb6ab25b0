//! In-memory registry and journal
//!
//! Vec-backed implementations that keep insertion order, which is the order
//! near-miss ranking uses to break ties. Both are safe to share between
//! threads; reads hand out snapshots.

use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

use crate::request::LoggedRequest;
use crate::stubbing::error::{StoreError, StoreResult};
use crate::stubbing::traits::{RequestJournal, StubMappings};
use crate::stubbing::types::{ServedStub, StubMapping};

/// In-memory stub registry.
#[derive(Debug, Default)]
pub struct InMemoryStubMappings {
    mappings: RwLock<Vec<Arc<StubMapping>>>,
}

impl InMemoryStubMappings {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from stub mappings, rejecting duplicate IDs.
    pub fn with_mappings(mappings: Vec<StubMapping>) -> StoreResult<Self> {
        let registry = Self::new();
        for mapping in mappings {
            registry.add(mapping)?;
        }
        Ok(registry)
    }

    /// Load a registry from a JSON array of stub mappings.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let mappings: Vec<StubMapping> = serde_json::from_str(json)?;
        debug!(count = mappings.len(), "loading stub mappings from JSON");
        Self::with_mappings(mappings)
    }

    /// Register a stub mapping.
    ///
    /// Returns `StoreError::AlreadyExists` if the ID is taken.
    pub fn add(&self, mapping: StubMapping) -> StoreResult<()> {
        let mut mappings = self.mappings.write();
        if mappings.iter().any(|m| m.id == mapping.id) {
            return Err(StoreError::AlreadyExists(mapping.id));
        }
        mappings.push(Arc::new(mapping));
        Ok(())
    }

    /// Remove a stub mapping by ID.
    ///
    /// Returns `StoreError::NotFound` if no mapping has that ID.
    pub fn remove(&self, id: &str) -> StoreResult<Arc<StubMapping>> {
        let mut mappings = self.mappings.write();
        match mappings.iter().position(|m| m.id == id) {
            Some(idx) => Ok(mappings.remove(idx)),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// Look up a stub mapping by ID.
    pub fn get(&self, id: &str) -> Option<Arc<StubMapping>> {
        self.mappings.read().iter().find(|m| m.id == id).cloned()
    }

    pub fn count(&self) -> usize {
        self.mappings.read().len()
    }

    /// Remove every stub mapping.
    pub fn reset(&self) {
        self.mappings.write().clear();
    }
}

impl StubMappings for InMemoryStubMappings {
    fn get_all(&self) -> StoreResult<Vec<Arc<StubMapping>>> {
        Ok(self.mappings.read().clone())
    }
}

/// Journal configuration
#[derive(Debug, Clone, Default)]
pub struct JournalConfig {
    /// Maximum retained entries; the oldest are evicted first.
    /// `None` keeps everything.
    pub max_entries: Option<usize>,
}

/// In-memory request journal.
#[derive(Debug, Default)]
pub struct InMemoryRequestJournal {
    entries: RwLock<VecDeque<ServedStub>>,
    config: JournalConfig,
}

impl InMemoryRequestJournal {
    /// Create an unbounded journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration
    pub fn with_config(config: JournalConfig) -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
            config,
        }
    }

    /// Record a received request and the stub that served it, if any.
    pub fn record(&self, request: impl Into<Arc<LoggedRequest>>, stub_id: Option<String>) {
        let served = ServedStub {
            request: request.into(),
            stub_id,
        };

        let mut entries = self.entries.write();
        entries.push_back(served);
        if let Some(max) = self.config.max_entries {
            while entries.len() > max {
                entries.pop_front();
            }
        }
    }

    pub fn count(&self) -> usize {
        self.entries.read().len()
    }

    /// Drop every journal entry.
    pub fn reset(&self) {
        self.entries.write().clear();
    }
}

impl RequestJournal for InMemoryRequestJournal {
    fn get_all_served_stubs(&self) -> StoreResult<Vec<ServedStub>> {
        Ok(self.entries.read().iter().cloned().collect())
    }
}
