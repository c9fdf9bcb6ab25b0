//! Registry and journal trait definitions

use std::sync::Arc;

use crate::stubbing::error::StoreResult;
use crate::stubbing::types::{ServedStub, StubMapping};

/// Source of all registered stub mappings.
///
/// `get_all` returns a snapshot in the registry's own iteration order
/// (registration order for the in-memory registry). Callers never re-read
/// mid-computation, so a backend that changes concurrently only needs to
/// hand out a consistent snapshot.
pub trait StubMappings {
    fn get_all(&self) -> StoreResult<Vec<Arc<StubMapping>>>;
}

/// History of requests the service has received.
pub trait RequestJournal {
    /// All journal entries, oldest first.
    fn get_all_served_stubs(&self) -> StoreResult<Vec<ServedStub>>;

    /// Entries that matched no stub, oldest first.
    fn get_unmatched(&self) -> StoreResult<Vec<ServedStub>> {
        Ok(self
            .get_all_served_stubs()?
            .into_iter()
            .filter(|served| !served.was_matched())
            .collect())
    }
}

impl<T: StubMappings + ?Sized> StubMappings for &T {
    fn get_all(&self) -> StoreResult<Vec<Arc<StubMapping>>> {
        (**self).get_all()
    }
}

impl<T: StubMappings + ?Sized> StubMappings for Arc<T> {
    fn get_all(&self) -> StoreResult<Vec<Arc<StubMapping>>> {
        (**self).get_all()
    }
}

impl<T: RequestJournal + ?Sized> RequestJournal for &T {
    fn get_all_served_stubs(&self) -> StoreResult<Vec<ServedStub>> {
        (**self).get_all_served_stubs()
    }
}

impl<T: RequestJournal + ?Sized> RequestJournal for Arc<T> {
    fn get_all_served_stubs(&self) -> StoreResult<Vec<ServedStub>> {
        (**self).get_all_served_stubs()
    }
}
