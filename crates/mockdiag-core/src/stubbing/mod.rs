//! Stub registry and request journal
//!
//! Near-miss diagnostics read from two collaborators, abstracted as traits:
//!
//! - `StubMappings`: every registered stub mapping
//! - `RequestJournal`: every request the service has received
//!
//! `InMemoryStubMappings` and `InMemoryRequestJournal` are the in-process
//! backends. Anything else (a remote admin API, a persistent journal) plugs
//! in by implementing the traits.
//!
//! # Example
//!
//! ```rust
//! use mockdiag_core::stubbing::{InMemoryStubMappings, StubMappings};
//!
//! let registry = InMemoryStubMappings::from_json(
//!     r#"[{"id": "ping", "request": {"url": {"url": "/ping"}}}]"#,
//! ).unwrap();
//!
//! assert_eq!(registry.get_all().unwrap().len(), 1);
//! ```

mod error;
mod memory;
mod traits;
mod types;

pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryRequestJournal, InMemoryStubMappings, JournalConfig};
pub use traits::{RequestJournal, StubMappings};
pub use types::{ResponseDefinition, ServedStub, StubMapping};
