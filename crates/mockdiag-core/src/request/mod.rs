//! Concrete requests as received by the stubbing service
//!
//! A `LoggedRequest` is what the service actually saw on the wire: method,
//! URL, headers and body. Patterns are matched against it, and the history
//! journal records it.
//!
//! # Example
//!
//! ```rust
//! use mockdiag_core::request::LoggedRequestBuilder;
//!
//! let request = LoggedRequestBuilder::new()
//!     .method("post")
//!     .url("/orders?page=2")
//!     .header("Content-Type", "application/json")
//!     .body(r#"{"sku":"A-1"}"#)
//!     .build();
//!
//! assert_eq!(request.method, "POST");
//! assert_eq!(request.path(), "/orders");
//! assert_eq!(request.header("content-type"), Some("application/json"));
//! ```

mod types;

pub use types::{LoggedRequest, LoggedRequestBuilder};
