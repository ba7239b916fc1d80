//! Backing record-source adapters.
//!
//! Two implementations of the same port, selected at construction time:
//! a capability-scoped local file read for server deployments, and an
//! HTTP fetch for deployments that serve the document remotely.

pub mod file;
pub mod http;

pub use file::FileRecordSource;
pub use http::HttpRecordSource;
