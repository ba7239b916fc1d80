//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend
//! only on the domain's driving port and remain testable without I/O.

use std::sync::Arc;

use url::Url;

use crate::domain::ports::DirectoryQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Directory read port.
    pub directory: Arc<dyn DirectoryQuery>,
    /// Base URL for avatar image construction.
    pub avatar_base: Url,
}

impl HttpState {
    /// Bundle the directory port with the avatar base URL.
    #[must_use]
    pub fn new(directory: Arc<dyn DirectoryQuery>, avatar_base: Url) -> Self {
        Self {
            directory,
            avatar_base,
        }
    }
}
