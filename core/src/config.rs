//! Deployment environments and their base URLs.
//!
//! The API is hosted at one of a small fixed set of bases. Callers pick an
//! `Environment` (or pass an arbitrary base URL to `ApiClient::new`) at
//! construction time; nothing here is process-wide state.

/// Deployment target selecting which API host to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
    /// A locally hosted API instance, for debugging against a dev server.
    LocalDebug,
}

impl Environment {
    /// Base URL for this environment, without a trailing slash.
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => "https://api.mysite.com/api/v1",
            Environment::Development => "https://apidev.mysite.com/api/v1",
            Environment::LocalDebug => "https://localhost:44369",
        }
    }
}
