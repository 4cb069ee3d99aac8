//! Store configuration read once at process start.

use studykit_core::defaults::{ENV_DATABASE_NAME, ENV_DATABASE_URL};

/// Document store connection settings observed from the environment.
///
/// Presence or absence of each variable is surfaced through the diagnostic
/// endpoint; nothing else depends on them after startup.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Server connection string, without the database path.
    pub url: Option<String>,
    /// Database holding the studykit collections.
    pub name: Option<String>,
}

impl StoreConfig {
    /// Read both variables from the environment. Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var(ENV_DATABASE_URL)
                .ok()
                .filter(|v| !v.is_empty()),
            name: std::env::var(ENV_DATABASE_NAME)
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }

    /// Full connection URL, when a connection string is configured.
    ///
    /// A configured database name is appended as the URL path; otherwise the
    /// connection string is used as-is (it may already carry a path).
    pub fn database_url(&self) -> Option<String> {
        let url = self.url.as_ref()?;
        Some(match &self.name {
            Some(name) => format!("{}/{}", url.trim_end_matches('/'), name),
            None => url.clone(),
        })
    }
}
