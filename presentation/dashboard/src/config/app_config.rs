use std::env;

use firebase::settings::FirebaseSettings;
use url::Url;

use super::server_config::ServerConfig;

const DEFAULT_PORT: &str = "8501";
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

pub struct DashboardConfig {
    pub server: ServerConfig,
    pub api_url: Url,
    pub firebase: FirebaseSettings,
}

impl DashboardConfig {
    /// Environment variables:
    /// - API_URL: Base URL of the sales API (default: "http://127.0.0.1:8000")
    /// - plus the server keys and the Firebase configuration record
    ///
    /// # Errors
    /// Fails when the Firebase record is incomplete or API_URL is not a URL.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::with_firebase(FirebaseSettings::from_env()?, |key| env::var(key).ok())
    }

    #[cfg(test)]
    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::with_firebase(FirebaseSettings::from_lookup(&lookup)?, lookup)
    }

    fn with_firebase<F>(firebase: FirebaseSettings, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        tracing::info!(
            project_id = %firebase.project_id(),
            "Firebase configuration loaded"
        );

        let raw_url = lookup("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&raw_url)?;

        Ok(Self {
            server: ServerConfig::from_lookup(&lookup, DEFAULT_PORT),
            api_url,
            firebase,
        })
    }
}
