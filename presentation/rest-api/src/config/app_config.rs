use firebase::settings::FirebaseSettings;
use poem::middleware::Cors;

use super::{
    cors_config, datamart_config::DatamartSettings, firebase_config,
    server_config::ServerConfig,
};

const DEFAULT_PORT: &str = "8000";

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub firebase: FirebaseSettings,
    pub datamart: DatamartSettings,
}

impl AppConfig {
    /// # Errors
    /// Fails when the Firebase configuration record is incomplete.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(DEFAULT_PORT),
            cors: cors_config::init_cors(),
            firebase: firebase_config::init_firebase()?,
            datamart: DatamartSettings::from_env(),
        })
    }
}
