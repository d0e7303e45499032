use reqwest::Client;
use url::Url;

use crate::settings::FirebaseSettings;

const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const SECURE_TOKEN_CERTS_URL: &str =
    "https://www.googleapis.com/robot/v1/metadata/x509/securetoken@system.gserviceaccount.com";

/// Shared HTTP client for the Firebase REST endpoints.
#[derive(Clone)]
pub struct FirebaseClient {
    pub client: Client,
    pub api_key: String,
    pub identity_base_url: String,
    pub certs_url: String,
}

impl FirebaseClient {
    pub fn new(settings: &FirebaseSettings) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: settings.web.api_key.clone(),
            identity_base_url: IDENTITY_TOOLKIT_URL.to_string(),
            certs_url: SECURE_TOKEN_CERTS_URL.to_string(),
        }
    }

    /// Email/password sign-in endpoint, keyed by the web API key.
    pub fn sign_in_url(&self) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &format!("{}/accounts:signInWithPassword", self.identity_base_url),
            &[("key", self.api_key.as_str())],
        )
    }
}
