use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Header, Validation, decode, decode_header};
use serde::Deserialize;

use business::domain::auth::errors::AuthError;
use business::domain::auth::model::AuthenticatedUser;
use business::domain::auth::services::TokenVerifier;

use crate::client::FirebaseClient;

const CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct FirebaseClaims {
    sub: String,
    email: Option<String>,
    iss: String,
    aud: String,
    exp: u64,
    iat: u64,
}

struct CachedCerts {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
}

/// Verifies Firebase ID tokens against Google's rotating securetoken certs.
///
/// Certs are cached for an hour; a token with a `kid` outside the cached set is
/// rejected rather than triggering a refetch.
pub struct GoogleTokenVerifier {
    client: FirebaseClient,
    project_id: String,
    cache: RwLock<Option<CachedCerts>>,
}

impl GoogleTokenVerifier {
    pub fn new(client: FirebaseClient, project_id: impl Into<String>) -> Self {
        Self {
            client,
            project_id: project_id.into(),
            cache: RwLock::new(None),
        }
    }

    async fn fetch_google_certs(&self) -> Result<HashMap<String, DecodingKey>, AuthError> {
        let response: HashMap<String, String> = self
            .client
            .client
            .get(&self.client.certs_url)
            .send()
            .await
            .map_err(|e| AuthError::InvalidToken(format!("certs_fetch_failed: {e}")))?
            .json()
            .await
            .map_err(|e| AuthError::InvalidToken(format!("certs_parse_failed: {e}")))?;

        let mut keys = HashMap::new();
        for (kid, pem) in response {
            let key = DecodingKey::from_rsa_pem(pem.as_bytes())
                .map_err(|e| AuthError::InvalidToken(format!("cert_decode_failed: {e}")))?;
            keys.insert(kid, key);
        }

        Ok(keys)
    }

    fn cached_key(&self, kid: &str) -> Result<Option<DecodingKey>, AuthError> {
        let cache = self
            .cache
            .read()
            .map_err(|e| AuthError::InvalidToken(format!("cache_read_failed: {e}")))?;
        match cache.as_ref() {
            Some(cached) if cached.fetched_at.elapsed() < CACHE_TTL => {
                Ok(Some(cached.keys.get(kid).cloned().ok_or_else(|| {
                    AuthError::InvalidToken("unknown_kid".to_string())
                })?))
            }
            _ => Ok(None),
        }
    }

    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        if let Some(key) = self.cached_key(kid)? {
            return Ok(key);
        }

        let keys = self.fetch_google_certs().await?;
        tracing::debug!("Fetched {} Google signing certs", keys.len());
        let key = keys.get(kid).cloned();

        {
            let mut cache = self
                .cache
                .write()
                .map_err(|e| AuthError::InvalidToken(format!("cache_write_failed: {e}")))?;
            *cache = Some(CachedCerts {
                keys,
                fetched_at: Instant::now(),
            });
        }

        key.ok_or_else(|| AuthError::InvalidToken("unknown_kid".to_string()))
    }

    fn key_id(token: &str) -> Result<String, AuthError> {
        let header: Header = decode_header(token)
            .map_err(|e| AuthError::InvalidToken(format!("invalid_token_header: {e}")))?;
        header
            .kid
            .ok_or_else(|| AuthError::InvalidToken("missing_kid".to_string()))
    }

    fn decode_claims(
        &self,
        token: &str,
        decoding_key: &DecodingKey,
    ) -> Result<AuthenticatedUser, AuthError> {
        let expected_issuer = format!("https://securetoken.google.com/{}", self.project_id);

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[&expected_issuer]);
        validation.validate_exp = true;

        let token_data = decode::<FirebaseClaims>(token, decoding_key, &validation)
            .map_err(|e| AuthError::InvalidToken(format!("token_validation_failed: {e}")))?;

        if token_data.claims.sub.is_empty() {
            return Err(AuthError::InvalidToken("empty_subject".to_string()));
        }

        Ok(AuthenticatedUser {
            uid: token_data.claims.sub,
            email: token_data.claims.email,
        })
    }
}

#[async_trait]
impl TokenVerifier for GoogleTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let kid = Self::key_id(token)?;
        let decoding_key = self.decoding_key(&kid).await?;
        self.decode_claims(token, &decoding_key)
    }
}
