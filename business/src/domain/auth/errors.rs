#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.missing_credentials")]
    MissingCredentials,
    /// Message reported by the identity provider, e.g. `INVALID_LOGIN_CREDENTIALS`.
    #[error("auth.sign_in_rejected: {0}")]
    SignInRejected(String),
    #[error("auth.provider_unavailable")]
    ProviderUnavailable,
    #[error("auth.invalid_token: {0}")]
    InvalidToken(String),
}
