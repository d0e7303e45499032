#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("client.invalid_url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("client.unreachable: {0}")]
    Unreachable(String),
    #[error("client.login_rejected: {0}")]
    LoginRejected(String),
}
