/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The backing store could not be read
    #[error("repository.unavailable")]
    Unavailable,
}
