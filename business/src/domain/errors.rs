/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No record is stored under the requested identifier.
    #[error("repository.not_found")]
    NotFound,
    /// The backing store failed (connection, query or decoding).
    #[error("repository.database_error")]
    DatabaseError,
}
