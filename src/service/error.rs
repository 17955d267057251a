/// Errors reported by the name validator and location service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The service could not answer the request.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}
