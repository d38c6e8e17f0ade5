use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    #[error("Invalid zone: {0}")]
    InvalidZone(String),

    #[error("Zone already exists: {0}")]
    ZoneAlreadyExists(String),

    #[error("Resource record not found: {0}")]
    RecordNotFound(i64),

    #[error("Invalid resource record: {0}")]
    InvalidRecord(String),

    #[error("Delegate not found: {0}")]
    DelegateNotFound(i64),

    #[error("Invalid delegate: {0}")]
    InvalidDelegate(String),

    #[error("Delegate already exists: {0}")]
    DelegateAlreadyExists(String),

    #[error("Invalid query type: {0}")]
    InvalidQueryType(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
