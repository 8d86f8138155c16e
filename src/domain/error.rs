use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Provisioning error: {0}")]
    Provisioning(String),

    #[error("Run trigger error: {0}")]
    RunTrigger(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Vision error: {0}")]
    Vision(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
