#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    ProjectNotFound(String),
    InvalidInput { field: &'static str, reason: String },
    Export(String),
    Config(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::ProjectNotFound(id) => {
                write!(f, "No project with id {}", id)
            }
            DomainError::InvalidInput { field, reason } => {
                write!(f, "Invalid {}: {}", field, reason)
            }
            DomainError::Export(msg) => {
                write!(f, "Export failed: {}", msg)
            }
            DomainError::Config(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
