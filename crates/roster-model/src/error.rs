use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown record field: {0} (expected name, email or role)")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
