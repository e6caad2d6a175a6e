use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown case `{0}`, expected camelCase, snake_case or PascalCase")]
    UnknownCase(String),
    #[error("value nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
