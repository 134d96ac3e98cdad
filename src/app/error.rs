use thiserror::Error;

#[derive(Error, Debug)]
pub enum KwError {
    #[error("No URL provided")]
    MissingUrl,

    #[error("Keywords data not found on the page")]
    ContainerNotFound,

    #[error("No keywords data found")]
    NoKeywords,

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Script execution failed: {0}")]
    Script(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

/// How an error is reported to callers of the scrape endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Unexpected,
}

impl KwError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KwError::MissingUrl => ErrorKind::Validation,
            KwError::ContainerNotFound | KwError::NoKeywords => ErrorKind::NotFound,
            _ => ErrorKind::Unexpected,
        }
    }
}

pub type Result<T> = std::result::Result<T, KwError>;
