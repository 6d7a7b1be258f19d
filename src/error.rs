use thiserror::Error;

#[derive(Error, Debug)]
pub enum AblogError {
    /// A consumer asked for a shared context that was never provided.
    #[error("no {0} in scope: install it on the Provider before consumers run")]
    ContextMissing(&'static str),

    #[error("archive entry not found: {0}")]
    ArchiveEntryNotFound(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, AblogError>;
