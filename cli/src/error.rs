use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("grid error: {0}")]
    Grid(#[from] grid::error::Error),

    #[error("pattern error: {0}")]
    Pattern(#[from] plaintext::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
