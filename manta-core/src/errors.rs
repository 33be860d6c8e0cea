use thiserror::Error;

#[derive(Error, Debug)]
pub enum MantaError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Unknown SNV file type {0}")]
    UnknownFileFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MantaError>;
