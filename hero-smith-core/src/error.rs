use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeroSmithError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid root: {0}")]
    InvalidRoot(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl HeroSmithError {
    /// Process exit code for a run aborted by this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            HeroSmithError::NotFound(_) => 2,
            HeroSmithError::InvalidRoot(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, HeroSmithError>;
