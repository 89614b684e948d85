use std::path::PathBuf;

use thiserror::Error;

use crate::state::Stage;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Everything that can abort a load → render → inspect run.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// Input path missing or unreadable.
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed numeric table.
    #[error("{}:{line}: {message}", path.display())]
    DataFormat {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Shape mismatch or a category label the palette cannot represent.
    #[error("render error: {0}")]
    Render(String),

    /// The interactive session needs a terminal and there is none.
    #[error("interactive session unavailable: {0}")]
    EnvironmentUnavailable(String),

    #[error("cannot move from stage {from} to {to}")]
    InvalidTransition { from: Stage, to: Stage },

    #[error("invalid configuration {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("failed to dump session to {}: {message}", path.display())]
    Dump { path: PathBuf, message: String },
}

impl ExplorerError {
    pub(crate) fn data_format(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        ExplorerError::DataFormat {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExplorerError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
