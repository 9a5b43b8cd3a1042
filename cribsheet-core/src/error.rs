//! Error types for cribsheet-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from sheet and sheet-file operations.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error (write/save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load, with file path and line context from serde_yaml.
    #[error("failed to parse sheet file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The sheet file did not exist at the expected path.
    #[error("sheet file not found at {path}")]
    SheetNotFound { path: PathBuf },

    /// `scaffold` refused to clobber an existing sheet file.
    #[error("sheet file already exists at {path}")]
    AlreadyExists { path: PathBuf },

    /// A column count outside the supported range.
    #[error("column count {value} outside supported range 1-5")]
    ColumnsOutOfRange { value: u8 },
}
