use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read a [`TitleCaseOptions`](crate::TitleCaseOptions) file.
#[derive(Error, Debug)]
pub enum OptionsLoadingError {
    #[error("cannot read options from {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("malformed options in {}: {source}", path.display())]
    Deserialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Failure to write a [`TitleCaseOptions`](crate::TitleCaseOptions) file.
#[derive(Error, Debug)]
pub enum OptionsSavingError {
    #[error("can't serialize options: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("cannot write options into {}: {source}", path.display())]
    WriteFile { path: PathBuf, source: io::Error },
}
