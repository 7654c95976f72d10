/// Errors that can occur while loading or saving a project
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    /// I/O error reading or writing the project file
    #[error("Failed to access project file: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unknown reading selection policy
    #[error("Unknown reading selection: {0:?}")]
    UnknownSelection(String),

    /// The project has never been saved to or loaded from disk
    #[error("Project '{0}' has no file path")]
    MissingPath(String),
}
