//! Error types for vlmbench.

/// Result type alias for vlmbench operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for vlmbench.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file does not exist.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path to the missing config file.
        path: std::path::PathBuf,
    },

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Unrecognized package stage token.
    #[error("unknown package stage: {value} (expected 'vlm_run' or 'eval_run')")]
    UnknownPackageStage {
        /// Invalid value.
        value: String,
    },

    /// No requirements file is configured for the stage.
    #[error("no requirements file configured for stage '{stage}'")]
    PackagesNotConfigured {
        /// Stage token.
        stage: String,
    },

    /// Configured requirements file does not exist.
    #[error("requirements file does not exist: {path}")]
    PackagesFileNotFound {
        /// Path to the missing requirements file.
        path: std::path::PathBuf,
    },

    /// Failed to read requirements file.
    #[error("failed to read requirements file '{path}'")]
    PackagesRead {
        /// Path to the requirements file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
