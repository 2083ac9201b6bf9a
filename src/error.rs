//! Error type shared by the theme state, storage, and browser seams.
//!
//! None of these errors is fatal. Callers either surface `InvalidTheme` as a
//! rejected input or degrade to in-memory operation for the rest.

/// Failure raised by theme operations and their browser backends.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// Input was not exactly `"dark"` or `"light"`.
    #[error("invalid theme {0:?}: expected \"dark\" or \"light\"")]
    InvalidTheme(String),
    /// Durable storage is missing or rejected a read/write.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    /// A browser API (`window`, `document`, `matchMedia`, ...) is absent.
    #[error("{0} is not available in this environment")]
    EnvironmentUnavailable(&'static str),
    /// A theme configuration document could not be parsed.
    #[error("invalid theme configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
