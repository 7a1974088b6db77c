use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown build type: {0}")]
    UnknownBuildType(String),

    #[error("No build information found for application: {0}")]
    NoBuildInfo(String),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    #[error("Command failed (exit code {exit_code}): {command}")]
    CommandFailed { command: String, exit_code: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Error::UnknownBuildType(_) => "UNKNOWN_BUILD_TYPE",
            Error::NoBuildInfo(_) => "NO_BUILD_INFO",
            Error::ConfigRead { .. } => "CONFIG_READ_ERROR",
            Error::ConfigParse { .. } => "CONFIG_PARSE_ERROR",
            Error::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Error::CommandFailed { .. } => "COMMAND_FAILED",
            Error::Io(_) => "IO_ERROR",
            Error::Json(_) => "JSON_ERROR",
        }
    }
}
