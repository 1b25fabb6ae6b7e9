use miette::Diagnostic;
use thiserror::Error;

/// Main error type for blot operations
#[derive(Error, Diagnostic, Debug)]
pub enum BlotError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(blot::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Unknown preset: {name}")]
    #[diagnostic(code(blot::preset))]
    UnknownPreset {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(blot::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Compose error: {message}")]
    #[diagnostic(code(blot::compose))]
    Compose {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BlotError>;
