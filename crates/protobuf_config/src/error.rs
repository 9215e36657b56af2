use std::path::PathBuf;

use zkchain_config::ValidationErrors;

use crate::format::Format;

/// Failure to turn a configuration source into a validated record.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to decode `{message}`: {source}")]
    Decode {
        message: String,
        #[source]
        source: prost::DecodeError,
    },
    #[error("failed to parse `{message}` as {format}: {source}")]
    Parse {
        message: String,
        format: Format,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to encode `{message}` as {format}: {source}")]
    Encode {
        message: String,
        format: Format,
        #[source]
        source: anyhow::Error,
    },
    #[error("invalid `{message}`: {errors}")]
    Invalid {
        message: String,
        errors: ValidationErrors,
    },
    #[error("cannot infer the format of `{0}` (expected .yaml, .yml, .json, .pb, .bin or .binpb)")]
    UnknownFormat(PathBuf),
    #[error("failed to access `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// The violations behind an `Invalid` error.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid { errors, .. } => Some(errors),
            _ => None,
        }
    }
}
