//! Binary and text codecs for configuration records, and file loading on top of them.

use std::fmt;
use std::path::Path;

use prost::Message;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::ConfigError;
use crate::repr::ProtoRepr;

/// Encoding of a configuration source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
    /// Protobuf wire format.
    Binary,
}

impl Format {
    /// Infers the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "pb" | "bin" | "binpb" => Some(Self::Binary),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Binary => "protobuf",
        })
    }
}

fn validated<P: ProtoRepr>(message: &P) -> Result<P::Type, ConfigError> {
    message.read().map_err(|errors| ConfigError::Invalid {
        message: P::full_name(),
        errors,
    })
}

/// Decodes a record from the protobuf wire format. Unknown fields are skipped.
pub fn decode<P: ProtoRepr>(bytes: &[u8]) -> Result<P::Type, ConfigError> {
    let message = P::decode(bytes).map_err(|source| ConfigError::Decode {
        message: P::full_name(),
        source,
    })?;
    tracing::debug!("decoded `{}` from {} bytes", P::full_name(), bytes.len());
    validated(&message)
}

/// Encodes a record into the protobuf wire format.
pub fn encode<P: ProtoRepr>(value: &P::Type) -> Vec<u8> {
    let bytes = P::build(value).encode_to_vec();
    tracing::debug!("encoded `{}` into {} bytes", P::full_name(), bytes.len());
    bytes
}

/// Decodes a record from any supported format.
pub fn decode_as<P>(format: Format, bytes: &[u8]) -> Result<P::Type, ConfigError>
where
    P: ProtoRepr + DeserializeOwned,
{
    let parse_error = |source: anyhow::Error| ConfigError::Parse {
        message: P::full_name(),
        format,
        source,
    };
    let message: P = match format {
        Format::Binary => return decode::<P>(bytes),
        Format::Yaml => serde_yaml::from_slice(bytes).map_err(|err| parse_error(err.into()))?,
        Format::Json => serde_json::from_slice(bytes).map_err(|err| parse_error(err.into()))?,
    };
    tracing::debug!("parsed `{}` from {format}", P::full_name());
    validated(&message)
}

/// Decodes a record from a YAML or JSON document.
pub fn decode_text<P>(format: Format, text: &str) -> Result<P::Type, ConfigError>
where
    P: ProtoRepr + DeserializeOwned,
{
    decode_as::<P>(format, text.as_bytes())
}

/// Encodes a record into any supported format.
pub fn encode_as<P>(format: Format, value: &P::Type) -> Result<Vec<u8>, ConfigError>
where
    P: ProtoRepr + Serialize,
{
    let encode_error = |source: anyhow::Error| ConfigError::Encode {
        message: P::full_name(),
        format,
        source,
    };
    match format {
        Format::Binary => Ok(encode::<P>(value)),
        Format::Yaml => serde_yaml::to_string(&P::build(value))
            .map(String::into_bytes)
            .map_err(|err| encode_error(err.into())),
        Format::Json => {
            serde_json::to_vec_pretty(&P::build(value)).map_err(|err| encode_error(err.into()))
        }
    }
}

fn resolve_format(path: &Path, format: Option<Format>) -> Result<Format, ConfigError> {
    format
        .or_else(|| Format::from_path(path))
        .ok_or_else(|| ConfigError::UnknownFormat(path.to_owned()))
}

/// Loads and validates a record from a file. The format is inferred from the extension
/// unless given explicitly.
pub fn read_file<P>(path: &Path, format: Option<Format>) -> Result<P::Type, ConfigError>
where
    P: ProtoRepr + DeserializeOwned,
{
    let format = resolve_format(path, format)?;
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_owned(),
        source,
    })?;
    let value = decode_as::<P>(format, &bytes)?;
    tracing::info!("loaded `{}` from {}", P::full_name(), path.display());
    Ok(value)
}

/// Writes a record to a file. The format is inferred from the extension unless given
/// explicitly.
pub fn write_file<P>(
    path: &Path,
    format: Option<Format>,
    value: &P::Type,
) -> Result<(), ConfigError>
where
    P: ProtoRepr + Serialize,
{
    let format = resolve_format(path, format)?;
    let bytes = encode_as::<P>(format, value)?;
    std::fs::write(path, bytes).map_err(|source| ConfigError::Io {
        path: path.to_owned(),
        source,
    })?;
    tracing::info!("wrote `{}` to {} as {format}", P::full_name(), path.display());
    Ok(())
}
