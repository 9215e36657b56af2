//! Wire (protobuf) and text (YAML / JSON) encodings of the zkchain configuration schema.
//!
//! Every decoder runs the full validation pass before handing a record out: a record
//! obtained from this crate is either valid or not returned at all.

mod chain;
mod circuit_breaker;
mod error;
mod format;
mod general;
mod network;
pub mod proto;
mod repr;
mod serde_helpers;
#[cfg(test)]
mod tests;

pub use self::{
    error::ConfigError,
    format::{decode, decode_as, decode_text, encode, encode_as, read_file, write_file, Format},
    repr::{
        optional_enum, optional_usize, read_optional_repr, required, required_bytes,
        required_enum, required_usize, ProtoEnum, ProtoRepr,
    },
};
