//! Protobuf messages of the configuration schema.
//!
//! The `.proto` sources under `proto/` are the compatibility contract: field numbers
//! must never be reassigned, and the messages here must stay in sync with them.

pub mod chain;
pub mod general;
