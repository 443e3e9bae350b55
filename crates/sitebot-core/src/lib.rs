//! Core types for sitebot: the content document, configuration, the
//! command table, and the shared error type.

pub mod commands;
pub mod config;
pub mod document;
pub mod error;

pub use commands::{FieldCommand, FIELD_COMMANDS};
pub use config::Config;
pub use document::ContentDocument;
pub use error::{Error, Result};
