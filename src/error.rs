//! Error types for proxy URL generation

use thiserror::Error;

/// Errors surfaced while configuring or driving the URL builder.
///
/// Invalid signing material fails at construction time; silently falling
/// back to unsigned URLs would hand out links the proxy rejects.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Invalid signing key hex: {0}")]
    InvalidKey(#[source] hex::FromHexError),

    #[error("Invalid signing salt hex: {0}")]
    InvalidSalt(#[source] hex::FromHexError),

    #[error("Unknown resize type: {0}")]
    UnknownResizeType(String),

    #[error("Invalid static asset ignore pattern: {0}")]
    InvalidIgnorePattern(#[from] regex::Error),
}
