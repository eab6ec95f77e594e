use thiserror::Error;

/// Errors surfaced by the charset layer.
///
/// Underflow and overflow are flow-control signals and live in
/// [`CoderResult`](crate::charset::CoderResult), not here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("unmappable byte pair {bytes:02X?} at offset {position}")]
    Unmappable { bytes: [u8; 2], position: usize },
    #[error("truncated input: dangling byte {byte:#04x} at offset {position}")]
    Truncated { byte: u8, position: usize },
    #[error("encoding to {charset} is not supported")]
    EncodingUnsupported { charset: &'static str },
    #[error("unknown charset: {0}")]
    UnknownCharset(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Codec(#[from] CodecError),
}
