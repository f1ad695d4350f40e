//! Error types for the celebration engine.

use thiserror::Error;

/// Errors raised by engine construction, configuration, and name lookups.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("2D rendering context unavailable")]
    ContextUnavailable,

    #[error("unknown effect: {0}")]
    UnknownEffect(String),

    #[error("unknown celebration preset: {0}")]
    UnknownPreset(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = EngineError::UnknownEffect("fireworks".into());
        assert_eq!(err.to_string(), "unknown effect: fireworks");
    }

    #[test]
    fn json_errors_convert() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: EngineError = parse.unwrap_err().into();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
