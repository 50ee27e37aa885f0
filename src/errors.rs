use thiserror::Error;

use crate::arg::numbers::NumberKind;
use crate::resolve::parameter::TypeKey;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Result of a single resolver or stack operation.
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Failure kinds a resolver (or the stack it reads from) can raise.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// A token was requested but none remained.
    #[error("Expected more input, but no arguments remain.")]
    ExhaustedInput,

    /// A token did not parse as the requested numeric kind, or was out of range.
    #[error("Invalid {kind}: '{token}'")]
    InvalidNumber { kind: NumberKind, token: String },

    /// Resolver-specific domain failure (lookup miss, bad choice, ...).
    #[error("{0}")]
    Semantic(String),

    /// No resolver is registered for the parameter's declared type.
    #[error("No resolver registered for type '{0}'")]
    UnknownType(TypeKey),
}

impl ResolveError {
    pub fn semantic<S: Into<String>>(msg: S) -> Self {
        ResolveError::Semantic(msg.into())
    }

    pub fn invalid_number<S: Into<String>>(kind: NumberKind, token: S) -> Self {
        ResolveError::InvalidNumber {
            kind,
            token: token.into(),
        }
    }
}

/// A binding pass failed at one parameter; nothing was bound.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Parameter #{position} '{parameter}' (of {arity}): {kind}")]
pub struct BindingError {
    pub position: usize,
    pub parameter: String,
    pub arity: usize,
    #[source]
    pub kind: ResolveError,
}

impl BindingError {
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ResolveError::ExhaustedInput)
    }
}

/// Crate-level error set.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Binding ------------------------------------------------------------
    #[error(transparent)]
    Binding(#[from] BindingError),

    /// A command signature broke a registration rule (greedy not last, ...).
    #[error("Invalid signature: {0}")]
    Signature(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---- Config / CLI -------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Cli(String),

    // ---- Plumbing -----------------------------------------------------------
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn signature<S: Into<String>>(msg: S) -> Self {
        Error::Signature(msg.into())
    }
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    pub fn unknown<S: Into<String>>(cmd: S) -> Self {
        Error::UnknownCommand(cmd.into())
    }
    pub fn cli<S: Into<String>>(msg: S) -> Self {
        Error::Cli(msg.into())
    }
}

/// Map an `Option<T>` into `Result<T, Error::Config>` with a custom message.
pub fn require_config<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Config(msg.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn signature_constructor_wraps_message() {
        match Error::signature("greedy not last") {
            Error::Signature(msg) => assert_eq!(msg, "greedy not last"),
            other => panic!("expected signature error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_constructor_wraps_message() {
        match Error::unknown("warp") {
            Error::UnknownCommand(msg) => assert_eq!(msg, "warp"),
            other => panic!("expected unknown command error, got {other:?}"),
        }
    }

    #[test]
    fn require_config_errors_with_message_when_missing() {
        let err = require_config::<i32, _>(None, "no commands").unwrap_err();
        assert_eq!(err.to_string(), "Config error: no commands");
        assert_eq!(require_config(Some(3), "unused").unwrap(), 3);
    }

    #[test]
    fn invalid_number_formats_kind_and_token() {
        let err = ResolveError::invalid_number(NumberKind::Int, "4a");
        assert_eq!(err.to_string(), "Invalid int: '4a'");
    }

    #[test]
    fn binding_error_exposes_kind_as_source() {
        let err = BindingError {
            position: 1,
            parameter: "amount".into(),
            arity: 2,
            kind: ResolveError::ExhaustedInput,
        };
        assert!(err.is_exhausted());
        assert_eq!(
            err.to_string(),
            "Parameter #1 'amount' (of 2): Expected more input, but no arguments remain."
        );
        let source = err.source().expect("kind should be the source");
        assert_eq!(
            source.to_string(),
            ResolveError::ExhaustedInput.to_string()
        );
    }

    #[test]
    fn binding_error_converts_transparently() {
        let inner = BindingError {
            position: 0,
            parameter: "x".into(),
            arity: 1,
            kind: ResolveError::semantic("no player named Bob"),
        };
        let err = Error::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn io_error_formats_message() {
        let raw = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(Error::from(raw).to_string(), "I/O error: disk");
    }
}
