//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application` or any transport crate. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator;
//! [`ErrorClass::of`] recovers the category at the top level by downcasting.

use thiserror::Error;

// ── Address errors ────────────────────────────────────────────────────────────

/// Malformed or forbidden address syntax. Always raised locally, before any
/// request is sent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("{kind} is not valid: '{path}' (expected {expected} segments separated by '/')")]
    MalformedPath {
        kind: &'static str,
        path: String,
        expected: usize,
    },

    #[error("empty {field}")]
    EmptySegment { field: &'static str },

    #[error("{field} cannot contain pattern-matching characters: {value}")]
    PatternNotAllowed { field: &'static str, value: String },

    #[error("invalid instanceId: '{0}' (must be a positive integer)")]
    InvalidInstanceId(String),
}

// ── Remote errors ─────────────────────────────────────────────────────────────

/// The launcher answered with an error status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{status} {status_text}: {body}")]
pub struct RemoteServiceError {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RemoteServiceError {
    pub const NOT_FOUND: u16 = 404;

    /// Missing host, app, instance or resource.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status == Self::NOT_FOUND
    }
}

/// No response was received; the effect of the request on the launcher is
/// unknown. The underlying I/O error is kept as the source.
#[derive(Debug, Error)]
#[error("no response from remote launcher")]
pub struct TransportError {
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nExpected: {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

// ── Classification ────────────────────────────────────────────────────────────

/// Failure category used for user-facing reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Local validation; nothing was sent.
    Validation,
    /// The launcher reported that the addressed entity does not exist.
    NotFound,
    /// The launcher reported any other error status.
    RemoteService,
    /// The launcher could not be reached.
    Transport,
    /// Anything else (local I/O, decoding, ...).
    Internal,
}

impl ErrorClass {
    /// Classify by the first typed error found in the chain.
    #[must_use]
    pub fn of(err: &anyhow::Error) -> Self {
        for cause in err.chain() {
            if cause.is::<AddressError>() || cause.is::<ConfigError>() {
                return Self::Validation;
            }
            if let Some(svc) = cause.downcast_ref::<RemoteServiceError>() {
                return if svc.is_not_found() {
                    Self::NotFound
                } else {
                    Self::RemoteService
                };
            }
            if cause.is::<TransportError>() {
                return Self::Transport;
            }
        }
        Self::Internal
    }

    /// Stable machine-readable code used in JSON error output.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::RemoteService => "remote_service",
            Self::Transport => "transport",
            Self::Internal => "internal",
        }
    }
}
