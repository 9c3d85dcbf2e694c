//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: HTTP calls to the launcher,
//! config file access, stdin reading, signal handling and tracing setup.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod launcher;
pub mod signal;
pub mod stdin;
pub mod telemetry;
