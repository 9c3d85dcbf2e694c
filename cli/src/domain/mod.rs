//! Domain layer: addressing grammar, typed errors, and configuration schema.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod address;
pub mod config;
pub mod error;
pub mod instance;

pub use address::{
    Address, AddressKind, AppPath, AppPattern, InstancePath, ListingFilter, ResourcePath, parse,
};
pub use config::RlcConfig;
pub use error::{AddressError, ConfigError, ErrorClass, RemoteServiceError, TransportError};
pub use instance::{LOOKBACK_WINDOW, exec_params, parse_bool, reattach_offset, stream_size};
