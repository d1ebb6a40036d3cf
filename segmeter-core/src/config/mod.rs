//! Configuration types
//!
//! Board-agnostic configuration structures, loaded at boot from the
//! embedded `meter.toml`.

pub mod toml;
pub mod types;

pub use self::toml::parse_config;
pub use types::*;
