//! Composekit core - shared types for the compose lifecycle manager
//!
//! This crate provides:
//! - The error taxonomy shared by every Composekit crate
//! - OS family and architecture detection
//! - The private storage layout (storage root + `bin/` subfolder)

pub mod error;
pub mod paths;
pub mod platform;

pub use error::{Error, Result};
pub use paths::StorageLayout;
pub use platform::{current_platform, Arch, Os, PlatformInfo};
