//! # Testforge Core
//!
//! Core types, configuration, and error handling for testforge.
//!
//! This crate provides the foundational building blocks used throughout
//! the testforge workspace, including:
//!
//! - **Types**: The [`TypeTag`] closed set and [`ArtifactKind`]
//! - **Config**: [`ForgeConfig`] with directory conventions and the
//!   form-to-entity [`NamingRule`]
//! - **Errors**: Unified error handling with [`ForgeError`] and [`ForgeResult`]
//!

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{CONFIG_FILE_NAME, ForgeConfig, NamingRule, PathsConfig};
pub use error::{ForgeError, ForgeResult, ResultExt};
pub use types::{ArtifactKind, TypeTag};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
