//! # Testforge Scan
//!
//! Source discovery and attribute scanners for testforge. This crate turns
//! the source files of a module into structured metadata that the code
//! generators consume.
//!
//! ## Core Concepts
//!
//! - **SourceUnit**: a discovered `.rs` file plus the type name derived from
//!   its file stem
//! - **Action**: a routed public method extracted from a controller
//! - **PersistedField**: a column-marked struct field extracted from an entity
//! - **Markers**: the `#[route("...")]` and `#[column(...)]` attributes,
//!   parsed with `syn`
//!
//! Scanners are pure with respect to their input text: they take source and
//! an expected class name and return records or a per-file error. Only
//! discovery and entity resolution touch the filesystem.

// Module declarations
pub mod controller;
pub mod entity;
pub mod form;
pub mod member;
pub mod source;

// Re-export commonly used types at crate root
pub use controller::{ControllerClass, ROUTE_MARKER, scan_controller};
pub use entity::{COLUMN_MARKER, EntityClass, scan_entity};
pub use form::{FormClass, resolve_entity, scan_form};
pub use member::{Action, PersistedField};
pub use source::{SourceUnit, discover_sources};

// Re-export core types that are commonly used with scan results
pub use testforge_core::{ArtifactKind, ForgeError, ForgeResult, TypeTag};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
