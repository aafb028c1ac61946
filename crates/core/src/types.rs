//! Shared vocabulary types for testforge
//!
//! This module defines the closed set of persisted-column type tags and the
//! three artifact kinds the generator knows about. Both are plain data: the
//! scanners produce them and the code generators consume them.

use std::fmt;

// ============================================================================
// TypeTag
// ============================================================================

/// Declared storage type of a persisted column.
///
/// This is a closed set: a declared tag outside it is coerced to
/// [`TypeTag::Unknown`] rather than treated as an error, so an entity with
/// exotic column types still generates a test file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Short string (VARCHAR-class)
    String,
    /// Integer
    Integer,
    /// Boolean
    Boolean,
    /// Primary key column
    Id,
    /// Floating point number
    Float,
    /// Long text (unbounded)
    Text,
    /// Date and time
    DateTime,
    /// Date without a time component
    Date,
    /// Array value
    Array,
    /// Flat array value
    SimpleArray,
    /// Sentinel for any tag outside the recognized set
    Unknown,
}

impl TypeTag {
    /// All recognized tags, excluding the `Unknown` sentinel.
    pub const KNOWN: [TypeTag; 10] = [
        TypeTag::String,
        TypeTag::Integer,
        TypeTag::Boolean,
        TypeTag::Id,
        TypeTag::Float,
        TypeTag::Text,
        TypeTag::DateTime,
        TypeTag::Date,
        TypeTag::Array,
        TypeTag::SimpleArray,
    ];

    /// Parse a declared tag string.
    ///
    /// Total: anything outside the recognized set yields [`TypeTag::Unknown`].
    pub fn parse(tag: &str) -> Self {
        match tag {
            "string" => TypeTag::String,
            "integer" => TypeTag::Integer,
            "boolean" => TypeTag::Boolean,
            "Id" => TypeTag::Id,
            "float" => TypeTag::Float,
            "text" => TypeTag::Text,
            "datetime" => TypeTag::DateTime,
            "date" => TypeTag::Date,
            "array" => TypeTag::Array,
            "simple_array" => TypeTag::SimpleArray,
            _ => TypeTag::Unknown,
        }
    }

    /// The canonical tag string, as it appears in column attributes and in
    /// generated assertion entries.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Integer => "integer",
            TypeTag::Boolean => "boolean",
            TypeTag::Id => "Id",
            TypeTag::Float => "float",
            TypeTag::Text => "text",
            TypeTag::DateTime => "datetime",
            TypeTag::Date => "date",
            TypeTag::Array => "array",
            TypeTag::SimpleArray => "simple_array",
            TypeTag::Unknown => "Unknown",
        }
    }

    /// Check if this tag is in the recognized set
    pub fn is_known(&self) -> bool {
        !matches!(self, TypeTag::Unknown)
    }

    /// Check if this tag marks a primary key column
    pub fn is_id(&self) -> bool {
        matches!(self, TypeTag::Id)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ArtifactKind
// ============================================================================

/// The kind of source artifact a generation run targets.
///
/// The kind determines which directory convention, scanner rule, and template
/// apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Routed request handlers
    Controller,
    /// Persisted data models
    Entity,
    /// Form types bound to an entity
    Form,
}

impl ArtifactKind {
    /// All kinds, in generation order.
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Controller,
        ArtifactKind::Entity,
        ArtifactKind::Form,
    ];

    /// Lowercase singular name (used in log lines and CLI help)
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Controller => "controller",
            ArtifactKind::Entity => "entity",
            ArtifactKind::Form => "form",
        }
    }

    /// Default source directory, relative to the module root
    pub fn default_source_dir(&self) -> &'static str {
        match self {
            ArtifactKind::Controller => "src/controllers",
            ArtifactKind::Entity => "src/entities",
            ArtifactKind::Form => "src/forms",
        }
    }

    /// Output subdirectory under the tests directory
    pub fn test_subdir(&self) -> &'static str {
        match self {
            ArtifactKind::Controller => "controllers",
            ArtifactKind::Entity => "entities",
            ArtifactKind::Form => "forms",
        }
    }

    /// Human-readable banner label
    pub fn banner(&self) -> &'static str {
        match self {
            ArtifactKind::Controller => "Controller test generator",
            ArtifactKind::Entity => "Entity test generator",
            ArtifactKind::Form => "Form test generator",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
