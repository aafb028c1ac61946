//! Extracted member records
//!
//! One record is produced per class member that carries a recognized marker
//! attribute. Members without a marker are skipped by the scanners, never
//! recorded. These are the two variants of the extracted-member model: an
//! [`Action`] comes from a routed controller method, a [`PersistedField`]
//! from a column-marked entity field.

use testforge_core::TypeTag;

// ============================================================================
// Action
// ============================================================================

/// A routed public method extracted from a controller class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Method name as written in the source (snake_case)
    pub method: String,

    /// PascalCase display name for headings and log lines
    pub display_name: String,

    /// Route path from the `#[route("...")]` marker
    pub route: String,
}

impl Action {
    /// Create a new action record
    pub fn new(
        method: impl Into<String>,
        display_name: impl Into<String>,
        route: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            display_name: display_name.into(),
            route: route.into(),
        }
    }
}

// ============================================================================
// PersistedField
// ============================================================================

/// A persisted column extracted from an entity class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedField {
    /// Struct field identifier. Generated tests derive their own
    /// identifiers from this, so it must stay a valid Rust name.
    pub name: String,

    /// Declared column name: the field identifier, unless overridden by
    /// `name = "..."`. May be any string (quoted DB column names are
    /// legal), so it only ever appears inside generated string literals.
    pub column_name: String,

    /// Declared storage type, coerced through the closed [`TypeTag`] set
    pub type_tag: TypeTag,
}

impl PersistedField {
    /// Create a new persisted-field record; the column name defaults to
    /// the field identifier.
    pub fn new(name: impl Into<String>, type_tag: TypeTag) -> Self {
        let name = name.into();
        Self {
            column_name: name.clone(),
            name,
            type_tag,
        }
    }

    /// Override the declared column name, leaving the field identifier
    /// untouched.
    pub fn with_column_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = column_name.into();
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
