//! Entity scanner
//!
//! Extracts the persisted columns of an entity class. A column is a named
//! struct field carrying a `#[column(...)]` attribute with a
//! `type_name = "..."` argument, an optional `name = "..."` override, and an
//! optional `primary_key` flag. Fields without the marker are not persisted
//! and are skipped. Declared types outside the recognized closed set are
//! coerced to the `Unknown` sentinel rather than failing the scan.

use crate::member::PersistedField;
use crate::source::{declares_type, parse_source};
use std::path::Path;
use testforge_core::{ForgeError, ForgeResult, TypeTag};

/// Marker attribute name for persisted columns
pub const COLUMN_MARKER: &str = "column";

// ============================================================================
// EntityClass
// ============================================================================

/// Scanned metadata for one entity class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityClass {
    /// Type name (e.g. `Post`)
    pub name: String,

    /// Persisted columns, in declaration order
    pub fields: Vec<PersistedField>,
}

impl EntityClass {
    /// Columns that take part in form submission (everything but the primary key)
    pub fn form_fields(&self) -> impl Iterator<Item = &PersistedField> {
        self.fields.iter().filter(|f| !f.type_tag.is_id())
    }
}

// ============================================================================
// Scanner
// ============================================================================

/// Scan an entity source file for persisted columns.
///
/// # Errors
///
/// - [`ForgeError::SourceParse`] when the file is not valid Rust
/// - [`ForgeError::ClassNotFound`] when the expected type is not declared
/// - [`ForgeError::MalformedMarker`] when a `#[column]` attribute does not
///   parse as a comma-separated argument list
pub fn scan_entity(source: &str, class_name: &str, path: &Path) -> ForgeResult<EntityClass> {
    let file = parse_source(source, path)?;

    if !declares_type(&file, class_name) {
        return Err(ForgeError::class_not_found(path, class_name));
    }

    let mut fields = Vec::new();

    for item in &file.items {
        let syn::Item::Struct(strukt) = item else {
            continue;
        };
        if strukt.ident != class_name {
            continue;
        }
        let syn::Fields::Named(named) = &strukt.fields else {
            // tuple or unit struct: nothing persisted to extract
            continue;
        };

        for field in &named.named {
            let Some(ident) = &field.ident else { continue };
            let field_name = ident.to_string();

            let Some(column) = column_of(&field_name, &field.attrs)? else {
                continue;
            };

            let tag = if column.primary_key {
                TypeTag::Id
            } else {
                column
                    .type_name
                    .as_deref()
                    .map(TypeTag::parse)
                    .unwrap_or(TypeTag::Unknown)
            };
            let mut record = PersistedField::new(field_name, tag);
            if let Some(column_name) = column.name {
                record = record.with_column_name(column_name);
            }
            fields.push(record);
        }
    }

    tracing::debug!(class = class_name, columns = fields.len(), "scanned entity");

    Ok(EntityClass {
        name: class_name.to_string(),
        fields,
    })
}

/// Parsed arguments of one `#[column(...)]` attribute
#[derive(Debug, Default)]
struct ColumnArgs {
    type_name: Option<String>,
    name: Option<String>,
    primary_key: bool,
}

/// Extract the column arguments from a field's attributes, if the marker is present
fn column_of(field: &str, attrs: &[syn::Attribute]) -> ForgeResult<Option<ColumnArgs>> {
    for attr in attrs {
        if !attr.path().is_ident(COLUMN_MARKER) {
            continue;
        }

        // A bare `#[column]` is a valid marker with no declared type.
        if matches!(attr.meta, syn::Meta::Path(_)) {
            return Ok(Some(ColumnArgs::default()));
        }

        let mut args = ColumnArgs::default();
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("type_name") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                args.type_name = Some(lit.value());
            } else if meta.path.is_ident("name") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                args.name = Some(lit.value());
            } else if meta.path.is_ident("primary_key") {
                args.primary_key = true;
            } else if meta.input.peek(syn::Token![=]) {
                // unrecognized key=value argument: consume and ignore
                let _: syn::Expr = meta.value()?.parse()?;
            }
            Ok(())
        })
        .map_err(|e| ForgeError::malformed_marker(COLUMN_MARKER, field, e.to_string()))?;

        return Ok(Some(args));
    }
    Ok(None)
}

// ============================================================================
// Tests
// ============================================================================
