//! Source file discovery
//!
//! A generation run starts by enumerating the `.rs` files in one
//! convention-derived directory. Each file is expected to declare exactly one
//! type whose name is the PascalCase form of the file stem
//! (`post_controller.rs` → `PostController`). That expectation is data here;
//! the scanners verify it against the parsed file.

use heck::ToPascalCase;
use std::path::{Path, PathBuf};
use testforge_core::{ForgeError, ForgeResult};
use walkdir::WalkDir;

// ============================================================================
// SourceUnit
// ============================================================================

/// A discovered source file believed to define exactly one class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Absolute or module-relative path to the file
    pub path: PathBuf,

    /// Type name derived from the file stem
    pub class_name: String,
}

impl SourceUnit {
    /// Build a source unit for a path, deriving the class name from the stem.
    ///
    /// Returns `None` for paths without a usable UTF-8 file stem.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let stem = path.file_stem()?.to_str()?;
        if stem.is_empty() {
            return None;
        }
        Some(Self {
            class_name: stem.to_pascal_case(),
            path,
        })
    }

    /// Read the file contents
    pub fn read(&self) -> ForgeResult<String> {
        std::fs::read_to_string(&self.path).map_err(|e| ForgeError::FileRead {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// The file name without its extension
    pub fn file_stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }
}

// ============================================================================
// Discovery
// ============================================================================

/// Enumerate the source units in a directory, sorted by file name.
///
/// Only immediate `.rs` children are considered; `mod.rs` is skipped since it
/// declares the module rather than a class. A missing directory is an error;
/// it means the module argument or path configuration is wrong.
pub fn discover_sources(dir: &Path) -> ForgeResult<Vec<SourceUnit>> {
    if !dir.is_dir() {
        return Err(ForgeError::SourceDirNotFound(dir.to_path_buf()));
    }

    let mut units: Vec<SourceUnit> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .filter(|e| e.file_name() != "mod.rs")
        .filter_map(|e| SourceUnit::from_path(e.into_path()))
        .collect();

    // sort_by_file_name already orders entries, but make the contract explicit
    units.sort_by(|a, b| a.path.cmp(&b.path));

    tracing::debug!(dir = %dir.display(), count = units.len(), "discovered source units");
    Ok(units)
}

// ============================================================================
// Parsing helpers shared by the scanners
// ============================================================================

/// Parse a source file, mapping syntax errors to a per-file scan error
pub(crate) fn parse_source(source: &str, path: &Path) -> ForgeResult<syn::File> {
    syn::parse_file(source).map_err(|e| ForgeError::source_parse(path, e.to_string()))
}

/// Check that the expected type is declared in the file.
///
/// This is the "class is loadable" check: a struct or enum with the derived
/// name must exist at the top level of the file.
pub(crate) fn declares_type(file: &syn::File, class_name: &str) -> bool {
    file.items.iter().any(|item| match item {
        syn::Item::Struct(s) => s.ident == class_name,
        syn::Item::Enum(e) => e.ident == class_name,
        _ => false,
    })
}

// ============================================================================
// Tests
// ============================================================================
