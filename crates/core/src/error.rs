//! Error types for testforge
//!
//! This module provides unified error handling across the generator,
//! covering source scanning, template rendering, configuration, and IO.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for testforge
#[derive(Debug, Error)]
pub enum ForgeError {
    // ========================================================================
    // Scan Errors
    // ========================================================================
    /// A source file could not be parsed as Rust
    #[error("Failed to parse '{}': {message}", .path.display())]
    SourceParse { path: PathBuf, message: String },

    /// The type derived from a file name was not declared in that file
    #[error("File '{}' was found but the type '{class}' was not declared in it", .path.display())]
    ClassNotFound { path: PathBuf, class: String },

    /// A marker attribute was present but malformed
    #[error("Malformed '{marker}' attribute on '{member}': {message}")]
    MalformedMarker {
        marker: String,
        member: String,
        message: String,
    },

    /// The source directory for a scan does not exist
    #[error("Source directory not found: {}", .0.display())]
    SourceDirNotFound(PathBuf),

    // ========================================================================
    // Generation Errors
    // ========================================================================
    /// Template rendering failed (strict mode: unresolved placeholders are fatal)
    #[error("Template rendering failed for '{template}': {message}")]
    TemplateRender { template: String, message: String },

    /// No template is registered under the requested name
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{}': {message}", .path.display())]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{}': {message}", .path.display())]
    FileWrite { path: PathBuf, message: String },

    /// Directory creation failed
    #[error("Failed to create directory '{}': {message}", .path.display())]
    DirectoryCreate { path: PathBuf, message: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration file exists but could not be parsed
    #[error("Invalid configuration in '{}': {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl ForgeError {
    /// Create a source-parse error
    pub fn source_parse(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        ForgeError::SourceParse {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a class-not-found error
    pub fn class_not_found(path: impl Into<PathBuf>, class: impl Into<String>) -> Self {
        ForgeError::ClassNotFound {
            path: path.into(),
            class: class.into(),
        }
    }

    /// Create a malformed-marker error
    pub fn malformed_marker(
        marker: impl Into<String>,
        member: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        ForgeError::MalformedMarker {
            marker: marker.into(),
            member: member.into(),
            message: msg.into(),
        }
    }

    /// Create a template-render error
    pub fn template_render(template: impl Into<String>, msg: impl Into<String>) -> Self {
        ForgeError::TemplateRender {
            template: template.into(),
            message: msg.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        ForgeError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        ForgeError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error came from scanning a source file
    pub fn is_scan(&self) -> bool {
        matches!(
            self,
            ForgeError::SourceParse { .. }
                | ForgeError::ClassNotFound { .. }
                | ForgeError::MalformedMarker { .. }
                | ForgeError::SourceDirNotFound(_)
        )
    }

    /// Check if this error came from template rendering
    pub fn is_render(&self) -> bool {
        matches!(
            self,
            ForgeError::TemplateRender { .. } | ForgeError::UnknownTemplate(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ForgeError::Io(_)
                | ForgeError::FileRead { .. }
                | ForgeError::FileWrite { .. }
                | ForgeError::DirectoryCreate { .. }
        )
    }

}

/// Result type alias using ForgeError
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> ForgeResult<T>;
}

impl<T, E: Into<ForgeError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> ForgeResult<T> {
        self.map_err(|e| {
            let err: ForgeError = e.into();
            ForgeError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_source_parse_error() {
        let err = ForgeError::source_parse("src/controllers/post_controller.rs", "expected `}`");
        assert!(err.is_scan());
        assert!(!err.is_io());
        assert_eq!(
            err.to_string(),
            "Failed to parse 'src/controllers/post_controller.rs': expected `}`"
        );
    }

    #[test]
    fn test_class_not_found_error() {
        let err = ForgeError::class_not_found("src/entities/post.rs", "Post");
        assert!(err.is_scan());
        assert_eq!(
            err.to_string(),
            "File 'src/entities/post.rs' was found but the type 'Post' was not declared in it"
        );
    }

    #[test]
    fn test_malformed_marker_error() {
        let err = ForgeError::malformed_marker("route", "hello", "expected string literal");
        assert!(err.is_scan());
        assert_eq!(
            err.to_string(),
            "Malformed 'route' attribute on 'hello': expected string literal"
        );
    }

    #[test]
    fn test_template_render_error() {
        let err = ForgeError::template_render("controller_test", "variable `actions` not found");
        assert!(err.is_render());
        assert!(!err.is_scan());
        assert_eq!(
            err.to_string(),
            "Template rendering failed for 'controller_test': variable `actions` not found"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = ForgeError::with_context("Scanning forms", "permission denied");
        assert_eq!(err.to_string(), "Scanning forms: permission denied");
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ForgeError = io_err.into();
        assert!(err.is_io());
        assert!(!err.is_render());
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.with_context("Writing output").unwrap_err();
        assert_eq!(err.to_string(), "Writing output: IO error: denied");
    }
}
