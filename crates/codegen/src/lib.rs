//! # Testforge Codegen
//!
//! Test skeleton generation for Testforge.
//!
//! This crate turns the classes scanned out of a module's source tree into
//! ready-to-fill test files and writes them under the module's test tree.
//!
//! ## Pieces
//!
//! - **Samples**: fixed sample expression per persisted column type
//! - **Templates**: embedded Handlebars templates, rendered in strict mode
//! - **Render**: pure class-to-source functions, one per artifact kind
//! - **Generator**: the batch driver with per-file failure isolation
//!

// ============================================================================
// Modules
// ============================================================================

pub mod generator;
pub mod render;
pub mod samples;
pub mod templates;

// ============================================================================
// Re-exports
// ============================================================================

pub use generator::{FileOutcome, GenerationReport, Generator, TaskOutcome};
pub use samples::sample_value;
pub use templates::{
    TEMPLATE_CONTROLLER_TEST, TEMPLATE_ENTITY_TEST, TEMPLATE_FORM_TEST,
    TEMPLATE_FORM_TEST_SKIPPED, TemplateRegistry,
};

use std::path::{Path, PathBuf};

use heck::ToSnakeCase;

use testforge_core::{ArtifactKind, ForgeConfig, ForgeError, ForgeResult};

// ============================================================================
// GeneratedFile
// ============================================================================

/// A rendered test file ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Absolute destination path.
    pub path: PathBuf,

    /// File content.
    pub content: String,

    /// Short human-readable description, used in logs.
    pub description: String,
}

impl GeneratedFile {
    /// Create a new generated file.
    pub fn new(
        path: impl Into<PathBuf>,
        content: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            description: description.into(),
        }
    }

    /// Write the file, creating parent directories as needed.
    pub fn write(&self) -> ForgeResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ForgeError::DirectoryCreate {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        std::fs::write(&self.path, &self.content).map_err(|e| ForgeError::FileWrite {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Content size in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

// ============================================================================
// Output Paths
// ============================================================================

/// Compute the test file path for a class, without touching the disk.
///
/// The layout is `<module>/<tests dir>/<kind subdir>/<snake_case>_test.rs`,
/// so `PageController` lands at `tests/controllers/page_controller_test.rs`.
pub fn output_path(
    module_root: &Path,
    config: &ForgeConfig,
    kind: ArtifactKind,
    class_name: &str,
) -> PathBuf {
    module_root
        .join(&config.paths.tests)
        .join(kind.test_subdir())
        .join(format!("{}_test.rs", class_name.to_snake_case()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn output_path_snake_cases_the_class_name() {
        let config = ForgeConfig::default();
        let path = output_path(
            Path::new("/srv/app"),
            &config,
            ArtifactKind::Controller,
            "PageController",
        );
        assert_eq!(
            path,
            Path::new("/srv/app/tests/controllers/page_controller_test.rs")
        );
    }

    #[test]
    fn output_path_honors_the_configured_tests_dir() {
        let mut config = ForgeConfig::default();
        config.paths.tests = "generated_tests".to_string();

        let path = output_path(Path::new("/srv/app"), &config, ArtifactKind::Form, "PostForm");
        assert_eq!(
            path,
            Path::new("/srv/app/generated_tests/forms/post_form_test.rs")
        );
    }

    #[test]
    fn output_path_is_deterministic() {
        let config = ForgeConfig::default();
        let a = output_path(Path::new("/m"), &config, ArtifactKind::Entity, "Post");
        let b = output_path(Path::new("/m"), &config, ArtifactKind::Entity, "Post");
        assert_eq!(a, b);
    }

    #[test]
    fn generated_file_write_creates_parent_dirs() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("tests/entities/post_test.rs");

        let file = GeneratedFile::new(&path, "// generated\n", "entity test for Post");
        file.write().expect("write");

        assert_eq!(
            std::fs::read_to_string(&path).expect("read back"),
            "// generated\n"
        );
    }
}
