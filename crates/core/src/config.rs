//! Configuration for a generation run
//!
//! Configuration is optional: a module with no `testforge.toml` gets the
//! default directory conventions and naming rule. A config file that exists
//! but does not parse is a startup error, not a per-file one.
//!
//! ```toml
//! [paths]
//! controllers = "src/controllers"
//! entities = "src/entities"
//! forms = "src/forms"
//! tests = "tests"
//!
//! [naming]
//! form_suffix = "Form"
//! ```

use crate::error::{ForgeError, ForgeResult};
use crate::types::ArtifactKind;
use serde::Deserialize;
use std::path::Path;

/// Default configuration file name, looked up in the module root
pub const CONFIG_FILE_NAME: &str = "testforge.toml";

// ============================================================================
// ForgeConfig
// ============================================================================

/// Root configuration for a generation run
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForgeConfig {
    /// Directory conventions, relative to the module root
    pub paths: PathsConfig,

    /// Naming rules linking artifacts together
    pub naming: NamingRule,
}

impl ForgeConfig {
    /// Load configuration from an explicit file path.
    ///
    /// The file must exist and parse; use [`ForgeConfig::load_for_module`]
    /// for the optional lookup.
    pub fn load_from_file(path: &Path) -> ForgeResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ForgeError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ForgeError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `testforge.toml` from the module root, falling back to defaults
    /// when the file does not exist.
    pub fn load_for_module(module_root: &Path) -> ForgeResult<Self> {
        let path = module_root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Source directory for the given artifact kind, relative to module root
    pub fn source_dir(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Controller => &self.paths.controllers,
            ArtifactKind::Entity => &self.paths.entities,
            ArtifactKind::Form => &self.paths.forms,
        }
    }
}

// ============================================================================
// PathsConfig
// ============================================================================

/// Directory conventions, all relative to the module root
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Where controller sources live
    pub controllers: String,
    /// Where entity sources live
    pub entities: String,
    /// Where form sources live
    pub forms: String,
    /// Root of the generated test tree
    pub tests: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            controllers: ArtifactKind::Controller.default_source_dir().to_string(),
            entities: ArtifactKind::Entity.default_source_dir().to_string(),
            forms: ArtifactKind::Form.default_source_dir().to_string(),
            tests: "tests".to_string(),
        }
    }
}

// ============================================================================
// NamingRule
// ============================================================================

/// The form-to-entity naming rule.
///
/// A form class named `<Entity><form_suffix>` is associated with the entity
/// of that name. The rule is explicit configuration rather than hard-coded
/// string arithmetic so projects with other conventions can adjust it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingRule {
    /// Suffix stripped from a form class name to obtain its entity name
    pub form_suffix: String,
}

impl Default for NamingRule {
    fn default() -> Self {
        Self {
            form_suffix: "Form".to_string(),
        }
    }
}

impl NamingRule {
    /// Derive the entity class name for a form class name.
    ///
    /// Returns `None` when the form name does not follow the rule (no suffix,
    /// or nothing left once the suffix is stripped); the form generator then
    /// emits its degenerate skipped output.
    pub fn entity_for_form(&self, form_class: &str) -> Option<String> {
        let stem = form_class.strip_suffix(&self.form_suffix)?;
        if stem.is_empty() {
            return None;
        }
        Some(stem.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
