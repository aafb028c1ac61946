//! Form scanner
//!
//! A form class is linked to its entity by the configured naming rule
//! (`PostForm` → `Post` by default), not by structural introspection. The
//! scanner records the form and the derived entity name; resolution then
//! looks the entity up on disk and scans its columns. A form whose entity
//! cannot be found is not an error. The generator emits a degenerate
//! skipped test file for it.

use crate::entity::{EntityClass, scan_entity};
use crate::source::{declares_type, parse_source};
use heck::ToSnakeCase;
use std::path::Path;
use testforge_core::{ArtifactKind, ForgeConfig, ForgeError, ForgeResult};

// ============================================================================
// FormClass
// ============================================================================

/// Scanned metadata for one form class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormClass {
    /// Type name (e.g. `PostForm`)
    pub name: String,

    /// Entity name derived by the naming rule, if the form name follows it
    pub entity_name: Option<String>,
}

// ============================================================================
// Scanner
// ============================================================================

/// Scan a form source file and derive its entity name.
///
/// # Errors
///
/// - [`ForgeError::SourceParse`] when the file is not valid Rust
/// - [`ForgeError::ClassNotFound`] when the expected type is not declared
pub fn scan_form(
    source: &str,
    class_name: &str,
    path: &Path,
    config: &ForgeConfig,
) -> ForgeResult<FormClass> {
    let file = parse_source(source, path)?;

    if !declares_type(&file, class_name) {
        return Err(ForgeError::class_not_found(path, class_name));
    }

    let entity_name = config.naming.entity_for_form(class_name);
    tracing::debug!(
        class = class_name,
        entity = entity_name.as_deref().unwrap_or("<none>"),
        "scanned form"
    );

    Ok(FormClass {
        name: class_name.to_string(),
        entity_name,
    })
}

/// Resolve a form's entity on disk and scan its columns.
///
/// Returns `Ok(None)` when the form has no matching entity: the naming rule
/// produced no name, the entity file does not exist, or the file exists but
/// does not declare the type. Parse failures in an existing entity file are
/// real errors and propagate.
pub fn resolve_entity(
    module_root: &Path,
    config: &ForgeConfig,
    form: &FormClass,
) -> ForgeResult<Option<EntityClass>> {
    let Some(entity_name) = &form.entity_name else {
        return Ok(None);
    };

    let entity_path = module_root
        .join(config.source_dir(ArtifactKind::Entity))
        .join(format!("{}.rs", entity_name.to_snake_case()));

    if !entity_path.is_file() {
        tracing::debug!(
            form = %form.name,
            entity = %entity_name,
            path = %entity_path.display(),
            "no entity file for form"
        );
        return Ok(None);
    }

    let source = std::fs::read_to_string(&entity_path).map_err(|e| ForgeError::FileRead {
        path: entity_path.clone(),
        message: e.to_string(),
    })?;

    match scan_entity(&source, entity_name, &entity_path) {
        Ok(entity) => Ok(Some(entity)),
        Err(ForgeError::ClassNotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use testforge_core::TypeTag;

    fn write_entity(dir: &Path, name: &str, source: &str) {
        let entities = dir.join("src/entities");
        std::fs::create_dir_all(&entities).unwrap();
        std::fs::write(entities.join(name), source).unwrap();
    }

    #[test]
    fn test_scan_form_derives_entity_name() {
        let config = ForgeConfig::default();
        let form = scan_form(
            "pub struct PostForm;",
            "PostForm",
            Path::new("post_form.rs"),
            &config,
        )
        .unwrap();
        assert_eq!(form.entity_name, Some("Post".to_string()));
    }

    #[test]
    fn test_scan_form_without_suffix() {
        let config = ForgeConfig::default();
        let form = scan_form(
            "pub struct Wizard;",
            "Wizard",
            Path::new("wizard.rs"),
            &config,
        )
        .unwrap();
        assert_eq!(form.entity_name, None);
    }

    #[test]
    fn test_resolve_entity_found() {
        let dir = tempfile::tempdir().unwrap();
        write_entity(
            dir.path(),
            "post.rs",
            r#"
                pub struct Post {
                    #[column(type_name = "string")]
                    pub title: String,
                }
            "#,
        );

        let config = ForgeConfig::default();
        let form = FormClass {
            name: "PostForm".to_string(),
            entity_name: Some("Post".to_string()),
        };

        let entity = resolve_entity(dir.path(), &config, &form).unwrap().unwrap();
        assert_eq!(entity.name, "Post");
        assert_eq!(entity.fields[0].type_tag, TypeTag::String);
    }

    #[test]
    fn test_resolve_entity_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ForgeConfig::default();
        let form = FormClass {
            name: "PostForm".to_string(),
            entity_name: Some("Post".to_string()),
        };

        assert_eq!(resolve_entity(dir.path(), &config, &form).unwrap(), None);
    }

    #[test]
    fn test_resolve_entity_wrong_type_in_file() {
        let dir = tempfile::tempdir().unwrap();
        write_entity(dir.path(), "post.rs", "pub struct Comment;");

        let config = ForgeConfig::default();
        let form = FormClass {
            name: "PostForm".to_string(),
            entity_name: Some("Post".to_string()),
        };

        assert_eq!(resolve_entity(dir.path(), &config, &form).unwrap(), None);
    }

    #[test]
    fn test_resolve_entity_no_derived_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = ForgeConfig::default();
        let form = FormClass {
            name: "Wizard".to_string(),
            entity_name: None,
        };

        assert_eq!(resolve_entity(dir.path(), &config, &form).unwrap(), None);
    }

    #[test]
    fn test_resolve_entity_broken_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_entity(dir.path(), "post.rs", "pub struct {");

        let config = ForgeConfig::default();
        let form = FormClass {
            name: "PostForm".to_string(),
            entity_name: Some("Post".to_string()),
        };

        let err = resolve_entity(dir.path(), &config, &form).unwrap_err();
        assert!(matches!(err, ForgeError::SourceParse { .. }));
    }

    #[test]
    fn test_snake_case_entity_file_lookup() {
        let dir = tempfile::tempdir().unwrap();
        write_entity(
            dir.path(),
            "user_profile.rs",
            r#"
                pub struct UserProfile {
                    #[column(type_name = "text")]
                    pub bio: String,
                }
            "#,
        );

        let config = ForgeConfig::default();
        let form = FormClass {
            name: "UserProfileForm".to_string(),
            entity_name: Some("UserProfile".to_string()),
        };

        let entity = resolve_entity(dir.path(), &config, &form).unwrap().unwrap();
        assert_eq!(entity.name, "UserProfile");
    }
}
