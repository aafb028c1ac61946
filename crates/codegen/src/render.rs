//! # Test Rendering
//!
//! Pure functions that turn scanned classes into generated test source.
//! Each one builds the parameter bundle for its template and hands it to
//! the [`TemplateRegistry`]; nothing here touches the file system.

use serde_json::json;
use testforge_core::ForgeResult;
use testforge_scan::{ControllerClass, EntityClass, FormClass};

use crate::samples::sample_value;
use crate::templates::{
    TEMPLATE_CONTROLLER_TEST, TEMPLATE_ENTITY_TEST, TEMPLATE_FORM_TEST,
    TEMPLATE_FORM_TEST_SKIPPED, TemplateRegistry,
};

// ============================================================================
// Renderers
// ============================================================================

/// Renders the request-test skeleton for a scanned controller.
pub fn controller_test(
    templates: &TemplateRegistry,
    controller: &ControllerClass,
) -> ForgeResult<String> {
    let actions: Vec<_> = controller
        .actions
        .iter()
        .map(|action| {
            json!({
                "method": action.method,
                "display_name": action.display_name,
                "route": action.route,
            })
        })
        .collect();

    templates.render(
        TEMPLATE_CONTROLLER_TEST,
        &json!({
            "class": controller.name,
            "actions": actions,
        }),
    )
}

/// Renders the column-test skeleton for a scanned entity.
pub fn entity_test(templates: &TemplateRegistry, entity: &EntityClass) -> ForgeResult<String> {
    let fields: Vec<_> = entity
        .fields
        .iter()
        .map(|field| {
            json!({
                "name": field.name,
                "column": field.column_name,
                "type_tag": field.type_tag.as_str(),
            })
        })
        .collect();

    templates.render(
        TEMPLATE_ENTITY_TEST,
        &json!({
            "class": entity.name,
            "fields": fields,
        }),
    )
}

/// Renders the submission-test skeleton for a scanned form.
///
/// With a resolved entity the test binds one sample value per non-id
/// column. Without one it falls back to a pair of permanently ignored
/// stubs that explain what is missing.
pub fn form_test(
    templates: &TemplateRegistry,
    form: &FormClass,
    entity: Option<&EntityClass>,
) -> ForgeResult<String> {
    match entity {
        Some(entity) => {
            let fields: Vec<_> = entity
                .form_fields()
                .map(|field| {
                    json!({
                        "name": field.name,
                        "sample": sample_value(field.type_tag),
                    })
                })
                .collect();

            templates.render(
                TEMPLATE_FORM_TEST,
                &json!({
                    "form": form.name,
                    "entity": entity.name,
                    "fields": fields,
                }),
            )
        }
        None => {
            let reason = match &form.entity_name {
                Some(entity_name) => {
                    format!("No entity named `{entity_name}` was found for this form.")
                }
                None => "The form name does not follow the configured naming rule, so no \
                         entity could be derived for it."
                    .to_string(),
            };

            templates.render(
                TEMPLATE_FORM_TEST_SKIPPED,
                &json!({
                    "form": form.name,
                    "reason": reason,
                }),
            )
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use testforge_core::TypeTag;
    use testforge_scan::{Action, PersistedField};

    fn registry() -> TemplateRegistry {
        TemplateRegistry::new().expect("templates register")
    }

    #[test]
    fn controller_stub_names_the_route() {
        let controller = ControllerClass {
            name: "PageController".to_string(),
            actions: vec![Action::new("hello", "Hello", "/hello")],
        };

        let out = controller_test(&registry(), &controller).expect("renders");
        assert!(out.contains("fn hello()"));
        assert!(out.contains(r#"let route = "/hello";"#));
        assert!(out.contains("`PageController`"));
    }

    #[test]
    fn controller_with_no_actions_still_renders() {
        let controller = ControllerClass {
            name: "BareController".to_string(),
            actions: Vec::new(),
        };

        let out = controller_test(&registry(), &controller).expect("renders");
        assert!(out.starts_with("//!"));
        assert!(!out.contains("fn "));
    }

    #[test]
    fn entity_test_declares_each_column() {
        let entity = EntityClass {
            name: "Post".to_string(),
            fields: vec![
                PersistedField::new("id", TypeTag::Id),
                PersistedField::new("title", TypeTag::String),
            ],
        };

        let out = entity_test(&registry(), &entity).expect("renders");
        assert!(out.contains(r#"("id", "Id"),"#));
        assert!(out.contains(r#"("title", "string"),"#));
        assert!(out.contains("fn title_column_round_trip()"));
    }

    #[test]
    fn renamed_column_never_reaches_an_identifier_position() {
        let entity = EntityClass {
            name: "User".to_string(),
            fields: vec![
                PersistedField::new("full_name", TypeTag::String).with_column_name("user name"),
            ],
        };

        let out = entity_test(&registry(), &entity).expect("renders");
        // the override may be any string, so it stays inside string literals
        assert!(out.contains(r#"("user name", "string"),"#));
        assert!(out.contains("fn full_name_column_round_trip()"));
        assert!(!out.contains("fn user name"));
        assert!(syn::parse_file(&out).is_ok());
    }

    #[test]
    fn entity_with_no_columns_renders_an_empty_table() {
        let entity = EntityClass {
            name: "Marker".to_string(),
            fields: Vec::new(),
        };

        let out = entity_test(&registry(), &entity).expect("renders");
        assert!(out.contains("let columns: Vec<(&str, &str)> = vec![\n    ];"));
    }

    #[test]
    fn form_test_binds_a_sample_per_non_id_column() {
        let form = FormClass {
            name: "PostForm".to_string(),
            entity_name: Some("Post".to_string()),
        };
        let entity = EntityClass {
            name: "Post".to_string(),
            fields: vec![
                PersistedField::new("id", TypeTag::Id),
                PersistedField::new("title", TypeTag::String),
                PersistedField::new("views", TypeTag::Integer),
            ],
        };

        let out = form_test(&registry(), &form, Some(&entity)).expect("renders");
        assert!(!out.contains("let id ="));
        assert!(out.contains(r#"let title = "This is a test string and should look like this";"#));
        assert!(out.contains("let views = 12345;"));
        assert!(out.contains("`Post` is populated"));
    }

    #[test]
    fn unresolved_entity_yields_ignored_stubs() {
        let form = FormClass {
            name: "PostForm".to_string(),
            entity_name: Some("Post".to_string()),
        };

        let out = form_test(&registry(), &form, None).expect("renders");
        assert!(out.contains("No entity named `Post` was found"));
        assert_eq!(out.matches(r#"#[ignore = "no entity matching this form"]"#).count(), 2);
        assert!(out.contains("fn submit_valid_data() {}"));
    }

    #[test]
    fn non_conforming_form_name_explains_the_naming_rule() {
        let form = FormClass {
            name: "Widget".to_string(),
            entity_name: None,
        };

        let out = form_test(&registry(), &form, None).expect("renders");
        assert!(out.contains("does not follow the configured naming rule"));
    }
}
