//! # Template Registry
//!
//! Owns the embedded Handlebars templates and renders them in strict mode,
//! so a template referencing a parameter the renderer did not supply fails
//! loudly instead of emitting an empty hole in the generated test.

use handlebars::Handlebars;
use serde_json::Value;
use testforge_core::{ForgeError, ForgeResult};

// ============================================================================
// Template Names
// ============================================================================

/// Request-test skeleton for a controller, one stub per routed action.
pub const TEMPLATE_CONTROLLER_TEST: &str = "controller_test";

/// Column-declaration test for an entity plus one stub per column.
pub const TEMPLATE_ENTITY_TEST: &str = "entity_test";

/// Submission test for a form whose entity was resolved.
pub const TEMPLATE_FORM_TEST: &str = "form_test";

/// Placeholder test for a form with no matching entity.
pub const TEMPLATE_FORM_TEST_SKIPPED: &str = "form_test_skipped";

// ============================================================================
// Embedded Templates
// ============================================================================

const CONTROLLER_TEST: &str = r#"//! Auto-generated request tests for `{{class}}`.
//!
//! One stub per routed action. Replace each `todo!` with a real request
//! against the route it names.

{{#each actions}}
/// `{{display_name}}` handles `{{route}}`.
#[test]
#[ignore = "auto-generated stub"]
fn {{method}}() {
    let route = "{{route}}";
    todo!("send a request to {route} and assert the response");
}

{{/each}}"#;

const ENTITY_TEST: &str = r#"//! Auto-generated column tests for `{{class}}`.
//!
//! The declaration table below mirrors the `#[column]` markers found on
//! `{{class}}`. Update it together with the entity.

#[test]
fn persisted_columns_match_declarations() {
    let columns: Vec<(&str, &str)> = vec![
{{#each fields}}
        ("{{column}}", "{{type_tag}}"),
{{/each}}
    ];

    for (name, type_tag) in columns {
        assert!(!name.is_empty());
        assert!(!type_tag.is_empty(), "column `{name}` has an empty type tag");
    }
}
{{#each fields}}

/// `{{../class}}.{{name}}` is persisted as `{{column}}` ({{type_tag}}).
#[test]
#[ignore = "auto-generated stub"]
fn {{name}}_column_round_trip() {
    todo!("construct a {{../class}}, set `{{name}}`, and assert it round-trips");
}
{{/each}}
"#;

const FORM_TEST: &str = r#"//! Auto-generated submission tests for `{{form}}`.
//!
//! The sample values below are synthesized from the persisted columns of
//! `{{entity}}`, one fixed literal per declared type.

#![allow(unused_variables)]

#[test]
#[ignore = "auto-generated stub"]
fn submit_valid_data() {
{{#each fields}}
    let {{name}} = {{sample}};
{{/each}}
    todo!("bind the values above to `{{form}}` and assert `{{entity}}` is populated");
}

#[test]
#[ignore = "auto-generated stub"]
fn custom_form_view() {
    todo!("render `{{form}}` and assert the view state");
}
"#;

const FORM_TEST_SKIPPED: &str = r#"//! Auto-generated submission tests for `{{form}}`.
//!
//! {{reason}} The tests below stay ignored until one exists.

#[test]
#[ignore = "no entity matching this form"]
fn submit_valid_data() {}

#[test]
#[ignore = "no entity matching this form"]
fn custom_form_view() {}
"#;

// ============================================================================
// Registry
// ============================================================================

/// A preloaded Handlebars instance holding every test template.
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Builds a registry with all templates registered.
    ///
    /// The embedded templates are known-good, so registration failures are
    /// programming errors and surface as [`ForgeError::Internal`].
    pub fn new() -> ForgeResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        let templates = [
            (TEMPLATE_CONTROLLER_TEST, CONTROLLER_TEST),
            (TEMPLATE_ENTITY_TEST, ENTITY_TEST),
            (TEMPLATE_FORM_TEST, FORM_TEST),
            (TEMPLATE_FORM_TEST_SKIPPED, FORM_TEST_SKIPPED),
        ];
        for (name, source) in templates {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| {
                    ForgeError::internal(format!("template `{name}` failed to register: {e}"))
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Renders a registered template with the given parameters.
    pub fn render(&self, name: &str, params: &Value) -> ForgeResult<String> {
        if !self.handlebars.has_template(name) {
            return Err(ForgeError::UnknownTemplate(name.to_string()));
        }
        self.handlebars
            .render(name, params)
            .map_err(|e| ForgeError::template_render(name, e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
