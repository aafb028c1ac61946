//! Controller scanner
//!
//! Extracts the routed actions of a controller class. An action is a public
//! method in the class's inherent `impl` block carrying a `#[route("...")]`
//! attribute; the first (and only) argument is the route path. Methods
//! without the marker are skipped, so a controller with zero routed methods
//! still scans successfully with an empty action list.

use crate::member::Action;
use crate::source::{declares_type, parse_source};
use heck::ToPascalCase;
use std::path::Path;
use testforge_core::{ForgeError, ForgeResult};

/// Marker attribute name for routed actions
pub const ROUTE_MARKER: &str = "route";

// ============================================================================
// ControllerClass
// ============================================================================

/// Scanned metadata for one controller class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerClass {
    /// Type name (e.g. `PostController`)
    pub name: String,

    /// Routed actions, in declaration order
    pub actions: Vec<Action>,
}

impl ControllerClass {
    /// The controller's subject name, with the `Controller` suffix stripped
    /// when present (`PostController` → `Post`).
    pub fn subject(&self) -> &str {
        self.name.strip_suffix("Controller").unwrap_or(&self.name)
    }
}

// ============================================================================
// Scanner
// ============================================================================

/// Scan a controller source file for routed actions.
///
/// # Errors
///
/// - [`ForgeError::SourceParse`] when the file is not valid Rust
/// - [`ForgeError::ClassNotFound`] when the expected type is not declared
/// - [`ForgeError::MalformedMarker`] when a `#[route]` attribute carries
///   anything other than a single string literal
pub fn scan_controller(source: &str, class_name: &str, path: &Path) -> ForgeResult<ControllerClass> {
    let file = parse_source(source, path)?;

    if !declares_type(&file, class_name) {
        return Err(ForgeError::class_not_found(path, class_name));
    }

    let mut actions = Vec::new();

    for item in &file.items {
        let syn::Item::Impl(imp) = item else { continue };
        // Inherent impls of the controller type only; trait impls carry
        // framework plumbing, not actions.
        if imp.trait_.is_some() || !impl_targets(imp, class_name) {
            continue;
        }

        for impl_item in &imp.items {
            let syn::ImplItem::Fn(method) = impl_item else {
                continue;
            };
            if !matches!(method.vis, syn::Visibility::Public(_)) {
                continue;
            }
            let Some(route) = route_of(&method.sig.ident.to_string(), &method.attrs)? else {
                continue;
            };

            let method_name = method.sig.ident.to_string();
            let display_name = method_name.to_pascal_case();
            actions.push(Action::new(method_name, display_name, route));
        }
    }

    tracing::debug!(class = class_name, actions = actions.len(), "scanned controller");

    Ok(ControllerClass {
        name: class_name.to_string(),
        actions,
    })
}

/// Check whether an impl block targets the given type name
fn impl_targets(imp: &syn::ItemImpl, class_name: &str) -> bool {
    let syn::Type::Path(type_path) = imp.self_ty.as_ref() else {
        return false;
    };
    type_path
        .path
        .segments
        .last()
        .is_some_and(|seg| seg.ident == class_name)
}

/// Extract the route path from a method's attributes, if the marker is present
fn route_of(method: &str, attrs: &[syn::Attribute]) -> ForgeResult<Option<String>> {
    for attr in attrs {
        if !attr.path().is_ident(ROUTE_MARKER) {
            continue;
        }
        let lit: syn::LitStr = attr
            .parse_args()
            .map_err(|e| ForgeError::malformed_marker(ROUTE_MARKER, method, e.to_string()))?;
        return Ok(Some(lit.value()));
    }
    Ok(None)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(source: &str, class: &str) -> ForgeResult<ControllerClass> {
        scan_controller(source, class, Path::new("post_controller.rs"))
    }

    #[test]
    fn test_single_routed_action() {
        let source = r#"
            pub struct PostController;

            impl PostController {
                #[route("/hello")]
                pub fn hello(&self) {}
            }
        "#;
        let controller = scan(source, "PostController").unwrap();
        assert_eq!(controller.actions.len(), 1);
        assert_eq!(
            controller.actions[0],
            Action::new("hello", "Hello", "/hello")
        );
    }

    #[test]
    fn test_unmarked_and_private_methods_skipped() {
        let source = r#"
            pub struct PostController;

            impl PostController {
                #[route("/posts")]
                pub fn index(&self) {}

                pub fn helper(&self) {}

                #[route("/private")]
                fn hidden(&self) {}
            }
        "#;
        let controller = scan(source, "PostController").unwrap();
        let methods: Vec<&str> = controller.actions.iter().map(|a| a.method.as_str()).collect();
        assert_eq!(methods, vec!["index"]);
    }

    #[test]
    fn test_zero_actions_is_valid() {
        let source = "pub struct PostController;";
        let controller = scan(source, "PostController").unwrap();
        assert!(controller.actions.is_empty());
    }

    #[test]
    fn test_trait_impls_ignored() {
        let source = r#"
            pub struct PostController;

            impl Default for PostController {
                fn default() -> Self { Self }
            }

            impl PostController {
                #[route("/posts/{id}")]
                pub fn show(&self) {}
            }
        "#;
        let controller = scan(source, "PostController").unwrap();
        assert_eq!(controller.actions.len(), 1);
        assert_eq!(controller.actions[0].route, "/posts/{id}");
    }

    #[test]
    fn test_class_not_declared() {
        let source = "pub struct SomethingElse;";
        let err = scan(source, "PostController").unwrap_err();
        assert!(matches!(err, ForgeError::ClassNotFound { .. }));
    }

    #[test]
    fn test_unparsable_source() {
        let err = scan("pub struct {", "PostController").unwrap_err();
        assert!(matches!(err, ForgeError::SourceParse { .. }));
    }

    #[test]
    fn test_malformed_route_marker() {
        let source = r#"
            pub struct PostController;

            impl PostController {
                #[route(42)]
                pub fn broken(&self) {}
            }
        "#;
        let err = scan(source, "PostController").unwrap_err();
        assert!(matches!(err, ForgeError::MalformedMarker { .. }));
    }

    #[test]
    fn test_subject_strips_suffix() {
        let controller = ControllerClass {
            name: "PostController".to_string(),
            actions: vec![],
        };
        assert_eq!(controller.subject(), "Post");

        let bare = ControllerClass {
            name: "Dashboard".to_string(),
            actions: vec![],
        };
        assert_eq!(bare.subject(), "Dashboard");
    }

    #[test]
    fn test_multi_word_display_name() {
        let source = r#"
            pub struct PostController;

            impl PostController {
                #[route("/posts/new")]
                pub fn new_draft(&self) {}
            }
        "#;
        let controller = scan(source, "PostController").unwrap();
        assert_eq!(controller.actions[0].display_name, "NewDraft");
    }
}
