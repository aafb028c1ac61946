//! # Sample Value Synthesis
//!
//! Maps each persisted column type to a fixed Rust expression used when a
//! generated form test needs a plausible value to bind. The mapping is a
//! pure lookup: the same tag always yields the same literal, so regenerating
//! a test produces identical output.

use testforge_core::TypeTag;

// ============================================================================
// Lookup Table
// ============================================================================

/// Returns the sample expression for a column type.
///
/// The result is a Rust expression rendered verbatim into the generated
/// test, so string samples carry their own quotes. Types with no sensible
/// fixed sample (dates, unrecognized tags) fall back to a typed `None` so
/// the generated file still compiles.
pub fn sample_value(tag: TypeTag) -> &'static str {
    match tag {
        TypeTag::String => r#""This is a test string and should look like this""#,
        TypeTag::Integer => "12345",
        TypeTag::Boolean => "true",
        TypeTag::Id => "1234",
        TypeTag::Float => "123.45",
        TypeTag::Text => {
            "\"This is a test text entry. As you can see it has multiple lines and is\\n\
             much longer than the string type. But it essentially has the same kind\\n\
             of data and the same kind of tests.\""
        }
        TypeTag::Array | TypeTag::SimpleArray => r#"vec![("first", "1st")]"#,
        TypeTag::DateTime => {
            r#"chrono::NaiveDateTime::parse_from_str("21-11-2019 20:05", "%d-%m-%Y %H:%M").expect("valid sample timestamp")"#
        }
        TypeTag::Date | TypeTag::Unknown => "Option::<String>::None",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_sample_is_a_quoted_literal() {
        let sample = sample_value(TypeTag::String);
        assert!(sample.starts_with('"'));
        assert!(sample.ends_with('"'));
    }

    #[test]
    fn numeric_samples_are_bare_literals() {
        assert_eq!(sample_value(TypeTag::Integer), "12345");
        assert_eq!(sample_value(TypeTag::Id), "1234");
        assert_eq!(sample_value(TypeTag::Float), "123.45");
    }

    #[test]
    fn array_variants_share_one_sample() {
        assert_eq!(
            sample_value(TypeTag::Array),
            sample_value(TypeTag::SimpleArray)
        );
    }

    #[test]
    fn unknown_falls_back_to_typed_none() {
        assert_eq!(sample_value(TypeTag::Unknown), "Option::<String>::None");
        assert_eq!(sample_value(TypeTag::Date), "Option::<String>::None");
    }

    #[test]
    fn lookup_is_stable() {
        for tag in TypeTag::KNOWN {
            assert_eq!(sample_value(tag), sample_value(tag));
        }
    }
}
