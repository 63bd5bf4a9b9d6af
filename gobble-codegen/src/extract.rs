//! Turning a struct's field list into builder field descriptors.

use gobble_ir::FieldDescriptor;
use gobble_syntax::ast::{StructType, is_exported};
use tracing::debug;

use crate::{Error, Result, options::FieldOptions, signature};

/// Collect the exported, non-ignored fields of `st` in declaration order.
///
/// Embedded fields are always skipped. A missing struct or field list yields
/// no descriptors.
pub fn extract_fields(st: Option<&StructType>) -> Result<Vec<FieldDescriptor>> {
    let Some(fields) = st.and_then(|st| st.fields.as_deref()) else {
        return Ok(Vec::new());
    };

    let mut descriptors = Vec::new();
    for field in fields {
        let mut names = field.names.iter().filter(|name| is_exported(name)).peekable();
        let Some(&first) = names.peek() else {
            debug!(names = ?field.names, "skipping embedded or unexported field");
            continue;
        };

        let options = FieldOptions::from_tag(field.tag.as_deref()).map_err(|err| {
            Error::InvalidAnnotation {
                field: first.to_string(),
                token: err.token,
            }
        })?;
        if options.ignore {
            debug!(field = %first, "skipping ignored field");
            continue;
        }

        let type_signature = signature::render(&field.ty).map_err(|err| err.for_field(first))?;
        descriptors.extend(names.map(|name| FieldDescriptor::new(name, &type_signature)));
    }

    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use gobble_syntax::ast::{Field, TypeExpr};

    use super::*;

    fn field(name: &str, ty: &str) -> Field {
        Field::new(name, TypeExpr::named(ty))
    }

    fn descriptor(name: &str, ty: &str) -> FieldDescriptor {
        FieldDescriptor::new(name, ty)
    }

    #[test]
    fn test_missing_struct_or_field_list() {
        assert_eq!(extract_fields(None), Ok(Vec::new()));
        assert_eq!(extract_fields(Some(&StructType::default())), Ok(Vec::new()));
    }

    #[test]
    fn test_only_exported_fields() {
        let st = StructType::with_fields(vec![field("foo", "int"), field("Bar", "string")]);
        assert_eq!(
            extract_fields(Some(&st)),
            Ok(vec![descriptor("Bar", "string")])
        );
    }

    #[test]
    fn test_unexported_fields_ignore_their_tags() {
        let st = StructType::with_fields(vec![
            field("secret", "int").with_tag(r#"builder:"bogus""#),
            field("Visible", "int"),
        ]);
        assert_eq!(
            extract_fields(Some(&st)),
            Ok(vec![descriptor("Visible", "int")])
        );
    }

    #[test]
    fn test_ignored_fields() {
        let st = StructType::with_fields(vec![
            field("Omit", "bool").with_tag(r#"builder:"ignore""#),
            field("Include", "int"),
            field("Tagged", "string").with_tag(r#"json:"tagged""#),
        ]);
        assert_eq!(
            extract_fields(Some(&st)),
            Ok(vec![
                descriptor("Include", "int"),
                descriptor("Tagged", "string")
            ])
        );
    }

    #[test]
    fn test_embedded_fields() {
        let st = StructType::with_fields(vec![
            Field::embedded(TypeExpr::named("Base")),
            Field::embedded(TypeExpr::pointer(TypeExpr::qualified("sync", "Mutex"))),
            field("Name", "string"),
        ]);
        assert_eq!(
            extract_fields(Some(&st)),
            Ok(vec![descriptor("Name", "string")])
        );
    }

    #[test]
    fn test_declaration_order() {
        let st = StructType::with_fields(vec![
            field("C", "int"),
            Field::new("A", TypeExpr::slice(TypeExpr::named("float"))),
            Field::new("B", TypeExpr::map(TypeExpr::named("string"), TypeExpr::named("int"))),
        ]);
        assert_eq!(
            extract_fields(Some(&st)),
            Ok(vec![
                descriptor("C", "int"),
                descriptor("A", "[]float"),
                descriptor("B", "map[string]int"),
            ])
        );
    }

    #[test]
    fn test_multiple_names_share_type() {
        let st = StructType::with_fields(vec![Field {
            names: vec!["X".to_string(), "y".to_string(), "Z".to_string()],
            ty: TypeExpr::named("float64"),
            tag: None,
        }]);
        assert_eq!(
            extract_fields(Some(&st)),
            Ok(vec![descriptor("X", "float64"), descriptor("Z", "float64")])
        );
    }

    #[test]
    fn test_invalid_option() {
        let st = StructType::with_fields(vec![
            field("Name", "string").with_tag(r#"builder:"ignore,foobar""#),
        ]);
        let err = extract_fields(Some(&st)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidAnnotation {
                field: "Name".to_string(),
                token: "foobar".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid field option 'foobar' on field Name");
    }

    #[test]
    fn test_unsupported_type_names_field() {
        let st = StructType::with_fields(vec![Field::new(
            "Inline",
            TypeExpr::Struct(StructType::with_fields(vec![field("X", "int")])),
        )]);
        assert_eq!(
            extract_fields(Some(&st)),
            Err(Error::UnsupportedType {
                field: "Inline".to_string(),
                kind: "struct type".to_string()
            })
        );
    }

    #[test]
    fn test_ignored_field_type_is_not_rendered() {
        let st = StructType::with_fields(vec![
            Field::new("Skip", TypeExpr::Other {
                kind: "negated_type".to_string(),
            })
            .with_tag(r#"builder:"ignore""#),
        ]);
        assert_eq!(extract_fields(Some(&st)), Ok(Vec::new()));
    }
}
