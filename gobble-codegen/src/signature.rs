//! Rendering of type expressions back to Go source text.
//!
//! Rendering is structural: each supported [`TypeExpr`] shape is printed the
//! way gofmt would print it, and anything else is rejected instead of being
//! approximated.

use gobble_syntax::ast::{ChanDir, FuncType, Param, StructType, TypeExpr};
use thiserror::Error;

use crate::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("unsupported {0}")]
    Unsupported(String),

    #[error("qualifier of selector type is not a plain name")]
    MalformedQualifier,
}

impl SignatureError {
    /// Attach the name of the field whose type failed to render.
    pub fn for_field(self, field: &str) -> Error {
        let field = field.to_string();
        match self {
            Self::Unsupported(kind) => Error::UnsupportedType { field, kind },
            Self::MalformedQualifier => Error::MalformedQualifiedType { field },
        }
    }
}

/// Render a type expression as Go source text, e.g. `map[string][]*User`.
pub fn render(ty: &TypeExpr) -> Result<String, SignatureError> {
    let mut out = String::new();
    write_type(&mut out, ty)?;
    Ok(out)
}

fn write_type(out: &mut String, ty: &TypeExpr) -> Result<(), SignatureError> {
    match ty {
        TypeExpr::Named(name) => out.push_str(name),
        TypeExpr::Qualified { package, name } => {
            let TypeExpr::Named(package) = package.as_ref() else {
                return Err(SignatureError::MalformedQualifier);
            };
            out.push_str(package);
            out.push('.');
            out.push_str(name);
        }
        TypeExpr::Array { len, elem } => {
            out.push('[');
            if let Some(len) = len {
                out.push_str(len);
            }
            out.push(']');
            write_type(out, elem)?;
        }
        TypeExpr::Pointer(elem) => {
            out.push('*');
            write_type(out, elem)?;
        }
        TypeExpr::Map { key, value } => {
            out.push_str("map[");
            write_type(out, key)?;
            out.push(']');
            write_type(out, value)?;
        }
        TypeExpr::Chan { dir, value } => {
            out.push_str(match dir {
                ChanDir::Both => "chan ",
                ChanDir::Send => "chan<- ",
                ChanDir::Recv => "<-chan ",
            });
            // `chan <-chan T` would parse as `chan<- (chan T)`.
            let needs_parens = *dir == ChanDir::Both
                && matches!(value.as_ref(), TypeExpr::Chan { dir: ChanDir::Recv, .. });
            if needs_parens {
                out.push('(');
                write_type(out, value)?;
                out.push(')');
            } else {
                write_type(out, value)?;
            }
        }
        TypeExpr::Generic { base, args } => {
            write_type(out, base)?;
            out.push('[');
            write_list(out, args.iter().map(|arg| (arg, false)))?;
            out.push(']');
        }
        TypeExpr::Paren(inner) => {
            out.push('(');
            write_type(out, inner)?;
            out.push(')');
        }
        TypeExpr::Func(func) => write_func(out, func)?,
        TypeExpr::Struct(StructType { fields }) if fields.as_ref().is_none_or(Vec::is_empty) => {
            out.push_str("struct{}");
        }
        TypeExpr::Interface { elements: 0 } => out.push_str("interface{}"),
        TypeExpr::Struct(_) | TypeExpr::Interface { .. } | TypeExpr::Other { .. } => {
            return Err(SignatureError::Unsupported(ty.describe()));
        }
    }
    Ok(())
}

fn write_func(out: &mut String, func: &FuncType) -> Result<(), SignatureError> {
    out.push_str("func(");
    write_params(out, &func.params)?;
    out.push(')');
    match func.results.as_slice() {
        [] => {}
        [single] if !single.variadic => {
            out.push(' ');
            write_type(out, &single.ty)?;
        }
        results => {
            out.push_str(" (");
            write_params(out, results)?;
            out.push(')');
        }
    }
    Ok(())
}

fn write_params(out: &mut String, params: &[Param]) -> Result<(), SignatureError> {
    write_list(out, params.iter().map(|p| (&p.ty, p.variadic)))
}

fn write_list<'a>(
    out: &mut String,
    items: impl Iterator<Item = (&'a TypeExpr, bool)>,
) -> Result<(), SignatureError> {
    for (i, (ty, variadic)) in items.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if variadic {
            out.push_str("...");
        }
        write_type(out, ty)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use gobble_syntax::ast::Field;

    use super::*;

    fn named(name: &str) -> TypeExpr {
        TypeExpr::named(name)
    }

    fn ok(ty: TypeExpr) -> String {
        render(&ty).expect("type should render")
    }

    #[test]
    fn test_plain_and_composite_types() {
        assert_eq!(ok(named("int")), "int");
        assert_eq!(ok(TypeExpr::slice(named("float"))), "[]float");
        assert_eq!(ok(TypeExpr::array("4", named("byte"))), "[4]byte");
        assert_eq!(ok(TypeExpr::pointer(named("User"))), "*User");
        assert_eq!(ok(TypeExpr::map(named("string"), named("int"))), "map[string]int");
        assert_eq!(ok(TypeExpr::qualified("time", "Duration")), "time.Duration");
    }

    #[test]
    fn test_channels() {
        assert_eq!(ok(TypeExpr::chan(ChanDir::Send, named("int"))), "chan<- int");
        assert_eq!(ok(TypeExpr::chan(ChanDir::Recv, named("string"))), "<-chan string");
        assert_eq!(ok(TypeExpr::chan(ChanDir::Both, named("bool"))), "chan bool");
        assert_eq!(
            ok(TypeExpr::chan(
                ChanDir::Both,
                TypeExpr::chan(ChanDir::Recv, named("int"))
            )),
            "chan (<-chan int)"
        );
    }

    #[test]
    fn test_nested_types() {
        let ty = TypeExpr::map(
            TypeExpr::qualified("uuid", "UUID"),
            TypeExpr::slice(TypeExpr::pointer(TypeExpr::generic(
                named("Pair"),
                vec![named("string"), TypeExpr::qualified("big", "Int")],
            ))),
        );
        assert_eq!(ok(ty), "map[uuid.UUID][]*Pair[string, big.Int]");
    }

    #[test]
    fn test_function_types() {
        let callback = TypeExpr::Func(FuncType {
            params: vec![Param::new(named("int")), Param::new(named("string"))],
            results: vec![Param::new(named("error"))],
        });
        assert_eq!(ok(callback), "func(int, string) error");

        let variadic = TypeExpr::Func(FuncType {
            params: vec![
                Param::new(named("string")),
                Param {
                    ty: TypeExpr::Interface { elements: 0 },
                    variadic: true,
                },
            ],
            results: vec![Param::new(named("int")), Param::new(named("error"))],
        });
        assert_eq!(ok(variadic), "func(string, ...interface{}) (int, error)");

        assert_eq!(ok(TypeExpr::Func(FuncType::default())), "func()");
    }

    #[test]
    fn test_empty_literals() {
        assert_eq!(ok(TypeExpr::Struct(StructType::default())), "struct{}");
        assert_eq!(ok(TypeExpr::Interface { elements: 0 }), "interface{}");
        assert_eq!(
            ok(TypeExpr::Paren(Box::new(TypeExpr::pointer(named("T"))))),
            "(*T)"
        );
    }

    #[test]
    fn test_unsupported_types() {
        let anonymous = TypeExpr::Struct(StructType::with_fields(vec![Field::new(
            "X",
            named("int"),
        )]));
        assert_eq!(
            render(&anonymous),
            Err(SignatureError::Unsupported("struct type".to_string()))
        );
        assert_eq!(
            render(&TypeExpr::Interface { elements: 1 }),
            Err(SignatureError::Unsupported("interface type".to_string()))
        );
        assert_eq!(
            render(&TypeExpr::slice(TypeExpr::Other {
                kind: "negated_type".to_string()
            })),
            Err(SignatureError::Unsupported("negated type".to_string()))
        );
    }

    #[test]
    fn test_malformed_qualifier() {
        let ty = TypeExpr::Qualified {
            package: Box::new(TypeExpr::pointer(named("pkg"))),
            name: "Type".to_string(),
        };
        assert_eq!(render(&ty), Err(SignatureError::MalformedQualifier));
    }

    #[test]
    fn test_error_names_the_field() {
        assert_eq!(
            SignatureError::Unsupported("struct type".to_string()).for_field("Inline"),
            Error::UnsupportedType {
                field: "Inline".to_string(),
                kind: "struct type".to_string()
            }
        );
        assert_eq!(
            SignatureError::MalformedQualifier.for_field("Ref").to_string(),
            "failed to determine type of field Ref: qualifier of a selector type must be a plain package name"
        );
    }
}
