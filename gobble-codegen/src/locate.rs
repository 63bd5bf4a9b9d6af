//! Locating the struct a builder is generated for.

use std::ops::ControlFlow;

use gobble_syntax::{
    ast::{SourceFile, StructType, TypeExpr},
    visit::{self, Node, Visitor},
};

use crate::{Error, Result};

/// Visitor that stops at the first struct type declared under a given name.
#[derive(Debug)]
pub struct StructFinder<'n, 'a> {
    name: &'n str,
    found: Option<&'a StructType>,
}

impl<'n, 'a> StructFinder<'n, 'a> {
    pub fn new(name: &'n str) -> Self {
        Self { name, found: None }
    }

    /// The struct found so far, if any.
    pub fn found(&self) -> Option<&'a StructType> {
        self.found
    }
}

impl<'a> Visitor<'a> for StructFinder<'_, 'a> {
    fn visit(&mut self, node: Node<'a>) -> ControlFlow<()> {
        let Node::TypeSpec(spec) = node else {
            return ControlFlow::Continue(());
        };
        if spec.name != self.name {
            return ControlFlow::Continue(());
        }
        match &spec.ty {
            TypeExpr::Struct(st) => {
                self.found = Some(st);
                ControlFlow::Break(())
            }
            _ => ControlFlow::Continue(()),
        }
    }
}

/// Find the first struct named `target` anywhere in `file`, including
/// declarations local to function bodies.
pub fn find_struct<'a>(file: &'a SourceFile, target: &str) -> Result<&'a StructType> {
    let mut finder = StructFinder::new(target);
    let _ = visit::walk(&mut finder, Node::File(file));
    finder.found().ok_or_else(|| Error::NotFound {
        target: target.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use gobble_syntax::ast::{Block, Decl, Field, FuncDecl, Stmt, TypeSpec};

    use super::*;

    fn user_struct() -> StructType {
        StructType::with_fields(vec![
            Field::new("Foo", TypeExpr::named("int")),
            Field::new("Bar", TypeExpr::named("string")),
        ])
    }

    fn file(decls: Vec<Decl>) -> SourceFile {
        SourceFile {
            package: "models".to_string(),
            decls,
        }
    }

    #[test]
    fn test_visit_stops_at_target() {
        let spec = TypeSpec::new("TestStruct", TypeExpr::Struct(user_struct()));
        let mut finder = StructFinder::new("TestStruct");

        assert_eq!(finder.visit(Node::TypeSpec(&spec)), ControlFlow::Break(()));
        assert_eq!(finder.found(), Some(&user_struct()));
    }

    #[test]
    fn test_visit_skips_wrong_name() {
        let spec = TypeSpec::new("NotTargetStruct", TypeExpr::Struct(user_struct()));
        let mut finder = StructFinder::new("TargetStruct");

        assert_eq!(finder.visit(Node::TypeSpec(&spec)), ControlFlow::Continue(()));
        assert_eq!(finder.found(), None);
    }

    #[test]
    fn test_visit_skips_irrelevant_nodes() {
        let decl = Decl::Bad;
        let block = Block::default();
        let stmt = Stmt::Other("go_statement".to_string());
        let ty = TypeExpr::Struct(user_struct());
        let field = Field::new("TestStruct", TypeExpr::named("int"));
        let func = FuncDecl {
            name: "TestStruct".to_string(),
            receiver: None,
            body: None,
        };
        let src = file(Vec::new());

        let mut finder = StructFinder::new("TestStruct");
        for node in [
            Node::File(&src),
            Node::Decl(&decl),
            Node::Func(&func),
            Node::Block(&block),
            Node::Stmt(&stmt),
            Node::Type(&ty),
            Node::Field(&field),
        ] {
            assert_eq!(finder.visit(node), ControlFlow::Continue(()), "{node:?}");
        }
        assert_eq!(finder.found(), None);
    }

    #[test]
    fn test_non_struct_with_same_name_is_skipped() {
        let src = file(vec![
            Decl::Type(vec![TypeSpec::new("Target", TypeExpr::named("int"))]),
            Decl::Type(vec![TypeSpec::new("Target", TypeExpr::Struct(user_struct()))]),
        ]);

        assert_eq!(find_struct(&src, "Target"), Ok(&user_struct()));
    }

    #[test]
    fn test_first_match_wins() {
        let other = StructType::with_fields(vec![Field::new("Baz", TypeExpr::named("bool"))]);
        let src = file(vec![Decl::Type(vec![
            TypeSpec::new("Target", TypeExpr::Struct(user_struct())),
            TypeSpec::new("Target", TypeExpr::Struct(other)),
        ])]);

        assert_eq!(find_struct(&src, "Target"), Ok(&user_struct()));
    }

    #[test]
    fn test_finds_function_local_struct() {
        let body = Block {
            stmts: vec![Stmt::Decl(Decl::Type(vec![TypeSpec::new(
                "Local",
                TypeExpr::Struct(user_struct()),
            )]))],
        };
        let src = file(vec![Decl::Func(FuncDecl {
            name: "main".to_string(),
            receiver: None,
            body: Some(body),
        })]);

        assert_eq!(find_struct(&src, "Local"), Ok(&user_struct()));
    }

    #[test]
    fn test_found_struct_outlives_target_name() {
        let src = file(vec![Decl::Type(vec![TypeSpec::new(
            "User",
            TypeExpr::Struct(user_struct()),
        )])]);

        let found = {
            let target = String::from("User");
            find_struct(&src, &target)
        };
        assert_eq!(found, Ok(&user_struct()));
    }

    #[test]
    fn test_not_found() {
        let src = file(vec![Decl::Type(vec![TypeSpec::new(
            "User",
            TypeExpr::Struct(user_struct()),
        )])]);

        assert_eq!(
            find_struct(&src, "Missing"),
            Err(Error::NotFound {
                target: "Missing".to_string()
            })
        );
        assert_eq!(
            find_struct(&src, "Missing").unwrap_err().to_string(),
            "could not find definition of struct Missing"
        );
    }
}
