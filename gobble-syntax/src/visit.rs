//! Pre-order traversal over the syntax model.
//!
//! [`walk`] visits a node, then its children in source order, and stops as
//! soon as the visitor returns [`ControlFlow::Break`].

use std::ops::ControlFlow;

use crate::ast::{Block, Decl, Field, FuncDecl, SourceFile, Stmt, TypeExpr, TypeSpec};

/// Borrowed view of any node in the model.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    File(&'a SourceFile),
    Decl(&'a Decl),
    TypeSpec(&'a TypeSpec),
    Func(&'a FuncDecl),
    Block(&'a Block),
    Stmt(&'a Stmt),
    Type(&'a TypeExpr),
    Field(&'a Field),
}

/// Callback for [`walk`].
pub trait Visitor<'a> {
    /// Inspect a node before its children are visited.
    fn visit(&mut self, node: Node<'a>) -> ControlFlow<()>;
}

impl<'a, F> Visitor<'a> for F
where
    F: FnMut(Node<'a>) -> ControlFlow<()>,
{
    fn visit(&mut self, node: Node<'a>) -> ControlFlow<()> {
        self(node)
    }
}

/// Walk `node` and its descendants in pre-order.
pub fn walk<'a, V>(visitor: &mut V, node: Node<'a>) -> ControlFlow<()>
where
    V: Visitor<'a> + ?Sized,
{
    visitor.visit(node)?;

    match node {
        Node::File(file) => {
            for decl in &file.decls {
                walk(visitor, Node::Decl(decl))?;
            }
        }
        Node::Decl(decl) => match decl {
            Decl::Type(specs) => {
                for spec in specs {
                    walk(visitor, Node::TypeSpec(spec))?;
                }
            }
            Decl::Value(specs) => {
                for spec in specs {
                    if let Some(ty) = &spec.ty {
                        walk(visitor, Node::Type(ty))?;
                    }
                    for value in &spec.values {
                        walk(visitor, Node::Stmt(value))?;
                    }
                }
            }
            Decl::Func(func) => walk(visitor, Node::Func(func))?,
            Decl::Import(_) | Decl::Bad => {}
        },
        Node::TypeSpec(spec) => walk(visitor, Node::Type(&spec.ty))?,
        Node::Func(func) => {
            if let Some(receiver) = &func.receiver {
                walk(visitor, Node::Type(receiver))?;
            }
            if let Some(body) = &func.body {
                walk(visitor, Node::Block(body))?;
            }
        }
        Node::Block(block) => {
            for stmt in &block.stmts {
                walk(visitor, Node::Stmt(stmt))?;
            }
        }
        Node::Stmt(stmt) => match stmt {
            Stmt::Decl(decl) => walk(visitor, Node::Decl(decl))?,
            Stmt::Block(block) => walk(visitor, Node::Block(block))?,
            Stmt::Compound { children, .. } => {
                for child in children {
                    walk(visitor, Node::Stmt(child))?;
                }
            }
            Stmt::Other(_) => {}
        },
        Node::Type(ty) => walk_type(visitor, ty)?,
        Node::Field(field) => walk(visitor, Node::Type(&field.ty))?,
    }

    ControlFlow::Continue(())
}

fn walk_type<'a, V>(visitor: &mut V, ty: &'a TypeExpr) -> ControlFlow<()>
where
    V: Visitor<'a> + ?Sized,
{
    match ty {
        TypeExpr::Qualified { package, .. } => walk(visitor, Node::Type(package)),
        TypeExpr::Array { elem, .. } | TypeExpr::Pointer(elem) | TypeExpr::Paren(elem) => {
            walk(visitor, Node::Type(elem))
        }
        TypeExpr::Map { key, value } => {
            walk(visitor, Node::Type(key))?;
            walk(visitor, Node::Type(value))
        }
        TypeExpr::Chan { value, .. } => walk(visitor, Node::Type(value)),
        TypeExpr::Generic { base, args } => {
            walk(visitor, Node::Type(base))?;
            for arg in args {
                walk(visitor, Node::Type(arg))?;
            }
            ControlFlow::Continue(())
        }
        TypeExpr::Func(func) => {
            for param in func.params.iter().chain(&func.results) {
                walk(visitor, Node::Type(&param.ty))?;
            }
            ControlFlow::Continue(())
        }
        TypeExpr::Struct(st) => {
            for field in st.fields.iter().flatten() {
                walk(visitor, Node::Field(field))?;
            }
            ControlFlow::Continue(())
        }
        TypeExpr::Named(_) | TypeExpr::Interface { .. } | TypeExpr::Other { .. } => {
            ControlFlow::Continue(())
        }
    }
}
