//! Lowering of tree-sitter-go syntax trees into the [`crate::ast`] model.

use std::path::Path;

use tracing::debug;
use tree_sitter::{Node, Parser};

use crate::{
    Error, Result,
    ast::{
        Block, ChanDir, Decl, Field, FuncDecl, FuncType, ImportSpec, Param, SourceFile, Stmt,
        StructType, TypeExpr, TypeSpec, ValueSpec,
    },
    literal::unquote,
};

/// A reusable Go parser.
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|e| {
                Box::new(Error::Language {
                    message: e.to_string(),
                })
            })?;
        Ok(Self { parser })
    }

    /// Parse Go source text. `filename` is only used for diagnostics.
    pub fn parse(&mut self, src: &str, filename: &str) -> Result<SourceFile> {
        let tree = self.parser.parse(src, None).ok_or_else(|| {
            Box::new(Error::Aborted {
                filename: filename.to_string(),
            })
        })?;

        let root = tree.root_node();
        if root.has_error() {
            let bad = first_error(root).unwrap_or(root);
            let message = if bad.is_missing() {
                format!("expected '{}'", bad.kind())
            } else {
                "unexpected syntax".to_string()
            };
            let span = (bad.start_byte(), bad.end_byte() - bad.start_byte());
            return Err(Error::syntax(message, src, filename, span));
        }

        let file = Lowering { src }
            .file(root)
            .ok_or_else(|| Error::syntax("expected 'package' clause", src, filename, (0, 0)))?;
        debug!(
            filename,
            package = %file.package,
            decls = file.decls.len(),
            "parsed Go source"
        );
        Ok(file)
    }

    /// Read `path` and parse it, naming it by its display path in diagnostics.
    pub fn parse_path(&mut self, path: &Path) -> Result<SourceFile> {
        let src = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        self.parse(&src, &path.display().to_string())
    }
}

/// Parse Go source text with a fresh parser.
pub fn parse_source(src: &str, filename: &str) -> Result<SourceFile> {
    GoParser::new()?.parse(src, filename)
}

/// Read and parse a Go source file with a fresh parser.
pub fn parse_file(path: &Path) -> Result<SourceFile> {
    GoParser::new()?.parse_path(path)
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();
    children
}

fn field_children<'t>(node: Node<'t>, field: &str) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node.children_by_field_name(field, &mut cursor).collect();
    children
}

fn is_declaration(kind: &str) -> bool {
    matches!(
        kind,
        "type_declaration" | "var_declaration" | "const_declaration"
    )
}

struct Lowering<'s> {
    src: &'s str,
}

impl<'s> Lowering<'s> {
    fn text(&self, node: Node<'_>) -> &'s str {
        &self.src[node.byte_range()]
    }

    fn field_text(&self, node: Node<'_>, field: &str) -> String {
        node.child_by_field_name(field)
            .map(|n| self.text(n).to_string())
            .unwrap_or_default()
    }

    fn field_texts(&self, node: Node<'_>, field: &str) -> Vec<String> {
        field_children(node, field)
            .into_iter()
            .map(|n| self.text(n).to_string())
            .collect()
    }

    fn file(&self, root: Node<'_>) -> Option<SourceFile> {
        let mut package = None;
        let mut decls = Vec::new();
        for child in named_children(root) {
            if child.kind() == "package_clause" {
                package = named_children(child)
                    .first()
                    .map(|name| self.text(*name).to_string());
            } else {
                decls.push(self.decl(child));
            }
        }
        Some(SourceFile {
            package: package?,
            decls,
        })
    }

    fn decl(&self, node: Node<'_>) -> Decl {
        match node.kind() {
            "import_declaration" => Decl::Import(
                specs(node, "import_spec")
                    .into_iter()
                    .map(|spec| ImportSpec {
                        name: spec
                            .child_by_field_name("name")
                            .map(|n| self.text(n).to_string()),
                        path: spec
                            .child_by_field_name("path")
                            .and_then(|n| unquote(self.text(n)))
                            .unwrap_or_default(),
                    })
                    .collect(),
            ),
            "type_declaration" => Decl::Type(
                named_children(node)
                    .into_iter()
                    .filter(|n| matches!(n.kind(), "type_spec" | "type_alias"))
                    .map(|n| self.type_spec(n))
                    .collect(),
            ),
            "var_declaration" => Decl::Value(self.value_specs(node, "var_spec")),
            "const_declaration" => Decl::Value(self.value_specs(node, "const_spec")),
            "function_declaration" | "method_declaration" => Decl::Func(self.func_decl(node)),
            _ => Decl::Bad,
        }
    }

    fn type_spec(&self, node: Node<'_>) -> TypeSpec {
        let type_params = node
            .child_by_field_name("type_parameters")
            .map(|list| {
                named_children(list)
                    .into_iter()
                    .flat_map(|decl| self.field_texts(decl, "name"))
                    .collect()
            })
            .unwrap_or_default();

        TypeSpec {
            name: self.field_text(node, "name"),
            type_params,
            alias: node.kind() == "type_alias",
            ty: self.field_type(node, "type"),
        }
    }

    fn value_specs(&self, node: Node<'_>, kind: &str) -> Vec<ValueSpec> {
        specs(node, kind)
            .into_iter()
            .map(|spec| ValueSpec {
                names: self.field_texts(spec, "name"),
                ty: spec.child_by_field_name("type").map(|n| self.ty(n)),
                values: spec
                    .child_by_field_name("value")
                    .map(|value| self.nested(value))
                    .unwrap_or_default(),
            })
            .collect()
    }

    fn func_decl(&self, node: Node<'_>) -> FuncDecl {
        let receiver = node
            .child_by_field_name("receiver")
            .and_then(|list| named_children(list).into_iter().next())
            .map(|param| self.field_type(param, "type"));

        FuncDecl {
            name: self.field_text(node, "name"),
            receiver,
            body: node.child_by_field_name("body").map(|b| self.block(b)),
        }
    }

    fn block(&self, node: Node<'_>) -> Block {
        Block {
            stmts: self.stmts(node),
        }
    }

    fn stmts(&self, node: Node<'_>) -> Vec<Stmt> {
        let mut stmts = Vec::new();
        for child in named_children(node) {
            if child.kind() == "statement_list" {
                stmts.extend(self.stmts(child));
            } else {
                stmts.push(self.stmt(child));
            }
        }
        stmts
    }

    fn stmt(&self, node: Node<'_>) -> Stmt {
        match node.kind() {
            kind if is_declaration(kind) => Stmt::Decl(self.decl(node)),
            "block" => Stmt::Block(self.block(node)),
            kind => {
                let children = self.nested(node);
                if children.is_empty() {
                    Stmt::Other(kind.to_string())
                } else {
                    Stmt::Compound {
                        kind: kind.to_string(),
                        children,
                    }
                }
            }
        }
    }

    /// Blocks and declarations nested anywhere below a statement, in source order.
    fn nested(&self, node: Node<'_>) -> Vec<Stmt> {
        let mut found = Vec::new();
        for child in named_children(node) {
            match child.kind() {
                "block" => found.push(Stmt::Block(self.block(child))),
                kind if is_declaration(kind) => found.push(Stmt::Decl(self.decl(child))),
                _ => found.extend(self.nested(child)),
            }
        }
        found
    }

    fn field_type(&self, node: Node<'_>, field: &str) -> TypeExpr {
        match node.child_by_field_name(field) {
            Some(n) => self.ty(n),
            None => missing_type(),
        }
    }

    fn first_type(&self, node: Node<'_>) -> TypeExpr {
        match named_children(node).first() {
            Some(n) => self.ty(*n),
            None => missing_type(),
        }
    }

    fn ty(&self, node: Node<'_>) -> TypeExpr {
        match node.kind() {
            "type_identifier" | "identifier" | "package_identifier" => {
                TypeExpr::Named(self.text(node).to_string())
            }
            "qualified_type" => TypeExpr::Qualified {
                package: Box::new(self.field_type(node, "package")),
                name: self.field_text(node, "name"),
            },
            "pointer_type" => TypeExpr::Pointer(Box::new(self.first_type(node))),
            "slice_type" => TypeExpr::Array {
                len: None,
                elem: Box::new(self.field_type(node, "element")),
            },
            "array_type" => TypeExpr::Array {
                len: node
                    .child_by_field_name("length")
                    .map(|n| self.text(n).split_whitespace().collect::<Vec<_>>().join(" ")),
                elem: Box::new(self.field_type(node, "element")),
            },
            "map_type" => TypeExpr::Map {
                key: Box::new(self.field_type(node, "key")),
                value: Box::new(self.field_type(node, "value")),
            },
            "channel_type" => TypeExpr::Chan {
                dir: chan_dir(node),
                value: Box::new(self.field_type(node, "value")),
            },
            "generic_type" => TypeExpr::Generic {
                base: Box::new(self.field_type(node, "type")),
                args: node
                    .child_by_field_name("type_arguments")
                    .map(|args| {
                        named_children(args)
                            .into_iter()
                            .map(|arg| self.ty(arg))
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            "parenthesized_type" => TypeExpr::Paren(Box::new(self.first_type(node))),
            "function_type" => TypeExpr::Func(self.func_type(node)),
            "struct_type" => TypeExpr::Struct(self.struct_type(node)),
            "interface_type" => TypeExpr::Interface {
                elements: named_children(node).len(),
            },
            "type_elem" => match named_children(node).as_slice() {
                [single] => self.ty(*single),
                _ => TypeExpr::Other {
                    kind: "union_type".to_string(),
                },
            },
            kind => TypeExpr::Other {
                kind: kind.to_string(),
            },
        }
    }

    fn func_type(&self, node: Node<'_>) -> FuncType {
        let params = node
            .child_by_field_name("parameters")
            .map(|list| self.params(list))
            .unwrap_or_default();
        let results = match node.child_by_field_name("result") {
            Some(list) if list.kind() == "parameter_list" => self.params(list),
            Some(ty) => vec![Param::new(self.ty(ty))],
            None => Vec::new(),
        };
        FuncType { params, results }
    }

    fn params(&self, list: Node<'_>) -> Vec<Param> {
        let mut params = Vec::new();
        for decl in named_children(list) {
            let variadic = match decl.kind() {
                "parameter_declaration" => false,
                "variadic_parameter_declaration" => true,
                _ => continue,
            };
            let ty = self.field_type(decl, "type");
            let count = field_children(decl, "name").len().max(1);
            params.extend((0..count).map(|_| Param {
                ty: ty.clone(),
                variadic,
            }));
        }
        params
    }

    fn struct_type(&self, node: Node<'_>) -> StructType {
        let fields = named_children(node)
            .into_iter()
            .find(|n| n.kind() == "field_declaration_list")
            .map(|list| {
                named_children(list)
                    .into_iter()
                    .filter(|n| n.kind() == "field_declaration")
                    .map(|n| self.field(n))
                    .collect()
            });
        StructType { fields }
    }

    fn field(&self, node: Node<'_>) -> Field {
        let names = self.field_texts(node, "name");
        let mut ty = self.field_type(node, "type");
        if names.is_empty() && has_token(node, "*") {
            ty = TypeExpr::Pointer(Box::new(ty));
        }
        let tag = node.child_by_field_name("tag").map(|n| {
            let literal = self.text(n);
            unquote(literal).unwrap_or_else(|| literal.to_string())
        });
        Field { names, ty, tag }
    }
}

/// Spec nodes of `kind`, looking through `*_list` wrappers.
fn specs<'t>(node: Node<'t>, kind: &str) -> Vec<Node<'t>> {
    let mut found = Vec::new();
    for child in named_children(node) {
        if child.kind() == kind {
            found.push(child);
        } else if child.kind().ends_with("_list") {
            found.extend(specs(child, kind));
        }
    }
    found
}

fn has_token(node: Node<'_>, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == token);
    found
}

fn chan_dir(node: Node<'_>) -> ChanDir {
    let mut cursor = node.walk();
    let tokens: Vec<&str> = node
        .children(&mut cursor)
        .filter(|child| !child.is_named())
        .map(|child| child.kind())
        .collect();
    match tokens.as_slice() {
        ["<-", "chan", ..] => ChanDir::Recv,
        ["chan", "<-", ..] => ChanDir::Send,
        _ => ChanDir::Both,
    }
}

fn missing_type() -> TypeExpr {
    TypeExpr::Other {
        kind: "missing".to_string(),
    }
}
