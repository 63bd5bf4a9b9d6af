//! Typed model of the parts of a Go source file that builder generation reads.
//!
//! The model is deliberately shallow: declarations and type expressions are
//! represented faithfully, while statements and expressions only keep enough
//! structure to reach nested declarations. Shapes the model does not enumerate
//! are kept as `Other` variants so traversal never has to fail.

/// A parsed Go source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Name from the `package` clause.
    pub package: String,
    /// Top-level declarations in source order.
    pub decls: Vec<Decl>,
}

/// Top-level or function-local declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Import(Vec<ImportSpec>),
    Type(Vec<TypeSpec>),
    /// `var` or `const` declaration.
    Value(Vec<ValueSpec>),
    Func(FuncDecl),
    /// A top-level construct that is not a declaration.
    Bad,
}

/// Import specification: `import name "path"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Alias, `.` or `_` when present.
    pub name: Option<String>,
    pub path: String,
}

/// One `var`/`const` spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpec {
    pub names: Vec<String>,
    pub ty: Option<TypeExpr>,
    /// Function literal bodies and other blocks found in the initializers.
    pub values: Vec<Stmt>,
}

/// Type specification: `type Name[T any] Underlying` or `type Name = Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: String,
    /// Names of declared type parameters, empty if none.
    pub type_params: Vec<String>,
    /// True for alias declarations (`=`).
    pub alias: bool,
    pub ty: TypeExpr,
}

impl TypeSpec {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
            alias: false,
            ty,
        }
    }
}

/// Function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: String,
    /// Receiver type for methods.
    pub receiver: Option<TypeExpr>,
    /// Body, absent for external declarations.
    pub body: Option<Block>,
}

/// A `{ ... }` statement block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

/// Statement, reduced to what can contain declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Decl(Decl),
    Block(Block),
    /// A statement (`if`, `for`, `switch`, ...) with nested statements, in source order.
    Compound { kind: String, children: Vec<Stmt> },
    /// Any statement without nested declarations, tagged with its grammar kind.
    Other(String),
}

/// Direction of a channel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    /// `chan T`
    Both,
    /// `chan<- T`
    Send,
    /// `<-chan T`
    Recv,
}

/// Type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Plain identifier: `int`, `User`.
    Named(String),
    /// Selector reference `pkg.Name`. The qualifier is a plain name in valid Go.
    Qualified { package: Box<TypeExpr>, name: String },
    /// `[N]T`, or `[]T` when `len` is `None`.
    Array {
        len: Option<String>,
        elem: Box<TypeExpr>,
    },
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// `chan T`, `chan<- T`, `<-chan T`
    Chan { dir: ChanDir, value: Box<TypeExpr> },
    /// Instantiated generic: `List[T]`, `pkg.Pair[K, V]`.
    Generic {
        base: Box<TypeExpr>,
        args: Vec<TypeExpr>,
    },
    /// `(T)`
    Paren(Box<TypeExpr>),
    /// `func(...) ...`
    Func(FuncType),
    /// `struct { ... }`
    Struct(StructType),
    /// `interface { ... }` with the number of method/type elements it declares.
    Interface { elements: usize },
    /// Any other grammar shape, tagged with its kind.
    Other { kind: String },
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Qualified {
            package: Box::new(Self::named(package)),
            name: name.into(),
        }
    }

    pub fn slice(elem: TypeExpr) -> Self {
        Self::Array {
            len: None,
            elem: Box::new(elem),
        }
    }

    pub fn array(len: impl Into<String>, elem: TypeExpr) -> Self {
        Self::Array {
            len: Some(len.into()),
            elem: Box::new(elem),
        }
    }

    pub fn pointer(elem: TypeExpr) -> Self {
        Self::Pointer(Box::new(elem))
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn chan(dir: ChanDir, value: TypeExpr) -> Self {
        Self::Chan {
            dir,
            value: Box::new(value),
        }
    }

    pub fn generic(base: TypeExpr, args: Vec<TypeExpr>) -> Self {
        Self::Generic {
            base: Box::new(base),
            args,
        }
    }

    /// Short human-readable name of the variant, used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Self::Named(_) => "identifier".to_string(),
            Self::Qualified { .. } => "qualified type".to_string(),
            Self::Array { len: None, .. } => "slice type".to_string(),
            Self::Array { .. } => "array type".to_string(),
            Self::Pointer(_) => "pointer type".to_string(),
            Self::Map { .. } => "map type".to_string(),
            Self::Chan { .. } => "channel type".to_string(),
            Self::Generic { .. } => "generic type".to_string(),
            Self::Paren(_) => "parenthesized type".to_string(),
            Self::Func(_) => "function type".to_string(),
            Self::Struct(_) => "struct type".to_string(),
            Self::Interface { .. } => "interface type".to_string(),
            Self::Other { kind } => kind.replace('_', " "),
        }
    }
}

/// Signature of a function type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuncType {
    pub params: Vec<Param>,
    pub results: Vec<Param>,
}

/// One parameter or result. Names are not kept; `a, b int` lowers to two params.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: TypeExpr,
    /// `...T`
    pub variadic: bool,
}

impl Param {
    pub fn new(ty: TypeExpr) -> Self {
        Self {
            ty,
            variadic: false,
        }
    }
}

/// A struct type body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructType {
    /// Field declarations in source order, `None` when the list is absent.
    pub fields: Option<Vec<Field>>,
}

impl StructType {
    pub fn with_fields(fields: Vec<Field>) -> Self {
        Self {
            fields: Some(fields),
        }
    }
}

/// Struct field declaration, possibly declaring several names (`X, Y int`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Declared names; empty for embedded fields.
    pub names: Vec<String>,
    pub ty: TypeExpr,
    /// Struct tag with quotes removed.
    pub tag: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            names: vec![name.into()],
            ty,
            tag: None,
        }
    }

    pub fn embedded(ty: TypeExpr) -> Self {
        Self {
            names: Vec::new(),
            ty,
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Whether a Go identifier is exported (starts with an upper-case letter).
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
