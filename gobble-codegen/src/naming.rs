//! Identifier casing for generated Go code.

/// Go keywords, predeclared types, constants and built-in functions.
///
/// Sorted so lookups can binary search.
pub const GO_RESERVED_WORDS: &[&str] = &[
    "any",
    "append",
    "bool",
    "break",
    "byte",
    "cap",
    "case",
    "chan",
    "close",
    "comparable",
    "complex",
    "complex128",
    "complex64",
    "const",
    "continue",
    "copy",
    "default",
    "defer",
    "delete",
    "else",
    "error",
    "fallthrough",
    "false",
    "float32",
    "float64",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "imag",
    "import",
    "int",
    "int16",
    "int32",
    "int64",
    "int8",
    "interface",
    "iota",
    "len",
    "make",
    "map",
    "new",
    "nil",
    "package",
    "panic",
    "print",
    "println",
    "range",
    "real",
    "recover",
    "return",
    "rune",
    "select",
    "string",
    "switch",
    "true",
    "type",
    "uint",
    "uint16",
    "uint32",
    "uint64",
    "uint8",
    "uintptr",
    "var",
];

/// Check whether `word` is reserved in Go.
pub fn is_reserved(word: &str) -> bool {
    GO_RESERVED_WORDS.binary_search(&word).is_ok()
}

/// Turn an exported field name into an unexported identifier.
///
/// Acronyms are lower-cased entirely (`UUID` -> `uuid`), other names only
/// lose their leading capital (`UserID` -> `userID`). The result is escaped
/// with a leading underscore when it is reserved or when the input was
/// already unexported.
///
/// ```
/// use gobble_codegen::naming::unexported;
///
/// assert_eq!(unexported("UserID"), "userID");
/// assert_eq!(unexported("Type"), "_type");
/// ```
pub fn unexported(identifier: &str) -> String {
    let mut chars = identifier.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let cased = if identifier.to_uppercase() == identifier {
        identifier.to_lowercase()
    } else {
        first.to_lowercase().chain(chars).collect()
    };

    if is_reserved(&cased) || cased == identifier {
        escape_with_underscore(&cased)
    } else {
        cased
    }
}

/// Escape an identifier by prefixing it with an underscore.
pub fn escape_with_underscore(name: &str) -> String {
    format!("_{name}")
}
