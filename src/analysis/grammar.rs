//! Pattern grammar for class-level quasi-parsing.
//!
//! Every structural fact the analyzer extracts (class name, constructor
//! parameters, dependency fields, method signatures) is described by one of
//! the named-capture patterns below. They are compiled once and shared.
//!
//! The `regex` crate matches in linear time, so none of these patterns can
//! backtrack catastrophically regardless of input shape.
//!
//! # Unsupported constructs
//!
//! - Generic constraint clauses (`where T : ...`) between a signature and its body
//! - Nested or sibling classes (only the first `class` declaration is considered)
//! - Conditional compilation directives (`#if` / `#endif` branches are read as-is)
//! - Parameter lists containing parentheses (default values calling methods,
//!   tuple types, attributes with arguments inside the list)
//! - Generic arguments nested deeper than one level in parameter and field types

use once_cell::sync::Lazy;
use regex::Regex;

/// First `class <Name>` declaration.
pub(crate) static CLASS_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bclass\s+(?P<name>[A-Za-z_]\w*)").unwrap());

/// `class Name(params)` or `class Name<T>(params)`.
pub(crate) static PRIMARY_CONSTRUCTOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bclass\s+(?P<name>[A-Za-z_]\w*)\s*(?:<[^<>()]*>)?\s*\((?P<params>[^()]*)\)")
        .unwrap()
});

/// `Name(params) {` with an optional `: base(...)` / `: this(...)` chain call.
pub(crate) static CONVENTIONAL_CONSTRUCTOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?P<name>[A-Za-z_]\w*)\s*\((?P<params>[^()]*)\)\s*(?::\s*(?:base|this)\s*\([^()]*\)\s*)?\{",
    )
    .unwrap()
});

/// A single `<type> <name>` parameter, anchored at the start of the slice.
pub(crate) static PARAMETER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?:\[[^\]]*\]\s*)*(?:(?:this|ref|out|in|params|scoped)\s+)*(?P<type>[A-Za-z_][\w.]*(?:<[^<>]*>)?(?:\[\])?\??)\s+@?(?P<name>[A-Za-z_]\w*)",
    )
    .unwrap()
});

/// `private readonly <type> <name> =`; the assignment is required.
pub(crate) static READONLY_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\bprivate\s+readonly\s+(?P<type>[A-Za-z_][\w.]*(?:<[^<>;=]*>)?(?:\[\])?\??)\s+@?(?P<name>[A-Za-z_]\w*)\s*=",
    )
    .unwrap()
});

/// Method signature ending in a block body (`{`) or an expression body (`=>`).
pub(crate) static METHOD_SIGNATURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:\b(?:public|private|protected|internal|static|async|virtual|override|sealed|abstract|new|partial|extern|unsafe)\s+)*\b(?P<return_type>[A-Za-z_][\w.]*(?:<[^<>]*(?:<[^<>]*>[^<>]*)*>)?(?:\[\])?\??)\s+(?P<name>[A-Za-z_]\w*)\s*(?:<[^<>()]*>)?\s*\((?P<params>[^()]*)\)\s*(?P<body>=>|\{)",
    )
    .unwrap()
});

/// Modifiers, declaration keywords and statement keywords.
///
/// None of these can name a type or a method, so a pattern capturing one of
/// them in a type or name position is a mis-match.
const STRUCTURAL_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "base", "break", "case", "catch", "checked", "class",
    "const", "continue", "default", "delegate", "do", "else", "enum", "event", "explicit",
    "extern", "false", "finally", "fixed", "for", "foreach", "goto", "if", "implicit", "in",
    "interface", "internal", "is", "lock", "namespace", "new", "null", "operator", "out",
    "override", "params", "partial", "private", "protected", "public", "readonly", "record",
    "ref", "return", "sealed", "sizeof", "stackalloc", "static", "struct", "switch", "this",
    "throw", "true", "try", "typeof", "unchecked", "unsafe", "using", "var", "virtual",
    "volatile", "when", "where", "while", "yield",
];

/// Built-in type keywords. Valid return types, never injected dependencies.
const BUILTIN_TYPE_KEYWORDS: &[&str] = &[
    "bool", "byte", "char", "decimal", "double", "dynamic", "float", "int", "long", "nint",
    "nuint", "object", "sbyte", "short", "string", "uint", "ulong", "ushort", "void",
];

pub(crate) fn is_structural_keyword(token: &str) -> bool {
    STRUCTURAL_KEYWORDS.contains(&token)
}

pub(crate) fn is_keyword(token: &str) -> bool {
    is_structural_keyword(token) || BUILTIN_TYPE_KEYWORDS.contains(&token)
}

/// Whole-word pattern for an identifier or a type token such as `IRepository<Order>`.
///
/// The trailing boundary is only asserted when the token ends in a word
/// character; `\b` after `>` would require the next character to be a word.
pub(crate) fn whole_word(token: &str) -> Regex {
    let escaped = regex::escape(token);
    let trailing = if token.chars().last().is_some_and(is_word_char) {
        r"\b"
    } else {
        ""
    };
    // Escaped literal input always yields a valid pattern.
    Regex::new(&format!(r"\b{escaped}{trailing}")).unwrap()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
