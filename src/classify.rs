//! Line classifier: decides whether a trimmed line is an undocumented
//! declaration, and of which kind.
//!
//! Purely lexical: one line, one look at the line before it, four regexes
//! tried in priority order.

use crate::model::DeclarationKind;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(public|private|protected)?\s*(static)?\s*(final)?\s*class\s+\w+.*$").unwrap()
});

static RE_INTERFACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(public|private|protected)?\s*interface\s+\w+.*$").unwrap()
});

static RE_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(public|private|protected)?\s*(static)?\s*(final)?\s*\w+\s+\w+\s*\(.*\).*$")
        .unwrap()
});

static RE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(public|private|protected)?\s*(static)?\s*(final)?\s*\w+\s+\w+\s*(=.*)?;$")
        .unwrap()
});

// Statement keywords that make `word word (...)` or `word word;` a statement,
// e.g. `else if (x) {` or `return total;`
static RE_STATEMENT_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(if|else|for|while|do|switch|case|return|throw|break|continue|package|import)\b",
    )
    .unwrap()
});

// -- Public API ---------------------------------------------------------------

/// Classify `line` (already trimmed), given the raw line that precedes it.
///
/// A previous line ending in `*/` means the declaration is already
/// documented, whatever its shape.
pub fn classify(line: &str, previous: &str) -> DeclarationKind {
    if is_documented(previous) {
        return DeclarationKind::None;
    }

    if RE_CLASS.is_match(line) {
        return DeclarationKind::Class;
    }

    if RE_INTERFACE.is_match(line) {
        return DeclarationKind::Interface;
    }

    if RE_METHOD.is_match(line) {
        return if is_method_declaration(line) {
            DeclarationKind::Method
        } else {
            DeclarationKind::None
        };
    }

    if RE_FIELD.is_match(line) && is_field_declaration(line) {
        return DeclarationKind::Field;
    }

    DeclarationKind::None
}

/// True if the previous line closes a comment block.
pub fn is_documented(previous: &str) -> bool {
    previous.trim().ends_with("*/")
}

/// Gate for method-shaped lines: object construction, assignments and
/// control-flow statements are not declarations.
pub fn is_method_declaration(line: &str) -> bool {
    !line.contains("new ") && !line.contains('=') && !RE_STATEMENT_KEYWORD.is_match(line)
}

/// Gate for field-shaped lines: a statement terminator and no call parentheses.
pub fn is_field_declaration(line: &str) -> bool {
    line.ends_with(';')
        && !line.contains('(')
        && !line.contains(')')
        && !RE_STATEMENT_KEYWORD.is_match(line)
}
