//! Lexical extraction of names, types and parameters from a declaration line.
//!
//! Best-effort pattern matching over a single line. Nothing is validated;
//! anything that does not fit degrades to a default.

use crate::model::{MethodDescriptor, Parameter};
use regex::Regex;
use std::sync::LazyLock;

static RE_RETURN_AND_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s+(\w+)\s*\(").unwrap());

static RE_PARAM_LIST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((.*?)\)").unwrap());

static RE_CLASS_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"class\s+(\w+)").unwrap());

static RE_INTERFACE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"interface\s+(\w+)").unwrap());

/// Modifiers plus the type token in front of a field name.
static RE_FIELD_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(public|private|protected)?\s*(static)?\s*(final)?\s*\w+\s+").unwrap()
});

static RE_INITIALIZER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*=.*").unwrap());

static RE_FIELD_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s+\w+\s*(=|;)").unwrap());

static RE_THROWS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"throws\s+(.+?)\s*\{").unwrap());

/// Words that can sit where the return type is expected in a constructor.
const MODIFIERS: &[&str] = &["public", "private", "protected", "static", "final"];

/// Extract return type, name and parameters from a method declaration.
///
/// `public Employee(String name) {` is a constructor: the first
/// `word word (` match yields a modifier instead of a type, so the return
/// type stays unresolved (`"void"`).
pub fn parse_method(line: &str) -> MethodDescriptor {
    let mut method = MethodDescriptor::default();

    if let Some(caps) = RE_RETURN_AND_NAME.captures(line) {
        let return_type = &caps[1];
        if !MODIFIERS.contains(&return_type) {
            method.return_type = return_type.to_string();
        }
        method.name = caps[2].to_string();
    }

    if let Some(caps) = RE_PARAM_LIST.captures(line) {
        method.parameters = parse_parameters(&caps[1]);
    }

    method
}

/// Split a raw parameter list on commas; the last two whitespace-separated
/// tokens of each segment are `(type, name)`. Shorter segments are dropped.
pub fn parse_parameters(raw: &str) -> Vec<Parameter> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    raw.split(',')
        .filter_map(|segment| {
            let parts: Vec<&str> = segment.split_whitespace().collect();
            match parts.as_slice() {
                [.., type_name, name] => Some(Parameter {
                    type_name: type_name.to_string(),
                    name: name.to_string(),
                }),
                _ => None,
            }
        })
        .collect()
}

pub fn class_name(line: &str) -> String {
    first_capture(&RE_CLASS_NAME, line).unwrap_or_else(|| "Unknown".to_string())
}

pub fn interface_name(line: &str) -> String {
    first_capture(&RE_INTERFACE_NAME, line).unwrap_or_else(|| "Unknown".to_string())
}

/// Field name with modifiers, type, initializer and terminator stripped.
pub fn field_name(line: &str) -> String {
    let without_prefix = RE_FIELD_PREFIX.replace(line, "");
    let without_init = RE_INITIALIZER.replace_all(&without_prefix, "");
    without_init.replace(';', "").trim().to_string()
}

pub fn field_type(line: &str) -> String {
    first_capture(&RE_FIELD_TYPE, line).unwrap_or_else(|| "Unknown".to_string())
}

/// Exception names between `throws` and the opening brace.
///
/// Empty when the line has no `throws ... {` span (for example an abstract
/// method ending in `;`).
pub fn exceptions(line: &str) -> Vec<String> {
    let Some(raw) = first_capture(&RE_THROWS, line) else {
        return Vec::new();
    };
    raw.split(',')
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

fn first_capture(re: &Regex, line: &str) -> Option<String> {
    re.captures(line).map(|caps| caps[1].to_string())
}
