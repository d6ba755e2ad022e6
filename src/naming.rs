//! Identifier heuristics: camel-case splitting and naming idioms.
//!
//! Every phrase choice here is an ordered rule table evaluated
//! first-match-wins, so each rule can be read (and tested) on its own.

/// Recognized method naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idiom {
    /// `toString`
    Describe,
    /// `equals`
    Equality,
    /// `hashCode`
    Hash,
    /// `get*`
    Getter,
    /// `set*`
    Setter,
    /// `is*`
    Predicate,
    /// `has*`
    Possession,
    /// Anything else
    Action,
}

// -- Rule tables --------------------------------------------------------------

const PREFIX_IDIOMS: &[(&str, Idiom)] = &[
    ("get", Idiom::Getter),
    ("set", Idiom::Setter),
    ("is", Idiom::Predicate),
    ("has", Idiom::Possession),
];

/// Whole-name idioms, consulted only when no prefix matched. `hashCode`
/// starts with `has`, so it is summarized as a `has*` method.
const EXACT_IDIOMS: &[(&str, Idiom)] = &[
    ("toString", Idiom::Describe),
    ("equals", Idiom::Equality),
    ("hashCode", Idiom::Hash),
];

/// A phrase chosen when the lower-cased identifier contains `needle`.
#[derive(Debug, Clone, Copy)]
pub struct SubstringRule {
    pub needle: &'static str,
    pub phrase: &'static str,
}

const fn rule(needle: &'static str, phrase: &'static str) -> SubstringRule {
    SubstringRule { needle, phrase }
}

pub const PARAM_NAME_RULES: &[SubstringRule] = &[
    rule("name", "the name to set"),
    rule("id", "the unique identifier"),
    rule("index", "the index position"),
    rule("value", "the value to set"),
];

pub const FIELD_NAME_RULES: &[SubstringRule] = &[
    rule("count", "The number of elements."),
    rule("size", "The number of elements."),
    rule("name", "The name identifier."),
    rule("id", "The unique identifier."),
];

/// First rule whose needle occurs in the lower-cased identifier.
pub fn match_substring(rules: &[SubstringRule], identifier: &str) -> Option<&'static str> {
    let lower = identifier.to_lowercase();
    rules
        .iter()
        .find(|r| lower.contains(r.needle))
        .map(|r| r.phrase)
}

// -- Word splitting -----------------------------------------------------------

/// Split a camel-case identifier into a lower-case phrase.
///
/// Every upper-case character gets a space in front of it, consecutive
/// capitals included: `"employeeCount"` → `"employee count"`, `"ID"` → `"i d"`.
pub fn to_words(identifier: &str) -> String {
    let mut chars = identifier.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(identifier.len() + 4);
    out.extend(first.to_lowercase());
    for c in chars {
        if c.is_uppercase() {
            out.push(' ');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

// -- Idioms -------------------------------------------------------------------

/// Classify a method name by its naming convention.
pub fn classify_idiom(name: &str) -> Idiom {
    let prefixed = PREFIX_IDIOMS
        .iter()
        .find(|(prefix, _)| name.starts_with(prefix));
    if let Some(&(_, idiom)) = prefixed {
        return idiom;
    }
    EXACT_IDIOMS
        .iter()
        .find(|(exact, _)| *exact == name)
        .map(|&(_, idiom)| idiom)
        .unwrap_or(Idiom::Action)
}

/// The part of `name` after the idiom's prefix (the whole name for non-prefix idioms).
fn idiom_subject<'a>(name: &'a str, idiom: Idiom) -> &'a str {
    let prefix = PREFIX_IDIOMS
        .iter()
        .find(|(_, i)| *i == idiom)
        .map(|(p, _)| *p)
        .unwrap_or("");
    name.strip_prefix(prefix).unwrap_or(name)
}

/// One-sentence summary for a method, chosen by idiom.
pub fn method_summary(name: &str) -> String {
    let idiom = classify_idiom(name);
    let words = to_words(idiom_subject(name, idiom));
    match idiom {
        Idiom::Getter => format!("Gets the {}.", words),
        Idiom::Setter => format!("Sets the {}.", words),
        Idiom::Predicate => format!("Checks if {}.", words),
        Idiom::Possession => format!("Checks if has {}.", words),
        Idiom::Describe => "Returns a string representation of this object.".to_string(),
        Idiom::Equality => "Checks if this object is equal to another object.".to_string(),
        Idiom::Hash => "Returns the hash code value for this object.".to_string(),
        Idiom::Action => format!("{}.", words),
    }
}
