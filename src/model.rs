//! Data model for declarations and generated doc blocks: format-agnostic.

/// What a single trimmed source line declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Interface,
    Method,
    Field,
    None,
}

impl DeclarationKind {
    pub fn label(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Interface => "interface",
            DeclarationKind::Method => "method",
            DeclarationKind::Field => "field",
            DeclarationKind::None => "none",
        }
    }
}

/// One raw line of a source file, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// Leading whitespace, copied verbatim onto every line of an inserted block
    pub indentation: &'a str,
    pub trimmed: &'a str,
    /// True when the raw line still carries the `\r` of a CRLF ending
    pub crlf: bool,
}

impl<'a> SourceLine<'a> {
    pub fn new(raw: &'a str) -> Self {
        let body = raw.trim_start();
        let indentation = &raw[..raw.len() - body.len()];
        SourceLine {
            indentation,
            trimmed: raw.trim(),
            crlf: raw.ends_with('\r'),
        }
    }

    /// Line terminator to use for text inserted above this line.
    pub fn eol(&self) -> &'static str {
        if self.crlf {
            "\r\n"
        } else {
            "\n"
        }
    }
}

/// Lexically extracted method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    /// "void" when unresolved (no match, or a constructor)
    pub return_type: String,
    pub parameters: Vec<Parameter>,
}

impl Default for MethodDescriptor {
    fn default() -> Self {
        MethodDescriptor {
            name: String::new(),
            return_type: "void".to_string(),
            parameters: Vec::new(),
        }
    }
}

/// A single `(type, name)` pair from a parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub type_name: String,
    pub name: String,
}

/// A documentation comment ready to be placed above a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBlock {
    pub indentation: String,
    /// Content lines without the ` * ` prefix; an empty string renders as ` * `
    pub lines: Vec<String>,
}

impl GeneratedBlock {
    pub fn new(indentation: &str) -> Self {
        GeneratedBlock {
            indentation: indentation.to_string(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Render as `/** ... */`, every line terminated by `eol`.
    pub fn render(&self, eol: &str) -> String {
        let ind = &self.indentation;
        let mut out = String::new();
        out.push_str(ind);
        out.push_str("/**");
        out.push_str(eol);
        for line in &self.lines {
            out.push_str(ind);
            out.push_str(" * ");
            out.push_str(line);
            out.push_str(eol);
        }
        out.push_str(ind);
        out.push_str(" */");
        out.push_str(eol);
        out
    }
}

/// Blocks inserted into one file, broken down by declaration kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCounts {
    pub classes: usize,
    pub interfaces: usize,
    pub methods: usize,
    pub fields: usize,
}

impl KindCounts {
    pub fn record(&mut self, kind: DeclarationKind) {
        match kind {
            DeclarationKind::Class => self.classes += 1,
            DeclarationKind::Interface => self.interfaces += 1,
            DeclarationKind::Method => self.methods += 1,
            DeclarationKind::Field => self.fields += 1,
            DeclarationKind::None => {}
        }
    }

    pub fn total(&self) -> usize {
        self.classes + self.interfaces + self.methods + self.fields
    }
}

/// Output of transforming one file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    pub text: String,
    pub lines_processed: usize,
    pub blocks_inserted: usize,
    pub by_kind: KindCounts,
}

impl TransformResult {
    /// Untouched lines are reproduced byte-for-byte, so the text differs
    /// from the input exactly when a block was inserted.
    pub fn changed(&self) -> bool {
        self.blocks_inserted > 0
    }
}
