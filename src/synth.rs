//! Comment synthesizer: builds the Javadoc block for a classified line.

use crate::model::{DeclarationKind, GeneratedBlock, MethodDescriptor, Parameter};
use crate::naming::{self, Idiom, FIELD_NAME_RULES, PARAM_NAME_RULES};
use crate::signature;

const TODO_DESCRIPTION: &str = "TODO: Add detailed description";

/// Build the doc block for `line` (trimmed) of the given kind.
///
/// Returns `None` only for [`DeclarationKind::None`].
pub fn synthesize(kind: DeclarationKind, line: &str, indentation: &str) -> Option<GeneratedBlock> {
    let mut block = GeneratedBlock::new(indentation);
    match kind {
        DeclarationKind::Class => class_block(&mut block, line),
        DeclarationKind::Interface => interface_block(&mut block, line),
        DeclarationKind::Method => method_block(&mut block, line),
        DeclarationKind::Field => field_block(&mut block, line),
        DeclarationKind::None => return None,
    }
    Some(block)
}

fn class_block(block: &mut GeneratedBlock, line: &str) {
    block.push(format!("{} class.", signature::class_name(line)));
    block.push(TODO_DESCRIPTION);
    block.push("");
    block.push("@author TODO");
    block.push("@version 1.0");
}

fn interface_block(block: &mut GeneratedBlock, line: &str) {
    block.push(format!("{} interface.", signature::interface_name(line)));
    block.push(TODO_DESCRIPTION);
}

fn method_block(block: &mut GeneratedBlock, line: &str) {
    let method = signature::parse_method(line);
    block.push(naming::method_summary(&method.name));

    for param in &method.parameters {
        block.push(format!(
            "@param {} {}",
            param.name,
            param_description(param, &method)
        ));
    }

    if let Some(desc) = return_description(&method.return_type) {
        block.push(format!("@return {}", desc));
    }

    if line.contains("throws") {
        for exception in signature::exceptions(line) {
            block.push(format!("@throws {} if TODO", exception));
        }
    }
}

fn field_block(block: &mut GeneratedBlock, line: &str) {
    let name = signature::field_name(line);
    let type_name = signature::field_type(line);
    block.push(field_description(&name, &type_name));
}

/// `@param` text: name substrings first, then the declared type.
pub fn param_description(param: &Parameter, method: &MethodDescriptor) -> String {
    if let Some(phrase) = naming::match_substring(PARAM_NAME_RULES, &param.name) {
        return phrase.to_string();
    }

    let name = param.name.to_lowercase();
    match param.type_name.as_str() {
        "String" => format!("the {} string", name),
        "int" | "Integer" => format!("the {} number", name),
        "boolean" | "Boolean" => format!("true if {}, false otherwise", name),
        _ if naming::classify_idiom(&method.name) == Idiom::Setter => {
            format!("the {} to set", name)
        }
        _ => format!("the {}", name),
    }
}

/// `@return` text, or `None` for `void`.
pub fn return_description(return_type: &str) -> Option<String> {
    let desc = match return_type {
        "void" => return None,
        "boolean" | "Boolean" => "true if successful, false otherwise".to_string(),
        "int" | "Integer" => "the result value".to_string(),
        "String" => "the result string".to_string(),
        other => format!("the {} instance", other),
    };
    Some(desc)
}

pub fn field_description(name: &str, type_name: &str) -> String {
    if let Some(phrase) = naming::match_substring(FIELD_NAME_RULES, name) {
        return phrase.to_string();
    }

    match type_name {
        "boolean" | "Boolean" => format!("Flag indicating if {}.", naming::to_words(name)),
        _ => format!("The {}.", naming::to_words(name)),
    }
}
