use super::shell;
use crate::config::Executable;
use lazy_static::lazy_static;
use regex::Regex;

const CONTINUATION: &str = " \\\n";
const INDENT: &str = "        ";

lazy_static! {
    static ref CONTINUATION_PATTERN: Regex = Regex::new(r"[ \t]*\\\r?\n[ \t]*").unwrap();
}

/// Multi-line curl command, one flag per continuation line.
pub fn display(entity: &dyn Executable) -> String {
    let template = entity.template();
    let mut lines = vec![format!("curl '{}'", template.address())];

    for header in &template.headers {
        lines.push(format!("{INDENT}-H '{header}'"));
    }
    if !template.query_list.is_empty() {
        lines.push(format!("{INDENT}-G"));
        for (name, value) in &template.query_list {
            lines.push(format!("{INDENT}--data-urlencode '{name}={value}'"));
        }
    }
    for option in &template.options {
        lines.push(format!("{INDENT}{option}"));
    }
    lines.push(format!("{INDENT}-X{}", template.method));

    lines.join(CONTINUATION)
}

/// The display command collapsed onto a single line.
pub fn display_compact(entity: &dyn Executable) -> String {
    compact(&display(entity))
}

pub fn compact(multi_line: &str) -> String {
    CONTINUATION_PATTERN
        .replace_all(multi_line, " ")
        .into_owned()
}

/// Argument tokens for the curl process, in display order.
pub fn execution_tokens(entity: &dyn Executable) -> Vec<String> {
    let template = entity.template();
    let mut tokens = vec![template.address()];

    for header in &template.headers {
        tokens.push("-H".to_string());
        tokens.push(header.clone());
    }
    if !template.query_list.is_empty() {
        tokens.push("-G".to_string());
        for (name, value) in &template.query_list {
            tokens.push("--data-urlencode".to_string());
            tokens.push(format!("'{name}={value}'"));
        }
    }
    for option in &template.options {
        tokens.extend(shell::tokenize(option));
    }
    tokens.push(format!("-X{}", template.method));

    tokens
}
