//! Code-block extraction for the code renderer.
//!
//! Model output arrives with escaped newlines and usually wraps code in a
//! markdown fence. We take the first fenced block and its language; without a
//! fence the whole content is treated as code.

#[cfg(test)]
#[path = "code_test.rs"]
mod code_test;

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

pub const DEFAULT_LANGUAGE: &str = "python";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: String,
    pub code: String,
}

impl CodeBlock {
    /// Lines paired with 1-based line numbers.
    pub fn numbered_lines(&self) -> Vec<(usize, &str)> {
        self.code.lines().enumerate().map(|(i, line)| (i + 1, line)).collect()
    }
}

/// Replace literal `\n` / `\t` escape sequences with the real characters.
pub fn unescape(content: &str) -> String {
    content.replace("\\n", "\n").replace("\\t", "\t")
}

/// Extract the first code block. `None` for empty content.
pub fn extract_code_block(content: &str) -> Option<CodeBlock> {
    if content.trim().is_empty() {
        return None;
    }
    let content = unescape(content);

    let mut language = None;
    let mut code = String::new();
    let mut inside = false;
    for event in Parser::new(&content) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                inside = true;
                language = match kind {
                    CodeBlockKind::Fenced(info) => info.split_whitespace().next().map(str::to_owned),
                    CodeBlockKind::Indented => None,
                };
            }
            Event::Text(text) if inside => code.push_str(&text),
            Event::End(TagEnd::CodeBlock) => {
                return Some(CodeBlock {
                    language: language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned()),
                    code: code.trim_end_matches('\n').to_owned(),
                });
            }
            _ => {}
        }
    }

    Some(CodeBlock { language: DEFAULT_LANGUAGE.to_owned(), code: content.trim().to_owned() })
}
