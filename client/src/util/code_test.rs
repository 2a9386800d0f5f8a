use super::*;

#[test]
fn empty_content_renders_nothing() {
    assert_eq!(extract_code_block(""), None);
    assert_eq!(extract_code_block("  \n "), None);
}

#[test]
fn fenced_block_keeps_language_and_body() {
    let block = extract_code_block("Here:\n```rust\nfn main() {}\n```\nDone").unwrap();
    assert_eq!(block.language, "rust");
    assert_eq!(block.code, "fn main() {}");
}

#[test]
fn fence_without_language_defaults_to_python() {
    let block = extract_code_block("```\nprint('hi')\n```").unwrap();
    assert_eq!(block.language, "python");
    assert_eq!(block.code, "print('hi')");
}

#[test]
fn escaped_newlines_are_unescaped_before_parsing() {
    let block = extract_code_block("```js\\nconst a = 1;\\n\\tconst b = 2;\\n```").unwrap();
    assert_eq!(block.language, "js");
    assert_eq!(block.code, "const a = 1;\n\tconst b = 2;");
}

#[test]
fn unfenced_content_is_treated_as_python() {
    let block = extract_code_block("  x = 1\ny = 2  ").unwrap();
    assert_eq!(block.language, "python");
    assert_eq!(block.code, "x = 1\ny = 2");
}

#[test]
fn only_first_block_is_used() {
    let block = extract_code_block("```c\nint a;\n```\n\n```go\nvar b int\n```").unwrap();
    assert_eq!(block.language, "c");
    assert_eq!(block.code, "int a;");
}

#[test]
fn numbered_lines_start_at_one() {
    let block = CodeBlock { language: "python".to_owned(), code: "a\nb".to_owned() };
    assert_eq!(block.numbered_lines(), vec![(1, "a"), (2, "b")]);
}

#[test]
fn unescape_handles_tabs_and_newlines() {
    assert_eq!(unescape("a\\nb\\tc"), "a\nb\tc");
}
