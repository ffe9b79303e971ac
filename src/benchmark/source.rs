//! Source snippet extraction
//!
//! Finds a named function in a Rust source file and returns its literal text,
//! doc comments included. Used only to annotate reports.

use proc_macro2::LineColumn;
use syn::spanned::Spanned;
use syn::{Item, ItemFn};

/// A named source file held in memory
#[derive(Debug, Clone, Copy)]
pub struct SourceFile {
    pub name: &'static str,
    pub text: &'static str,
}

impl SourceFile {
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }
}

/// Source extraction errors
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Could not find function {function} in {file}")]
    NotFound { file: String, function: String },

    #[error("Could not parse {file}: {message}")]
    Parse { file: String, message: String },
}

/// Extract the full text of the function named `fn_name` from `file`.
pub fn extract_function_code(file: &SourceFile, fn_name: &str) -> Result<String, SourceError> {
    let parsed = syn::parse_file(file.text).map_err(|e| SourceError::Parse {
        file: file.name.to_string(),
        message: e.to_string(),
    })?;

    let item = find_function(&parsed.items, fn_name).ok_or_else(|| SourceError::NotFound {
        file: file.name.to_string(),
        function: fn_name.to_string(),
    })?;

    let span = item.span();
    Ok(slice_lines(file.text, span.start(), span.end()).trim().to_string())
}

/// Depth-first search through top-level items and inline modules
fn find_function<'a>(items: &'a [Item], fn_name: &str) -> Option<&'a ItemFn> {
    items.iter().find_map(|item| match item {
        Item::Fn(f) if f.sig.ident == fn_name => Some(f),
        Item::Mod(m) => m
            .content
            .as_ref()
            .and_then(|(_, inner)| find_function(inner, fn_name)),
        _ => None,
    })
}

/// Slice `text` between two line/column positions.
///
/// Lines are 1-based and columns count characters, matching `LineColumn`.
fn slice_lines(text: &str, start: LineColumn, end: LineColumn) -> String {
    let lines: Vec<&str> = text.lines().collect();
    if start.line == 0 || end.line < start.line || end.line > lines.len() {
        return String::new();
    }

    let mut out = String::new();
    for line_no in start.line..=end.line {
        let line = lines[line_no - 1];
        let from = if line_no == start.line { start.column } else { 0 };
        let to = if line_no == end.line {
            end.column
        } else {
            line.chars().count()
        };

        out.extend(line.chars().skip(from).take(to.saturating_sub(from)));
        if line_no != end.line {
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: SourceFile = SourceFile::new(
        "sample.rs",
        r#"use std::fmt;

/// Adds one.
pub fn add_one(x: i32) -> i32 {
    x + 1
}

fn untouched() {}

mod inner {
    pub fn nested() -> &'static str {
        "nested"
    }
}
"#,
    );

    #[test]
    fn test_extracts_function_with_doc_comment() {
        let code = extract_function_code(&SAMPLE, "add_one").unwrap();
        assert_eq!(
            code,
            "/// Adds one.\npub fn add_one(x: i32) -> i32 {\n    x + 1\n}"
        );
    }

    #[test]
    fn test_extracts_single_line_function() {
        let code = extract_function_code(&SAMPLE, "untouched").unwrap();
        assert_eq!(code, "fn untouched() {}");
    }

    #[test]
    fn test_extracts_nested_function() {
        let code = extract_function_code(&SAMPLE, "nested").unwrap();
        assert!(code.starts_with("pub fn nested()"));
        assert!(code.ends_with('}'));
    }

    #[test]
    fn test_missing_function() {
        let err = extract_function_code(&SAMPLE, "missing").unwrap_err();
        assert!(matches!(err, SourceError::NotFound { ref function, .. } if function == "missing"));
    }

    #[test]
    fn test_unparseable_file() {
        let broken = SourceFile::new("broken.rs", "fn {");
        let err = extract_function_code(&broken, "anything").unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }
}
