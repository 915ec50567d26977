//! Snippet templating
//!
//! Starter snippets are normalized before they reach the editor. The pass is
//! whitespace-only and idempotent: formatting formatted output is a no-op.

use crate::util::expand_tabs;

/// Marks where previously written code is reinserted into a template
pub const PLACEHOLDER: &str = "@code-here";

/// Spaces per indentation level for bracket-structured languages
const INDENT_WIDTH: usize = 4;

/// Modes whose structure is carried by brackets rather than indentation
const BRACE_MODES: &[&str] = &[
    "c_cpp",
    "csharp",
    "css",
    "dart",
    "golang",
    "java",
    "javascript",
    "json",
    "jsx",
    "kotlin",
    "less",
    "php",
    "rust",
    "scala",
    "scss",
    "swift",
    "tsx",
    "typescript",
];

/// Reformatting strategy applied to a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnippetFormatter {
    /// Re-indent by bracket depth
    Braces,
    /// Keep indentation, only clean up whitespace
    #[default]
    Plain,
}

impl SnippetFormatter {
    pub fn format(self, text: &str) -> String {
        let lines = text.lines().map(expand_tabs);
        let lines: Vec<String> = match self {
            SnippetFormatter::Braces => reindent(lines),
            SnippetFormatter::Plain => lines.map(|l| l.trim_end().to_string()).collect(),
        };
        collapse_blank_lines(lines)
    }
}

/// Pick the formatter for a mode name (case-insensitive)
pub fn formatter_for_mode(mode: &str) -> SnippetFormatter {
    let mode = mode.to_lowercase();
    if BRACE_MODES.contains(&mode.as_str()) {
        SnippetFormatter::Braces
    } else {
        SnippetFormatter::Plain
    }
}

/// Produce the text to load into the editor for a snippet
pub fn materialize(snippet: &str, formatter: SnippetFormatter) -> String {
    formatter.format(snippet)
}

fn reindent(lines: impl Iterator<Item = String>) -> Vec<String> {
    let mut depth = 0usize;
    let mut out = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            out.push(String::new());
            continue;
        }

        let leading_closers = line.chars().take_while(|c| is_closer(*c)).count();
        let indent = depth.saturating_sub(leading_closers) * INDENT_WIDTH;
        out.push(format!("{}{}", " ".repeat(indent), line));

        depth = bracket_depth_after(line, depth);
    }

    out
}

fn is_closer(ch: char) -> bool {
    matches!(ch, '}' | ']' | ')')
}

/// Track nesting through a line, skipping brackets inside string literals
fn bracket_depth_after(line: &str, mut depth: usize) -> usize {
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for ch in line.chars() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }

        match ch {
            '"' | '\'' | '`' => quote = Some(ch),
            '{' | '[' | '(' => depth += 1,
            '}' | ']' | ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    depth
}

/// Collapse blank runs to a single blank line and drop blank edges
fn collapse_blank_lines(lines: Vec<String>) -> String {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        let blank = line.is_empty();
        if blank && out.last().map_or(true, |prev| prev.is_empty()) {
            continue;
        }
        out.push(line);
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}
