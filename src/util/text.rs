//! Text helpers shared by the templater, picker and headless editor

use std::sync::LazyLock;

use regex::Regex;

/// Tab width used when expanding tabs in snippets
pub const TABULATOR_WIDTH: usize = 4;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_-]").unwrap());
static WORD_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w\S*").unwrap());
static LOWER_UPPER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static UPPER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])([A-Z][a-z])").unwrap());

/// Word characters for whole-word matching (ASCII `\w`, as the widget's search uses)
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Expand tabs to spaces, honouring tab stops
pub fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut visual_col = 0;

    for ch in line.chars() {
        if ch == '\t' {
            let tab_width = TABULATOR_WIDTH - (visual_col % TABULATOR_WIDTH);
            out.extend(std::iter::repeat(' ').take(tab_width));
            visual_col += tab_width;
        } else {
            out.push(ch);
            visual_col += 1;
        }
    }

    out
}

/// Human-readable label for a mode name
///
/// `my-markdown_mode` -> `My Markdown Mode`, `camelCaseMode` -> `Camel Case Mode`
pub fn format_name(name: &str) -> String {
    let spaced = SEPARATORS.replace_all(name, " ");
    let titled = WORD_TOKEN.replace_all(spaced.trim(), |caps: &regex::Captures| {
        let token = &caps[0];
        let mut chars = token.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        }
    });
    let split = LOWER_UPPER.replace_all(&titled, "$1 $2");
    let split = UPPER_RUN.replace_all(&split, "$1 $2");
    split.trim().to_string()
}
