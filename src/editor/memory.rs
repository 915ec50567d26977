//! Headless [`EditorHandle`] backed by a rope.
//!
//! Used by the CLI demo and by tests. Offsets are char indices.

use std::ops::Range;

use ropey::Rope;

use super::handle::{EditorEventKind, EditorHandle, EditorOptions, FindOptions, Subscription};
use super::selection::Selection;
use crate::util::is_word_char;

#[derive(Debug, Clone, Default)]
pub struct MemoryEditor {
    buffer: Rope,
    selection: Selection,
    mode: String,
    theme: String,
    options: EditorOptions,
    subscriptions: Vec<Subscription>,
    next_subscription_id: u64,
}

impl MemoryEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from_str(text),
            ..Self::default()
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Select a char range, clamped to the document
    pub fn set_selection(&mut self, selection: impl Into<Selection>) {
        self.selection = selection.into().clamped(self.buffer.len_chars());
    }

    /// Select the first occurrence of `needle`, if present
    pub fn select_text(&mut self, needle: &str) -> bool {
        let found = self.buffer.to_string().find(needle).map(|byte_idx| {
            let start = self.buffer.byte_to_char(byte_idx);
            start..start + needle.chars().count()
        });
        match found {
            Some(range) => {
                self.set_selection(range);
                true
            }
            None => false,
        }
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Live listeners, in subscription order
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn is_subscribed(&self, event: EditorEventKind) -> bool {
        self.subscriptions.iter().any(|s| s.event == event)
    }

    /// Start offsets of every match of `needle`, in document order
    fn match_starts(&self, needle: &[char], options: &FindOptions) -> Vec<usize> {
        let haystack: Vec<char> = self.buffer.chars().collect();
        if needle.is_empty() || needle.len() > haystack.len() {
            return Vec::new();
        }

        let chars_eq = |a: char, b: char| {
            if options.case_sensitive {
                a == b
            } else {
                a.to_lowercase().eq(b.to_lowercase())
            }
        };

        (0..=haystack.len() - needle.len())
            .filter(|&start| {
                let window = &haystack[start..start + needle.len()];
                window.iter().zip(needle).all(|(&a, &b)| chars_eq(a, b))
            })
            .filter(|&start| {
                !options.whole_word || is_whole_word(&haystack, start, needle)
            })
            .collect()
    }
}

/// A match is a whole word when no word character is glued to a word-character edge
fn is_whole_word(haystack: &[char], start: usize, needle: &[char]) -> bool {
    let end = start + needle.len();
    let starts_with_word = needle.first().copied().is_some_and(is_word_char);
    let ends_with_word = needle.last().copied().is_some_and(is_word_char);

    let before_ok = !starts_with_word
        || start == 0
        || !is_word_char(haystack[start - 1]);
    let after_ok = !ends_with_word || end >= haystack.len() || !is_word_char(haystack[end]);

    before_ok && after_ok
}

impl EditorHandle for MemoryEditor {
    fn text(&self) -> String {
        self.buffer.to_string()
    }

    fn set_text(&mut self, text: &str) {
        self.buffer = Rope::from_str(text);
        self.selection = Selection::collapsed(0);
    }

    fn mode(&self) -> String {
        self.mode.clone()
    }

    fn set_mode(&mut self, mode_path: &str) {
        self.mode = mode_path.to_string();
    }

    fn set_theme(&mut self, theme_path: &str) {
        self.theme = theme_path.to_string();
    }

    fn set_options(&mut self, options: &EditorOptions) {
        self.options
            .extend(options.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    fn selected_text(&self) -> String {
        let range = self.selection.clamped(self.buffer.len_chars()).range();
        self.buffer.slice(range).to_string()
    }

    fn replace_selection(&mut self, text: &str) {
        let range = self.selection.clamped(self.buffer.len_chars()).range();
        self.buffer.remove(range.clone());
        self.buffer.insert(range.start, text);
        self.selection = Selection::collapsed(range.start + text.chars().count());
    }

    fn find(&mut self, needle: &str, options: &FindOptions) -> Option<Range<usize>> {
        let needle: Vec<char> = needle.chars().collect();
        let starts = self.match_starts(&needle, options);

        let found = if options.backwards {
            let cursor = self.selection.start();
            starts
                .iter()
                .rev()
                .find(|&&start| start + needle.len() <= cursor)
                .or_else(|| if options.wrap { starts.last() } else { None })
        } else {
            let cursor = self.selection.end();
            starts
                .iter()
                .find(|&&start| start >= cursor)
                .or_else(|| if options.wrap { starts.first() } else { None })
        };

        let range = found.map(|&start| start..start + needle.len())?;
        self.selection = Selection::from(range.clone());
        Some(range)
    }

    fn subscribe(&mut self, event: EditorEventKind) -> Subscription {
        let subscription = Subscription {
            id: self.next_subscription_id,
            event,
        };
        self.next_subscription_id += 1;
        self.subscriptions.push(subscription);
        subscription
    }

    fn unsubscribe(&mut self, subscription: Subscription) {
        self.subscriptions.retain(|s| *s != subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_collapses_selection() {
        let mut editor = MemoryEditor::with_text("hello world");
        editor.set_selection(0..5);
        editor.set_text("bye");
        assert_eq!(editor.text(), "bye");
        assert!(editor.selection().is_empty());
        assert_eq!(editor.selected_text(), "");
    }

    #[test]
    fn test_replace_selection() {
        let mut editor = MemoryEditor::with_text("let x = 1;");
        editor.set_selection(4..5);
        assert_eq!(editor.selected_text(), "x");
        editor.replace_selection("value");
        assert_eq!(editor.text(), "let value = 1;");
        assert_eq!(editor.selection(), Selection::collapsed(9));
    }

    #[test]
    fn test_replace_collapsed_selection_inserts() {
        let mut editor = MemoryEditor::with_text("ab");
        editor.set_selection(Selection::collapsed(1));
        editor.replace_selection("X");
        assert_eq!(editor.text(), "aXb");
    }

    #[test]
    fn test_find_wraps_from_cursor() {
        let mut editor = MemoryEditor::with_text("foo bar foo");
        editor.set_selection(Selection::collapsed(9));
        let found = editor.find("foo", &FindOptions::default());
        assert_eq!(found, Some(0..3));
        assert_eq!(editor.selected_text(), "foo");
    }

    #[test]
    fn test_find_without_wrap_misses() {
        let mut editor = MemoryEditor::with_text("foo bar");
        editor.set_selection(Selection::collapsed(5));
        let options = FindOptions {
            wrap: false,
            ..FindOptions::default()
        };
        assert_eq!(editor.find("foo", &options), None);
    }

    #[test]
    fn test_find_case_sensitivity() {
        let mut editor = MemoryEditor::with_text("@Code-Here");
        assert_eq!(editor.find("@code-here", &FindOptions::placeholder()), None);
        assert_eq!(editor.find("@code-here", &FindOptions::default()), Some(0..10));
    }

    #[test]
    fn test_find_whole_word() {
        let mut editor = MemoryEditor::with_text("@code-heres @code-here");
        assert_eq!(
            editor.find("@code-here", &FindOptions::placeholder()),
            Some(12..22)
        );

        // Leading '@' is not a word char, so a glued prefix is allowed
        let mut editor = MemoryEditor::with_text("x@code-here");
        assert_eq!(
            editor.find("@code-here", &FindOptions::placeholder()),
            Some(1..11)
        );

        // Non-ASCII letters do not glue onto the match
        let mut editor = MemoryEditor::with_text("@code-hereé");
        assert_eq!(
            editor.find("@code-here", &FindOptions::placeholder()),
            Some(0..10)
        );
    }

    #[test]
    fn test_find_backwards() {
        let mut editor = MemoryEditor::with_text("a1 a2 a3");
        editor.set_selection(Selection::collapsed(5));
        let options = FindOptions {
            backwards: true,
            ..FindOptions::default()
        };
        assert_eq!(editor.find("a", &options), Some(3..4));
    }

    #[test]
    fn test_find_multibyte_offsets() {
        let mut editor = MemoryEditor::with_text("héllo @code-here");
        assert_eq!(
            editor.find("@code-here", &FindOptions::placeholder()),
            Some(6..16)
        );
        editor.replace_selection("wörld");
        assert_eq!(editor.text(), "héllo wörld");
    }

    #[test]
    fn test_subscriptions() {
        let mut editor = MemoryEditor::new();
        let blur = editor.subscribe(EditorEventKind::Blur);
        let focus = editor.subscribe(EditorEventKind::Focus);
        assert_ne!(blur.id, focus.id);
        assert!(editor.is_subscribed(EditorEventKind::Blur));

        editor.unsubscribe(blur);
        assert!(!editor.is_subscribed(EditorEventKind::Blur));
        assert_eq!(editor.subscriptions(), &[focus]);
    }

    #[test]
    fn test_select_text() {
        let mut editor = MemoryEditor::with_text("say foo();");
        assert!(editor.select_text("foo();"));
        assert_eq!(editor.selected_text(), "foo();");
        assert!(!editor.select_text("missing"));
    }
}
