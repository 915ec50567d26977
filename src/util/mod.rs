//! Utility modules

pub mod text;

pub use text::{expand_tabs, format_name, is_word_char, TABULATOR_WIDTH};
