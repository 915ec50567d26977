//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use codefield::clipboard::{ClipboardBinding, ClipboardError, MemoryClipboard};
use codefield::{
    EditorRegistry, EditorValueRecord, FieldConfig, FieldWidget, MemoryEditor, ModeCatalog,
    ModeController, ModeDescriptor,
};

pub const FIELD_YAML: &str = r#"
defaultMode: javascript
theme: monokai
modes:
  - name: javascript
    title: JavaScript
    snippet: "function main() {\n@code-here\n}"
  - name: markdown
  - name: python
    snippet: "def main():\n    @code-here\n"
  - name: html
    snippet: "<div></div>"
    disableSnippet: true
  - name: css
    snippet: "body {\ncolor: red;\n}"
options:
  tabSize: 2
config:
  editorHeight: 400px
  dropdown:
    enable: true
"#;

pub fn field_config() -> FieldConfig {
    FieldConfig::from_yaml(FIELD_YAML).unwrap()
}

/// Minimal catalog: a bare placeholder snippet and two plain modes
pub fn scenario_catalog() -> ModeCatalog {
    ModeCatalog::new(vec![
        ModeDescriptor::new("javascript").with_snippet("@code-here"),
        ModeDescriptor::new("markdown"),
        ModeDescriptor::new("python"),
    ])
}

/// Controller over a fresh headless editor
pub fn controller(catalog: ModeCatalog) -> ModeController<MemoryEditor> {
    ModeController::new(MemoryEditor::new(), catalog, "ace/mode/")
}

pub fn memory_clipboard() -> (MemoryClipboard, Result<Box<dyn ClipboardBinding>, ClipboardError>) {
    let observer = MemoryClipboard::new();
    let binding: Box<dyn ClipboardBinding> = Box::new(observer.clone());
    (observer, Ok(binding))
}

pub fn no_clipboard() -> Result<Box<dyn ClipboardBinding>, ClipboardError> {
    Err(ClipboardError::Unsupported("headless".to_string()))
}

/// Mount the standard test field with a memory clipboard
pub fn mount(
    record: &EditorValueRecord,
    registry: &mut EditorRegistry,
) -> (FieldWidget<MemoryEditor>, MemoryClipboard) {
    let (observer, clipboard) = memory_clipboard();
    let widget = FieldWidget::mount(
        "body",
        &field_config(),
        MemoryEditor::new(),
        record,
        registry,
        clipboard,
    )
    .unwrap();
    (widget, observer)
}
