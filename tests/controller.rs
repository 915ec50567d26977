//! Mode controller behaviour: switching, templating and value sync

mod common;

use codefield::editor::EditorHandle;
use codefield::snippet::{formatter_for_mode, materialize};
use codefield::util::format_name;
use codefield::{EditorValueRecord, ModeCatalog, ModeDescriptor};

use common::{controller, scenario_catalog};

fn templated_catalog() -> ModeCatalog {
    ModeCatalog::new(vec![
        ModeDescriptor::new("javascript").with_snippet("function main() {\n@code-here\n}"),
        ModeDescriptor::new("css").with_snippet("body {\n\tmargin: 0;\n}\n"),
        ModeDescriptor::new("php").with_snippet("<?php\necho 'hi';\n"),
        ModeDescriptor::new("yaml").with_snippet("key: value\nlist:\n  - a\n"),
        ModeDescriptor::new("markdown"),
    ])
}

// ========================================================================
// Unknown modes
// ========================================================================

#[test]
fn test_unknown_modes_leave_editor_untouched() {
    let mut ctl = controller(templated_catalog());
    ctl.initialize("markdown", &EditorValueRecord::default());
    ctl.editor_mut().set_text("# keep me");
    ctl.editor_mut().select_text("keep");

    for name in ["", "cobol", "java script", "markdown2", "@code-here"] {
        assert!(!ctl.change_mode(name), "{name:?} should not match");
        assert_eq!(ctl.current_text(), "# keep me");
        assert_eq!(ctl.current_mode_id(), "markdown");
        assert_eq!(ctl.editor().selected_text(), "keep");
    }
}

// ========================================================================
// Snippet injection
// ========================================================================

#[test]
fn test_snippets_without_placeholder_load_verbatim() {
    let catalog = templated_catalog();
    for mode in catalog.iter() {
        let Some(snippet) = mode.active_snippet() else {
            continue;
        };
        if snippet.contains("@code-here") {
            continue;
        }

        let mut ctl = controller(catalog.clone());
        ctl.initialize("markdown", &EditorValueRecord::default());
        ctl.change_mode(&mode.name);
        assert_eq!(
            ctl.current_text(),
            materialize(snippet, formatter_for_mode(&mode.name)),
            "mode {}",
            mode.name
        );
    }
}

#[test]
fn test_materialize_is_idempotent_for_catalog_snippets() {
    for mode in templated_catalog().iter() {
        let Some(snippet) = mode.snippet.as_deref() else {
            continue;
        };
        let formatter = formatter_for_mode(&mode.name);
        let once = materialize(snippet, formatter);
        assert_eq!(materialize(&once, formatter), once, "mode {}", mode.name);
    }
}

#[test]
fn test_switching_back_and_forth_keeps_hand_written_code() {
    let mut ctl = controller(templated_catalog());
    ctl.initialize("javascript", &EditorValueRecord::new("greet();", "javascript"));
    assert_eq!(ctl.current_text(), "greet();");

    ctl.change_mode("css");
    assert_eq!(ctl.current_text(), "body {\n    margin: 0;\n}");

    ctl.change_mode("javascript");
    assert_eq!(ctl.current_text(), "function main() {\n    greet();\n}");
}

// ========================================================================
// Scenarios
// ========================================================================

#[test]
fn test_initialize_with_placeholder_only_snippet_gives_empty_document() {
    let mut ctl = controller(scenario_catalog());
    ctl.initialize("javascript", &EditorValueRecord::adopt(None));
    assert_eq!(ctl.current_mode_id(), "javascript");
    assert_eq!(ctl.current_text(), "");
    assert_eq!(ctl.state().original_value, None);
}

#[test]
fn test_selection_survives_switch_to_mode_without_snippet() {
    let mut ctl = controller(scenario_catalog());
    ctl.initialize("javascript", &EditorValueRecord::default());
    ctl.editor_mut().set_text("foo();");
    ctl.editor_mut().select_text("foo();");

    ctl.change_mode("markdown");
    assert_eq!(ctl.current_mode_id(), "markdown");
    assert_eq!(ctl.editor().selected_text(), "foo();");
    assert_eq!(ctl.current_text(), "foo();");
    assert_eq!(ctl.state().original_value, None);
}

#[test]
fn test_blur_fills_empty_record() {
    let mut ctl = controller(scenario_catalog());
    ctl.initialize("python", &EditorValueRecord::default());
    ctl.editor_mut().set_text("print(1)");

    let mut record = EditorValueRecord::new("", "");
    ctl.sync_value(&mut record);
    assert_eq!(record, EditorValueRecord::new("print(1)", "python"));
}

#[test]
fn test_blur_on_empty_editor_with_saved_type() {
    let mut ctl = controller(scenario_catalog());
    ctl.initialize("markdown", &EditorValueRecord::default());

    let mut record = EditorValueRecord::new("x", "python");
    ctl.sync_value(&mut record);
    assert_eq!(record.code, "");
    // A saved type always lets the current mode through
    assert_eq!(record.kind, "markdown");
}

#[test]
fn test_blur_rereads_host_record() {
    let mut ctl = controller(scenario_catalog());
    ctl.initialize("python", &EditorValueRecord::default());
    ctl.editor_mut().set_text("a = 1");

    let mut record = EditorValueRecord::default();
    ctl.sync_value(&mut record);

    // Host resets the form between interactions
    record = EditorValueRecord::default();
    assert!(ctl.sync_value(&mut record));
    assert_eq!(record, EditorValueRecord::new("a = 1", "python"));
}

// ========================================================================
// Round trip
// ========================================================================

#[test]
fn test_sync_then_initialize_reproduces_state() {
    let mut ctl = controller(templated_catalog());
    ctl.initialize("javascript", &EditorValueRecord::default());
    ctl.change_mode("css");
    ctl.editor_mut().set_text("a { color: blue; }");

    let mut record = EditorValueRecord::default();
    ctl.sync_value(&mut record);

    let mut resumed = controller(templated_catalog());
    resumed.initialize("javascript", &record);
    assert_eq!(resumed.current_text(), ctl.current_text());
    assert_eq!(resumed.current_mode_id(), ctl.current_mode_id());
    assert_eq!(resumed.state().current_mode, "css");
}

#[test]
fn test_record_json_round_trip_resumes() {
    let mut ctl = controller(templated_catalog());
    ctl.initialize("yaml", &EditorValueRecord::default());
    let mut record = EditorValueRecord::default();
    ctl.sync_value(&mut record);

    let stored = record.to_json().unwrap();
    let loaded = EditorValueRecord::from_json(&stored).unwrap();

    let mut resumed = controller(templated_catalog());
    resumed.initialize("markdown", &loaded);
    assert_eq!(resumed.current_text(), "key: value\nlist:\n  - a");
    assert_eq!(resumed.current_mode_id(), "yaml");
}

// ========================================================================
// Name formatting
// ========================================================================

#[test]
fn test_format_name_examples() {
    assert_eq!(format_name("camelCaseMode"), "Camel Case Mode");
    assert_eq!(format_name("my-markdown_mode"), "My Markdown Mode");
    assert_eq!(format_name("my_markdown"), "My Markdown");
}
