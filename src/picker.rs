//! Filterable mode picker
//!
//! A display-layer list over the catalog. Filtering only toggles visibility;
//! selecting an entry updates the shown label and delegates the actual
//! switch to [`ModeController::change_mode`].

use crate::catalog::{ModeCatalog, ModeDescriptor};
use crate::controller::ModeController;
use crate::editor::EditorHandle;
use crate::util::format_name;

/// One row of the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    /// Mode name passed to the controller
    pub name: String,
    /// Rendered label (configured title or formatted name)
    pub label: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ModePicker {
    entries: Vec<PickerEntry>,
    current_label: String,
}

/// Label for a catalog entry
pub fn entry_label(mode: &ModeDescriptor) -> String {
    match &mode.title {
        Some(title) if !title.is_empty() => title.clone(),
        _ => format_name(&mode.name),
    }
}

impl ModePicker {
    pub fn new(catalog: &ModeCatalog) -> Self {
        let entries = catalog
            .iter()
            .map(|mode| PickerEntry {
                name: mode.name.clone(),
                label: entry_label(mode),
                visible: true,
            })
            .collect();
        Self {
            entries,
            current_label: String::new(),
        }
    }

    pub fn entries(&self) -> &[PickerEntry] {
        &self.entries
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &PickerEntry> {
        self.entries.iter().filter(|entry| entry.visible)
    }

    /// Label shown on the picker button
    pub fn current_label(&self) -> &str {
        &self.current_label
    }

    /// Show the label of `mode_name` without switching modes
    pub fn show_current(&mut self, mode_name: &str) {
        self.current_label = self
            .entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(mode_name))
            .map(|entry| entry.label.clone())
            .unwrap_or_else(|| format_name(mode_name));
    }

    /// Hide entries whose label does not contain `query` (case-insensitive)
    pub fn filter(&mut self, query: &str) {
        let query = query.to_uppercase();
        for entry in &mut self.entries {
            entry.visible = entry.label.to_uppercase().contains(&query);
        }
    }

    /// Show `display_title` (or the formatted name) and switch modes
    pub fn select<E: EditorHandle>(
        &mut self,
        controller: &mut ModeController<E>,
        mode_name: &str,
        display_title: Option<&str>,
    ) -> bool {
        self.current_label = match display_title {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format_name(mode_name),
        };
        controller.change_mode(mode_name)
    }
}
