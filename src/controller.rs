//! Mode controller
//!
//! Single authority for which mode is active, what text the editor shows,
//! and what the host's value record reads after an interaction.
//!
//! ## Mode switch policy
//!
//! ```text
//! change_mode(name)
//!   ├─ unknown name            → no-op
//!   ├─ set editor mode
//!   ├─ no snippet / disabled   → done (text untouched)
//!   ├─ selection > 1 char      → snippet replaces selection, old selection kept
//!   └─ else                    → snippet replaces document,
//!                                 placeholder ← kept value (or "")
//! ```
//!
//! The value record belongs to the host. It is passed in on every call that
//! reads or writes it so the controller never works from a stale copy.

use crate::catalog::{EditorValueRecord, ModeCatalog, ModeDescriptor};
use crate::config::ResolvedConfig;
use crate::editor::{
    mode_id_from_path, mode_path, EditorEventKind, EditorHandle, FindOptions, Subscription,
};
use crate::snippet::{formatter_for_mode, materialize, PLACEHOLDER};
use crate::tracing::ControllerSnapshot;

/// Mutable controller state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerState {
    /// Name of the active catalog mode (empty until one is applied)
    pub current_mode: String,
    /// Code carried across re-templating; `None` until first captured
    pub original_value: Option<String>,
    /// Token marking the insertion point inside snippets
    pub pending_snippet_placeholder: String,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            current_mode: String::new(),
            original_value: None,
            pending_snippet_placeholder: PLACEHOLDER.to_string(),
        }
    }
}

pub struct ModeController<E: EditorHandle> {
    editor: E,
    catalog: ModeCatalog,
    mode_path_prefix: String,
    state: ControllerState,
    subscriptions: Vec<Subscription>,
}

impl<E: EditorHandle> ModeController<E> {
    pub fn new(editor: E, catalog: ModeCatalog, mode_path_prefix: impl Into<String>) -> Self {
        Self {
            editor,
            catalog,
            mode_path_prefix: mode_path_prefix.into(),
            state: ControllerState::default(),
            subscriptions: Vec::new(),
        }
    }

    pub fn from_config(editor: E, config: &ResolvedConfig) -> Self {
        Self::new(editor, config.catalog.clone(), config.mode_path_prefix.clone())
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    pub fn catalog(&self) -> &ModeCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Live focus/blur subscriptions
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    fn mode_path(&self, mode_name: &str) -> String {
        mode_path(&self.mode_path_prefix, mode_name)
    }

    fn apply_mode(&mut self, mode: &ModeDescriptor) {
        let path = self.mode_path(&mode.name);
        self.editor.set_mode(&path);
        self.state.current_mode = mode.name.clone();
    }

    /// Select the placeholder in the document, if present
    fn find_placeholder(&mut self) -> bool {
        let placeholder = self.state.pending_snippet_placeholder.clone();
        self.editor
            .find(&placeholder, &FindOptions::placeholder())
            .is_some()
    }

    /// Blank the editor, apply the default mode, then resume a saved value
    /// or load the default mode's snippet.
    ///
    /// An unknown default mode leaves the editor blank; that is a
    /// configuration mistake reported as a warning.
    pub fn initialize(&mut self, default_mode: &str, record: &EditorValueRecord) {
        self.attach();
        self.editor.set_text("");

        let default = self.catalog.find(default_mode).cloned();
        match &default {
            Some(mode) => self.apply_mode(mode),
            None => tracing::warn!(
                "Default mode '{}' is not configured, starting blank",
                default_mode
            ),
        }

        if record.is_resumable() {
            self.editor.set_text(&record.code);
            let path = self.mode_path(&record.kind);
            self.editor.set_mode(&path);
            match self.catalog.find(&record.kind) {
                Some(mode) => self.state.current_mode = mode.name.clone(),
                None => tracing::warn!("Saved mode '{}' is not configured", record.kind),
            }
            tracing::debug!("Resumed saved value in mode '{}'", record.kind);
        } else if let Some(mode) = default {
            self.load_default_snippet(&mode);
        }

        if !record.code.is_empty() {
            self.state.original_value = Some(record.code.clone());
        }
    }

    /// Load a mode's snippet as the whole document, clearing the placeholder
    fn load_default_snippet(&mut self, mode: &ModeDescriptor) {
        let Some(snippet) = mode.active_snippet() else {
            return;
        };

        let text = materialize(snippet, formatter_for_mode(&mode.name));
        self.editor.set_text(&text);
        if self.find_placeholder() {
            self.editor.replace_selection("");
        }
    }

    /// Switch to `requested` (case-insensitive), re-templating per the mode
    /// switch policy. Returns false when no such mode exists.
    pub fn change_mode(&mut self, requested: &str) -> bool {
        let Some(mode) = self.catalog.find(requested).cloned() else {
            tracing::debug!("Ignoring change to unknown mode '{}'", requested);
            return false;
        };

        let before = ControllerSnapshot::capture(self);
        self.apply_mode(&mode);
        self.inject_snippet(&mode);

        let after = ControllerSnapshot::capture(self);
        if let Some(diff) = before.diff(&after) {
            tracing::debug!(target: "controller", "change_mode({}): {}", mode.name, diff);
        }
        true
    }

    fn inject_snippet(&mut self, mode: &ModeDescriptor) {
        let Some(snippet) = mode.snippet.as_deref() else {
            return;
        };
        if mode.disable_snippet {
            return;
        }

        let text = materialize(snippet, formatter_for_mode(&mode.name));

        let selected = self.editor.selected_text();
        if selected.chars().count() > 1 {
            self.editor.replace_selection(&text);
            self.state.original_value = Some(selected);
            return;
        }

        self.editor.set_text(&text);
        if self.find_placeholder() {
            let replacement = self.state.original_value.clone().unwrap_or_default();
            self.editor.replace_selection(&replacement);
        }
    }

    /// Copy the editor state into the host record (runs on blur)
    ///
    /// `code` is written when it changed. `type` is written when the mode
    /// differs and either the document or the saved type is non-empty, so a
    /// stray focus/blur on an empty editor never sets a type.
    /// Returns true if the record changed.
    pub fn sync_value(&self, record: &mut EditorValueRecord) -> bool {
        let text = self.editor.text();
        let mode_id = self.current_mode_id();
        let mut changed = false;

        if text != record.code {
            record.code = text.clone();
            changed = true;
        }

        if mode_id != record.kind && (!text.is_empty() || !record.kind.is_empty()) {
            record.kind = mode_id;
            changed = true;
        }

        if changed {
            tracing::debug!("Synced value record (type '{}')", record.kind);
        }
        changed
    }

    /// Remember the current selection for the next re-template
    pub fn capture_selection(&mut self) -> String {
        let selected = self.editor.selected_text();
        self.state.original_value = Some(selected.clone());
        selected
    }

    pub fn current_text(&self) -> String {
        self.editor.text()
    }

    /// Mode id as the widget reports it (last segment of the mode path)
    pub fn current_mode_id(&self) -> String {
        mode_id_from_path(&self.editor.mode()).to_string()
    }

    /// Subscribe to focus and blur, once
    pub fn attach(&mut self) {
        if !self.subscriptions.is_empty() {
            return;
        }
        for event in [EditorEventKind::Blur, EditorEventKind::Focus] {
            let subscription = self.editor.subscribe(event);
            self.subscriptions.push(subscription);
        }
    }

    /// Release every subscription taken in [`attach`](Self::attach)
    pub fn teardown(&mut self) {
        for subscription in self.subscriptions.drain(..) {
            self.editor.unsubscribe(subscription);
        }
    }
}
