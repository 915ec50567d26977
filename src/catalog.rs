//! Mode catalog and the persisted value record
//!
//! The catalog is the immutable list of modes a field was configured with.
//! The value record is the `{code, type}` pair the host form stores.

use serde::{Deserialize, Serialize};

/// A configured editing mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeDescriptor {
    /// Mode name as understood by the editor widget (e.g. "javascript")
    pub name: String,
    /// Optional label shown in the mode picker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Starter text loaded when switching to this mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Switch mode without touching the document even if a snippet exists
    #[serde(default)]
    pub disable_snippet: bool,
}

impl ModeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            snippet: None,
            disable_snippet: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn snippet_disabled(mut self) -> Self {
        self.disable_snippet = true;
        self
    }

    /// Lowercased name, the form used in editor mode paths
    pub fn id(&self) -> String {
        self.name.to_lowercase()
    }

    /// Case-insensitive name comparison
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Snippet to inject on a mode switch, if any
    pub fn active_snippet(&self) -> Option<&str> {
        match &self.snippet {
            Some(snippet) if !self.disable_snippet => Some(snippet.as_str()),
            _ => None,
        }
    }
}

/// Ordered, immutable set of modes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeCatalog {
    modes: Vec<ModeDescriptor>,
}

impl ModeCatalog {
    pub fn new(modes: Vec<ModeDescriptor>) -> Self {
        Self { modes }
    }

    /// Find a mode by name, ignoring case
    pub fn find(&self, name: &str) -> Option<&ModeDescriptor> {
        self.modes.iter().find(|mode| mode.matches(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModeDescriptor> {
        self.modes.iter()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

impl FromIterator<ModeDescriptor> for ModeCatalog {
    fn from_iter<I: IntoIterator<Item = ModeDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The `{code, type}` value persisted by the host form
///
/// `kind` is empty or names a catalog mode. The host owns this record; the
/// controller is handed a mutable borrow for each operation that writes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorValueRecord {
    #[serde(default)]
    pub code: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl EditorValueRecord {
    pub fn new(code: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            kind: kind.into(),
        }
    }

    /// Adopt the host's value, or start from empty defaults
    pub fn adopt(existing: Option<EditorValueRecord>) -> Self {
        existing.unwrap_or_default()
    }

    /// True when both fields are set, i.e. a previous session can be resumed
    pub fn is_resumable(&self) -> bool {
        !self.code.is_empty() && !self.kind.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
