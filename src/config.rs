//! Field configuration
//!
//! A code field is configured with a YAML (or JSON) document:
//!
//! ```yaml
//! defaultMode: javascript
//! theme: monokai
//! modes:
//!   - name: javascript
//!     snippet: "function main() {\n@code-here\n}"
//!   - name: markdown
//!     title: Markdown
//! config:
//!   editorHeight: 400px
//!   fontSize: 14
//!   dropdown:
//!     enable: true
//! ```
//!
//! Optional keys are resolved once into [`ResolvedConfig`] when a field
//! mounts; nothing downstream probes for missing keys again.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{ModeCatalog, ModeDescriptor};
use crate::editor::EditorOptions;

const DEFAULT_SAVE_WIN: &str = "Ctrl-Shift-S";
const DEFAULT_SAVE_MAC: &str = "Command-Shift-S";
const DEFAULT_SAVE_MESSAGE: &str = "Selected Code Saved Successfully";

/// Raw field configuration as written by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Mode selected when the field has no saved value
    pub default_mode: String,
    pub modes: Vec<ModeDescriptor>,
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Prefix for widget mode ids (e.g. `ace/mode/`)
    #[serde(default = "default_mode_path")]
    pub ace_mode_path: String,
    /// Prefix for widget theme ids (e.g. `ace/theme/`)
    #[serde(default = "default_theme_path")]
    pub ace_theme_path: String,
    /// Passed through to the widget untouched
    #[serde(default, skip_serializing_if = "EditorOptions::is_empty")]
    pub options: EditorOptions,
    #[serde(default)]
    pub config: WidgetConfig,
}

fn default_theme() -> String {
    "chrome".to_string()
}

fn default_mode_path() -> String {
    "ace/mode/".to_string()
}

fn default_theme_path() -> String {
    "ace/theme/".to_string()
}

/// Optional widget settings under the `config` key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// CSS length for the editor container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropdown: Option<Toggle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_command: Option<SaveCommandConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_customizer: Option<Toggle>,
}

/// Font size as a bare number of pixels or a CSS length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSize {
    Pixels(f64),
    Css(String),
}

impl FontSize {
    pub fn to_css(&self) -> String {
        match self {
            FontSize::Pixels(px) => format!("{}px", px),
            FontSize::Css(css) => css.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggle {
    #[serde(default)]
    pub enable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveCommandConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Key bindings and message for the "save selection" command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveCommand {
    pub win: String,
    pub mac: String,
    pub message: String,
}

impl Default for SaveCommand {
    fn default() -> Self {
        Self {
            win: DEFAULT_SAVE_WIN.to_string(),
            mac: DEFAULT_SAVE_MAC.to_string(),
            message: DEFAULT_SAVE_MESSAGE.to_string(),
        }
    }
}

/// Container sizing, already rendered as CSS values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetStyle {
    pub height: Option<String>,
    pub font_size: Option<String>,
}

/// Configuration with every optional key decided
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub default_mode: String,
    pub catalog: ModeCatalog,
    pub mode_path_prefix: String,
    /// Full widget theme id (`ace/theme/monokai`)
    pub theme_path: String,
    pub options: EditorOptions,
    pub style: WidgetStyle,
    /// Mode picker and save command enabled
    pub dropdown: bool,
    pub save_command: SaveCommand,
    /// Copy-options button wired to the clipboard
    pub clipboard: bool,
}

/// Errors from loading or validating a field configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl FieldConfig {
    /// Minimal configuration with the given modes
    pub fn new(default_mode: impl Into<String>, modes: Vec<ModeDescriptor>) -> Self {
        Self {
            default_mode: default_mode.into(),
            modes,
            theme: default_theme(),
            ace_mode_path: default_mode_path(),
            ace_theme_path: default_theme_path(),
            options: EditorOptions::new(),
            config: WidgetConfig::default(),
        }
    }

    /// Load a config file; `.json` files are parsed as JSON, anything else as YAML
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content)?,
            _ => Self::from_yaml(&content)?,
        };
        tracing::info!("Loaded field config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validate and settle every optional key
    ///
    /// An unknown `defaultMode` is only a warning: the field still mounts,
    /// it just starts without a mode.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        if self.modes.is_empty() {
            return Err(ConfigError::Invalid("no modes configured".to_string()));
        }

        let mut seen: Vec<String> = Vec::with_capacity(self.modes.len());
        for mode in &self.modes {
            if mode.name.trim().is_empty() {
                return Err(ConfigError::Invalid("mode with empty name".to_string()));
            }
            let id = mode.id();
            if seen.contains(&id) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate mode '{}'",
                    mode.name
                )));
            }
            seen.push(id);
        }

        let catalog = ModeCatalog::new(self.modes.clone());
        if !catalog.contains(&self.default_mode) {
            tracing::warn!(
                "Default mode '{}' is not one of the configured modes",
                self.default_mode
            );
        }

        let widget = &self.config;
        let save_command = widget
            .save_command
            .as_ref()
            .map(|cmd| {
                let defaults = SaveCommand::default();
                SaveCommand {
                    win: cmd.win.clone().unwrap_or(defaults.win),
                    mac: cmd.mac.clone().unwrap_or(defaults.mac),
                    message: cmd.message.clone().unwrap_or(defaults.message),
                }
            })
            .unwrap_or_default();

        Ok(ResolvedConfig {
            default_mode: self.default_mode.clone(),
            catalog,
            mode_path_prefix: self.ace_mode_path.clone(),
            theme_path: format!("{}{}", self.ace_theme_path, self.theme),
            options: self.options.clone(),
            style: WidgetStyle {
                height: widget.editor_height.clone(),
                font_size: widget.font_size.as_ref().map(FontSize::to_css),
            },
            dropdown: widget.dropdown.is_some_and(|t| t.enable),
            save_command,
            clipboard: !widget.options_customizer.is_some_and(|t| t.enable),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_YAML: &str = r#"
defaultMode: JavaScript
theme: monokai
aceModePath: "ace/mode/"
modes:
  - name: javascript
    title: JS
    snippet: "function main() {\n@code-here\n}"
  - name: markdown
    disableSnippet: true
options:
  tabSize: 2
config:
  editorHeight: 500px
  fontSize: 14
  dropdown:
    enable: true
  saveCommand:
    message: Stored!
"#;

    #[test]
    fn test_full_yaml_resolves() {
        let config = FieldConfig::from_yaml(FULL_YAML).unwrap();
        let resolved = config.resolve().unwrap();

        assert_eq!(resolved.default_mode, "JavaScript");
        assert_eq!(resolved.catalog.len(), 2);
        assert_eq!(resolved.theme_path, "ace/theme/monokai");
        assert_eq!(resolved.mode_path_prefix, "ace/mode/");
        assert_eq!(resolved.style.height.as_deref(), Some("500px"));
        assert_eq!(resolved.style.font_size.as_deref(), Some("14px"));
        assert!(resolved.dropdown);
        assert!(resolved.clipboard);
        assert_eq!(resolved.save_command.message, "Stored!");
        assert_eq!(resolved.save_command.win, "Ctrl-Shift-S");
        assert_eq!(resolved.save_command.mac, "Command-Shift-S");
        assert_eq!(resolved.options["tabSize"], serde_json::json!(2));
    }

    #[test]
    fn test_minimal_yaml_defaults() {
        let yaml = "defaultMode: python\nmodes:\n  - name: python\n";
        let resolved = FieldConfig::from_yaml(yaml).unwrap().resolve().unwrap();
        assert_eq!(resolved.theme_path, "ace/theme/chrome");
        assert_eq!(resolved.style, WidgetStyle::default());
        assert!(!resolved.dropdown);
        assert!(resolved.clipboard);
        assert_eq!(resolved.save_command, SaveCommand::default());
    }

    #[test]
    fn test_font_size_string() {
        let yaml = "defaultMode: a\nmodes: [{name: a}]\nconfig:\n  fontSize: 1.2em\n";
        let resolved = FieldConfig::from_yaml(yaml).unwrap().resolve().unwrap();
        assert_eq!(resolved.style.font_size.as_deref(), Some("1.2em"));
    }

    #[test]
    fn test_options_customizer_disables_clipboard() {
        let yaml = "defaultMode: a\nmodes: [{name: a}]\nconfig:\n  optionsCustomizer:\n    enable: true\n";
        let resolved = FieldConfig::from_yaml(yaml).unwrap().resolve().unwrap();
        assert!(!resolved.clipboard);
    }

    #[test]
    fn test_json_config() {
        let json = r#"{"defaultMode":"css","modes":[{"name":"css","snippet":"a {}"}]}"#;
        let config = FieldConfig::from_json(json).unwrap();
        assert_eq!(config.modes[0].snippet.as_deref(), Some("a {}"));
    }

    #[test]
    fn test_empty_modes_rejected() {
        let config = FieldConfig::new("a", vec![]);
        assert_eq!(
            config.resolve(),
            Err(ConfigError::Invalid("no modes configured".to_string()))
        );
    }

    #[test]
    fn test_duplicate_modes_rejected() {
        let config = FieldConfig::new(
            "php",
            vec![ModeDescriptor::new("php"), ModeDescriptor::new("PHP")],
        );
        assert!(matches!(config.resolve(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unknown_default_mode_is_not_an_error() {
        let config = FieldConfig::new("cobol", vec![ModeDescriptor::new("php")]);
        assert!(config.resolve().is_ok());
    }

    #[test]
    fn test_missing_required_key_is_parse_error() {
        let result = FieldConfig::from_yaml("modes: []\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_yaml_roundtrip_keeps_camel_case() {
        let config = FieldConfig::from_yaml(FULL_YAML).unwrap();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("defaultMode"));
        assert!(yaml.contains("disableSnippet"));
        assert_eq!(FieldConfig::from_yaml(&yaml).unwrap(), config);
    }
}
