//! A mounted code field
//!
//! Ties one editor widget to one form field: resolved configuration, the
//! mode controller, the picker and the clipboard binding. Resources taken in
//! [`FieldWidget::mount`] are released by [`FieldWidget::teardown`].

use crate::catalog::EditorValueRecord;
use crate::clipboard::{ClipboardBinding, ClipboardError};
use crate::config::{ConfigError, FieldConfig, ResolvedConfig, SaveCommand, WidgetStyle};
use crate::controller::ModeController;
use crate::editor::EditorHandle;
use crate::picker::ModePicker;
use crate::registry::EditorRegistry;

pub struct FieldWidget<E: EditorHandle> {
    pub(crate) field_name: String,
    pub(crate) config: ResolvedConfig,
    pub(crate) controller: ModeController<E>,
    pub(crate) picker: ModePicker,
    pub(crate) clipboard: Option<Box<dyn ClipboardBinding>>,
    /// Options panel shown
    pub(crate) options_open: bool,
    torn_down: bool,
}

impl<E: EditorHandle> FieldWidget<E> {
    /// Mount a field: resolve config, prepare the editor, load the initial
    /// content and register with the host registry.
    ///
    /// `clipboard` is the host's attempt at acquiring a clipboard; failure
    /// is logged and the field runs without the copy-options binding.
    pub fn mount(
        field_name: impl Into<String>,
        config: &FieldConfig,
        mut editor: E,
        record: &EditorValueRecord,
        registry: &mut EditorRegistry,
        clipboard: Result<Box<dyn ClipboardBinding>, ClipboardError>,
    ) -> Result<Self, ConfigError> {
        let field_name = field_name.into();
        let config = config.resolve()?;

        editor.set_theme(&config.theme_path);
        if !config.options.is_empty() {
            editor.set_options(&config.options);
        }

        let mut controller = ModeController::from_config(editor, &config);
        controller.initialize(&config.default_mode, record);

        // A resumed value keeps its saved type even when the catalog lacks it
        let mut picker = ModePicker::new(&config.catalog);
        if record.is_resumable() {
            picker.show_current(&record.kind);
        } else {
            picker.show_current(&controller.state().current_mode);
        }

        let clipboard = match clipboard {
            Ok(mut binding) if !config.clipboard => {
                binding.release();
                None
            }
            Ok(binding) => Some(binding),
            Err(e) => {
                if config.clipboard {
                    tracing::warn!("Copy options disabled for '{}': {}", field_name, e);
                }
                None
            }
        };

        registry.register(&field_name);
        tracing::debug!(
            "Mounted field '{}' in mode '{}'",
            field_name,
            controller.current_mode_id()
        );

        Ok(Self {
            field_name,
            config,
            controller,
            picker,
            clipboard,
            options_open: false,
            torn_down: false,
        })
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn controller(&self) -> &ModeController<E> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ModeController<E> {
        &mut self.controller
    }

    pub fn picker(&self) -> &ModePicker {
        &self.picker
    }

    pub fn style(&self) -> &WidgetStyle {
        &self.config.style
    }

    /// Save command, present only when the dropdown is enabled
    pub fn save_command(&self) -> Option<&SaveCommand> {
        self.config.dropdown.then_some(&self.config.save_command)
    }

    pub fn has_dropdown(&self) -> bool {
        self.config.dropdown
    }

    pub fn has_clipboard(&self) -> bool {
        self.clipboard.is_some()
    }

    pub fn options_open(&self) -> bool {
        self.options_open
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn release(&mut self) {
        self.controller.teardown();
        if let Some(mut binding) = self.clipboard.take() {
            binding.release();
        }
        self.torn_down = true;
    }

    /// Release subscriptions and the clipboard binding, and leave the registry
    pub fn teardown(&mut self, registry: &mut EditorRegistry) {
        if self.torn_down {
            return;
        }
        self.release();
        registry.unregister(&self.field_name);
        tracing::debug!("Tore down field '{}'", self.field_name);
    }
}

impl<E: EditorHandle> Drop for FieldWidget<E> {
    fn drop(&mut self) {
        if !self.torn_down {
            tracing::debug!("Field '{}' dropped without teardown", self.field_name);
            self.release();
        }
    }
}
