//! Tracing setup and state snapshots for debug logs
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=controller=debug` - mode transitions only
//! - `RUST_LOG=codefield::config=info` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/codefield/logs/codefield.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::controller::ModeController;
use crate::editor::EditorHandle;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging always
/// records debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "codefield.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of controller state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSnapshot {
    pub mode_id: String,
    pub text_chars: usize,
    pub selection_chars: usize,
    pub original_value_chars: Option<usize>,
}

impl ControllerSnapshot {
    pub fn capture<E: EditorHandle>(controller: &ModeController<E>) -> Self {
        let editor = controller.editor();
        Self {
            mode_id: controller.current_mode_id(),
            text_chars: editor.text().chars().count(),
            selection_chars: editor.selected_text().chars().count(),
            original_value_chars: controller
                .state()
                .original_value
                .as_ref()
                .map(|v| v.chars().count()),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &ControllerSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.mode_id != other.mode_id {
            changes.push(format!("mode: {} → {}", self.mode_id, other.mode_id));
        }
        if self.text_chars != other.text_chars {
            changes.push(format!(
                "text: {} → {} chars",
                self.text_chars, other.text_chars
            ));
        }
        if self.selection_chars != other.selection_chars {
            changes.push(format!(
                "selection: {} → {} chars",
                self.selection_chars, other.selection_chars
            ));
        }
        if self.original_value_chars != other.original_value_chars {
            let describe = |v: Option<usize>| match v {
                Some(n) => format!("{} chars", n),
                None => "unset".to_string(),
            };
            changes.push(format!(
                "kept value: {} → {}",
                describe(self.original_value_chars),
                describe(other.original_value_chars)
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
