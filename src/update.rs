//! Update function for the Elm-style architecture
//!
//! All field state transitions flow through [`update`].

use std::time::Duration;

use crate::catalog::EditorValueRecord;
use crate::commands::{FieldCmd, Notification};
use crate::editor::EditorHandle;
use crate::messages::FieldMsg;
use crate::registry::EditorRegistry;
use crate::widget::FieldWidget;

/// How long the save-selection toast stays up
const SAVE_NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Apply one message to a field
///
/// The value record is the host's; it is only written on blur.
pub fn update<E: EditorHandle>(
    widget: &mut FieldWidget<E>,
    msg: FieldMsg,
    record: &mut EditorValueRecord,
    registry: &EditorRegistry,
) -> Option<FieldCmd> {
    if widget.is_torn_down() {
        tracing::debug!("Ignoring {:?} for torn down field", msg);
        return None;
    }

    match msg {
        FieldMsg::Blur => widget
            .controller
            .sync_value(record)
            .then_some(FieldCmd::Persist),

        FieldMsg::Focus => {
            if widget.options_open {
                widget.options_open = false;
                Some(FieldCmd::Redraw)
            } else {
                None
            }
        }

        FieldMsg::SelectMode { name, title } => {
            widget
                .picker
                .select(&mut widget.controller, &name, title.as_deref());
            Some(FieldCmd::Redraw)
        }

        FieldMsg::FilterModes(query) => {
            widget.picker.filter(&query);
            Some(FieldCmd::Redraw)
        }

        FieldMsg::SaveSelection => save_selection(widget, registry),

        FieldMsg::CopyOptions => copy_options(widget),

        FieldMsg::ToggleOptions => {
            widget.options_open = !widget.options_open;
            Some(FieldCmd::Redraw)
        }
    }
}

/// Keep the selection for the next re-template and confirm with a toast
fn save_selection<E: EditorHandle>(
    widget: &mut FieldWidget<E>,
    registry: &EditorRegistry,
) -> Option<FieldCmd> {
    let message = widget.save_command()?.message.clone();
    widget.controller.capture_selection();

    // Name the field when several editors share the page
    let message = if registry.is_shared() {
        format!("{} - Field Name : {}", message, widget.field_name)
    } else {
        message
    };

    Some(FieldCmd::Notify(
        Notification::success(message).dismiss_after(SAVE_NOTICE_DURATION),
    ))
}

/// Copy the field's widget options to the clipboard as JSON, closing the
/// options panel if it is open
fn copy_options<E: EditorHandle>(widget: &mut FieldWidget<E>) -> Option<FieldCmd> {
    let Some(binding) = widget.clipboard.as_mut() else {
        tracing::debug!("No clipboard binding for '{}'", widget.field_name);
        return None;
    };

    let copied = serde_json::to_string_pretty(&widget.config.options)
        .map_err(|e| e.to_string())
        .and_then(|json| binding.copy(&json).map_err(|e| e.to_string()));

    let notification = match copied {
        Ok(()) => Notification::success(format!(
            "\"{}\" field: Options Copied!",
            widget.field_name
        )),
        Err(e) => {
            tracing::error!("Copy options failed for '{}': {}", widget.field_name, e);
            Notification::error("Unable to copy options")
        }
    };
    let notify = FieldCmd::Notify(notification);
    if widget.options_open {
        widget.options_open = false;
        Some(FieldCmd::batch(vec![notify, FieldCmd::Redraw]))
    } else {
        Some(notify)
    }
}
