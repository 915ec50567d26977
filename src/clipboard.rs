//! Clipboard binding for the "copy options" button
//!
//! Acquired once when a field mounts and released on teardown. A missing
//! clipboard never blocks editing; the field just runs without the binding.

use std::cell::RefCell;
use std::rc::Rc;

/// Errors from acquiring or writing the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The environment has no usable clipboard
    Unsupported(String),
    /// The clipboard exists but rejected the write
    CopyFailed(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unsupported(e) => write!(f, "Clipboard not supported: {}", e),
            ClipboardError::CopyFailed(e) => write!(f, "Copy failed: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Something text can be copied into
pub trait ClipboardBinding {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Release underlying resources. Called exactly once on teardown.
    fn release(&mut self) {}
}

/// System clipboard via `arboard`
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn acquire() -> Result<Self, ClipboardError> {
        arboard::Clipboard::new()
            .map(|clipboard| Self {
                inner: Some(clipboard),
            })
            .map_err(|e| ClipboardError::Unsupported(e.to_string()))
    }
}

impl ClipboardBinding for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| ClipboardError::CopyFailed("clipboard released".to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    fn release(&mut self) {
        self.inner = None;
    }
}

/// In-process clipboard; clones share the same history
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    history: Rc<RefCell<Vec<String>>>,
    released: Rc<RefCell<bool>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything copied so far, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    pub fn is_released(&self) -> bool {
        *self.released.borrow()
    }
}

impl ClipboardBinding for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.is_released() {
            return Err(ClipboardError::CopyFailed("clipboard released".to_string()));
        }
        self.history.borrow_mut().push(text.to_string());
        Ok(())
    }

    fn release(&mut self) {
        *self.released.borrow_mut() = true;
    }
}
