//! Clipboard text access for the actions column.
//!
//! Trait-based so the table widget can be tested against a recording
//! implementation. The production implementation uses the `arboard` crate
//! on native targets; on web the operation is a no-op stub.
//!
//! Writes are fire-and-forget: the copy-id action awaits no completion and
//! surfaces no error, so failures are logged and otherwise invisible to
//! the caller.

/// Capability for writing text to the system clipboard.
pub trait ClipboardText {
    /// Writes `text` to the clipboard. Failures are logged and swallowed.
    fn write_text(&mut self, text: &str);
}

/// System clipboard implementation using the `arboard` crate.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(not(target_arch = "wasm32"))]
impl ClipboardText for SystemClipboard {
    fn write_text(&mut self, text: &str) {
        use arboard::Clipboard;

        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(text) {
                    log::warn!("Failed to write clipboard text: {e}");
                }
            }
            Err(e) => {
                log::warn!("Failed to access clipboard: {e}");
            }
        }
    }
}

/// Stub implementation for WASM targets.
///
/// The browser clipboard API requires async operations and a secure
/// context; writes are silently dropped until that is implemented.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(target_arch = "wasm32")]
impl ClipboardText for SystemClipboard {
    fn write_text(&mut self, _text: &str) {}
}
