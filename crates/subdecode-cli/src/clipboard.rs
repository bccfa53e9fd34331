//! OS clipboard notifier.

use arboard::Clipboard;
use subdecode_core::{Notify, NotifyError};

/// Copies the persisted text to the system clipboard
#[derive(Debug, Clone, Copy, Default)]
pub struct ClipboardNotifier;

impl Notify for ClipboardNotifier {
    fn notify(&self, text: &str) -> Result<(), NotifyError> {
        let mut clipboard = Clipboard::new().map_err(|e| NotifyError::Unavailable {
            reason: e.to_string(),
        })?;
        clipboard
            .set_text(text)
            .map_err(|e| NotifyError::Write {
                reason: e.to_string(),
            })
    }
}
