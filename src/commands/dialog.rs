//! Browser Dialogs

use super::Prompter;

/// `window.alert` / `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompter;

impl Prompter for BrowserPrompter {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::warn!(target: "dialog", "alert failed: {:?}", err);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
