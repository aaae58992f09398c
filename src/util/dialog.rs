//! Blocking browser dialogs for write-path failures and delete guards.
//!
//! Both helpers are no-ops outside the browser: `alert` does nothing and
//! `confirm` answers `false`, so server-rendered code paths never mutate.

/// Show a blocking alert with the given message.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Ask the user to confirm an action. Returns `false` off-browser or when
/// the prompt is dismissed.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
