//! Dark mode preference for the admin pages.
//!
//! The preference lives in `localStorage`; first visits fall back to the
//! system `prefers-color-scheme` query. Applying a preference toggles the
//! `.dark-mode` class on `<html>`. Browser-only; inert under SSR.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "supplybase_admin_dark";

/// Stored preference, if the user has ever toggled it on this browser.
#[cfg(feature = "hydrate")]
fn stored_preference(window: &web_sys::Window) -> Option<bool> {
    let storage = window.local_storage().ok()??;
    let stored = storage.get_item(STORAGE_KEY).ok()??;
    Some(stored == "true")
}

/// Read the stored preference, falling back to the system color scheme.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Some(stored) = stored_preference(&window) {
            return stored;
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on the root element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            if enabled {
                let _ = class_list.add_1("dark-mode");
            } else {
                let _ = class_list.remove_1("dark-mode");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the preference, persist it, and apply the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
            }
        }
    }
    next
}
