//! Dark mode preference, persisted per browser.
//!
//! The preference lives under one `localStorage` key; absent a stored value
//! the system `prefers-color-scheme` query decides. Rendering happens by
//! toggling a `.dark-mode` class on `<html>`.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "staffboard_dark";

/// Load the stored preference (or the system default) and apply it.
/// Returns the effective mode so callers can seed UI state with it.
pub fn init() -> bool {
    let enabled = read_preference();
    apply(enabled);
    enabled
}

/// Flip the mode, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    write_preference(next);
    next
}

fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(stored)) = storage.get_item(STORAGE_KEY) {
                return stored == "true";
            }
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

fn write_preference(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if enabled { "true" } else { "false" });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = el.class_list();
            if enabled {
                let _ = classes.add_1("dark-mode");
            } else {
                let _ = classes.remove_1("dark-mode");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
