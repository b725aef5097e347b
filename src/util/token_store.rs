//! Persisted bearer-credential store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single cross-cutting mutable resource of the session core. In the
//! browser the credential lives under one fixed `localStorage` key so it
//! survives reloads. Non-browser builds (SSR, native tests) substitute a
//! process-local cell with the same contract.
//!
//! Each call writes or deletes the whole value; there is no partial update.
//! No encryption and no expiry metadata are stored.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "staffboard_token";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static MEMORY: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

/// Read the stored credential, if any.
pub fn get() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY.with(|cell| cell.borrow().clone())
    }
}

/// Replace the stored credential.
pub fn set(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY.with(|cell| *cell.borrow_mut() = Some(token.to_owned()));
    }
}

/// Delete the stored credential. Safe to call when none is stored.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY.with(|cell| *cell.borrow_mut() = None);
    }
}
