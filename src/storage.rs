//! Local Storage Access
//!
//! The selected language is the only value persisted across sessions.
//! Storage failures degrade to the defaults.

const LANGUAGE_STORAGE_KEY: &str = "language";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Read the stored language value, if any
pub fn load_language_value() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(LANGUAGE_STORAGE_KEY).ok().flatten())
}

/// Write the language value; write errors are ignored
pub fn save_language_value(value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(LANGUAGE_STORAGE_KEY, value);
    }
}
