//! Persistence and environment helpers for the app shell.

use crate::i18n::{LocaleCode, DEFAULT_LOCALE};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

/// Storage key holding the last-logged-in username. Its mere presence
/// restores an authenticated session on the next visit.
pub(crate) const USER_KEY: &str = "citadel.user";

pub(crate) fn load_saved_user() -> Option<String> {
    let value = LocalStorage::get::<String>(USER_KEY).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    Some(value)
}

pub(crate) fn persist_user(username: &str) {
    if let Err(err) = LocalStorage::set(USER_KEY, username) {
        log_storage_error("set", USER_KEY, &err.to_string());
    }
}

pub(crate) fn clear_user() {
    LocalStorage::delete(USER_KEY);
}

/// Pick the UI locale from the browser language, defaulting to English.
pub(crate) fn detect_locale() -> LocaleCode {
    if let Some(tag) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&tag) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
