//! Application Context
//!
//! Shared state provided via Leptos Context API. The top-level panel owns
//! every signal here; children only reach them through this struct.

use leptos::prelude::*;

use crate::i18n::{self, Lang};
use crate::theme::{self, Theme};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently displayed route - read
    pub active_route: ReadSignal<String>,
    /// Currently displayed route - write
    set_active_route: WriteSignal<String>,
    /// Sidebar expanded or collapsed - read
    pub sidebar_open: ReadSignal<bool>,
    /// Sidebar expanded or collapsed - write
    set_sidebar_open: WriteSignal<bool>,
    /// Selected language - read
    pub language: ReadSignal<Lang>,
    /// Selected language - write
    set_language: WriteSignal<Lang>,
    /// Selected theme - read
    pub theme: ReadSignal<Theme>,
    /// Selected theme - write
    set_theme: WriteSignal<Theme>,
}

impl AppContext {
    pub fn new(
        active_route: (ReadSignal<String>, WriteSignal<String>),
        sidebar_open: (ReadSignal<bool>, WriteSignal<bool>),
        language: (ReadSignal<Lang>, WriteSignal<Lang>),
        theme: (ReadSignal<Theme>, WriteSignal<Theme>),
    ) -> Self {
        Self {
            active_route: active_route.0,
            set_active_route: active_route.1,
            sidebar_open: sidebar_open.0,
            set_sidebar_open: sidebar_open.1,
            language: language.0,
            set_language: language.1,
            theme: theme.0,
            set_theme: theme.1,
        }
    }

    /// Switch the displayed panel, unconditionally
    pub fn navigate(&self, route: &str) {
        web_sys::console::log_1(&format!("[APP] navigate to {}", route).into());
        self.set_active_route.set(route.to_string());
    }

    /// Expand or collapse the sidebar
    pub fn toggle_sidebar(&self) {
        self.set_sidebar_open.update(|open| *open = !*open);
    }

    /// Switch language and persist the choice
    pub fn set_language(&self, lang: Lang) {
        i18n::save_language(lang);
        self.set_language.set(lang);
    }

    /// Flip light/dark and apply it to the document
    pub fn toggle_theme(&self) {
        let next = self.theme.get().toggled();
        theme::apply_theme(next);
        self.set_theme.set(next);
    }

    /// Translate `key` for the current language
    pub fn t(&self, key: &str) -> String {
        i18n::translate(self.language.get(), key)
    }
}
