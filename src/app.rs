//! Admin Panel App
//!
//! Top-level component owning all shared state: active route, sidebar,
//! language, theme and the task store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ContentView, Sidebar, TopBar};
use crate::context::AppContext;
use crate::i18n;
use crate::store::AppState;
use crate::theme::{apply_theme, Theme};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (active_route, set_active_route) = signal(String::from("/"));
    let (sidebar_open, set_sidebar_open) = signal(true);
    let (language, set_language) = signal(i18n::load_language());
    let (theme, set_theme) = signal(Theme::default());

    apply_theme(theme.get_untracked());

    // Provide store and context to all children
    provide_context(Store::new(AppState::default()));
    provide_context(AppContext::new(
        (active_route, set_active_route),
        (sidebar_open, set_sidebar_open),
        (language, set_language),
        (theme, set_theme),
    ));

    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="main-content">
                <TopBar />
                <ContentView />
            </main>
        </div>
    }
}
