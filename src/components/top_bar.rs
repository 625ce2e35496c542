//! Top Bar Component
//!
//! Language selector and theme toggle above the content area.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::i18n::Lang;

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_language_change = move |ev: web_sys::Event| {
        ctx.set_language(Lang::from_value(&event_target_value(&ev)));
    };

    view! {
        <div class="top-bar">
            <select
                class="language-select"
                title=move || ctx.t("changeLanguage")
                prop:value=move || ctx.language.get().as_str().to_string()
                on:change=on_language_change
            >
                <option value="ja">"日本語"</option>
                <option value="en">"English"</option>
            </select>
            <button
                class="theme-toggle"
                title=move || {
                    if ctx.theme.get().is_dark() {
                        ctx.t("lightMode")
                    } else {
                        ctx.t("nightMode")
                    }
                }
                on:click=move |_| ctx.toggle_theme()
            >
                {move || if ctx.theme.get().is_dark() { "☀️" } else { "🌙" }}
            </button>
        </div>
    }
}
