//! ヘッダー（ブランド・ナビ・言語切替）

use atelier_common::{Lang, ViewState};
use leptos::prelude::*;

use crate::translate::tr;

#[component]
pub fn Header<F>(state: RwSignal<ViewState>, on_select_language: F) -> impl IntoView
where
    F: Fn(Lang) + 'static + Clone + Send,
{
    view! {
        <header class="site-header">
            <a class="brand" href="#top">{move || tr(state, "site.title", "Atelier")}</a>
            <nav class="nav">
                <a href="#featured">{move || tr(state, "nav.featured", "Featured")}</a>
                <a href="#gallery">{move || tr(state, "nav.gallery", "Gallery")}</a>
                <a href="#contact">{move || tr(state, "nav.contact", "Contact")}</a>
            </nav>
            <div class="lang-switch">
                {Lang::ALL
                    .iter()
                    .map(|&lang| {
                        let on_select_language = on_select_language.clone();
                        let is_active = move || state.with(|s| s.lang == lang);
                        let aria_active = is_active.clone();
                        view! {
                            <button
                                class="lang-btn"
                                class:active=is_active
                                aria-pressed=move || if aria_active() { "true" } else { "false" }
                                on:click=move |_| on_select_language(lang)
                            >
                                {lang.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </header>
    }
}
