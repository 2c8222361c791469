//! ヒーロー（導入文）
//!
//! 導入文は辞書側に簡易マークアップを含むので inner_html で流し込む。
//! 辞書の内容は同梱リソースであり、信頼する前提

use atelier_common::ViewState;
use leptos::prelude::*;

use crate::translate::tr;

#[component]
pub fn Hero(state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <section id="top" class="hero">
            <h1 class="reveal reveal-up">
                {move || tr(state, "hero.title", "Paintings & Drawings")}
            </h1>
            <p
                class="hero-lead reveal reveal-up"
                inner_html=move || tr(state, "hero.lead", "Selected works on canvas and paper.")
            ></p>
        </section>
    }
}
