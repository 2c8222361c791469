//! 注目作品グリッド

use atelier_common::{featured_cards, ViewState};
use leptos::prelude::*;

use crate::translate::tr;

#[component]
pub fn FeaturedGrid(state: RwSignal<ViewState>) -> impl IntoView {
    let cards = Signal::derive(move || state.with(|s| featured_cards(&s.artworks, s.lang)));

    view! {
        <section id="featured" class="featured">
            <h2 class="featured-heading reveal">
                {move || tr(state, "featured.heading", "Featured works")}
            </h2>
            <div class="featured-grid">
                <For
                    each=move || cards.get()
                    // 行の中身はキー時点の値で固定されるので、言語で変わる文字列も
                    // キーに含めて行ごと作り直す
                    key=|card| (card.id, card.delay_ms, card.alt.clone(), card.caption.clone())
                    children=move |card| {
                        view! {
                            <a
                                href="#gallery"
                                class="featured-card reveal reveal-up"
                                style=("--reveal-delay", format!("{}ms", card.delay_ms))
                            >
                                <img src=card.src alt=card.alt loading="lazy" />
                                <div class="featured-cap">{card.caption}</div>
                            </a>
                        }
                    }
                />
            </div>
        </section>
    }
}
