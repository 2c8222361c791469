//! ギャラリー（フィルタチップ + 作品一覧）
//!
//! チップのカテゴリはカタログから初出順に導出する。作品はフィルタ適用後の
//! カタログ順で並べ、クリックか Enter / Space でライトボックスを開く

use atelier_common::config::FILTER_ALL;
use atelier_common::{categories, gallery_cards, ViewState};
use leptos::prelude::*;

use crate::translate::tr;

#[component]
pub fn GallerySection<FF, FO>(
    state: RwSignal<ViewState>,
    on_select_filter: FF,
    on_open: FO,
) -> impl IntoView
where
    FF: Fn(String) + 'static + Clone + Send,
    FO: Fn(u32) + 'static + Clone + Send,
{
    let chips = Signal::derive(move || {
        state.with(|s| {
            let mut chips = vec![FILTER_ALL.to_string()];
            chips.extend(categories(&s.artworks));
            chips
        })
    });
    let cards =
        Signal::derive(move || state.with(|s| gallery_cards(&s.artworks, s.filter(), s.lang)));

    view! {
        <section id="gallery" class="gallery">
            <h2 class="gallery-heading reveal">
                {move || tr(state, "gallery.heading", "Gallery")}
            </h2>
            <div class="filters" role="tablist">
                <For
                    each=move || chips.get()
                    key=|chip| chip.clone()
                    children=move |chip| {
                        let on_select_filter = on_select_filter.clone();
                        let chip_for_click = chip.clone();
                        let chip_for_active = chip.clone();
                        let chip_for_label = chip.clone();
                        let is_active = move || state.with(|s| s.filter() == chip_for_active);
                        let aria_active = is_active.clone();
                        view! {
                            <button
                                class="chip"
                                role="tab"
                                class:is-active=is_active
                                aria-selected=move || if aria_active() { "true" } else { "false" }
                                on:click=move |_| on_select_filter(chip_for_click.clone())
                            >
                                {move || {
                                    let key = format!("filters.{}", chip_for_label);
                                    tr(state, &key, &chip_for_label)
                                }}
                            </button>
                        }
                    }
                />
            </div>
            <div class="masonry">
                <For
                    each=move || cards.get()
                    // 行の中身はキー時点の値で固定されるので、言語や並びで変わる
                    // 文字列と遅延もキーに含めて行ごと作り直す
                    key=|card| (card.id, card.delay_ms, card.alt.clone(), card.caption.clone())
                    children=move |card| {
                        let id = card.id;
                        let on_click = on_open.clone();
                        let on_key = on_open.clone();
                        view! {
                            <figure
                                class="masonry-item reveal reveal-up"
                                tabindex="0"
                                role="group"
                                style=("--reveal-delay", format!("{}ms", card.delay_ms))
                                on:click=move |_| on_click(id)
                                on:keydown=move |ev| {
                                    if ev.key() == "Enter" || ev.key() == " " {
                                        ev.prevent_default();
                                        on_key(id);
                                    }
                                }
                            >
                                <img src=card.src alt=card.alt loading="lazy" decoding="async" />
                                <figcaption class="figcap">{card.caption}</figcaption>
                            </figure>
                        }
                    }
                />
            </div>
        </section>
    }
}
