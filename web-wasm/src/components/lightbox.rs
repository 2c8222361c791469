//! ライトボックス（モーダルビューア）
//!
//! 表示内容はカーソル位置の作品から導出する。背景クリックと
//! 閉じるボタンで閉じ、前後ボタンでカーソルを循環させる

use atelier_common::{render, ViewState};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn Lightbox<FS, FC>(state: RwSignal<ViewState>, on_step: FS, on_close: FC) -> impl IntoView
where
    FS: Fn(i32) + 'static + Clone + Send,
    FC: Fn() + 'static + Clone + Send,
{
    let slide =
        Signal::derive(move || state.with(|s| s.current_artwork().map(|a| render::slide(a, s.lang))));
    let is_open = move || state.with(|s| s.lightbox().is_some());
    let aria_open = is_open.clone();

    let close_on_backdrop = {
        let on_close = on_close.clone();
        move |ev: web_sys::MouseEvent| {
            // 画像やボタンではなく背景そのものをクリックしたときだけ閉じる
            let on_backdrop = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .is_some_and(|el| el.id() == "lightbox");
            if on_backdrop {
                on_close();
            }
        }
    };

    let step_prev = {
        let on_step = on_step.clone();
        move |_| on_step(-1)
    };
    let step_next = move |_| on_step(1);
    let close_click = move |_| on_close();

    view! {
        <div
            id="lightbox"
            class="lightbox"
            class:open=is_open
            aria-hidden=move || if aria_open() { "false" } else { "true" }
            on:click=close_on_backdrop
        >
            <button class="lb-close" aria-label="Close" on:click=close_click>
                "\u{00d7}"
            </button>
            <button class="lb-prev" aria-label="Previous" on:click=step_prev>
                "\u{2039}"
            </button>
            {move || {
                slide.get()
                    .map(|s| {
                        view! {
                            <figure class="lb-figure">
                                <img id="lb-image" src=s.src alt=s.alt />
                                <figcaption id="lb-caption" class="lb-caption">{s.caption}</figcaption>
                            </figure>
                        }
                    })
            }}
            <button class="lb-next" aria-label="Next" on:click=step_next>
                "\u{203a}"
            </button>
        </div>
    }
}
