//! メインアプリケーションコンポーネント
//!
//! ページ状態 (ViewState) をここで1つだけ持ち、すべての操作は
//! このシグナル経由で反映する

use atelier_common::{Lang, ViewState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    contact::ContactSection, featured::FeaturedGrid, footer::Footer, gallery::GallerySection,
    header::Header, hero::Hero, lightbox::Lightbox,
};
use crate::reveal::RevealAnimator;
use crate::storage;

/// 辞書を取得して言語を切り替え、設定を保存する
///
/// 取得に失敗したら言語は変えず、ログだけ残す（リトライなし）
fn switch_language(state: RwSignal<ViewState>, lang: Lang) {
    spawn_local(async move {
        match api::fetch_dictionary(lang).await {
            Ok(dict) => {
                state.update(|s| s.set_language(lang, dict));
                storage::save_lang_pref(lang.as_str());
            }
            Err(e) => gloo::console::error!(format!("辞書を読み込めません: {}", e)),
        }
    });
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(ViewState::new());

    // 起動: 保存済み設定かブラウザ言語で辞書を読み、続けてカタログを読む。
    // カタログのフェッチはページにつきこの1回だけ
    spawn_local(async move {
        let saved = storage::load_lang_pref();
        let browser = web_sys::window().and_then(|w| w.navigator().language());
        let lang = Lang::resolve(saved.as_deref(), browser.as_deref());
        match api::fetch_dictionary(lang).await {
            Ok(dict) => {
                state.update(|s| s.set_language(lang, dict));
                storage::save_lang_pref(lang.as_str());
            }
            Err(e) => gloo::console::error!(format!("辞書を読み込めません: {}", e)),
        }
        match api::fetch_catalog().await {
            Ok(artworks) => state.update(|s| s.set_catalog(artworks)),
            Err(e) => gloo::console::error!(format!("カタログを読み込めません: {}", e)),
        }
    });

    let on_select_language = move |lang: Lang| switch_language(state, lang);
    let on_select_filter = move |filter: String| state.update(|s| s.set_filter(&filter));
    let on_open = move |id: u32| {
        state.update(|s| {
            s.open_lightbox(id);
        });
    };
    let on_step = move |delta: i32| state.update(|s| s.step_lightbox(delta));
    let on_close = move || state.update(|s| s.close_lightbox());

    // ライトボックスが開いている間だけ有効なキー操作
    window_event_listener(leptos::ev::keydown, move |ev| {
        if state.with_untracked(|s| s.lightbox().is_none()) {
            return;
        }
        match ev.key().as_str() {
            "Escape" => state.update(|s| s.close_lightbox()),
            "ArrowLeft" => state.update(|s| s.step_lightbox(-1)),
            "ArrowRight" => state.update(|s| s.step_lightbox(1)),
            _ => {}
        }
    });

    // 再レンダーで差し込まれた .reveal 要素を、描画後に監視へ載せ直す
    let animator = StoredValue::new_local(RevealAnimator::new());
    Effect::new(move |_| {
        state.track();
        request_animation_frame(move || {
            animator.with_value(|a| {
                if let Some(a) = a {
                    a.refresh();
                }
            });
        });
    });

    view! {
        <Header state=state on_select_language=on_select_language />
        <main>
            <Hero state=state />
            <FeaturedGrid state=state />
            <GallerySection state=state on_select_filter=on_select_filter on_open=on_open />
            <ContactSection state=state />
        </main>
        <Footer state=state />
        <Lightbox state=state on_step=on_step on_close=on_close />
    }
}
