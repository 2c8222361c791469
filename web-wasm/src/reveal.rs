//! スクロール連動のフェードイン
//!
//! IntersectionObserver で .reveal 要素を監視し、しきい値を超えて
//! 見えたら .in を付けて監視から外す。1回きりで、再装填はしない。
//! 再レンダーで差し込まれた要素は refresh() で監視に載せ直す

use atelier_common::config::REVEAL_THRESHOLD;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// フェードイン対象に付けるクラス
pub const REVEAL_SELECTOR: &str = ".reveal:not(.in)";

/// 表示済みマーク
const REVEALED_CLASS: &str = "in";

pub struct RevealAnimator {
    observer: IntersectionObserver,
    // コールバックはオブザーバと同じ寿命で保持する
    _callback: Closure<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>,
}

impl RevealAnimator {
    /// オブザーバを作る。環境が対応していなければ None
    pub fn new() -> Option<RevealAnimator> {
        let callback = Closure::<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>::new(
            |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
                for entry in entries {
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1(REVEALED_CLASS);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;

        Some(RevealAnimator {
            observer,
            _callback: callback,
        })
    }

    /// まだ表示されていない .reveal 要素を監視に載せ直す
    ///
    /// 表示済み（.in 付き）は対象外のまま
    pub fn refresh(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
            return;
        };
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                if let Ok(el) = node.dyn_into::<Element>() {
                    self.observer.observe(&el);
                }
            }
        }
    }
}

impl Drop for RevealAnimator {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
