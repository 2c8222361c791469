//! 辞書引きヘルパー
//!
//! コンポーネントはキーと執筆済みフォールバック文字列の組で文言を宣言し、
//! 辞書に無いキーはフォールバックのまま表示される（翻訳漏れはエラーに
//! しない）。state 経由で読むので言語切替に追随する

use atelier_common::ViewState;
use leptos::prelude::*;

pub fn tr(state: RwSignal<ViewState>, key: &str, fallback: &str) -> String {
    state.with(|s| s.dict.lookup(key, fallback).to_string())
}
