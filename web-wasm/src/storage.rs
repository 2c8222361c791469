//! 言語設定の永続化
//!
//! localStorage に言語コードを1キーだけ保存する

use atelier_common::config::LANG_STORAGE_KEY;
use gloo::storage::{LocalStorage, Storage};

/// 保存済みの言語コードを読む。無ければ None
pub fn load_lang_pref() -> Option<String> {
    LocalStorage::get(LANG_STORAGE_KEY).ok()
}

/// 言語コードを保存する。失敗しても動作は継続する
pub fn save_lang_pref(code: &str) {
    if let Err(e) = LocalStorage::set(LANG_STORAGE_KEY, code) {
        gloo::console::warn!(format!("言語設定を保存できません: {}", e));
    }
}
