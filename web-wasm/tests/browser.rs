//! ブラウザ上で動かすテスト（wasm-pack test --headless で実行）

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_lang_pref_roundtrip() {
    atelier_wasm::storage::save_lang_pref("pl");
    assert_eq!(atelier_wasm::storage::load_lang_pref().as_deref(), Some("pl"));
}

#[wasm_bindgen_test]
fn test_reveal_animator_available() {
    assert!(atelier_wasm::reveal::RevealAnimator::new().is_some());
}
