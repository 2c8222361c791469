//! 静的リソースの取得
//!
//! locales/<lang>.json と data/artworks.json のフェッチ。
//! 失敗は Error::Fetch / Error::Parse として呼び出し側に返す（リトライなし）

use atelier_common::config::{locale_path, CATALOG_PATH};
use atelier_common::{parse_catalog, Artwork, Dictionary, Error, Lang, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

fn fetch_err(url: &str, e: JsValue) -> Error {
    Error::Fetch(format!("{}: {:?}", url, e))
}

/// URLをGETして本文テキストを返す
async fn fetch_text(url: &str) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoCache);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| fetch_err(url, e))?;

    let window =
        web_sys::window().ok_or_else(|| Error::Fetch("window がありません".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| fetch_err(url, e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| fetch_err(url, e))?;

    if !resp.ok() {
        return Err(Error::Fetch(format!("{}: HTTP {}", url, resp.status())));
    }

    let text_value = JsFuture::from(resp.text().map_err(|e| fetch_err(url, e))?)
        .await
        .map_err(|e| fetch_err(url, e))?;
    text_value
        .as_string()
        .ok_or_else(|| Error::Fetch(format!("{}: 本文を文字列にできません", url)))
}

/// 指定言語のロケール辞書を取得する
pub async fn fetch_dictionary(lang: Lang) -> Result<Dictionary> {
    let url = locale_path(lang.as_str());
    let text = fetch_text(&url).await?;
    Dictionary::from_json(&text)
}

/// 作品カタログを取得する（ページにつき1回だけ呼ぶ）
pub async fn fetch_catalog() -> Result<Vec<Artwork>> {
    let text = fetch_text(CATALOG_PATH).await?;
    parse_catalog(&text)
}
