//! 描画モデルの導出
//!
//! (カタログ, フィルタ, 言語) から、UIに依存しない描画モデルを作る。
//! 代替テキストとキャプションの組み立てはすべてここで済ませ、
//! コンポーネント側は出来上がった文字列を流し込むだけにする

use crate::catalog::{matches_filter, Artwork};
use crate::config::{FEATURED_CAP, FEATURED_DELAY_STEP_MS, GALLERY_DELAY_STEP_MS};
use crate::locale::Lang;

/// ギャラリー・注目グリッドの1枚分
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: u32,
    pub src: String,
    pub alt: String,
    pub caption: String,
    /// フェードイン開始の遅延（並び順で階段状にずらす）
    pub delay_ms: u32,
}

/// ライトボックスの表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

/// 代替テキスト: タイトル（無ければ "Artwork"）と制作年
pub fn compose_alt(art: &Artwork, lang: Lang) -> String {
    let title = match art.title.get(lang) {
        Some(t) if !t.is_empty() => t,
        _ => "Artwork",
    };
    match &art.year {
        Some(year) => format!("{} — {}", title, year),
        None => title.to_string(),
    }
}

/// キャプション: タイトル・制作年・画材を「 · 」でつなぐ
///
/// 空の要素は落とす
pub fn compose_caption(art: &Artwork, lang: Lang) -> String {
    let mut bits: Vec<String> = Vec::new();
    if let Some(title) = art.title.get(lang) {
        if !title.is_empty() {
            bits.push(title.to_string());
        }
    }
    if let Some(year) = &art.year {
        bits.push(year.to_string());
    }
    if let Some(medium) = art.medium.get(lang) {
        if !medium.is_empty() {
            bits.push(medium.to_string());
        }
    }
    bits.join(" · ")
}

fn card(art: &Artwork, lang: Lang, index: usize, delay_step: u32) -> Card {
    Card {
        id: art.id,
        src: art.filename.clone(),
        alt: compose_alt(art, lang),
        caption: compose_caption(art, lang),
        delay_ms: index as u32 * delay_step,
    }
}

/// 注目作品グリッドの描画モデル（カタログ順、上限あり）
pub fn featured_cards(artworks: &[Artwork], lang: Lang) -> Vec<Card> {
    artworks
        .iter()
        .filter(|a| a.featured)
        .take(FEATURED_CAP)
        .enumerate()
        .map(|(i, a)| card(a, lang, i, FEATURED_DELAY_STEP_MS))
        .collect()
}

/// ギャラリーの描画モデル（フィルタ適用後、カタログ順）
pub fn gallery_cards(artworks: &[Artwork], filter: &str, lang: Lang) -> Vec<Card> {
    artworks
        .iter()
        .filter(|a| matches_filter(a, filter))
        .enumerate()
        .map(|(i, a)| card(a, lang, i, GALLERY_DELAY_STEP_MS))
        .collect()
}

/// ライトボックスの描画モデル
pub fn slide(art: &Artwork, lang: Lang) -> Slide {
    Slide {
        src: art.filename.clone(),
        alt: compose_alt(art, lang),
        caption: compose_caption(art, lang),
    }
}

/// フィルタチップ用のカテゴリ一覧（初出順、重複なし）
pub fn categories(artworks: &[Artwork]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for art in artworks {
        if let Some(cat) = &art.category {
            if !seen.iter().any(|c| c == cat) {
                seen.push(cat.clone());
            }
        }
    }
    seen
}
