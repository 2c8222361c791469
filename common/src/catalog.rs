//! 作品カタログの型定義
//!
//! data/artworks.json の1レコードと読み込み。カタログはページ読み込み後
//! 不変で、表示順は JSON の並びをそのまま使う

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::FILTER_ALL;
use crate::error::{Error, Result};
use crate::locale::Lang;

/// 多言語テキスト（言語コード → 表示文字列）
///
/// 指定言語が無いときは en に落とす
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalizedText(HashMap<String, String>);

impl LocalizedText {
    pub fn get(&self, lang: Lang) -> Option<&str> {
        self.0
            .get(lang.as_str())
            .or_else(|| self.0.get("en"))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 制作年（JSONの文字列・数値どちらも受ける）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => write!(f, "{}", s),
        }
    }
}

/// 作品レコード
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artwork {
    pub id: u32,
    pub filename: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub year: Option<Year>,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub medium: LocalizedText,
}

/// カタログJSONをパースする
///
/// 配列として読めなければ全体を失敗にする（部分読み込みはしない）
pub fn parse_catalog(text: &str) -> Result<Vec<Artwork>> {
    serde_json::from_str(text)
        .map_err(|e| Error::Parse(format!("作品カタログのパースエラー: {}", e)))
}

/// フィルタ判定。"all" はすべて通す
pub fn matches_filter(art: &Artwork, filter: &str) -> bool {
    filter == FILTER_ALL || art.category.as_deref() == Some(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Artwork> {
        parse_catalog(
            r#"[
                {
                    "id": 1,
                    "filename": "img/one.jpg",
                    "featured": true,
                    "category": "oil",
                    "year": 2021,
                    "title": { "en": "Morning", "pl": "Poranek" },
                    "medium": { "en": "Oil on canvas" }
                },
                {
                    "id": 2,
                    "filename": "img/two.jpg",
                    "category": "ink",
                    "year": "2019–2020",
                    "title": { "en": "Dusk" }
                },
                {
                    "id": 3,
                    "filename": "img/three.jpg",
                    "category": "oil"
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_catalog_fields() {
        let arts = sample();
        assert_eq!(arts.len(), 3);
        assert_eq!(arts[0].id, 1);
        assert!(arts[0].featured);
        assert_eq!(arts[0].category.as_deref(), Some("oil"));
        assert_eq!(arts[0].year, Some(Year::Number(2021)));
        assert!(!arts[1].featured);
        assert_eq!(arts[1].year, Some(Year::Text("2019–2020".into())));
        assert_eq!(arts[2].year, None);
        assert!(arts[2].title.is_empty());
    }

    #[test]
    fn test_parse_catalog_rejects_garbage() {
        assert!(parse_catalog("{}").is_err());
        assert!(parse_catalog("not json").is_err());
        // 1レコードでも型が合わなければ全体が失敗
        assert!(parse_catalog(r#"[{"id": "abc", "filename": "x.jpg"}]"#).is_err());
    }

    #[test]
    fn test_localized_text_lang_and_fallback() {
        let arts = sample();
        assert_eq!(arts[0].title.get(Lang::Pl), Some("Poranek"));
        // pl が無ければ en に落ちる
        assert_eq!(arts[1].title.get(Lang::Pl), Some("Dusk"));
        assert_eq!(arts[2].title.get(Lang::Ru), None);
    }

    #[test]
    fn test_year_display() {
        assert_eq!(Year::Number(2021).to_string(), "2021");
        assert_eq!(Year::Text("c. 2019".into()).to_string(), "c. 2019");
    }

    #[test]
    fn test_matches_filter() {
        let arts = sample();
        assert!(matches_filter(&arts[0], "all"));
        assert!(matches_filter(&arts[0], "oil"));
        assert!(!matches_filter(&arts[0], "ink"));
        // カテゴリ未設定は "all" のみ通る
        let uncategorized = Artwork {
            id: 9,
            filename: "x.jpg".into(),
            ..Artwork::default()
        };
        assert!(matches_filter(&uncategorized, "all"));
        assert!(!matches_filter(&uncategorized, "oil"));
    }
}
