//! 言語とロケール辞書
//!
//! 対応言語の解決と、ドット記法キーによる辞書引き。
//! 辞書は locales/<lang>.json をそのままネストした JSON として保持する

use serde_json::Value;

use crate::error::{Error, Result};

/// 対応言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    En,
    Pl,
    Ru,
}

impl Lang {
    /// 表示順の全言語
    pub const ALL: [Lang; 3] = [Lang::En, Lang::Pl, Lang::Ru];

    /// 言語コード（ロケールファイル名・辞書のキーと一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Pl => "pl",
            Lang::Ru => "ru",
        }
    }

    /// 切替ボタンの表記
    pub fn label(&self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Pl => "PL",
            Lang::Ru => "RU",
        }
    }

    /// 言語コードから変換。対応外は None
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "pl" => Some(Lang::Pl),
            "ru" => Some(Lang::Ru),
            _ => None,
        }
    }

    /// 起動時の言語決定
    ///
    /// 優先順位:
    /// 1. 保存済みの言語設定
    /// 2. ブラウザ言語の先頭2文字
    /// 3. デフォルト（en）
    pub fn resolve(saved: Option<&str>, browser: Option<&str>) -> Lang {
        if let Some(lang) = saved.and_then(Lang::from_code) {
            return lang;
        }
        if let Some(lang) = browser
            .and_then(|code| code.get(..2))
            .and_then(Lang::from_code)
        {
            return lang;
        }
        Lang::default()
    }
}

/// 1言語分のロケール辞書
///
/// 読み込み後は不変。キーが無いときは呼び出し側のフォールバック文字列に
/// 落とすだけで、エラーにはしない
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    root: Value,
}

impl Dictionary {
    /// JSONテキストから辞書を作る
    pub fn from_json(text: &str) -> Result<Dictionary> {
        let root: Value = serde_json::from_str(text)?;
        if !root.is_object() {
            return Err(Error::Parse("ロケール辞書がオブジェクトではありません".into()));
        }
        Ok(Dictionary { root })
    }

    /// ドット記法キーで文字列を引く
    ///
    /// 全セグメントが解決でき、終端が文字列のときだけ Some
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut node = &self.root;
        for part in key.split('.') {
            node = node.as_object()?.get(part)?;
        }
        node.as_str()
    }

    /// ドット記法キーで文字列を引き、無ければフォールバックを返す
    pub fn lookup<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.get(key).unwrap_or(fallback)
    }
}
