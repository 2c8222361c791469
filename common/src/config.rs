//! 設定定数
//!
//! 保存キー・静的リソースのパス・表示まわりの固定値

/// 言語設定を保存する localStorage のキー
pub const LANG_STORAGE_KEY: &str = "atelier_lang";

/// 連絡先メールアドレス
// TODO: 公開時に実際の連絡先へ差し替える
pub const CONTACT_EMAIL: &str = "studio@example.com";

/// 「すべて」を意味するフィルタ値
pub const FILTER_ALL: &str = "all";

/// 注目作品グリッドの最大表示数
pub const FEATURED_CAP: usize = 8;

/// フェードイン発火のしきい値（要素の可視割合）
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// 注目カードのフェードイン遅延間隔（ミリ秒）
pub const FEATURED_DELAY_STEP_MS: u32 = 60;

/// ギャラリー図版のフェードイン遅延間隔（ミリ秒）
pub const GALLERY_DELAY_STEP_MS: u32 = 30;

/// 作品カタログのパス
pub const CATALOG_PATH: &str = "data/artworks.json";

/// 言語コードからロケール辞書のパスを組み立てる
pub fn locale_path(code: &str) -> String {
    format!("locales/{}.json", code)
}
