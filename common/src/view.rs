//! ビュー状態
//!
//! ページ1枚分の可変状態を1か所で持つ。フィルタ適用後のID列と
//! ライトボックスのカーソルはここ以外では変更しない

use crate::catalog::{matches_filter, Artwork};
use crate::config::FILTER_ALL;
use crate::locale::{Dictionary, Lang};

/// ページの表示状態
///
/// 不変条件: `lightbox` が Some のとき、その値は必ず `filtered_ids` の
/// 有効な添字である
#[derive(Debug, Clone)]
pub struct ViewState {
    pub lang: Lang,
    pub dict: Dictionary,
    pub artworks: Vec<Artwork>,
    filter: String,
    filtered_ids: Vec<u32>,
    lightbox: Option<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> ViewState {
        ViewState {
            lang: Lang::default(),
            dict: Dictionary::default(),
            artworks: Vec::new(),
            filter: FILTER_ALL.to_string(),
            filtered_ids: Vec::new(),
            lightbox: None,
        }
    }

    /// 言語と辞書をまとめて差し替える
    ///
    /// ID列は言語に依らないので、開いているライトボックスはそのまま
    pub fn set_language(&mut self, lang: Lang, dict: Dictionary) {
        self.lang = lang;
        self.dict = dict;
    }

    /// カタログを設定する（ページ読み込み時に1回だけ呼ばれる想定）
    pub fn set_catalog(&mut self, artworks: Vec<Artwork>) {
        self.artworks = artworks;
        self.refresh_filtered();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// 現在表示中の作品ID列（フィルタ適用後、カタログ順）
    pub fn filtered_ids(&self) -> &[u32] {
        &self.filtered_ids
    }

    pub fn lightbox(&self) -> Option<usize> {
        self.lightbox
    }

    /// フィルタを切り替え、ID列を作り直す
    ///
    /// 開いているライトボックスは同じ作品IDの新しい位置に乗せ替え、
    /// その作品が表示から消えた場合だけ閉じる
    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
        self.refresh_filtered();
    }

    fn refresh_filtered(&mut self) {
        let open_id = self.current_id();
        let ids: Vec<u32> = self
            .artworks
            .iter()
            .filter(|a| matches_filter(a, &self.filter))
            .map(|a| a.id)
            .collect();
        self.filtered_ids = ids;
        self.lightbox = open_id.and_then(|id| self.position_of(id));
    }

    fn position_of(&self, id: u32) -> Option<usize> {
        self.filtered_ids.iter().position(|&x| x == id)
    }

    pub fn artwork_by_id(&self, id: u32) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == id)
    }

    /// 指定IDでライトボックスを開く
    ///
    /// IDが現在のID列に無ければ何もしない。開けたら true
    pub fn open_lightbox(&mut self, id: u32) -> bool {
        match self.position_of(id) {
            Some(idx) => {
                self.lightbox = Some(idx);
                true
            }
            None => false,
        }
    }

    /// カーソルを delta だけ進める。両方向に循環する
    ///
    /// 閉じているときは何もしない
    pub fn step_lightbox(&mut self, delta: i32) {
        let Some(idx) = self.lightbox else { return };
        let n = self.filtered_ids.len() as i32;
        if n == 0 {
            return;
        }
        let next = ((idx as i32 + delta) % n + n) % n;
        self.lightbox = Some(next as usize);
    }

    /// ライトボックスを閉じる。閉じていても害はない
    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    /// カーソル位置の作品ID
    pub fn current_id(&self) -> Option<u32> {
        self.lightbox.and_then(|i| self.filtered_ids.get(i).copied())
    }

    /// カーソル位置の作品レコード
    pub fn current_artwork(&self) -> Option<&Artwork> {
        self.current_id().and_then(|id| self.artwork_by_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;

    fn state() -> ViewState {
        let mut s = ViewState::new();
        s.set_catalog(
            parse_catalog(
                r#"[
                    {"id": 1, "filename": "a.jpg", "featured": true, "category": "oil"},
                    {"id": 2, "filename": "b.jpg", "category": "ink"},
                    {"id": 3, "filename": "c.jpg", "category": "oil"}
                ]"#,
            )
            .unwrap(),
        );
        s
    }

    #[test]
    fn test_default_filter_passes_everything() {
        let s = state();
        assert_eq!(s.filter(), "all");
        assert_eq!(s.filtered_ids(), &[1, 2, 3]);
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let mut s = state();
        s.set_filter("oil");
        assert_eq!(s.filtered_ids(), &[1, 3]);
        s.set_filter("ink");
        assert_eq!(s.filtered_ids(), &[2]);
        s.set_filter("all");
        assert_eq!(s.filtered_ids(), &[1, 2, 3]);
    }

    #[test]
    fn test_open_lightbox_by_id() {
        let mut s = state();
        assert!(s.open_lightbox(3));
        assert_eq!(s.lightbox(), Some(2));
        assert_eq!(s.current_id(), Some(3));
    }

    #[test]
    fn test_open_lightbox_unknown_id_is_noop() {
        let mut s = state();
        assert!(s.open_lightbox(2));
        assert!(!s.open_lightbox(99));
        // 元の状態のまま
        assert_eq!(s.current_id(), Some(2));
    }

    #[test]
    fn test_step_wraps_both_directions() {
        let mut s = state();
        s.open_lightbox(3);
        s.step_lightbox(1);
        assert_eq!(s.lightbox(), Some(0));
        s.open_lightbox(1);
        s.step_lightbox(-1);
        assert_eq!(s.lightbox(), Some(2));
    }

    #[test]
    fn test_step_large_delta() {
        let mut s = state();
        s.open_lightbox(1);
        s.step_lightbox(7);
        assert_eq!(s.lightbox(), Some(1));
        s.step_lightbox(-8);
        assert_eq!(s.lightbox(), Some(2));
    }

    #[test]
    fn test_step_while_closed_is_noop() {
        let mut s = state();
        s.step_lightbox(1);
        assert_eq!(s.lightbox(), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut s = state();
        s.open_lightbox(1);
        s.close_lightbox();
        s.close_lightbox();
        assert_eq!(s.lightbox(), None);
        assert_eq!(s.current_artwork().map(|a| a.id), None);
    }

    #[test]
    fn test_reopen_by_other_id_repositions() {
        let mut s = state();
        s.open_lightbox(3);
        s.close_lightbox();
        assert!(s.open_lightbox(2));
        assert_eq!(s.lightbox(), Some(1));
        assert_eq!(s.current_id(), Some(2));
    }

    #[test]
    fn test_filter_change_revalidates_open_lightbox() {
        let mut s = state();
        s.open_lightbox(3);
        assert_eq!(s.lightbox(), Some(2));
        // 同じ作品が新しいID列に残っていれば位置を乗せ替える
        s.set_filter("oil");
        assert_eq!(s.lightbox(), Some(1));
        assert_eq!(s.current_id(), Some(3));
        // 消えた場合は閉じる
        s.set_filter("ink");
        assert_eq!(s.lightbox(), None);
    }

    #[test]
    fn test_language_change_keeps_lightbox() {
        let mut s = state();
        s.open_lightbox(2);
        s.set_language(Lang::Ru, Dictionary::default());
        assert_eq!(s.current_id(), Some(2));
        assert_eq!(s.lang, Lang::Ru);
    }
}
