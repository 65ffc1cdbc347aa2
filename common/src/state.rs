//! アプリケーション状態
//!
//! 項目リスト・絞り込み条件・表示リスト・センシティブ解除・ライトボックスを
//! 1つのオブジェクトにまとめ、明示的な更新メソッドだけで変更する。
//! DOMには触れないので、ブラウザなしでテストできる。

use crate::config::GalleryConfig;
use crate::filter::FilterState;
use crate::lightbox::LightboxState;
use crate::path::image_src;
use crate::reveal::RevealState;
use crate::tag_index::TagIndex;
use crate::types::Item;

/// 読み込み失敗時に表示する唯一のメッセージ
pub const LOAD_FAILED_MESSAGE: &str = "Missing or invalid images.json";
/// 絞り込み結果が空のときのメッセージ
pub const NO_MATCHES_MESSAGE: &str = "No images match the filters.";

/// マニフェストの読み込み状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    /// 終端状態（再試行しない）
    Failed(String),
}

/// タグバーの1チップ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub tag: String,
    pub count: usize,
    pub active: bool,
}

/// 「もっと見る」トグル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToggle {
    pub expanded: bool,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBarView {
    pub chips: Vec<TagChip>,
    pub toggle: Option<TagToggle>,
}

/// グリッドのカード1枚分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub title: String,
    pub tags: Vec<String>,
    pub sensitive: bool,
}

/// ライトボックスの表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub index: usize,
    pub src: String,
    pub caption: String,
    pub blurred: bool,
    pub show_warning: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    config: GalleryConfig,
    load: LoadState,
    items: Vec<Item>,
    tags: TagIndex,
    tags_expanded: bool,
    filter: FilterState,
    display: Vec<Item>,
    generation: u64,
    reveal: RevealState,
    lightbox: LightboxState,
}

impl GalleryState {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    // ============================================
    // 読み込み
    // ============================================

    /// 読み込み済みの項目をセット（並び替え済みであること）
    ///
    /// タグ集計を作り直し、センシティブ解除をリセットする。
    pub fn load_items(&mut self, items: Vec<Item>) {
        self.tags = TagIndex::from_items(&items);
        self.items = items;
        self.reveal.reset();
        self.lightbox = LightboxState::Closed;
        self.load = LoadState::Ready;
        self.recompute();
    }

    /// 読み込み失敗。以降は空のまま
    pub fn fail_load(&mut self) {
        self.items.clear();
        self.display.clear();
        self.tags = TagIndex::default();
        self.lightbox = LightboxState::Closed;
        self.load = LoadState::Failed(LOAD_FAILED_MESSAGE.to_string());
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// グリッドに代わって表示するメッセージ
    pub fn empty_message(&self) -> Option<&str> {
        match &self.load {
            LoadState::Loading => None,
            LoadState::Failed(message) => Some(message.as_str()),
            LoadState::Ready if self.display.is_empty() => Some(NO_MATCHES_MESSAGE),
            LoadState::Ready => None,
        }
    }

    // ============================================
    // 絞り込み
    // ============================================

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn display_list(&self) -> &[Item] {
        &self.display
    }

    /// 表示リストを作り直した回数（描画のキーに使う）
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_search(&mut self, text: &str) {
        self.filter.set_search(text);
        self.recompute();
    }

    /// タグ入力欄・タグチップからのアクティブタグ設定
    pub fn set_active_tag(&mut self, tag: &str) {
        self.filter.set_active_tag(tag);
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.display = self.filter.apply(&self.items);
        self.generation += 1;
        if let Some(index) = self.lightbox.index() {
            if index >= self.display.len() {
                self.lightbox = LightboxState::Closed;
            }
        }
    }

    // ============================================
    // タグバー
    // ============================================

    pub fn tag_index(&self) -> &TagIndex {
        &self.tags
    }

    pub fn tags_expanded(&self) -> bool {
        self.tags_expanded
    }

    /// 表示モードだけを切り替える（絞り込み条件には触れない）
    pub fn toggle_tags_expanded(&mut self) {
        self.tags_expanded = !self.tags_expanded;
    }

    pub fn tag_bar(&self) -> TagBarView {
        let top_n = self.config.top_tag_count;
        let active = self.filter.active_tag();
        let chips = self
            .tags
            .visible(self.tags_expanded, top_n)
            .into_iter()
            .map(|entry| TagChip {
                active: entry.tag == active,
                tag: entry.tag,
                count: entry.count,
            })
            .collect();
        let toggle = self.tags.hidden_count(top_n).map(|hidden| TagToggle {
            expanded: self.tags_expanded,
            label: if self.tags_expanded {
                "Show less".to_string()
            } else {
                format!("Show more ({})", hidden)
            },
        });
        TagBarView { chips, toggle }
    }

    // ============================================
    // センシティブ解除
    // ============================================

    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    pub fn reveal_index(&mut self, index: usize) {
        self.reveal.reveal_index(index);
    }

    pub fn set_global_reveal(&mut self, on: bool) {
        self.reveal.set_global(on);
    }

    /// ライトボックスの「それでも見る」
    pub fn reveal_current(&mut self) {
        if let Some(index) = self.lightbox.index() {
            self.reveal.reveal_index(index);
        }
    }

    pub fn is_blurred(&self, index: usize) -> bool {
        self.display
            .get(index)
            .is_some_and(|item| self.reveal.is_blurred(item, index, &self.config.sensitive_tag))
    }

    // ============================================
    // グリッド
    // ============================================

    pub fn cards(&self) -> Vec<CardView> {
        self.display
            .iter()
            .enumerate()
            .map(|(index, item)| CardView {
                index,
                src: image_src(&self.config.image_base, &item.filename),
                alt: item.search_title().to_string(),
                title: item.display_title().to_string(),
                tags: item.tags.clone(),
                sensitive: item.has_tag(&self.config.sensitive_tag),
            })
            .collect()
    }

    // ============================================
    // ライトボックス
    // ============================================

    pub fn lightbox(&self) -> LightboxState {
        self.lightbox
    }

    pub fn open(&mut self, index: usize) {
        self.lightbox = self.lightbox.open(index, self.display.len());
    }

    pub fn next(&mut self) {
        self.lightbox = self.lightbox.next(self.display.len());
    }

    pub fn prev(&mut self) {
        self.lightbox = self.lightbox.prev(self.display.len());
    }

    pub fn close(&mut self) {
        self.lightbox = self.lightbox.close();
    }

    pub fn lightbox_view(&self) -> Option<LightboxView> {
        let index = self.lightbox.index()?;
        let item = self.display.get(index)?;
        let blurred = self.reveal.is_blurred(item, index, &self.config.sensitive_tag);
        Some(LightboxView {
            index,
            src: image_src(&self.config.image_base, &item.filename),
            caption: item.display_title().to_string(),
            blurred,
            show_warning: blurred,
        })
    }
}
