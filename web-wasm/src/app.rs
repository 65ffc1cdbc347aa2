//! メインアプリケーションコンポーネント

use crate::api::manifest::fetch_manifest;
use crate::components::{
    gallery_grid::GalleryGrid, header::Header, lightbox::Lightbox, search_bar::SearchBar,
    tag_bar::TagBar,
};
use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use media_gallery_common::{GalleryConfig, GalleryState};

/// 入力欄の生の値
///
/// 絞り込みはトリムした値で行うが、入力欄は打った文字のまま保つ。
#[derive(Clone, Copy)]
pub struct FilterInputs {
    pub search: RwSignal<String>,
    pub tag: RwSignal<String>,
}

impl FilterInputs {
    pub(crate) fn new() -> Self {
        Self {
            search: RwSignal::new(String::new()),
            tag: RwSignal::new(String::new()),
        }
    }

    /// タグチップのクリック（タグ入力欄にも反映）
    pub fn select_tag(self, state: RwSignal<GalleryState>, tag: &str) {
        self.tag.set(tag.to_string());
        state.update(|s| s.set_active_tag(tag));
    }

    pub fn clear(self, state: RwSignal<GalleryState>) {
        self.search.set(String::new());
        self.tag.set(String::new());
        state.update(GalleryState::clear_filters);
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = GalleryConfig::default();
    let manifest_url = config.manifest_url.clone();
    let state = RwSignal::new(GalleryState::new(config));
    let inputs = FilterInputs::new();

    // マニフェスト読み込み（起動時に1回だけ）
    spawn_local(async move {
        match fetch_manifest(&manifest_url).await {
            Ok(items) => {
                console::log!(format!("manifest: {} items", items.len()));
                state.update(|s| s.load_items(items));
            }
            Err(e) => {
                console::error!(format!("manifest: {}", e));
                state.update(GalleryState::fail_load);
            }
        }
    });

    view! {
        <main class="container">
            <Header />
            <SearchBar state=state inputs=inputs />
            <TagBar state=state inputs=inputs />
            <GalleryGrid state=state inputs=inputs />
        </main>
        <Lightbox state=state />
    }
}
