//! ギャラリー状態のシナリオテスト
//!
//! 読み込み → 絞り込み → センシティブ解除 → ライトボックス操作を
//! DOMなしで通しで検証

use media_gallery_common::{
    load_manifest, GalleryConfig, GalleryState, LightboxState, LoadState,
};

const MANIFEST: &str = r#"[
    {"filename": "dog.jpg", "title": "Dog", "tags": ["pet"], "dateAdded": "2024-01-01"},
    {"filename": "cat.jpg", "title": "Caterpillar", "tags": ["bug"], "dateAdded": "2024-06-01"},
    {"filename": "night out.jpg", "title": "Night", "tags": ["nsfw", "pet"], "dateAdded": "2023-12-31"},
    {"filename": "untitled.jpg", "tags": ["bug", "nsfw"], "dateAdded": "2022-05-05"}
]"#;

fn loaded() -> GalleryState {
    let mut state = GalleryState::new(GalleryConfig::default());
    state.load_items(load_manifest(MANIFEST).expect("マニフェストのパース失敗"));
    state
}

fn titles(state: &GalleryState) -> Vec<String> {
    state.cards().into_iter().map(|c| c.title).collect()
}

/// 読み込み順は追加日の降順
#[test]
fn test_load_sorted_newest_first() {
    let state = loaded();
    assert_eq!(state.load_state(), &LoadState::Ready);
    assert_eq!(state.items().len(), 4);
    assert_eq!(state.tag_index().count("pet"), 2);
    assert_eq!(titles(&state), vec!["Caterpillar", "Dog", "Night", "untitled.jpg"]);
}

/// 検索は大文字小文字を無視した部分一致
#[test]
fn test_search_scenario() {
    let mut state = loaded();
    state.set_search("cat");
    assert_eq!(titles(&state), vec!["Caterpillar"]);
}

/// タイトルなしの項目はファイル名で検索されない
#[test]
fn test_search_does_not_use_filename() {
    let mut state = loaded();
    state.set_search("untitled");
    assert!(state.display_list().is_empty());
    assert!(state.empty_message().is_some());
}

/// タグチップとクリアボタン
#[test]
fn test_tag_filter_and_clear() {
    let mut state = loaded();
    state.set_active_tag("pet");
    assert_eq!(titles(&state), vec!["Dog", "Night"]);

    let bar = state.tag_bar();
    let active: Vec<_> = bar.chips.iter().filter(|c| c.active).map(|c| c.tag.as_str()).collect();
    assert_eq!(active, vec!["pet"]);

    state.clear_filters();
    assert_eq!(state.display_list().len(), 4);
    assert!(state.tag_bar().chips.iter().all(|c| !c.active));
}

/// アクティブタグは表示モードに関係なく1つだけ強調される
#[test]
fn test_active_tag_marked_in_both_modes() {
    let mut state = loaded();
    state.set_active_tag("bug");
    for _ in 0..2 {
        let bar = state.tag_bar();
        assert_eq!(bar.chips.iter().filter(|c| c.active).count(), 1);
        state.toggle_tags_expanded();
    }
}

/// センシティブ項目をライトボックスで開き「それでも見る」
#[test]
fn test_lightbox_reveal_scenario() {
    let mut state = loaded();
    state.open(2);
    let view = state.lightbox_view().expect("ライトボックスが開いていない");
    assert_eq!(view.caption, "Night");
    assert!(view.blurred);
    assert!(view.show_warning);

    state.reveal_current();
    let view = state.lightbox_view().unwrap();
    assert!(!view.blurred);
    assert!(!view.show_warning);

    // 他の項目には影響しない
    assert!(state.is_blurred(3));
    state.next();
    assert!(state.lightbox_view().unwrap().show_warning);
}

/// 非センシティブ項目は常に警告なし
#[test]
fn test_lightbox_non_sensitive() {
    let mut state = loaded();
    state.open(0);
    let view = state.lightbox_view().unwrap();
    assert!(!view.blurred);
    assert!(!view.show_warning);
    assert_eq!(view.src, "./images/cat.jpg");
}

/// 前後移動は循環する
#[test]
fn test_lightbox_wraparound() {
    let mut state = loaded();
    state.open(0);
    state.prev();
    assert_eq!(state.lightbox(), LightboxState::Open(3));
    state.next();
    assert_eq!(state.lightbox(), LightboxState::Open(0));
    state.close();
    assert_eq!(state.lightbox(), LightboxState::Closed);
    assert_eq!(state.lightbox_view(), None);
}

/// 範囲外のopenは無視
#[test]
fn test_open_out_of_range_ignored() {
    let mut state = loaded();
    state.open(4);
    assert_eq!(state.lightbox(), LightboxState::Closed);
    state.open(1);
    state.open(99);
    assert_eq!(state.lightbox(), LightboxState::Open(1));
}

/// 空の表示リストでの前後移動は何もしない
#[test]
fn test_navigation_on_empty_display() {
    let mut state = loaded();
    state.set_search("nothing matches this");
    state.next();
    state.prev();
    assert_eq!(state.lightbox(), LightboxState::Closed);
}

/// 解除は位置で記録されるため、絞り込み後は別の項目に適用される
#[test]
fn test_reveal_is_keyed_by_position() {
    let mut state = loaded();
    state.reveal_index(2);
    assert!(!state.is_blurred(2));

    state.set_active_tag("nsfw");
    // 表示リスト: [Night, untitled.jpg]。位置2は存在せず、どちらもぼかされる
    assert!(state.is_blurred(0));
    assert!(state.is_blurred(1));

    state.reveal_index(1);
    state.clear_filters();
    // 位置1（Dog）は非センシティブ、位置2（Night）は以前の解除が残る
    assert!(!state.is_blurred(2));
    assert!(state.is_blurred(3));
}

/// 全体トグルは個別の解除を消さない
#[test]
fn test_global_toggle_round_trip() {
    let mut state = loaded();
    state.reveal_index(3);
    state.set_global_reveal(true);
    assert!(!state.is_blurred(2));
    state.set_global_reveal(false);
    assert!(state.is_blurred(2));
    assert!(!state.is_blurred(3));
}

/// カードの画像パスはエンコードされる
#[test]
fn test_card_src_encoded() {
    let cards = loaded().cards();
    let night = &cards[2];
    assert_eq!(night.src, "./images/night%20out.jpg");
    assert!(night.sensitive);
    assert_eq!(night.alt, "Night");

    let untitled = &cards[3];
    assert_eq!(untitled.alt, "");
    assert_eq!(untitled.title, "untitled.jpg");
}

/// HTMLとして危険な文字を含むタグも比較はそのままの値で行う
#[test]
fn test_markup_tag_matches_raw_value() {
    let mut state = GalleryState::new(GalleryConfig::default());
    state.load_items(load_manifest(
        r#"[{"filename": "x.jpg", "title": "<b>bold</b>", "tags": ["<script>"]}]"#,
    ).unwrap());
    state.set_active_tag("<script>");
    assert_eq!(state.display_list().len(), 1);
    assert_eq!(state.cards()[0].title, "<b>bold</b>");
    assert!(state.tag_bar().chips[0].active);
}
