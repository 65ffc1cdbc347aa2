//! ギャラリー設定
//!
//! マニフェストの場所、画像パス、センシティブ判定タグなど。
//! 永続化はしない（リロードで既定値に戻る）。

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    /// マニフェスト（images.json）のURL
    pub manifest_url: String,
    /// 画像ファイルの配置先（末尾スラッシュ付き）
    pub image_base: String,
    /// センシティブ（NSFW）を示すタグ
    pub sensitive_tag: String,
    /// タグバーに表示する上位タグ数
    pub top_tag_count: usize,
    /// ライトボックス表示後にフォーカスを移すまでの遅延
    pub focus_delay_ms: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            manifest_url: "./images.json".into(),
            image_base: "./images/".into(),
            sensitive_tag: "nsfw".into(),
            top_tag_count: 7,
            focus_delay_ms: 10,
        }
    }
}
