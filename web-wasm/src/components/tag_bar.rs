//! タグバーコンポーネント
//!
//! 上位タグ（頻度順）と全タグ（アルファベット順）を切り替えて表示する。
//! 切り替えは表示だけで、絞り込み条件には触れない。

use crate::app::FilterInputs;
use leptos::prelude::*;
use media_gallery_common::{GalleryState, TagChip};

#[component]
pub fn TagBar(state: RwSignal<GalleryState>, inputs: FilterInputs) -> impl IntoView {
    let bar = Memo::new(move |_| state.with(GalleryState::tag_bar));

    view! {
        <div id="tagsBar" class="tags-bar">
            {move || {
                let bar = bar.get();
                let chips = bar
                    .chips
                    .into_iter()
                    .map(|chip| view! { <TagBarChip chip=chip state=state inputs=inputs /> })
                    .collect_view();
                let toggle = bar.toggle.map(|toggle| {
                    view! {
                        <button
                            id="showMoreTags"
                            class="tags-showmore"
                            aria-expanded=toggle.expanded.to_string()
                            on:click=move |_| state.update(GalleryState::toggle_tags_expanded)
                        >
                            {toggle.label}
                        </button>
                    }
                });
                view! { {chips} {toggle} }
            }}
        </div>
    }
}

#[component]
fn TagBarChip(chip: TagChip, state: RwSignal<GalleryState>, inputs: FilterInputs) -> impl IntoView {
    let tag = chip.tag.clone();
    let data_tag = chip.tag.clone();
    view! {
        <div
            class="tag"
            class:active=chip.active
            data-tag=data_tag
            on:click=move |_| inputs.select_tag(state, &tag)
        >
            {chip.tag}
            " "
            <span class="tag-count">{format!("({})", chip.count)}</span>
        </div>
    }
}
