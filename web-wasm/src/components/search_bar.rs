//! 検索・タグ絞り込み・NSFW表示切替

use crate::app::FilterInputs;
use leptos::prelude::*;
use media_gallery_common::GalleryState;

#[component]
pub fn SearchBar(state: RwSignal<GalleryState>, inputs: FilterInputs) -> impl IntoView {
    view! {
        <div class="controls">
            <input
                type="search"
                id="search"
                placeholder="Search titles..."
                prop:value=move || inputs.search.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_search(&value));
                    inputs.search.set(value);
                }
            />

            <input
                type="text"
                id="tagFilter"
                placeholder="Filter by tag"
                prop:value=move || inputs.tag.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_active_tag(&value));
                    inputs.tag.set(value);
                }
            />

            <button
                id="clear"
                class="btn btn-secondary"
                on:click=move |_| inputs.clear(state)
            >
                "Clear"
            </button>

            <label class="nsfw-toggle">
                <input
                    type="checkbox"
                    id="nsfwToggle"
                    prop:checked=move || state.with(|s| s.reveal().global())
                    on:change=move |ev| {
                        let on = event_target_checked(&ev);
                        state.update(|s| s.set_global_reveal(on));
                    }
                />
                "Show NSFW"
            </label>
        </div>
    }
}
