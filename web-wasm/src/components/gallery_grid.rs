//! ギャラリーグリッドコンポーネント
//!
//! 表示リストの位置ごとにカードを1枚描く。表示リストを作り直すたびに
//! キー（世代, 位置）が変わるので、カードは丸ごと作り直される。
//! ぼかしのクラスはセンシティブ解除の状態に追従し、再描画はしない。
//! 項目由来の文字列はテキストノード/属性として渡すのでエスケープされる。

use crate::app::FilterInputs;
use leptos::prelude::*;
use media_gallery_common::{CardView, GalleryState};

#[component]
pub fn GalleryGrid(state: RwSignal<GalleryState>, inputs: FilterInputs) -> impl IntoView {
    let message = Memo::new(move |_| state.with(|s| s.empty_message().map(str::to_string)));
    let cards = Memo::new(move |_| {
        state.with(|s| {
            let generation = s.generation();
            s.cards()
                .into_iter()
                .map(|card| (generation, card))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div id="gallery" class="gallery">
            {move || match message.get() {
                Some(text) => view! { <div class="empty">{text}</div> }.into_any(),
                None => view! {
                    <For
                        each=move || cards.get()
                        key=|(generation, card)| (*generation, card.index)
                        children=move |(_, card)| {
                            view! { <GalleryCard card=card state=state inputs=inputs /> }
                        }
                    />
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn GalleryCard(card: CardView, state: RwSignal<GalleryState>, inputs: FilterInputs) -> impl IntoView {
    let index = card.index;
    let sensitive = card.sensitive;
    let blurred = move || state.with(|s| s.is_blurred(index));

    let unblur_button = sensitive.then(|| {
        view! {
            <button
                class="unblur-btn"
                data-index=index.to_string()
                on:click=move |ev| {
                    ev.stop_propagation();
                    state.update(|s| s.reveal_index(index));
                }
            >
                "View NSFW"
            </button>
        }
    });

    let tags = card
        .tags
        .into_iter()
        .map(|tag| {
            let label = tag.clone();
            let data_tag = tag.clone();
            view! {
                <span
                    class="tag"
                    data-tag=data_tag
                    on:click=move |ev| {
                        ev.stop_propagation();
                        inputs.select_tag(state, &tag);
                    }
                >
                    {label}
                </span>
            }
        })
        .collect_view();

    view! {
        <article
            class="card"
            class:has-nsfw=sensitive
            class:unblurred=move || sensitive && !blurred()
        >
            {unblur_button}
            <img
                class="thumb"
                class:nsfw-blur=blurred
                data-index=index.to_string()
                src=card.src
                alt=card.alt
                on:click=move |_| state.update(|s| s.open(index))
            />
            <div class="meta">
                <div class="title">{card.title}</div>
                <div class="tags">{tags}</div>
            </div>
        </article>
    }
}
