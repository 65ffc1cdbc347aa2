//! ライトボックスコンポーネント
//!
//! 状態遷移は GalleryState 側。ここでは開閉に合わせてモーダルセッションを
//! 張り替え、キーボードと背景クリックを状態遷移に変換する。

use crate::dom::{session, surface::is_event_on};
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use media_gallery_common::{GalleryState, LightboxKey, LightboxState};
use web_sys::Element;

#[component]
pub fn Lightbox(state: RwSignal<GalleryState>) -> impl IntoView {
    let root = NodeRef::<Div>::new();
    let lightbox = Memo::new(move |_| state.with(GalleryState::lightbox));
    let content = Memo::new(move |_| state.with(GalleryState::lightbox_view));
    let focus_delay_ms = state.with_untracked(|s| s.config().focus_delay_ms);

    // 開くたび（前後移動を含む）にセッションを取り直す
    Effect::new(move |_| match lightbox.get() {
        LightboxState::Open(_) => {
            if let Some(el) = root.get_untracked() {
                let el: Element = el.into();
                session::begin(el, focus_delay_ms);
            }
        }
        LightboxState::Closed => session::end(),
    });

    let _ = window_event_listener(ev::keydown, move |e| {
        if !state.with_untracked(|s| s.lightbox().is_open()) {
            return;
        }
        match LightboxKey::from_key(&e.key()) {
            Some(LightboxKey::Escape) => state.update(GalleryState::close),
            Some(LightboxKey::ArrowLeft) => state.update(GalleryState::prev),
            Some(LightboxKey::ArrowRight) => state.update(GalleryState::next),
            _ => {}
        }
    });

    let src = move || content.with(|c| c.as_ref().map(|c| c.src.clone()).unwrap_or_default());
    let caption =
        move || content.with(|c| c.as_ref().map(|c| c.caption.clone()).unwrap_or_default());
    let blurred = move || content.with(|c| c.as_ref().is_some_and(|c| c.blurred));
    let show_warning = move || content.with(|c| c.as_ref().is_some_and(|c| c.show_warning));

    view! {
        <div
            id="lightbox"
            class="lightbox"
            class:hidden=move || !lightbox.get().is_open()
            role="dialog"
            aria-modal="true"
            aria-hidden="true"
            node_ref=root
            on:click=move |e| {
                let backdrop = root
                    .get_untracked()
                    .is_some_and(|el| is_event_on(&e, &el));
                if backdrop {
                    state.update(GalleryState::close);
                }
            }
        >
            <button
                class="lightbox-close"
                aria-label="Close"
                on:click=move |_| state.update(GalleryState::close)
            >
                "×"
            </button>
            <button
                class="lightbox-prev"
                aria-label="Previous"
                on:click=move |e| {
                    e.stop_propagation();
                    state.update(GalleryState::prev);
                }
            >
                "‹"
            </button>
            <figure class="lightbox-content">
                <img
                    id="lightbox-img"
                    class="lightbox-img"
                    class:nsfw-blur=blurred
                    tabindex="-1"
                    src=src
                    alt=caption
                />
                <figcaption id="lightbox-caption">{caption}</figcaption>
                <div
                    id="nsfw-warning"
                    class="nsfw-warning"
                    style:display=move || if show_warning() { "block" } else { "none" }
                >
                    <p>"This image is marked NSFW."</p>
                    <button
                        id="viewNsfwBtn"
                        class="btn btn-primary"
                        on:click=move |_| state.update(GalleryState::reveal_current)
                    >
                        "View anyway"
                    </button>
                </div>
            </figure>
            <button
                class="lightbox-next"
                aria-label="Next"
                on:click=move |e| {
                    e.stop_propagation();
                    state.update(GalleryState::next);
                }
            >
                "›"
            </button>
        </div>
    }
}
