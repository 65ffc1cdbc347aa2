//! ライトボックスのモーダルセッション
//!
//! 開いている間だけフォーカストラップとaria-hiddenのスナップショットを持つ。
//! 前後移動のたびに古いセッションを閉じて（復元して）から取り直す。

use super::surface::{focusable_elements, DomSurface};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use media_gallery_common::{focus_trap_step, LightboxKey, ModalSession, TabStep};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, KeyboardEvent};

/// 開いている間のリソース（フィールド順に破棄: トラップ解除 → DOM復元）
struct LightboxSession {
    _trap: EventListener,
    _modal: ModalSession<DomSurface>,
}

thread_local! {
    static SESSION: RefCell<Option<LightboxSession>> = const { RefCell::new(None) };
}

/// セッション開始（既存のセッションは先に終了する）
pub fn begin(modal: Element, focus_delay_ms: u32) {
    end();

    let Some(surface) = DomSurface::new(modal.clone()) else {
        console::warn!("modal: body がありません");
        return;
    };
    let session = LightboxSession {
        _trap: focus_trap(&modal),
        _modal: ModalSession::enter(surface),
    };
    SESSION.with(|slot| *slot.borrow_mut() = Some(session));
    console::log!("modal: open");

    // 表示が反映されてからフォーカスを移す（キャンセルしない）
    Timeout::new(focus_delay_ms, move || focus_initial(&modal)).forget();
}

/// セッション終了（開いていなければ何もしない）
pub fn end() {
    let session = SESSION.with(|slot| slot.borrow_mut().take());
    if session.is_some() {
        drop(session);
        console::log!("modal: close");
    }
}

/// Tab / Shift+Tab をライトボックス内で循環させる
fn focus_trap(modal: &Element) -> EventListener {
    let root = modal.clone();
    EventListener::new_with_options(
        modal,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if LightboxKey::from_key(&event.key()) != Some(LightboxKey::Tab) {
                return;
            }

            let focusables = focusable_elements(&root);
            let active = root.owner_document().and_then(|doc| doc.active_element());
            let focused = active.and_then(|active| {
                focusables
                    .iter()
                    .position(|el| el.is_same_node(Some(&active)))
            });

            match focus_trap_step(focused, focusables.len(), event.shift_key()) {
                TabStep::Native => {}
                TabStep::Suppress => event.prevent_default(),
                TabStep::MoveTo(i) => {
                    event.prevent_default();
                    if let Some(el) = focusables.get(i) {
                        focus_element(el);
                    }
                }
            }
        },
    )
}

/// 画像 → 閉じるボタン → 最初のフォーカス可能要素の順に試す
fn focus_initial(modal: &Element) {
    let target = modal
        .query_selector(".lightbox-img")
        .ok()
        .flatten()
        .or_else(|| modal.query_selector(".lightbox-close").ok().flatten())
        .or_else(|| focusable_elements(modal).into_iter().next());
    if let Some(el) = target {
        focus_element(&el);
    }
}

fn focus_element(el: &Element) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        if let Err(e) = el.focus() {
            console::warn!(format!("modal: focus に失敗: {:?}", e));
        }
    }
}
