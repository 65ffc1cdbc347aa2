//! ModalSurface のDOM実装

use gloo::console;
use media_gallery_common::{Error, ModalSurface, Result};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

/// ライトボックス内でフォーカスできる要素
const FOCUSABLE_SELECTOR: &str =
    "button, a[href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// body直下にモーダルを置いた画面
pub struct DomSurface {
    document: Document,
    body: HtmlElement,
    modal: Element,
}

impl DomSurface {
    /// bodyがなければNone
    pub fn new(modal: Element) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let body = document.body()?;
        Some(Self {
            document,
            body,
            modal,
        })
    }
}

impl ModalSurface for DomSurface {
    type Node = Element;

    fn siblings(&self) -> Vec<Element> {
        let children = self.body.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .filter(|child| !child.is_same_node(Some(&self.modal)))
            .collect()
    }

    fn aria_hidden(&self, node: &Element) -> Option<String> {
        node.get_attribute("aria-hidden")
    }

    fn set_aria_hidden(&self, node: &Element, value: Option<&str>) -> Result<()> {
        match value {
            Some(v) => node.set_attribute("aria-hidden", v),
            None => node.remove_attribute("aria-hidden"),
        }
        .map_err(dom_error)
    }

    fn set_modal_hidden(&self, hidden: bool) -> Result<()> {
        self.modal
            .set_attribute("aria-hidden", if hidden { "true" } else { "false" })
            .map_err(dom_error)
    }

    fn active_element(&self) -> Option<Element> {
        self.document.active_element()
    }

    fn focus(&self, node: &Element) -> Result<()> {
        node.dyn_ref::<HtmlElement>()
            .ok_or_else(|| Error::Dom("focus できない要素です".into()))?
            .focus()
            .map_err(dom_error)
    }

    fn set_scroll_locked(&self, locked: bool) -> Result<()> {
        self.body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" })
            .map_err(dom_error)
    }

    fn report(&self, error: &Error) {
        console::warn!(format!("modal: {}", error));
    }
}

/// 要素内のフォーカス可能要素（disabled除く）
pub fn focusable_elements(root: &Element) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter(|el| !el.has_attribute("disabled"))
        .collect()
}

/// イベントの発生元がその要素自身か（子要素ではない）
pub fn is_event_on(event: &web_sys::Event, el: &Element) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .is_some_and(|target| target.is_same_node(Some(el)))
}

fn dom_error(value: JsValue) -> Error {
    Error::Dom(format!("{:?}", value))
}
