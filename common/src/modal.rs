//! モーダルセッション
//!
//! モーダル表示中だけ有効な状態（兄弟要素のaria-hidden、フォーカス、
//! bodyのスクロール）を開始時に記録し、`Drop` で必ず元に戻す。
//! 各変更はベストエフォートで、1つ失敗しても残りの復元は続ける。

use crate::error::{Error, Result};

/// モーダルを載せる画面（ブラウザではDOM、テストでは偽物）
pub trait ModalSurface {
    type Node: Clone;

    /// モーダル自身を除くbody直下の要素
    fn siblings(&self) -> Vec<Self::Node>;

    fn aria_hidden(&self, node: &Self::Node) -> Option<String>;

    /// `None` なら属性を削除
    fn set_aria_hidden(&self, node: &Self::Node, value: Option<&str>) -> Result<()>;

    /// モーダル自身のaria-hidden
    fn set_modal_hidden(&self, hidden: bool) -> Result<()>;

    fn active_element(&self) -> Option<Self::Node>;

    fn focus(&self, node: &Self::Node) -> Result<()>;

    fn set_scroll_locked(&self, locked: bool) -> Result<()>;

    /// ベストエフォート操作の失敗通知
    fn report(&self, _error: &Error) {}
}

/// モーダル表示中のスナップショット
pub struct ModalSession<S: ModalSurface> {
    surface: S,
    aria_snapshot: Vec<(S::Node, Option<String>)>,
    previous_focus: Option<S::Node>,
}

impl<S: ModalSurface> ModalSession<S> {
    /// モーダルに入る
    ///
    /// 直前のフォーカスと兄弟要素のaria-hiddenを記録してから、
    /// 兄弟要素を隠しスクロールを止める。
    pub fn enter(surface: S) -> Self {
        let previous_focus = surface.active_element();
        let aria_snapshot: Vec<_> = surface
            .siblings()
            .into_iter()
            .map(|node| {
                let prev = surface.aria_hidden(&node);
                (node, prev)
            })
            .collect();

        let session = Self {
            surface,
            aria_snapshot,
            previous_focus,
        };
        for (node, _) in &session.aria_snapshot {
            session.best_effort(session.surface.set_aria_hidden(node, Some("true")));
        }
        session.best_effort(session.surface.set_modal_hidden(false));
        session.best_effort(session.surface.set_scroll_locked(true));
        session
    }

    fn best_effort(&self, result: Result<()>) {
        if let Err(e) = result {
            self.surface.report(&e);
        }
    }
}

impl<S: ModalSurface> Drop for ModalSession<S> {
    fn drop(&mut self) {
        self.best_effort(self.surface.set_scroll_locked(false));
        for (node, prev) in &self.aria_snapshot {
            self.best_effort(self.surface.set_aria_hidden(node, prev.as_deref()));
        }
        if let Some(node) = self.previous_focus.take() {
            self.best_effort(self.surface.focus(&node));
        }
        self.best_effort(self.surface.set_modal_hidden(true));
    }
}
