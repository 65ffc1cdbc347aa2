//! センシティブ表示（ぼかし解除）の状態
//!
//! 解除は「表示リスト上の位置」で記録する。絞り込みで表示リストが
//! 変わると、記録済みの位置は別の項目を指すことがある。これは既知の
//! 挙動で、リセットはマニフェスト再読み込み時のみ。

use crate::types::Item;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: HashSet<usize>,
    global: bool,
}

impl RevealState {
    pub fn is_revealed(&self, index: usize) -> bool {
        self.global || self.revealed.contains(&index)
    }

    /// 位置を解除済みにする（冪等）
    pub fn reveal_index(&mut self, index: usize) {
        self.revealed.insert(index);
    }

    /// 全体トグル。オフに戻すと位置ごとの解除がそのまま有効になる
    pub fn set_global(&mut self, on: bool) {
        self.global = on;
    }

    pub fn global(&self) -> bool {
        self.global
    }

    pub fn reset(&mut self) {
        self.revealed.clear();
        self.global = false;
    }

    /// ぼかすべきか（センシティブでない項目は常にfalse）
    pub fn is_blurred(&self, item: &Item, index: usize, sensitive_tag: &str) -> bool {
        item.has_tag(sensitive_tag) && !self.is_revealed(index)
    }
}
