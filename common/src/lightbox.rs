//! ライトボックスの状態遷移
//!
//! `Closed` / `Open(index)` の2状態。indexは現在の表示リストの位置で、
//! 範囲外へのopenは何もしない。前後移動は循環する。
//! DOM側の副作用（フォーカス・aria-hidden）は `modal` モジュール。

/// ライトボックスの状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(usize),
}

impl LightboxState {
    pub fn index(self) -> Option<usize> {
        match self {
            LightboxState::Open(index) => Some(index),
            LightboxState::Closed => None,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, LightboxState::Open(_))
    }

    /// `index` を開く。範囲外なら状態は変わらない
    ///
    /// 開いている最中に別のindexを開くのも有効（前後移動で使う）。
    pub fn open(self, index: usize, len: usize) -> Self {
        if index < len {
            LightboxState::Open(index)
        } else {
            self
        }
    }

    pub fn next(self, len: usize) -> Self {
        match self {
            LightboxState::Open(i) if len > 0 => self.open((i + 1) % len, len),
            _ => self,
        }
    }

    pub fn prev(self, len: usize) -> Self {
        match self {
            LightboxState::Open(i) if len > 0 => self.open((i % len + len - 1) % len, len),
            _ => self,
        }
    }

    pub fn close(self) -> Self {
        LightboxState::Closed
    }
}

/// ライトボックスが扱うキー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Tab,
}

impl LightboxKey {
    /// `KeyboardEvent.key` の値から変換
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(LightboxKey::Escape),
            "ArrowLeft" => Some(LightboxKey::ArrowLeft),
            "ArrowRight" => Some(LightboxKey::ArrowRight),
            "Tab" => Some(LightboxKey::Tab),
            _ => None,
        }
    }
}

/// Tabキー押下時のフォーカス移動
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabStep {
    /// ブラウザの既定動作に任せる
    Native,
    /// 既定動作を止める（フォーカス可能要素がない）
    Suppress,
    /// 既定動作を止めて指定位置へ移す
    MoveTo(usize),
}

/// フォーカストラップの判定
///
/// # Arguments
/// * `focused` - フォーカス中の要素のフォーカス可能要素内での位置
/// * `count` - ライトボックス内のフォーカス可能要素数
/// * `shift` - Shift+Tab か
pub fn focus_trap_step(focused: Option<usize>, count: usize, shift: bool) -> TabStep {
    if count == 0 {
        return TabStep::Suppress;
    }
    let last = count - 1;
    match (focused, shift) {
        (Some(i), false) if i == last => TabStep::MoveTo(0),
        (Some(0), true) => TabStep::MoveTo(last),
        _ => TabStep::Native,
    }
}
