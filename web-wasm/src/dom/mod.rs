//! DOM操作（モーダルのスナップショット・フォーカストラップ）

pub mod session;
pub mod surface;
