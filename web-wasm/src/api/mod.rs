//! 外部リソース取得

pub mod manifest;
