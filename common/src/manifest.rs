//! マニフェスト（images.json）パーサー
//!
//! トップレベルは配列であること。配列の要素はどんな値でも
//! 読み込みを止めず、オブジェクト以外は空の項目として扱う。

use crate::error::{Error, Result};
use crate::types::Item;
use serde_json::Value;
use std::cmp::Reverse;

/// マニフェスト本文をパースし、追加日の新しい順に並べる
pub fn load_manifest(body: &str) -> Result<Vec<Item>> {
    let mut items = parse_manifest(body)?;
    sort_newest_first(&mut items);
    Ok(items)
}

/// マニフェスト本文をパース（並び替えはしない）
///
/// # Returns
/// * `Ok(Vec<Item>)` - パース成功
/// * `Err` - JSONとして不正、またはトップレベルが配列でない
pub fn parse_manifest(body: &str) -> Result<Vec<Item>> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(entries) = value else {
        return Err(Error::InvalidManifest("top level is not an array".into()));
    };

    entries
        .into_iter()
        .map(|entry| -> Result<Item> {
            match entry {
                Value::Object(_) => Ok(serde_json::from_value(entry)?),
                _ => Ok(Item::default()),
            }
        })
        .collect()
}

/// 追加日の降順に並べる
///
/// 日付がない・パースできない項目は日付付き項目の後ろに、
/// 元の順序を保ったまま置く（安定ソート）。
pub fn sort_newest_first(items: &mut [Item]) {
    items.sort_by_cached_key(|item| {
        let millis = item.added_millis();
        (millis.is_none(), Reverse(millis))
    });
}
