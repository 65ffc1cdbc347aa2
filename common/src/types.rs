//! ギャラリー項目の型定義
//!
//! マニフェスト（images.json）の1エントリ。フィールドは全て省略可能で、
//! 型が合わない値も読み込みを止めずに既定値へ落とす。

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// ギャラリー項目（読み込み後は不変）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// 画像ファイル名（欠損時は空文字 = 壊れた画像参照）
    #[serde(default, deserialize_with = "lenient_text")]
    pub filename: String,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,

    /// 追加日（日付としてパースできる文字列）
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub date_added: Option<String>,
}

impl Item {
    /// 表示用タイトル（空ならファイル名）
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.filename,
        }
    }

    /// 検索対象のタイトル（ファイル名にはフォールバックしない）
    pub fn search_title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// 追加日のUNIXミリ秒。パース不能ならNone
    pub fn added_millis(&self) -> Option<i64> {
        self.date_added.as_deref().and_then(parse_date_millis)
    }
}

/// 日付文字列をUNIXミリ秒に変換
///
/// 対応形式:
/// 1. RFC 3339（オフセット付き）
/// 2. RFC 2822
/// 3. オフセットなしの日時（UTCとして扱う）
/// 4. `YYYY-MM-DD` / `YYYY-MM` / `YYYY`
pub fn parse_date_millis(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis());
    }

    const NAIVE_FORMATS: [&str; 5] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }

    let date = match s.len() {
        10 => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
        7 => NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok(),
        4 if s.bytes().all(|b| b.is_ascii_digit()) => s
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1)),
        _ => None,
    }?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_tags<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
