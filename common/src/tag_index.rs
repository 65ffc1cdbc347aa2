//! タグ集計
//!
//! 全項目からタグごとの件数を数え、頻度順（上位N件）と
//! アルファベット順の2通りの並びを提供する。
//! 項目リストの読み込み時に一度だけ作り直す。

use crate::types::Item;
use std::cmp::Ordering;
use std::collections::HashMap;

/// タグ件数マップ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    counts: HashMap<String, usize>,
}

/// タグバーに表示する1件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub tag: String,
    pub count: usize,
}

impl TagIndex {
    pub fn from_items(items: &[Item]) -> Self {
        let mut counts = HashMap::new();
        for tag in items.iter().flat_map(|item| item.tags.iter()) {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, tag: &str) -> usize {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    /// タグの種類数
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// 頻度の降順で上位n件（同数はアルファベット順）
    pub fn top(&self, n: usize) -> Vec<&str> {
        let mut tags: Vec<&str> = self.counts.keys().map(String::as_str).collect();
        tags.sort_by(|a, b| {
            self.count(b)
                .cmp(&self.count(a))
                .then_with(|| alphabetical(a, b))
        });
        tags.truncate(n);
        tags
    }

    /// 全タグのアルファベット順
    pub fn alphabetical(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.counts.keys().map(String::as_str).collect();
        tags.sort_by(|a, b| alphabetical(a, b));
        tags
    }

    /// タグバーの表示内容
    ///
    /// `expanded` が true なら全タグ（アルファベット順）、
    /// false なら上位 `top_n` 件（頻度順）。
    pub fn visible(&self, expanded: bool, top_n: usize) -> Vec<TagEntry> {
        let tags = if expanded {
            self.alphabetical()
        } else {
            self.top(top_n)
        };
        tags.into_iter()
            .map(|tag| TagEntry {
                tag: tag.to_string(),
                count: self.count(tag),
            })
            .collect()
    }

    /// 折りたたみ時に隠れるタグ数（トグルボタン不要なら None）
    pub fn hidden_count(&self, top_n: usize) -> Option<usize> {
        (self.len() > top_n).then(|| self.len() - top_n)
    }
}

/// 大文字小文字を無視した比較（同じならバイト順）
fn alphabetical(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
