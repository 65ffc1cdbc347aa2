//! 表示リストの絞り込み
//!
//! アクティブタグ（完全一致）と検索文字列（タイトルの部分一致、
//! 大文字小文字無視）で項目を絞り込む。結果は毎回作り直し、
//! 前回の表示リストを丸ごと置き換える。

use crate::types::Item;

/// 絞り込み条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active_tag: String,
    search: String,
}

impl FilterState {
    pub fn active_tag(&self) -> &str {
        &self.active_tag
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// 入力値の前後の空白は除く
    pub fn set_active_tag(&mut self, tag: &str) {
        self.active_tag = tag.trim().to_string();
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.trim().to_string();
    }

    pub fn clear(&mut self) {
        self.active_tag.clear();
        self.search.clear();
    }

    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        compute_display_list(items, &self.active_tag, &self.search)
    }
}

/// 表示リストを計算する
///
/// 元の順序を保った部分列を返す。タイトルがない項目は
/// 検索上は空文字として扱う（ファイル名にはフォールバックしない）。
pub fn compute_display_list(items: &[Item], active_tag: &str, search: &str) -> Vec<Item> {
    let query = search.to_lowercase();
    items
        .iter()
        .filter(|item| matches(item, active_tag, &query))
        .cloned()
        .collect()
}

fn matches(item: &Item, active_tag: &str, query_lower: &str) -> bool {
    if !active_tag.is_empty() && !item.has_tag(active_tag) {
        return false;
    }
    if !query_lower.is_empty() && !item.search_title().to_lowercase().contains(query_lower) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(title: Option<&str>, filename: &str, tags: &[&str]) -> Item {
        Item {
            filename: filename.into(),
            title: title.map(String::from),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            date_added: None,
        }
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.filename.as_str()).collect()
    }

    fn sample() -> Vec<Item> {
        vec![
            item(Some("Caterpillar"), "1.jpg", &["bug", "green"]),
            item(Some("Dog"), "2.jpg", &["pet"]),
            item(Some("Black Cat"), "3.jpg", &["pet", "nsfw"]),
            item(None, "cat.jpg", &["pet"]),
        ]
    }

    #[test]
    fn test_no_filter_returns_all() {
        let items = sample();
        assert_eq!(compute_display_list(&items, "", ""), items);
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let items = vec![item(Some("Caterpillar"), "1.jpg", &[]), item(Some("Dog"), "2.jpg", &[])];
        assert_eq!(names(&compute_display_list(&items, "", "cat")), vec!["1.jpg"]);
        assert_eq!(names(&compute_display_list(&items, "", "CAT")), vec!["1.jpg"]);
    }

    #[test]
    fn test_search_ignores_filename() {
        assert_eq!(names(&compute_display_list(&sample(), "", "cat")), vec!["1.jpg", "3.jpg"]);
    }

    #[test]
    fn test_tag_exact_match() {
        assert_eq!(names(&compute_display_list(&sample(), "pet", "")), vec!["2.jpg", "3.jpg", "cat.jpg"]);
        assert!(compute_display_list(&sample(), "Pet", "").is_empty());
        assert!(compute_display_list(&sample(), "pe", "").is_empty());
    }

    #[test]
    fn test_tag_and_search_combined() {
        assert_eq!(names(&compute_display_list(&sample(), "pet", "cat")), vec!["3.jpg"]);
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let items = sample();
        let shown = compute_display_list(&items, "", "a");
        let mut cursor = items.iter();
        for wanted in &shown {
            assert!(cursor.any(|i| i == wanted));
        }
    }

    #[test]
    fn test_filter_state_trims_input() {
        let mut filter = FilterState::default();
        filter.set_active_tag("  pet ");
        filter.set_search(" dog  ");
        assert_eq!(filter.active_tag(), "pet");
        assert_eq!(filter.search(), "dog");
        assert_eq!(names(&filter.apply(&sample())), vec!["2.jpg"]);

        filter.clear();
        assert_eq!(filter, FilterState::default());
    }
}
