//! Name/path search over the registry.

use crate::model::FileEntry;

/// Entries whose name or path contains `query`, case-insensitively.
///
/// The query is trimmed first; an empty query keeps every entry. The result
/// is a subsequence of `entries` in their original order. Paths are only
/// consulted when non-empty.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use xlfind::filter::filter_entries;
/// use xlfind::model::{Blob, FileEntry};
///
/// let entries = vec![
///     FileEntry::new("Budget.xlsx", "finance/Budget.xlsx", Arc::new(Blob::new(Vec::new()))),
///     FileEntry::new("people.csv", "hr/people.csv", Arc::new(Blob::new(Vec::new()))),
/// ];
///
/// let hits = filter_entries(&entries, "  FINANCE ");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name(), "Budget.xlsx");
/// ```
pub fn filter_entries<'a>(entries: &'a [FileEntry], query: &str) -> Vec<&'a FileEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return entries.iter().collect();
    }

    entries
        .iter()
        .filter(|entry| matches_query(entry, &query))
        .collect()
}

/// `query` must already be trimmed and lowercased.
fn matches_query(entry: &FileEntry, query: &str) -> bool {
    entry.name().to_lowercase().contains(query)
        || (!entry.path().is_empty() && entry.path().to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Blob;
    use std::sync::Arc;

    fn entries() -> Vec<FileEntry> {
        [
            ("Budget.xlsx", "finance/2024/Budget.xlsx"),
            ("people.csv", "hr/people.csv"),
            ("Summary.XLS", ""),
            ("budget-old.xlsb", "archive/budget-old.xlsb"),
        ]
        .into_iter()
        .map(|(name, path)| FileEntry::new(name, path, Arc::new(Blob::new(Vec::new()))))
        .collect()
    }

    fn names<'a>(hits: &[&'a FileEntry]) -> Vec<&'a str> {
        hits.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let all = entries();
        assert_eq!(
            names(&filter_entries(&all, "")),
            vec!["Budget.xlsx", "people.csv", "Summary.XLS", "budget-old.xlsb"]
        );
        assert_eq!(filter_entries(&all, "   \t").len(), all.len());
    }

    #[test]
    fn test_case_insensitive_name_match_keeps_order() {
        let all = entries();
        assert_eq!(
            names(&filter_entries(&all, "BUDGET")),
            vec!["Budget.xlsx", "budget-old.xlsb"]
        );
    }

    #[test]
    fn test_path_match() {
        let all = entries();
        assert_eq!(names(&filter_entries(&all, "hr/")), vec!["people.csv"]);
        assert_eq!(names(&filter_entries(&all, "archive")), vec!["budget-old.xlsb"]);
    }

    #[test]
    fn test_empty_path_only_matches_name() {
        let all = entries();
        assert_eq!(names(&filter_entries(&all, "summary")), vec!["Summary.XLS"]);
        assert!(filter_entries(&all, "nothing-here").is_empty());
    }

    #[test]
    fn test_idempotent_and_non_mutating() {
        let all = entries();
        let first = names(&filter_entries(&all, "xls"));
        let second = names(&filter_entries(&all, "xls"));
        assert_eq!(first, second);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_every_hit_contains_query() {
        let all = entries();
        for query in ["a", "x", ".c", "20", "old"] {
            for hit in filter_entries(&all, query) {
                let q = query.to_lowercase();
                assert!(
                    hit.name().to_lowercase().contains(&q) || hit.path().to_lowercase().contains(&q)
                );
            }
        }
    }
}
