// CauseConv - app/results.rs
//
// Caller-owned list of classification results, most recent first.
// Each result is keyed by an id generated here; the classifier never sees
// the list or the ids.

use crate::core::model::ClassificationResult;
use crate::util::constants::MAX_RESULTS;
use std::collections::VecDeque;

/// Identifier assigned to a result when it enters a list.
pub type ResultId = u64;

/// A result together with its list id.
#[derive(Debug, Clone)]
pub struct ListedResult {
    pub id: ResultId,
    pub result: ClassificationResult,
}

/// Most-recent-first list of results.
///
/// Supports insert-at-front, remove-by-id, and clear-all. Ids increase
/// monotonically and are never reused, even after `clear`.
#[derive(Debug)]
pub struct ResultList {
    items: VecDeque<ListedResult>,
    next_id: ResultId,
    capacity: usize,
}

impl Default for ResultList {
    fn default() -> Self {
        Self::with_capacity(MAX_RESULTS)
    }
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list bounded at `capacity` results (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::new(),
            next_id: 1,
            capacity: capacity.max(1),
        }
    }

    /// Insert a result at the front and return its id.
    ///
    /// When the list is full the oldest result is dropped.
    pub fn push(&mut self, result: ClassificationResult) -> ResultId {
        let id = self.next_id;
        self.next_id += 1;

        if self.items.len() == self.capacity {
            if let Some(evicted) = self.items.pop_back() {
                tracing::debug!(
                    evicted = evicted.id,
                    capacity = self.capacity,
                    "Result list full; dropped oldest result"
                );
            }
        }

        self.items.push_front(ListedResult { id, result });
        id
    }

    /// Remove the result with `id`, returning it if it was present.
    pub fn remove(&mut self, id: ResultId) -> Option<ClassificationResult> {
        let index = self.items.iter().position(|item| item.id == id)?;
        self.items.remove(index).map(|item| item.result)
    }

    /// Remove every result.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, id: ResultId) -> Option<&ClassificationResult> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| &item.result)
    }

    /// Results, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &ListedResult> {
        self.items.iter()
    }

    /// `(id, result)` pairs in display order, as the renderers take them.
    pub fn entries(&self) -> Vec<(ResultId, &ClassificationResult)> {
        self.items.iter().map(|item| (item.id, &item.result)).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::classify;
    use chrono::NaiveDate;

    fn result(raw: &str) -> ClassificationResult {
        classify(raw, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    fn raws(list: &ResultList) -> Vec<&str> {
        list.iter().map(|item| item.result.raw.as_str()).collect()
    }

    #[test]
    fn test_push_inserts_at_front() {
        let mut list = ResultList::new();
        let first = list.push(result("12345"));
        let second = list.push(result("914954"));
        assert!(second > first);
        assert_eq!(raws(&list), vec!["914954", "12345"]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut list = ResultList::new();
        let a = list.push(result("12345"));
        let b = list.push(result("12345"));
        let removed = list.remove(a).unwrap();
        assert_eq!(removed.raw, "12345");
        assert_eq!(list.len(), 1);
        assert!(list.get(b).is_some());
        assert!(list.get(a).is_none());
        assert!(list.remove(a).is_none());
    }

    #[test]
    fn test_clear_keeps_ids_unique() {
        let mut list = ResultList::new();
        let before = list.push(result("12345"));
        list.clear();
        assert!(list.is_empty());
        let after = list.push(result("12345"));
        assert_ne!(before, after);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut list = ResultList::with_capacity(2);
        let oldest = list.push(result("11111"));
        list.push(result("22222"));
        list.push(result("33333"));
        assert_eq!(list.len(), 2);
        assert!(list.get(oldest).is_none());
        assert_eq!(raws(&list), vec!["33333", "22222"]);
    }

    #[test]
    fn test_entries_in_display_order() {
        let mut list = ResultList::new();
        let a = list.push(result("12345"));
        let b = list.push(result("1023456"));
        let ids: Vec<ResultId> = list.entries().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![b, a]);
    }
}
