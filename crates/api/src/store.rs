//! In-memory store of submitted event drafts.
//!
//! Drafts live for the lifetime of the process. The store holds at most
//! `max_drafts` entries and evicts the oldest draft once the cap is exceeded.

use std::cmp::Ordering;
use std::sync::Arc;

use dashmap::DashMap;
use fete_core::event::EventDraft;
use fete_shared::types::{EventId, PageRequest, PageResponse};
use tracing::debug;

/// Concurrent draft store shared by all handlers.
#[derive(Debug, Clone)]
pub struct EventDraftStore {
    drafts: Arc<DashMap<EventId, EventDraft>>,
    max_drafts: usize,
}

/// Orders drafts oldest first.
fn by_age(a: &EventDraft, b: &EventDraft) -> Ordering {
    a.created_at
        .cmp(&b.created_at)
        .then_with(|| a.id.into_inner().cmp(&b.id.into_inner()))
}

impl EventDraftStore {
    /// Creates an empty store holding at most `max_drafts` drafts (minimum 1).
    #[must_use]
    pub fn new(max_drafts: usize) -> Self {
        Self {
            drafts: Arc::new(DashMap::new()),
            max_drafts: max_drafts.max(1),
        }
    }

    /// Stores a draft, replacing any draft with the same ID.
    ///
    /// Evicts the oldest drafts while the store is over capacity.
    pub fn insert(&self, draft: EventDraft) {
        self.drafts.insert(draft.id, draft);

        while self.drafts.len() > self.max_drafts {
            let Some(oldest) = self.oldest_id() else {
                break;
            };
            if let Some((id, _)) = self.drafts.remove(&oldest) {
                debug!(event_id = %id, max_drafts = self.max_drafts, "Evicted oldest event draft");
            }
        }
    }

    fn oldest_id(&self) -> Option<EventId> {
        self.drafts
            .iter()
            .min_by(|a, b| by_age(a.value(), b.value()))
            .map(|entry| *entry.key())
    }

    /// Returns a copy of one draft.
    #[must_use]
    pub fn get(&self, id: EventId) -> Option<EventDraft> {
        self.drafts.get(&id).map(|entry| entry.value().clone())
    }

    /// Lists drafts newest first.
    #[must_use]
    pub fn list(&self, page: &PageRequest) -> PageResponse<EventDraft> {
        let mut drafts: Vec<EventDraft> = self
            .drafts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        drafts.sort_by(|a, b| by_age(b, a));
        page.paginate(drafts)
    }

    /// Maximum number of drafts kept.
    #[must_use]
    pub fn max_drafts(&self) -> usize {
        self.max_drafts
    }

    /// Number of stored drafts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    /// Returns true if no draft was stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, Utc};
    use fete_core::event::EventForm;

    fn draft(name: &str) -> EventDraft {
        let mut form = EventForm::default();
        form.set_name(name);
        form.set_date(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
        form.set_location("Pune");
        form.set_guest_count(10);
        form.submit(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
            .unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let store = EventDraftStore::new(100);
        let saved = draft("Offsite");
        let id = saved.id;
        store.insert(saved);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).unwrap().name, "Offsite");
        assert!(store.get(EventId::new()).is_none());
    }

    #[test]
    fn test_list_paginates() {
        let store = EventDraftStore::new(100);
        for i in 0..5 {
            store.insert(draft(&format!("Event {i}")));
        }

        let page = store.list(&PageRequest {
            page: 2,
            per_page: 2,
        });
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.meta.total, 5);
        assert_eq!(page.meta.total_pages, 3);
    }

    #[test]
    fn test_insert_evicts_oldest_over_capacity() {
        let store = EventDraftStore::new(3);
        let base = Utc::now();
        let mut ids = Vec::new();
        for i in 0..5 {
            let mut saved = draft(&format!("Event {i}"));
            saved.created_at = base + Duration::seconds(i);
            ids.push(saved.id);
            store.insert(saved);
        }

        assert_eq!(store.len(), 3);
        assert!(store.get(ids[0]).is_none());
        assert!(store.get(ids[1]).is_none());
        assert_eq!(store.get(ids[4]).unwrap().name, "Event 4");

        let page = store.list(&PageRequest::default());
        assert_eq!(page.data[0].name, "Event 4");
        assert_eq!(page.data[2].name, "Event 2");
    }

    #[test]
    fn test_zero_capacity_keeps_latest_draft() {
        let store = EventDraftStore::new(0);
        assert_eq!(store.max_drafts(), 1);

        let mut first = draft("First");
        first.created_at = Utc::now() - Duration::minutes(1);
        store.insert(first);
        let latest = draft("Second");
        let id = latest.id;
        store.insert(latest);

        assert_eq!(store.len(), 1);
        assert!(store.get(id).is_some());
    }
}
