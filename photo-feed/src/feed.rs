use std::collections::HashSet;

use unsplash_api::{Photo, PhotoPage};

/// Query identity of one feed.
///
/// Changing the identity supersedes everything accumulated for the old one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeedKey {
    /// Latest photos, the home feed
    Latest,
    /// Full-text search for a term
    Search(String),
    /// A curated topic, by slug
    Topic(String),
    /// Photos published by one user
    UserPhotos(String),
    /// The local favorites of one user, by uid
    Favorites(String),
}

/// Fetch lifecycle of a feed
#[derive(Debug, Clone, PartialEq)]
pub enum FeedStatus {
    Idle,
    Loading,
    /// A page fetch failed; pagination halts until [`FeedSession::retry`]
    Error(String),
}

/// Permission to fetch exactly one page.
///
/// The generation stamp ties the eventual response back to the query
/// identity that requested it; a session reset in between invalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub page: u32,
    generation: u64,
}

/// Accumulated state of one paginated feed.
///
/// Pages are appended in fetch order and never reordered. The running set
/// of seen photo ids guarantees the merged list is free of duplicates even
/// when the upstream overlaps consecutive pages.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSession {
    key: FeedKey,
    photos: Vec<Photo>,
    seen: HashSet<String>,
    next_page: Option<u32>,
    status: FeedStatus,
    generation: u64,
}

impl FeedSession {
    pub fn new(key: FeedKey) -> Self {
        Self {
            key,
            photos: Vec::new(),
            seen: HashSet::new(),
            next_page: Some(1),
            status: FeedStatus::Idle,
            generation: 0,
        }
    }

    pub fn key(&self) -> &FeedKey {
        &self.key
    }

    /// The merged, duplicate-free photo list in fetch order
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn photo_at(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// True while the upstream has indicated another page exists
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.status == FeedStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FeedStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Claim the next page fetch.
    ///
    /// Returns `None` when the feed is exhausted, a fetch is already in
    /// flight (this suppresses duplicate sentinel triggers), or a previous
    /// fetch failed and has not been retried.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.status != FeedStatus::Idle {
            return None;
        }
        let page = self.next_page?;
        self.status = FeedStatus::Loading;
        Some(FetchTicket {
            page,
            generation: self.generation,
        })
    }

    /// Merge a fetched page into the accumulated state.
    ///
    /// Photos whose id was already seen are discarded; the survivors are
    /// appended in page order and the cursor advances to the page's
    /// `next_id`. A ticket from before a [`reset`](Self::reset) merges
    /// nothing. Returns how many photos were appended.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, page: PhotoPage) -> usize {
        if ticket.generation != self.generation {
            log::debug!(
                "Discarding stale page {} for superseded feed {:?}",
                ticket.page,
                self.key
            );
            return 0;
        }

        self.status = FeedStatus::Idle;
        self.next_page = page.next_id;

        let mut added = 0;
        for photo in page.photos {
            if self.seen.insert(photo.id.clone()) {
                self.photos.push(photo);
                added += 1;
            }
        }
        added
    }

    /// Record a failed page fetch.
    ///
    /// The cursor is left untouched so a retry re-requests the same page;
    /// nothing is retried automatically. Stale tickets are ignored.
    pub fn fail_fetch(&mut self, ticket: FetchTicket, message: String) {
        if ticket.generation != self.generation {
            return;
        }
        log::warn!("Feed {:?} page {} failed: {}", self.key, ticket.page, message);
        self.status = FeedStatus::Error(message);
    }

    /// Clear a fetch error so pagination can be triggered again
    pub fn retry(&mut self) {
        if matches!(self.status, FeedStatus::Error(_)) {
            self.status = FeedStatus::Idle;
        }
    }

    /// Supersede the current query identity.
    ///
    /// Accumulated photos and the seen set are dropped, the cursor returns
    /// to page 1, and the generation is bumped so in-flight responses for
    /// the old identity are discarded on arrival.
    pub fn reset(&mut self, key: FeedKey) {
        self.key = key;
        self.photos.clear();
        self.seen.clear();
        self.next_page = Some(1);
        self.status = FeedStatus::Idle;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::page;

    fn ids(session: &FeedSession) -> Vec<&str> {
        session.photos().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn overlapping_pages_merge_without_duplicates() {
        let mut feed = FeedSession::new(FeedKey::Latest);

        let ticket = feed.begin_fetch().unwrap();
        assert_eq!(ticket.page, 1);
        let added = feed.complete_fetch(ticket, page(&["A", "B", "C"], Some(2)));
        assert_eq!(added, 3);

        // Upstream overlap: C appears again on page 2
        let ticket = feed.begin_fetch().unwrap();
        assert_eq!(ticket.page, 2);
        let added = feed.complete_fetch(ticket, page(&["C", "D", "E"], None));
        assert_eq!(added, 2);

        assert_eq!(ids(&feed), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn exhausted_feed_stops_fetching() {
        let mut feed = FeedSession::new(FeedKey::Latest);

        let ticket = feed.begin_fetch().unwrap();
        feed.complete_fetch(ticket, page(&["A"], None));

        assert!(!feed.has_more());
        assert_eq!(feed.begin_fetch(), None);
        assert_eq!(ids(&feed), vec!["A"]);
    }

    #[test]
    fn in_flight_fetch_suppresses_duplicate_triggers() {
        let mut feed = FeedSession::new(FeedKey::Latest);

        let ticket = feed.begin_fetch().unwrap();
        // The sentinel may fire again while the fetch is outstanding
        assert_eq!(feed.begin_fetch(), None);

        feed.complete_fetch(ticket, page(&["A"], Some(2)));
        assert!(feed.begin_fetch().is_some());
    }

    #[test]
    fn error_halts_pagination_until_retry() {
        let mut feed = FeedSession::new(FeedKey::Latest);

        let ticket = feed.begin_fetch().unwrap();
        feed.fail_fetch(ticket, "boom".to_string());

        assert_eq!(feed.error(), Some("boom"));
        assert_eq!(feed.begin_fetch(), None);

        feed.retry();
        // Same page is requested again
        assert_eq!(feed.begin_fetch().unwrap().page, 1);
    }

    #[test]
    fn stale_response_after_reset_is_discarded() {
        let mut feed = FeedSession::new(FeedKey::Search("lake".to_string()));

        let stale = feed.begin_fetch().unwrap();
        feed.reset(FeedKey::Search("mountain".to_string()));

        // The old search's response arrives late
        assert_eq!(feed.complete_fetch(stale, page(&["A", "B"], Some(2))), 0);
        assert!(feed.is_empty());
        assert_eq!(feed.key(), &FeedKey::Search("mountain".to_string()));

        // And so does a failure for the old identity
        let stale_err = FetchTicket {
            page: 1,
            generation: 0,
        };
        feed.fail_fetch(stale_err, "late".to_string());
        assert_eq!(feed.error(), None);
    }

    #[test]
    fn reset_restarts_at_page_one() {
        let mut feed = FeedSession::new(FeedKey::Latest);
        let ticket = feed.begin_fetch().unwrap();
        feed.complete_fetch(ticket, page(&["A", "B"], Some(2)));

        feed.reset(FeedKey::Topic("nature".to_string()));
        assert!(feed.is_empty());
        assert!(feed.has_more());

        // The seen set was cleared too: ids from the old identity merge again
        let ticket = feed.begin_fetch().unwrap();
        assert_eq!(ticket.page, 1);
        assert_eq!(feed.complete_fetch(ticket, page(&["A"], None)), 1);
    }

    #[test]
    fn pages_append_in_fetch_order() {
        let mut feed = FeedSession::new(FeedKey::UserPhotos("jdoe".to_string()));

        for (expected_page, batch) in [(1, ["A", "B"]), (2, ["C", "D"]), (3, ["E", "F"])] {
            let ticket = feed.begin_fetch().unwrap();
            assert_eq!(ticket.page, expected_page);
            let next = if expected_page < 3 {
                Some(expected_page + 1)
            } else {
                None
            };
            feed.complete_fetch(ticket, page(&batch, next));
        }

        assert_eq!(ids(&feed), vec!["A", "B", "C", "D", "E", "F"]);
        assert!(!feed.has_more());
    }
}
