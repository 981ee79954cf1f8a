use unsplash_api::{Photo, PhotoDetail};

use crate::feed::FeedSession;

/// State machine behind the photo detail modal.
///
/// Opening paints synchronously from the feed's already-fetched copy of the
/// photo; the richer fetch upgrades the state without disturbing what is on
/// screen, since the detail schema is a superset of the summary.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOverlay {
    Closed,
    /// Open, showing placeholder data while the detail fetch is in flight.
    ///
    /// `index` is the photo's position in the accumulated feed list, when it
    /// was opened from there; photos opened from the related grid have none
    /// and cannot be stepped from.
    Placeholder {
        index: Option<usize>,
        detail: PhotoDetail,
    },
    /// Open with the resolved detail response
    Loaded {
        index: Option<usize>,
        detail: PhotoDetail,
    },
}

impl DetailOverlay {
    pub fn new() -> Self {
        DetailOverlay::Closed
    }

    /// Open for a photo, synchronously, using the caller's copy as
    /// placeholder data
    pub fn open(&mut self, index: Option<usize>, photo: &Photo) {
        *self = DetailOverlay::Placeholder {
            index,
            detail: PhotoDetail::from_placeholder(photo.clone()),
        };
    }

    pub fn close(&mut self) {
        *self = DetailOverlay::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DetailOverlay::Closed)
    }

    /// The detail data currently on screen, placeholder or resolved
    pub fn current(&self) -> Option<&PhotoDetail> {
        match self {
            DetailOverlay::Closed => None,
            DetailOverlay::Placeholder { detail, .. } | DetailOverlay::Loaded { detail, .. } => {
                Some(detail)
            }
        }
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current().map(|d| d.photo.id.as_str())
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            DetailOverlay::Closed => None,
            DetailOverlay::Placeholder { index, .. } | DetailOverlay::Loaded { index, .. } => {
                *index
            }
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, DetailOverlay::Loaded { .. })
    }

    /// Upgrade to the resolved detail.
    ///
    /// A response for a photo that is no longer the one on screen (the user
    /// stepped or closed in the meantime) is dropped.
    pub fn resolve(&mut self, detail: PhotoDetail) {
        if self.current_id() != Some(detail.photo.id.as_str()) {
            log::debug!("Dropping detail response for photo no longer shown");
            return;
        }
        let index = self.index();
        *self = DetailOverlay::Loaded { index, detail };
    }

    pub fn can_step_prev(&self) -> bool {
        matches!(self.index(), Some(index) if index > 0)
    }

    pub fn can_step_next(&self, feed: &FeedSession) -> bool {
        matches!(self.index(), Some(index) if index + 1 < feed.len())
    }

    /// Step to the previous photo in the accumulated list.
    ///
    /// Steps never fetch beyond what is accumulated; at the boundary this is
    /// a no-op and returns `false`.
    pub fn step_prev(&mut self, feed: &FeedSession) -> bool {
        if !self.can_step_prev() {
            return false;
        }
        self.step_to(self.index().unwrap_or(0).saturating_sub(1), feed)
    }

    /// Step to the next photo in the accumulated list
    pub fn step_next(&mut self, feed: &FeedSession) -> bool {
        if !self.can_step_next(feed) {
            return false;
        }
        self.step_to(self.index().unwrap_or(0) + 1, feed)
    }

    fn step_to(&mut self, index: usize, feed: &FeedSession) -> bool {
        match feed.photo_at(index) {
            Some(photo) => {
                let photo = photo.clone();
                self.open(Some(index), &photo);
                true
            }
            None => false,
        }
    }
}

impl Default for DetailOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{FeedKey, FeedSession};
    use crate::testutil::{page, photo};
    use unsplash_api::PhotoDetail;

    fn feed_with(ids: &[&str]) -> FeedSession {
        let mut feed = FeedSession::new(FeedKey::Latest);
        let ticket = feed.begin_fetch().unwrap();
        feed.complete_fetch(ticket, page(ids, None));
        feed
    }

    #[test]
    fn open_paints_placeholder_identical_to_feed_copy() {
        let feed = feed_with(&["A", "B"]);
        let mut overlay = DetailOverlay::new();

        overlay.open(Some(1), feed.photo_at(1).unwrap());

        // Before any network response the shown data IS the feed's copy
        let shown = overlay.current().unwrap();
        assert_eq!(&shown.photo, feed.photo_at(1).unwrap());
        assert!(!overlay.is_resolved());
        assert_eq!(shown.views, None);
    }

    #[test]
    fn resolve_upgrades_matching_photo() {
        let mut overlay = DetailOverlay::new();
        overlay.open(Some(0), &photo("A"));

        let mut detail = PhotoDetail::from_placeholder(photo("A"));
        detail.views = Some(12_000);
        overlay.resolve(detail);

        assert!(overlay.is_resolved());
        assert_eq!(overlay.current().unwrap().views, Some(12_000));
    }

    #[test]
    fn resolve_for_superseded_photo_is_dropped() {
        let feed = feed_with(&["A", "B"]);
        let mut overlay = DetailOverlay::new();
        overlay.open(Some(0), feed.photo_at(0).unwrap());

        // The user steps on before A's detail arrives
        assert!(overlay.step_next(&feed));
        overlay.resolve(PhotoDetail::from_placeholder(photo("A")));

        assert_eq!(overlay.current_id(), Some("B"));
        assert!(!overlay.is_resolved());
    }

    #[test]
    fn stepping_is_bounded_by_accumulated_list() {
        let feed = feed_with(&["A", "B", "C"]);
        let mut overlay = DetailOverlay::new();
        overlay.open(Some(0), feed.photo_at(0).unwrap());

        assert!(!overlay.can_step_prev());
        assert!(!overlay.step_prev(&feed));

        assert!(overlay.step_next(&feed));
        assert!(overlay.step_next(&feed));
        assert_eq!(overlay.current_id(), Some("C"));

        // At the end of what is accumulated: no fetch, no wrap
        assert!(!overlay.can_step_next(&feed));
        assert!(!overlay.step_next(&feed));
        assert_eq!(overlay.current_id(), Some("C"));
    }

    #[test]
    fn related_photo_has_no_position_to_step_from() {
        let feed = feed_with(&["A", "B"]);
        let mut overlay = DetailOverlay::new();

        // Opened from the related grid, not from the feed
        overlay.open(None, &photo("Z"));

        assert!(overlay.is_open());
        assert!(!overlay.can_step_prev());
        assert!(!overlay.can_step_next(&feed));
    }

    #[test]
    fn close_discards_state() {
        let mut overlay = DetailOverlay::new();
        overlay.open(Some(0), &photo("A"));
        overlay.close();

        assert!(!overlay.is_open());
        assert_eq!(overlay.current(), None);
        assert_eq!(overlay.index(), None);
    }
}
