//! Rating widget state
//!
//! `RatingWidget` holds the configuration of one star widget and keeps its
//! star sequence in sync. Every rating mutation goes through `set_rating`,
//! which recomputes the sequence before notifying listeners, so the view
//! never observes a stale sequence.

use super::stars::{STAR_COUNT, StarKind, StarSequence, compute_stars, sanitize_rating};
use super::RatingError;
use crate::i18n::{Key, Locale};

/// Handle returned by `RatingWidget::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Delivered to listeners after the rating changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingChange {
    pub previous: f32,
    pub current: f32,
    /// Sequence already recomputed for `current`
    pub stars: StarSequence,
}

type Listener = Box<dyn FnMut(&RatingChange)>;

/// Five-star rating display/input state
pub struct RatingWidget {
    rating: f32,
    read_only: bool,
    details: bool,
    votes: u32,
    stars: StarSequence,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl Default for RatingWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RatingWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RatingWidget")
            .field("rating", &self.rating)
            .field("read_only", &self.read_only)
            .field("details", &self.details)
            .field("votes", &self.votes)
            .field("stars", &self.stars)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl RatingWidget {
    /// Editable widget with a rating of 0 and no caption
    pub fn new() -> Self {
        Self {
            rating: 0.0,
            read_only: false,
            details: false,
            votes: 0,
            stars: compute_stars(0.0),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Builder: initial rating
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.set_rating(rating);
        self
    }

    /// Builder: read-only flag
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Builder: details flag
    pub fn details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    /// Builder: vote count
    pub fn votes(mut self, votes: u32) -> Self {
        self.votes = votes;
        self
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn has_details(&self) -> bool {
        self.details
    }

    pub fn vote_count(&self) -> u32 {
        self.votes
    }

    /// Current star sequence
    pub fn stars(&self) -> &StarSequence {
        &self.stars
    }

    /// Star slots paired with their position, in display order
    pub fn indexed_stars(&self) -> impl Iterator<Item = (usize, StarKind)> + '_ {
        self.stars.iter().copied().enumerate()
    }

    /// The caption is only shown for read-only widgets that opted into details
    pub fn show_details(&self) -> bool {
        self.details && self.read_only
    }

    /// Set the rating, recompute the stars and notify listeners
    ///
    /// Input is clamped to `[0, 5]` (NaN becomes 0). Assigning the current
    /// value again is a no-op and does not notify.
    pub fn set_rating(&mut self, rating: f32) {
        let sanitized = sanitize_rating(rating);
        if rating.is_nan() || sanitized != rating {
            tracing::warn!("Rating {} out of range, clamped to {}", rating, sanitized);
        }

        if sanitized == self.rating {
            return;
        }

        let previous = self.rating;
        self.rating = sanitized;
        self.stars = compute_stars(sanitized);
        tracing::debug!("Rating changed: {} -> {}", previous, sanitized);

        let change = RatingChange {
            previous,
            current: sanitized,
            stars: self.stars,
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn set_details(&mut self, details: bool) {
        self.details = details;
    }

    pub fn set_votes(&mut self, votes: u32) {
        self.votes = votes;
    }

    /// Handle a click on the star at `index` (0-based)
    ///
    /// Sets an integer rating of `index + 1`; half ratings cannot be entered
    /// by clicking.
    pub fn handle_star_click(&mut self, index: usize) -> Result<(), RatingError> {
        if self.read_only {
            return Err(RatingError::ReadOnly);
        }
        if index >= STAR_COUNT {
            return Err(RatingError::StarOutOfRange(index));
        }

        self.set_rating((index + 1) as f32);
        Ok(())
    }

    /// Sequence to draw while the pointer rests on star `hovered`
    ///
    /// Read-only widgets ignore hovering and always show their own stars.
    pub fn preview(&self, hovered: Option<usize>) -> StarSequence {
        match hovered {
            Some(index) if !self.read_only && index < STAR_COUNT => {
                compute_stars((index + 1) as f32)
            }
            _ => self.stars,
        }
    }

    /// Register a change listener
    pub fn subscribe(&mut self, listener: impl FnMut(&RatingChange) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        tracing::debug!("Rating listener {:?} registered", id);
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Details caption, e.g. "4.7 (51 votes)", when `show_details` holds
    pub fn details_caption(&self, locale: Locale) -> Option<String> {
        if !self.show_details() {
            return None;
        }

        Some(if self.votes == 0 {
            format!("{} ({})", self.rating, locale.get(Key::NoVotes))
        } else {
            format!("{} ({} {})", self.rating, self.votes, locale.get(Key::Votes))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::rating::StarKind::{Blank, Full, Half};

    fn recorder(widget: &mut RatingWidget) -> (ListenerId, Rc<RefCell<Vec<RatingChange>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let id = widget.subscribe(move |change| sink.borrow_mut().push(*change));
        (id, log)
    }

    #[test]
    fn test_defaults() {
        let widget = RatingWidget::new();
        assert_eq!(widget.rating(), 0.0);
        assert!(!widget.is_read_only());
        assert!(!widget.has_details());
        assert_eq!(widget.vote_count(), 0);
        assert_eq!(widget.stars(), &[Blank; 5]);
    }

    #[test]
    fn test_demo_configuration() {
        let widget = RatingWidget::new()
            .with_rating(4.7)
            .votes(51)
            .details(true)
            .read_only(true);

        assert_eq!(widget.stars(), &[Full, Full, Full, Full, Half]);
        assert_eq!(
            widget.details_caption(Locale::new(Language::English)).as_deref(),
            Some("4.7 (51 votes)")
        );
    }

    #[test]
    fn test_caption_without_votes() {
        let widget = RatingWidget::new()
            .with_rating(3.0)
            .details(true)
            .read_only(true);
        assert_eq!(
            widget.details_caption(Locale::new(Language::English)).as_deref(),
            Some("3 (No votes)")
        );
    }

    #[test]
    fn test_show_details_truth_table() {
        for (details, read_only, expected) in [
            (false, false, false),
            (true, false, false),
            (false, true, false),
            (true, true, true),
        ] {
            let widget = RatingWidget::new().details(details).read_only(read_only);
            assert_eq!(
                widget.show_details(),
                expected,
                "details={}, read_only={}",
                details,
                read_only
            );
            assert_eq!(
                widget.details_caption(Locale::default()).is_some(),
                expected
            );
        }
    }

    #[test]
    fn test_click_sets_integer_rating() {
        for index in 0..STAR_COUNT {
            let mut widget = RatingWidget::new().with_rating(2.5);
            widget.handle_star_click(index).unwrap();

            assert_eq!(widget.rating(), (index + 1) as f32);
            let full = widget.stars().iter().filter(|s| **s == Full).count();
            assert_eq!(full, index + 1);
            assert!(widget.stars()[..=index].iter().all(|s| *s == Full));
            assert!(!widget.stars().contains(&Half));
        }
    }

    #[test]
    fn test_click_rejected_when_read_only() {
        let mut widget = RatingWidget::new().with_rating(2.0).read_only(true);
        assert_eq!(widget.handle_star_click(3), Err(RatingError::ReadOnly));
        assert_eq!(widget.rating(), 2.0);
    }

    #[test]
    fn test_click_out_of_range() {
        let mut widget = RatingWidget::new();
        assert_eq!(
            widget.handle_star_click(5),
            Err(RatingError::StarOutOfRange(5))
        );
        assert_eq!(widget.rating(), 0.0);
    }

    #[test]
    fn test_set_rating_clamps() {
        let mut widget = RatingWidget::new();
        widget.set_rating(7.5);
        assert_eq!(widget.rating(), 5.0);
        assert_eq!(widget.stars(), &[Full; 5]);

        widget.set_rating(-2.0);
        assert_eq!(widget.rating(), 0.0);

        widget.set_rating(3.0);
        widget.set_rating(f32::NAN);
        assert_eq!(widget.rating(), 0.0);
    }

    #[test]
    fn test_listener_sees_recomputed_stars() {
        let mut widget = RatingWidget::new();
        let (_, log) = recorder(&mut widget);

        widget.handle_star_click(2).unwrap();

        let log = log.borrow();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].previous, 0.0);
        assert_eq!(log[0].current, 3.0);
        assert_eq!(log[0].stars, [Full, Full, Full, Blank, Blank]);
    }

    #[test]
    fn test_same_value_does_not_notify() {
        let mut widget = RatingWidget::new().with_rating(4.0);
        let (_, log) = recorder(&mut widget);

        widget.set_rating(4.0);
        widget.handle_star_click(3).unwrap();
        assert!(log.borrow().is_empty());

        widget.set_rating(4.5);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let mut widget = RatingWidget::new();
        let (first, first_log) = recorder(&mut widget);
        let (_, second_log) = recorder(&mut widget);

        assert!(widget.unsubscribe(first));
        assert!(!widget.unsubscribe(first));

        widget.set_rating(1.0);
        assert!(first_log.borrow().is_empty());
        assert_eq!(second_log.borrow().len(), 1);
    }

    #[test]
    fn test_preview() {
        let editable = RatingWidget::new().with_rating(1.0);
        assert_eq!(editable.preview(Some(3)), [Full, Full, Full, Full, Blank]);
        assert_eq!(editable.preview(None), *editable.stars());
        assert_eq!(editable.preview(Some(9)), *editable.stars());

        let read_only = RatingWidget::new().with_rating(1.0).read_only(true);
        assert_eq!(read_only.preview(Some(3)), *read_only.stars());
    }

    #[test]
    fn test_indexed_stars_are_positional() {
        let widget = RatingWidget::new().with_rating(2.5);
        let indices: Vec<usize> = widget.indexed_stars().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(widget.indexed_stars().nth(2), Some((2, Half)));
    }
}
