//! Per-product "liked" flags that reset after a fixed window.
//!
//! Every like sets a deadline for its product id. A repeat like replaces
//! the deadline, so the flag stays set until one window after the most
//! recent like. The counter only ever grows.

pub mod clock;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::catalog::ProductId;

pub use clock::{Clock, ManualClock, SystemClock};

pub const DEFAULT_LIKE_WINDOW: Duration = Duration::from_secs(3);

/// Deadline offset used when `now + window` does not fit in an `Instant`
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

#[derive(Debug, Clone)]
pub struct LikeTracker<C: Clock = SystemClock> {
    clock: C,
    window: Duration,
    deadlines: HashMap<ProductId, Instant>,
    count: u64,
}

impl<C: Clock> LikeTracker<C> {
    pub fn new(clock: C) -> Self {
        Self::with_window(clock, DEFAULT_LIKE_WINDOW)
    }

    pub fn with_window(clock: C, window: Duration) -> Self {
        Self {
            clock,
            window,
            deadlines: HashMap::new(),
            count: 0,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Mark `id` as liked and (re)start its expiry window
    pub fn like(&mut self, id: ProductId) {
        let now = self.clock.now();
        // A window past the clock's range means "until the session ends"
        let deadline = now
            .checked_add(self.window)
            .or_else(|| now.checked_add(FAR_FUTURE))
            .unwrap_or(now);
        self.deadlines.insert(id, deadline);
        self.count += 1;
        tracing::debug!(id, count = self.count, "product liked");
    }

    pub fn is_liked(&self, id: ProductId) -> bool {
        let now = self.clock.now();
        self.deadlines.get(&id).is_some_and(|deadline| *deadline > now)
    }

    /// Total likes in this session
    pub fn like_count(&self) -> u64 {
        self.count
    }

    /// Drop every elapsed deadline, returning the ids that were reset
    pub fn expire(&mut self) -> Vec<ProductId> {
        let now = self.clock.now();
        let mut expired: Vec<ProductId> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| *id)
            .collect();
        expired.sort_unstable();

        for id in &expired {
            self.deadlines.remove(id);
        }
        if !expired.is_empty() {
            tracing::debug!(?expired, "likes expired");
        }
        expired
    }

    /// Earliest pending deadline, if any
    pub fn next_expiry(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    /// How long until the next deadline elapses; zero if one already has
    pub fn until_next_expiry(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.next_expiry()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> (ManualClock, LikeTracker<ManualClock>) {
        let clock = ManualClock::new();
        (clock.clone(), LikeTracker::new(clock))
    }

    #[test]
    fn test_like_sets_flag_and_counter() {
        let (_clock, mut likes) = tracker();
        assert!(!likes.is_liked(1));

        likes.like(1);
        assert!(likes.is_liked(1));
        assert_eq!(likes.like_count(), 1);
    }

    #[test]
    fn test_like_resets_after_window() {
        let (clock, mut likes) = tracker();
        likes.like(1);

        clock.advance(Duration::from_millis(2999));
        assert!(likes.is_liked(1));
        assert!(likes.expire().is_empty());

        clock.advance(Duration::from_millis(1));
        assert!(!likes.is_liked(1));
        assert_eq!(likes.expire(), vec![1]);
        assert_eq!(likes.like_count(), 1);
    }

    #[test]
    fn test_relike_restarts_window() {
        let (clock, mut likes) = tracker();
        likes.like(7);
        clock.advance(Duration::from_secs(1));
        likes.like(7);

        // 3s after the first like, 2s after the second
        clock.advance(Duration::from_secs(2));
        assert!(likes.is_liked(7));
        assert!(likes.expire().is_empty());

        clock.advance(Duration::from_millis(999));
        assert!(likes.is_liked(7));

        clock.advance(Duration::from_millis(1));
        assert!(!likes.is_liked(7));
        assert_eq!(likes.like_count(), 2);
    }

    #[test]
    fn test_ids_are_independent() {
        let (clock, mut likes) = tracker();
        likes.like(1);
        clock.advance(Duration::from_secs(2));
        likes.like(2);

        clock.advance(Duration::from_secs(1));
        assert!(!likes.is_liked(1));
        assert!(likes.is_liked(2));
        assert_eq!(likes.expire(), vec![1]);
        assert!(likes.is_liked(2));
    }

    #[test]
    fn test_counter_never_decreases() {
        let (clock, mut likes) = tracker();
        for id in [1, 2, 1, 3] {
            likes.like(id);
        }
        assert_eq!(likes.like_count(), 4);

        clock.advance(Duration::from_secs(10));
        likes.expire();
        assert_eq!(likes.like_count(), 4);
    }

    #[test]
    fn test_next_expiry_tracks_earliest_deadline() {
        let (clock, mut likes) = tracker();
        assert!(likes.next_expiry().is_none());

        let start = clock.now();
        likes.like(1);
        clock.advance(Duration::from_secs(1));
        likes.like(2);

        assert_eq!(likes.next_expiry(), Some(start + Duration::from_secs(3)));

        clock.advance(Duration::from_secs(2));
        likes.expire();
        assert_eq!(likes.next_expiry(), Some(start + Duration::from_secs(4)));
    }

    #[test]
    fn test_until_next_expiry() {
        let (clock, mut likes) = tracker();
        assert!(likes.until_next_expiry().is_none());

        likes.like(1);
        clock.advance(Duration::from_secs(1));
        likes.like(2);
        assert_eq!(likes.until_next_expiry(), Some(Duration::from_secs(2)));

        clock.advance(Duration::from_secs(5));
        assert_eq!(likes.until_next_expiry(), Some(Duration::ZERO));
        assert_eq!(likes.expire(), vec![1, 2]);
        assert!(likes.until_next_expiry().is_none());
    }

    #[test]
    fn test_oversized_window_does_not_overflow() {
        let clock = ManualClock::new();
        let mut likes = LikeTracker::with_window(clock.clone(), Duration::from_secs(u64::MAX));

        likes.like(1);
        assert!(likes.is_liked(1));
        assert_eq!(likes.like_count(), 1);

        clock.advance(Duration::from_secs(24 * 60 * 60));
        assert!(likes.expire().is_empty());
        assert!(likes.is_liked(1));
    }

    #[test]
    fn test_largest_configured_window() {
        let clock = ManualClock::new();
        let window = Duration::from_secs(crate::config::MAX_LIKE_WINDOW_SECS);
        let mut likes = LikeTracker::with_window(clock.clone(), window);

        likes.like(1);
        assert_eq!(likes.until_next_expiry(), Some(window));
        clock.advance(window);
        assert_eq!(likes.expire(), vec![1]);
    }

    #[test]
    fn test_custom_window() {
        let clock = ManualClock::new();
        let mut likes = LikeTracker::with_window(clock.clone(), Duration::from_millis(500));
        assert_eq!(likes.window(), Duration::from_millis(500));

        likes.like(1);
        clock.advance(Duration::from_millis(500));
        assert!(!likes.is_liked(1));
    }
}
