//! Transient user-visible acknowledgments.
//!
//! Confirming an item (and other discrete actions) raises a notice that
//! expires on its own after a fixed delay. Several notices may coexist,
//! each independently timed and independently dismissible. Expiry is a
//! deadline carried by the notice itself, checked when the board is read —
//! there is no background task, so the single-threaded event model holds.

use std::time::{Duration, Instant};

use uuid::Uuid;

/// How long a notice stays visible without user action.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// One dismissible acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub message: String,
    expires_at: Instant,
}

impl Notice {
    pub fn is_expired(
        &self,
        now: Instant,
    ) -> bool {
        now >= self.expires_at
    }
}

/// The set of currently raised notices.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises a notice expiring [`NOTICE_TTL`] from now. Returns its id.
    pub fn push(
        &mut self,
        message: impl Into<String>,
    ) -> String {
        self.push_at(message, Instant::now())
    }

    /// Raises a notice with an explicit clock, for deterministic timing.
    pub fn push_at(
        &mut self,
        message: impl Into<String>,
        now: Instant,
    ) -> String {
        let id = Uuid::new_v4().simple().to_string();
        self.notices.push(Notice {
            id: id.clone(),
            message: message.into(),
            expires_at: now + NOTICE_TTL,
        });
        id
    }

    /// Dismisses one notice by id; no-op if already gone.
    pub fn dismiss(
        &mut self,
        id: &str,
    ) {
        self.notices.retain(|n| n.id != id);
    }

    /// Notices still visible at `now`, in raise order.
    pub fn active(
        &self,
        now: Instant,
    ) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(move |n| !n.is_expired(now))
    }

    /// Drops expired notices.
    pub fn sweep(
        &mut self,
        now: Instant,
    ) {
        self.notices.retain(|n| !n.is_expired(now));
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn notice_appears_immediately_and_expires_after_ttl() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();

        board.push_at("Added Finisher Medals", t0);

        assert_eq!(board.active(t0).count(), 1);
        assert_eq!(board.active(t0 + NOTICE_TTL - Duration::from_millis(1)).count(), 1);
        assert_eq!(board.active(t0 + NOTICE_TTL).count(), 0);
    }

    #[test]
    fn notices_are_independently_timed() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();

        board.push_at("Added Crew T-Shirts", t0);
        board.push_at("Updated Crew T-Shirts", t0 + Duration::from_secs(2));

        let mid = t0 + NOTICE_TTL;
        let remaining: Vec<_> = board.active(mid).map(|n| n.message.clone()).collect();
        assert_eq!(remaining, vec!["Updated Crew T-Shirts"]);
    }

    #[test]
    fn dismiss_removes_only_the_addressed_notice() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();
        let first = board.push_at("one", t0);
        board.push_at("two", t0);

        board.dismiss(&first);

        let remaining: Vec<_> = board.active(t0).map(|n| n.message.clone()).collect();
        assert_eq!(remaining, vec!["two"]);
    }

    #[test]
    fn dismissing_an_unknown_id_is_a_no_op() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();
        board.push_at("one", t0);

        board.dismiss("no-such-id");

        assert_eq!(board.len(), 1);
    }

    #[test]
    fn sweep_drops_expired_entries() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();
        board.push_at("stale", t0);
        board.push_at("fresh", t0 + Duration::from_secs(2));

        board.sweep(t0 + NOTICE_TTL);

        assert_eq!(board.len(), 1);
    }
}
