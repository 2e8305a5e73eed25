//! Auto-dismissing notice for the save confirmation.
//!
//! Only one notice is shown at a time. Showing a new one replaces the text
//! and restarts the timer. The clock is supplied by the caller, and
//! [`ActiveNotice::remaining`] lets a renderer hide the notice on its own
//! once the time is up.

use chrono::{DateTime, TimeDelta, Utc};

/// Default number of seconds a notice stays visible.
pub const DEFAULT_NOTICE_SECONDS: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Notice {
    message: String,
    expires_at: DateTime<Utc>,
}

/// A notice still on screen, with the time it has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveNotice<'a> {
    pub message: &'a str,
    pub remaining: TimeDelta,
}

impl ActiveNotice<'_> {
    /// Time left in whole milliseconds.
    #[must_use]
    pub fn remaining_millis(&self) -> i64 {
        self.remaining.num_milliseconds()
    }
}

/// Holds at most one notice.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    duration: TimeDelta,
    current: Option<Notice>,
}

impl NoticeBoard {
    /// Board whose notices stay up for `duration`.
    #[must_use]
    pub const fn new(duration: TimeDelta) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    /// Show `message` from `now`, replacing any notice already shown.
    pub fn show(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.current = Some(Notice {
            message: message.into(),
            expires_at: now + self.duration,
        });
    }

    /// The notice still on screen at `now`.
    #[must_use]
    pub fn current(&self, now: DateTime<Utc>) -> Option<ActiveNotice<'_>> {
        self.current
            .as_ref()
            .filter(|notice| now < notice.expires_at)
            .map(|notice| ActiveNotice {
                message: notice.message.as_str(),
                remaining: notice.expires_at - now,
            })
    }

    /// Drop any notice immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(TimeDelta::seconds(DEFAULT_NOTICE_SECONDS))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn message(board: &NoticeBoard, now: DateTime<Utc>) -> Option<&str> {
        board.current(now).map(|notice| notice.message)
    }

    #[test]
    fn test_notice_expires() {
        let mut board = NoticeBoard::default();
        board.show("Settings saved for City Juice Bar", at(0));

        assert_eq!(message(&board, at(2)), Some("Settings saved for City Juice Bar"));
        assert_eq!(board.current(at(3)), None);
    }

    #[test]
    fn test_remaining_counts_down() {
        let mut board = NoticeBoard::default();
        board.show("saved", at(0));

        assert_eq!(board.current(at(0)).unwrap().remaining_millis(), 3000);
        assert_eq!(board.current(at(2)).unwrap().remaining, TimeDelta::seconds(1));
    }

    #[test]
    fn test_replacement_resets_timer() {
        let mut board = NoticeBoard::default();
        board.show("first", at(0));
        board.show("second", at(2));

        assert_eq!(message(&board, at(4)), Some("second"));
        assert_eq!(board.current(at(5)), None);
    }

    #[test]
    fn test_dismiss() {
        let mut board = NoticeBoard::new(TimeDelta::minutes(1));
        board.show("saved", at(0));
        board.dismiss();
        assert_eq!(board.current(at(1)), None);
    }
}
