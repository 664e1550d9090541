//! Record id generation.
//!
//! Ids are millisecond timestamps. Two saves within the same millisecond would otherwise
//! collide, so [`TimestampIds`] never hands out an id at or below the largest id the
//! collection has ever held, including ids since removed.

use std::fmt::Debug;

use chrono::Utc;

use crate::record::RecordId;

/// Source of the current time in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync + Debug {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by [`chrono::Utc`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Assigns ids to newly created records.
pub trait IdGenerator: Send + Sync + Debug {
    /// Returns a fresh id. `floor` is the largest id ever assigned in the collection, if
    /// any; the returned id must be strictly greater than it.
    fn next_id(&self, floor: Option<RecordId>) -> RecordId;
}

/// Timestamp-derived ids, bumped past `floor` when the clock has not advanced.
#[derive(Debug, Default, Clone)]
pub struct TimestampIds<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> TimestampIds<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for TimestampIds<C> {
    fn next_id(&self, floor: Option<RecordId>) -> RecordId {
        let now = self.clock.now_millis();

        match floor {
            Some(RecordId(last)) if last >= now => RecordId(last.saturating_add(1)),
            _ => RecordId(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Frozen(i64);

    impl Clock for Frozen {
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn uses_clock_when_ahead_of_floor() {
        let ids = TimestampIds::new(Frozen(1_000));

        assert_eq!(ids.next_id(None), RecordId(1_000));
        assert_eq!(ids.next_id(Some(RecordId(10))), RecordId(1_000));
    }

    #[test]
    fn bumps_past_floor_within_same_millisecond() {
        let ids = TimestampIds::new(Frozen(1_000));

        assert_eq!(ids.next_id(Some(RecordId(1_000))), RecordId(1_001));
        assert_eq!(ids.next_id(Some(RecordId(1_005))), RecordId(1_006));
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}
