//! Opening-hours resolution.
//!
//! Stored timetable values are timestamps whose date part is meaningless;
//! every interval is projected onto a fixed sentinel day before comparison.
//! A close time earlier than its open time lands on the day after the
//! sentinel, so an interval like `[22:00, 02:00]` spans midnight.
//!
//! A search instant is checked against four intervals: the first and second
//! pair of the (normalized) `yesterday` and `today` entries. Each check may
//! move the instant to the day after the sentinel when the interval's open
//! and close clock times are both later than the instant's clock time.

use chrono::{
    DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc, Weekday,
};

use crate::features::venues::models::WeeklyTimetable;

const SENTINEL_DAY: NaiveDate = match NaiveDate::from_ymd_opt(2023, 1, 1) {
    Some(day) => day,
    None => panic!("invalid sentinel day"),
};

const SENTINEL_NEXT_DAY: NaiveDate = match NaiveDate::from_ymd_opt(2023, 1, 2) {
    Some(day) => day,
    None => panic!("invalid sentinel day"),
};

/// Weekday keys a search instant resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayKeys {
    pub yesterday: Weekday,
    pub today: Weekday,
}

/// Derive `(yesterday, today)` for an instant.
///
/// With a cutoff, a clock time strictly after it is counted as part of the
/// previous day. Without one the calendar weekday is used as is.
pub fn resolve_day_keys(instant: NaiveDateTime, cutoff: Option<NaiveTime>) -> DayKeys {
    let mut day = instant.date();

    if let Some(cutoff) = cutoff {
        if instant.time() > cutoff {
            day = day.checked_sub_days(Days::new(1)).unwrap_or(day);
        }
    }

    DayKeys {
        yesterday: day.weekday().pred(),
        today: day.weekday(),
    }
}

/// One open/close pair projected onto the sentinel day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    open: NaiveDateTime,
    close: NaiveDateTime,
}

impl TimeSlot {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        let open = clock_minute(open);
        let close = clock_minute(close);
        let close_day = if close < open {
            SENTINEL_NEXT_DAY
        } else {
            SENTINEL_DAY
        };

        Self {
            open: SENTINEL_DAY.and_time(open),
            close: close_day.and_time(close),
        }
    }

    fn from_stored(open: &DateTime<Utc>, close: &DateTime<Utc>) -> Self {
        Self::new(open.time(), close.time())
    }

    pub fn open_time(&self) -> NaiveTime {
        self.open.time()
    }

    pub fn close_time(&self) -> NaiveTime {
        self.close.time()
    }

    /// Closed on both ends
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.open <= at && at <= self.close
    }
}

/// Up to two intervals of one weekday. Entries that are not 0, 2 or 4
/// timestamps long contribute nothing.
pub fn day_slots(entry: Option<&[DateTime<Utc>]>) -> [Option<TimeSlot>; 2] {
    match entry {
        Some([open, close]) => [Some(TimeSlot::from_stored(open, close)), None],
        Some([open1, close1, open2, close2]) => [
            Some(TimeSlot::from_stored(open1, close1)),
            Some(TimeSlot::from_stored(open2, close2)),
        ],
        _ => [None, None],
    }
}

/// Which of the two resolved weekdays an interval belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySide {
    Yesterday,
    Today,
}

/// Signed difference in hours between a stored clock time and the search clock time
pub fn hour_delta(stored: NaiveTime, at: NaiveTime) -> f64 {
    let stored = i64::from(stored.hour() * 60 + stored.minute());
    let at = i64::from(at.hour() * 60 + at.minute());
    (stored - at) as f64 / 60.0
}

/// Test one interval against a search clock time.
///
/// When both the open and the close clock time are later than `at`, the
/// interval is taken to have started the day before and the comparison
/// instant moves to the day after the sentinel. Yesterday's intervals only
/// ever match such a moved instant.
pub fn slot_admits(slot: &TimeSlot, at: NaiveTime, side: DaySide) -> bool {
    let at = clock_minute(at);
    let rolled =
        hour_delta(slot.open_time(), at) > 0.0 && hour_delta(slot.close_time(), at) > 0.0;

    if side == DaySide::Yesterday && !rolled {
        return false;
    }

    let day = if rolled { SENTINEL_NEXT_DAY } else { SENTINEL_DAY };
    slot.contains(day.and_time(at))
}

/// Whether a venue is open at `instant`, `cutoff` being the nightlife day boundary
pub fn is_open_at(
    timetable: &WeeklyTimetable,
    instant: NaiveDateTime,
    cutoff: NaiveTime,
) -> bool {
    let keys = resolve_day_keys(instant, Some(cutoff));
    let at = instant.time();

    [
        (keys.yesterday, DaySide::Yesterday),
        (keys.today, DaySide::Today),
    ]
    .into_iter()
    .any(|(weekday, side)| {
        day_slots(timetable.day(weekday))
            .iter()
            .flatten()
            .any(|slot| slot_admits(slot, at, side))
    })
}

/// Whether a venue is scheduled to be open at `threshold` on the normalized
/// `today` of `instant`. Yesterday's entry and the day-advance do not apply.
pub fn is_open_tonight(
    timetable: &WeeklyTimetable,
    instant: NaiveDateTime,
    cutoff: NaiveTime,
    threshold: NaiveTime,
) -> bool {
    let keys = resolve_day_keys(instant, Some(cutoff));
    let at = SENTINEL_DAY.and_time(clock_minute(threshold));

    day_slots(timetable.day(keys.today))
        .iter()
        .flatten()
        .any(|slot| slot.contains(at))
}

fn clock_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}
