use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Weekly opening schedule as stored.
///
/// Each weekday holds 0, 2 or 4 timestamps: `[open1, close1]` or
/// `[open1, close1, open2, close2]`. Only the time of day is meaningful.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeeklyTimetable {
    pub mon: Option<Vec<DateTime<Utc>>>,
    pub tue: Option<Vec<DateTime<Utc>>>,
    pub wed: Option<Vec<DateTime<Utc>>>,
    pub thu: Option<Vec<DateTime<Utc>>>,
    pub fri: Option<Vec<DateTime<Utc>>>,
    pub sat: Option<Vec<DateTime<Utc>>>,
    pub sun: Option<Vec<DateTime<Utc>>>,
}

impl WeeklyTimetable {
    pub fn day(&self, weekday: Weekday) -> Option<&[DateTime<Utc>]> {
        let entry = match weekday {
            Weekday::Mon => &self.mon,
            Weekday::Tue => &self.tue,
            Weekday::Wed => &self.wed,
            Weekday::Thu => &self.thu,
            Weekday::Fri => &self.fri,
            Weekday::Sat => &self.sat,
            Weekday::Sun => &self.sun,
        };
        entry.as_deref()
    }

    #[cfg(test)]
    pub fn with_day(mut self, weekday: Weekday, entry: Vec<DateTime<Utc>>) -> Self {
        let slot = match weekday {
            Weekday::Mon => &mut self.mon,
            Weekday::Tue => &mut self.tue,
            Weekday::Wed => &mut self.wed,
            Weekday::Thu => &mut self.thu,
            Weekday::Fri => &mut self.fri,
            Weekday::Sat => &mut self.sat,
            Weekday::Sun => &mut self.sun,
        };
        *slot = Some(entry);
        self
    }
}

/// Lower-case three letter key of a weekday, as used by the timetable columns
pub fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "mon",
        Weekday::Tue => "tue",
        Weekday::Wed => "wed",
        Weekday::Thu => "thu",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
        Weekday::Sun => "sun",
    }
}
