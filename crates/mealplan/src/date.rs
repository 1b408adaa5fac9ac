use std::fmt;
use std::str::FromStr;

use time::macros::format_description;
use time::{Date, Duration, Weekday};

/// Calendar day of a meal-plan slot. Time-of-day carries no meaning here,
/// and stored values always use the `YYYY-MM-DD` form, which compares
/// correctly as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlanDate(Date);

impl PlanDate {
    /// Parse `YYYY-MM-DD`, discarding anything from a `T` separator on.
    /// Clients send plain days on create but full timestamps in range
    /// queries, so both must land on the same day value.
    pub fn parse(value: &str) -> Result<PlanDate, time::error::Parse> {
        let day = value.split_once('T').map_or(value, |(day, _)| day);
        let format = format_description!("[year]-[month]-[day]");

        Ok(PlanDate(Date::parse(day.trim(), format)?))
    }
}

impl From<Date> for PlanDate {
    fn from(date: Date) -> Self {
        PlanDate(date)
    }
}

impl FromStr for PlanDate {
    type Err = time::error::Parse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanDate::parse(s)
    }
}

impl fmt::Display for PlanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

/// A Sunday-to-Saturday week, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub start: PlanDate,
    pub end: PlanDate,
}

impl Week {
    /// The week containing the given day.
    pub fn containing(date: PlanDate) -> Week {
        let days_since_sunday = match date.0.weekday() {
            Weekday::Sunday => 0,
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
        };

        let start = PlanDate(date.0 - Duration::days(days_since_sunday));

        Week {
            start,
            end: PlanDate(start.0 + Duration::days(6)),
        }
    }

    /// The seven days of the week, Sunday first.
    pub fn days(&self) -> [PlanDate; 7] {
        let mut days = [self.start; 7];
        for (offset, day) in days.iter_mut().enumerate() {
            *day = PlanDate(self.start.0 + Duration::days(offset as i64));
        }
        days
    }

    pub fn next(&self) -> Week {
        Week {
            start: PlanDate(self.start.0 + Duration::days(7)),
            end: PlanDate(self.end.0 + Duration::days(7)),
        }
    }

    pub fn previous(&self) -> Week {
        Week {
            start: PlanDate(self.start.0 - Duration::days(7)),
            end: PlanDate(self.end.0 - Duration::days(7)),
        }
    }

    pub fn contains(&self, date: PlanDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_plain_day() {
        let date = PlanDate::parse("2024-01-15").unwrap();
        assert_eq!(date, PlanDate(date!(2024-01-15)));
        assert_eq!(date.to_string(), "2024-01-15");
    }

    #[test]
    fn test_parse_discards_time_component() {
        let date = PlanDate::parse("2024-01-15T18:30:00.000Z").unwrap();
        assert_eq!(date.to_string(), "2024-01-15");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(PlanDate::parse("yesterday").is_err());
        assert!(PlanDate::parse("2024-13-01").is_err());
        assert!(PlanDate::parse("01/15/2024").is_err());
        assert!(PlanDate::parse("").is_err());
    }

    #[test]
    fn test_week_containing_a_wednesday() {
        // 2024-01-17 is a Wednesday.
        let week = Week::containing(PlanDate(date!(2024-01-17)));

        assert_eq!(week.start, PlanDate(date!(2024-01-14)));
        assert_eq!(week.end, PlanDate(date!(2024-01-20)));
    }

    #[test]
    fn test_week_starts_on_its_own_sunday() {
        // 2024-01-14 is a Sunday.
        let week = Week::containing(PlanDate(date!(2024-01-14)));

        assert_eq!(week.start, PlanDate(date!(2024-01-14)));
        assert_eq!(week.end, PlanDate(date!(2024-01-20)));
    }

    #[test]
    fn test_week_ends_on_its_own_saturday() {
        // 2024-01-20 is a Saturday.
        let week = Week::containing(PlanDate(date!(2024-01-20)));

        assert_eq!(week.start, PlanDate(date!(2024-01-14)));
        assert_eq!(week.end, PlanDate(date!(2024-01-20)));
    }

    #[test]
    fn test_week_spans_month_boundary() {
        // 2024-01-31 is a Wednesday.
        let week = Week::containing(PlanDate(date!(2024-01-31)));

        assert_eq!(week.start, PlanDate(date!(2024-01-28)));
        assert_eq!(week.end, PlanDate(date!(2024-02-03)));
    }

    #[test]
    fn test_week_days_are_sequential() {
        let week = Week::containing(PlanDate(date!(2024-01-17)));
        let days = week.days();

        assert_eq!(days.len(), 7);
        assert_eq!(days[0], week.start);
        assert_eq!(days[6], week.end);
        assert_eq!(days[3], PlanDate(date!(2024-01-17)));
    }

    #[test]
    fn test_week_navigation() {
        let week = Week::containing(PlanDate(date!(2024-01-17)));

        let next = week.next();
        assert_eq!(next.start, PlanDate(date!(2024-01-21)));
        assert_eq!(next.end, PlanDate(date!(2024-01-27)));

        assert_eq!(next.previous(), week);
        assert_eq!(week.previous().start, PlanDate(date!(2024-01-07)));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let week = Week::containing(PlanDate(date!(2024-01-17)));

        assert!(week.contains(week.start));
        assert!(week.contains(week.end));
        assert!(week.contains(PlanDate(date!(2024-01-18))));
        assert!(!week.contains(PlanDate(date!(2024-01-13))));
        assert!(!week.contains(PlanDate(date!(2024-01-21))));
    }
}
