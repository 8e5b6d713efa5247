use time::{Date, Month};

pub(super) const DAYS_IN_WEEK: usize = 7;

/// The weeks of one calendar month, Sunday-first.  Leading and trailing cells
/// that belong to the neighboring months are `None`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    first: Date,
    weeks: Vec<[Option<Date>; DAYS_IN_WEEK]>,
}

impl MonthGrid {
    /// Builds the grid for the month containing `date`.
    pub(crate) fn for_month(date: Date) -> MonthGrid {
        let first = first_of_month(date);
        let offset = usize::from(first.weekday().number_days_from_sunday());
        let length = usize::from(first.month().length(first.year()));
        let mut weeks = Vec::with_capacity((offset + length).div_ceil(DAYS_IN_WEEK));
        let mut week = [None; DAYS_IN_WEEK];
        let mut slot = offset;
        let mut day = first;
        for _ in 0..length {
            week[slot] = Some(day);
            slot += 1;
            if slot == DAYS_IN_WEEK {
                weeks.push(week);
                week = [None; DAYS_IN_WEEK];
                slot = 0;
            }
            match day.next_day() {
                Some(d) => day = d,
                None => break,
            }
        }
        if slot > 0 {
            weeks.push(week);
        }
        MonthGrid { first, weeks }
    }

    pub(crate) fn first(&self) -> Date {
        self.first
    }

    pub(crate) fn last(&self) -> Date {
        let length = self.first.month().length(self.first.year());
        self.first.replace_day(length).unwrap_or(self.first)
    }

    pub(crate) fn year(&self) -> i32 {
        self.first.year()
    }

    pub(crate) fn month(&self) -> Month {
        self.first.month()
    }

    pub(crate) fn weeks(&self) -> &[[Option<Date>; DAYS_IN_WEEK]] {
        &self.weeks
    }
}

pub(super) fn first_of_month(date: Date) -> Date {
    date.replace_day(1).unwrap_or(date)
}

/// First day of the month after `date`'s, if representable.
pub(super) fn next_month(date: Date) -> Option<Date> {
    let (year, month) = match date.month() {
        Month::December => (date.year() + 1, Month::January),
        m => (date.year(), m.next()),
    };
    Date::from_calendar_date(year, month, 1).ok()
}

/// First day of the month before `date`'s, if representable.
pub(super) fn prev_month(date: Date) -> Option<Date> {
    let (year, month) = match date.month() {
        Month::January => (date.year() - 1, Month::December),
        m => (date.year(), m.previous()),
    };
    Date::from_calendar_date(year, month, 1).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_january_2024() {
        // Starts on a Monday and spans five weeks
        let grid = MonthGrid::for_month(date!(2024 - 01 - 15));
        assert_eq!(grid.first(), date!(2024 - 01 - 01));
        assert_eq!(grid.last(), date!(2024 - 01 - 31));
        assert_eq!(grid.weeks().len(), 5);
        let w0 = grid.weeks()[0];
        assert_eq!(w0[0], None);
        assert_eq!(w0[1], Some(date!(2024 - 01 - 01)));
        assert_eq!(w0[6], Some(date!(2024 - 01 - 06)));
        let w4 = grid.weeks()[4];
        assert_eq!(w4[0], Some(date!(2024 - 01 - 28)));
        assert_eq!(w4[3], Some(date!(2024 - 01 - 31)));
        assert_eq!(w4[4], None);
    }

    #[test]
    fn test_june_2024_spans_six_weeks() {
        // June 1, 2024 is a Saturday
        let grid = MonthGrid::for_month(date!(2024 - 06 - 01));
        assert_eq!(grid.weeks().len(), 6);
        assert_eq!(grid.weeks()[0][6], Some(date!(2024 - 06 - 01)));
        assert_eq!(grid.weeks()[5][0], Some(date!(2024 - 06 - 30)));
        assert_eq!(grid.weeks()[5][1], None);
    }

    #[test]
    fn test_february_2026_fills_exactly_four_weeks() {
        // February 1, 2026 is a Sunday and the month has 28 days
        let grid = MonthGrid::for_month(date!(2026 - 02 - 14));
        assert_eq!(grid.weeks().len(), 4);
        assert_eq!(grid.weeks()[0][0], Some(date!(2026 - 02 - 01)));
        assert_eq!(grid.weeks()[3][6], Some(date!(2026 - 02 - 28)));
    }

    #[test]
    fn test_leap_february() {
        let grid = MonthGrid::for_month(date!(2024 - 02 - 01));
        assert_eq!(grid.last(), date!(2024 - 02 - 29));
    }

    #[test]
    fn test_next_month_across_year() {
        assert_eq!(next_month(date!(2024 - 12 - 15)), Some(date!(2025 - 01 - 01)));
        assert_eq!(next_month(date!(2024 - 01 - 31)), Some(date!(2024 - 02 - 01)));
    }

    #[test]
    fn test_prev_month_across_year() {
        assert_eq!(prev_month(date!(2024 - 01 - 15)), Some(date!(2023 - 12 - 01)));
        assert_eq!(prev_month(date!(2024 - 03 - 01)), Some(date!(2024 - 02 - 01)));
    }
}
