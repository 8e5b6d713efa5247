use thiserror::Error;
use time::Date;

/// An inclusive date range.
///
/// Construction orders the endpoints, so `start() <= end()` always holds; a
/// period covering a single day has `start() == end()`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Period {
    start: Date,
    end: Date,
}

impl Period {
    /// Creates a period from two days in either order.  The days are swapped
    /// rather than rejected, as users tap range endpoints in whatever order
    /// they please.
    pub(crate) fn new(a: Date, b: Date) -> Period {
        if a <= b {
            Period { start: a, end: b }
        } else {
            Period { start: b, end: a }
        }
    }

    pub(crate) fn start(self) -> Date {
        self.start
    }

    pub(crate) fn end(self) -> Date {
        self.end
    }

    pub(crate) fn is_single_day(self) -> bool {
        self.start == self.end
    }

    /// True for days strictly between the endpoints.
    pub(crate) fn surrounds(self, day: Date) -> bool {
        self.start < day && day < self.end
    }
}

/// The window of selectable dates, inclusive on both ends.  An unset side is
/// unbounded.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct DateBounds {
    min: Option<Date>,
    max: Option<Date>,
}

impl DateBounds {
    /// Fails fast on an inverted window instead of silently disabling every
    /// day.
    pub(crate) fn new(min: Option<Date>, max: Option<Date>) -> Result<DateBounds, BoundsError> {
        match (min, max) {
            (Some(lo), Some(hi)) if lo > hi => Err(BoundsError { min: lo, max: hi }),
            _ => Ok(DateBounds { min, max }),
        }
    }

    /// Whether `day` may be selected.
    pub(crate) fn admits(&self, day: Date) -> bool {
        self.min.map_or(true, |lo| lo <= day) && self.max.map_or(true, |hi| day <= hi)
    }

    /// The selectable day closest to `day`.
    pub(crate) fn clamp(&self, day: Date) -> Date {
        if let Some(lo) = self.min {
            if day < lo {
                return lo;
            }
        }
        if let Some(hi) = self.max {
            if day > hi {
                return hi;
            }
        }
        day
    }

    pub(crate) fn min(&self) -> Option<Date> {
        self.min
    }

    pub(crate) fn max(&self) -> Option<Date> {
        self.max
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("minimum date {min} is after maximum date {max}")]
pub(crate) struct BoundsError {
    min: Date,
    max: Date,
}
