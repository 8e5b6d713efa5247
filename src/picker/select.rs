use super::month::{first_of_month, next_month, prev_month, MonthGrid};
use super::period::{DateBounds, Period};
use super::PeriodListener;
use thiserror::Error;
use time::Date;

/// Progress of the two-tap selection protocol.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Selection {
    Empty,
    Anchor(Date),
    Complete(Period),
}

impl Selection {
    pub(crate) fn period(&self) -> Option<Period> {
        match *self {
            Selection::Complete(p) => Some(p),
            Selection::Empty | Selection::Anchor(_) => None,
        }
    }
}

/// Semantic classification of a day cell, used to pick its style.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DayState {
    Disabled,
    RangeStart,
    RangeEnd,
    SingleDay,
    InRange,
    Today,
    Default,
}

impl DayState {
    /// Classifies `day` for presentation.  First match wins: days outside
    /// the bounds stay disabled even when inside a selected range, endpoints
    /// trump the range interior, and "today" shows only on otherwise plain
    /// cells.  A lone anchor classifies as [`DayState::SingleDay`], it being
    /// a provisional endpoint.
    pub(crate) fn classify(
        day: Date,
        selection: &Selection,
        bounds: &DateBounds,
        today: Date,
    ) -> DayState {
        if !bounds.admits(day) {
            return DayState::Disabled;
        }
        match *selection {
            Selection::Anchor(anchor) if day == anchor => return DayState::SingleDay,
            Selection::Complete(p) if p.is_single_day() && day == p.start() => {
                return DayState::SingleDay;
            }
            Selection::Complete(p) if day == p.start() => return DayState::RangeStart,
            Selection::Complete(p) if day == p.end() => return DayState::RangeEnd,
            Selection::Complete(p) if p.surrounds(day) => return DayState::InRange,
            _ => (),
        }
        if day == today {
            DayState::Today
        } else {
            DayState::Default
        }
    }
}

/// The date-range selection controller: one anchor month (the left of the
/// two visible months) plus the selection in progress.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RangePicker<L> {
    today: Date,
    bounds: DateBounds,
    selection: Selection,
    anchor_month: Date,
    listener: L,
}

impl<L: PeriodListener> RangePicker<L> {
    pub(crate) fn new(today: Date, bounds: DateBounds, listener: L) -> RangePicker<L> {
        RangePicker {
            today,
            bounds,
            selection: Selection::Empty,
            anchor_month: first_of_month(bounds.clamp(today)),
            listener,
        }
    }

    /// Seeds the picker with an already-selected period.  The next tap starts
    /// a new selection, as if the user had picked the period themselves.
    pub(crate) fn with_period(mut self, period: Period) -> RangePicker<L> {
        self.selection = Selection::Complete(period);
        self
    }

    /// Sets the left visible month to the one containing `date`, clamped to
    /// the bounds' months.
    pub(crate) fn displayed_date(mut self, date: Date) -> RangePicker<L> {
        self.anchor_month = first_of_month(self.bounds.clamp(date));
        self
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    pub(crate) fn selection(&self) -> &Selection {
        &self.selection
    }

    pub(crate) fn period(&self) -> Option<Period> {
        self.selection.period()
    }

    /// The two visible months, left to right.  The right month is always
    /// derived from the left one, never stored.
    pub(crate) fn months(&self) -> [MonthGrid; 2] {
        let second = next_month(self.anchor_month).unwrap_or(self.anchor_month);
        [
            MonthGrid::for_month(self.anchor_month),
            MonthGrid::for_month(second),
        ]
    }

    /// Applies one tap of the two-tap protocol.  Taps on days outside the
    /// bounds do nothing.  The first tap anchors a selection (discarding any
    /// completed one), the second completes it; tapping the anchor itself
    /// completes a single-day period.  Returns the period when this tap
    /// completed one, after the listener has been told about it.
    pub(crate) fn tap(&mut self, day: Date) -> Option<Period> {
        if !self.bounds.admits(day) {
            return None;
        }
        match self.selection {
            Selection::Empty | Selection::Complete(_) => {
                self.selection = Selection::Anchor(day);
                None
            }
            Selection::Anchor(anchor) => {
                let period = Period::new(anchor, day);
                self.selection = Selection::Complete(period);
                self.listener.period_changed(period);
                Some(period)
            }
        }
    }

    pub(crate) fn day_state(&self, day: Date) -> DayState {
        DayState::classify(day, &self.selection, &self.bounds, self.today)
    }

    /// Shifts the view one month later.  The anchor month never moves past
    /// the maximum date's month.
    pub(crate) fn month_forwards(&mut self) -> Result<(), OutOfRangeError> {
        let next = next_month(self.anchor_month).ok_or(OutOfRangeError)?;
        if let Some(hi) = self.bounds.max() {
            if next > hi {
                return Err(OutOfRangeError);
            }
        }
        self.anchor_month = next;
        Ok(())
    }

    /// Shifts the view one month earlier.  The anchor month never moves
    /// before the minimum date's month.
    pub(crate) fn month_backwards(&mut self) -> Result<(), OutOfRangeError> {
        let prev = prev_month(self.anchor_month).ok_or(OutOfRangeError)?;
        if let Some(lo) = self.bounds.min() {
            if prev < first_of_month(lo) {
                return Err(OutOfRangeError);
            }
        }
        self.anchor_month = prev;
        Ok(())
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.anchor_month = first_of_month(self.bounds.clamp(self.today));
    }

    /// Scrolls just enough for `day` to land on one of the two visible
    /// months.
    pub(crate) fn reveal(&mut self, day: Date) {
        let [first, second] = self.months();
        if day < first.first() {
            self.anchor_month = first_of_month(day);
        } else if second.last() < day {
            let month = first_of_month(day);
            self.anchor_month = prev_month(month).unwrap_or(month);
        }
    }
}

/// Navigation would leave the configured date window or the range of
/// representable dates.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no more months in that direction")]
pub(crate) struct OutOfRangeError;
