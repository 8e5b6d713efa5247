mod month;
mod period;
mod select;
mod widget;
pub(crate) use self::period::{DateBounds, Period};
pub(crate) use self::select::{DayState, RangePicker};
pub(crate) use self::widget::RangeCalendar;

/// Receiver for completed selections.  The picker calls this synchronously,
/// exactly once per completing tap.
pub(crate) trait PeriodListener {
    fn period_changed(&mut self, period: Period);
}

impl<F: FnMut(Period)> PeriodListener for F {
    fn period_changed(&mut self, period: Period) {
        self(period);
    }
}
