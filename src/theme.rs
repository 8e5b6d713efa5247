use crate::picker::DayState;
use ratatui::style::{Color, Modifier, Style};

/// Visual configuration for the calendar.  A theme is plain data: build one,
/// hand it to the app, and it is never mutated afterwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CalendarTheme {
    /// Base style applied to the whole widget area
    pub(crate) base: Style,
    /// Month-and-year title above each month
    pub(crate) title: Style,
    /// The Su..Sa header row
    pub(crate) day_names: Style,
    /// Endpoints of the selected period, including a single-day period and
    /// the provisional anchor day
    pub(crate) selected: Style,
    /// Days strictly between the period's endpoints
    pub(crate) in_range: Style,
    /// Today's date, when not part of the selection
    pub(crate) today: Style,
    /// Days outside the configured min/max window
    pub(crate) disabled: Style,
    /// Any other day
    pub(crate) default_day: Style,
    /// Width of one day cell in columns; at least 4, so that the cursor
    /// brackets fit around a two-digit day
    pub(crate) tile_width: u16,
}

/// White on black with a light-blue selection and four-column tiles.
pub(crate) const DEFAULT: CalendarTheme = CalendarTheme {
    base: Style::new().fg(Color::White).bg(Color::Black),
    title: Style::new()
        .fg(Color::White)
        .bg(Color::Black)
        .add_modifier(Modifier::BOLD),
    day_names: Style::new().fg(Color::DarkGray).bg(Color::Black),
    selected: Style::new()
        .fg(Color::Black)
        .bg(Color::LightBlue)
        .add_modifier(Modifier::BOLD),
    in_range: Style::new().fg(Color::LightBlue).bg(Color::Black),
    today: Style::new().fg(Color::LightRed).bg(Color::Black),
    disabled: Style::new().fg(Color::DarkGray).bg(Color::Black),
    default_day: Style::new().fg(Color::White).bg(Color::Black),
    tile_width: 4,
};

impl Default for CalendarTheme {
    fn default() -> CalendarTheme {
        DEFAULT
    }
}

impl CalendarTheme {
    pub(crate) fn day_style(&self, state: DayState) -> Style {
        match state {
            DayState::Disabled => self.disabled,
            DayState::RangeStart | DayState::RangeEnd | DayState::SingleDay => self.selected,
            DayState::InRange => self.in_range,
            DayState::Today => self.today,
            DayState::Default => self.default_day,
        }
    }
}
