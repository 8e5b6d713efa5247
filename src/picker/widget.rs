use super::month::{MonthGrid, DAYS_IN_WEEK};
use super::select::RangePicker;
use super::PeriodListener;
use crate::theme::CalendarTheme;
use ratatui::{prelude::*, widgets::*};
use std::marker::PhantomData;
use time::Date;

static DAY_NAMES: [&str; DAYS_IN_WEEK] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Columns between the two month panes
const GUTTER: u16 = 3;

/// Lines taken up by the title, the weekday names, and the rule under them
const HEADER_LINES: u16 = 3;

const ACS_HLINE: char = '─';

/// Renders a picker's two visible months side by side.  All visual mapping
/// lives here and in the theme; the picker itself only hands out day states.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct RangeCalendar<'a, L> {
    theme: &'a CalendarTheme,
    cursor: Date,
    _listener: PhantomData<L>,
}

impl<'a, L> RangeCalendar<'a, L> {
    pub(crate) fn new(theme: &'a CalendarTheme, cursor: Date) -> RangeCalendar<'a, L> {
        RangeCalendar {
            theme,
            cursor,
            _listener: PhantomData,
        }
    }

    fn month_width(&self) -> u16 {
        let days = u16::try_from(DAYS_IN_WEEK).unwrap_or(7);
        self.theme.tile_width * days
    }
}

impl<L: PeriodListener> StatefulWidget for RangeCalendar<'_, L> {
    type State = RangePicker<L>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let total = self.month_width() * 2 + GUTTER;
        let left = area.width.saturating_sub(total) / 2;
        let months = state.months();
        for (i, grid) in std::iter::zip(0u16.., &months) {
            let x = left + i * (self.month_width() + GUTTER);
            let pane = Rect {
                x: area.x + x,
                y: area.y,
                width: self.month_width().min(area.width.saturating_sub(x)),
                height: area.height,
            };
            self.draw_month(grid, state, pane, buf);
        }
    }
}

impl<L: PeriodListener> RangeCalendar<'_, L> {
    fn draw_month(&self, grid: &MonthGrid, state: &RangePicker<L>, area: Rect, buf: &mut Buffer) {
        let tile = self.theme.tile_width;
        let width = self.month_width();
        let title = format!("{} {}", grid.month(), grid.year());
        let indent = width.saturating_sub(u16::try_from(title.len()).unwrap_or(u16::MAX)) / 2;
        print_at(buf, area, 0, indent, &title, self.theme.title);
        for (i, name) in std::iter::zip(0u16.., DAY_NAMES) {
            print_at(buf, area, 1, i * tile + 1, name, self.theme.day_names);
        }
        let rule = String::from(ACS_HLINE).repeat(usize::from(width));
        print_at(buf, area, 2, 0, &rule, self.theme.base);
        for (row, week) in std::iter::zip(0u16.., grid.weeks()) {
            for (col, cell) in std::iter::zip(0u16.., week) {
                let Some(day) = *cell else {
                    continue;
                };
                let text = if day == self.cursor {
                    format!("[{:>2}]", day.day())
                } else {
                    format!(" {:>2} ", day.day())
                };
                let style = self.theme.day_style(state.day_state(day));
                print_at(buf, area, row + HEADER_LINES, col * tile, &text, style);
            }
        }
    }
}

fn print_at(buf: &mut Buffer, area: Rect, y: u16, x: u16, s: &str, style: Style) {
    if y < area.height && x < area.width {
        let text = Text::styled(s, style);
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        // A Paragraph truncates text that would run past the pane, though the
        // Rect handed to it must stay inside the frame lest a panic result.
        Paragraph::new(text).render(
            Rect {
                x: x + area.x,
                y: y + area.y,
                width: (area.width - x).min(width),
                height: 1,
            },
            buf,
        );
    }
}
