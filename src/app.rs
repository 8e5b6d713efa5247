use crate::help::Help;
use crate::picker::{Period, PeriodListener, RangeCalendar, RangePicker};
use crate::theme::CalendarTheme;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::{Date, Duration};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<L> {
    picker: RangePicker<L>,
    cursor: Date,
    theme: CalendarTheme,
    state: AppState,
}

impl<L: PeriodListener> App<L> {
    pub(crate) fn new(picker: RangePicker<L>, theme: CalendarTheme) -> App<L> {
        let cursor = picker.bounds().clamp(picker.today());
        App {
            picker,
            cursor,
            theme,
            state: AppState::Picking,
        }
    }

    /// Runs the event loop until the user quits, then reports the selected
    /// period, if any.
    pub(crate) fn run<B: Backend>(
        mut self,
        terminal: &mut Terminal<B>,
    ) -> io::Result<Option<Period>> {
        while !self.quitting() {
            self.draw(terminal)?;
            self.handle_input()?;
        }
        Ok(self.picker.period())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Picking => match key {
                KeyCode::Char('h') | KeyCode::Left => self.move_cursor(-1),
                KeyCode::Char('l') | KeyCode::Right => self.move_cursor(1),
                KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-7),
                KeyCode::Char('j') | KeyCode::Down => self.move_cursor(7),
                KeyCode::Char('w') | KeyCode::PageUp => self.month_backwards(),
                KeyCode::Char('z') | KeyCode::PageDown => self.month_forwards(),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.reset();
                    true
                }
                KeyCode::Char(' ') | KeyCode::Enter => self.tap(),
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Picking;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn move_cursor(&mut self, days: i64) -> bool {
        let Some(moved) = self.cursor.checked_add(Duration::days(days)) else {
            return false;
        };
        let moved = self.picker.bounds().clamp(moved);
        if moved == self.cursor {
            return false;
        }
        self.cursor = moved;
        self.picker.reveal(moved);
        true
    }

    fn month_forwards(&mut self) -> bool {
        if self.picker.month_forwards().is_ok() {
            self.snap_cursor();
            true
        } else {
            false
        }
    }

    fn month_backwards(&mut self) -> bool {
        if self.picker.month_backwards().is_ok() {
            self.snap_cursor();
            true
        } else {
            false
        }
    }

    // Keeps the cursor on a visible, selectable day after a month jump
    fn snap_cursor(&mut self) {
        let [first, second] = self.picker.months();
        if self.cursor < first.first() {
            self.cursor = self.picker.bounds().clamp(first.first());
        } else if second.last() < self.cursor {
            self.cursor = self.picker.bounds().clamp(second.last());
        }
    }

    fn reset(&mut self) {
        self.picker.jump_to_today();
        self.cursor = self.picker.bounds().clamp(self.picker.today());
    }

    fn tap(&mut self) -> bool {
        if !self.picker.bounds().admits(self.cursor) {
            return false;
        }
        self.picker.tap(self.cursor);
        true
    }
}

impl<L: PeriodListener> Widget for &mut App<L> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.base);
        let cal = RangeCalendar::new(&self.theme, self.cursor);
        cal.render(area, buf, &mut self.picker);
        if self.state == AppState::Helping {
            Help(self.theme.base).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Picking,
    Helping,
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::DateBounds;
    use std::cell::RefCell;
    use std::rc::Rc;
    use time::macros::date;

    fn sink(_: Period) {}

    #[test]
    fn test_render_two_months() {
        let today = date!(2024 - 01 - 22);
        let bounds =
            DateBounds::new(Some(date!(2024 - 01 - 01)), Some(date!(2024 - 02 - 15))).unwrap();
        let picker = RangePicker::new(today, bounds, sink)
            .with_period(Period::new(date!(2024 - 01 - 05), date!(2024 - 01 - 10)));
        let theme = CalendarTheme::default();
        let mut app = App::new(picker, theme);
        let area = Rect::new(0, 0, 59, 8);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "        January 2024                  February 2024        ",
            " Su  Mo  Tu  We  Th  Fr  Sa     Su  Mo  Tu  We  Th  Fr  Sa ",
            "────────────────────────────   ────────────────────────────",
            "      1   2   3   4   5   6                      1   2   3 ",
            "  7   8   9  10  11  12  13      4   5   6   7   8   9  10 ",
            " 14  15  16  17  18  19  20     11  12  13  14  15  16  17 ",
            " 21 [22] 23  24  25  26  27     18  19  20  21  22  23  24 ",
            " 28  29  30  31                 25  26  27  28  29         ",
        ]);
        expected.set_style(*expected.area(), theme.base);
        expected.set_style(Rect::new(8, 0, 12, 1), theme.title);
        expected.set_style(Rect::new(38, 0, 13, 1), theme.title);
        for x in [1, 5, 9, 13, 17, 21, 25, 32, 36, 40, 44, 48, 52, 56] {
            expected.set_style(Rect::new(x, 1, 2, 1), theme.day_names);
        }
        expected.set_style(Rect::new(4, 3, 16, 1), theme.default_day);
        expected.set_style(Rect::new(20, 3, 4, 1), theme.selected);
        expected.set_style(Rect::new(24, 3, 4, 1), theme.in_range);
        expected.set_style(Rect::new(0, 4, 12, 1), theme.in_range);
        expected.set_style(Rect::new(12, 4, 4, 1), theme.selected);
        expected.set_style(Rect::new(16, 4, 12, 1), theme.default_day);
        expected.set_style(Rect::new(0, 5, 28, 1), theme.default_day);
        expected.set_style(Rect::new(0, 6, 4, 1), theme.default_day);
        expected.set_style(Rect::new(4, 6, 4, 1), theme.today);
        expected.set_style(Rect::new(8, 6, 20, 1), theme.default_day);
        expected.set_style(Rect::new(0, 7, 16, 1), theme.default_day);
        expected.set_style(Rect::new(47, 3, 12, 1), theme.default_day);
        expected.set_style(Rect::new(31, 4, 28, 1), theme.default_day);
        expected.set_style(Rect::new(31, 5, 20, 1), theme.default_day);
        expected.set_style(Rect::new(51, 5, 8, 1), theme.disabled);
        expected.set_style(Rect::new(31, 6, 28, 1), theme.disabled);
        expected.set_style(Rect::new(31, 7, 20, 1), theme.disabled);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_tap_flow_notifies_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let bounds =
            DateBounds::new(Some(date!(2024 - 01 - 01)), Some(date!(2024 - 01 - 31))).unwrap();
        let picker = RangePicker::new(date!(2024 - 01 - 22), bounds, {
            let log = Rc::clone(&log);
            move |p: Period| log.borrow_mut().push(p)
        });
        let mut app = App::new(picker, CalendarTheme::default());
        assert!(app.handle_key(KeyCode::Enter));
        assert!(app.handle_key(KeyCode::Right));
        assert!(app.handle_key(KeyCode::Right));
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(
            *log.borrow(),
            vec![Period::new(date!(2024 - 01 - 22), date!(2024 - 01 - 24))]
        );
    }

    #[test]
    fn test_cursor_stops_at_bounds() {
        let bounds =
            DateBounds::new(Some(date!(2024 - 01 - 20)), Some(date!(2024 - 01 - 24))).unwrap();
        let picker = RangePicker::new(date!(2024 - 01 - 22), bounds, sink);
        let mut app = App::new(picker, CalendarTheme::default());
        assert!(app.handle_key(KeyCode::Right));
        assert!(app.handle_key(KeyCode::Right));
        assert!(!app.handle_key(KeyCode::Right));
        assert_eq!(app.cursor, date!(2024 - 01 - 24));
        assert!(!app.handle_key(KeyCode::Down));
        assert!(app.handle_key(KeyCode::Up));
        assert_eq!(app.cursor, date!(2024 - 01 - 20));
    }

    #[test]
    fn test_month_navigation_stops_at_bounds() {
        let bounds =
            DateBounds::new(Some(date!(2024 - 01 - 10)), Some(date!(2024 - 02 - 20))).unwrap();
        let picker = RangePicker::new(date!(2024 - 01 - 22), bounds, sink);
        let mut app = App::new(picker, CalendarTheme::default());
        assert!(app.handle_key(KeyCode::PageDown));
        assert!(!app.handle_key(KeyCode::PageDown));
        assert!(app.handle_key(KeyCode::PageUp));
        assert!(!app.handle_key(KeyCode::PageUp));
    }

    #[test]
    fn test_help_dismisses_on_any_key() {
        let picker = RangePicker::new(date!(2024 - 01 - 22), DateBounds::default(), sink);
        let mut app = App::new(picker, CalendarTheme::default());
        assert!(app.handle_key(KeyCode::Char('?')));
        assert_eq!(app.state, AppState::Helping);
        assert!(app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Picking);
    }
}
