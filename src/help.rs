use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    style::Style,
    text::Text,
    widgets::{Block, Clear, Paragraph, Widget},
};

static TEXT: &str = "\
h, l, LEFT, RIGHT    Move by one day\n\
k, j, UP, DOWN       Move by one week\n\
w, PAGE UP           Previous month\n\
z, PAGE DOWN         Next month\n\
0, HOME              Jump to today\n\
ENTER, SPACE         Pick the highlighted day\n\
?                    Show this help\n\
q, ESC               Quit\n\
\n\
Press any key to dismiss.";

/// Centered overlay listing the key bindings, drawn over the calendar in the
/// given base style.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::raw(TEXT);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.width);
        let para = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Keys ")
                    .title_alignment(Alignment::Center),
            )
            .style(self.0);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height]).flex(Flex::Center).areas(help_area);
        Clear.render(help_area, buf);
        para.render(help_area, buf);
    }
}
