use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Single-line picker showing the current choice, `< value >` when focused.
pub struct SelectWidget<'a> {
    label: &'a str,
    value: &'a str,
    focused: bool,
    value_style: Option<Style>,
}

impl<'a> SelectWidget<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            value_style: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn value_style(mut self, style: Style) -> Self {
        self.value_style = Some(style);
        self
    }
}

impl Widget for SelectWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Theme::border_focused()
        } else {
            Theme::border()
        };

        let block = Block::default()
            .title(self.label)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let display = if self.focused {
            format!("< {} >", self.value)
        } else {
            self.value.to_string()
        };

        let style = match (self.focused, self.value_style) {
            (true, _) => Theme::highlight(),
            (false, Some(style)) => style,
            (false, None) => Theme::normal(),
        };

        let para = Paragraph::new(Span::styled(display, style));
        para.render(inner, buf);
    }
}
