use crate::models::PlantOption;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Bordered list of plant options with the current choice highlighted.
pub struct OptionListWidget<'a> {
    title: &'a str,
    options: &'a [PlantOption],
    selected: usize,
    focused: bool,
}

impl<'a> OptionListWidget<'a> {
    pub fn new(title: &'a str, options: &'a [PlantOption]) -> Self {
        Self {
            title,
            options,
            selected: 0,
            focused: false,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for OptionListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Theme::border_focused()
        } else {
            Theme::border()
        };

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let base = match option {
                    PlantOption::Placeholder => Theme::dim(),
                    PlantOption::Separator { .. } => Theme::separator(),
                    PlantOption::Regional { .. } => Theme::regional(),
                    PlantOption::Category { .. } => Style::default(),
                };

                let style = if i == self.selected {
                    Theme::selected()
                } else {
                    base
                };

                ListItem::new(option.label().to_string()).style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
