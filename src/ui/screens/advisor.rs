use crate::app::{App, FormField, OutputPanel};
use crate::models::{Advice, Edition};
use crate::ui::components::{OptionListWidget, SelectWidget};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// The advice form: season picker and plant list on the left, the advice or
/// error card on the right.
pub struct AdvisorScreen<'a> {
    pub app: &'a App,
}

impl<'a> AdvisorScreen<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    fn edition(&self) -> Edition {
        self.app.advisor.knowledge().edition()
    }
}

impl Widget for AdvisorScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Nav
            ])
            .split(area);

        // Title
        let title = Line::from(vec![
            Span::styled(self.edition().banner_title(), Theme::title()),
            Span::styled(format!("  ({} edition)", self.edition()), Theme::dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        // Content: form on left, output on right
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        self.render_form(content[0], buf);
        self.render_output(content[1], buf);

        // Navigation
        let nav = Line::from(vec![
            Span::styled("[Tab]", Theme::nav_key()),
            Span::styled("Switch field ", Theme::nav_label()),
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Choose ", Theme::nav_label()),
            Span::styled("[Enter]", Theme::nav_key()),
            Span::styled("Get advice ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Clear ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[2], buf);
    }
}

impl AdvisorScreen<'_> {
    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        let app = self.app;
        let season_label = app
            .season_options
            .get(app.season_index)
            .map(|o| o.label.as_str())
            .unwrap_or_default();

        let mut season_select = SelectWidget::new("Season", season_label)
            .focused(app.focused_field == FormField::Season);
        if let Some(season) = self.edition().parse_season(app.season_value()) {
            season_select = season_select.value_style(Style::default().fg(Theme::season_color(season)));
        }
        season_select.render(rows[0], buf);

        OptionListWidget::new("Plant", &app.plant_options)
            .with_selection(app.plant_index)
            .focused(app.focused_field == FormField::Plant)
            .render(rows[1], buf);
    }

    fn render_output(&self, area: Rect, buf: &mut Buffer) {
        match &self.app.output {
            OutputPanel::Hidden => {
                let block = Block::default()
                    .title("Advice")
                    .borders(Borders::ALL)
                    .border_style(Theme::border());
                let inner = block.inner(area);
                block.render(area, buf);
                Paragraph::new(Span::styled(
                    "Pick a season and a plant, then press Enter",
                    Theme::dim(),
                ))
                .render(inner, buf);
            }
            OutputPanel::Advice(advice) => self.render_advice_card(advice, area, buf),
            OutputPanel::Error(message) => {
                let block = Block::default()
                    .title("❌ Oops!")
                    .borders(Borders::ALL)
                    .border_style(Theme::border_error());
                let inner = block.inner(area);
                block.render(area, buf);
                Paragraph::new(Span::styled(message.as_str(), Theme::error()))
                    .wrap(Wrap { trim: true })
                    .render(inner, buf);
            }
        }
    }

    fn render_advice_card(&self, advice: &Advice, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.edition().banner_title())
            .borders(Borders::ALL)
            .border_style(Theme::border_focused());
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Season: ", Theme::dim()),
                Span::styled(advice.season.as_str(), Theme::highlight()),
                Span::styled("  Plant: ", Theme::dim()),
                Span::styled(advice.plant_type.as_str(), Theme::highlight()),
            ]),
            Line::from(vec![]),
        ];

        for line in advice.text.lines() {
            let style = if line.starts_with('•') {
                Theme::normal()
            } else if line.is_empty() {
                Style::default()
            } else {
                Theme::header()
            };
            lines.push(Line::from(Span::styled(line, style)));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{GardenAdvisor, KnowledgeBase};
    use std::sync::Arc;

    fn app() -> App {
        App::new(Arc::new(GardenAdvisor::new(Arc::new(KnowledgeBase::new(
            Edition::Regional,
        )))))
    }

    fn render(app: &App) -> String {
        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        AdvisorScreen::new(app).render(area, &mut buf);

        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn hidden_output_shows_hint() {
        let screen = render(&app());
        assert!(screen.contains("Pick a season and a plant, then press Enter"));
        assert!(screen.contains("Choose a season..."));
        assert!(screen.contains("Choose a plant for this season..."));
    }

    #[test]
    fn regional_plants_listed_after_separator() {
        let screen = render(&app().with_season("autumn"));
        let separator = screen.find("--- South African Plants for autumn ---").unwrap();
        let protea = screen.find("Protea (Autumn flower)").unwrap();
        let trees = screen.find("Trees (General)").unwrap();
        assert!(trees < separator);
        assert!(separator < protea);
    }

    #[test]
    fn advice_card_after_submit() {
        let mut app = app().with_season("winter");
        app.next_field();
        for _ in 0..5 {
            app.next_option();
        }
        app.submit().unwrap();

        let screen = render(&app);
        assert!(screen.contains("WINTER GARDENING IN SOUTH AFRICA:"));
        assert!(screen.contains("BUCHU TIPS (WINTER):"));
        assert!(screen.contains("Plant: "));
    }

    #[test]
    fn error_card_after_invalid_submit() {
        let mut app = app();
        app.submit().unwrap();

        let screen = render(&app);
        assert!(screen.contains("Oops!"));
        assert!(screen.contains("Please pick a valid season"));
    }
}
