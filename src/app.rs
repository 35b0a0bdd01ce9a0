use crate::error::Result;
use crate::logic::{season_options, GardenAdvisor, SeasonOption};
use crate::models::{Advice, PlantOption};
use crate::output::AdvicePresenter;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Season,
    Plant,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Season => FormField::Plant,
            FormField::Plant => FormField::Season,
        }
    }
}

/// What the output region currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputPanel {
    Hidden,
    Advice(Advice),
    Error(String),
}

pub struct App {
    pub should_quit: bool,
    pub advisor: Arc<GardenAdvisor>,

    pub focused_field: FormField,
    pub season_options: Vec<SeasonOption>,
    pub season_index: usize,
    pub plant_options: Vec<PlantOption>,
    pub plant_index: usize,
    pub output: OutputPanel,
}

impl App {
    pub fn new(advisor: Arc<GardenAdvisor>) -> Self {
        let season_options = season_options(advisor.knowledge().edition());
        let plant_options = advisor.plant_options("");

        Self {
            should_quit: false,
            advisor,
            focused_field: FormField::Season,
            season_options,
            season_index: 0,
            plant_options,
            plant_index: 0,
            output: OutputPanel::Hidden,
        }
    }

    /// Preselect a season, as if the user picked it.
    pub fn with_season(mut self, season: &str) -> Self {
        let wanted = season.to_lowercase();
        if let Some(index) = self.season_options.iter().position(|o| o.value == wanted) {
            self.season_index = index;
            self.on_season_changed();
        }
        self
    }

    pub fn season_value(&self) -> &str {
        self.season_options
            .get(self.season_index)
            .map(|o| o.value.as_str())
            .unwrap_or_default()
    }

    pub fn plant_value(&self) -> &str {
        self.plant_options
            .get(self.plant_index)
            .map(PlantOption::value)
            .unwrap_or_default()
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn next_option(&mut self) {
        match self.focused_field {
            FormField::Season => {
                if self.season_index + 1 < self.season_options.len() {
                    self.season_index += 1;
                    self.on_season_changed();
                }
            }
            FormField::Plant => {
                if let Some(index) = (self.plant_index + 1..self.plant_options.len())
                    .find(|&i| self.plant_options[i].is_selectable())
                {
                    self.plant_index = index;
                }
            }
        }
    }

    pub fn prev_option(&mut self) {
        match self.focused_field {
            FormField::Season => {
                if self.season_index > 0 {
                    self.season_index -= 1;
                    self.on_season_changed();
                }
            }
            FormField::Plant => {
                if let Some(index) = (0..self.plant_index)
                    .rev()
                    .find(|&i| self.plant_options[i].is_selectable())
                {
                    self.plant_index = index;
                }
            }
        }
    }

    /// Season changed: offer that season's plants, reset the plant choice and
    /// hide whatever was shown before.
    fn on_season_changed(&mut self) {
        let season = self.season_value().to_string();
        self.plant_options = self.advisor.plant_options(&season);
        self.plant_index = 0;
        self.output = OutputPanel::Hidden;
        tracing::debug!(season = %season, options = self.plant_options.len(), "Season changed");
    }

    pub fn submit(&mut self) -> Result<()> {
        let season = self.season_value().to_string();
        let plant_type = self.plant_value().to_string();
        let advisor = Arc::clone(&self.advisor);
        advisor.present(&season, &plant_type, self)
    }

    pub fn clear_output(&mut self) {
        self.output = OutputPanel::Hidden;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl AdvicePresenter for App {
    fn render(&mut self, advice: &Advice) -> Result<()> {
        self.output = OutputPanel::Advice(advice.clone());
        Ok(())
    }

    fn render_error(&mut self, message: &str) -> Result<()> {
        self.output = OutputPanel::Error(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::KnowledgeBase;
    use crate::models::Edition;

    fn app() -> App {
        App::new(Arc::new(GardenAdvisor::new(Arc::new(KnowledgeBase::new(
            Edition::Regional,
        )))))
    }

    #[test]
    fn starts_on_placeholders() {
        let app = app();
        assert_eq!(app.season_value(), "");
        assert_eq!(app.plant_value(), "");
        assert_eq!(app.plant_options.len(), 5);
        assert_eq!(app.output, OutputPanel::Hidden);
    }

    #[test]
    fn submitting_placeholders_shows_season_error() {
        let mut app = app();
        app.submit().unwrap();
        assert_eq!(
            app.output,
            OutputPanel::Error(
                "Please pick a valid season: spring, summer, autumn, winter".into()
            )
        );
    }

    #[test]
    fn choosing_a_season_loads_regional_plants() {
        let mut app = app();
        app.next_option();
        assert_eq!(app.season_value(), "spring");
        assert_eq!(app.plant_options.len(), 8);
        assert_eq!(app.plant_index, 0);
    }

    #[test]
    fn plant_navigation_skips_separator() {
        let mut app = app().with_season("winter");
        app.next_field();
        for _ in 0..4 {
            app.next_option();
        }
        assert_eq!(app.plant_value(), "tree");

        app.next_option();
        assert_eq!(app.plant_value(), "buchu");

        app.prev_option();
        assert_eq!(app.plant_value(), "tree");

        app.next_option();
        app.next_option();
        app.next_option();
        assert_eq!(app.plant_value(), "cycad");
    }

    #[test]
    fn submit_renders_advice_card() {
        let mut app = app().with_season("winter");
        app.next_field();
        for _ in 0..5 {
            app.next_option();
        }
        app.submit().unwrap();

        match &app.output {
            OutputPanel::Advice(advice) => {
                assert_eq!(advice.season, "winter");
                assert_eq!(advice.plant_type, "buchu");
                assert!(advice.text.contains("🌿 BUCHU TIPS (WINTER):"));
            }
            other => panic!("expected advice, got {:?}", other),
        }
    }

    #[test]
    fn season_change_hides_output_and_resets_plant() {
        let mut app = app().with_season("spring");
        app.next_field();
        app.next_option();
        app.submit().unwrap();
        assert!(matches!(app.output, OutputPanel::Advice(_)));

        app.next_field();
        app.next_option();
        assert_eq!(app.season_value(), "summer");
        assert_eq!(app.output, OutputPanel::Hidden);
        assert_eq!(app.plant_index, 0);
        assert_eq!(app.plant_options[6].value(), "imphepho");
    }

    #[test]
    fn selecting_placeholder_plant_shows_plant_error() {
        let mut app = app().with_season("autumn");
        app.submit().unwrap();
        assert_eq!(
            app.output,
            OutputPanel::Error("Please pick a plant from the list".into())
        );
    }

    #[test]
    fn clear_and_quit() {
        let mut app = app().with_season("summer");
        app.output = OutputPanel::Error("x".into());
        app.clear_output();
        assert_eq!(app.output, OutputPanel::Hidden);
        app.quit();
        assert!(app.should_quit);
    }
}
