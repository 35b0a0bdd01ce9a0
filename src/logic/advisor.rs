use super::engine::AdvisoryEngine;
use super::knowledge::KnowledgeBase;
use super::options::plant_options;
use super::validator::InputValidator;
use crate::error::{InvalidInput, Result};
use crate::models::{Advice, PlantOption};
use crate::output::AdvicePresenter;
use std::sync::Arc;

/// Validate, advise, present.
///
/// Invalid input never leaves this type as an error: it is handed to the
/// presenter as a message. Only presenter I/O failures propagate.
pub struct GardenAdvisor {
    knowledge: Arc<KnowledgeBase>,
    engine: AdvisoryEngine,
    validator: InputValidator,
}

impl GardenAdvisor {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            engine: AdvisoryEngine::new(Arc::clone(&knowledge)),
            validator: InputValidator::new(Arc::clone(&knowledge)),
            knowledge,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn validator(&self) -> &InputValidator {
        &self.validator
    }

    pub fn advise(&self, season: &str, plant_type: &str) -> std::result::Result<Advice, InvalidInput> {
        self.validator.validate(season, plant_type)?;
        Ok(self.engine.advise(season, plant_type))
    }

    pub fn present(
        &self,
        season: &str,
        plant_type: &str,
        presenter: &mut dyn AdvicePresenter,
    ) -> Result<()> {
        match self.advise(season, plant_type) {
            Ok(advice) => {
                tracing::info!(season, plant_type, "Generated advice");
                presenter.render(&advice)
            }
            Err(invalid) => {
                tracing::info!(season, plant_type, field = ?invalid.field, "Rejected selection");
                presenter.render_error(&invalid.message)
            }
        }
    }

    pub fn plant_options(&self, season: &str) -> Vec<PlantOption> {
        plant_options(&self.knowledge, season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Edition;

    #[derive(Default)]
    struct Recorder {
        rendered: Vec<Advice>,
        errors: Vec<String>,
    }

    impl AdvicePresenter for Recorder {
        fn render(&mut self, advice: &Advice) -> Result<()> {
            self.rendered.push(advice.clone());
            Ok(())
        }

        fn render_error(&mut self, message: &str) -> Result<()> {
            self.errors.push(message.to_string());
            Ok(())
        }
    }

    fn advisor() -> GardenAdvisor {
        GardenAdvisor::new(Arc::new(KnowledgeBase::new(Edition::Regional)))
    }

    #[test]
    fn winter_buchu_end_to_end() {
        let mut recorder = Recorder::default();
        advisor().present("winter", "buchu", &mut recorder).unwrap();

        assert!(recorder.errors.is_empty());
        let text = &recorder.rendered[0].text;
        let heading = text.find("❄️ WINTER GARDENING IN SOUTH AFRICA:").unwrap();
        let bullets = text.find("• Traditional Khoi-San medicinal plant").unwrap();
        assert!(heading < bullets);
        assert!(text.contains("🌿 BUCHU TIPS (WINTER):"));
    }

    #[test]
    fn mixed_case_vegetable_gets_general_tips() {
        let mut recorder = Recorder::default();
        advisor().present("Spring", "VEGETABLE", &mut recorder).unwrap();

        let text = &recorder.rendered[0].text;
        assert!(text.starts_with("🌸 SPRING GARDENING IN SOUTH AFRICA:"));
        assert!(text.contains("🥕 VEGETABLE TIPS FOR SOUTH AFRICA:"));
        assert!(!text.contains("BEETROOT TIPS"));
    }

    #[test]
    fn invalid_input_goes_to_render_error() {
        let mut recorder = Recorder::default();
        advisor().present("banana", "flower", &mut recorder).unwrap();

        assert!(recorder.rendered.is_empty());
        assert_eq!(
            recorder.errors,
            vec!["Please pick a valid season: spring, summer, autumn, winter".to_string()]
        );
    }

    #[test]
    fn advise_returns_invalid_input() {
        let err = advisor().advise("spring", "banana").unwrap_err();
        assert_eq!(err.message, "Please pick a plant from the list");
    }
}
