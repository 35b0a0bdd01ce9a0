use super::knowledge::KnowledgeBase;
use crate::error::{InputField, InvalidInput};
use crate::models::{Edition, PlantCategory};
use std::sync::Arc;

pub type ValidationResult = std::result::Result<(), InvalidInput>;

/// Checks a (season, plant type) selection before advice is generated.
///
/// Regional plants validate in every season; lookup decides what text they
/// get. The season is checked first and the first failure wins.
pub struct InputValidator {
    knowledge: Arc<KnowledgeBase>,
}

impl InputValidator {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn validate(&self, season: &str, plant_type: &str) -> ValidationResult {
        let edition = self.knowledge.edition();

        if edition.parse_season(season).is_none() {
            return Err(InvalidInput::new(
                InputField::Season,
                season_message(edition, season),
            ));
        }

        if !self.is_known_plant(&plant_type.to_lowercase()) {
            return Err(InvalidInput::new(
                InputField::PlantType,
                plant_message(edition, plant_type),
            ));
        }

        Ok(())
    }

    /// Accepted plant identifiers: the four categories, then every regional
    /// key across all seasons.
    pub fn accepted_plant_types(&self) -> Vec<&str> {
        let mut accepted: Vec<&str> = PlantCategory::all()
            .iter()
            .map(PlantCategory::as_str)
            .collect();
        accepted.extend(self.knowledge.regional_keys());
        accepted
    }

    fn is_known_plant(&self, key: &str) -> bool {
        PlantCategory::from_str(key).is_some() || self.knowledge.regional_keys().any(|k| k == key)
    }
}

fn season_message(edition: Edition, input: &str) -> String {
    let accepted = edition.accepted_seasons().join(", ");
    match edition {
        Edition::Regional => format!("Please pick a valid season: {}", accepted),
        Edition::General => format!("Invalid season '{}'. Valid seasons: {}", input, accepted),
    }
}

fn plant_message(edition: Edition, input: &str) -> String {
    match edition {
        Edition::Regional => "Please pick a plant from the list".to_string(),
        Edition::General => {
            let accepted: Vec<&str> = PlantCategory::all().iter().map(PlantCategory::as_str).collect();
            format!(
                "Invalid plant type '{}'. Valid plant types: {}",
                input,
                accepted.join(", ")
            )
        }
    }
}
