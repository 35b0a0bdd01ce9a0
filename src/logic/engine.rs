use super::knowledge::KnowledgeBase;
use super::regional::regional_plant_advice;
use crate::models::{Advice, Edition, PlantCategory};
use std::sync::Arc;

/// Turns (season, plant type) strings into advice text.
///
/// Every method is total: unrecognised input maps to a fixed fallback
/// string rather than an error. Nothing is cached, so identical inputs
/// always produce identical output.
pub struct AdvisoryEngine {
    knowledge: Arc<KnowledgeBase>,
}

impl AdvisoryEngine {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn edition(&self) -> Edition {
        self.knowledge.edition()
    }

    pub fn seasonal_advice(&self, season: &str) -> String {
        match self.edition().parse_season(season) {
            Some(season) => self.knowledge.seasonal_text(season).to_string(),
            None => {
                tracing::debug!(season, "No seasonal advice for input");
                season_fallback(self.edition()).to_string()
            }
        }
    }

    /// Advice for a plant type, optionally in the context of a season.
    ///
    /// An empty `season` skips the regional table. Otherwise a regional plant
    /// listed under `season` wins, then a regional plant listed under any
    /// other season, then a general category.
    pub fn plant_advice(&self, plant_type: &str, season: &str) -> String {
        let key = plant_type.to_lowercase();

        if !season.is_empty() {
            let listed_here = self
                .edition()
                .parse_season(season)
                .and_then(|s| self.knowledge.regional_plant(s, &key));

            let plant = match listed_here {
                Some(plant) => Some(plant),
                None => self.knowledge.find_regional_plant(&key).map(|(owner, plant)| {
                    tracing::debug!(
                        plant = %key,
                        owner = %owner,
                        season,
                        "Regional plant requested outside its season"
                    );
                    plant
                }),
            };

            if let Some(plant) = plant {
                return regional_plant_advice(plant, season);
            }
        }

        match PlantCategory::from_str(&key) {
            Some(category) => self.knowledge.category_text(category).to_string(),
            None => {
                tracing::debug!(plant_type, "No plant advice for input");
                plant_fallback(self.edition()).to_string()
            }
        }
    }

    /// Seasonal block followed by the plant block, joined by the edition's
    /// separator.
    pub fn combined_advice(&self, season: &str, plant_type: &str) -> String {
        let seasonal = self.seasonal_advice(season);
        let plant = self.plant_advice(plant_type, season);
        format!("{}{}{}", seasonal, self.edition().advice_separator(), plant)
    }

    pub fn advise(&self, season: &str, plant_type: &str) -> Advice {
        Advice::new(season, plant_type, self.combined_advice(season, plant_type))
    }
}

fn season_fallback(edition: Edition) -> &'static str {
    match edition {
        Edition::Regional => "Please choose a valid season.\n",
        Edition::General => "No advice available for this season.\n",
    }
}

fn plant_fallback(edition: Edition) -> &'static str {
    match edition {
        Edition::Regional => "Please choose a plant type from the list.",
        Edition::General => "No advice available for this plant type.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RegionalPlant, Season};

    fn regional() -> AdvisoryEngine {
        AdvisoryEngine::new(Arc::new(KnowledgeBase::new(Edition::Regional)))
    }

    fn general() -> AdvisoryEngine {
        AdvisoryEngine::new(Arc::new(KnowledgeBase::new(Edition::General)))
    }

    #[test]
    fn seasonal_advice_is_case_insensitive() {
        let engine = regional();
        for season in ["spring", "summer", "autumn", "winter"] {
            assert_eq!(
                engine.seasonal_advice(&season.to_uppercase()),
                engine.seasonal_advice(season)
            );
        }
        assert!(engine
            .seasonal_advice("SPRING")
            .starts_with("🌸 SPRING GARDENING IN SOUTH AFRICA:"));
    }

    #[test]
    fn unknown_season_returns_fallback() {
        let engine = regional();
        assert_eq!(engine.seasonal_advice("banana"), "Please choose a valid season.\n");
        assert_eq!(engine.seasonal_advice(""), "Please choose a valid season.\n");
        assert_eq!(
            general().seasonal_advice("monsoon"),
            "No advice available for this season.\n"
        );
    }

    #[test]
    fn fall_is_only_a_synonym_in_general_edition() {
        assert_eq!(
            general().seasonal_advice("fall"),
            general().seasonal_advice("autumn")
        );
        assert_eq!(
            regional().seasonal_advice("fall"),
            "Please choose a valid season.\n"
        );
    }

    #[test]
    fn beetroot_in_spring_mentions_spring() {
        let text = regional().plant_advice("beetroot", "spring");
        assert!(text.starts_with("🟣 BEETROOT TIPS (SPRING):"));
    }

    #[test]
    fn beetroot_in_winter_still_returns_beetroot_block() {
        let text = regional().plant_advice("beetroot", "winter");
        assert!(text.starts_with("🟣 BEETROOT TIPS (WINTER):"));
        assert!(text.contains("tennis ball"));
    }

    #[test]
    fn regional_plant_needs_a_season() {
        assert_eq!(
            regional().plant_advice("beetroot", ""),
            "Please choose a plant type from the list."
        );
    }

    #[test]
    fn general_categories() {
        let engine = regional();
        assert!(engine
            .plant_advice("VEGETABLE", "spring")
            .starts_with("🥕 VEGETABLE TIPS FOR SOUTH AFRICA:"));
        assert!(engine.plant_advice("tree", "").starts_with("🌳 TREE TIPS"));
    }

    #[test]
    fn unknown_plant_returns_fallback() {
        assert_eq!(
            regional().plant_advice("banana", "spring"),
            "Please choose a plant type from the list."
        );
        assert_eq!(
            general().plant_advice("banana", "spring"),
            "No advice available for this plant type."
        );
    }

    #[test]
    fn general_edition_has_no_regional_blocks() {
        assert_eq!(
            general().plant_advice("buchu", "winter"),
            "No advice available for this plant type."
        );
    }

    #[test]
    fn regional_name_beats_same_named_category() {
        let kb = KnowledgeBase::new(Edition::Regional)
            .with_extra_plants([(
                Season::Summer,
                RegionalPlant::new("herb", "Garden Herb Mix", "🌱", "Summer herb", "Mixed herbs"),
            )])
            .unwrap();
        let engine = AdvisoryEngine::new(Arc::new(kb));

        let text = engine.plant_advice("herb", "summer");
        assert!(text.starts_with("🌱 GARDEN HERB MIX TIPS:"));

        // Without a season the category still answers
        assert!(engine.plant_advice("herb", "").starts_with("🌿 HERB TIPS"));
    }

    #[test]
    fn mealies_heading_keeps_lowercase_name() {
        let text = regional().plant_advice("mealies", "autumn");
        assert!(text.starts_with("🌽 mealies TIPS (AUTUMN):"));
    }

    #[test]
    fn combined_advice_orders_blocks() {
        let engine = regional();
        let combined = engine.combined_advice("summer", "flower");
        let seasonal = engine.seasonal_advice("summer");
        let plant = engine.plant_advice("flower", "summer");

        assert_eq!(combined, format!("{}\n{}", seasonal, plant));
        let s = combined.find(&seasonal).unwrap();
        let p = combined.rfind(&plant).unwrap();
        assert!(s < p);
    }

    #[test]
    fn general_edition_adjoins_blocks() {
        let engine = general();
        let combined = engine.combined_advice("fall", "herb");
        assert_eq!(
            combined,
            format!(
                "{}{}",
                engine.seasonal_advice("fall"),
                engine.plant_advice("herb", "fall")
            )
        );
        assert!(!combined.contains("\n\n"));
    }

    #[test]
    fn lookups_are_idempotent() {
        let engine = regional();
        for (season, plant) in [("winter", "buchu"), ("Spring", "VEGETABLE"), ("x", "y")] {
            assert_eq!(
                engine.combined_advice(season, plant),
                engine.combined_advice(season, plant)
            );
            assert_eq!(engine.seasonal_advice(season), engine.seasonal_advice(season));
            assert_eq!(
                engine.plant_advice(plant, season),
                engine.plant_advice(plant, season)
            );
        }
    }

    #[test]
    fn advise_keeps_raw_selection() {
        let advice = regional().advise("Winter", "Buchu");
        assert_eq!(advice.season, "Winter");
        assert_eq!(advice.plant_type, "Buchu");
        assert!(advice.text.contains("🌿 BUCHU TIPS (WINTER):"));
    }
}
