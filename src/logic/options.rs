use super::knowledge::KnowledgeBase;
use crate::models::{Edition, PlantCategory, PlantOption};

/// One entry of the season picker. The placeholder has an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonOption {
    pub value: String,
    pub label: String,
}

pub const SEASON_PLACEHOLDER: &str = "Choose a season...";

pub fn season_options(edition: Edition) -> Vec<SeasonOption> {
    let mut options = vec![SeasonOption {
        value: String::new(),
        label: SEASON_PLACEHOLDER.to_string(),
    }];

    for value in edition.accepted_seasons() {
        let Some(season) = edition.parse_season(value) else {
            continue;
        };
        options.push(SeasonOption {
            value: value.to_string(),
            label: format!("{} {}", season.emoji(), capitalize(value)),
        });
    }

    options
}

/// Plant picker entries for `season`: placeholder, the general categories,
/// then (when the season owns regional plants) a disabled separator and the
/// season's plants in declaration order.
pub fn plant_options(knowledge: &KnowledgeBase, season: &str) -> Vec<PlantOption> {
    let mut options = vec![PlantOption::Placeholder];
    options.extend(
        PlantCategory::all()
            .iter()
            .map(|category| PlantOption::Category {
                category: *category,
            }),
    );

    let plants = knowledge
        .edition()
        .parse_season(season)
        .map(|s| knowledge.plants_for(s))
        .unwrap_or_default();

    if !plants.is_empty() {
        options.push(PlantOption::Separator {
            label: format!("--- South African Plants for {} ---", season),
        });
        options.extend(plants.iter().map(|plant| PlantOption::Regional {
            key: plant.key.clone(),
            label: plant.option_label(),
        }));
    }

    options
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_categories_come_first() {
        let kb = KnowledgeBase::new(Edition::Regional);
        let options = plant_options(&kb, "spring");
        let values: Vec<&str> = options.iter().map(PlantOption::value).collect();
        assert_eq!(
            values,
            vec!["", "flower", "vegetable", "herb", "tree", "", "beetroot", "gazania"]
        );
        assert_eq!(options[0], PlantOption::Placeholder);
    }

    #[test]
    fn separator_names_the_season_as_typed() {
        let kb = KnowledgeBase::new(Edition::Regional);
        let options = plant_options(&kb, "Winter");
        assert_eq!(
            options[5],
            PlantOption::Separator {
                label: "--- South African Plants for Winter ---".into()
            }
        );
        assert!(!options[5].is_selectable());
        assert_eq!(options[6].label(), "🌿 Buchu (Winter herb)");
        assert_eq!(options[7].label(), "🌴 Cycad (Winter plant)");
    }

    #[test]
    fn no_separator_without_regional_plants() {
        let kb = KnowledgeBase::new(Edition::Regional);
        assert_eq!(plant_options(&kb, "").len(), 5);
        assert_eq!(plant_options(&kb, "banana").len(), 5);

        let general = KnowledgeBase::new(Edition::General);
        let options = plant_options(&general, "summer");
        assert_eq!(options.len(), 5);
        assert!(options.iter().all(PlantOption::is_selectable));
    }

    #[test]
    fn season_options_per_edition() {
        let regional = season_options(Edition::Regional);
        assert_eq!(regional.len(), 5);
        assert_eq!(regional[0].value, "");
        assert_eq!(regional[1].label, "🌸 Spring");
        assert_eq!(regional[4].value, "winter");

        let general = season_options(Edition::General);
        assert_eq!(general.len(), 6);
        assert_eq!(general[4].label, "🍂 Fall");
    }
}
