use crate::error::{GardenOpsError, Result};
use crate::models::{Edition, PlantCategory, PlantGuide, RegionalPlant, Season};
use std::collections::BTreeMap;

const SPRING_ADVICE: &str = "🌸 SPRING GARDENING IN SOUTH AFRICA:
• Plant your vegetables now - it's the best time!
• Clean up your garden beds and remove weeds
• Start watering more as plants wake up
• Plant seeds for summer vegetables like tomatoes
• Spring is from September to November in SA
• Good time to plant beetroot and other root vegetables
• Watch out for late frost in the Highveld
";

const SUMMER_ADVICE: &str = "☀️ SUMMER GARDENING IN SOUTH AFRICA:
• Water your plants early morning or late afternoon
• It's very hot, so give plants shade if needed
• Summer is December to February in SA
• Perfect time for herbs like imphepho
• Watch out for summer pests
• Mulch around plants to keep soil cool
• Plant heat-loving flowers like strelitzia
";

const AUTUMN_ADVICE: &str = "🍂 AUTUMN GARDENING IN SOUTH AFRICA:
• Harvest your summer vegetables like mealies
• Autumn is March to May in SA
• Good time to plant proteas
• Prepare your garden for winter
• Plant bulbs for spring flowers
• Clean up fallen leaves
• Reduce watering as it gets cooler
";

const WINTER_ADVICE: &str = "❄️ WINTER GARDENING IN SOUTH AFRICA:
• Winter is June to August in SA
• Most of SA doesn't get snow, but it's cold
• Perfect time to plant buchu and other hardy herbs
• Protect tender plants from frost
• Plan your garden for next year
• Good time to prune trees
• Plant winter vegetables in warmer areas
";

const FLOWER_ADVICE: &str = "🌺 FLOWER TIPS FOR SOUTH AFRICA:
• Water flowers in the morning or evening
• Remove old flowers to get more blooms
• Most flowers like sun but need some shade in hot areas
• Add compost to soil before planting
• South African flowers like gazanias are very hardy";

const VEGETABLE_ADVICE: &str = "🥕 VEGETABLE TIPS FOR SOUTH AFRICA:
• Check your vegetables every day for bugs
• Give them enough space to grow
• Pick vegetables regularly so plants keep producing
• Popular SA vegetables: beetroot, mealies, pumpkin
• Water deeply but not too often";

const HERB_ADVICE: &str = "🌿 HERB TIPS FOR SOUTH AFRICA:
• Most herbs don't need much water
• Pick herbs in the morning for best flavor
• Traditional SA herbs: buchu, imphepho, wild garlic
• Pinch off flowers to keep leaves tender
• Dry herbs in a cool, dark place";

const TREE_ADVICE: &str = "🌳 TREE TIPS FOR SOUTH AFRICA:
• Water trees deeply once a week
• Put mulch around the base (not touching the trunk)
• Prune trees in winter when they're sleeping
• Native SA trees: yellowwood, wild fig, baobab
• Young trees need protection from wind";

/// Immutable advice data: seasonal and category text blocks plus the
/// regional plant table.
///
/// Built once at startup and shared behind an `Arc`. Within a season,
/// plants keep their declaration order, which is the order pickers list them.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    edition: Edition,
    regional: BTreeMap<Season, Vec<RegionalPlant>>,
}

impl KnowledgeBase {
    pub fn new(edition: Edition) -> Self {
        let regional = if edition.has_regional_plants() {
            builtin_regional_plants()
        } else {
            BTreeMap::new()
        };

        Self { edition, regional }
    }

    /// Add configured plants to the regional table.
    ///
    /// Keys are lowercased. An empty key, a key with whitespace, or a key
    /// already present in the same season is a configuration error.
    pub fn with_extra_plants(
        mut self,
        extras: impl IntoIterator<Item = (Season, RegionalPlant)>,
    ) -> Result<Self> {
        for (season, mut plant) in extras {
            if !self.edition.has_regional_plants() {
                tracing::warn!(
                    plant = %plant.key,
                    "Ignoring extra plant: the {} edition has no regional table",
                    self.edition
                );
                continue;
            }

            plant.key = plant.key.trim().to_lowercase();
            if plant.key.is_empty() || plant.key.chars().any(char::is_whitespace) {
                return Err(GardenOpsError::Config(format!(
                    "Invalid plant key '{}' under {}: keys must be a single non-empty word",
                    plant.key, season
                )));
            }

            let plants = self.regional.entry(season).or_default();
            if plants.iter().any(|p| p.key == plant.key) {
                return Err(GardenOpsError::Config(format!(
                    "Duplicate plant '{}' under {}",
                    plant.key, season
                )));
            }

            tracing::debug!(plant = %plant.key, season = %season, "Added regional plant");
            plants.push(plant);
        }

        Ok(self)
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    pub fn seasonal_text(&self, season: Season) -> &'static str {
        match season {
            Season::Spring => SPRING_ADVICE,
            Season::Summer => SUMMER_ADVICE,
            Season::Autumn => AUTUMN_ADVICE,
            Season::Winter => WINTER_ADVICE,
        }
    }

    pub fn category_text(&self, category: PlantCategory) -> &'static str {
        match category {
            PlantCategory::Flower => FLOWER_ADVICE,
            PlantCategory::Vegetable => VEGETABLE_ADVICE,
            PlantCategory::Herb => HERB_ADVICE,
            PlantCategory::Tree => TREE_ADVICE,
        }
    }

    pub fn plants_for(&self, season: Season) -> &[RegionalPlant] {
        self.regional
            .get(&season)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Plant `key` as listed under `season`. `key` must already be lowercase.
    pub fn regional_plant(&self, season: Season, key: &str) -> Option<&RegionalPlant> {
        self.plants_for(season).iter().find(|p| p.key == key)
    }

    /// First season (spring to winter) that lists `key`.
    pub fn find_regional_plant(&self, key: &str) -> Option<(Season, &RegionalPlant)> {
        self.regional
            .iter()
            .find_map(|(season, plants)| {
                plants.iter().find(|p| p.key == key).map(|p| (*season, p))
            })
    }

    /// Every regional key across all seasons, season by season.
    pub fn regional_keys(&self) -> impl Iterator<Item = &str> {
        self.regional
            .values()
            .flat_map(|plants| plants.iter().map(|p| p.key.as_str()))
    }

    pub fn regional_plant_count(&self) -> usize {
        self.regional.values().map(Vec::len).sum()
    }
}

fn builtin_regional_plants() -> BTreeMap<Season, Vec<RegionalPlant>> {
    let mut table = BTreeMap::new();

    table.insert(
        Season::Spring,
        vec![
            RegionalPlant::new(
                "beetroot",
                "Beetroot",
                "🟣",
                "Spring vegetable",
                "Easy to grow root vegetable perfect for South African spring",
            )
            .with_guide(PlantGuide::Beetroot),
            RegionalPlant::new(
                "gazania",
                "Gazania",
                "🌼",
                "Spring flower",
                "Beautiful South African daisy that loves spring weather",
            )
            .with_guide(PlantGuide::Gazania),
        ],
    );

    table.insert(
        Season::Summer,
        vec![
            RegionalPlant::new(
                "imphepho",
                "Imphepho (Wild Sage)",
                "🌿",
                "Summer herb",
                "Traditional South African herb used for cleansing",
            )
            .with_guide(PlantGuide::Imphepho),
            RegionalPlant::new(
                "strelitzia",
                "Bird of Paradise",
                "🦅",
                "Summer flower",
                "Famous South African flower, very beautiful in summer",
            )
            .with_guide(PlantGuide::Strelitzia),
        ],
    );

    table.insert(
        Season::Autumn,
        vec![
            RegionalPlant::new(
                "mealies",
                "mealies (Sweet Corn)",
                "🌽",
                "Autumn vegetable",
                "Traditional South African corn, harvested in autumn",
            )
            .with_guide(PlantGuide::Mealies),
            RegionalPlant::new(
                "protea",
                "Protea",
                "🌸",
                "Autumn flower",
                "South Africa's national flower, blooms in autumn",
            )
            .with_guide(PlantGuide::Protea),
        ],
    );

    table.insert(
        Season::Winter,
        vec![
            RegionalPlant::new(
                "buchu",
                "Buchu",
                "🌿",
                "Winter herb",
                "Traditional South African medicinal herb",
            )
            .with_guide(PlantGuide::Buchu),
            RegionalPlant::new(
                "cycad",
                "Cycad",
                "🌴",
                "Winter plant",
                "Ancient South African plant that survives winter",
            )
            .with_guide(PlantGuide::Cycad),
        ],
    );

    table
}
