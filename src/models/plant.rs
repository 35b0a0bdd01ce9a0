use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantCategory {
    Flower,
    Vegetable,
    Herb,
    Tree,
}

impl PlantCategory {
    pub fn all() -> &'static [PlantCategory] {
        &[
            PlantCategory::Flower,
            PlantCategory::Vegetable,
            PlantCategory::Herb,
            PlantCategory::Tree,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantCategory::Flower => "flower",
            PlantCategory::Vegetable => "vegetable",
            PlantCategory::Herb => "herb",
            PlantCategory::Tree => "tree",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flower" => Some(PlantCategory::Flower),
            "vegetable" => Some(PlantCategory::Vegetable),
            "herb" => Some(PlantCategory::Herb),
            "tree" => Some(PlantCategory::Tree),
            _ => None,
        }
    }

    /// Label used in plant pickers.
    pub fn option_label(&self) -> &'static str {
        match self {
            PlantCategory::Flower => "🌺 Flowers (General)",
            PlantCategory::Vegetable => "🥕 Vegetables (General)",
            PlantCategory::Herb => "🌿 Herbs (General)",
            PlantCategory::Tree => "🌳 Trees (General)",
        }
    }
}

impl std::fmt::Display for PlantCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hand-authored tip sheets for the built-in regional plants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlantGuide {
    Beetroot,
    Gazania,
    Imphepho,
    Strelitzia,
    Mealies,
    Protea,
    Buchu,
    Cycad,
}

/// A named plant with its own advice, owned by exactly one season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionalPlant {
    pub key: String,
    pub name: String,
    pub emoji: String,
    pub category: String,
    pub description: String,
    /// `None` for plants added through configuration; those get a tip block
    /// synthesized from the fields above.
    pub guide: Option<PlantGuide>,
}

impl RegionalPlant {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        emoji: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            emoji: emoji.into(),
            category: category.into(),
            description: description.into(),
            guide: None,
        }
    }

    pub fn with_guide(mut self, guide: PlantGuide) -> Self {
        self.guide = Some(guide);
        self
    }

    pub fn option_label(&self) -> String {
        format!("{} {} ({})", self.emoji, self.name, self.category)
    }
}

/// One entry of the plant picker for a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PlantOption {
    Placeholder,
    Category { category: PlantCategory },
    Separator { label: String },
    Regional { key: String, label: String },
}

impl PlantOption {
    pub const PLACEHOLDER_LABEL: &'static str = "Choose a plant for this season...";

    /// Form value submitted when this option is chosen.
    pub fn value(&self) -> &str {
        match self {
            PlantOption::Placeholder | PlantOption::Separator { .. } => "",
            PlantOption::Category { category } => category.as_str(),
            PlantOption::Regional { key, .. } => key,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PlantOption::Placeholder => Self::PLACEHOLDER_LABEL,
            PlantOption::Category { category } => category.option_label(),
            PlantOption::Separator { label } | PlantOption::Regional { label, .. } => label,
        }
    }

    pub fn is_selectable(&self) -> bool {
        !matches!(self, PlantOption::Separator { .. })
    }
}
