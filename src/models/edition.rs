use super::Season;
use serde::{Deserialize, Serialize};

/// Surface rules for the advisor.
///
/// `Regional` carries the South African plant table, separates the seasonal
/// and plant blocks with a blank line and uses short form-style messages.
/// `General` has no regional table, accepts "fall" for autumn, adjoins the
/// two blocks and echoes invalid values back in its messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    #[default]
    Regional,
    General,
}

impl Edition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Edition::Regional => "regional",
            Edition::General => "general",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "regional" | "sa" | "south-african" => Some(Edition::Regional),
            "general" | "classic" => Some(Edition::General),
            _ => None,
        }
    }

    /// Accepted season spellings, in the order error messages list them.
    pub fn accepted_seasons(&self) -> &'static [&'static str] {
        match self {
            Edition::Regional => &["spring", "summer", "autumn", "winter"],
            Edition::General => &["spring", "summer", "autumn", "fall", "winter"],
        }
    }

    pub fn parse_season(&self, input: &str) -> Option<Season> {
        let normalized = input.to_lowercase();
        if self.accepted_seasons().contains(&normalized.as_str()) {
            Season::from_str(&normalized)
        } else {
            None
        }
    }

    pub fn has_regional_plants(&self) -> bool {
        matches!(self, Edition::Regional)
    }

    /// Inserted between the seasonal block and the plant block.
    pub fn advice_separator(&self) -> &'static str {
        match self {
            Edition::Regional => "\n",
            Edition::General => "",
        }
    }

    pub fn banner_title(&self) -> &'static str {
        match self {
            Edition::Regional => "🌱 Your South African Garden Advice",
            Edition::General => "🌱 Garden Advice",
        }
    }
}

impl std::fmt::Display for Edition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
