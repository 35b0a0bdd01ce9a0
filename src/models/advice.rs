use serde::Serialize;

/// Composed advice for one (season, plant type) selection.
///
/// `season` and `plant_type` are kept as the caller typed them; presenters
/// echo them back in headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub season: String,
    pub plant_type: String,
    pub text: String,
}

impl Advice {
    pub fn new(
        season: impl Into<String>,
        plant_type: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            season: season.into(),
            plant_type: plant_type.into(),
            text: text.into(),
        }
    }
}
