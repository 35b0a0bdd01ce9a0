use chrono::Datelike;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn all() -> &'static [Season] {
        &[Season::Spring, Season::Summer, Season::Autumn, Season::Winter]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Season::Spring => "🌸",
            Season::Summer => "☀️",
            Season::Autumn => "🍂",
            Season::Winter => "❄️",
        }
    }

    /// Case-insensitive parse. "fall" is accepted as a synonym for autumn;
    /// whether a caller honours the synonym is an [`Edition`](super::Edition) decision.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "autumn" | "fall" => Some(Season::Autumn),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    /// Season a calendar month (1-12) falls in. Out-of-range months yield `None`.
    pub fn for_month(month: u32, hemisphere: Hemisphere) -> Option<Self> {
        let southern = match month {
            9..=11 => Season::Spring,
            12 | 1 | 2 => Season::Summer,
            3..=5 => Season::Autumn,
            6..=8 => Season::Winter,
            _ => return None,
        };

        Some(match hemisphere {
            Hemisphere::Southern => southern,
            Hemisphere::Northern => southern.opposite(),
        })
    }

    pub fn for_date(date: &impl Datelike, hemisphere: Hemisphere) -> Self {
        // month() is always 1..=12
        Self::for_month(date.month(), hemisphere).unwrap_or(Season::Summer)
    }

    pub fn opposite(&self) -> Self {
        match self {
            Season::Spring => Season::Autumn,
            Season::Summer => Season::Winter,
            Season::Autumn => Season::Spring,
            Season::Winter => Season::Summer,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    #[default]
    Southern,
    Northern,
}

impl Hemisphere {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hemisphere::Southern => "southern",
            Hemisphere::Northern => "northern",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "southern" | "south" | "s" => Some(Hemisphere::Southern),
            "northern" | "north" | "n" => Some(Hemisphere::Northern),
            _ => None,
        }
    }
}

impl std::fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn season_from_str_is_case_insensitive() {
        assert_eq!(Season::from_str("SPRING"), Some(Season::Spring));
        assert_eq!(Season::from_str("Summer"), Some(Season::Summer));
        assert_eq!(Season::from_str("winter"), Some(Season::Winter));
    }

    #[test]
    fn season_from_str_accepts_fall_synonym() {
        assert_eq!(Season::from_str("fall"), Some(Season::Autumn));
        assert_eq!(Season::from_str("Autumn"), Some(Season::Autumn));
    }

    #[test]
    fn season_from_str_invalid() {
        assert_eq!(Season::from_str("banana"), None);
        assert_eq!(Season::from_str(""), None);
        assert_eq!(Season::from_str(" spring"), None);
    }

    #[test]
    fn southern_months_follow_sa_calendar() {
        let h = Hemisphere::Southern;
        assert_eq!(Season::for_month(9, h), Some(Season::Spring));
        assert_eq!(Season::for_month(11, h), Some(Season::Spring));
        assert_eq!(Season::for_month(12, h), Some(Season::Summer));
        assert_eq!(Season::for_month(2, h), Some(Season::Summer));
        assert_eq!(Season::for_month(3, h), Some(Season::Autumn));
        assert_eq!(Season::for_month(6, h), Some(Season::Winter));
        assert_eq!(Season::for_month(8, h), Some(Season::Winter));
    }

    #[test]
    fn northern_months_are_shifted() {
        let h = Hemisphere::Northern;
        assert_eq!(Season::for_month(4, h), Some(Season::Spring));
        assert_eq!(Season::for_month(7, h), Some(Season::Summer));
        assert_eq!(Season::for_month(10, h), Some(Season::Autumn));
        assert_eq!(Season::for_month(1, h), Some(Season::Winter));
    }

    #[test]
    fn out_of_range_month_is_none() {
        assert_eq!(Season::for_month(0, Hemisphere::Southern), None);
        assert_eq!(Season::for_month(13, Hemisphere::Northern), None);
    }

    #[test]
    fn for_date_uses_month() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(Season::for_date(&date, Hemisphere::Southern), Season::Spring);
        assert_eq!(Season::for_date(&date, Hemisphere::Northern), Season::Autumn);
    }

    #[test]
    fn hemisphere_from_str() {
        assert_eq!(Hemisphere::from_str("Southern"), Some(Hemisphere::Southern));
        assert_eq!(Hemisphere::from_str("north"), Some(Hemisphere::Northern));
        assert_eq!(Hemisphere::from_str("east"), None);
    }
}
