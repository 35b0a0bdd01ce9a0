use crate::error::{GardenOpsError, Result};
use crate::logic::KnowledgeBase;
use crate::models::{Edition, Hemisphere, PlantCategory, RegionalPlant, Season};
use crate::output::OutputFormat;
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub edition: Edition,
    #[serde(default)]
    pub hemisphere: Hemisphere,
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_plants: BTreeMap<Season, Vec<PlantConfig>>,
}

/// Selection used when the command line names none.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_season")]
    pub season: String,
    #[serde(default = "default_plant_type")]
    pub plant_type: String,
}

fn default_season() -> String {
    "summer".into()
}

fn default_plant_type() -> String {
    "flower".into()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            season: default_season(),
            plant_type: default_plant_type(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlantConfig {
    pub key: String,
    pub name: String,
    #[serde(default = "default_emoji")]
    pub emoji: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

fn default_emoji() -> String {
    "🌱".into()
}

impl From<&PlantConfig> for RegionalPlant {
    fn from(plant: &PlantConfig) -> Self {
        RegionalPlant::new(
            plant.key.as_str(),
            plant.name.as_str(),
            plant.emoji.as_str(),
            plant.category.as_str(),
            plant.description.as_str(),
        )
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and built-in defaults are used when nothing is found.
    pub fn load(config_override: Option<&PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(GardenOpsError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.clone()
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::info!(path = %config_path.display(), "Loading config");
        Self::from_file(&config_path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| GardenOpsError::Config(format!("Failed to read config: {}", e)))?;
        Self::from_yaml_str(&config_str)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = Self::substitute_env_vars(content);

        // An empty or comment-only file means "all defaults"
        if content.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| GardenOpsError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for a config file in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/gardenops.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Then the XDG config directory
        Self::default_config_path()
            .ok()
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/gardenops/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GardenOpsError::Config("Cannot determine config directory".into()))?
            .join("gardenops");
        Ok(config_dir.join("config.yaml"))
    }

    /// Build the knowledge base for this configuration's edition, including
    /// any extra plants.
    pub fn knowledge_base(&self) -> Result<KnowledgeBase> {
        let extras = self.extra_plants.iter().flat_map(|(season, plants)| {
            plants
                .iter()
                .map(move |plant| (*season, RegionalPlant::from(plant)))
        });

        KnowledgeBase::new(self.edition).with_extra_plants(extras)
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up GardenOps!");
        println!();

        let editions = [Edition::Regional, Edition::General];
        let edition_labels = [
            "Regional (South African plants)",
            "General (categories only)",
        ];
        let edition_idx = Select::new()
            .with_prompt("  Edition")
            .items(&edition_labels)
            .default(0)
            .interact()
            .map_err(|e| GardenOpsError::Config(format!("Input error: {}", e)))?;
        let edition = editions[edition_idx];

        let hemispheres = [Hemisphere::Southern, Hemisphere::Northern];
        let hemisphere_idx = Select::new()
            .with_prompt("  Hemisphere")
            .items(&["Southern", "Northern"])
            .default(0)
            .interact()
            .map_err(|e| GardenOpsError::Config(format!("Input error: {}", e)))?;
        let hemisphere = hemispheres[hemisphere_idx];

        println!();
        println!("Defaults");

        let seasons = edition.accepted_seasons();
        let season_idx = Select::new()
            .with_prompt("  Default season")
            .items(seasons)
            .default(1)
            .interact()
            .map_err(|e| GardenOpsError::Config(format!("Input error: {}", e)))?;

        let knowledge = KnowledgeBase::new(edition);
        let plant_type: String = Input::new()
            .with_prompt("  Default plant type")
            .default("flower".into())
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                let key = input.to_lowercase();
                if PlantCategory::from_str(&key).is_some()
                    || knowledge.find_regional_plant(&key).is_some()
                {
                    Ok(())
                } else {
                    Err(format!("'{}' is not a known plant type", input))
                }
            })
            .interact_text()
            .map_err(|e| GardenOpsError::Config(format!("Input error: {}", e)))?;

        let formats = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Html];
        let format_idx = Select::new()
            .with_prompt("  Output format")
            .items(&["text", "json", "html"])
            .default(0)
            .interact()
            .map_err(|e| GardenOpsError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            edition,
            hemisphere,
            output: formats[format_idx],
            defaults: DefaultsConfig {
                season: seasons[season_idx].to_string(),
                plant_type: plant_type.to_lowercase(),
            },
            extra_plants: BTreeMap::new(),
        };

        let config_path = Self::default_config_path()?;
        config.write_to(&config_path)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;

        // Write with a header comment
        let content = format!(
            "# GardenOps Configuration\n# Generated by `gardenops init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .expect("env var pattern is a valid regex");

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}
