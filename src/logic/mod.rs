pub mod advisor;
pub mod engine;
pub mod knowledge;
pub mod options;
pub mod regional;
pub mod validator;

pub use advisor::GardenAdvisor;
pub use knowledge::KnowledgeBase;
pub use options::{season_options, SeasonOption};
