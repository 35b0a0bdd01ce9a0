pub mod advisor;

pub use advisor::AdvisorScreen;
