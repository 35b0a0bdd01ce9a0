pub mod console;
pub mod html;
pub mod json;

pub use console::ConsoleOutput;
pub use html::HtmlOutput;
pub use json::JsonOutput;

use crate::error::Result;
use crate::models::Advice;
use serde::{Deserialize, Serialize};

/// A surface advice can be rendered onto.
pub trait AdvicePresenter {
    fn render(&mut self, advice: &Advice) -> Result<()>;

    fn render_error(&mut self, message: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "console" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "html" => Some(OutputFormat::Html),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
