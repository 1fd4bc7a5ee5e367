use config::Config;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_PDF: &str = "students_list.pdf";
pub const DEFAULT_XLSX: &str = "students_list.xlsx";

/// File paths for a run. Defaults point at the conventional names in the
/// working directory; `ROSTER_PDF` / `ROSTER_XLSX` override them and CLI
/// flags override both.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub pdf: String,
    pub xlsx: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            pdf: DEFAULT_PDF.to_string(),
            xlsx: DEFAULT_XLSX.to_string(),
        }
    }
}

pub fn load() -> Settings {
    try_load().unwrap_or_else(|err| {
        debug!(error = %err, "settings fell back to defaults");
        Settings::default()
    })
}

fn try_load() -> Result<Settings, config::ConfigError> {
    Config::builder()
        .set_default("pdf", DEFAULT_PDF)?
        .set_default("xlsx", DEFAULT_XLSX)?
        .add_source(config::Environment::with_prefix("ROSTER"))
        .build()?
        .try_deserialize()
}
