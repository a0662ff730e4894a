#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::render::{OutputFormat, RenderOptions};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "numerology-calc")]
#[command(about = "Name and birth date numerology calculator")]
pub struct CliConfig {
    /// Name in Latin letters, e.g. "John Smith"
    #[arg(long)]
    pub name: Option<String>,

    /// Birth date as YYYY-MM-DD
    #[arg(long)]
    pub birth_date: Option<String>,

    /// CSV file with a name,birth_date header to process in batch
    #[arg(long)]
    pub input: Option<String>,

    /// Directory for batch results
    #[arg(long)]
    pub output_path: Option<String>,

    /// Output format: text or json
    #[arg(long)]
    pub format: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Allow a name without a birth date
    #[arg(long)]
    pub no_require_birth_date: bool,

    /// Hide the per-letter values
    #[arg(long)]
    pub no_letters: bool,

    /// Hide the reduction steps
    #[arg(long)]
    pub no_steps: bool,

    /// Print the letter-to-digit table
    #[arg(long)]
    pub show_table: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_toml(&self) -> Result<Option<TomlConfig>> {
        self.config.as_ref().map(TomlConfig::from_file).transpose()
    }

    /// Command line flags win over the TOML file, which wins over defaults.
    pub fn resolve(&self, toml: Option<&TomlConfig>) -> Settings {
        let base = toml.map(Settings::from_toml).unwrap_or_default();

        Settings {
            output_path: self.output_path.clone().unwrap_or(base.output_path),
            output_format: self.format.clone().unwrap_or(base.output_format),
            require_birth_date: base.require_birth_date && !self.no_require_birth_date,
            show_letters: base.show_letters && !self.no_letters,
            show_steps: base.show_steps && !self.no_steps,
        }
    }
}

/// Effective settings after merging all configuration sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub output_path: String,
    pub output_format: String,
    pub require_birth_date: bool,
    pub show_letters: bool,
    pub show_steps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_toml(&TomlConfig::default())
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            output_path: config.output_path().to_string(),
            output_format: config.output_format().to_string(),
            require_birth_date: config.require_birth_date(),
            show_letters: config.show_letters(),
            show_steps: config.show_steps(),
        }
    }

    pub fn format(&self) -> Result<OutputFormat> {
        OutputFormat::parse(&self.output_format)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_letters: self.show_letters,
            show_steps: self.show_steps,
        }
    }
}

impl ConfigProvider for Settings {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_format(&self) -> &str {
        &self.output_format
    }

    fn require_birth_date(&self) -> bool {
        self.require_birth_date
    }

    fn show_letters(&self) -> bool {
        self.show_letters
    }

    fn show_steps(&self) -> bool {
        self.show_steps
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_one_of(
            "format",
            &self.output_format.to_ascii_lowercase(),
            &OutputFormat::VALUES,
        )
    }
}
