pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::{
    calculator::{CalculationOptions, Calculator},
    engine::{BatchEngine, BatchReport},
    pipeline::BatchPipeline,
    render::{OutputFormat, RenderOptions},
};
pub use crate::domain::model::{CalculationRequest, NumerologyResult};
pub use crate::utils::error::{NumerologyError, Result};
