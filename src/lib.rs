pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{formatter_for, LocalStorage, PassthroughFormatter, PrettierFormatter};
pub use crate::app::pipelines::SectorPipeline;
pub use crate::config::{CliConfig, GeneratorSettings};
pub use crate::core::engine::{GenerationEngine, RunSummary};
pub use crate::utils::error::{GenError, Result};
