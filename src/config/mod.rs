pub mod cli;
pub mod toml_config;

use crate::adapters::formatter::DEFAULT_PRETTIER_CMD;
use crate::core::render::{BCC_SECTORS_OUT_NAME, BENCHMARK_OUT_NAME};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use std::path::{Path, PathBuf};

pub use cli::CliConfig;
pub use toml_config::FileConfig;

/// Input sheets, relative to the working directory.
pub const SMECH_SECTORS_PATH: &str = "data/smech_sectors.csv";
pub const BCC_SECTORS_PATH: &str = "data/bcc_sectors.csv";

/// Directory used for any output path that is not given explicitly.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Fully resolved run settings: command line over settings file over defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    pub prettier: bool,
    pub prettier_cmd: String,
    pub prettier_config: Option<PathBuf>,
    pub prettier_config_bcc: Option<PathBuf>,
    pub prettier_config_benchmark: Option<PathBuf>,
    pub output_bcc: Option<PathBuf>,
    pub output_benchmark: Option<PathBuf>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            prettier: false,
            prettier_cmd: DEFAULT_PRETTIER_CMD.to_string(),
            prettier_config: None,
            prettier_config_bcc: None,
            prettier_config_benchmark: None,
            output_bcc: None,
            output_benchmark: None,
        }
    }
}

// An empty path means "not given".
fn non_empty(path: Option<&PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty()).cloned()
}

impl GeneratorSettings {
    pub fn resolve(cli: &CliConfig, file: &FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            prettier: cli
                .prettier_flag()
                .or(file.prettier.enabled)
                .unwrap_or(defaults.prettier),
            prettier_cmd: cli
                .prettier_cmd
                .clone()
                .or_else(|| file.prettier.cmd.clone())
                .unwrap_or(defaults.prettier_cmd),
            prettier_config: non_empty(cli.prettier_config.as_ref())
                .or_else(|| non_empty(file.prettier.config.as_ref())),
            prettier_config_bcc: non_empty(cli.prettier_config_bcc.as_ref())
                .or_else(|| non_empty(file.prettier.config_bcc.as_ref())),
            prettier_config_benchmark: non_empty(cli.prettier_config_benchmark.as_ref())
                .or_else(|| non_empty(file.prettier.config_benchmark.as_ref())),
            output_bcc: non_empty(cli.output_bcc.as_ref())
                .or_else(|| non_empty(file.output.bcc.as_ref())),
            output_benchmark: non_empty(cli.output_benchmark.as_ref())
                .or_else(|| non_empty(file.output.benchmark.as_ref())),
        }
    }

    pub fn benchmark_prettier_config(&self) -> Option<&Path> {
        self.prettier_config_benchmark
            .as_deref()
            .or(self.prettier_config.as_deref())
    }

    pub fn bcc_prettier_config(&self) -> Option<&Path> {
        self.prettier_config_bcc
            .as_deref()
            .or(self.prettier_config.as_deref())
    }

    pub fn benchmark_output(&self) -> PathBuf {
        self.output_benchmark
            .clone()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_DIR).join(BENCHMARK_OUT_NAME))
    }

    pub fn bcc_output(&self) -> PathBuf {
        self.output_bcc
            .clone()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_DIR).join(BCC_SECTORS_OUT_NAME))
    }

    /// True when at least one module goes to the default `dist/` directory.
    pub fn uses_default_output_dir(&self) -> bool {
        self.output_bcc.is_none() || self.output_benchmark.is_none()
    }
}

impl Validate for GeneratorSettings {
    fn validate(&self) -> Result<()> {
        if self.prettier {
            validate_non_empty_string("prettier_cmd", &self.prettier_cmd)?;
        }
        if let Some(path) = &self.output_bcc {
            validate_path("output_bcc", &path.to_string_lossy())?;
        }
        if let Some(path) = &self.output_benchmark {
            validate_path("output_benchmark", &path.to_string_lossy())?;
        }
        Ok(())
    }
}
