use crate::config::toml_config::FileConfig;
use crate::config::GeneratorSettings;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "smech-nace-mapping")]
#[command(about = "Generate sector mappings and lists")]
pub struct CliConfig {
    /// Run Prettier on the output
    #[arg(long, overrides_with = "no_prettier")]
    pub prettier: bool,

    /// Do not run Prettier on the output
    #[arg(long = "no-prettier", overrides_with = "prettier")]
    pub no_prettier: bool,

    /// Command to run Prettier [default: "npx prettier"]
    #[arg(long = "prettier_cmd", value_name = "CMD")]
    pub prettier_cmd: Option<String>,

    /// Location of a Prettier config file
    #[arg(long = "prettier_config", value_name = "PATH")]
    pub prettier_config: Option<PathBuf>,

    /// Prettier config file for sectors.data.ts
    #[arg(long = "prettier_config_bcc", value_name = "PATH")]
    pub prettier_config_bcc: Option<PathBuf>,

    /// Prettier config file for naces.ts
    #[arg(long = "prettier_config_benchmark", value_name = "PATH")]
    pub prettier_config_benchmark: Option<PathBuf>,

    /// Output path to write the generated sectors.data.ts file
    #[arg(long = "output_bcc", value_name = "PATH")]
    pub output_bcc: Option<PathBuf>,

    /// Output path to write the generated naces.ts file
    #[arg(long = "output_benchmark", value_name = "PATH")]
    pub output_benchmark: Option<PathBuf>,

    /// Settings file (TOML); command line flags take precedence
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// `Some` only when one of `--prettier` / `--no-prettier` was given.
    pub fn prettier_flag(&self) -> Option<bool> {
        if self.prettier {
            Some(true)
        } else if self.no_prettier {
            Some(false)
        } else {
            None
        }
    }

    pub fn load_settings(&self) -> Result<GeneratorSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading settings from: {}", path.display());
                FileConfig::from_file(path)?
            }
            None => FileConfig::default(),
        };
        Ok(GeneratorSettings::resolve(self, &file))
    }
}
