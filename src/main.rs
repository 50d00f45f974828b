use anyhow::Context;
use clap::Parser;
use smech_nace_mapping::utils::{logger, validation::Validate};
use smech_nace_mapping::{
    formatter_for, CliConfig, GenError, GenerationEngine, LocalStorage, RunSummary,
    SectorPipeline,
};
use std::process::ExitCode;

fn run(config: &CliConfig) -> anyhow::Result<RunSummary> {
    let settings = config.load_settings().context("failed to load settings")?;
    settings.validate().context("invalid settings")?;
    if settings.prettier {
        tracing::info!("🔧 Formatting output with `{}`", settings.prettier_cmd);
    }

    let formatter = formatter_for(&settings);
    let pipeline = SectorPipeline::new(LocalStorage::default(), formatter, settings);
    let engine = GenerationEngine::new(pipeline);
    Ok(engine.run()?)
}

fn main() -> ExitCode {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(summary) => {
            tracing::info!(
                "✅ Generated {} mappings and {} sectors ({} warnings)",
                summary.mapping_count,
                summary.sector_count,
                summary.warning_count
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("Generation failed: {:?}", e);
            eprintln!("❌ {:#}", e);
            if let Some(gen_error) = e.downcast_ref::<GenError>() {
                eprintln!("💡 Suggestion: {}", gen_error.recovery_suggestion());
            }
            ExitCode::FAILURE
        }
    }
}
