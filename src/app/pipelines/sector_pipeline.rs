use crate::config::{GeneratorSettings, BCC_SECTORS_PATH, DEFAULT_OUTPUT_DIR, SMECH_SECTORS_PATH};
use crate::core::cross_ref::check_targets_exist;
use crate::core::render::{generation_timestamp, render_bcc_sectors, render_benchmark};
use crate::core::sectors::load_bcc_sectors;
use crate::core::smech::load_smech_to_bcc;
use crate::domain::model::{Diagnostic, GeneratedModules, RenderedModule, SourceTables};
use crate::domain::ports::{CodeFormatter, Pipeline, Storage};
use crate::utils::error::Result;
use std::path::Path;

/// Reads both sheets, renders `naces.ts` and `sectors.data.ts`, and writes them.
pub struct SectorPipeline<S: Storage, F: CodeFormatter> {
    pub(crate) storage: S,
    pub(crate) formatter: F,
    pub(crate) settings: GeneratorSettings,
    generated_at: String,
}

impl<S: Storage, F: CodeFormatter> SectorPipeline<S, F> {
    pub fn new(storage: S, formatter: F, settings: GeneratorSettings) -> Self {
        Self {
            storage,
            formatter,
            settings,
            generated_at: generation_timestamp(),
        }
    }

    /// Pins the timestamp written into the file banners.
    pub fn with_generated_at(mut self, generated_at: impl Into<String>) -> Self {
        self.generated_at = generated_at.into();
        self
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    fn format(&self, module: RenderedModule, config_path: Option<&Path>) -> Result<RenderedModule> {
        tracing::debug!("Formatting {}", module.file_name);
        let text = self
            .formatter
            .format(&module.text, module.file_name, config_path)?;
        Ok(RenderedModule { text, ..module })
    }
}

fn report(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        if diagnostic.is_warning() {
            tracing::warn!("{}", diagnostic);
        } else {
            tracing::debug!("{}", diagnostic);
        }
    }
}

impl<S: Storage, F: CodeFormatter> Pipeline for SectorPipeline<S, F> {
    fn extract(&self) -> Result<SourceTables> {
        tracing::debug!("Reading {}", SMECH_SECTORS_PATH);
        let smech_csv = self.storage.read_to_string(Path::new(SMECH_SECTORS_PATH))?;
        let smech = load_smech_to_bcc(smech_csv.as_bytes())?;
        report(&smech.diagnostics);

        tracing::debug!("Reading {}", BCC_SECTORS_PATH);
        let bcc_csv = self.storage.read_to_string(Path::new(BCC_SECTORS_PATH))?;
        let bcc = load_bcc_sectors(bcc_csv.as_bytes())?;
        report(&bcc.diagnostics);

        let mut diagnostics = smech.diagnostics;
        diagnostics.extend(bcc.diagnostics);

        Ok(SourceTables {
            smech_to_bcc: smech.value,
            bcc_sectors: bcc.value,
            diagnostics,
        })
    }

    fn transform(&self, tables: SourceTables) -> Result<GeneratedModules> {
        check_targets_exist(&tables.smech_to_bcc, &tables.bcc_sectors)?;

        let benchmark = render_benchmark(
            &tables.bcc_sectors,
            &tables.smech_to_bcc,
            &self.generated_at,
        )?;
        let bcc_sectors = render_bcc_sectors(&tables.bcc_sectors, &self.generated_at)?;

        // Both modules are formatted before anything is written.
        let benchmark = self.format(benchmark, self.settings.benchmark_prettier_config())?;
        let bcc_sectors = self.format(bcc_sectors, self.settings.bcc_prettier_config())?;

        Ok(GeneratedModules {
            benchmark,
            bcc_sectors,
            mapping_count: tables.smech_to_bcc.len(),
            sector_count: tables.bcc_sectors.len(),
            warning_count: tables.diagnostics.iter().filter(|d| d.is_warning()).count(),
        })
    }

    fn load(&self, modules: GeneratedModules) -> Result<Vec<String>> {
        if self.settings.uses_default_output_dir() {
            self.storage.create_dir_all(Path::new(DEFAULT_OUTPUT_DIR))?;
        }

        let benchmark_path = self.settings.benchmark_output();
        let bcc_path = self.settings.bcc_output();

        tracing::debug!("Writing {}", benchmark_path.display());
        self.storage
            .write_file(&benchmark_path, modules.benchmark.text.as_bytes())?;
        tracing::debug!("Writing {}", bcc_path.display());
        self.storage
            .write_file(&bcc_path, modules.bcc_sectors.text.as_bytes())?;

        Ok(vec![
            benchmark_path.display().to_string(),
            bcc_path.display().to_string(),
        ])
    }
}
