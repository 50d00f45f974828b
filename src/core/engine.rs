use crate::core::Pipeline;
use crate::utils::error::Result;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub written: Vec<String>,
    pub mapping_count: usize,
    pub sector_count: usize,
    pub warning_count: usize,
}

pub struct GenerationEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GenerationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("Loading sector sheets...");
        let tables = self.pipeline.extract()?;
        tracing::info!(
            "Loaded {} SMECH mappings and {} BCC sectors",
            tables.smech_to_bcc.len(),
            tables.bcc_sectors.len()
        );

        tracing::info!("Generating modules...");
        let modules = self.pipeline.transform(tables)?;
        let mapping_count = modules.mapping_count;
        let sector_count = modules.sector_count;
        let warning_count = modules.warning_count;

        tracing::info!("Writing modules...");
        let written = self.pipeline.load(modules)?;
        for path in &written {
            tracing::info!("📁 Wrote {}", path);
        }

        Ok(RunSummary {
            written,
            mapping_count,
            sector_count,
            warning_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{
        Diagnostic, GeneratedModules, RenderedModule, SourceTables, SourceToTargetMapping,
        TargetSectorMapping,
    };
    use crate::utils::error::GenError;
    use std::cell::RefCell;

    /// Scripted pipeline that records which phases ran.
    struct StubPipeline {
        fail_transform: bool,
        phases: RefCell<Vec<&'static str>>,
    }

    impl StubPipeline {
        fn new(fail_transform: bool) -> Self {
            Self {
                fail_transform,
                phases: RefCell::new(Vec::new()),
            }
        }
    }

    impl Pipeline for StubPipeline {
        fn extract(&self) -> Result<SourceTables> {
            self.phases.borrow_mut().push("extract");
            Ok(SourceTables {
                smech_to_bcc: SourceToTargetMapping::new(),
                bcc_sectors: TargetSectorMapping::new(),
                diagnostics: vec![Diagnostic::MissingTargetCode {
                    row: 2,
                    source_code: "1".into(),
                    source_name: "A".into(),
                }],
            })
        }

        fn transform(&self, tables: SourceTables) -> Result<GeneratedModules> {
            self.phases.borrow_mut().push("transform");
            if self.fail_transform {
                return Err(GenError::UnknownTargetCode {
                    source_code: "1".into(),
                    target_code: "2".into(),
                });
            }
            let module = |file_name: &'static str| RenderedModule {
                file_name,
                text: String::new(),
            };
            Ok(GeneratedModules {
                benchmark: module("naces.ts"),
                bcc_sectors: module("sectors.data.ts"),
                mapping_count: tables.smech_to_bcc.len(),
                sector_count: tables.bcc_sectors.len(),
                warning_count: tables.diagnostics.len(),
            })
        }

        fn load(&self, _modules: GeneratedModules) -> Result<Vec<String>> {
            self.phases.borrow_mut().push("load");
            Ok(vec!["a".into(), "b".into()])
        }
    }

    #[test]
    fn test_runs_all_phases_in_order() {
        let engine = GenerationEngine::new(StubPipeline::new(false));
        let summary = engine.run().unwrap();
        assert_eq!(
            *engine.pipeline().phases.borrow(),
            vec!["extract", "transform", "load"]
        );
        assert_eq!(summary.written, vec!["a", "b"]);
        assert_eq!(summary.warning_count, 1);
    }

    #[test]
    fn test_failure_stops_before_load() {
        let engine = GenerationEngine::new(StubPipeline::new(true));
        assert!(engine.run().is_err());
        assert_eq!(
            *engine.pipeline().phases.borrow(),
            vec!["extract", "transform"]
        );
    }
}
