use crate::domain::model::{GeneratedModules, SourceTables};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
}

/// Reformats generated source text.
///
/// Implementations must fail rather than return partial output when the
/// underlying tool reports an error.
pub trait CodeFormatter {
    fn format(&self, code: &str, filename_hint: &str, config_path: Option<&Path>)
        -> Result<String>;
}

impl<F: CodeFormatter + ?Sized> CodeFormatter for &F {
    fn format(
        &self,
        code: &str,
        filename_hint: &str,
        config_path: Option<&Path>,
    ) -> Result<String> {
        (**self).format(code, filename_hint, config_path)
    }
}

impl<F: CodeFormatter + ?Sized> CodeFormatter for Box<F> {
    fn format(
        &self,
        code: &str,
        filename_hint: &str,
        config_path: Option<&Path>,
    ) -> Result<String> {
        (**self).format(code, filename_hint, config_path)
    }
}

pub trait Pipeline {
    fn extract(&self) -> Result<SourceTables>;
    fn transform(&self, tables: SourceTables) -> Result<GeneratedModules>;
    /// Writes both modules and returns the paths written, benchmark first.
    fn load(&self, modules: GeneratedModules) -> Result<Vec<String>>;
}
