pub mod cross_ref;
pub mod csv_rows;
pub mod engine;
pub mod render;
pub mod sectors;
pub mod smech;

pub use crate::domain::model::{GeneratedModules, SourceTables};
pub use crate::domain::ports::{CodeFormatter, Pipeline, Storage};
pub use crate::utils::error::Result;
