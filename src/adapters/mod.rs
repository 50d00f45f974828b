// Adapters layer: concrete implementations of the domain ports.

pub mod formatter;
pub mod storage;

pub use formatter::{formatter_for, PassthroughFormatter, PrettierFormatter};
pub use storage::LocalStorage;
