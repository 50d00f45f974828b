use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Generated text is not valid UTF-8: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("Settings file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("{field} is expected to {expectation}, but got {value:?} on row {row}")]
    FieldValidation {
        field: String,
        row: usize,
        value: String,
        expectation: &'static str,
    },

    #[error("smech_code {source_code} has multiple mappings (duplicate on row {row})")]
    DuplicateMapping { source_code: String, row: usize },

    #[error("nace_code is expected to be unique but got a duplicate of {code:?} on row {row}. Mistake?")]
    DuplicateTargetCode { code: String, row: usize },

    #[error("SMECH code {source_code} maps to NACE {target_code} which is not in the BCC sector list")]
    UnknownTargetCode {
        source_code: String,
        target_code: String,
    },

    #[error("Formatter `{command}` failed ({status}): {stderr}")]
    FormatterError {
        command: String,
        status: String,
        stderr: String,
    },
}

impl GenError {
    /// Short hint printed next to the error on the command line.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GenError::CsvError(_) => "Check the CSV export for broken quoting",
            GenError::IoError(_) => "Check that the input files exist and the output location is writable",
            GenError::SerializationError(_) | GenError::EncodingError(_) => {
                "This is a bug in the generator, please report it"
            }
            GenError::TomlError(_) | GenError::ConfigError { .. } => {
                "Check the command line flags and the settings file"
            }
            GenError::FieldValidation { .. } => {
                "Fix the cell in the spreadsheet; the columns may be misaligned"
            }
            GenError::DuplicateMapping { .. } => {
                "Each SMECH code may only map to one NACE code; remove the conflicting row"
            }
            GenError::DuplicateTargetCode { .. } => {
                "Only one row per NACE code may be marked for use"
            }
            GenError::UnknownTargetCode { .. } => {
                "Mark the NACE code for use in bcc_sectors.csv or fix the SMECH mapping"
            }
            GenError::FormatterError { .. } => {
                "Run the formatter by hand or pass --no-prettier"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
