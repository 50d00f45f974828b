use crate::core::csv_rows::data_records;
use crate::domain::model::{Diagnostic, Loaded, SourceMappingRow, SourceToTargetMapping};
use crate::utils::error::{GenError, Result};
use crate::utils::validation::expect_digits_only;
use std::io::Read;

/// Loads the SMECH sheet into a SMECH code to NACE code mapping.
///
/// Rows without a BCC code are skipped with a warning diagnostic. Repeating
/// a mapping is harmless; mapping one SMECH code to two NACE codes is an error.
pub fn load_smech_to_bcc<R: Read>(reader: R) -> Result<Loaded<SourceToTargetMapping>> {
    let mut mapping = SourceToTargetMapping::new();
    let mut diagnostics = Vec::new();

    for record in data_records(reader) {
        let (row_idx, record) = record?;
        let row = SourceMappingRow::from(&record);
        let smech_code = row.smech_code.trim();
        let bcc_code = row.bcc_code.trim();

        if bcc_code.is_empty() {
            diagnostics.push(Diagnostic::MissingTargetCode {
                row: row_idx,
                source_code: smech_code.to_string(),
                source_name: row.smech_name.clone(),
            });
            continue;
        }

        expect_digits_only(smech_code, "smech_code", row_idx)?;
        expect_digits_only(bcc_code, "bcc_code", row_idx)?;

        match mapping.get(smech_code) {
            Some(existing) if existing != bcc_code => {
                return Err(GenError::DuplicateMapping {
                    source_code: smech_code.to_string(),
                    row: row_idx,
                });
            }
            _ => {}
        }

        diagnostics.push(Diagnostic::Mapped {
            row: row_idx,
            source_code: smech_code.to_string(),
            source_name: row.smech_name.clone(),
            target_code: bcc_code.to_string(),
        });
        mapping.insert(smech_code.to_string(), bcc_code.to_string());
    }

    Ok(Loaded {
        value: mapping,
        diagnostics,
    })
}
