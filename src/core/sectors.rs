use crate::core::csv_rows::data_records;
use crate::domain::model::{Loaded, TargetSectorMapping, TargetSectorRow};
use crate::utils::error::{GenError, Result};
use crate::utils::validation::{expect_digits_only, expect_not_digits_only};
use std::io::Read;

/// Loads the BCC sector sheet into a NACE code to display name mapping.
///
/// Only rows marked for use are considered. A NACE code marked twice is
/// always an error.
pub fn load_bcc_sectors<R: Read>(reader: R) -> Result<Loaded<TargetSectorMapping>> {
    let mut mapping = TargetSectorMapping::new();

    for record in data_records(reader) {
        let (row_idx, record) = record?;
        let row = TargetSectorRow::from(&record);
        if !row.is_included() {
            continue;
        }

        let nace_code = row.nace_code.trim();
        let bcc_name = row.bcc_name.trim();
        expect_digits_only(nace_code, "nace_code", row_idx)?;
        expect_not_digits_only(bcc_name, "bcc_name", row_idx)?;

        if !mapping.insert(nace_code.to_string(), bcc_name.to_string()) {
            return Err(GenError::DuplicateTargetCode {
                code: nace_code.to_string(),
                row: row_idx,
            });
        }
    }

    tracing::debug!("Loaded {} BCC sectors", mapping.len());
    Ok(Loaded {
        value: mapping,
        diagnostics: Vec::new(),
    })
}
