//! Positional CSV reading shared by both sheet loaders.

use crate::domain::model::{
    SourceMappingRow, TargetSectorRow, BCC_SECTORS_COLUMNS, SMECH_SECTORS_COLUMNS,
};
use crate::utils::error::{GenError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

/// Yields `(row_number, record)` for every data row, skipping the heading row.
///
/// Row numbers match the spreadsheet: the heading is row 1, so data starts at 2.
pub fn data_records<R: Read>(reader: R) -> impl Iterator<Item = Result<(usize, StringRecord)>> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
        .into_records()
        .skip(1)
        .enumerate()
        .map(|(idx, record)| {
            record
                .map(|record| (idx + 2, record))
                .map_err(GenError::from)
        })
}

fn field(record: &StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or_default().to_string()
}

fn extra(record: &StringRecord, from: usize) -> Vec<String> {
    record.iter().skip(from).map(str::to_string).collect()
}

impl From<&StringRecord> for SourceMappingRow {
    fn from(record: &StringRecord) -> Self {
        Self {
            smech_name: field(record, 0),
            smech_code: field(record, 1),
            nace_name: field(record, 2),
            exio2_code: field(record, 3),
            exio3_code: field(record, 4),
            bcc_code: field(record, 5),
            extra: extra(record, SMECH_SECTORS_COLUMNS.len()),
        }
    }
}

impl From<&StringRecord> for TargetSectorRow {
    fn from(record: &StringRecord) -> Self {
        Self {
            nace_code: field(record, 0),
            ignore1: field(record, 1),
            ignore2: field(record, 2),
            exio3_name: field(record, 3),
            nace_name: field(record, 4),
            notes: field(record, 5),
            use_for_bcc: field(record, 6),
            bcc_name: field(record, 7),
            extra: extra(record, BCC_SECTORS_COLUMNS.len()),
        }
    }
}
