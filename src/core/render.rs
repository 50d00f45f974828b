//! TypeScript templates for the two generated modules.

use crate::domain::model::{
    RenderedModule, SectorListEntry, SourceToTargetMapping, TargetSectorMapping,
};
use crate::utils::error::Result;
use crate::utils::json::to_ascii_string;

pub const BENCHMARK_OUT_NAME: &str = "naces.ts";
pub const BCC_SECTORS_OUT_NAME: &str = "sectors.data.ts";

const REPOSITORY: &str = "smech-nace-mapping";

/// Local time in ISO-8601 with microseconds, e.g. `2024-03-01T09:15:02.123456`.
///
/// The fraction is always written, even when it is zero.
pub fn generation_timestamp() -> String {
    chrono::Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

fn banner(generation_timestamp: &str) -> String {
    format!(
        "// GENERATED FILE. DO NOT EDIT BY HAND.\n\
         //\n\
         // Generated at {generation_timestamp}.\n\
         // See repository {REPOSITORY}\n"
    )
}

/// `naces.ts`: the sorted sector list and the SMECH to NACE mapping.
pub fn render_benchmark(
    bcc_sectors: &TargetSectorMapping,
    smech_to_bcc: &SourceToTargetMapping,
    generation_timestamp: &str,
) -> Result<RenderedModule> {
    let sector_list = to_ascii_string(&bcc_sectors.sector_list())?;
    let smech_mapping = to_ascii_string(smech_to_bcc)?;

    let text = format!(
        "{banner}
export interface NaceInfo {{
  name: string;
  nace: string;
}}

export const SECTOR_LIST: NaceInfo[] = {sector_list};

export type SMECHNaceInfo = {{ [key: string]: string }};

export const SMECH_NACE_MAPPING: SMECHNaceInfo = {smech_mapping};
",
        banner = banner(generation_timestamp),
    );

    Ok(RenderedModule {
        file_name: BENCHMARK_OUT_NAME,
        text,
    })
}

/// `sectors.data.ts`: the sorted sector list plus a trailing "Not listed" choice.
pub fn render_bcc_sectors(
    bcc_sectors: &TargetSectorMapping,
    generation_timestamp: &str,
) -> Result<RenderedModule> {
    let mut sectors = bcc_sectors.sector_list();
    sectors.push(SectorListEntry::not_listed());
    let bcc_sector_array = to_ascii_string(&sectors)?;

    let text = format!(
        "{banner}
import {{ Sector }} from './data.model';

export const SECTORS: Sector[] = {bcc_sector_array};
",
        banner = banner(generation_timestamp),
    );

    Ok(RenderedModule {
        file_name: BCC_SECTORS_OUT_NAME,
        text,
    })
}
