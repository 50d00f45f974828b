use crate::domain::model::{SourceToTargetMapping, TargetSectorMapping};
use crate::utils::error::{GenError, Result};

/// Every NACE code a SMECH code maps to must be a sector marked for use.
pub fn check_targets_exist(
    smech_to_bcc: &SourceToTargetMapping,
    bcc_sectors: &TargetSectorMapping,
) -> Result<()> {
    for (source_code, target_code) in smech_to_bcc.iter() {
        if !bcc_sectors.contains(target_code) {
            return Err(GenError::UnknownTargetCode {
                source_code: source_code.to_string(),
                target_code: target_code.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smech(pairs: &[(&str, &str)]) -> SourceToTargetMapping {
        pairs
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    fn sectors(pairs: &[(&str, &str)]) -> TargetSectorMapping {
        pairs
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn test_all_targets_present() {
        let mapping = smech(&[("5", "12"), ("6", "12"), ("7", "13")]);
        let sectors = sectors(&[("12", "Widgets"), ("13", "Gadgets"), ("14", "Unused")]);
        assert!(check_targets_exist(&mapping, &sectors).is_ok());
    }

    #[test]
    fn test_empty_mapping_passes() {
        assert!(check_targets_exist(&smech(&[]), &sectors(&[])).is_ok());
    }

    #[test]
    fn test_missing_target_fails_with_both_codes() {
        let mapping = smech(&[("5", "12"), ("8", "99")]);
        let sectors = sectors(&[("12", "Widgets")]);
        let err = check_targets_exist(&mapping, &sectors).unwrap_err();
        assert_eq!(
            err.to_string(),
            "SMECH code 8 maps to NACE 99 which is not in the BCC sector list"
        );
    }
}
