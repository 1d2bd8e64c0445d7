//! Submit-time validation of the whole upload form.

use crate::shared::file_validation::{validate_file, FileMeta, ValidationResult, ALLOWED_EXTENSIONS};

pub const FCTC_LABEL: &str = "FCTC Excel file";
pub const ROLL_CALL_LABEL: &str = "Roll Call Excel file";

/// Check the whole request in the order the user reads the form: presence of
/// both files, then the year, then the per-file checks (FCTC first),
/// stopping at the first failure.
pub fn validate_request(
    fctc: Option<&FileMeta>,
    roll_call: Option<&FileMeta>,
    year: &str,
) -> ValidationResult {
    if fctc.is_none() {
        return ValidationResult::fail("Please select the FCTC Excel file");
    }

    if roll_call.is_none() {
        return ValidationResult::fail("Please select the Roll Call Excel file");
    }

    if year.trim().is_empty() {
        return ValidationResult::fail("Please select an academic year");
    }

    let fctc_check = validate_file(fctc, FCTC_LABEL, &ALLOWED_EXTENSIONS);
    if !fctc_check.valid {
        return fctc_check;
    }

    let roll_call_check = validate_file(roll_call, ROLL_CALL_LABEL, &ALLOWED_EXTENSIONS);
    if !roll_call_check.valid {
        return roll_call_check;
    }

    ValidationResult::ok("All inputs are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excel(name: &str) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            size: 2048,
        }
    }

    #[test]
    fn test_missing_fctc_reported_first() {
        // The oversized roll call file must not be looked at.
        let oversized = FileMeta {
            name: "roll.xlsx".to_string(),
            size: u64::MAX,
        };
        let result = validate_request(None, Some(&oversized), "2024");
        assert!(!result.valid);
        assert_eq!(result.message, "Please select the FCTC Excel file");
    }

    #[test]
    fn test_missing_roll_call_reported_second() {
        let result = validate_request(Some(&excel("fctc.xlsx")), None, "I");
        assert_eq!(result.message, "Please select the Roll Call Excel file");
    }

    #[test]
    fn test_blank_year_is_rejected() {
        let fctc = excel("fctc.xlsx");
        let roll = excel("roll.xlsx");
        for year in ["", "   "] {
            let result = validate_request(Some(&fctc), Some(&roll), year);
            assert!(!result.valid);
            assert_eq!(result.message, "Please select an academic year");
        }
    }

    #[test]
    fn test_fctc_file_checked_before_roll_call() {
        let bad_fctc = excel("fctc.pdf");
        let bad_roll = excel("roll.pdf");
        let result = validate_request(Some(&bad_fctc), Some(&bad_roll), "I");
        assert_eq!(
            result.message,
            "FCTC Excel file must be an Excel file (.xlsx or .xls)"
        );
    }

    #[test]
    fn test_roll_call_failure_surfaces_its_label() {
        let result = validate_request(Some(&excel("fctc.xls")), Some(&excel("roll.docx")), "II");
        assert_eq!(
            result.message,
            "Roll Call Excel file must be an Excel file (.xlsx or .xls)"
        );
    }

    #[test]
    fn test_complete_request_is_valid() {
        let result = validate_request(Some(&excel("fctc.xlsx")), Some(&excel("roll.xls")), "III");
        assert!(result.valid);
        assert_eq!(result.message, "All inputs are valid");
    }
}
