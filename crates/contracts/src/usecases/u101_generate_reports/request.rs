//! Request side of POST /process.
//!
//! The request body is multipart form data, not JSON: two binary file parts
//! and one text part. Only the field names and the year values are contract
//! material; the files themselves are opaque.

/// Multipart field carrying the FCTC marks workbook.
pub const FIELD_FCTC_FILE: &str = "fctc_file";

/// Multipart field carrying the roll call workbook.
pub const FIELD_ROLL_CALL_FILE: &str = "roll_call_file";

/// Multipart text field carrying the selected academic year.
pub const FIELD_YEAR: &str = "year";

/// Academic year understood by the report server.
///
/// The wire value is the Roman spelling; the server also accepts the numeric
/// aliases "1"/"2"/"3", which `parse` folds into the same variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcademicYear {
    First,
    Second,
    Third,
}

impl AcademicYear {
    pub const ALL: [AcademicYear; 3] = [
        AcademicYear::First,
        AcademicYear::Second,
        AcademicYear::Third,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AcademicYear::First => "I",
            AcademicYear::Second => "II",
            AcademicYear::Third => "III",
        }
    }

    /// Label for the year selector.
    pub fn label(&self) -> &'static str {
        match self {
            AcademicYear::First => "First Year (I)",
            AcademicYear::Second => "Second Year (II)",
            AcademicYear::Third => "Third Year (III)",
        }
    }

    pub fn parse(value: &str) -> Option<AcademicYear> {
        match value.trim() {
            "I" | "1" => Some(AcademicYear::First),
            "II" | "2" => Some(AcademicYear::Second),
            "III" | "3" => Some(AcademicYear::Third),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roman_and_numeric() {
        assert_eq!(AcademicYear::parse("I"), Some(AcademicYear::First));
        assert_eq!(AcademicYear::parse("2"), Some(AcademicYear::Second));
        assert_eq!(AcademicYear::parse(" III "), Some(AcademicYear::Third));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(AcademicYear::parse(""), None);
        assert_eq!(AcademicYear::parse("IV"), None);
        assert_eq!(AcademicYear::parse("first"), None);
    }

    #[test]
    fn test_wire_values() {
        let values: Vec<&str> = AcademicYear::ALL.iter().map(|y| y.as_str()).collect();
        assert_eq!(values, ["I", "II", "III"]);
    }
}
