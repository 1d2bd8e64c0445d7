use serde::{Deserialize, Serialize};

/// JSON envelope returned by POST /process.
///
/// Every field is defaulted on decode: a body like `{"success": false}` is
/// still a valid envelope, and absent fields read as falsy the way the
/// server's clients have always treated them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub data: Option<ReportSummary>,
}

/// Processing summary attached to a successful response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    #[serde(default)]
    pub matched_students: Option<u32>,

    #[serde(default)]
    pub year: Option<String>,

    /// Server-side paths of the generated reports, in generation order.
    #[serde(default)]
    pub generated_files: Option<Vec<String>>,
}

/// Report family, recognized by a substring of the generated file path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Master,
    Department,
    Division,
    Other,
}

impl ReportKind {
    pub fn classify(path: &str) -> ReportKind {
        if path.contains("master") {
            ReportKind::Master
        } else if path.contains("department") {
            ReportKind::Department
        } else if path.contains("division") {
            ReportKind::Division
        } else {
            ReportKind::Other
        }
    }

    /// Label shown next to the download link.
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Master => "Master Report",
            ReportKind::Department => "Department Report",
            ReportKind::Division => "Division Report",
            ReportKind::Other => "Report",
        }
    }
}
