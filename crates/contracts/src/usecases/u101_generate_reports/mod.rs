pub mod request;
pub mod response;

pub use request::{AcademicYear, FIELD_FCTC_FILE, FIELD_ROLL_CALL_FILE, FIELD_YEAR};
pub use response::{ProcessResponse, ReportKind, ReportSummary};

use crate::usecases::common::UseCaseMetadata;

pub struct GenerateReports;

impl UseCaseMetadata for GenerateReports {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "generate_reports"
    }

    fn display_name() -> &'static str {
        "FCTC Exam Automation"
    }

    fn description() -> &'static str {
        "Match the FCTC marks file against the roll call and generate exam reports"
    }
}
