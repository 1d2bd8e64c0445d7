//! Submission-cycle state for the generate-reports form.
//!
//! The phase machine and the outcome-to-feedback mapping are plain data and
//! functions; the component in `view.rs` owns the signals that carry them.

use contracts::usecases::u101_generate_reports::{ProcessResponse, ReportSummary};

use super::api::SubmitError;

/// Where the current submission cycle stands.
///
/// `Submitting` spans exactly one in-flight request; everything else in the
/// cycle (validation, rendering the outcome) happens within a single event
/// turn and lands back in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionPhase {
    /// A new cycle may start only from `Idle`. The trigger button is
    /// disabled while `Submitting`, and the submit handler re-checks this
    /// before issuing a request, so a queued second event cannot overlap
    /// the one in flight.
    pub fn can_submit(self) -> bool {
        matches!(self, SubmissionPhase::Idle)
    }
}

/// Kind of the inline message panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Inline message shown above the results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: MessageKind,
    pub text: String,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            MessageKind::Success => "message success",
            MessageKind::Error => "message error",
        }
    }
}

/// Fallback when the server reports a failure without a usable message.
pub const GENERIC_SERVER_ERROR: &str = "An error occurred while processing files";

/// Fixed message for transport-level failures.
pub const NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";

/// Fold the outcome of one submission into what the user sees.
///
/// Server-reported failures surface the server's message; transport
/// failures and anything else unexpected share the fixed network message.
pub fn submit_feedback(
    outcome: Result<ProcessResponse, SubmitError>,
) -> (Feedback, Option<ReportSummary>) {
    match outcome {
        Ok(response) => (Feedback::success(response.message), response.data),
        Err(SubmitError::Server { message, .. }) => (
            Feedback::error(message.unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string())),
            None,
        ),
        Err(SubmitError::Network(_)) => (Feedback::error(NETWORK_ERROR), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_submit_only_when_idle() {
        assert!(SubmissionPhase::Idle.can_submit());
        assert!(!SubmissionPhase::Submitting.can_submit());
    }

    #[test]
    fn test_success_carries_message_and_summary() {
        let response = ProcessResponse {
            success: true,
            message: "Done".to_string(),
            data: Some(ReportSummary {
                matched_students: Some(42),
                year: Some("2024".to_string()),
                generated_files: Some(vec!["out/master_2024.xlsx".to_string()]),
            }),
        };
        let (feedback, summary) = submit_feedback(Ok(response));
        assert_eq!(feedback.kind, MessageKind::Success);
        assert_eq!(feedback.text, "Done");
        assert_eq!(summary.unwrap().matched_students, Some(42));
    }

    #[test]
    fn test_server_failure_uses_server_message() {
        let error = SubmitError::Server {
            status: 400,
            message: Some("Please select the FCTC Excel file".to_string()),
        };
        let (feedback, summary) = submit_feedback(Err(error));
        assert_eq!(feedback.kind, MessageKind::Error);
        assert_eq!(feedback.text, "Please select the FCTC Excel file");
        assert!(summary.is_none());
    }

    #[test]
    fn test_server_failure_without_message_falls_back() {
        let error = SubmitError::Server {
            status: 500,
            message: None,
        };
        let (feedback, _) = submit_feedback(Err(error));
        assert_eq!(feedback.text, GENERIC_SERVER_ERROR);
    }

    #[test]
    fn test_transport_failure_uses_fixed_message() {
        let (feedback, summary) =
            submit_feedback(Err(SubmitError::Network("connection refused".to_string())));
        assert_eq!(feedback.kind, MessageKind::Error);
        assert_eq!(feedback.text, NETWORK_ERROR);
        assert!(summary.is_none());
    }
}
