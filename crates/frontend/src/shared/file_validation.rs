//! Client-side checks for a user-selected file.
//!
//! Everything the checks need travels in [`FileMeta`], so this module stays
//! pure and testable off the browser. Content is never inspected here; the
//! server re-validates whatever it receives.

/// Name and byte size captured from a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
}

impl FileMeta {
    pub fn from_file(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size() as u64,
        }
    }
}

/// Verdict of one check with a user-facing reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Maximum accepted upload size, matching the server cap.
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Extensions the report server accepts.
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// Check one candidate file.
///
/// The order is user-visible (the first failing check supplies the message):
/// presence, name, extension, size cap, emptiness. The size cap is checked
/// before emptiness even though an empty file can never exceed it; the
/// messages are long-established and the order stays with them.
pub fn validate_file(file: Option<&FileMeta>, label: &str, allowed: &[&str]) -> ValidationResult {
    let Some(file) = file else {
        return ValidationResult::fail(format!("{label} is required"));
    };

    if file.name.trim().is_empty() {
        return ValidationResult::fail(format!("{label} has an invalid name"));
    }

    // Extension is whatever follows the final dot; "report" (no dot) fails
    // the same way "report.pdf" does.
    let extension = file
        .name
        .rsplit('.')
        .next()
        .unwrap_or("")
        .to_lowercase();
    if !allowed.contains(&extension.as_str()) {
        return ValidationResult::fail(format!(
            "{label} must be an Excel file (.{})",
            allowed.join(" or .")
        ));
    }

    if file.size > MAX_FILE_SIZE {
        let size_mb = file.size as f64 / (1024.0 * 1024.0);
        return ValidationResult::fail(format!(
            "{label} is too large ({size_mb:.1}MB). Maximum size is 16MB."
        ));
    }

    if file.size == 0 {
        return ValidationResult::fail(format!("{label} is empty"));
    }

    ValidationResult::ok("File is valid")
}
