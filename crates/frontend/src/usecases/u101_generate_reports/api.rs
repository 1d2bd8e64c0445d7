//! API client for the report server.
//!
//! The server serves the page and the API from one origin, so requests use
//! relative URLs.

use contracts::usecases::u101_generate_reports::{
    ProcessResponse, FIELD_FCTC_FILE, FIELD_ROLL_CALL_FILE, FIELD_YEAR,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

pub const PROCESS_URL: &str = "/process";
const DOWNLOAD_URL_PREFIX: &str = "/download";

/// How one submission failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The server answered but reported a failure (`success: false` or a
    /// non-2xx status). `message` is `None` when the body carried none.
    Server {
        status: u16,
        message: Option<String>,
    },
    /// The request never produced a decodable response.
    Network(String),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Server { status, message } => match message {
                Some(message) => write!(f, "server error (HTTP {status}): {message}"),
                None => write!(f, "server error (HTTP {status})"),
            },
            SubmitError::Network(detail) => write!(f, "network error: {detail}"),
        }
    }
}

/// Href for one generated report, opened in a new tab.
pub fn download_href(file_path: &str) -> String {
    format!("{DOWNLOAD_URL_PREFIX}/{}", urlencoding::encode(file_path))
}

/// Upload both workbooks and the selected year, decode the JSON envelope.
///
/// `Ok` means the server accepted the request and reported success; every
/// other outcome maps onto [`SubmitError`].
pub async fn process_files(
    fctc: &web_sys::File,
    roll_call: &web_sys::File,
    year: &str,
) -> Result<ProcessResponse, SubmitError> {
    let window =
        web_sys::window().ok_or_else(|| SubmitError::Network("no window object".to_string()))?;

    let form = FormData::new()
        .map_err(|e| SubmitError::Network(format!("failed to build form data: {e:?}")))?;
    form.append_with_blob(FIELD_FCTC_FILE, fctc)
        .map_err(|e| SubmitError::Network(format!("failed to attach FCTC file: {e:?}")))?;
    form.append_with_blob(FIELD_ROLL_CALL_FILE, roll_call)
        .map_err(|e| SubmitError::Network(format!("failed to attach Roll Call file: {e:?}")))?;
    form.append_with_str(FIELD_YEAR, year)
        .map_err(|e| SubmitError::Network(format!("failed to attach year: {e:?}")))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(PROCESS_URL, &opts)
        .map_err(|e| SubmitError::Network(format!("failed to create request: {e:?}")))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| SubmitError::Network(format!("fetch failed: {e:?}")))?;

    let response: Response = response_value
        .dyn_into()
        .map_err(|_| SubmitError::Network("not a Response".to_string()))?;

    let http_ok = response.ok();
    let status = response.status();

    let json_promise = response
        .json()
        .map_err(|e| SubmitError::Network(format!("failed to read response: {e:?}")))?;
    let json = JsFuture::from(json_promise)
        .await
        .map_err(|e| SubmitError::Network(format!("failed to parse JSON: {e:?}")))?;

    let parsed: ProcessResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| SubmitError::Network(e.to_string()))?;

    log::info!(
        "server response (HTTP {status}): {}",
        serde_json::to_string(&parsed).unwrap_or_default()
    );

    if http_ok && parsed.success {
        Ok(parsed)
    } else {
        let message = Some(parsed.message).filter(|m| !m.trim().is_empty());
        Err(SubmitError::Server { status, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_href_percent_encodes_the_path() {
        assert_eq!(
            download_href("out/master_2024.xlsx"),
            "/download/out%2Fmaster_2024.xlsx"
        );
        assert_eq!(
            download_href("reports/division a.xls"),
            "/download/reports%2Fdivision%20a.xls"
        );
    }

    #[test]
    fn test_submit_error_display() {
        let error = SubmitError::Server {
            status: 400,
            message: Some("bad year".to_string()),
        };
        assert_eq!(error.to_string(), "server error (HTTP 400): bad year");

        let error = SubmitError::Network("connection reset".to_string());
        assert_eq!(error.to_string(), "network error: connection reset");
    }
}
