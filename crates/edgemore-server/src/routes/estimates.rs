use axum::extract::{Request, State};
use axum::Json;
use serde::Serialize;

use edgemore_core::filenames;
use edgemore_core::models::estimate::EstimateRequest;
use edgemore_export::compose::compose;
use edgemore_export::pdf::generate_pdf;

use crate::form::read_form_pairs;
use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Estimate submitted successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: SubmitStatus,
    pub message: String,
}

impl SubmitResponse {
    fn ok() -> Self {
        Self {
            status: SubmitStatus::Ok,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            status: SubmitStatus::Error,
            message,
        }
    }
}

/// Render the submitted estimate to PDF and email it.
///
/// Always answers `200`; failures are reported in the body with
/// `"status": "error"`. An empty body counts as an empty form, but a body
/// that cannot be read as a form is rejected without sending anything.
pub async fn submit_estimate(
    State(state): State<AppState>,
    request: Request,
) -> Json<SubmitResponse> {
    let pairs = match read_form_pairs(request).await {
        Ok(pairs) => pairs,
        Err(e) => {
            tracing::warn!(error = %e, "unreadable estimate form");
            return Json(SubmitResponse::error(format!("Error reading form: {e}")));
        }
    };
    let estimate = EstimateRequest::from_form_pairs(pairs);

    let generated_at = jiff::Zoned::now().datetime();
    let pdf = match generate_pdf(&compose(&estimate, generated_at)) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, "estimate PDF rendering failed");
            return Json(SubmitResponse::error(format!("Error generating PDF: {e}")));
        }
    };

    let filename = filenames::estimate_attachment(&estimate.name);
    match state.mailer.send_estimate(&estimate, pdf, &filename).await {
        Ok(()) => {
            tracing::info!(filename = %filename, "estimate emailed");
            Json(SubmitResponse::ok())
        }
        Err(e) => {
            tracing::warn!(error = %e, filename = %filename, "estimate email failed");
            Json(SubmitResponse::error(format!("Error sending email: {e}")))
        }
    }
}
