//! Meeting endpoints — summarize a transcript, export notes to PDF.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::export::export_meeting_pdf;
use crate::pipeline::extract::MergedDate;
use crate::pipeline::{summarize_from_text, MeetingNotes};

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    /// Optional anchor for relative date resolution (`YYYY-MM-DD`).
    /// Defaults to the server's current date, captured once per request.
    pub reference_date: Option<String>,
}

/// `POST /api/meetings/summarize`
///
/// Runs the full pipeline and returns `{ summary, actions, dates }`.
/// The blocking summarization client runs on the blocking pool.
pub async fn summarize(
    State(ctx): State<ApiContext>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<MeetingNotes>, ApiError> {
    let today = match &req.reference_date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| ApiError::BadRequest(format!("Invalid reference_date: {raw}")))?,
        None => Local::now().date_naive(),
    };

    let summarizer = ctx.summarizer.clone();
    let text = req.text;
    let notes = tokio::task::spawn_blocking(move || {
        summarize_from_text(summarizer.as_ref(), &text, today)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("summarize task failed: {e}")))??;

    Ok(Json(notes))
}

#[derive(Deserialize)]
pub struct ExportRequest {
    pub transcript: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub dates: Vec<MergedDate>,
}

/// `POST /api/meetings/export`
///
/// Accepts the notes shape back from the client and returns the rendered
/// PDF as an attachment. Stateless: nothing is kept server-side.
pub async fn export(Json(req): Json<ExportRequest>) -> Result<Response, ApiError> {
    let notes = MeetingNotes {
        summary: req.summary,
        actions: req.actions,
        dates: req.dates,
    };
    let bytes = export_meeting_pdf(req.transcript.as_deref(), &notes)?;

    tracing::debug!(bytes = bytes.len(), "meeting PDF generated");

    let headers = [
        (header::CONTENT_TYPE, "application/pdf"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"meeting_summary.pdf\"",
        ),
    ];
    Ok((headers, bytes).into_response())
}
