//! Defines the endpoint for downloading previewed transactions as a file.

use axum::{
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::html;
use serde::Deserialize;

use crate::{
    Error,
    alert::Alert,
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    record::TransactionRecord,
};

use super::{core::build_rows, csv::write_csv, xlsx::write_xlsx};

const CSV_MIME_TYPE: &str = "text/csv";
const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// The download form submitted from the preview page.
#[derive(Debug, Default, Deserialize)]
pub struct DownloadForm {
    /// The previewed records as a JSON array.
    #[serde(default)]
    pub data: String,
    /// The requested file format, "txt" or "xlsx".
    #[serde(default)]
    pub file_type: String,
}

/// A route handler that exports the submitted records as a downloadable
/// file.
///
/// The record data is round-tripped through the preview page as JSON, so it
/// is re-validated here rather than trusted: unparsable data and
/// unrecognized formats are rejected with an explicit diagnostic page
/// instead of falling back to a default export.
pub async fn download_endpoint(Form(form): Form<DownloadForm>) -> Result<Response, Error> {
    let records: Vec<TransactionRecord> = match serde_json::from_str(&form.data) {
        Ok(records) => records,
        Err(error) => {
            tracing::error!("could not parse submitted record data: {error}");

            return Ok(render_rejection(Alert::error(
                "Could not read the transaction data",
                "The submitted records could not be parsed. \
                Generate a new preview and try the download again.",
            )));
        }
    };

    let rows = build_rows(&records);

    let (bytes, mime_type, filename) = match form.file_type.as_str() {
        "txt" => (write_csv(&rows)?, CSV_MIME_TYPE, "Transactions.txt"),
        "xlsx" => (write_xlsx(&rows)?, XLSX_MIME_TYPE, "Transactions.xlsx"),
        other => {
            tracing::error!("unsupported export format requested: {other:?}");

            return Ok(render_rejection(Alert::error(
                "Unsupported download format",
                &format!("\"{other}\" is not a supported format. Choose Text or Excel."),
            )));
        }
    };

    tracing::info!(
        "Exporting {} transactions as {filename}",
        records.len()
    );

    Ok((
        [
            (CONTENT_TYPE, mime_type.to_owned()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// Render the explicit rejection page for a bad export request.
fn render_rejection(alert: Alert) -> Response {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-md"
            {
                (alert.into_html())

                a href=(endpoints::ROOT) class="text-blue-600 hover:text-blue-500 underline"
                {
                    "Back to the generator"
                }
            }
        }
    };

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        base("Download Failed", &content),
    )
        .into_response()
}
