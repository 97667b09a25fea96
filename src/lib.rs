//! Cardforge is a web app that fabricates synthetic credit-card transactions
//! for testing and demos.
//!
//! The app serves HTML pages directly: a parameter form, a preview of the
//! generated records, and a download endpoint that exports the previewed
//! records as a CSV-formatted text file or an XLSX spreadsheet. Nothing is
//! persisted; each request is handled independently.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod about;
mod alert;
mod app_state;
mod endpoints;
mod export;
mod generate;
mod html;
mod internal_server_error;
mod navigation;
mod not_found;
mod record;
mod routing;
mod timezone;

pub use app_state::AppState;
pub use routing::build_router;

use crate::{
    internal_server_error::render_internal_server_error, not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// An error occurred while serializing records as JSON for the preview
    /// page's download form.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// An error occurred while encoding export rows as CSV.
    #[error("could not write CSV data: {0}")]
    CsvWriteError(String),

    /// An error occurred while building the XLSX workbook.
    #[error("could not write XLSX data: {0}")]
    XlsxWriteError(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_internal_server_error(Default::default())
            }
        }
    }
}
