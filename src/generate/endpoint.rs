//! Defines the endpoint for generating a batch of transactions.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses repeated fields (checkbox
// groups) as a Vec instead of keeping only the last value like axum::Form.
use axum_extra::extract::Form;
use rand::{SeedableRng, rngs::SmallRng};
use time::OffsetDateTime;

use crate::{AppState, Error, timezone::get_local_offset};

use super::{core::generate, form::GeneratorForm, view::preview_view};

/// A route handler that generates transactions from the submitted
/// parameters and renders the preview page.
pub async fn generate_endpoint(
    State(state): State<AppState>,
    Form(form): Form<GeneratorForm>,
) -> Result<Response, Error> {
    let local_timezone = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone)
    })?;

    let today = OffsetDateTime::now_utc().to_offset(local_timezone).date();
    let params = form.into_params(today);

    let mut rng = SmallRng::from_entropy();
    let records = generate(&params, &mut rng);

    tracing::info!(
        "Generated {} transactions for {} cardholder(s)",
        records.len(),
        params.user_count
    );

    let records_json = serde_json::to_string(&records).map_err(|error| {
        tracing::error!("could not serialize records for the preview page: {error}");
        Error::JSONSerializationError(error.to_string())
    })?;

    Ok(preview_view(&records, &records_json).into_response())
}

#[cfg(test)]
mod generate_endpoint_tests {
    use axum::{body::Body, extract::State, http::StatusCode, response::Response};
    use axum_extra::extract::Form;
    use scraper::{Html, Selector};

    use crate::{AppState, generate::form::GeneratorForm, record::TransactionRecord};

    use super::generate_endpoint;

    fn test_state() -> AppState {
        AppState::new("Etc/UTC")
    }

    async fn parse_html(response: Response<Body>) -> Html {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");

        Html::parse_document(&String::from_utf8_lossy(&body))
    }

    #[tokio::test]
    async fn renders_preview_with_requested_record_count() {
        let form = GeneratorForm {
            user_count: "2".to_owned(),
            taxi: "3".to_owned(),
            negative_count: "1".to_owned(),
            currencies: vec!["USD".to_owned()],
            ..GeneratorForm::default()
        };

        let response = generate_endpoint(State(test_state()), Form(form))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let document = parse_html(response).await;

        let row_selector = Selector::parse("tbody tr").unwrap();
        let rows = document.select(&row_selector).collect::<Vec<_>>();
        assert_eq!(rows.len(), 2 * (3 + 1), "want 8 rows, got {}", rows.len());
    }

    #[tokio::test]
    async fn embedded_data_round_trips_into_records() {
        let form = GeneratorForm {
            taxi: "2".to_owned(),
            ..GeneratorForm::default()
        };

        let response = generate_endpoint(State(test_state()), Form(form))
            .await
            .unwrap();
        let document = parse_html(response).await;

        let data_selector = Selector::parse("input[type=hidden][name=data]").unwrap();
        let data = document
            .select(&data_selector)
            .next()
            .expect("want a hidden data input")
            .value()
            .attr("value")
            .unwrap()
            .to_owned();

        let records: Vec<TransactionRecord> =
            serde_json::from_str(&data).expect("embedded data should parse");
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn empty_form_renders_empty_preview() {
        let response = generate_endpoint(State(test_state()), Form(GeneratorForm::default()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let document = parse_html(response).await;

        let row_selector = Selector::parse("tbody tr").unwrap();
        assert!(
            document.select(&row_selector).next().is_none(),
            "want no table rows for an empty parameter set"
        );
    }

    #[tokio::test]
    async fn invalid_timezone_is_an_error() {
        let state = AppState::new("Not/AZone");

        let error = generate_endpoint(State(state), Form(GeneratorForm::default()))
            .await
            .unwrap_err();

        assert_eq!(
            error,
            crate::Error::InvalidTimezoneError("Not/AZone".to_owned())
        );
    }
}
