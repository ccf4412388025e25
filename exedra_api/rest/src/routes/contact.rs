use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use exedra_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use serde_json::Value;

use crate::models::contact::{
    parse_submission, ApiContactErrorResponse, ApiContactRejection, ApiContactSubmitResponse,
    ApiFieldError,
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    Json(body): Json<Value>,
) -> Response {
    let create = match parse_submission(&body) {
        Ok(create) => create,
        Err(ApiContactRejection::Malformed) => {
            return error(StatusCode::BAD_REQUEST, "Invalid request body", None);
        }
        Err(ApiContactRejection::Invalid(errors)) => {
            return error(StatusCode::BAD_REQUEST, "Invalid form data", Some(errors));
        }
    };

    match service.submit(create).await {
        Ok(submission) => Json(ApiContactSubmitResponse {
            success: true,
            message: "Contact form submitted successfully",
            id: submission.id,
        })
        .into_response(),
        Err(ContactSubmitError::Storage(err)) => {
            tracing::error!("Failed to store contact submission: {err:#}");
            error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to submit contact form",
                None,
            )
        }
    }
}

fn error(
    code: StatusCode,
    message: &'static str,
    errors: Option<Vec<ApiFieldError>>,
) -> Response {
    (
        code,
        Json(ApiContactErrorResponse {
            success: false,
            message,
            errors,
        }),
    )
        .into_response()
}
