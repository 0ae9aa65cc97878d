use bank_common::errors::ValidationError;
use bank_common::ErrorResponse;
use std::convert::Infallible;
use warp::filters::body::BodyDeserializeError;
use warp::http::StatusCode;
use warp::reject::{InvalidQuery, MethodNotAllowed, PayloadTooLarge, Reject, UnsupportedMediaType};
use warp::{Rejection, Reply};

#[derive(Debug)]
pub struct WebServiceValidationError(pub ValidationError);

impl Reject for WebServiceValidationError {}

impl WebServiceValidationError {
    /// A malformed account number in the path is a bad request;
    /// an invalid body is unprocessable.
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ValidationError::InvalidAccountNumber(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Wraps a validation failure into a rejection.
pub fn reject(err: ValidationError) -> Rejection {
    log::warn!("{}", err);
    warp::reject::custom(WebServiceValidationError(err))
}

/// **Turns every rejection into a JSON error response**
///
/// The body is always an [`ErrorResponse`].
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if let Some(validation) = err.find::<WebServiceValidationError>() {
        (validation.status(), validation.0.to_string())
    } else if let Some(deserialize) = err.find::<BodyDeserializeError>() {
        (StatusCode::UNPROCESSABLE_ENTITY, deserialize.to_string())
    } else if let Some(query) = err.find::<InvalidQuery>() {
        (StatusCode::BAD_REQUEST, query.to_string())
    } else if let Some(too_large) = err.find::<PayloadTooLarge>() {
        (StatusCode::PAYLOAD_TOO_LARGE, too_large.to_string())
    } else if let Some(media_type) = err.find::<UnsupportedMediaType>() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, media_type.to_string())
    } else if let Some(method) = err.find::<MethodNotAllowed>() {
        (StatusCode::METHOD_NOT_ALLOWED, method.to_string())
    } else {
        log::error!("Unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
    };

    log::debug!("Rejected with {}: {}", code, message);

    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorResponse { message }),
        code,
    ))
}
