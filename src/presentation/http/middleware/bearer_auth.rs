use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::{Request, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Reject the request unless it carries the shared ingestion bearer token.
///
/// Runs before the handler, so a rejected request never has its body read.
/// A header that is not valid visible ASCII counts as malformed.
pub async fn require_bearer_token(req: Request<Body>, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match state.services.authorize_ingestion(header) {
        Ok(()) => next.run(req).await,
        Err(err) => HttpError::from_error(err).into_response(),
    }
}
