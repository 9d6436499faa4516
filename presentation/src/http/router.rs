//! Router construction and the form handler.

use super::body::decode_payload;
use super::response::{message_response, outcome_response, submission_error_response};
use agency_application::{BotVerifier, FormRelay, SubmitFormInput, SubmitFormUseCase};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

pub const FORM_ROUTE: &str = "/api/form";
pub const HEALTH_ROUTE: &str = "/healthz";

/// Upper bound on a posted form body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

type SharedUseCase<V, R> = Arc<SubmitFormUseCase<V, R>>;

pub fn build_router<V, R>(use_case: SubmitFormUseCase<V, R>) -> Router
where
    V: BotVerifier + 'static,
    R: FormRelay + 'static,
{
    Router::new()
        .route(FORM_ROUTE, post(submit_form_handler::<V, R>))
        .route(HEALTH_ROUTE, get(healthz_handler))
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(Arc::new(use_case))
}

/// Bind `addr` and serve until the task is cancelled or ctrl-c arrives.
pub async fn serve(router: Router, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
            info!("Shutting down");
        })
        .await
}

async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn method_not_allowed_handler() -> Response {
    message_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn submit_form_handler<V, R>(
    State(use_case): State<SharedUseCase<V, R>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response
where
    V: BotVerifier + 'static,
    R: FormRelay + 'static,
{
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Unreadable form body: {}", rejection.body_text());
            return message_response(rejection.status(), &rejection.body_text());
        }
    };

    let payload = match decode_payload(&headers, &body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Rejected form body: {}", e);
            return message_response(e.status(), &e.to_string());
        }
    };

    match use_case.execute(SubmitFormInput::from_payload(payload)).await {
        Ok(outcome) => {
            info!("Form submission finished: {:?}", outcome.kind);
            outcome_response(&outcome)
        }
        Err(e) => {
            warn!("Form submission refused: {}", e);
            submission_error_response(&e)
        }
    }
}
