// src/routes/mod.rs
pub mod advisory;
pub mod chat;

use std::any::Any;

use crate::{error::AppError, state::SharedState};
use advisory::{evacuation_routes_handler, risk_assessment_handler};
use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chat::{chat_handler, debug_handler, test_handler};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

type PanicResponder = fn(Box<dyn Any + Send + 'static>) -> Response;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/test", get(test_handler))
        .route("/debug", post(debug_handler))
        .route("/chat", post(chat_handler))
        .route(
            "/risk-assessment",
            post(risk_assessment_handler).layer(risk_assessment_guard()),
        )
        .route(
            "/evacuation-routes",
            post(evacuation_routes_handler).layer(evacuation_routes_guard()),
        )
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}

fn risk_assessment_guard() -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(risk_assessment_panic as PanicResponder)
}

fn evacuation_routes_guard() -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(evacuation_routes_panic as PanicResponder)
}

fn risk_assessment_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    error!(panic = panic_message(err.as_ref()), "risk assessment handler panicked");
    AppError::Internal("Error generating risk assessment".to_string()).into_response()
}

fn evacuation_routes_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    error!(panic = panic_message(err.as_ref()), "evacuation routes handler panicked");
    AppError::Internal("Error generating evacuation routes".to_string()).into_response()
}

fn panic_message<'a>(err: &'a (dyn Any + Send + 'static)) -> &'a str {
    if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
