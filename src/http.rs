use crate::backend::BookingBackend;
use crate::clock::Clock;
use crate::error::BookingError;
use crate::types::{Availability, BookingConfirmation, BookingRequest};
use crate::{availability, booking, AppState};
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

pub fn create_app<B: BookingBackend, C: Clock>(backend: B, clock: C) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState { backend, clock };

    Router::new()
        .route("/disponibilidade", get(get_availability::<B, C>))
        .route("/agendar", post(book_slot::<B, C>))
        .with_state(state)
        .layer(cors)
}

async fn get_availability<B: BookingBackend, C: Clock>(
    State(state): State<AppState<B, C>>,
) -> Json<Availability> {
    Json(availability::get_availability(&state.backend, &state.clock))
}

async fn book_slot<B: BookingBackend, C: Clock>(
    State(state): State<AppState<B, C>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<Json<BookingConfirmation>, BookingError> {
    let request = match payload {
        Ok(Json(request)) => request,
        // A body that is not declared as JSON carries no fields.
        Err(JsonRejection::MissingJsonContentType(_)) => BookingRequest::default(),
        Err(rejection) => return Err(BookingError::MalformedRequest(rejection.body_text())),
    };

    // The store writes its file while holding its lock.
    let result = tokio::task::spawn_blocking(move || {
        booking::create_booking(&state.backend, &state.clock, request)
    })
    .await?;

    match result {
        Ok(message) => Ok(Json(BookingConfirmation { message })),
        Err(err) => {
            warn!(%err, "Booking rejected");
            Err(err)
        }
    }
}
