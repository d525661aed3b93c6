use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access booking store: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to (de)serialize bookings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to replace booking store: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Every rejection of a booking. The display text is what the client sees.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Todos os campos são obrigatórios.")]
    MissingField,
    #[error("Agendamento pode ser feito apenas até {0}.")]
    TooFarAhead(String),
    #[error("Não é possível agendar para uma data no passado.")]
    InPast,
    #[error("Horário inválido.")]
    InvalidSlot,
    #[error("Este horário já foi agendado.")]
    SlotTaken,
    #[error("Requisição inválida: {0}")]
    MalformedRequest(String),
    #[error("Não foi possível salvar o agendamento.")]
    Storage(#[from] StoreError),
    #[error("Não foi possível concluir o agendamento.")]
    Interrupted(#[from] tokio::task::JoinError),
}

impl BookingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookingError::Storage(_) | BookingError::Interrupted(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "erro": self.to_string() }))).into_response()
    }
}
