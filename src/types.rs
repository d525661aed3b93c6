use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use crate::error::BookingError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "nomeCliente")]
    pub client_name: String,
    #[serde(rename = "numeroCliente")]
    pub client_phone: String,
    #[serde(rename = "servico")]
    pub service: String,
    #[serde(rename = "horario")]
    pub slot: String,
    #[serde(rename = "data")]
    pub date: String,
}

impl Booking {
    pub fn occupies(&self, date: &str, slot: &str) -> bool {
        self.date == date && self.slot == slot
    }
}

/// Body of `POST /agendar`. Every field is optional on the wire so that an
/// incomplete request is answered with a validation error instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BookingRequest {
    #[serde(rename = "horario", default)]
    #[validate(required, length(min = 1))]
    pub slot: Option<String>,
    #[serde(rename = "nomeCliente", default)]
    #[validate(required, length(min = 1))]
    pub client_name: Option<String>,
    #[serde(rename = "numeroCliente", default)]
    #[validate(required, length(min = 1))]
    pub client_phone: Option<String>,
    #[serde(rename = "servico", default)]
    #[validate(required, length(min = 1))]
    pub service: Option<String>,
    #[serde(rename = "data", default)]
    #[validate(required, length(min = 1))]
    pub date: Option<String>,
}

impl BookingRequest {
    pub fn into_booking(self) -> Result<Booking, BookingError> {
        if let Err(errors) = self.validate() {
            tracing::debug!(%errors, "Booking request is incomplete");
            return Err(BookingError::MissingField);
        }
        match (
            self.slot,
            self.client_name,
            self.client_phone,
            self.service,
            self.date,
        ) {
            (Some(slot), Some(client_name), Some(client_phone), Some(service), Some(date)) => {
                Ok(Booking {
                    client_name,
                    client_phone,
                    service,
                    slot,
                    date,
                })
            }
            _ => Err(BookingError::MissingField),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    #[serde(rename = "mensagem")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    #[serde(rename = "horariosDisponiveis")]
    pub free_slots: Vec<String>,
    #[serde(rename = "agendamentos")]
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    #[serde(rename = "dataMaximaAgendamento")]
    pub max_bookable_date: String,
    #[serde(rename = "horariosLivres")]
    pub free_slots_on_max_date: Vec<String>,
    #[serde(rename = "agendamentosPorData")]
    pub bookings_by_date: BTreeMap<String, DayAvailability>,
}
