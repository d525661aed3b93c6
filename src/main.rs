use crate::{
    backend::BookingBackend,
    clock::{Clock, LocalClock},
    configuration::Configuration,
    configuration_handler::ConfigurationHandler,
    http::create_app,
    json_store::JsonFileStore,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod availability;
mod backend;
mod booking;
mod clock;
mod configuration;
mod configuration_handler;
mod error;
mod http;
mod json_store;
mod slots;
#[cfg(test)]
mod testutils;
mod types;

#[derive(Clone)]
struct AppState<B: BookingBackend, C: Clock> {
    backend: B,
    clock: C,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("################");
    println!("# Slot Booking #");
    println!("################");

    let configuration = ConfigurationHandler::parse_arguments();

    let store = JsonFileStore::load(configuration.store_path());
    let app = create_app(store, LocalClock);

    let address = format!("0.0.0.0:{}", configuration.port());
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(%address, "Server listening");
    println!("Accessible at:\n{address}");

    axum::serve(listener, app).await
}
