use axum::Router;
use booking_server::{api::new_api_router, store::clients::json_file::JsonFileStore};
use std::{path::PathBuf, process::ExitCode};
use tokio::net::TcpListener;
use tracing::{error, warn};

mod vars {
    pub const BOOKINGS_FILE: &str = "BOOKINGS_FILE";
}

mod defaults {
    pub const BOOKINGS_FILE: &str = "./data/bookings.json";
    pub const LISTEN_ADDR: &str = "0.0.0.0:5000";
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().init();

    let path = match std::env::var_os(vars::BOOKINGS_FILE) {
        Some(path) => PathBuf::from(path),
        None => {
            let path = PathBuf::from(defaults::BOOKINGS_FILE);
            warn!("BOOKINGS_FILE not set; using default of {}", path.display());
            path
        }
    };
    let store = match JsonFileStore::open(path).await {
        Ok(store) => store,
        Err(err) => {
            error!("failed to open bookings store: {err}");
            return ExitCode::FAILURE;
        }
    };

    let router = Router::new().nest("/api", new_api_router(store));

    let listener = match TcpListener::bind(defaults::LISTEN_ADDR).await {
        Ok(l) => l,
        Err(err) => {
            error!("failed to listen on {}: {err}", defaults::LISTEN_ADDR);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = axum::serve(listener, router).await {
        error!("failed to start server: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
