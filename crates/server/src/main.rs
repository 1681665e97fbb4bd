// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod asset_routes;
mod crew_routes;
mod event_routes;
mod http;

#[cfg(test)]
mod tests;

use asira_persistence::Persistence;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use clap::Parser;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::asset_routes::{
    handle_delete_asset, handle_get_asset, handle_list_assets, handle_upload_asset,
};
use crate::crew_routes::{
    handle_acknowledge_sos, handle_bulk_status, handle_create_crew, handle_crew_login,
    handle_delete_crew, handle_emergency_status, handle_get_crew, handle_list_crew,
    handle_phone_login, handle_raise_sos, handle_regenerate_access_code, handle_stop_emergency,
    handle_toggle_crew_emergency, handle_toggle_emergency, handle_update_crew,
};
use crate::event_routes::{
    handle_check_in_guest, handle_create_gift, handle_create_guest, handle_create_menu_item,
    handle_create_rundown, handle_create_venue, handle_dashboard, handle_delete_gift,
    handle_delete_guest, handle_delete_menu_item, handle_delete_rundown, handle_delete_venue,
    handle_design_page, handle_get_design_config, handle_list_gifts, handle_list_guests,
    handle_list_menu, handle_list_rundown, handle_list_venues, handle_save_design_config,
    handle_scan, handle_update_guest, handle_update_rundown,
};

/// Default cap on request bodies, which bounds image uploads.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Asira Server - HTTP backend for wedding event management
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL. Takes precedence over `--database`.
    #[cfg(feature = "mysql")]
    #[arg(long)]
    mysql_url: Option<String>,

    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Largest accepted request body, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    max_upload_bytes: usize,
}

/// Application state shared across handlers.
///
/// The single database connection sits behind a mutex; each handler holds
/// the lock for the duration of its operation.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        // Crew
        .route("/crew/login", post(handle_crew_login))
        .route("/login-phone", post(handle_phone_login))
        .route("/crew", get(handle_list_crew).post(handle_create_crew))
        .route("/crew/status/all", post(handle_bulk_status))
        .route(
            "/crew/{id}",
            get(handle_get_crew)
                .put(handle_update_crew)
                .delete(handle_delete_crew),
        )
        .route("/crew/{id}/emergency", post(handle_toggle_crew_emergency))
        .route("/crew/{id}/sos", post(handle_raise_sos))
        .route("/crew/{id}/acknowledge", post(handle_acknowledge_sos))
        .route("/crew/{id}/access-code", post(handle_regenerate_access_code))
        .route("/emergency", get(handle_emergency_status))
        .route("/emergency/toggle", post(handle_toggle_emergency))
        .route("/emergency/stop", post(handle_stop_emergency))
        // Assets
        .route("/assets", post(handle_upload_asset))
        .route("/assets/{kind}", get(handle_list_assets))
        .route("/assets/{kind}/{id}", get(handle_get_asset))
        .route("/assets/{kind}/{id}/delete", post(handle_delete_asset))
        // Event
        .route("/dashboard", get(handle_dashboard))
        .route("/guests", get(handle_list_guests).post(handle_create_guest))
        .route(
            "/guests/{id}",
            put(handle_update_guest).delete(handle_delete_guest),
        )
        .route("/guests/{id}/checkin", post(handle_check_in_guest))
        .route("/scan", post(handle_scan))
        .route("/rundown", get(handle_list_rundown).post(handle_create_rundown))
        .route(
            "/rundown/{id}",
            put(handle_update_rundown).delete(handle_delete_rundown),
        )
        .route("/gifts", get(handle_list_gifts).post(handle_create_gift))
        .route("/gifts/{id}", delete(handle_delete_gift))
        .route("/venues", get(handle_list_venues).post(handle_create_venue))
        .route("/venues/{id}", delete(handle_delete_venue))
        .route("/menu", get(handle_list_menu).post(handle_create_menu_item))
        .route("/menu/{id}", delete(handle_delete_menu_item))
        .route("/design", get(handle_design_page))
        .route(
            "/design/config",
            get(handle_get_design_config).post(handle_save_design_config),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(app_state)
}

/// Opens the database selected on the command line.
fn open_persistence(args: &Args) -> Result<Persistence, Box<dyn std::error::Error>> {
    #[cfg(feature = "mysql")]
    if let Some(url) = &args.mysql_url {
        info!("Using MySQL/MariaDB database");
        return Ok(Persistence::new_with_mysql(url)?);
    }

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };
    Ok(persistence)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Asira Server");

    let mut persistence: Persistence = open_persistence(&args)?;
    persistence.verify_access_code_uniqueness()?;

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state, args.max_upload_bytes);

    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!(max_upload_bytes = args.max_upload_bytes, "Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
