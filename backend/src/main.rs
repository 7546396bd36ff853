use std::net::SocketAddr;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, Level};

mod domain;
mod rest;
mod storage;

use rest::AppState;
use storage::MemoryMotherRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Seeding mother registry from fixture data");
    let repository = MemoryMotherRepository::seeded();
    let state = AppState::new(repository);

    // CORS setup to allow the dashboard frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/session", get(rest::get_session))
        .route("/session/login", post(rest::login))
        .route("/session/logout", post(rest::logout))
        .route(
            "/mothers",
            get(rest::list_mothers).post(rest::register_mother),
        )
        .route(
            "/mothers/:id",
            get(rest::get_mother).put(rest::update_mother),
        )
        .route("/followups", get(rest::list_followups))
        .route("/dashboard", get(rest::dashboard_summary));

    let app = Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
