mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let port = config.port;
    tracing::info!(backend = %config.backend_url, timeout_secs = config.upstream_timeout.as_secs(), "upstream configured");

    let state = state::AppState::new(config).expect("upstream client init failed");
    let app = routes::leptos_app(state).expect("leptos configuration failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "vocab trainer listening");
    axum::serve(listener, app).await.expect("server failed");
}
