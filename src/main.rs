#![recursion_limit = "256"]

mod routes;
mod state;
mod upstream;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let _ = dotenvy::dotenv();

    let upstream_url = std::env::var("UPSTREAM_CHAT_URL").expect("UPSTREAM_CHAT_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let upstream = upstream::UpstreamClient::new(upstream_url).expect("upstream client init failed");
    let state = state::AppState::new(upstream);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "counterchat listening");
    axum::serve(listener, app).await.expect("server failed");
}
