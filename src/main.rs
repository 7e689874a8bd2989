use tower_http::{cors::CorsLayer, trace::TraceLayer};

use boxoffice::{config::Config, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db);

    let app = router::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    tracing::info!("listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
