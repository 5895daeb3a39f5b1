// BlogQL server - GraphQL over flat JSON collection files

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use blogql::{app_state::AppState, config::Config, graphql::create_graphql_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize application state (loads the JSON collections)
    let app_state = AppState::new(config.clone())?;

    // Build application router
    let app = create_graphql_router(app_state.schema.clone()).layer(CorsLayer::permissive());

    // Start server
    let addr: SocketAddr = config.server_address().parse()?;
    println!("🚀 Server is running on http://{}/graphql", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
