use cats_server::model::cat::seed_cats;
use cats_server::model::{CatStore, ModelManager};
use cats_server::{config, web, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = config();

    let mm = if config.SEED_CATS {
        ModelManager::with_store(CatStore::with_seed(seed_cats()))
    } else {
        ModelManager::new()
    };

    let routes_all = web::routes_all(mm);

    let addr = config.socket_addr();
    info!("{:<12} - {addr}\n", "LISTENING");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, routes_all)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{:<12} - server stopped", "SHUTDOWN");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{:<12} - unable to listen for ctrl-c: {e}", "SHUTDOWN");
    }
}
