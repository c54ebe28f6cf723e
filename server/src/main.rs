//! Cupcakes server: reads settings from the environment, prepares the store and serves
//! the homepage, the `/api/cupcakes` routes and the common health routes.
//!
//! Run from repo root: `cargo run -p cupcakes-server`
//! Set `CUPCAKES_STORE=memory` to run without a database.

use cupcakes::{app, ensure_cupcakes_table, ensure_database_exists, AppState, MemoryCupcakeStore, PgCupcakeStore, Settings, StoreKind};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cupcakes=info,cupcakes_server=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;

    let state = match settings.store {
        StoreKind::Postgres => {
            ensure_database_exists(&settings.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(&settings.database_url)
                .await?;
            ensure_cupcakes_table(&pool).await?;
            AppState::new(PgCupcakeStore::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; records are lost on exit");
            AppState::new(MemoryCupcakeStore::new())
        }
    };

    let listener = TcpListener::bind(settings.bind).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state, settings.body_limit))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
    }
    tracing::info!("shutting down");
}
