//! Student API server: loads config from env (and `.env`), opens SQLite, ensures the students table, serves until Ctrl-C / SIGTERM.
//!
//! Run from repo root: `cargo run -p student-server`

use student_api::{connect, ensure_students_table, router, AppState, Config, SqliteStorage};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("student_api=info,student_server=info,tower_http=info")
            }),
        )
        .init();

    let config = Config::from_env()?;
    let pool = connect(&config.storage_path, config.max_connections).await?;
    ensure_students_table(&pool).await?;
    let state = AppState::new(SqliteStorage::new(pool.clone()));

    let app = router(state, config.body_limit);
    let listener = TcpListener::bind(&config.http_addr).await?;
    tracing::info!("student api listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
