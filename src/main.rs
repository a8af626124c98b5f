use messenger::{app, config::Config, store::sqlite::SqliteStore, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);
    if config.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let store = SqliteStore::connect(&config.database_url, config.max_connections).await?;
    info!(database_url = %config.database_url, "database ready");

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app(AppState::new(store)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl-C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => { s.recv().await; }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutting down");
}
