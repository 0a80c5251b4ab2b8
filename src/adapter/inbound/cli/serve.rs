//! Handler for the `serve` command.

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use super::command::ServeArgs;
use super::with_database;
use crate::adapter::inbound::http::build_router;
use crate::error::Result;
use crate::infrastructure::bootstrap::{build_state, open_store};
use crate::infrastructure::config::Config;

/// Run migrations, then serve HTTP until Ctrl+C or SIGTERM.
pub async fn execute(config: Config, args: &ServeArgs) -> Result<()> {
    let config = apply_overrides(config, args)?;
    config.init_logging();

    let addr = config.bind_addr()?;
    let store = open_store(&config.database)?;
    let router = build_router(build_state(store), &config.server.static_dir);

    let listener = TcpListener::bind(addr).await?;
    info!(
        addr = %listener.local_addr()?,
        static_dir = %config.server.static_dir.display(),
        "satboard listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("satboard stopped");
    Ok(())
}

fn apply_overrides(config: Config, args: &ServeArgs) -> Result<Config> {
    let mut config = with_database(config, args.db.database.as_deref())?;
    if let Some(bind) = &args.bind {
        config.server.bind.clone_from(bind);
    }
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    config.validate()?;
    Ok(config)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
