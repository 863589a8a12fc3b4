use clap::Parser;
use order_links::config::Config;
use order_links::http;
use order_links::lifecycle::PayrollSystem;
use resource_framework::tracing::setup_tracing;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::parse();
    info!(bind = %config.bind, "Starting payroll service");

    let system = PayrollSystem::new(&config);

    if config.no_seed {
        info!("Skipping sample data");
    } else {
        system.preload().await.map_err(|e| e.to_string())?;
    }

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|e| format!("Failed to bind {}: {e}", config.bind))?;

    let served = http::serve(listener, system.router(), shutdown_signal()).await;
    if let Err(e) = &served {
        error!(error = %e, "Server failed");
    }

    // The router has been dropped, so the shards can now drain
    system.shutdown().await?;

    served.map_err(|e| e.to_string())?;
    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            warn!(error = %e, "Could not listen for Ctrl-C; serving until killed");
            std::future::pending::<()>().await
        }
    }
}
