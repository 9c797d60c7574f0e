//! pairchat CLI and HTTP server entry point.
//!
//! Binary name: `pchat`
//!
//! Parses CLI arguments, loads configuration, opens the message store, then
//! dispatches to a one-shot command or starts the HTTP server.

mod cli;
mod http;
mod state;

use anyhow::Context;
use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use pairchat_observe::tracing_setup::{self, TracingOptions};
use pairchat_types::page::PullRequest;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need logging or app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "pchat", &mut std::io::stdout());
        return Ok(());
    }

    let mut tracing_opts = TracingOptions::for_verbosity(cli.verbose, cli.quiet);
    if let Commands::Serve { otel, log_json, .. } = &cli.command {
        tracing_opts.otel = *otel;
        tracing_opts.json = *log_json;
        // A server with no -v still reports startup and requests.
        if cli.verbose == 0 && !cli.quiet {
            tracing_opts.default_filter = "info".to_string();
        }
    }
    tracing_setup::init_tracing(&tracing_opts)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let state = AppState::init(cli.config.as_deref()).await?;

    let result = match cli.command {
        Commands::Serve { host, port, .. } => serve(state, host, port).await,
        Commands::Send { chat, sender, text } => {
            cli::chat::send(&state, chat, sender, text, cli.json).await
        }
        Commands::Pull {
            chat,
            cursor,
            limit,
            reverse,
        } => {
            let req = PullRequest {
                chat,
                cursor,
                limit,
                reverse: Some(reverse),
            };
            cli::chat::pull(&state, req, cli.json).await
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    tracing_setup::shutdown_tracing();
    result
}

async fn serve(state: AppState, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    state
        .chat_service
        .ping()
        .await
        .context("message store is not reachable")?;

    let host = host.unwrap_or_else(|| state.config.server.host.clone());
    let port = port.unwrap_or(state.config.server.port);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        addr = %addr,
        backend = state.backend_name(),
        data_dir = %state.data_dir.display(),
        "HTTP server started"
    );
    println!(
        "  {} pairchat listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received");
}
