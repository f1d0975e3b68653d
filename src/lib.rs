pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod models;
pub mod seed;
pub mod services;
pub mod state;

use std::sync::Arc;
use tokio::signal;

use anyhow::Context;
use cli::{Cli, Commands, UserCommands};
pub use config::Config;
use metrics_exporter_prometheus::PrometheusHandle;
use state::SharedState;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    if let Some(Commands::Init) = cli.command {
        let path = cli.config.unwrap_or_else(Config::default_config_path);
        if Config::create_default_if_missing(&path)? {
            println!("✓ Config file created at {}.", path.display());
        } else {
            println!("Config file already exists at {}.", path.display());
        }
        return Ok(());
    }

    init_tracing(&config)?;

    match cli.command {
        None | Some(Commands::Serve) => {
            let prometheus_handle = install_metrics(&config)?;
            run_server(config, prometheus_handle).await
        }
        Some(Commands::Seed) => cli::cmd_seed(&config).await,
        Some(Commands::Passport { user_id }) => cli::cmd_passport(&config, &user_id).await,
        Some(Commands::Scan { code, nfc, qr }) => cli::cmd_scan(&config, &code, nfc, qr).await,
        Some(Commands::Garments {
            category,
            brand,
            search,
        }) => {
            cli::cmd_list_garments(
                &config,
                category.as_deref(),
                brand.as_deref(),
                search.as_deref(),
            )
            .await
        }
        Some(Commands::User {
            command: UserCommands::Create { name, email, role },
        }) => cli::cmd_create_user(&config, name, email, role).await,
        Some(Commands::Init) => Ok(()),
    }
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    if config.observability.loki_enabled {
        let url = url::Url::parse(&config.observability.loki_url).context("Invalid Loki URL")?;

        let mut builder = tracing_loki::builder();
        for (key, value) in &config.observability.loki_labels {
            builder = builder.label(key.as_str(), value.as_str())?;
        }
        let (layer, task) = builder.build_url(url)?;

        tokio::spawn(task);

        registry.with(layer).init();
        info!(
            "Loki logging initialized at {}",
            config.observability.loki_url
        );
    } else {
        registry.init();
    }

    Ok(())
}

fn install_metrics(config: &Config) -> anyhow::Result<Option<PrometheusHandle>> {
    if !config.observability.metrics_enabled {
        return Ok(None);
    }

    use metrics_exporter_prometheus::PrometheusBuilder;
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;
    info!("Prometheus metrics recorder initialized");
    Ok(Some(handle))
}

async fn run_server(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<()> {
    info!("Subbi v{} starting...", env!("CARGO_PKG_VERSION"));

    if !config.server.enabled {
        info!("Web API disabled in config; nothing to do");
        return Ok(());
    }

    let port = config.server.port;
    let shared = Arc::new(SharedState::new(config).await?);
    let api_state = api::create_app_state(shared, prometheus_handle);
    let app = api::router(api_state).await;

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🌐 Web Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
