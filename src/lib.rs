pub mod api;
pub mod cli;
pub mod clients;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod state;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
pub use config::Config;

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    init_tracing(&config)?;
    config.validate()?;

    match cli.command {
        Commands::Serve => run_server(config).await,

        Commands::Init { path } => {
            let path = path.unwrap_or_else(Config::default_config_path);
            if Config::create_default_if_missing(&path)? {
                println!("✓ Config file created at {}", path.display());
            } else {
                println!("Config file already exists: {}", path.display());
            }
            Ok(())
        }

        Commands::Login { username, password } => {
            cli::cmd_login(&config, &username, &password).await
        }

        Commands::Logout => cli::cmd_logout(&config),

        Commands::Whoami => cli::cmd_whoami(&config),

        Commands::Facts { mine } => cli::cmd_list_facts(&config, mine).await,

        Commands::Create { text } => cli::cmd_create_fact(&config, &text.join(" ")).await,

        Commands::InternetFacts { page, max_length } => {
            cli::cmd_internet_facts(&config, page, max_length).await
        }
    }
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    // stdout is reserved for CLI output.
    let initialized = if config.general.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    initialized.context("Failed to initialize tracing")
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    info!("catnip v{} starting...", env!("CARGO_PKG_VERSION"));

    let prometheus_handle = if config.observability.metrics_enabled {
        use metrics_exporter_prometheus::PrometheusBuilder;
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        info!("Prometheus metrics recorder initialized");
        Some(handle)
    } else {
        None
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = api::create_app_state_from_config(config, prometheus_handle)?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Cat server is running on http://{}", addr);

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
