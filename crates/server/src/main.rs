mod api;
mod applications;
mod cli;
mod router;
mod startup;
mod state;

use clap::Parser;
use tracing::info;

use cli::{Cli, Command};

fn load_config() -> anyhow::Result<jobboard_core::Config> {
    jobboard_core::config::load_dotenv();
    Ok(jobboard_core::Config::from_env()?)
}

async fn serve(config: &jobboard_core::Config) -> anyhow::Result<()> {
    config.log_summary();

    let state = startup::build_app_state(config)?;
    let cors = router::cors_layer(&config.server.cors_origin)?;
    let app = router::build_router(state, cors);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let config = load_config()?;
            serve(&config).await?;
        }
        Command::Reconcile { summaries, details, id } => {
            let outcome = cli::reconcile_files(&summaries, &details, id)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}
