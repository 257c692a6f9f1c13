//! TeamSync terminal client

use clap::Parser;
use std::sync::Arc;
use teamsync::cli::commands::{self, Context};
use teamsync::cli::output::Output;
use teamsync::cli::Cli;
use teamsync::{ClientConfig, ReqwestTransport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let default_filter = if cli.verbose { "teamsync=debug" } else { "teamsync=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli, output).await {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: Output) -> anyhow::Result<()> {
    let mut config = ClientConfig::load(&cli.config)?;
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }

    if cli.verbose {
        output.banner();
        output.kv("Backend", &config.api_base);
        output.kv("Session", &config.session_file.display().to_string());
    }

    let ctx = Context::new(config, Arc::new(ReqwestTransport::new()), output, cli.yes);
    commands::run(cli.command, &ctx).await
}
