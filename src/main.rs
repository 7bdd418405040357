mod cli;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use horoscope_oracle::connector::serve;
use horoscope_oracle::{Container, ContainerConfig, HoroscopeController, HoroscopeRequest};

use cli::Commands;

#[derive(Parser)]
#[command(name = "horoscope-oracle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer from a canned horoscope instead of calling OpenRouter
    #[arg(long, global = true)]
    mock_llm: bool,

    /// Timeout for each upstream LLM call, in seconds
    #[arg(long, global = true, default_value = "30")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Arc::new(Container::new(ContainerConfig {
        mock_llm: cli.mock_llm,
        timeout: Duration::from_secs(cli.timeout_secs),
    })?);

    match cli.command {
        Commands::Serve { port, public } => {
            if container.mock_llm() {
                info!("Serving canned horoscopes; OpenRouter will not be called");
            }
            let ip = if public { [0, 0, 0, 0] } else { [127, 0, 0, 1] };
            serve(container, SocketAddr::from((ip, port))).await?;
        }

        Commands::Horoscope { sign, use_cache } => {
            if use_cache {
                info!("The cache starts empty in a new process; expect a fresh horoscope");
            }
            let request = HoroscopeRequest::new(sign).with_cache(use_cache);
            let response = HoroscopeController::new(&container).horoscope(request).await;
            println!("{}", response.body_text());

            if !response.status.is_success() {
                anyhow::bail!("request failed with status {}", response.status);
            }
        }
    }

    Ok(())
}
