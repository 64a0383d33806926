mod chat;
mod hf;
mod repl;

pub const USER_AGENT: &str = concat!("sehat/", env!("CARGO_PKG_VERSION"));

use std::time::Duration;

use clap::{Parser, Subcommand};
use reqwest::Client;
use tracing::info;

use hf::client::HfClient;

/// TCP connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Global HTTP client timeout covering DNS + connect + response body.
const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Parser)]
#[command(
    name = "sehat",
    version,
    about = "Bilingual healthcare assistant (हिंदी + English)"
)]
struct Cli {
    /// Print answers immediately instead of the typewriter reveal
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Answer a single question and exit
    Ask { question: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sehat=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let http = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(HTTP_TIMEOUT)
        .build()?;
    let client = HfClient::from_env(http)?;
    info!("sehat ready");

    match cli.command {
        Some(Command::Ask { question }) => {
            let answer = chat::engine::resolve(&client, &question).await?;
            repl::print_answer(&answer, cli.plain).await?;
        }
        None => repl::run(&client, cli.plain).await?,
    }

    Ok(())
}
