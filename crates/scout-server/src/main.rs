use clap::Parser;
use std::net::IpAddr;
use anyhow::Result;
use scout_server::ServerConfig;

#[derive(Parser)]
#[command(name = "scout-server")]
#[command(author, version, about = "Scout HTTP API Server", long_about = None)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Location used when a phrase names none
    #[arg(short, long)]
    default_location: Option<String>,

    /// Verbose output
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "scout_server=debug,scout_core=debug,tower_http=debug"
    } else {
        "scout_server=info,scout_core=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    scout_server::start(ServerConfig {
        host: cli.host,
        port: cli.port,
        default_location: cli.default_location,
    })
    .await
}
