use std::sync::Arc;
use clap::Parser;
use tracing::info;
use arxiv_scout::{config::Config, search::ArxivClient, server::shutdown_signal, Server};

/// Web front-end for searching arXiv papers by topic
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    arxiv_scout::utils::init_tracing();

    let args = Args::parse();

    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    info!("Configuration loaded: {:?}", config);

    let search = ArxivClient::from_config(&config.search)?;
    let server = Server::new(config, Arc::new(search));

    server.run(shutdown_signal()).await
}
