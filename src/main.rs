use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zhinan::config::Config;
use zhinan::fetch::GuideFetcher;
use zhinan::server::EpgServer;

#[derive(Parser)]
#[command(
    name = "zhinan",
    version,
    about = "Chinese TV program guide service with fuzzy channel resolution",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the EPG query server
    Serve {
        /// Bind address override (e.g. 0.0.0.0:27100)
        #[arg(short, long)]
        bind: Option<std::net::SocketAddr>,
    },

    /// Fetch the guide feed once and report its shape
    Fetch {
        /// Upstream URL override
        #[arg(short, long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(&cli.log_format, cli.verbose)?;

    match cli.command {
        Commands::Serve { bind } => {
            let mut config = Config::from_env()?;
            if let Some(addr) = bind {
                config.server.bind_address = addr;
            }

            tracing::info!(
                bind = %config.server.bind_address,
                upstream = %config.fetch.upstream_url,
                "starting zhinan"
            );

            let server = EpgServer::new(config);
            server
                .start_with_shutdown(async {
                    let _ = tokio::signal::ctrl_c().await;
                    tracing::info!("shutdown signal received");
                })
                .await?;
        }

        Commands::Fetch { url } => {
            let mut config = Config::from_env()?;
            if let Some(url) = url {
                config.fetch.upstream_url = url;
            }

            let fetcher = GuideFetcher::new(&config.fetch)?;
            let document = fetcher.fetch().await?;

            println!("Fetched guide from {}", config.fetch.upstream_url);
            println!("  Channels:   {}", document.channels.len());
            println!("  Programmes: {}", document.programmes.len());
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("zhinan=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("zhinan=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
