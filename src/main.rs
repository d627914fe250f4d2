use clap::{Parser, Subcommand};

use lifestyle_check::config::{ChatConfig, RelayConfig};

#[derive(Parser)]
#[command(name = "lifestyle-check", version, about = "Guided lifestyle questionnaire")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the relay proxy in front of the model provider.
    Relay {
        /// Listen address (overrides RELAY_BIND).
        #[arg(long)]
        bind: Option<std::net::SocketAddr>,
    },
    /// Run the questionnaire in the terminal against a relay.
    Chat {
        /// Relay URL (overrides LIFESTYLE_RELAY_URL).
        #[arg(long)]
        relay_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so chat output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Relay { bind } => {
            let mut config = RelayConfig::from_env()?;
            if let Some(bind) = bind {
                config.bind = bind;
            }
            eprintln!("🛰  LifeStyleCheck relay v{}", env!("CARGO_PKG_VERSION"));
            eprintln!("   Listen: http://{}", config.bind);
            eprintln!("   Model: {}", config.model);
            lifestyle_check::relay::serve(config).await?;
        }
        Command::Chat { relay_url } => {
            let mut config = ChatConfig::from_env()?;
            if let Some(relay_url) = relay_url {
                config.relay_url = relay_url;
            }
            lifestyle_check::cli::run_chat(config).await?;
        }
    }

    Ok(())
}
