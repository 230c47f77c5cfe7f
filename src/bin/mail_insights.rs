use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};

use mail_insights::api::DashboardClient;
use mail_insights::config::{load_config, resolve_api_url};
use mail_insights::terminal::{run_tui, snapshot};

#[derive(Parser)]
#[command(name = "mail_insights")]
#[command(about = "Terminal dashboard for the email intelligence API", long_about = None)]
struct Cli {
    /// Base URL of the analysis API (overrides the config file)
    #[arg(long, global = true, env = "NEXT_PUBLIC_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the interactive dashboard (default)
    Tui,

    /// Fetch once and print the dashboard as plain text
    Snapshot {
        #[arg(long, default_value_t = 120)]
        width: u16,

        #[arg(long, default_value_t = 48)]
        height: u16,
    },

    /// Check that the analysis API is up
    Health,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let cfg = load_config().map_err(|e| anyhow!("Configuration error: {e}"))?;
    let api_url = resolve_api_url(&cfg, cli.api_url.as_deref())?;
    let client = DashboardClient::new(api_url)?;

    match cli.cmd.unwrap_or(Command::Tui) {
        Command::Tui => run_tui(client),

        Command::Snapshot { width, height } => {
            print!("{}", snapshot(&client, width, height));
            Ok(())
        }

        Command::Health => {
            let health = client.check_health()?;
            match client.service_info() {
                Ok(info) => println!("{} {} ({})", info.message, info.version, info.status),
                Err(e) => log::warn!("Could not read service banner: {e}"),
            }
            println!("{}: {}", client.base_url(), health.status);
            Ok(())
        }
    }
}
