//! Portal - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `portal service-types` | Print the service-type labels in order |
//! | `portal meta [--force]` | Fetch and print the public meta document |
//! | `portal forbidden` | Print the rendered Forbidden view |
//! | `portal serve` | Run the HTTP server |

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use portal_application::MetaServiceInterface;
use portal_domain::SERVICE_TYPES;
use portal_infrastructure::AppContext;
use portal_server::ForbiddenView;
use portal_server::init::load_config;

/// Command line interface for the portal
#[derive(Parser, Debug)]
#[command(name = "portal")]
#[command(about = "Portal - service types, public meta, and access views")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the registered service types, one per line
    ServiceTypes,
    /// Fetch the public meta document and print it as JSON
    Meta {
        /// Bypass the cache
        #[arg(long)]
        force: bool,
    },
    /// Print the rendered Forbidden view
    Forbidden,
    /// Run the HTTP server
    Serve,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::ServiceTypes => {
            for label in SERVICE_TYPES {
                println!("{label}");
            }
        }
        Command::Meta { force } => {
            let config = load_config(cli.config.as_deref())?;
            portal_infrastructure::logging::init_logging(config.logging.clone())?;
            let context = AppContext::new(config)?;
            let document = context.meta_service().fetch_meta(force).await?;
            println!("{}", serde_json::to_string_pretty(&*document)?);
        }
        Command::Forbidden => {
            println!("{}", ForbiddenView::new()?.render()?);
        }
        Command::Serve => {
            portal_server::run_server(cli.config.as_deref()).await?;
        }
    }

    Ok(())
}
