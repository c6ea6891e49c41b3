use anyhow::Result;
use clap::{Parser, Subcommand};
use portal_application::PortalContext;
use portal_infrastructure::{ConfigService, PortalPaths};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Placement Portal CLI - session, role checks and profile editing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Establish a session with an issued access token
    Login {
        #[arg(long)]
        token: String,
    },
    /// End the session (local state is always cleared)
    Logout,
    /// Show session flags
    Status,
    /// Set the theme preference
    Theme { name: String },
    /// Check whether the current session may open a route requiring ROLE
    Authorize { role: String },
    /// Read or replace the profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Render the profile in view mode
    Show,
    /// Print the profile payload as JSON
    Export,
    /// Replace the profile with a JSON payload from FILE
    Import { file: PathBuf },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default configuration file
    Init,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config_service = ConfigService::new(PortalPaths::default());

    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Show => commands::config::show(&config_service),
            ConfigAction::Init => commands::config::init(&config_service),
        };
    }

    let config = config_service.get_config()?;
    let context = PortalContext::from_config(config, config_service.paths())?;

    match cli.command {
        Commands::Login { token } => commands::session::login(&context, &token)?,
        Commands::Logout => commands::session::logout(&context).await?,
        Commands::Status => commands::session::status(&context)?,
        Commands::Theme { name } => commands::session::theme(&context, &name)?,
        Commands::Authorize { role } => commands::authorize::run(&context, &role).await?,
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show(&context).await?,
            ProfileAction::Export => commands::profile::export(&context).await?,
            ProfileAction::Import { file } => commands::profile::import(&context, &file).await?,
        },
        Commands::Config { .. } => {}
    }

    Ok(())
}
