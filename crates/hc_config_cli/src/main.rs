//! hc-github-config CLI: build the GitHub configuration plan for the
//! Holochain organization.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hc_config_core::{managed_repositories, plan_organization, EnvSecretSource, OrgSettings};

mod errors;
use errors::Error;

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Environment variable prefix for secret values consumed at plan time.
const SECRET_ENV_PREFIX: &str = "HC_CONFIG_SECRET_";

/// hc-github-config CLI: describe the organization's repository configuration
#[derive(Parser)]
#[command(name = "hc-github-config")]
#[command(
    about = "Build the GitHub configuration plan for the Holochain organization",
    long_about = None
)]
struct Cli {
    /// Path to an organization settings TOML file
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the plan and write it as JSON for the provisioning engine
    Plan {
        /// Write the plan to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the managed repositories
    Repos,

    /// Show the CLI version
    Version,
}

fn load_settings(path: Option<&PathBuf>) -> Result<OrgSettings, Error> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| Error::SettingsRead {
                path: path.display().to_string(),
                source,
            })?;
            Ok(OrgSettings::from_toml_str(&text)?)
        }
        None => Ok(OrgSettings::default()),
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let settings = load_settings(cli.settings.as_ref())?;

    match &cli.command {
        Commands::Plan { output } => {
            let secrets = EnvSecretSource::with_prefix(SECRET_ENV_PREFIX);
            let stack = plan_organization(&settings, &secrets)?;
            let plan = stack.to_plan_json()?;

            match output {
                Some(path) => fs::write(path, plan).map_err(|source| Error::PlanWrite {
                    path: path.display().to_string(),
                    source,
                })?,
                None => println!("{plan}"),
            }
            Ok(())
        }
        Commands::Repos => {
            for entry in managed_repositories()? {
                match &entry.spec.description {
                    Some(description) => println!("{}\t{}", entry.spec.name, description),
                    None => println!("{}", entry.spec.name),
                }
            }
            Ok(())
        }
        Commands::Version => {
            println!("hc-github-config version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty())
        .with(EnvFilter::from_env("HC_CONFIG_LOG"))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("Error: {e}");
        std::process::exit(1);
    }
}
