use clap::{Args, Parser, Subcommand};
use foodie_config::FoodieConfig;

/// Top-level CLI parser for the `foodie` binary.
#[derive(Debug, Parser)]
#[command(name = "foodie", version, about = "FoodieFinds - restaurant and dish catalog API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Log level used when `FOODIE_LOG` is not set.
    #[must_use]
    pub const fn default_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else if matches!(self.command, Commands::Serve(_)) {
            "info"
        } else {
            "warn"
        }
    }
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Serve the catalog API over HTTP.
    Serve(ServeArgs),
    /// Print the resolved configuration as JSON.
    Config,
}

#[derive(Clone, Debug, Default, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides `server.port`)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Catalog database file (overrides `database.path`)
    #[arg(short, long)]
    pub database: Option<String>,
}

impl ServeArgs {
    /// Layer command-line values over the loaded configuration.
    pub fn apply(&self, config: &mut FoodieConfig) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(database) = &self.database {
            config.database.path.clone_from(database);
        }
    }
}
