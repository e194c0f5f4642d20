//! `paramdoc` command-line interface.
//!
//! With no sub-command, renders `tables/soft_tables.json` into `params.rst`
//! in the current directory.

mod cli_config;
mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "paramdoc",
    version,
    about = "Render parameter tables into reStructuredText for Sphinx manuals",
    styles = output::clap_styles()
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (default: ./.paramdoc.toml, then ~/.config/paramdoc.toml)
    #[arg(long, global = true, env = "PARAMDOC_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render parameter tables into a reStructuredText document (default)
    Params {
        /// Parameter tables JSON (default: tables/soft_tables.json)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (default: params.rst)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the Sphinx conf.py stub
    Conf {
        /// Output file (default: conf.py)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List registered parameter types
    Types,
    /// Report parameters whose type is not registered
    Check {
        /// Parameter tables JSON (default: tables/soft_tables.json)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let directive = if cli.verbose {
        "paramdoc=debug"
    } else {
        "paramdoc=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        output::error(format!("{e:#}"));
        std::process::exit(1);
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cli_config = cli_config::load_cli_config(cli.config.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Params {
        input: None,
        output: None,
    });

    match command {
        Commands::Params { input, output } => {
            commands::handle_params_command(&cli_config, input, output)
        }
        Commands::Conf { output } => commands::handle_conf_command(&cli_config, output),
        Commands::Types => commands::handle_types_command(),
        Commands::Check { input } => commands::handle_check_command(&cli_config, input),
    }
}
