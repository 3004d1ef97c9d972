//! `mvb` - inspect mediation hosts and effective configuration

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mvb::infrastructure::logging::init_logging;
use mvb::{ConfigLoader, init_context};
use mvb::application::ports::registry::list_mediation_hosts;

#[derive(Parser, Debug)]
#[command(name = "mvb", version, about = "Mediated View Binder tooling")]
struct Cli {
    /// Configuration file (defaults to mvb.toml lookup)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered mediation hosts
    Hosts,
    /// Print the effective configuration as TOML
    Config,
    /// Bootstrap a mediation context and report the selected host
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> mvb::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }

    match cli.command {
        Command::Hosts => {
            for (name, description) in list_mediation_hosts() {
                println!("{name:<16} {description}");
            }
        }
        Command::Config => {
            let config = loader.load()?;
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| mvb::Error::configuration(format!("Failed to render config: {e}")))?;
            print!("{rendered}");
        }
        Command::Check => {
            let config = loader.load()?;
            init_logging(&config.logging)?;
            let context = init_context(config)?;
            println!(
                "host={} max_depth={}",
                context.host().name(),
                context.config().mediation.max_depth
            );
        }
    }
    Ok(())
}
