//! `hashid` - print the deterministic UUID for a string.
//!
//! Settings come from `hashid.{toml,yaml,json}`, `HASHID_*` environment
//! variables (a `.env` file is honoured) and finally command-line flags.
//! Only the UUID is written to stdout; logs and errors go to stderr.

use std::process::ExitCode;

use anyhow::Context;
use hashid::cli::{self, CliError, Command};
use hashid::settings::Settings;
use hashid::CharMap;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if err.downcast_ref::<CliError>().is_some() {
                eprintln!("\n{}", cli::usage());
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    let raw = cli::collect_args(std::env::args_os().skip(1))?;
    let args = match cli::parse_args(raw)? {
        Command::Help => {
            print!("{}", cli::usage());
            return Ok(());
        }
        Command::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Generate(args) => args,
    };

    let mut settings = Settings::load().context("failed to load settings")?;
    settings.apply_args(&args);
    init_tracing(&settings.log_level);

    if let Some(path) = &settings.charmap {
        let map = CharMap::from_file(path)
            .with_context(|| format!("failed to load charmap {}", path.display()))?;
        tracing::debug!(path = %path.display(), entries = map.len(), "custom_charmap_loaded");
        charmap::global().set(map);
    }

    let id = hashid::generate_with(&args.input, settings.into_options())?;
    println!("{id}");
    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
