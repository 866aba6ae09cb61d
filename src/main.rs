use std::path::Path;

use clap::Parser;
use rudiments::cli::commands::{calc, demo, flow, init, person};
use rudiments::cli::{Cli, Commands};
use rudiments::{Error, Result, Settings, logging};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

/// Load settings (from `--config` if given) and start logging with them.
fn setup(config: Option<&Path>) -> Result<Settings> {
    let settings = match config {
        Some(path) => {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            Settings::load_from(path)?
        }
        None => Settings::load()?,
    };
    logging::init_with_config(&settings.logging);
    tracing::debug!("[cli] loaded settings: {settings:?}");
    Ok(settings)
}

fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let config = cli.config.as_deref();

    match cli.command {
        // Init writes the file `--config` names and must work even when an
        // existing file is unreadable, so it never loads settings
        Commands::Init { force } => {
            logging::init();
            let path = config
                .map(Path::to_path_buf)
                .unwrap_or_else(Settings::default_config_path);
            init::run_init(&mut out, &path, force)
        }
        Commands::Config => {
            let settings = setup(config)?;
            init::run_config(&mut out, &settings)
        }
        Commands::Calc { op, a, b } => {
            let settings = setup(config)?;
            calc::run(
                &mut out,
                op,
                a,
                b,
                settings.calculator.initial_result,
                cli.json || settings.output.json,
            )
        }
        Commands::Person {
            name,
            age,
            email,
            set_age,
        } => {
            let settings = setup(config)?;
            let json = cli.json || settings.output.json;
            person::run(&mut out, name, age, email, set_age, json)
        }
        Commands::Flow { action } => {
            setup(config)?;
            flow::run(&mut out, action)
        }
        Commands::Demo { target } => {
            setup(config)?;
            demo::run(&mut out, target)
        }
    }
}
