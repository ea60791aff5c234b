// File: src/bin/tui.rs
use anyhow::{Context, Result, bail};
use gastro::config::Config;
use gastro::paths::AppPaths;
use gastro::route::Route;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

const USAGE: &str = "\
Usage: gastro [--route <path>] [--init-config]

  --route <path>   start on '/', '/dashboard' or '/admin'
  --init-config    write the default config file and exit
";

fn init_logging() -> Result<()> {
    let path = AppPaths::log_file()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env("GASTRO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut start = Route::Dashboard;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--route" => {
                let path = args.next().context("--route needs a path")?;
                start = Route::from_path(&path);
            }
            "--init-config" => {
                let path = AppPaths::config_file()?;
                if path.exists() {
                    bail!("{} already exists", path.display());
                }
                Config::default().save_to(&path)?;
                println!("Wrote {}", path.display());
                return Ok(());
            }
            "-h" | "--help" => {
                print!("{}", USAGE);
                return Ok(());
            }
            other => bail!("Unknown argument: {}\n\n{}", other, USAGE),
        }
    }

    init_logging()?;
    let config = Config::load()?;
    log::info!("starting on {}", start);

    gastro::tui::run(config, start).await
}
