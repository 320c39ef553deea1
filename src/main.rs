mod config;
mod ledger;
mod logging;
mod models;
mod run;
mod session;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        return run::as_cli(&args);
    }

    let config = config::Config::from_env()?;
    logging::init(&config)?;
    run::as_tui(&config)
}
