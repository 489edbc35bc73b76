use std::env;
use std::error::Error;
use std::io;
use std::io::Write;
use std::path::PathBuf;

use tracing::{error, info};

use lotto_sim::config::{default_config_path, Config};
use lotto_sim::service::log::init_logger;
use lotto_sim::{play, WELCOME_INFO};

type MainResult = Result<(), Box<dyn Error>>;

fn main() -> MainResult {
    let path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| default_config_path().to_path_buf());

    let (config, config_err) = match Config::read(&path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let _guards = init_logger(&config.log);
    if let Some(e) = config_err {
        error!("Cannot read config ({:?}): {}, using defaults", path, e);
    }
    info!(
        "Starting lotto_sim, numbers {}..={}, {} per ticket",
        config.game.lower, config.game.upper, config.game.entries
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    stdout.write_all(WELCOME_INFO.as_bytes())?;

    if let Err(e) = play(config.game, stdin.lock(), stdout.lock()) {
        error!("{}", e);
        return Err(e.into());
    }

    info!("lotto_sim stopped");
    Ok(())
}
