use log::LevelFilter;

use bubble_bench::{pipeline, Config, Error};

fn init_logging() {
    env_logger::Builder::new()
        .filter(None, LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn main() -> Result<(), Error> {
    init_logging();

    pipeline::run(&Config::default())?;

    Ok(())
}
