use std::io::{self, Write};
use std::time::Instant;

use rand::prelude::*;

use crate::{bubble, patterns, Config, Error};

pub const SORT_START_MSG: &str = "Sorting array";
pub const SORT_DONE_MSG: &str = "array Sorted";

/// Generates `config.len()` values, bubble sorts them and prints the two status lines to stdout.
pub fn run(config: &Config) -> Result<Vec<f64>, Error> {
    let stdout = io::stdout();
    run_with_output(config, &mut stdout.lock())
}

/// Like [`run`], with the status lines written to `out`. Every call sorts freshly drawn data.
pub fn run_with_output<W: Write>(config: &Config, out: &mut W) -> Result<Vec<f64>, Error> {
    let seed: u64 = thread_rng().gen();
    let range = config.min()..config.max();
    let mut v = patterns::random_uniform_f64_from_seed(config.len(), range, seed);
    log::debug!(
        "Generated {} values in [{}, {}), seed {seed}",
        v.len(),
        config.min(),
        config.max(),
    );

    writeln!(out, "{SORT_START_MSG}")?;
    out.flush()?;

    let start = Instant::now();
    bubble::sort_by(&mut v, f64::total_cmp);
    log::info!("Sorted {} values in {:.2?}", v.len(), start.elapsed());

    writeln!(out, "{SORT_DONE_MSG}")?;
    out.flush()?;

    Ok(v)
}
