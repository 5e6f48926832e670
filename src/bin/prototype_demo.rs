use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use prototype_primes::{demo, DemoConfig};

fn main() -> Result<()> {
    let config = DemoConfig::default();
    config.validate().context("default demo config is invalid")?;

    tracing_subscriber::fmt()
        .with_max_level(config.level()?)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = demo::run(&config, &mut out).context("demo scene failed")?;

    let label = if config.color {
        "Done:".bold().to_string()
    } else {
        "Done:".to_string()
    };
    writeln!(out)?;
    writeln!(
        out,
        "{} shallow copy left both at {}, deep copy kept {} and {}",
        label, summary.shallow.original, summary.deep.original, summary.deep.copy
    )?;
    out.flush()?;

    Ok(())
}
