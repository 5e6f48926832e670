//==============================================================================
// The two scenes: shallow aliasing, then a real copy
//==============================================================================

use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use tracing::info;

use crate::config::{DemoConfig, SceneIndices};
use crate::error::DemoError;
use crate::holder::PrimeHolder;
use crate::sieve::{CountingSource, TrialDivision};
use crate::timing::Timer;

/// What one scene observed, for callers that want more than the printout.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneReport {
    pub original: u64,
    pub copy: u64,
    pub shares_storage: bool,
    pub expensive_runs: usize,
    pub create_time: Duration,
    pub copy_time: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoSummary {
    pub shallow: SceneReport,
    pub deep: SceneReport,
}

/// Runs both scenes against `out`, shallow first.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<DemoSummary, DemoError> {
    let shallow = shallow_scene(config, out)?;
    writeln!(out)?;
    let deep = deep_scene(config, out)?;
    Ok(DemoSummary { shallow, deep })
}

/// Binds a second handle to an existing holder and moves its index.
/// Both handles report the new prime afterwards.
pub fn shallow_scene<W: Write>(config: &DemoConfig, out: &mut W) -> Result<SceneReport, DemoError> {
    let SceneIndices { original, reassigned } = config.shallow_scene;
    info!(original, reassigned, "shallow scene");
    writeln!(out, "{}", heading("Scene 1: assignment shares state", config.color))?;

    let source = CountingSource::new(TrialDivision);
    let timer = Timer::new("shallow: create");
    let a = PrimeHolder::create_with(&source, config.batch_size, original).shared();
    let create_time = timer.stop();
    writeln!(out, "  a = {}   ({:?})", a.borrow(), create_time)?;

    let timer = Timer::new("shallow: assign");
    let b = PrimeHolder::assign(&a);
    let copy_time = timer.stop();
    b.borrow_mut().set_index(reassigned);
    writeln!(out, "  b = a; b.index = {}", reassigned)?;

    let report = SceneReport {
        original: a.borrow().number()?,
        copy: b.borrow().number()?,
        shares_storage: a.borrow().shares_storage_with(&b.borrow()),
        expensive_runs: source.calls(),
        create_time,
        copy_time,
    };

    writeln!(out, "  a = {}", a.borrow())?;
    writeln!(out, "  b = {}", b.borrow())?;
    writeln!(
        out,
        "  {}",
        note("a changed too: both names point at one holder", config.color, false)
    )?;
    write_summary(out, &report)?;
    Ok(report)
}

/// Copies an existing holder with a new index. The original keeps its value
/// and the copy never runs the sieve.
pub fn deep_scene<W: Write>(config: &DemoConfig, out: &mut W) -> Result<SceneReport, DemoError> {
    let SceneIndices { original, reassigned } = config.deep_scene;
    info!(original, reassigned, "deep scene");
    writeln!(out, "{}", heading("Scene 2: prototype clone owns its copy", config.color))?;

    let source = CountingSource::new(TrialDivision);
    let timer = Timer::new("deep: create");
    let a = PrimeHolder::create_with(&source, config.batch_size, original);
    let create_time = timer.stop();
    writeln!(out, "  a = {}   ({:?})", a, create_time)?;

    let timer = Timer::new("deep: clone");
    let b = PrimeHolder::cloned_from(&a, reassigned);
    let copy_time = timer.stop();
    writeln!(out, "  b = clone of a with index {}   ({:?})", reassigned, copy_time)?;

    let report = SceneReport {
        original: a.number()?,
        copy: b.number()?,
        shares_storage: a.shares_storage_with(&b),
        expensive_runs: source.calls(),
        create_time,
        copy_time,
    };

    writeln!(out, "  a = {}", a)?;
    writeln!(out, "  b = {}", b)?;
    writeln!(
        out,
        "  {}",
        note("a is untouched: b has its own primes", config.color, true)
    )?;
    write_summary(out, &report)?;
    Ok(report)
}

fn write_summary<W: Write>(out: &mut W, report: &SceneReport) -> Result<(), DemoError> {
    writeln!(
        out,
        "  expensive computations: {}, shared storage: {}",
        report.expensive_runs, report.shares_storage
    )?;
    Ok(())
}

fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().cyan().to_string()
    } else {
        text.to_string()
    }
}

fn note(text: &str, color: bool, good: bool) -> String {
    match (color, good) {
        (false, _) => text.to_string(),
        (true, true) => text.green().to_string(),
        (true, false) => text.yellow().to_string(),
    }
}
