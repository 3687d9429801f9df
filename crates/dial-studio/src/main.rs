//! Dial Studio: drives analog clock / stopwatch dials headlessly, logs their
//! accessible labels as they tick and exports SVG (optionally PNG) snapshots.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;

use dial_engine::logging::{LoggingConfig, init_logging};
use dial_ui::prelude::*;

mod export;
mod host;

/// Dial Studio
#[derive(Parser, Debug)]
#[command(name = "dial-studio")]
#[command(about = "Run analog clock / stopwatch dials and export snapshots")]
#[command(version)]
struct Args {
    /// `.mkml` file declaring the dials; replaces the single dial built from flags
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Mode of the dial built from flags
    #[arg(long, default_value = "clock")]
    mode: ClockMode,

    /// Edge length of the dial in pixels
    #[arg(long, default_value_t = 200.0)]
    size: f32,

    /// Tick marks around the rim (0 hides the rim)
    #[arg(long, default_value_t = 60)]
    marks: u32,

    /// Hide the 1-12 numerals
    #[arg(long)]
    no_ticks: bool,

    /// Leave stopwatch dials idle instead of starting them
    #[arg(long)]
    no_start: bool,

    /// Stop after this many seconds; runs until Ctrl-C when omitted
    #[arg(long)]
    run_for: Option<f64>,

    /// Directory snapshots are written to
    #[arg(long, default_value = "dial-out")]
    out_dir: PathBuf,

    /// Also rasterize every snapshot to PNG
    #[arg(long)]
    png: bool,

    /// Ignore key names (space, enter, escape, r) typed on stdin
    #[arg(long)]
    no_keys: bool,

    /// Log filter in `env_logger` syntax, e.g. `debug` or `dial_ui=trace`
    #[arg(long)]
    log: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.as_str());
    }
    init_logging(logging);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let run_for = args
        .run_for
        .map(|secs| {
            Duration::try_from_secs_f64(secs).with_context(|| format!("invalid --run-for {secs}"))
        })
        .transpose()?;

    let mut clocks = load_clocks(&args)?;
    let time = SystemClock;

    for clock in &mut clocks {
        clock.attach(&time);
        if clock.mode() == ClockMode::Stopwatch && !args.no_start {
            let _ = clock.toggle_run(&time, Some(true));
        }
        log::info!("{} ({}): {}", clock.scope(), clock.mode(), clock.label());
    }

    match run_for {
        Some(d) => log::info!("running {} dial(s) for {:.1}s", clocks.len(), d.as_secs_f64()),
        None => log::info!("running {} dial(s), press Ctrl+C to stop", clocks.len()),
    }
    let keys = (!args.no_keys).then(host::spawn_key_reader);
    host::drive(&mut clocks, &time, run_for, keys).await?;

    export::write_snapshots(&clocks, time.now(), &args.out_dir, args.png)?;

    for clock in &mut clocks {
        if clock.mode() == ClockMode::Stopwatch {
            let elapsed = clock.elapsed(time.now());
            log::info!("{}: stopped at {:.3}s", clock.scope(), elapsed.as_secs_f64());
        }
        clock.detach();
    }
    Ok(())
}

fn load_clocks(args: &Args) -> Result<Vec<AnalogClock>> {
    let Some(path) = &args.file else {
        if !(args.size.is_finite() && args.size > 0.0) {
            bail!("--size must be a positive number, got {}", args.size);
        }
        let config = ClockConfig::default()
            .size(args.size)
            .mode(args.mode)
            .marks(args.marks)
            .ticks(!args.no_ticks);
        return Ok(vec![AnalogClock::new("dial", config)]);
    };

    let src = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let clocks = match parse_and_build(&src) {
        Ok(clocks) => clocks,
        Err(BuildError::Parse(e)) => bail!("failed to load {}:\n{}", path.display(), e.render(&src)),
        Err(e) => return Err(e).with_context(|| format!("failed to load {}", path.display())),
    };
    log::info!("loaded {} dial(s) from {}", clocks.len(), path.display());
    Ok(clocks)
}
