use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use dial_ui::prelude::*;

/// How often the dials' label tickers are polled.
const POLL_PERIOD: Duration = Duration::from_millis(250);

/// Reads key names from stdin, one per line, on a background thread.
///
/// The channel closes when stdin reaches end of file.
pub fn spawn_key_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Polls every dial until Ctrl-C or until `run_for` has passed, logging each
/// label refresh. Lines arriving on `keys` are pressed on every dial.
pub async fn drive(
    clocks: &mut [AnalogClock],
    time: &dyn TimeSource,
    run_for: Option<Duration>,
    mut keys: Option<mpsc::Receiver<String>>,
) -> Result<()> {
    let mut keys_open = keys.is_some();
    let mut interval = time::interval(POLL_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let deadline = async {
        match run_for {
            Some(d) => time::sleep(d).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                for clock in clocks.iter_mut() {
                    if clock.refresh(time) {
                        log::info!("{}: {}", clock.scope(), clock.label());
                    }
                }
            }
            line = next_key(&mut keys), if keys_open => match line {
                Some(line) => {
                    press(clocks, time, &line);
                }
                None => {
                    log::debug!("stdin closed, key input off");
                    keys_open = false;
                }
            },
            res = tokio::signal::ctrl_c() => {
                res.context("failed to listen for Ctrl+C")?;
                log::info!("interrupted");
                break;
            }
            _ = &mut deadline => {
                log::info!("run time elapsed");
                break;
            }
        }
    }
    Ok(())
}

async fn next_key(keys: &mut Option<mpsc::Receiver<String>>) -> Option<String> {
    match keys {
        Some(rx) => rx.recv().await,
        None => None,
    }
}

/// Routes one line of key input to every dial as a key press. An empty line
/// presses Enter.
///
/// Returns how many dials reacted.
pub fn press(clocks: &mut [AnalogClock], time: &dyn TimeSource, line: &str) -> usize {
    let name = line.trim();
    let key = if name.is_empty() { Key::Enter } else { Key::from_name(name) };
    if key == Key::Other {
        log::warn!("unknown key {name:?}, expected space, enter, escape or r");
        return 0;
    }

    let event = UiEvent::KeyPress { key };
    let ctx = EventCtx::new(time);
    let mut handled = 0;
    for clock in clocks.iter_mut() {
        let bounds = clock.bounds();
        if clock.on_event(&event, bounds, &ctx).is_consumed() {
            handled += 1;
            log::info!("{} ({:?}): {}", clock.scope(), clock.state(), clock.label());
        }
    }
    handled
}
