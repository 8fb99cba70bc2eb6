use std::sync::Arc;

use colored::*;
use netswitch_core::executor::{CommandRunner, SystemRunner};
use netswitch_core::probe::{self, ProbeCallback};

use crate::terminal::{print, spinner};

pub async fn fastest() -> anyhow::Result<()> {
    let spinner = spinner::start("Testing fastest DNS...");

    let progress = spinner.clone();
    let on_probe: ProbeCallback = Box::new(move |result| {
        let line = match result.latency_ms {
            Some(ms) => format!("{} answered in {ms:.2} ms", result.address),
            None => format!("{} unreachable", result.address),
        };
        progress.set_message(line);
    });

    let runner: Arc<dyn CommandRunner> = Arc::new(SystemRunner);
    let fastest = probe::select_fastest(runner, Some(on_probe)).await;
    spinner.finish_and_clear();

    match fastest {
        Some((address, latency)) => {
            print::aligned_line("Fastest", address.to_string().green().bold());
            print::aligned_line("Latency", format!("{latency:.2} ms").yellow());
        }
        None => print::status("No DNS servers reachable."),
    }
    Ok(())
}
