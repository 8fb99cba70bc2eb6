//! Latency probing and fastest-resolver selection.

use std::sync::Arc;
use std::time::{Duration, Instant};

use netswitch_common::address::NetworkAddress;
use tracing::{debug, warn};

use crate::executor::{CommandName, CommandRunner};

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Trusted candidate pool for fastest-resolver selection.
pub const CANDIDATES: [&str; 4] = ["1.1.1.1", "8.8.8.8", "9.9.9.9", "208.67.222.222"];

/// One measurement against a single resolver. `latency_ms` is absent when
/// the address did not answer cleanly within the deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub address: NetworkAddress,
    pub latency_ms: Option<f64>,
}

/// Called with each candidate's result as it arrives.
pub type ProbeCallback = Box<dyn Fn(&ProbeResult) + Send + Sync>;

/// Sends one ping round trip and measures wall-clock time around the call.
/// Timeouts, non-zero exits and spawn failures all yield an absent latency
/// instead of an error.
pub async fn probe(runner: &dyn CommandRunner, address: &NetworkAddress) -> ProbeResult {
    let args = vec!["-n".to_string(), "1".to_string(), address.to_string()];

    let started = Instant::now();
    let outcome = runner.run(CommandName::Ping, &args, PROBE_TIMEOUT).await;
    let elapsed = started.elapsed();

    let latency_ms = if outcome.succeeded() {
        Some(round2(elapsed.as_secs_f64() * 1000.0))
    } else {
        debug!("{} did not answer", address);
        None
    };

    ProbeResult {
        address: address.clone(),
        latency_ms,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Probes the trusted pool concurrently, one task per candidate, and picks
/// the strict minimum latency. Results are reduced in candidate order, so
/// ties resolve to the earliest candidate no matter which probe finished
/// first. Returns `None` when every candidate is unreachable.
pub async fn select_fastest(
    runner: Arc<dyn CommandRunner>,
    on_probe: Option<ProbeCallback>,
) -> Option<(NetworkAddress, f64)> {
    let callback: Option<Arc<dyn Fn(&ProbeResult) + Send + Sync>> =
        on_probe.map(|cb| Arc::from(cb));
    let mut handles = Vec::new();

    for candidate in CANDIDATES {
        // The pool is hardcoded, but re-validate before probing anyway.
        let Ok(address) = NetworkAddress::parse(candidate) else {
            warn!("skipping invalid candidate {candidate}");
            continue;
        };
        let runner = runner.clone();
        let callback = callback.clone();
        handles.push(tokio::spawn(async move {
            let result = probe(runner.as_ref(), &address).await;
            if let Some(report) = callback.as_deref() {
                report(&result);
            }
            result
        }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        if let Ok(result) = handle.await {
            results.push(result);
        }
    }
    fastest_of(results)
}

/// Strict-minimum reduction: a later candidate replaces the front-runner
/// only with a strictly lower latency.
fn fastest_of(results: impl IntoIterator<Item = ProbeResult>) -> Option<(NetworkAddress, f64)> {
    let mut fastest: Option<(NetworkAddress, f64)> = None;
    for result in results {
        let Some(latency) = result.latency_ms else {
            continue;
        };
        let better = match &fastest {
            Some((_, best)) => latency < *best,
            None => true,
        };
        if better {
            fastest = Some((result.address, latency));
        }
    }
    fastest
}
