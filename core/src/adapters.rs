//! Adapter discovery via `netsh interface show interface`.

use std::time::Duration;

use netswitch_common::adapter::{AdapterName, DEFAULT_ADAPTER};
use netswitch_common::sanitize;
use tracing::{debug, warn};

use crate::executor::{CommandName, CommandRunner};

const LIST_TIMEOUT: Duration = Duration::from_secs(15);

/// Most entries the enumerator will ever hand to a selection surface.
const MAX_ADAPTERS: usize = 20;

/// Safe defaults used whenever discovery fails or finds nothing.
const FALLBACK_ADAPTERS: [&str; 3] = ["Wi-Fi", "Ethernet", "Local Area Connection"];

/// Lists adapters for the selection surface, the synthetic "all adapters"
/// entry first. Never fails outward: any executor problem degrades to the
/// fixed fallback list, and the result is always non-empty.
pub async fn list_adapters(runner: &dyn CommandRunner) -> Vec<AdapterName> {
    let args: Vec<String> = ["interface", "show", "interface"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let outcome = runner.run(CommandName::Netsh, &args, LIST_TIMEOUT).await;

    if !outcome.succeeded() {
        warn!("adapter discovery failed, using fallback list");
        return fallback_list();
    }

    let mut adapters = vec![AdapterName::all()];
    for line in outcome.stdout.lines() {
        let line = sanitize::sanitize_text(line, 200);
        if let Some(name) = adapter_from_line(&line) {
            if !adapters.contains(&name) {
                adapters.push(name);
            }
        }
    }

    // Nothing discovered beyond the synthetic entry.
    if adapters.len() < 2 {
        adapters.extend(FALLBACK_ADAPTERS.iter().map(|name| AdapterName::new(name)));
    }

    adapters.truncate(MAX_ADAPTERS);
    debug!("offering {} adapter(s)", adapters.len());
    adapters
}

/// A qualifying line carries an Enabled/Disabled state marker; the adapter
/// name is its last whitespace-separated token.
fn adapter_from_line(line: &str) -> Option<AdapterName> {
    if !line.contains("Enabled") && !line.contains("Disabled") {
        return None;
    }
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() <= 3 {
        return None;
    }
    let name = AdapterName::new(parts[parts.len() - 1]);
    // The sanitizer substitutes the default for anything unusable, and the
    // default is implicit in every list, so skip it here.
    if name.as_str() == DEFAULT_ADAPTER {
        return None;
    }
    Some(name)
}

fn fallback_list() -> Vec<AdapterName> {
    let mut adapters = vec![AdapterName::all()];
    adapters.extend(FALLBACK_ADAPTERS.iter().map(|name| AdapterName::new(name)));
    adapters
}
