//! Applying resolver pairs and flushing the resolver cache.
//!
//! The applier issues two sequential `netsh` calls (set primary, add
//! secondary at index 2) and fails fast: when the first call fails the
//! second is never attempted, and no rollback is issued. The report names
//! the partial state so an operator can tell it from a clean failure.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use netswitch_common::adapter::AdapterName;
use netswitch_common::address::NetworkAddress;
use netswitch_common::error::{OpReport, SwitchError};
use netswitch_common::preset::DnsServerPair;
use tokio::sync::Mutex;
use tracing::info;

use crate::executor::{CommandName, CommandOutcome, CommandRunner};

const APPLY_TIMEOUT: Duration = Duration::from_secs(30);
const FLUSH_TIMEOUT: Duration = Duration::from_secs(30);

pub const INVALID_PAIR_MESSAGE: &str = "Please enter valid IPv4 or IPv6 addresses for DNS.";
const TIMEOUT_MESSAGE: &str = "Command timed out. Please try again.";

/// Owns the executor seam and serializes applies per adapter so two
/// concurrent applies cannot interleave their partial writes.
pub struct DnsService {
    runner: Arc<dyn CommandRunner>,
    apply_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl DnsService {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            apply_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Sets `pair.primary` statically and adds `pair.secondary` at priority
    /// index 2 on the pair's adapter.
    pub async fn apply(&self, pair: &DnsServerPair) -> OpReport {
        let lock = self.adapter_lock(pair.adapter.as_str()).await;
        let _guard = lock.lock().await;

        info!(
            "applying DNS {} / {} on {}",
            pair.primary, pair.secondary, pair.adapter
        );

        if let Err(err) = self.run_netsh(set_dns_args(pair)).await {
            return report_failure("Failed to set primary DNS", &err);
        }

        if let Err(err) = self.run_netsh(add_dns_args(pair)).await {
            // The primary is already live on the adapter at this point.
            return report_failure("Primary DNS set, but adding the secondary failed", &err);
        }

        OpReport::success(format!("DNS applied: {}, {}", pair.primary, pair.secondary))
    }

    /// Boundary entry for free-text input: validates, then applies. A
    /// validation failure produces the canonical message without spawning
    /// anything.
    pub async fn apply_raw(&self, primary: &str, secondary: &str, adapter: &str) -> OpReport {
        match build_pair(primary, secondary, adapter) {
            Ok(pair) => self.apply(&pair).await,
            Err(err) => report_failure("Invalid DNS input", &err),
        }
    }

    /// Clears the resolver cache. The command is fixed; nothing in it is
    /// derived from user input.
    pub async fn flush(&self) -> OpReport {
        let args = vec!["/flushdns".to_string()];
        let outcome = self
            .runner
            .run(CommandName::Ipconfig, &args, FLUSH_TIMEOUT)
            .await;
        match outcome.into_result(CommandName::Ipconfig, FLUSH_TIMEOUT) {
            Ok(_) => OpReport::success("DNS cache flushed successfully!"),
            Err(err) => report_failure("Failed to flush DNS", &err),
        }
    }

    async fn run_netsh(&self, args: Vec<String>) -> Result<CommandOutcome, SwitchError> {
        self.runner
            .run(CommandName::Netsh, &args, APPLY_TIMEOUT)
            .await
            .into_result(CommandName::Netsh, APPLY_TIMEOUT)
    }

    async fn adapter_lock(&self, adapter: &str) -> Arc<Mutex<()>> {
        let mut locks = self.apply_locks.lock().await;
        locks.entry(adapter.to_string()).or_default().clone()
    }
}

fn build_pair(primary: &str, secondary: &str, adapter: &str) -> Result<DnsServerPair, SwitchError> {
    let invalid = || SwitchError::InvalidInput(INVALID_PAIR_MESSAGE.to_string());
    let primary = NetworkAddress::parse(primary).map_err(|_| invalid())?;
    let secondary = NetworkAddress::parse(secondary).map_err(|_| invalid())?;
    DnsServerPair::new(primary, secondary, AdapterName::new(adapter)).map_err(|_| invalid())
}

fn report_failure(context: &str, err: &SwitchError) -> OpReport {
    match err {
        SwitchError::InvalidInput(message) => OpReport::failure(message),
        SwitchError::Timeout { .. } => OpReport::failure(TIMEOUT_MESSAGE),
        SwitchError::CommandFailure { detail, .. } => {
            OpReport::failure(format!("{context}: {detail}"))
        }
    }
}

/// `netsh interface ip set dns name=<adapter> static <primary>`
fn set_dns_args(pair: &DnsServerPair) -> Vec<String> {
    vec![
        "interface".to_string(),
        "ip".to_string(),
        "set".to_string(),
        "dns".to_string(),
        format!("name={}", pair.adapter),
        "static".to_string(),
        pair.primary.to_string(),
    ]
}

/// `netsh interface ip add dns name=<adapter> <secondary> index=2`
fn add_dns_args(pair: &DnsServerPair) -> Vec<String> {
    vec![
        "interface".to_string(),
        "ip".to_string(),
        "add".to_string(),
        "dns".to_string(),
        format!("name={}", pair.adapter),
        pair.secondary.to_string(),
        "index=2".to_string(),
    ]
}
