use std::sync::Arc;

use anyhow::bail;
use netswitch_common::adapter::AdapterName;
use netswitch_common::address::NetworkAddress;
use netswitch_common::preset::{DnsServerPair, Preset};
use netswitch_core::dns::{DnsService, INVALID_PAIR_MESSAGE};
use netswitch_core::executor::SystemRunner;

use crate::commands::warn_if_not_elevated;
use crate::terminal::print;

pub async fn apply(
    preset: Preset,
    primary: Option<NetworkAddress>,
    secondary: Option<NetworkAddress>,
    adapter: AdapterName,
) -> anyhow::Result<()> {
    let pair = build_pair(preset, primary, secondary, adapter)?;

    warn_if_not_elevated();
    print::status(format!(
        "Applying {} on {}...",
        preset.label(),
        pair.adapter
    ));

    let service = DnsService::new(Arc::new(SystemRunner));
    let report = service.apply(&pair).await;
    print::report(&report);
    Ok(())
}

fn build_pair(
    preset: Preset,
    primary: Option<NetworkAddress>,
    secondary: Option<NetworkAddress>,
    adapter: AdapterName,
) -> anyhow::Result<DnsServerPair> {
    if preset != Preset::Custom {
        let Some(pair) = DnsServerPair::from_preset(preset, adapter) else {
            bail!("preset {} carries no fixed servers", preset.label());
        };
        return Ok(pair);
    }

    let (Some(primary), Some(secondary)) = (primary, secondary) else {
        bail!("the custom preset needs --primary and --secondary");
    };
    match DnsServerPair::new(primary, secondary, adapter) {
        Ok(pair) => Ok(pair),
        Err(_) => bail!("{INVALID_PAIR_MESSAGE}"),
    }
}
