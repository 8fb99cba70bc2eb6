use std::sync::Arc;

use netswitch_core::dns::DnsService;
use netswitch_core::executor::SystemRunner;

use crate::commands::warn_if_not_elevated;
use crate::terminal::print;

pub async fn flush() -> anyhow::Result<()> {
    warn_if_not_elevated();
    print::status("Flushing DNS cache...");

    let service = DnsService::new(Arc::new(SystemRunner));
    let report = service.flush().await;
    print::report(&report);
    Ok(())
}
