use netswitch_core::adapters;
use netswitch_core::executor::SystemRunner;

use crate::terminal::print;

pub async fn adapters() -> anyhow::Result<()> {
    let runner = SystemRunner;
    let found = adapters::list_adapters(&runner).await;

    for (idx, adapter) in found.iter().enumerate() {
        print::tree_line(idx, adapter.as_str(), idx + 1 == found.len());
    }
    Ok(())
}
