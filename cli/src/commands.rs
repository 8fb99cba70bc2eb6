pub mod adapters;
pub mod apply;
pub mod fastest;
pub mod flush;

use clap::{Parser, Subcommand};
use netswitch_common::adapter::AdapterName;
use netswitch_common::address::NetworkAddress;
use netswitch_common::preset::Preset;
use tracing::warn;

#[derive(Parser)]
#[command(name = "netswitch")]
#[command(about = "A resolver switcher for Windows network adapters.")]
pub struct CommandLine {
    /// Only print results, no banner or headers
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List configurable network adapters
    #[command(alias = "a")]
    Adapters,
    /// Apply a resolver pair to an adapter
    #[command(alias = "d")]
    Apply {
        /// Preset to apply: cloudflare, google, quad9 or custom
        preset: Preset,
        /// Primary address, required with the custom preset
        #[arg(long)]
        primary: Option<NetworkAddress>,
        /// Secondary address, required with the custom preset
        #[arg(long)]
        secondary: Option<NetworkAddress>,
        /// Target adapter
        #[arg(long, default_value = "Wi-Fi")]
        adapter: AdapterName,
    },
    /// Flush the resolver cache
    #[command(alias = "f")]
    Flush,
    /// Probe the trusted resolver pool and report the fastest
    #[command(alias = "p")]
    Fastest,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// `netsh` and `ipconfig` refuse adapter mutations from an unelevated
/// shell; say so up front instead of letting the command fail cryptically.
pub fn warn_if_not_elevated() {
    if !is_root::is_root() {
        warn!("not running elevated, the system may refuse resolver changes");
    }
}
