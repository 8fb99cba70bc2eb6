//! Resolver presets and the validated primary/secondary pair.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::adapter::AdapterName;
use crate::address::NetworkAddress;
use crate::sanitize;

/// Closed set of resolver selections the tool offers. Anything outside this
/// set is rejected, never coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Cloudflare,
    Google,
    Quad9,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preset: {0}")]
pub struct PresetError(pub String);

impl Preset {
    /// Display labels, as offered on a selection surface.
    pub const LABELS: [&'static str; 4] = [
        "AU - Cloudflare (1.1.1.1, 1.0.0.1)",
        "Google (8.8.8.8, 8.8.4.4)",
        "Quad9 (9.9.9.9, 149.112.112.112)",
        "Custom...",
    ];

    /// Membership test over the closed display-label set.
    pub fn from_label(label: &str) -> Option<Preset> {
        match label {
            "AU - Cloudflare (1.1.1.1, 1.0.0.1)" => Some(Preset::Cloudflare),
            "Google (8.8.8.8, 8.8.4.4)" => Some(Preset::Google),
            "Quad9 (9.9.9.9, 149.112.112.112)" => Some(Preset::Quad9),
            "Custom..." => Some(Preset::Custom),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Preset::Cloudflare => Self::LABELS[0],
            Preset::Google => Self::LABELS[1],
            Preset::Quad9 => Self::LABELS[2],
            Preset::Custom => Self::LABELS[3],
        }
    }

    /// Fixed address pair for every preset except `Custom`.
    pub fn servers(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Preset::Cloudflare => Some(("1.1.1.1", "1.0.0.1")),
            Preset::Google => Some(("8.8.8.8", "8.8.4.4")),
            Preset::Quad9 => Some(("9.9.9.9", "149.112.112.112")),
            Preset::Custom => None,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Preset {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cloudflare" => Ok(Preset::Cloudflare),
            "google" => Ok(Preset::Google),
            "quad9" => Ok(Preset::Quad9),
            "custom" => Ok(Preset::Custom),
            other => Err(PresetError(sanitize::sanitize_for_display(other, 100))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairError {
    #[error("primary and secondary DNS must both be IPv4 or both IPv6")]
    MixedFamilies,
}

/// A validated primary/secondary resolver pair bound to the adapter it
/// applies to. Immutable once constructed; both addresses share one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsServerPair {
    pub primary: NetworkAddress,
    pub secondary: NetworkAddress,
    pub adapter: AdapterName,
}

impl DnsServerPair {
    pub fn new(
        primary: NetworkAddress,
        secondary: NetworkAddress,
        adapter: AdapterName,
    ) -> Result<Self, PairError> {
        if primary.family() != secondary.family() {
            return Err(PairError::MixedFamilies);
        }
        Ok(Self {
            primary,
            secondary,
            adapter: adapter.for_commands(),
        })
    }

    /// Builds the pair for a fixed preset; `Custom` has none.
    pub fn from_preset(preset: Preset, adapter: AdapterName) -> Option<Self> {
        let (primary, secondary) = preset.servers()?;
        let primary = NetworkAddress::parse(primary).ok()?;
        let secondary = NetworkAddress::parse(secondary).ok()?;
        Self::new(primary, secondary, adapter).ok()
    }
}
