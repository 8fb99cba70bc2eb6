//! Adapter names safe to place into a `netsh` argument.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Substituted whenever an adapter name is empty, too long or unusable.
pub const DEFAULT_ADAPTER: &str = "Wi-Fi";

/// Synthetic list entry that stands for the default adapter.
pub const ALL_ADAPTERS: &str = "All Network Adapters";

const MAX_NAME_LEN: usize = 100;

/// An adapter name restricted to alphanumerics, spaces, hyphens, underscores
/// and parentheses. The constructor sanitizes; an unusable input degrades to
/// [`DEFAULT_ADAPTER`] rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdapterName(String);

impl AdapterName {
    pub fn new(raw: &str) -> Self {
        let kept: String = raw.chars().filter(|c| is_allowed(*c)).collect();
        let kept = kept.trim();
        if kept.is_empty() || kept.chars().count() > MAX_NAME_LEN {
            return Self(DEFAULT_ADAPTER.to_string());
        }
        Self(kept.to_string())
    }

    pub fn all() -> Self {
        Self(ALL_ADAPTERS.to_string())
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL_ADAPTERS
    }

    /// The name a command should target: the synthetic "all adapters" entry
    /// resolves to the default adapter.
    pub fn for_commands(&self) -> AdapterName {
        if self.is_all() {
            AdapterName::new(DEFAULT_ADAPTER)
        } else {
            self.clone()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '(' | ')')
}

impl Default for AdapterName {
    fn default() -> Self {
        Self(DEFAULT_ADAPTER.to_string())
    }
}

impl fmt::Display for AdapterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AdapterName {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
