//! Validated resolver addresses.
//!
//! [`NetworkAddress`] is the only way an address string enters the system:
//! everything downstream (argument builders, probes) takes the type, never
//! raw text.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::sanitize;

/// Longest textual IPv4 address: `255.255.255.255`.
const MAX_IPV4_LEN: usize = 15;
/// Longest textual IPv6 address the simplified grammar accepts.
const MAX_IPV6_LEN: usize = 45;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

/// A resolver address that passed IPv4 or IPv6 validation, tagged with its
/// family. Constructed only through [`NetworkAddress::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkAddress {
    text: String,
    family: AddressFamily,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid IPv4 or IPv6 address: {0}")]
pub struct AddressError(pub String);

impl NetworkAddress {
    /// Sanitizes and validates `input`. Rejection is a value, not a panic.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        let text = sanitize::sanitize_text(input, MAX_IPV6_LEN);
        if is_valid_ipv4(&text) {
            return Ok(Self {
                text,
                family: AddressFamily::V4,
            });
        }
        if is_valid_ipv6(&text) {
            return Ok(Self {
                text,
                family: AddressFamily::V6,
            });
        }
        Err(AddressError(sanitize::sanitize_for_display(input, 45)))
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for NetworkAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Four dot-separated decimal octets, each 0-255, no leading zeros.
pub fn is_valid_ipv4(text: &str) -> bool {
    if text.is_empty() || text.len() > MAX_IPV4_LEN {
        return false;
    }
    let octets: Vec<&str> = text.split('.').collect();
    if octets.len() != 4 {
        return false;
    }
    octets.iter().all(|octet| is_valid_octet(octet))
}

fn is_valid_octet(octet: &str) -> bool {
    if octet.is_empty() || octet.len() > 3 {
        return false;
    }
    if !octet.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    // "0" is fine, "01" is not.
    if octet.len() > 1 && octet.starts_with('0') {
        return false;
    }
    octet.parse::<u16>().map(|n| n <= 255).unwrap_or(false)
}

/// Simplified canonical colon-hex grouping: 1-7 colons separating groups of
/// up to 4 hex digits, empty groups allowed (covers `::` and `::1`).
pub fn is_valid_ipv6(text: &str) -> bool {
    if text.is_empty() || text.len() > MAX_IPV6_LEN {
        return false;
    }
    let groups: Vec<&str> = text.split(':').collect();
    if groups.len() < 2 || groups.len() > 8 {
        return false;
    }
    groups
        .iter()
        .all(|group| group.len() <= 4 && group.chars().all(|c| c.is_ascii_hexdigit()))
}
