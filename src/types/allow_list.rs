//! Status endpoint allow-list parsing.
//!
//! The allow-list is a comma-separated string of IP addresses and CIDR
//! blocks, e.g. `"127.0.0.1, 10.0.1.0/24, ::1"`. Parsing keeps the
//! operator's own text for each entry (trimmed, never re-formatted), keeps
//! input order and duplicates, and stops at the first bad entry.

use crate::error::{AllowListError, ConfigError, ConfigResult, EMPTY_CIDR_REASON};
use ipnetwork::IpNetwork;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// Check that `candidate` is a bare IP address or a CIDR block.
///
/// Without a `/` the candidate must be an IPv4 or IPv6 address. With one it
/// must be a CIDR block whose prefix fits the address family.
pub fn validate_cidr_or_ip(candidate: &str) -> ConfigResult<()> {
    AllowEntry::parse(candidate).map(|_| ())
}

/// Split, trim and validate a comma-separated allow-list.
///
/// Returns the accepted entries in input order. On the first bad entry the
/// returned error carries the entries accepted before it.
pub fn parse_status_allow_cidrs(input: &str) -> Result<Vec<String>, AllowListError> {
    parse_entries(input).map(|entries| entries.into_iter().map(|(text, _)| text).collect())
}

/// Validate every entry of an allow-list, reporting all failures.
///
/// Uses the same tokenization as [`parse_status_allow_cidrs`] but does not
/// stop at the first bad entry. An empty result means the list is valid.
pub fn validate_all_allow_cidrs(input: &str) -> Vec<TokenError> {
    tokens(input)
        .into_iter()
        .filter_map(|(index, token)| {
            AllowEntry::parse(token).err().map(|error| TokenError {
                index,
                token: token.to_string(),
                error,
            })
        })
        .collect()
}

/// One rejected entry from [`validate_all_allow_cidrs`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("entry {index} ({token:?}): {error}")]
pub struct TokenError {
    /// Zero-based position of the comma-separated segment.
    pub index: usize,
    /// The trimmed segment text.
    pub token: String,
    pub error: ConfigError,
}

/// Candidate tokens with their segment index.
///
/// Whitespace-only segments are dropped, as are zero-length segments
/// before the first or after the last non-blank segment. A zero-length
/// segment with non-blank content on both sides is kept so that validation
/// rejects it.
fn tokens(input: &str) -> Vec<(usize, &str)> {
    let segments: Vec<&str> = input.split(',').collect();
    let non_blank = |raw: &&str| !raw.trim().is_empty();
    let (first, last) = match (
        segments.iter().position(non_blank),
        segments.iter().rposition(non_blank),
    ) {
        (Some(first), Some(last)) => (first, last),
        _ => return Vec::new(),
    };

    segments
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let token = raw.trim();
            let interior_gap = raw.is_empty() && index > first && index < last;
            if !token.is_empty() || interior_gap {
                Some((index, token))
            } else {
                None
            }
        })
        .collect()
}

fn parse_entries(input: &str) -> Result<Vec<(String, AllowEntry)>, AllowListError> {
    let mut accepted: Vec<(String, AllowEntry)> = Vec::new();

    for (_, token) in tokens(input) {
        match AllowEntry::parse(token) {
            Ok(entry) => accepted.push((token.to_string(), entry)),
            Err(error) => {
                let partial = accepted.into_iter().map(|(text, _)| text).collect();
                return Err(AllowListError::new(partial, error));
            }
        }
    }

    Ok(accepted)
}

/// A single allow-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowEntry {
    /// A bare IP address.
    Ip(IpAddr),
    /// A CIDR block.
    Cidr(IpNetwork),
}

impl AllowEntry {
    /// Parse one entry. The candidate is expected to be trimmed already.
    pub fn parse(candidate: &str) -> ConfigResult<Self> {
        if candidate.is_empty() {
            return Err(ConfigError::InvalidCidr(EMPTY_CIDR_REASON.to_string()));
        }

        if candidate.contains('/') {
            candidate
                .parse::<IpNetwork>()
                .map(Self::Cidr)
                .map_err(|e| ConfigError::InvalidCidr(e.to_string()))
        } else {
            candidate
                .parse::<IpAddr>()
                .map(Self::Ip)
                .map_err(|_| ConfigError::InvalidIp(candidate.to_string()))
        }
    }

    /// Check if this entry is IPv4.
    pub fn is_ipv4(&self) -> bool {
        match self {
            Self::Ip(ip) => ip.is_ipv4(),
            Self::Cidr(network) => network.is_ipv4(),
        }
    }

    /// Check if this entry is IPv6.
    pub fn is_ipv6(&self) -> bool {
        !self.is_ipv4()
    }

    /// Prefix length; a bare address counts as a full-length prefix.
    pub fn prefix(&self) -> u8 {
        match self {
            Self::Ip(IpAddr::V4(_)) => 32,
            Self::Ip(IpAddr::V6(_)) => 128,
            Self::Cidr(network) => network.prefix(),
        }
    }
}

impl FromStr for AllowEntry {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AllowEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ip(ip) => write!(f, "{}", ip),
            Self::Cidr(network) => write!(f, "{}", network),
        }
    }
}

/// A validated allow-list.
///
/// Keeps both the operator's text for each entry and its parsed form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    raw: Vec<String>,
    entries: Vec<AllowEntry>,
}

impl AllowList {
    /// Parse a comma-separated allow-list.
    pub fn parse(input: &str) -> Result<Self, AllowListError> {
        let (raw, entries) = parse_entries(input)?.into_iter().unzip();
        Ok(Self { raw, entries })
    }

    /// Accepted entries as written by the operator.
    pub fn as_strings(&self) -> &[String] {
        &self.raw
    }

    /// Parsed entries, in input order.
    pub fn entries(&self) -> &[AllowEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for AllowList {
    type Err = AllowListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw.join(","))
    }
}
