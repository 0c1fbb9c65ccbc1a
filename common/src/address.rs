use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::{Serialize, Serializer};

/// Out-of-band values that stand in for an address when a lookup fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureCode {
    /// Unspecified failure while resolving.
    General,
    /// The remote endpoint answered with something other than 200.
    BadStatus,
    /// The remote endpoint could not be reached at all.
    Transport,
    /// The candidate text is not an IP address.
    InvalidAddress,
}

impl FailureCode {
    pub fn code(self) -> i32 {
        match self {
            FailureCode::General => -1,
            FailureCode::BadStatus => -2,
            FailureCode::Transport => -3,
            FailureCode::InvalidAddress => -9,
        }
    }
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validated address or the sentinel explaining why there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressResult {
    Valid(IpAddr),
    Failure(FailureCode),
}

impl AddressResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, AddressResult::Valid(_))
    }
}

impl fmt::Display for AddressResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressResult::Valid(ip) => write!(f, "{ip}"),
            AddressResult::Failure(code) => write!(f, "{code}"),
        }
    }
}

// Addresses serialize as strings, sentinels as bare integers.
impl Serialize for AddressResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AddressResult::Valid(ip) => serializer.collect_str(ip),
            AddressResult::Failure(code) => serializer.serialize_i32(code.code()),
        }
    }
}

/// Normalizes a candidate address, or returns the invalid-address sentinel.
///
/// IPv4 needs exactly four octets; short forms such as `1.2.3` are not
/// padded. Octets may carry leading zeros (`010.001.000.001` becomes
/// `10.1.0.1`). IPv6 comes back in its compressed form. Surrounding
/// whitespace is ignored.
pub fn validate(candidate: &str) -> AddressResult {
    let candidate = candidate.trim();

    if let Some(v4) = parse_dotted_quad(candidate) {
        return AddressResult::Valid(IpAddr::V4(v4));
    }

    match candidate.parse::<Ipv6Addr>() {
        Ok(v6) => AddressResult::Valid(IpAddr::V6(v6)),
        Err(_) => AddressResult::Failure(FailureCode::InvalidAddress),
    }
}

fn parse_dotted_quad(text: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut parts = text.split('.');

    for octet in octets.iter_mut() {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let digits = part.trim_start_matches('0');
        *octet = if digits.is_empty() { 0 } else { digits.parse().ok()? };
    }

    if parts.next().is_some() {
        return None;
    }

    Some(Ipv4Addr::from(octets))
}

/// Stringifies a sequence of results, e.g. `8.8.8.8,1.2.3.4` or `-3`.
pub fn join_results(results: &[AddressResult], sep: &str) -> String {
    results
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}
