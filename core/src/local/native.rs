use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;

use ipbeacon_common::error::ResolveError;

use super::InterfaceSource;

/// Reads interface addresses straight from the OS via `pnet`.
pub struct NativeInterfaces;

impl InterfaceSource for NativeInterfaces {
    fn inet_address(&self, interface: &str) -> Result<Option<String>, ResolveError> {
        first_ipv4_on(&datalink::interfaces(), interface)
    }
}

pub fn first_ipv4_on(
    interfaces: &[NetworkInterface],
    name: &str,
) -> Result<Option<String>, ResolveError> {
    let interface = interfaces
        .iter()
        .find(|i| i.name == name)
        .ok_or_else(|| ResolveError::InterfaceNotFound(name.to_string()))?;

    Ok(interface.ips.iter().find_map(|net| match net {
        IpNetwork::V4(v4) => Some(v4.ip().to_string()),
        IpNetwork::V6(_) => None,
    }))
}
