//! Local interface address lookup.
//!
//! The interface to inspect is picked from the host OS, the address itself
//! comes from an [`InterfaceSource`]. The default source asks the OS directly
//! and only falls back to parsing `ifconfig` output when that fails.

pub mod ifconfig;
pub mod native;

use tracing::{debug, warn};

use ipbeacon_common::address::{AddressResult, FailureCode, validate};
use ipbeacon_common::error::ResolveError;

pub use ifconfig::IfconfigCommand;
pub use native::NativeInterfaces;

const BSD_FAMILY: &[&str] = &["macos", "ios", "freebsd", "netbsd", "openbsd", "dragonfly"];

/// Anything that can report the IPv4 address text of a named interface.
pub trait InterfaceSource: Send + Sync {
    /// `Ok(None)` means the interface was inspected but carried no IPv4 address.
    fn inet_address(&self, interface: &str) -> Result<Option<String>, ResolveError>;
}

/// Picks the interface name for an OS as reported by `std::env::consts::OS`.
pub fn interface_for_os(os: &str) -> Result<&'static str, ResolveError> {
    match os {
        "windows" => Err(ResolveError::UnsupportedPlatform(os.to_string())),
        os if BSD_FAMILY.contains(&os) => Ok("en0"),
        _ => Ok("eth0"),
    }
}

/// Tries `primary` first and consults `fallback` only if it errors.
pub struct FallbackSource {
    primary: Box<dyn InterfaceSource>,
    fallback: Box<dyn InterfaceSource>,
}

impl FallbackSource {
    pub fn new(primary: Box<dyn InterfaceSource>, fallback: Box<dyn InterfaceSource>) -> Self {
        Self { primary, fallback }
    }
}

impl Default for FallbackSource {
    fn default() -> Self {
        Self::new(Box::new(NativeInterfaces), Box::new(IfconfigCommand::default()))
    }
}

impl InterfaceSource for FallbackSource {
    fn inet_address(&self, interface: &str) -> Result<Option<String>, ResolveError> {
        match self.primary.inet_address(interface) {
            Ok(found) => Ok(found),
            Err(e) => {
                debug!("Primary interface source failed ({e}), falling back");
                self.fallback.inet_address(interface)
            }
        }
    }
}

pub struct LocalResolver {
    source: Box<dyn InterfaceSource>,
    os: String,
    interface: Option<String>,
}

impl LocalResolver {
    pub fn new(source: Box<dyn InterfaceSource>, os: impl Into<String>) -> Self {
        Self {
            source,
            os: os.into(),
            interface: None,
        }
    }

    /// Resolver for the OS this binary was built for.
    pub fn for_host(source: Box<dyn InterfaceSource>) -> Self {
        Self::new(source, std::env::consts::OS)
    }

    pub fn with_interface(mut self, interface: Option<String>) -> Self {
        self.interface = interface;
        self
    }

    pub fn interface(&self) -> Result<String, ResolveError> {
        match &self.interface {
            Some(name) => Ok(name.clone()),
            None => interface_for_os(&self.os).map(str::to_string),
        }
    }

    /// A single-element sequence: the address, `-9` if none could be read, `-1` on failure.
    pub fn resolve(&self) -> Vec<AddressResult> {
        let result = self.interface().and_then(|name| {
            debug!("Reading IPv4 address of {name}");
            self.source.inet_address(&name)
        });

        let entry = match result {
            Ok(Some(candidate)) => validate(&candidate),
            Ok(None) => AddressResult::Failure(FailureCode::InvalidAddress),
            Err(e) => {
                warn!("Local address lookup failed: {e}");
                AddressResult::Failure(e.code())
            }
        };

        vec![entry]
    }
}
