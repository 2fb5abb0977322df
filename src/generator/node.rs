//! Node identifiers for time-based UUIDs.

use std::{fmt, fs, path::Path, str};

use log::{debug, trace};

use super::RandSource;
use crate::Error;

/// A 48-bit node identifier, normally an IEEE 802 MAC address.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct NodeId([u8; 6]);

impl NodeId {
    /// Creates an identifier from six bytes.
    pub const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Returns the identifier as an integer.
    pub const fn as_u64(&self) -> u64 {
        let b = self.0;
        u64::from_be_bytes([0, 0, b[0], b[1], b[2], b[3], b[4], b[5]])
    }

    /// Creates an identifier from an integer, failing if it exceeds 48 bits.
    pub fn from_u64(value: u64) -> Result<Self, Error> {
        if value >> 48 != 0 {
            return Err(Error::InvalidFields("node does not fit in 48 bits"));
        }
        let b = value.to_be_bytes();
        Ok(Self([b[2], b[3], b[4], b[5], b[6], b[7]]))
    }

    /// Generates a random identifier with the multicast bit set, so it cannot collide with a
    /// real hardware address.
    pub fn random<R: RandSource + ?Sized>(rng: &mut R) -> Result<Self, Error> {
        let mut bytes = [0u8; 6];
        rng.try_fill(&mut bytes)?;
        bytes[0] |= 0x01;
        Ok(Self(bytes))
    }

    /// Returns true if the multicast bit is set.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }
}

impl From<[u8; 6]> for NodeId {
    fn from(src: [u8; 6]) -> Self {
        Self(src)
    }
}

impl From<NodeId> for [u8; 6] {
    fn from(src: NodeId) -> Self {
        src.0
    }
}

impl fmt::Display for NodeId {
    /// Returns the colon-separated hexadecimal form, e.g. `00:c0:4f:d4:30:c8`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

impl str::FromStr for NodeId {
    type Err = Error;

    /// Parses six hexadecimal octets separated by `:` or `-`.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let err = || Error::InvalidFormat(src.to_owned());
        let mut dst = [0u8; 6];
        let mut parts = src.split(|c: char| c == ':' || c == '-');
        for e in dst.iter_mut() {
            let part = parts
                .next()
                .filter(|p| p.len() == 2 && p.bytes().all(|c| c.is_ascii_hexdigit()))
                .ok_or_else(err)?;
            *e = u8::from_str_radix(part, 16).map_err(|_| err())?;
        }
        match parts.next() {
            None => Ok(Self(dst)),
            Some(_) => Err(err()),
        }
    }
}

/// Supplies the node identifier a time-based generator embeds in its UUIDs.
///
/// Returning `None` makes the generator fall back to a random multicast identifier.
pub trait NodeSource {
    /// Returns the node identifier, if one is available.
    fn node(&self) -> Option<NodeId>;
}

impl NodeSource for NodeId {
    fn node(&self) -> Option<NodeId> {
        Some(*self)
    }
}

impl NodeSource for Option<NodeId> {
    fn node(&self) -> Option<NodeId> {
        *self
    }
}

/// A node source that never supplies an identifier, so generators pick a random one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct RandomNode;

impl NodeSource for RandomNode {
    fn node(&self) -> Option<NodeId> {
        None
    }
}

/// The hardware address of a network interface of this host.
///
/// Detection runs once in [`SystemNode::detect`]; the result is then read-only and can be shared
/// between generators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SystemNode {
    node: Option<NodeId>,
}

impl SystemNode {
    /// Reads the interfaces listed under `/sys/class/net`. Yields no node on systems without
    /// that directory.
    pub fn detect() -> Self {
        Self::detect_in(Path::new("/sys/class/net"))
    }

    /// Reads the interfaces listed under `root`, one directory per interface with an `address`
    /// file inside.
    pub fn detect_in(root: &Path) -> Self {
        let mut interfaces = Vec::new();
        if let Ok(entries) = fs::read_dir(root) {
            for entry in entries.flatten() {
                let Ok(name) = entry.file_name().into_string() else {
                    continue;
                };
                if let Ok(address) = fs::read_to_string(entry.path().join("address")) {
                    interfaces.push((name, address.trim().to_owned()));
                }
            }
        }
        interfaces.sort();
        Self::from_interfaces(interfaces.iter().map(|(n, a)| (n.as_str(), a.as_str())))
    }

    /// Picks the first usable address from `(interface name, address)` pairs, skipping the
    /// loopback interface and all-zero or unparsable addresses.
    pub fn from_interfaces<'a>(interfaces: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        for (name, address) in interfaces {
            if name == "lo" {
                continue;
            }
            match address.parse::<NodeId>() {
                Ok(node) if node != NodeId::default() => {
                    debug!("using hardware address {} of interface {}", node, name);
                    return Self { node: Some(node) };
                }
                _ => trace!("skipping interface {} with address {:?}", name, address),
            }
        }
        Self { node: None }
    }
}

impl NodeSource for SystemNode {
    fn node(&self) -> Option<NodeId> {
        self.node
    }
}
