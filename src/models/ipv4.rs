//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] value type used throughout the planner, plus the
//! mask arithmetic behind network/broadcast addresses, address counts and
//! subnet stepping.

use crate::error::SubnetError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_planner::models::cidr_mask;
/// assert_eq!(cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn cidr_mask(len: u8) -> Result<u32, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::PrefixRange { len: len.into() })
    } else {
        // Shift in u64 so len = 0 does not shift a u32 by 32.
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;
        Ok(((all_bits >> right_len) << right_len) as u32)
    }
}

/// Zero the host bits of `addr` under the given prefix length.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Set all host bits of `addr` under the given prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Returns the first address after the block containing `addr`.
pub fn ip_after_subnet(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    if len > MAX_LENGTH {
        return Err(SubnetError::PrefixRange { len: len.into() });
    }
    if len == 0 {
        // A /0 block is the whole space, nothing follows it.
        return Err(SubnetError::AddressOverflow);
    }
    let block_size = 1u32 << (MAX_LENGTH - len);
    let network_bits = u32::from(addr) & cidr_mask(len)?;
    let next = network_bits
        .checked_add(block_size)
        .ok_or(SubnetError::AddressOverflow)?;
    Ok(Ipv4Addr::from(next))
}

/// An IPv4 network in CIDR notation.
///
/// `addr` need not be the network address; [`Ipv4::normalized`] zeroes the
/// host bits. Constructors keep `mask` within `0..=32`, so the derived
/// accessors below never fail.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Parse a CIDR string such as `"192.168.1.0/24"`.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, SubnetError> {
        let addr_cidr = addr_cidr.trim();
        let (addr_part, mask_part) =
            addr_cidr
                .split_once('/')
                .ok_or_else(|| SubnetError::AddressFormat {
                    text: addr_cidr.to_string(),
                })?;
        let mask: u16 = mask_part
            .trim()
            .parse()
            .map_err(|_| SubnetError::AddressFormat {
                text: addr_cidr.to_string(),
            })?;
        if mask > MAX_LENGTH as u16 {
            return Err(SubnetError::PrefixRange { len: mask });
        }
        Ipv4::from_parts(addr_part, mask as u8)
    }

    /// Build from a dotted-decimal address and a prefix length.
    pub fn from_parts(addr_text: &str, mask: u8) -> Result<Ipv4, SubnetError> {
        let addr = Ipv4Addr::from_str(addr_text.trim()).map_err(|_| SubnetError::AddressFormat {
            text: addr_text.trim().to_string(),
        })?;
        if mask > MAX_LENGTH {
            return Err(SubnetError::PrefixRange { len: mask.into() });
        }
        Ok(Ipv4 { addr, mask })
    }

    fn mask_bits(&self) -> u32 {
        let right_len = MAX_LENGTH - self.mask;
        ((u32::MAX as u64 >> right_len) << right_len) as u32
    }

    /// The address with all host bits zeroed.
    pub fn network_address(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask_bits())
    }

    /// The address with all host bits set.
    pub fn broadcast_address(&self) -> Ipv4Addr {
        let network_bits = u32::from(self.addr) & self.mask_bits();
        Ipv4Addr::from(network_bits | !self.mask_bits())
    }

    /// Same prefix, host bits zeroed.
    pub fn normalized(&self) -> Ipv4 {
        Ipv4 {
            addr: self.network_address(),
            mask: self.mask,
        }
    }

    /// Total number of addresses in the block: 2^(32 - mask).
    pub fn address_count(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// Usable host addresses: total minus network and broadcast, clamped
    /// to 0. A /31 or /32 block has no usable hosts under this rule.
    pub fn host_count(&self) -> u64 {
        self.address_count().saturating_sub(2)
    }

    /// First and last usable host address, or `None` when there are none.
    pub fn host_range(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        if self.host_count() == 0 {
            return None;
        }
        let first = Ipv4Addr::from(u32::from(self.network_address()) + 1);
        let last = Ipv4Addr::from(u32::from(self.broadcast_address()) - 1);
        Some((first, last))
    }

    /// Check if an address falls within this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.network_address() && ip <= self.broadcast_address()
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR `{s}`: {e}")))
    }
}
