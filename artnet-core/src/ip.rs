//! This module contains all things `IpAddress`.
//!
//! Art-Net masks addresses a byte at a time, so the type operates octet-wise rather
//! than on a packed u32.

use core::fmt::{self, Display};
use core::net::Ipv4Addr;
use core::ops::{BitAnd, BitOr, Not};
use core::str::FromStr;

/// An IPv4 address as four octets.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IpAddress([u8; 4]);

impl IpAddress {
    /// Creates a new address from four octets.
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self([a, b, c, d])
    }

    /// Returns the four octets of the address.
    pub const fn octets(&self) -> [u8; 4] {
        self.0
    }

    /// Computes the directed broadcast address for the subnet this address lives in:
    /// all host bits set to 1, all network bits unchanged.
    ///
    /// This is the address used to reach every Art-Net listener on the local subnet
    /// without falling back to the global 255.255.255.255 broadcast.
    pub fn directed_broadcast(self, netmask: Self) -> Self {
        self | !netmask
    }

    fn element_wise(self, other: Self, f: impl Fn(u8, u8) -> u8) -> Self {
        let a = self.0;
        let b = other.0;
        Self([f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3])])
    }
}

impl Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

impl From<[u8; 4]> for IpAddress {
    fn from(octets: [u8; 4]) -> Self {
        Self(octets)
    }
}

impl From<Ipv4Addr> for IpAddress {
    fn from(addr: Ipv4Addr) -> Self {
        Self(addr.octets())
    }
}

impl From<IpAddress> for Ipv4Addr {
    fn from(addr: IpAddress) -> Self {
        let [a, b, c, d] = addr.0;
        Ipv4Addr::new(a, b, c, d)
    }
}

impl FromStr for IpAddress {
    type Err = IpAddressError;

    /// Parses strict dot-decimal notation: exactly four octets, decimal digits only,
    /// each in [0, 255]. Anything else is an error the caller can surface as
    /// "invalid format".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; 4];
        let mut count = 0;

        for part in s.split('.') {
            if count == 4 {
                return Err(IpAddressError::WrongOctetCount(s.split('.').count()));
            }

            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(IpAddressError::InvalidOctet(part.to_string()));
            }

            octets[count] = part.parse().map_err(|_| IpAddressError::InvalidOctet(part.to_string()))?;
            count += 1;
        }

        if count != 4 {
            return Err(IpAddressError::WrongOctetCount(count));
        }

        Ok(Self(octets))
    }
}

impl BitAnd for IpAddress {
    type Output = IpAddress;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.element_wise(rhs, |a, b| a & b)
    }
}

impl BitOr for IpAddress {
    type Output = IpAddress;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.element_wise(rhs, |a, b| a | b)
    }
}

impl Not for IpAddress {
    type Output = IpAddress;

    /// Complements each octet as an 8-bit value.
    fn not(self) -> Self::Output {
        let [a, b, c, d] = self.0;
        Self([!a, !b, !c, !d])
    }
}

/// Error for creation of [IpAddress] from text.
#[derive(Debug, thiserror::Error)]
pub enum IpAddressError {
    /// The text did not contain exactly four dot-separated octets.
    ///
    /// # Arguments
    /// 0: The number of octets found
    #[error("Expected 4 dot-separated octets, got {0}")]
    WrongOctetCount(usize),

    /// An octet was empty, contained non-decimal characters or was outside [0, 255].
    ///
    /// # Arguments
    /// 0: The offending octet text
    #[error("Octet {0:?} is not a decimal value in [0, 255]")]
    InvalidOctet(String),
}
