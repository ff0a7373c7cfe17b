//! Art-Net two-level universe addressing.
//!
//! A universe is addressed by a Net (7 bit) and a SubNet field. The SubNet byte in
//! ArtDmx carries the full sub-net/universe switch value and uses the whole field
//! width, so it stays a plain `u8`; Net is range checked here.

/// The Net part of a port address.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Net(u8);

impl core::fmt::Display for Net {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Net {
    type Error = NetError;

    fn try_from(raw_net: u8) -> Result<Self, Self::Error> {
        Self::new(raw_net)
    }
}

impl From<Net> for u8 {
    fn from(net: Net) -> Self {
        net.0
    }
}

impl Net {
    /// The lowest valid Net value.
    pub const MIN_RAW: u8 = 0;
    /// See [Self::MIN_RAW]
    pub const MIN: Self = Self(Self::MIN_RAW);

    /// The highest valid Net value; the field is 7 bits wide on the wire.
    pub const MAX_RAW: u8 = 127;
    /// See [Self::MAX_RAW]
    pub const MAX: Self = Self(Self::MAX_RAW);

    /// Checks if the given value fits the 7 bit Net field.
    ///
    /// # Errors
    /// InvalidValue: Returned if the value is outside the allowed range.
    pub const fn in_range(raw_net: u8) -> Result<(), NetError> {
        if raw_net <= Self::MAX_RAW {
            return Ok(());
        }

        Err(NetError::InvalidValue(raw_net))
    }

    /// Creates a new `Net`.
    pub const fn new(raw_net: u8) -> Result<Self, NetError> {
        match Self::in_range(raw_net) {
            Ok(()) => Ok(Self(raw_net)),
            Err(_) => Err(NetError::InvalidValue(raw_net)),
        }
    }

    /// Get the underlying value.
    pub const fn get(&self) -> u8 {
        self.0
    }
}

/// Error for creation of [Net].
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    /// Attempted to use an invalid value for Net. Allowed values are in the range
    /// [[`Net::MIN_RAW`] - [`Net::MAX_RAW`]] inclusive.
    ///
    /// # Arguments
    /// 0: Value of invalid Net
    #[error("Invalid net used. Must be in the range [{} - {}], net: {}", Net::MIN_RAW, Net::MAX_RAW, .0)]
    InvalidValue(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_bounds() {
        assert_eq!(Net::new(0).unwrap(), Net::MIN);
        assert_eq!(Net::new(127).unwrap(), Net::MAX);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(Net::new(128), Err(NetError::InvalidValue(128))));
        assert!(matches!(Net::try_from(255), Err(NetError::InvalidValue(255))));
    }
}
