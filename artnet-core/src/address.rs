//! Parameters for remotely programming a node's addressing via ArtAddress.

use core::fmt::{self, Display};
use core::str::FromStr;

use heapless::String;

use crate::port_address::Net;

/// The short node name carried in an ArtAddress packet (at most 17 characters, NUL
/// padded to 18 bytes on the wire).
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShortName {
    inner: String<{ Self::CAPACITY }>,
}

impl ShortName {
    /// The maximum length in bytes; one byte of the 18 byte wire field is reserved for
    /// the NUL terminator.
    pub const CAPACITY: usize = 17;

    /// Creates a new [ShortName].
    pub fn new<S: AsRef<str>>(s: S) -> Result<Self, NameError> {
        let value = s.as_ref();

        let inner = String::from_str(value).map_err(|()| NameError::TooLong {
            len: value.len(),
            max: Self::CAPACITY,
        })?;
        Ok(Self { inner })
    }

    /// Returns a [str] reference.
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Returns the bytes this name is made out of.
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }
}

impl Display for ShortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl FromStr for ShortName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// The long node name carried in an ArtAddress packet (at most 63 characters, NUL
/// padded to 64 bytes on the wire).
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct LongName {
    inner: String<{ Self::CAPACITY }>,
}

impl LongName {
    /// The maximum length in bytes; one byte of the 64 byte wire field is reserved for
    /// the NUL terminator.
    pub const CAPACITY: usize = 63;

    /// Creates a new [LongName].
    pub fn new<S: AsRef<str>>(s: S) -> Result<Self, NameError> {
        let value = s.as_ref();

        let inner = String::from_str(value).map_err(|()| NameError::TooLong {
            len: value.len(),
            max: Self::CAPACITY,
        })?;
        Ok(Self { inner })
    }

    /// Returns a [str] reference.
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Returns the bytes this name is made out of.
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }
}

impl Display for LongName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl FromStr for LongName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Error for creation of a node name.
#[derive(Debug, thiserror::Error)]
pub enum NameError {
    /// The given name does not fit the wire field.
    ///
    /// # Arguments
    /// len: Length of the given name.
    /// max: The maximum length for this field.
    #[error("Given name is too long. Maximum is {max} bytes but the name has {len}")]
    TooLong {
        /// Length of the rejected name.
        len: usize,
        /// Maximum length for this name field.
        max: usize,
    },
}

/// A programming value for one of a node's port switches (SwIn/SwOut).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum SwitchProg {
    /// Leave the switch unchanged.
    #[default]
    NoChange,
    /// Reset the switch to the physically configured value.
    ResetToPhysical,
    /// Program the switch to a value in [0, 15].
    Value(u8),
}

impl SwitchProg {
    /// Creates a programming value for the given switch setting.
    ///
    /// # Errors
    /// InvalidValue: Returned if the setting does not fit the 4 bit switch.
    pub const fn value(setting: u8) -> Result<Self, SwitchProgError> {
        if setting <= 0x0F {
            return Ok(Self::Value(setting));
        }

        Err(SwitchProgError::InvalidValue(setting))
    }

    /// The byte encoding used on the wire: 0x7F for no change, 0x00 for reset, and
    /// 0x80 | value for programming a value.
    pub const fn encode(self) -> u8 {
        match self {
            Self::NoChange => 0x7F,
            Self::ResetToPhysical => 0x00,
            Self::Value(setting) => 0x80 | setting,
        }
    }
}

/// Error for creation of [SwitchProg].
#[derive(Debug, thiserror::Error)]
pub enum SwitchProgError {
    /// Attempted to program a switch to a value outside [0, 15].
    ///
    /// # Arguments
    /// 0: The rejected setting
    #[error("Switch programming value must be in the range [0 - 15], got {0}")]
    InvalidValue(u8),
}

/// The action a node performs when it receives an ArtAddress packet.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum AddressCommand {
    /// No action.
    #[default]
    None = 0x00,
    /// Cancel a merge in progress.
    CancelMerge = 0x01,
    /// Front panel indicators operate normally.
    LedNormal = 0x02,
    /// Front panel indicators disabled.
    LedMute = 0x03,
    /// Front panel indicators flash to locate the node.
    LedLocate = 0x04,
    /// Reset the node's sACN/Art-Net receive flags.
    ResetRxFlags = 0x05,
    /// Set port 0 to LTP merge mode.
    MergeLtp0 = 0x10,
    /// Set port 1 to LTP merge mode.
    MergeLtp1 = 0x11,
    /// Set port 2 to LTP merge mode.
    MergeLtp2 = 0x12,
    /// Set port 3 to LTP merge mode.
    MergeLtp3 = 0x13,
    /// Set port 0 to HTP merge mode.
    MergeHtp0 = 0x50,
    /// Set port 1 to HTP merge mode.
    MergeHtp1 = 0x51,
    /// Set port 2 to HTP merge mode.
    MergeHtp2 = 0x52,
    /// Set port 3 to HTP merge mode.
    MergeHtp3 = 0x53,
    /// Output Art-Net on port 0.
    ArtNetSel0 = 0x60,
    /// Output Art-Net on port 1.
    ArtNetSel1 = 0x61,
    /// Output Art-Net on port 2.
    ArtNetSel2 = 0x62,
    /// Output Art-Net on port 3.
    ArtNetSel3 = 0x63,
    /// Output sACN on port 0.
    AcnSel0 = 0x70,
    /// Output sACN on port 1.
    AcnSel1 = 0x71,
    /// Output sACN on port 2.
    AcnSel2 = 0x72,
    /// Output sACN on port 3.
    AcnSel3 = 0x73,
    /// Clear the output buffer of port 0.
    ClearOp0 = 0x90,
    /// Clear the output buffer of port 1.
    ClearOp1 = 0x91,
    /// Clear the output buffer of port 2.
    ClearOp2 = 0x92,
    /// Clear the output buffer of port 3.
    ClearOp3 = 0x93,
}

impl AddressCommand {
    /// The raw command code used on the wire.
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// Everything needed to build one outbound ArtAddress packet.
///
/// Constructed transiently per send; nothing here outlives the call that packs and
/// transmits the packet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParameters {
    /// The Net switch to program.
    pub net: Net,
    /// The SubNet switch to program.
    pub sub_net: u8,
    /// Which bound device of the node is addressed (0 for the root device).
    pub bind_index: u8,
    /// New short name for the node.
    pub short_name: ShortName,
    /// New long name for the node.
    pub long_name: LongName,
    /// Programming values for the four input switches.
    pub sw_in: [SwitchProg; 4],
    /// Programming values for the four output switches.
    pub sw_out: [SwitchProg; 4],
    /// The action the node performs on receipt.
    pub command: AddressCommand,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_accepts_up_to_17_bytes() {
        assert!(ShortName::new("a".repeat(17)).is_ok());
        assert!(matches!(
            ShortName::new("a".repeat(18)),
            Err(NameError::TooLong { len: 18, max: 17 })
        ));
    }

    #[test]
    fn long_name_accepts_up_to_63_bytes() {
        assert!(LongName::new("b".repeat(63)).is_ok());
        assert!(matches!(
            LongName::new("b".repeat(64)),
            Err(NameError::TooLong { len: 64, max: 63 })
        ));
    }

    #[test]
    fn switch_prog_encoding() {
        assert_eq!(SwitchProg::NoChange.encode(), 0x7F);
        assert_eq!(SwitchProg::ResetToPhysical.encode(), 0x00);
        assert_eq!(SwitchProg::value(0).unwrap().encode(), 0x80);
        assert_eq!(SwitchProg::value(15).unwrap().encode(), 0x8F);
    }

    #[test]
    fn switch_prog_rejects_wide_values() {
        assert!(matches!(SwitchProg::value(16), Err(SwitchProgError::InvalidValue(16))));
    }

    #[test]
    fn command_codes_match_wire_values() {
        assert_eq!(AddressCommand::None.value(), 0x00);
        assert_eq!(AddressCommand::CancelMerge.value(), 0x01);
        assert_eq!(AddressCommand::LedLocate.value(), 0x04);
        assert_eq!(AddressCommand::MergeLtp3.value(), 0x13);
        assert_eq!(AddressCommand::MergeHtp0.value(), 0x50);
        assert_eq!(AddressCommand::ArtNetSel2.value(), 0x62);
        assert_eq!(AddressCommand::AcnSel1.value(), 0x71);
        assert_eq!(AddressCommand::ClearOp3.value(), 0x93);
    }
}
