//! Art-Net op-codes.

/// The operation code identifying an Art-Net packet type.
///
/// Op-codes are 16 bit values transmitted low byte first.
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OpCode {
    /// ArtPoll, the discovery request broadcast by a controller.
    Poll = 0x2000,
    /// ArtPollReply, sent by nodes in response to an ArtPoll.
    PollReply = 0x2100,
    /// ArtDiagData, diagnostics text from a node.
    DiagData = 0x2300,
    /// ArtDmx, one universe of DMX512 channel data.
    Dmx = 0x5000,
    /// ArtAddress, remote programming of a node's addressing.
    Address = 0x6000,
}

impl OpCode {
    /// The raw 16 bit value of the op-code.
    pub const fn value(self) -> u16 {
        self as u16
    }

    /// The op-code as it appears on the wire, low byte first.
    pub const fn wire_bytes(self) -> [u8; 2] {
        self.value().to_le_bytes()
    }
}

impl From<OpCode> for u16 {
    fn from(op_code: OpCode) -> Self {
        op_code.value()
    }
}

impl TryFrom<u16> for OpCode {
    type Error = OpCodeError;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        match raw {
            0x2000 => Ok(Self::Poll),
            0x2100 => Ok(Self::PollReply),
            0x2300 => Ok(Self::DiagData),
            0x5000 => Ok(Self::Dmx),
            0x6000 => Ok(Self::Address),
            other => Err(OpCodeError::Unknown(other)),
        }
    }
}

/// Error for conversion of a raw value into an [OpCode].
#[derive(Debug, thiserror::Error)]
pub enum OpCodeError {
    /// The value does not name an op-code handled by this library.
    ///
    /// # Arguments
    /// 0: The raw value
    #[error("Unknown op-code {0:#06x}")]
    Unknown(u16),
}
