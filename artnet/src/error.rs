#![warn(missing_docs)]
//! The errors used within the artnet crate.

use artnet_core::{
    address::{NameError, SwitchProgError},
    channel_assignment::ChannelAssignmentError,
    ip::IpAddressError,
    op_code::OpCodeError,
    packet::ParsePackError,
    port_address::NetError,
};

/// Error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO errors
    #[error("io error: {0:?}")]
    Io(#[from] std::io::Error),

    /// An inbound datagram could not be interpreted as the expected packet.
    /// The transport logs and drops these; this variant exists for callers that
    /// parse buffers themselves.
    #[error("parse error: {0:?}")]
    ParsePack(#[from] ParsePackError),

    /// A textual IP address was malformed. Surfaced synchronously so the caller can
    /// show "invalid format" instead of sending anything.
    #[error("ip address error: {0:?}")]
    IpAddress(#[from] IpAddressError),

    /// A channel assignment failed validation at configuration time.
    #[error("channel assignment error: {0:?}")]
    ChannelAssignment(#[from] ChannelAssignmentError),

    /// A node name does not fit its wire field.
    #[error("name error: {0:?}")]
    Name(#[from] NameError),

    /// A Net value was outside the 7 bit field.
    #[error("net error: {0:?}")]
    Net(#[from] NetError),

    /// A switch programming value was outside [0, 15].
    #[error("switch programming error: {0:?}")]
    SwitchProg(#[from] SwitchProgError),

    /// A raw op-code value named no known packet type.
    #[error("op-code error: {0:?}")]
    OpCode(#[from] OpCodeError),

    /// Failed to bind a socket, either for sending or for the inbound listener.
    /// Unlike individual send failures this is surfaced to the caller, because
    /// nothing can be transmitted or received until binding succeeds.
    #[error("failed to bind socket")]
    Bind(#[source] std::io::Error),
}
