//! Protocol constants and field layout as defined by the Art-Net 4 specification (Artistic Licence).

/// The UDP port used for all Art-Net traffic, both sending and listening.
pub const ARTNET_PORT: u16 = 6454;

/// The packet identifier that prefixes every Art-Net packet: the ASCII bytes "Art-Net" followed by one NUL.
pub const ARTNET_PACKET_IDENTIFIER: [u8; 8] = *b"Art-Net\0";

/// High byte of the protocol version field carried in Poll/Dmx/Address packets.
pub const ARTNET_PROTOCOL_VERSION_HI: u8 = 0;

/// Low byte of the protocol version field. Art-Net 4 keeps reporting revision 14.
pub const ARTNET_PROTOCOL_VERSION_LO: u8 = 14;

/// TalkToMe flags sent in an ArtPoll: send ArtPollReply on node change, send diagnostics, unicast diagnostics.
pub const POLL_TALK_TO_ME: u8 = 0x17;

/// Diagnostics priority requested in an ArtPoll (DpLow).
pub const POLL_DIAG_PRIORITY: u8 = 0x10;

/// The number of channels in one DMX512 universe. Every ArtDmx packet built by this
/// library carries a full universe of data.
pub const DMX_CHANNEL_COUNT: usize = 512;

/// Length of the fixed ArtDmx header up to and including the data length field.
pub const ARTDMX_HEADER_LENGTH: usize = 18;

/// Length in bytes of the short name field in an ArtAddress packet (17 characters + NUL).
pub const SHORT_NAME_FIELD_LENGTH: usize = 18;

/// Length in bytes of the long name field in an ArtAddress packet (63 characters + NUL).
pub const LONG_NAME_FIELD_LENGTH: usize = 64;

/// The minimum number of bytes an inbound datagram must have to be considered an
/// ArtPollReply. Shorter datagrams are dropped without further inspection.
pub const POLL_REPLY_MIN_LENGTH: usize = 214;

/// Byte range of the source IP address in an ArtPollReply.
pub const REPLY_IP_RANGE: core::ops::Range<usize> = 10..14;

/// Byte range of the firmware version (hi, lo) in an ArtPollReply.
pub const REPLY_FIRMWARE_RANGE: core::ops::Range<usize> = 16..18;

/// Offset of the NetSwitch byte in an ArtPollReply.
pub const REPLY_NET_OFFSET: usize = 18;

/// Offset of the SubSwitch byte in an ArtPollReply.
pub const REPLY_SUB_NET_OFFSET: usize = 19;

/// Byte range of the short name in an ArtPollReply (ASCII, NUL padded).
pub const REPLY_SHORT_NAME_RANGE: core::ops::Range<usize> = 26..44;

/// Byte range of the long name in an ArtPollReply (ASCII, NUL padded).
pub const REPLY_LONG_NAME_RANGE: core::ops::Range<usize> = 44..108;

/// Byte range of the node report string in an ArtPollReply (ASCII, NUL padded).
pub const REPLY_NODE_REPORT_RANGE: core::ops::Range<usize> = 108..172;

/// Byte range of the four PortTypes bytes in an ArtPollReply.
pub const REPLY_PORT_TYPES_RANGE: core::ops::Range<usize> = 174..178;

/// Byte range of the four SwIn bytes in an ArtPollReply.
pub const REPLY_SW_IN_RANGE: core::ops::Range<usize> = 186..190;

/// Byte range of the four SwOut bytes in an ArtPollReply.
pub const REPLY_SW_OUT_RANGE: core::ops::Range<usize> = 190..194;

/// Byte range of the MAC address in an ArtPollReply.
pub const REPLY_MAC_RANGE: core::ops::Range<usize> = 201..207;

/// Offset of the Status2 byte in an ArtPollReply.
pub const REPLY_STATUS2_OFFSET: usize = 212;

/// Bit within Status2 that indicates the node's IP was set by DHCP.
pub const REPLY_STATUS2_DHCP_BIT: u8 = 0x02;

/// Bit within a PortTypes byte that indicates the port can input DMX.
pub const REPLY_PORT_TYPE_INPUT_BIT: u8 = 0x40;

/// Bit within a PortTypes byte that indicates the port can output DMX.
pub const REPLY_PORT_TYPE_OUTPUT_BIT: u8 = 0x80;

#[cfg(test)]
mod tests {
    use super::*;

    /// Verifies the protocol defined constants against the published Art-Net specification.
    /// This test is particularly useful at the maintenance stage as it will flag up if any
    /// protocol defined constant is changed.
    #[test]
    fn check_artnet_parameter_values() {
        assert_eq!(ARTNET_PORT, 6454);
        assert_eq!(&ARTNET_PACKET_IDENTIFIER, b"Art-Net\0");
        assert_eq!(ARTNET_PROTOCOL_VERSION_HI, 0);
        assert_eq!(ARTNET_PROTOCOL_VERSION_LO, 14);
        assert_eq!(DMX_CHANNEL_COUNT, 512);
        assert_eq!(ARTDMX_HEADER_LENGTH + DMX_CHANNEL_COUNT, 530);
        assert_eq!(SHORT_NAME_FIELD_LENGTH, 18);
        assert_eq!(LONG_NAME_FIELD_LENGTH, 64);
        assert_eq!(POLL_REPLY_MIN_LENGTH, 214);
    }

    #[test]
    fn reply_field_ranges_are_consistent() {
        assert_eq!(REPLY_IP_RANGE.len(), 4);
        assert_eq!(REPLY_FIRMWARE_RANGE.len(), 2);
        assert_eq!(REPLY_SHORT_NAME_RANGE.len(), SHORT_NAME_FIELD_LENGTH);
        assert_eq!(REPLY_LONG_NAME_RANGE.len(), LONG_NAME_FIELD_LENGTH);
        assert_eq!(REPLY_NODE_REPORT_RANGE.len(), 64);
        assert_eq!(REPLY_PORT_TYPES_RANGE.len(), 4);
        assert_eq!(REPLY_SW_IN_RANGE.len(), 4);
        assert_eq!(REPLY_SW_OUT_RANGE.len(), 4);
        assert_eq!(REPLY_MAC_RANGE.len(), 6);
        assert!(REPLY_STATUS2_OFFSET < POLL_REPLY_MIN_LENGTH);
    }
}
