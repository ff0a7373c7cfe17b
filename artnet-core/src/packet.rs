//! Building of Art-Net network packets.
//!
//! Every packet starts with the 8 byte identifier "Art-Net\0" followed by the 16 bit
//! op-code, low byte first. Packets are built fresh per send; none of the types here
//! outlive the call that packs and transmits them.
//!
//! # Examples
//!
//! ```
//! use artnet_core::definitions::DMX_CHANNEL_COUNT;
//! use artnet_core::packet::ArtDmx;
//! use artnet_core::port_address::Net;
//!
//! let packet = ArtDmx {
//!     net: Net::new(1).unwrap(),
//!     sub_net: 2,
//!     data: [0; DMX_CHANNEL_COUNT],
//! };
//!
//! let buf = packet.pack();
//! assert_eq!(&buf[..8], b"Art-Net\0");
//! assert_eq!(buf.len(), 530);
//! ```

use byteorder::{BigEndian, ByteOrder};

use crate::{
    address::AddressParameters,
    definitions::{
        ARTDMX_HEADER_LENGTH, ARTNET_PACKET_IDENTIFIER, ARTNET_PROTOCOL_VERSION_HI, ARTNET_PROTOCOL_VERSION_LO,
        DMX_CHANNEL_COUNT, LONG_NAME_FIELD_LENGTH, POLL_DIAG_PRIORITY, POLL_REPLY_MIN_LENGTH, POLL_TALK_TO_ME,
        SHORT_NAME_FIELD_LENGTH,
    },
    op_code::OpCode,
    port_address::Net,
};

/// Writes the packet identifier and op-code common to every Art-Net packet.
fn pack_header(buf: &mut [u8], op_code: OpCode) {
    buf[0..8].copy_from_slice(&ARTNET_PACKET_IDENTIFIER);
    buf[8..10].copy_from_slice(&op_code.wire_bytes());
}

/// An ArtPoll discovery request.
///
/// The TalkToMe and diagnostics priority fields are fixed to the values every node
/// on the subnet should answer to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArtPoll;

impl ArtPoll {
    /// The packed length of an ArtPoll.
    pub const LENGTH: usize = 14;

    /// Packs the packet into a wire ready buffer.
    pub fn pack(&self) -> [u8; Self::LENGTH] {
        let mut buf = [0u8; Self::LENGTH];

        pack_header(&mut buf, OpCode::Poll);
        buf[10] = ARTNET_PROTOCOL_VERSION_HI;
        buf[11] = ARTNET_PROTOCOL_VERSION_LO;
        buf[12] = POLL_TALK_TO_ME;
        buf[13] = POLL_DIAG_PRIORITY;

        buf
    }
}

/// An ArtDmx packet carrying one full universe of DMX512 channel data.
#[derive(Clone, Copy)]
pub struct ArtDmx {
    /// The Net part of the destination port address.
    pub net: Net,
    /// The SubNet part of the destination port address.
    pub sub_net: u8,
    /// The 512 channel values.
    pub data: [u8; DMX_CHANNEL_COUNT],
}

impl core::fmt::Debug for ArtDmx {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArtDmx")
            .field("net", &self.net)
            .field("sub_net", &self.sub_net)
            .field("data", &format_args!("[..; {DMX_CHANNEL_COUNT}]"))
            .finish()
    }
}

impl ArtDmx {
    /// The packed length of an ArtDmx: 18 byte header plus a full universe of data.
    pub const LENGTH: usize = ARTDMX_HEADER_LENGTH + DMX_CHANNEL_COUNT;

    /// Packs the packet into a wire ready buffer.
    ///
    /// Sequence is fixed to 0 (resequencing disabled) and Physical to 0. The data
    /// length field is always the full 512 channels, high byte first.
    pub fn pack(&self) -> [u8; Self::LENGTH] {
        let mut buf = [0u8; Self::LENGTH];

        pack_header(&mut buf, OpCode::Dmx);
        buf[10] = ARTNET_PROTOCOL_VERSION_HI;
        buf[11] = ARTNET_PROTOCOL_VERSION_LO;
        buf[12] = 0; // sequence, resequencing disabled
        buf[13] = 0; // physical
        buf[14] = self.sub_net;
        buf[15] = self.net.get();
        BigEndian::write_u16(&mut buf[16..18], DMX_CHANNEL_COUNT as u16);
        buf[18..].copy_from_slice(&self.data);

        buf
    }
}

/// An ArtAddress packet programming a node's addressing, names and port switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtAddress {
    /// The programming parameters to transmit.
    pub parameters: AddressParameters,
}

impl ArtAddress {
    /// The packed length of an ArtAddress.
    pub const LENGTH: usize = 14 + SHORT_NAME_FIELD_LENGTH + LONG_NAME_FIELD_LENGTH + 4 + 4 + 3;

    /// Packs the packet into a wire ready buffer.
    ///
    /// Names are NUL padded to their fixed field widths. The SwVideo byte is
    /// deprecated by the protocol and always 0.
    pub fn pack(&self) -> [u8; Self::LENGTH] {
        let params = &self.parameters;
        let mut buf = [0u8; Self::LENGTH];

        pack_header(&mut buf, OpCode::Address);
        buf[10] = ARTNET_PROTOCOL_VERSION_HI;
        buf[11] = ARTNET_PROTOCOL_VERSION_LO;
        buf[12] = params.net.get();
        buf[13] = params.bind_index;

        let short = params.short_name.as_bytes();
        buf[14..14 + short.len()].copy_from_slice(short);

        let long_start = 14 + SHORT_NAME_FIELD_LENGTH;
        let long = params.long_name.as_bytes();
        buf[long_start..long_start + long.len()].copy_from_slice(long);

        let sw_in_start = long_start + LONG_NAME_FIELD_LENGTH;
        for (i, prog) in params.sw_in.iter().enumerate() {
            buf[sw_in_start + i] = prog.encode();
        }
        for (i, prog) in params.sw_out.iter().enumerate() {
            buf[sw_in_start + 4 + i] = prog.encode();
        }

        let tail = sw_in_start + 8;
        buf[tail] = params.sub_net;
        buf[tail + 1] = 0; // sw_video, deprecated
        buf[tail + 2] = params.command.value();

        buf
    }
}

/// Error when an inbound datagram cannot be interpreted as the expected packet.
///
/// Receivers share the Art-Net port with unrelated broadcast traffic, so none of
/// these are fatal: the caller logs and drops the datagram.
#[derive(Debug, thiserror::Error)]
pub enum ParsePackError {
    /// The datagram is shorter than the packet type's minimum length.
    ///
    /// # Arguments
    /// 0: The length of the datagram
    #[error("Datagram of {0} bytes is shorter than the minimum of {POLL_REPLY_MIN_LENGTH}")]
    BufferTooShort(usize),

    /// The datagram does not start with the "Art-Net\0" identifier.
    #[error("Datagram does not carry the Art-Net packet identifier")]
    InvalidPacketIdentifier,

    /// The op-code field named a different packet type than expected.
    ///
    /// # Arguments
    /// 0: The raw op-code value found
    #[error("Unexpected op-code {0:#06x}")]
    UnexpectedOpCode(u16),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{AddressCommand, LongName, ShortName, SwitchProg};

    #[test]
    fn art_poll_layout() {
        let buf = ArtPoll.pack();

        assert_eq!(&buf[..8], b"Art-Net\0");
        assert_eq!(&buf[8..10], &[0x00, 0x20]); // op-code 0x2000, low byte first
        assert_eq!(&buf[10..12], &[0, 14]); // protocol version
        assert_eq!(buf[12], 0x17); // talk to me
        assert_eq!(buf[13], 0x10); // diagnostics priority
    }

    #[test]
    fn art_dmx_layout() {
        let mut data = [0u8; DMX_CHANNEL_COUNT];
        data[0] = 10;
        data[1] = 20;
        data[2] = 30;

        let packet = ArtDmx {
            net: Net::new(1).unwrap(),
            sub_net: 2,
            data,
        };
        let buf = packet.pack();

        let expected_header: [u8; 18] = [
            0x41, 0x72, 0x74, 0x2D, 0x4E, 0x65, 0x74, 0x00, // "Art-Net\0"
            0x00, 0x50, // op-code 0x5000, low byte first
            0x00, 0x0E, // protocol version 14
            0x00, // sequence
            0x00, // physical
            0x02, // sub-net
            0x01, // net
            0x02, 0x00, // data length 512, high byte first
        ];
        assert_eq!(&buf[..18], &expected_header);
        assert_eq!(&buf[18..21], &[10, 20, 30]);
        assert_eq!(buf.len(), 530);
    }

    #[test]
    fn art_address_layout() {
        let parameters = AddressParameters {
            net: Net::new(3).unwrap(),
            sub_net: 7,
            bind_index: 1,
            short_name: ShortName::new("studio").unwrap(),
            long_name: LongName::new("studio ceiling wash").unwrap(),
            sw_in: [SwitchProg::NoChange; 4],
            sw_out: [
                SwitchProg::value(0).unwrap(),
                SwitchProg::value(1).unwrap(),
                SwitchProg::ResetToPhysical,
                SwitchProg::NoChange,
            ],
            command: AddressCommand::LedLocate,
        };
        let buf = ArtAddress { parameters }.pack();

        assert_eq!(buf.len(), 107);
        assert_eq!(&buf[..8], b"Art-Net\0");
        assert_eq!(&buf[8..10], &[0x00, 0x60]);
        assert_eq!(&buf[10..12], &[0, 14]);
        assert_eq!(buf[12], 3); // net
        assert_eq!(buf[13], 1); // bind index

        assert_eq!(&buf[14..20], b"studio");
        assert!(buf[20..32].iter().all(|&b| b == 0)); // short name NUL padding

        assert_eq!(&buf[32..51], b"studio ceiling wash");
        assert!(buf[51..96].iter().all(|&b| b == 0)); // long name NUL padding

        assert_eq!(&buf[96..100], &[0x7F, 0x7F, 0x7F, 0x7F]); // sw_in
        assert_eq!(&buf[100..104], &[0x80, 0x81, 0x00, 0x7F]); // sw_out
        assert_eq!(buf[104], 7); // sub-net
        assert_eq!(buf[105], 0); // sw_video
        assert_eq!(buf[106], 0x04); // command
    }

    #[test]
    fn art_address_max_length_names_fill_their_fields() {
        let parameters = AddressParameters {
            short_name: ShortName::new("a".repeat(17)).unwrap(),
            long_name: LongName::new("b".repeat(63)).unwrap(),
            ..AddressParameters::default()
        };
        let buf = ArtAddress { parameters }.pack();

        assert!(buf[14..31].iter().all(|&b| b == b'a'));
        assert_eq!(buf[31], 0); // terminating NUL survives a full length short name
        assert!(buf[32..95].iter().all(|&b| b == b'b'));
        assert_eq!(buf[95], 0);
    }
}
