//! Records describing Art-Net nodes discovered on the network.

use byteorder::{ByteOrder, LittleEndian};
use uuid::Uuid;

use crate::{
    definitions::{
        ARTNET_PACKET_IDENTIFIER, POLL_REPLY_MIN_LENGTH, REPLY_FIRMWARE_RANGE, REPLY_IP_RANGE, REPLY_LONG_NAME_RANGE,
        REPLY_MAC_RANGE, REPLY_NET_OFFSET, REPLY_NODE_REPORT_RANGE, REPLY_PORT_TYPE_INPUT_BIT,
        REPLY_PORT_TYPE_OUTPUT_BIT, REPLY_PORT_TYPES_RANGE, REPLY_SHORT_NAME_RANGE, REPLY_STATUS2_DHCP_BIT,
        REPLY_STATUS2_OFFSET, REPLY_SUB_NET_OFFSET, REPLY_SW_IN_RANGE, REPLY_SW_OUT_RANGE,
    },
    ip::IpAddress,
    op_code::OpCode,
    packet::ParsePackError,
};

/// Everything a node tells us about itself in an ArtPollReply.
///
/// One record is created per successfully parsed reply. Records are not deduplicated
/// by node identity, so repeated replies from the same physical node during one poll
/// cycle each produce a distinct entry; the `id` tells the entries apart.
#[derive(Debug, Clone)]
pub struct NodeInfo {
    /// Identity of this record, generated at parse time.
    pub id: Uuid,
    /// The node's IP address as reported in the reply.
    pub ip: IpAddress,
    /// The node's MAC address.
    pub mac: [u8; 6],
    /// Firmware revision rendered as "major.minor".
    pub firmware_version: String,
    /// The node's Net switch value.
    pub net: u8,
    /// The node's SubNet switch value.
    pub sub_net: u8,
    /// Short node name (at most 17 characters on the wire).
    pub short_name: String,
    /// Long node name (at most 63 characters on the wire).
    pub long_name: String,
    /// The node's textual status report.
    pub node_report: String,
    /// Whether the node's IP was configured by DHCP.
    pub dhcp_on: bool,
    /// The four input switch values.
    pub sw_in: [u8; 4],
    /// Whether each of the four ports can input DMX.
    pub sw_in_enabled: [bool; 4],
    /// The four output switch values.
    pub sw_out: [u8; 4],
    /// Whether each of the four ports can output DMX.
    pub sw_out_enabled: [bool; 4],
}

impl NodeInfo {
    /// Parses an inbound datagram as an ArtPollReply.
    ///
    /// # Errors
    /// BufferTooShort: the datagram has fewer than the 214 bytes a reply needs.
    /// InvalidPacketIdentifier: the datagram is not Art-Net traffic.
    /// UnexpectedOpCode: the datagram is Art-Net traffic but not a poll reply.
    ///
    /// The Art-Net port carries unrelated broadcast traffic, so callers treat every
    /// error as "drop this datagram and keep listening".
    pub fn parse(buf: &[u8]) -> Result<Self, ParsePackError> {
        if buf.len() < POLL_REPLY_MIN_LENGTH {
            return Err(ParsePackError::BufferTooShort(buf.len()));
        }

        if buf[..8] != ARTNET_PACKET_IDENTIFIER {
            return Err(ParsePackError::InvalidPacketIdentifier);
        }

        let op_code = LittleEndian::read_u16(&buf[8..10]);
        if op_code != OpCode::PollReply.value() {
            return Err(ParsePackError::UnexpectedOpCode(op_code));
        }

        let ip_bytes = &buf[REPLY_IP_RANGE];
        let firmware = &buf[REPLY_FIRMWARE_RANGE];
        let port_types = &buf[REPLY_PORT_TYPES_RANGE];

        let mut mac = [0u8; 6];
        mac.copy_from_slice(&buf[REPLY_MAC_RANGE]);

        let mut sw_in = [0u8; 4];
        sw_in.copy_from_slice(&buf[REPLY_SW_IN_RANGE]);

        let mut sw_out = [0u8; 4];
        sw_out.copy_from_slice(&buf[REPLY_SW_OUT_RANGE]);

        Ok(Self {
            id: Uuid::new_v4(),
            ip: IpAddress::new(ip_bytes[0], ip_bytes[1], ip_bytes[2], ip_bytes[3]),
            mac,
            firmware_version: format!("{}.{}", firmware[0], firmware[1]),
            net: buf[REPLY_NET_OFFSET],
            sub_net: buf[REPLY_SUB_NET_OFFSET],
            short_name: parse_padded_text(&buf[REPLY_SHORT_NAME_RANGE]),
            long_name: parse_padded_text(&buf[REPLY_LONG_NAME_RANGE]),
            node_report: parse_padded_text(&buf[REPLY_NODE_REPORT_RANGE]),
            dhcp_on: buf[REPLY_STATUS2_OFFSET] & REPLY_STATUS2_DHCP_BIT > 0,
            sw_in,
            sw_in_enabled: port_flags(port_types, REPLY_PORT_TYPE_INPUT_BIT),
            sw_out,
            sw_out_enabled: port_flags(port_types, REPLY_PORT_TYPE_OUTPUT_BIT),
        })
    }
}

/// Reads an ASCII text field, dropping the trailing NUL padding. Bytes outside ASCII
/// are replaced rather than rejected; a garbled name is still a discovered node.
fn parse_padded_text(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

fn port_flags(port_types: &[u8], bit: u8) -> [bool; 4] {
    [
        port_types[0] & bit > 0,
        port_types[1] & bit > 0,
        port_types[2] & bit > 0,
        port_types[3] & bit > 0,
    ]
}
