//! Implementation of the Art-Net network protocol.
//!
//! Art-Net transports DMX512 lighting control data over UDP/IP networks. This crate
//! builds and sends the packet types a lighting controller needs: ArtDmx for channel
//! data, ArtPoll/ArtPollReply for node discovery and ArtAddress for remotely
//! programming a node's addressing. Delivery is fire-and-forget UDP; the protocol
//! offers no acknowledgements and this library adds none.
//!
//! # Examples
//!
//! Sending a color to an RGBW fixture:
//!
//! ```no_run
//! use artnet::channel_assignment::ChannelAssignment;
//! use artnet::color::{Color, ColorChannel};
//! use artnet::master::ArtNetMaster;
//! use artnet::port_address::Net;
//!
//! let assignment = ChannelAssignment::new(&[
//!     ColorChannel::Red,
//!     ColorChannel::Green,
//!     ColorChannel::Blue,
//!     ColorChannel::White,
//! ])
//! .unwrap();
//!
//! let mut master = ArtNetMaster::new();
//! master
//!     .send_color(
//!         "192.168.1.255".parse().unwrap(),
//!         Net::new(0).unwrap(),
//!         0,
//!         &Color::new(1.0, 0.2, 0.0, 1.0),
//!         &assignment,
//!     )
//!     .unwrap();
//! ```
//!
//! Discovering nodes on the local subnet:
//!
//! ```no_run
//! use artnet::master::{ArtNetMaster, InterfaceInfo};
//!
//! let interface = InterfaceInfo {
//!     address: "192.168.1.10".parse().unwrap(),
//!     netmask: "255.255.255.0".parse().unwrap(),
//! };
//!
//! let mut master = ArtNetMaster::new();
//! for node in master.collect_nodes(interface).unwrap() {
//!     println!("{} at {}", node.short_name, node.ip);
//! }
//! ```

pub use artnet_core::{address, channel_assignment, color, definitions, ip, node, op_code, packet, port_address};

pub mod error;
pub mod master;

/// Result alias for operations of this crate.
pub type ArtNetResult<T> = Result<T, error::Error>;
