#![warn(missing_docs)]

//! Core types for the artnet crate

pub mod address;
pub mod channel_assignment;
pub mod color;
pub mod definitions;
pub mod ip;
pub mod node;
pub mod op_code;
pub mod packet;
pub mod port_address;
