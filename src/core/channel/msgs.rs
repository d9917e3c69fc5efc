//! Message definitions for the packet messages the gate consumes.

pub mod recv_packet;
