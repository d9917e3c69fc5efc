//! Processing logic for inbound packet messages.

pub mod recv_packet;
pub mod verify;
