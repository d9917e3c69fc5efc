//! Light-client snapshot store interface. The update protocol that writes
//! snapshots lives outside this crate; the gate only reads recorded roots and
//! relies on their immutability.

pub mod consensus_state;
pub mod context;
pub mod error;
pub mod height;
