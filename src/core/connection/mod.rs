//! Connection ends. Created and mutated by the handshake protocol (external);
//! the gate only reads them to find the client and commitment prefix of the
//! counterparty.

pub mod connection;
