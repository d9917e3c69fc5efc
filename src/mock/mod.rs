//! Mock implementations of the gate's external collaborators: a context
//! standing in for the host chain's stores, and a counterparty chain whose
//! committed state can actually be proven against.

pub mod chain;
pub mod context;
