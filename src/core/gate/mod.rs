//! The gate: an ordered chain of pre-execution checks that every inbound
//! transaction passes through before packet execution. Each stage may reject
//! outright; only if every stage accepts does control reach execution.

pub mod context;
pub mod decorator;
pub mod tx;
