//! Commitment scheme: roots recorded by snapshots, store prefixes, and
//! membership verification of (key, value) pairs under a root.

pub mod commitment;
pub mod error;
pub mod merkle;
