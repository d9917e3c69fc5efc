#![allow(clippy::large_enum_variant)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

//! Verification gate for a cross-chain packet relay protocol.
//!
//! Modules:
//!
//! - `core::client`: consensus snapshot store interface (recorded state roots)
//! - `core::connection`: connection ends and their counterparty metadata
//! - `core::channel`: channel ends, packets, delivery bookkeeping, and the
//!   receive-packet handler
//! - `core::commitment`: commitment roots, prefixes, and merkle membership
//!   verification
//! - `core::host`: identifiers and the canonical path space
//! - `core::gate`: the pre-execution decorator chain that admits or rejects
//!   inbound packet messages

pub mod core;
pub mod events;
pub mod handler;
pub mod keys;
pub mod proofs;
pub mod proto;
pub mod serializers;
pub mod signer;
pub mod timestamp;
pub mod tx_msg;

/// Re-export of the height domain type, keyed into every snapshot lookup.
pub type Height = crate::core::client::height::Height;

#[cfg(any(test, feature = "mocks"))]
pub mod mock; // Mock context and mock counterparty chain, for testing all handlers.
