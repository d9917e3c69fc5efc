//! Snapshot-store context. The two traits `ClientReader` and `ClientKeeper`
//! define the interface the host chain's light-client subsystem must implement
//! for the gate (and anything composed with it) to resolve recorded roots.

use core::time::Duration;

use crate::core::client::consensus_state::ConsensusState;
use crate::core::client::error::Error;
use crate::core::host::identifier::ClientId;
use crate::Height;

/// Parameters fixed when a client is created, read by freshness checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientMetadata {
    pub trusting_period: Duration,
}

/// Read-only access to the snapshot store.
pub trait ClientReader {
    /// Returns the snapshot recorded for `client_id` at exactly `height`.
    ///
    /// There is no interpolation and no nearest-height fallback: a height that
    /// was never recorded is an error, even if neighbouring heights exist.
    fn consensus_state(&self, client_id: &ClientId, height: Height)
        -> Result<ConsensusState, Error>;

    fn client_metadata(&self, client_id: &ClientId) -> Result<ClientMetadata, Error>;
}

/// Write access to the snapshot store, owned by the light-client subsystem.
pub trait ClientKeeper {
    /// Records a snapshot at a new height.
    ///
    /// A (client, height) slot is write-once: storing a different value at an
    /// existing height must fail, and re-storing an equal value is a no-op.
    fn store_consensus_state(
        &mut self,
        client_id: ClientId,
        height: Height,
        consensus_state: ConsensusState,
    ) -> Result<(), Error>;

    fn store_client_metadata(
        &mut self,
        client_id: ClientId,
        metadata: ClientMetadata,
    ) -> Result<(), Error>;
}
