use flex_error::define_error;

use crate::core::host::identifier::ClientId;
use crate::Height;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        ConsensusStateNotFound
            { client_id: ClientId, height: Height }
            | e | {
                format_args!(
                    "no consensus state recorded for client {0} at height {1}",
                    e.client_id, e.height)
            },

        ConsensusStateOverwrite
            { client_id: ClientId, height: Height }
            | e | {
                format_args!(
                    "consensus state for client {0} at height {1} already recorded with a different value",
                    e.client_id, e.height)
            },

        ClientMetadataNotFound
            { client_id: ClientId }
            | e | {
                format_args!("no metadata recorded for client {0}", e.client_id)
            },
    }
}
