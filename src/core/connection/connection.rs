use core::fmt::{Display, Error as FmtError, Formatter};

use serde_derive::{Deserialize, Serialize};

use crate::core::commitment::commitment::CommitmentPrefix;
use crate::core::host::identifier::{ClientId, ConnectionId};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    Uninitialized,
    Init,
    TryOpen,
    Open,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Uninitialized => "UNINITIALIZED",
            State::Init => "INIT",
            State::TryOpen => "TRYOPEN",
            State::Open => "OPEN",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, State::Open)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEnd {
    state: State,
    client_id: ClientId,
    counterparty: Counterparty,
    versions: Vec<String>,
}

impl ConnectionEnd {
    pub fn new(
        state: State,
        client_id: ClientId,
        counterparty: Counterparty,
        versions: Vec<String>,
    ) -> Self {
        Self {
            state,
            client_id,
            counterparty,
            versions,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Helper function to compare the state of this end with another state.
    pub fn state_matches(&self, other: &State) -> bool {
        self.state.eq(other)
    }

    /// Getter for the client id on the local chain.
    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Getter for the counterparty.
    pub fn counterparty(&self) -> &Counterparty {
        &self.counterparty
    }

    /// Getter for the list of versions in this connection end.
    pub fn versions(&self) -> &[String] {
        &self.versions
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterparty {
    client_id: ClientId,
    connection_id: Option<ConnectionId>,
    prefix: CommitmentPrefix,
}

impl Counterparty {
    pub fn new(
        client_id: ClientId,
        connection_id: Option<ConnectionId>,
        prefix: CommitmentPrefix,
    ) -> Self {
        Self {
            client_id,
            connection_id,
            prefix,
        }
    }

    /// Getter for the client id.
    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Getter for the connection id.
    pub fn connection_id(&self) -> Option<&ConnectionId> {
        self.connection_id.as_ref()
    }

    /// Getter for the commitment prefix the counterparty commits its state
    /// under; proof paths are built against it.
    pub fn prefix(&self) -> &CommitmentPrefix {
        &self.prefix
    }
}

/// The version list this implementation can negotiate.
pub fn get_compatible_versions() -> Vec<String> {
    vec!["1".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_matching() {
        let end = ConnectionEnd::new(
            State::Open,
            ClientId::default(),
            Counterparty::default(),
            get_compatible_versions(),
        );
        assert!(end.state_matches(&State::Open));
        assert!(!end.state_matches(&State::Init));
        assert!(end.state().is_open());
    }
}
