//! Events emitted by the controller after each committed state change.

use catalyst_types::{Address, ProjectName, RoleId, Weight};
use serde::{Deserialize, Serialize};

/// Governance events that observers can subscribe to via the [`EventBus`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GovernanceEvent {
    RoleCreated {
        role: RoleId,
        weight: Weight,
    },
    VoterRegistered {
        voter: Address,
        role: RoleId,
    },
    VoterUpdated {
        voter: Address,
        previous: RoleId,
        role: RoleId,
    },
    VoterRemoved {
        voter: Address,
    },
    /// Voting weight was issued to `voters` voters, `minted` in total.
    VotersSet {
        voters: usize,
        minted: u128,
    },
    /// Balances of `voters` voters were burned, `burned` in total.
    VotersPruned {
        voters: usize,
        burned: u128,
    },
    ProjectCreated {
        project: ProjectName,
    },
    VoteCast {
        voter: Address,
        project: ProjectName,
        amount: u128,
    },
    VoteClosed {
        project: ProjectName,
        tally: u128,
    },
}

/// Synchronous fan-out event bus for governance events.
///
/// Listeners run inline on the mutating call; keep them fast.
pub struct EventBus {
    listeners: Vec<Box<dyn Fn(&GovernanceEvent) + Send + Sync>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&GovernanceEvent) + Send + Sync>) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: &GovernanceEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
