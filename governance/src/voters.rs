//! Voter registry: address → assigned role, plus per-cycle issuance flag.

use std::collections::HashSet;

use crate::error::GovernanceError;
use catalyst_registry::EnumerableRegistry;
use catalyst_types::{Address, RoleId};
use serde::{Deserialize, Serialize};

/// A registered voter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    pub address: Address,
    pub role: RoleId,
    /// Whether the current issuance cycle has credited this voter.
    pub minted: bool,
}

/// Registered voters. Role ids handed in here are already validated.
#[derive(Clone, Debug, Default)]
pub struct VoterRegistry {
    voters: EnumerableRegistry<Address, Voter>,
    /// Addresses credited in the current cycle. Outlives deregistration so
    /// that re-registering an address does not reopen its issuance.
    issued: HashSet<Address>,
}

impl VoterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, address: Address, role: RoleId) -> Result<(), GovernanceError> {
        let voter = Voter {
            address,
            role,
            minted: self.issued.contains(&address),
        };
        self.voters
            .insert(address, voter)
            .map_err(|_| GovernanceError::VoterAlreadyExists(address))
    }

    /// Reassign a voter's role, returning the previous one.
    pub fn update(&mut self, address: &Address, role: RoleId) -> Result<RoleId, GovernanceError> {
        let voter = self
            .voters
            .get_mut(address)
            .ok_or(GovernanceError::VoterNotFound(*address))?;
        Ok(std::mem::replace(&mut voter.role, role))
    }

    pub fn remove(&mut self, address: &Address) -> Result<Voter, GovernanceError> {
        self.voters
            .remove(address)
            .map_err(|_| GovernanceError::VoterNotFound(*address))
    }

    pub fn get(&self, address: &Address) -> Option<&Voter> {
        self.voters.get(address)
    }

    pub fn role_of(&self, address: &Address) -> Option<RoleId> {
        self.voters.get(address).map(|v| v.role)
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.voters.contains(address)
    }

    /// Voter at a registry position, for cursor-driven sweeps.
    pub fn get_index(&self, position: usize) -> Option<&Voter> {
        self.voters.get_index(position).map(|(_, v)| v)
    }

    pub(crate) fn set_minted(&mut self, address: &Address, minted: bool) {
        if let Some(voter) = self.voters.get_mut(address) {
            voter.minted = minted;
        }
        if minted {
            self.issued.insert(*address);
        } else {
            self.issued.remove(address);
        }
    }

    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }

    pub fn voters(&self) -> Vec<Voter> {
        self.voters.values().into_vec()
    }
}
