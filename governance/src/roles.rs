//! Role registry: write-once role ids with their voting weights.

use crate::error::GovernanceError;
use catalyst_registry::EnumerableRegistry;
use catalyst_types::{Role, RoleId, Weight};

#[derive(Clone, Debug, Default)]
pub struct RoleRegistry {
    roles: EnumerableRegistry<RoleId, Weight>,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a role. Roles cannot be changed or deleted afterwards.
    pub fn set_new_role(&mut self, raw_id: u64, weight: u128) -> Result<Role, GovernanceError> {
        let id = RoleId::new(raw_id).ok_or(GovernanceError::InvalidRoleId)?;
        let weight = Weight::new(weight);
        if weight.is_zero() {
            return Err(GovernanceError::InvalidWeight);
        }
        self.roles
            .insert(id, weight)
            .map_err(|_| GovernanceError::RoleAlreadyExists(id))?;
        Ok(Role { id, weight })
    }

    /// Weight of a role. Id 0 is never a role.
    pub fn get_role_weight(&self, raw_id: u64) -> Result<Weight, GovernanceError> {
        RoleId::new(raw_id)
            .and_then(|id| self.roles.get(&id).copied())
            .ok_or(GovernanceError::RoleNotFound(raw_id))
    }

    /// Weight of an already-validated role id.
    pub fn weight(&self, id: RoleId) -> Option<Weight> {
        self.roles.get(&id).copied()
    }

    /// Resolve a raw id to a registered role.
    pub fn resolve(&self, raw_id: u64) -> Result<RoleId, GovernanceError> {
        RoleId::new(raw_id)
            .filter(|id| self.roles.contains(id))
            .ok_or(GovernanceError::RoleNotFound(raw_id))
    }

    pub fn contains(&self, id: RoleId) -> bool {
        self.roles.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn roles(&self) -> Vec<Role> {
        self.roles
            .iter()
            .map(|(id, weight)| Role {
                id: *id,
                weight: *weight,
            })
            .collect()
    }
}
