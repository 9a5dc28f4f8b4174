//! Role identifiers and voting weights.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

/// Identifier of a governance role.
///
/// Zero is reserved ("no role") and cannot be represented. Boundary code
/// that receives raw ids converts with [`RoleId::new`] and treats `None`
/// as the reserved id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoleId(NonZeroU64);

impl RoleId {
    /// Returns `None` for the reserved id 0.
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Voting power conferred by a role, in raw token units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Weight(u128);

impl Weight {
    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A role record: id plus the weight it confers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub weight: Weight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_role_id() {
        assert!(RoleId::new(0).is_none());
        assert_eq!(RoleId::new(7).map(|r| r.get()), Some(7));
    }
}
