//! The governance controller, sole mutator of roles, voters, projects
//! and voting balances.
//!
//! Every operation checks its preconditions before touching state, so a
//! returned error means nothing changed. Bulk sweeps additionally keep a
//! journal of the ledger calls they made and reverse them if a later ledger
//! call fails.

use catalyst_ledger::{GovernanceLedger, TokenMetadata, VoteToken};
use catalyst_types::{Address, Role, RoleId, Weight};
use tracing::{debug, error, info, warn};

use crate::config::CatalystConfig;
use crate::error::GovernanceError;
use crate::event::{EventBus, GovernanceEvent};
use crate::projects::{Project, ProjectRegistry};
use crate::roles::RoleRegistry;
use crate::voters::{Voter, VoterRegistry};

/// Outcome of one sweep over the voter set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchProgress {
    /// Registry positions visited.
    pub processed: usize,
    /// Voters whose balance or issuance flag changed.
    pub affected: usize,
    /// Total amount minted or burned.
    pub amount: u128,
    /// Where the next batch should start, or `None` when the sweep reached
    /// the end of the voter set.
    pub next_cursor: Option<usize>,
}

/// Role-weighted governance over a mint/burn ledger.
pub struct CatalystController<L> {
    roles: RoleRegistry,
    voters: VoterRegistry,
    projects: ProjectRegistry,
    ledger: L,
    events: EventBus,
    max_bulk_voters: usize,
    /// Batched sweep that has not yet reached the end of the voter set.
    pending_sweep: Option<Sweep>,
}

impl<L: GovernanceLedger> CatalystController<L> {
    pub fn new(ledger: L, config: &CatalystConfig) -> Self {
        Self {
            roles: RoleRegistry::new(),
            voters: VoterRegistry::new(),
            projects: ProjectRegistry::new(),
            ledger,
            events: EventBus::new(),
            max_bulk_voters: config.max_bulk_voters.max(1),
            pending_sweep: None,
        }
    }

    /// Controller with the default configuration.
    pub fn with_ledger(ledger: L) -> Self {
        Self::new(ledger, &CatalystConfig::default())
    }

    // ── Roles ──────────────────────────────────────────────────────────

    pub fn set_new_role(&mut self, role_id: u64, weight: u128) -> Result<Role, GovernanceError> {
        let role = self.roles.set_new_role(role_id, weight)?;
        info!(role = role.id.get(), weight, "role created");
        self.events.emit(&GovernanceEvent::RoleCreated {
            role: role.id,
            weight: role.weight,
        });
        Ok(role)
    }

    pub fn get_role_weight(&self, role_id: u64) -> Result<Weight, GovernanceError> {
        self.roles.get_role_weight(role_id)
    }

    // ── Voters ─────────────────────────────────────────────────────────

    /// Register `address` under an existing role. No weight is issued until
    /// the next [`set_voters`](Self::set_voters).
    pub fn register_voter(&mut self, address: Address, role_id: u64) -> Result<(), GovernanceError> {
        if self.voters.contains(&address) {
            return Err(GovernanceError::VoterAlreadyExists(address));
        }
        let role = self.roles.resolve(role_id)?;
        self.voters.register(address, role)?;
        info!(voter = %address, role = role.get(), "voter registered");
        self.events
            .emit(&GovernanceEvent::VoterRegistered { voter: address, role });
        Ok(())
    }

    /// Move a voter to another role, returning the previous one.
    ///
    /// Balances already issued are left alone; they are corrected by the
    /// next prune/set cycle.
    pub fn update_voter(&mut self, address: &Address, role_id: u64) -> Result<RoleId, GovernanceError> {
        let role = self.roles.resolve(role_id)?;
        let previous = self.voters.update(address, role)?;
        info!(voter = %address, previous = previous.get(), role = role.get(), "voter updated");
        self.events.emit(&GovernanceEvent::VoterUpdated {
            voter: *address,
            previous,
            role,
        });
        Ok(previous)
    }

    /// Deregister a voter. Any balance it holds stays on the ledger.
    ///
    /// Removal reorders the voter set, so it is refused while a batched
    /// sweep is unfinished.
    pub fn remove_voter(&mut self, address: &Address) -> Result<(), GovernanceError> {
        if let Some(sweep) = self.pending_sweep {
            warn!(voter = %address, ?sweep, "removal refused during batched sweep");
            return Err(GovernanceError::SweepInProgress);
        }
        let voter = self.voters.remove(address)?;
        info!(voter = %address, role = voter.role.get(), "voter removed");
        self.events
            .emit(&GovernanceEvent::VoterRemoved { voter: *address });
        Ok(())
    }

    pub fn get_voter_role(&self, address: &Address) -> Option<RoleId> {
        self.voters.role_of(address)
    }

    /// Role id as a plain integer, with 0 meaning "not a voter".
    pub fn get_voter_role_raw(&self, address: &Address) -> u64 {
        self.get_voter_role(address).map_or(0, |role| role.get())
    }

    /// Issue every registered voter its role's weight.
    ///
    /// Voters already credited in the current cycle are skipped, so calling
    /// this twice without [`prune_voters`](Self::prune_voters) in between
    /// does not double-issue. This holds across deregistration: an address
    /// removed and registered again keeps its credit until it is pruned.
    pub fn set_voters(&mut self) -> Result<BatchProgress, GovernanceError> {
        self.check_bulk_limit()?;
        self.set_voters_batch(0, self.voters.len())
    }

    /// [`set_voters`](Self::set_voters) restricted to registry positions
    /// `cursor..cursor + limit`.
    pub fn set_voters_batch(&mut self, cursor: usize, limit: usize) -> Result<BatchProgress, GovernanceError> {
        let end = self.batch_end(cursor, limit);

        let mut plan: Vec<(Address, u128)> = Vec::new();
        for position in cursor..end {
            let Some(voter) = self.voters.get_index(position) else {
                break;
            };
            if voter.minted {
                continue;
            }
            let weight = self
                .roles
                .weight(voter.role)
                .ok_or(GovernanceError::RoleNotFound(voter.role.get()))?;
            plan.push((voter.address, weight.raw()));
        }

        let minted = sum_amounts(&plan)?;
        self.ledger
            .total_supply()
            .checked_add(minted)
            .ok_or(GovernanceError::Overflow)?;

        for (applied, (address, amount)) in plan.iter().enumerate() {
            if let Err(err) = self.ledger.mint(address, *amount) {
                warn!(voter = %address, %err, reverted = applied, "mint failed, reverting batch");
                self.revert(&plan[..applied], Sweep::Mint);
                return Err(err.into());
            }
            debug!(voter = %address, amount, "voting weight issued");
        }
        for (address, _) in &plan {
            self.voters.set_minted(address, true);
        }

        let progress = self.progress(cursor, end, plan.len(), minted);
        self.pending_sweep = progress.next_cursor.map(|_| Sweep::Mint);
        info!(
            voters = progress.affected,
            minted,
            next_cursor = ?progress.next_cursor,
            "voters set"
        );
        self.events.emit(&GovernanceEvent::VotersSet {
            voters: progress.affected,
            minted,
        });
        Ok(progress)
    }

    /// Burn every registered voter's remaining balance to zero and open a
    /// new issuance cycle.
    pub fn prune_voters(&mut self) -> Result<BatchProgress, GovernanceError> {
        self.check_bulk_limit()?;
        self.prune_voters_batch(0, self.voters.len())
    }

    /// [`prune_voters`](Self::prune_voters) restricted to registry positions
    /// `cursor..cursor + limit`.
    pub fn prune_voters_batch(&mut self, cursor: usize, limit: usize) -> Result<BatchProgress, GovernanceError> {
        let end = self.batch_end(cursor, limit);

        let mut plan: Vec<(Address, u128)> = Vec::new();
        for position in cursor..end {
            let Some(voter) = self.voters.get_index(position) else {
                break;
            };
            let balance = self.ledger.balance_of(&voter.address);
            if balance > 0 || voter.minted {
                plan.push((voter.address, balance));
            }
        }

        let burned = sum_amounts(&plan)?;

        for (applied, (address, amount)) in plan.iter().enumerate() {
            if *amount == 0 {
                continue;
            }
            if let Err(err) = self.ledger.burn(address, *amount) {
                warn!(voter = %address, %err, reverted = applied, "burn failed, reverting batch");
                self.revert(&plan[..applied], Sweep::Burn);
                return Err(err.into());
            }
            debug!(voter = %address, amount, "voting weight burned");
        }
        for (address, _) in &plan {
            self.voters.set_minted(address, false);
        }

        let progress = self.progress(cursor, end, plan.len(), burned);
        self.pending_sweep = progress.next_cursor.map(|_| Sweep::Burn);
        info!(
            voters = progress.affected,
            burned,
            next_cursor = ?progress.next_cursor,
            "voters pruned"
        );
        self.events.emit(&GovernanceEvent::VotersPruned {
            voters: progress.affected,
            burned,
        });
        Ok(progress)
    }

    // ── Projects & voting ──────────────────────────────────────────────

    pub fn set_new_project(&mut self, name: &str) -> Result<(), GovernanceError> {
        self.projects.set_new_project(name)?;
        info!(project = name, "project created");
        self.events.emit(&GovernanceEvent::ProjectCreated {
            project: name.into(),
        });
        Ok(())
    }

    /// Spend `amount` of the caller's balance on a project, returning the
    /// project's new tally.
    pub fn vote(&mut self, caller: &Address, name: &str, amount: u128) -> Result<u128, GovernanceError> {
        self.projects.open_project(name)?;
        if amount == 0 {
            return Err(GovernanceError::ZeroAmount);
        }
        self.projects.check_vote(name, amount)?;
        let available = self.ledger.balance_of(caller);
        if available < amount {
            return Err(GovernanceError::InsufficientBalance {
                needed: amount,
                available,
            });
        }

        self.ledger.burn(caller, amount)?;
        let tally = self.projects.record_vote(name, amount)?;
        info!(voter = %caller, project = name, amount, tally, "vote cast");
        self.events.emit(&GovernanceEvent::VoteCast {
            voter: *caller,
            project: name.into(),
            amount,
        });
        Ok(tally)
    }

    /// Permanently close voting on a project, returning its final tally.
    pub fn close_vote(&mut self, name: &str) -> Result<u128, GovernanceError> {
        let tally = self.projects.close(name)?;
        info!(project = name, tally, "vote closed");
        self.events.emit(&GovernanceEvent::VoteClosed {
            project: name.into(),
            tally,
        });
        Ok(tally)
    }

    // ── Views ──────────────────────────────────────────────────────────

    pub fn balance_of(&self, address: &Address) -> u128 {
        self.ledger.balance_of(address)
    }

    pub fn total_supply(&self) -> u128 {
        self.ledger.total_supply()
    }

    pub fn token(&self) -> &TokenMetadata {
        self.ledger.metadata()
    }

    pub fn roles(&self) -> Vec<Role> {
        self.roles.roles()
    }

    pub fn voter(&self, address: &Address) -> Option<&Voter> {
        self.voters.get(address)
    }

    pub fn voters(&self) -> Vec<Voter> {
        self.voters.voters()
    }

    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.get(name)
    }

    pub fn projects(&self) -> Vec<Project> {
        self.projects.projects()
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Event bus for subscribing to committed changes.
    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    // ── Internals ──────────────────────────────────────────────────────

    fn check_bulk_limit(&self) -> Result<(), GovernanceError> {
        let voters = self.voters.len();
        if voters > self.max_bulk_voters {
            return Err(GovernanceError::BulkLimitExceeded {
                voters,
                limit: self.max_bulk_voters,
            });
        }
        Ok(())
    }

    fn batch_end(&self, cursor: usize, limit: usize) -> usize {
        cursor.saturating_add(limit).min(self.voters.len())
    }

    fn progress(&self, cursor: usize, end: usize, affected: usize, amount: u128) -> BatchProgress {
        BatchProgress {
            processed: end.saturating_sub(cursor),
            affected,
            amount,
            next_cursor: (end < self.voters.len()).then_some(end),
        }
    }

    /// Undo the ledger calls already made by a failed sweep, newest first.
    fn revert(&mut self, applied: &[(Address, u128)], sweep: Sweep) {
        for (address, amount) in applied.iter().rev() {
            if *amount == 0 {
                continue;
            }
            let result = match sweep {
                Sweep::Mint => self.ledger.burn(address, *amount),
                Sweep::Burn => self.ledger.mint(address, *amount),
            };
            if let Err(err) = result {
                error!(voter = %address, amount, %err, "failed to revert ledger call");
            }
        }
    }
}

impl CatalystController<VoteToken> {
    /// Controller over an in-memory token described by `config.token`.
    pub fn from_config(config: &CatalystConfig) -> Self {
        Self::new(VoteToken::new(config.token_metadata()), config)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sweep {
    Mint,
    Burn,
}

fn sum_amounts(plan: &[(Address, u128)]) -> Result<u128, GovernanceError> {
    plan.iter()
        .try_fold(0u128, |total, (_, amount)| total.checked_add(*amount))
        .ok_or(GovernanceError::Overflow)
}

impl<L> std::fmt::Debug for CatalystController<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalystController")
            .field("roles", &self.roles.len())
            .field("voters", &self.voters.len())
            .field("projects", &self.projects.len())
            .field("max_bulk_voters", &self.max_bulk_voters)
            .field("pending_sweep", &self.pending_sweep)
            .finish()
    }
}
