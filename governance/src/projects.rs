//! Project registry: named vote subjects with a tally and an open/closed flag.

use crate::error::GovernanceError;
use catalyst_registry::EnumerableRegistry;
use catalyst_types::ProjectName;
use serde::{Deserialize, Serialize};

/// A project and its accumulated votes.
///
/// Projects start open and may be closed once; a closed project never
/// reopens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: ProjectName,
    /// Total weight cast for this project.
    pub tally: u128,
    /// Number of accepted `vote` calls.
    pub ballots: u64,
    pub is_open: bool,
}

impl Project {
    fn new(name: ProjectName) -> Self {
        Self {
            name,
            tally: 0,
            ballots: 0,
            is_open: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProjectRegistry {
    projects: EnumerableRegistry<ProjectName, Project>,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_new_project(&mut self, name: &str) -> Result<(), GovernanceError> {
        let name = ProjectName::from(name);
        self.projects
            .insert(name.clone(), Project::new(name.clone()))
            .map_err(|_| GovernanceError::ProjectAlreadyExists(name))
    }

    /// Look up a project that is still accepting votes.
    pub fn open_project(&self, name: &str) -> Result<&Project, GovernanceError> {
        let project = self
            .projects
            .get(name)
            .ok_or_else(|| GovernanceError::ProjectNotFound(name.into()))?;
        if !project.is_open {
            return Err(GovernanceError::VoteClosed(name.into()));
        }
        Ok(project)
    }

    /// Tally and ballot count an open project would have after accepting
    /// `amount`, without recording anything.
    pub fn check_vote(&self, name: &str, amount: u128) -> Result<(u128, u64), GovernanceError> {
        let project = self.open_project(name)?;
        let tally = project
            .tally
            .checked_add(amount)
            .ok_or(GovernanceError::Overflow)?;
        let ballots = project
            .ballots
            .checked_add(1)
            .ok_or(GovernanceError::Overflow)?;
        Ok((tally, ballots))
    }

    /// Add weight to an open project's tally.
    pub fn record_vote(&mut self, name: &str, amount: u128) -> Result<u128, GovernanceError> {
        let (tally, ballots) = self.check_vote(name, amount)?;
        if let Some(project) = self.projects.get_mut(name) {
            project.tally = tally;
            project.ballots = ballots;
        }
        Ok(tally)
    }

    /// Close a project, returning its final tally.
    pub fn close(&mut self, name: &str) -> Result<u128, GovernanceError> {
        let project = self
            .projects
            .get_mut(name)
            .ok_or_else(|| GovernanceError::ProjectNotFound(name.into()))?;
        if !project.is_open {
            return Err(GovernanceError::VoteClosed(name.into()));
        }
        project.is_open = false;
        Ok(project.tally)
    }

    pub fn get(&self, name: &str) -> Option<&Project> {
        self.projects.get(name)
    }

    #[cfg(test)]
    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Project> {
        self.projects.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.projects.values().into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_project_is_open_with_empty_tally() {
        let mut projects = ProjectRegistry::new();
        projects.set_new_project("ProjectA").unwrap();
        let project = projects.get("ProjectA").unwrap();
        assert!(project.is_open);
        assert_eq!(project.tally, 0);
        assert_eq!(project.ballots, 0);
    }

    #[test]
    fn duplicate_project_fails() {
        let mut projects = ProjectRegistry::new();
        projects.set_new_project("ProjectA").unwrap();
        assert_eq!(
            projects.set_new_project("ProjectA"),
            Err(GovernanceError::ProjectAlreadyExists("ProjectA".into()))
        );
    }

    #[test]
    fn close_is_terminal() {
        let mut projects = ProjectRegistry::new();
        projects.set_new_project("P").unwrap();
        projects.record_vote("P", 2).unwrap();
        assert_eq!(projects.close("P"), Ok(2));
        assert_eq!(
            projects.close("P"),
            Err(GovernanceError::VoteClosed("P".into()))
        );
        assert_eq!(
            projects.record_vote("P", 1),
            Err(GovernanceError::VoteClosed("P".into()))
        );
        assert_eq!(projects.get("P").unwrap().tally, 2);
    }

    #[test]
    fn unknown_project_fails() {
        let mut projects = ProjectRegistry::new();
        assert_eq!(
            projects.close("nope"),
            Err(GovernanceError::ProjectNotFound("nope".into()))
        );
        assert_eq!(
            projects.record_vote("nope", 1),
            Err(GovernanceError::ProjectNotFound("nope".into()))
        );
    }

    #[test]
    fn tally_overflow_leaves_project_unchanged() {
        let mut projects = ProjectRegistry::new();
        projects.set_new_project("P").unwrap();
        projects.record_vote("P", u128::MAX).unwrap();
        assert_eq!(projects.record_vote("P", 1), Err(GovernanceError::Overflow));
        assert_eq!(projects.get("P").unwrap().ballots, 1);
    }

    #[test]
    fn ballot_count_overflow_is_caught_by_check() {
        let mut projects = ProjectRegistry::new();
        projects.set_new_project("P").unwrap();
        assert_eq!(projects.check_vote("P", 3), Ok((3, 1)));

        projects.get_mut("P").unwrap().ballots = u64::MAX;
        assert_eq!(projects.check_vote("P", 1), Err(GovernanceError::Overflow));
        assert_eq!(projects.record_vote("P", 1), Err(GovernanceError::Overflow));
        assert_eq!(projects.get("P").unwrap().tally, 0);
    }
}
