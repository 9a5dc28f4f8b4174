//! End-to-end governance flows driven through the public controller API:
//! role setup → registration → issuance → voting → pruning → closing.

use catalyst_governance::{CatalystController, GovernanceError};
use catalyst_ledger::VoteToken;
use catalyst_types::Address;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn account(n: u8) -> Address {
    let mut bytes = [0u8; 20];
    bytes[19] = n;
    Address::new(bytes)
}

fn new_catalyst() -> CatalystController<VoteToken> {
    CatalystController::with_ledger(VoteToken::default())
}

// ---------------------------------------------------------------------------
// Literal two-voter scenario
// ---------------------------------------------------------------------------

#[test]
fn two_voters_one_project() {
    let mut catalyst = new_catalyst();
    let (a, b) = (account(1), account(2));

    catalyst.set_new_role(1, 1).unwrap();
    catalyst.set_new_role(2, 2).unwrap();
    catalyst.register_voter(a, 1).unwrap();
    catalyst.register_voter(b, 2).unwrap();

    catalyst.set_voters().unwrap();
    assert_eq!(catalyst.balance_of(&a), 1);
    assert_eq!(catalyst.balance_of(&b), 2);

    catalyst.set_new_project("P").unwrap();
    assert_eq!(catalyst.vote(&a, "P", 1), Ok(1));
    assert_eq!(catalyst.balance_of(&a), 0);
    assert_eq!(catalyst.vote(&b, "P", 2), Ok(3));
    assert_eq!(catalyst.project("P").unwrap().tally, 3);

    assert_eq!(catalyst.close_vote("P"), Ok(3));
    assert_eq!(
        catalyst.vote(&a, "P", 1),
        Err(GovernanceError::VoteClosed("P".into()))
    );
}

// ---------------------------------------------------------------------------
// Full contract lifecycle with six voters and three projects
// ---------------------------------------------------------------------------

#[test]
fn full_lifecycle() {
    let mut catalyst = new_catalyst();
    assert_eq!(catalyst.token().name, "Catalyst");
    assert_eq!(catalyst.token().symbol, "VOTE");

    // Roles
    for (id, weight) in [(1, 1), (2, 2), (3, 3), (4, 4), (5, 1)] {
        catalyst.set_new_role(id, weight).unwrap();
        assert_eq!(catalyst.get_role_weight(id).unwrap().raw(), weight);
    }

    // Registration
    for (n, role) in [(1, 1), (2, 2), (3, 2), (4, 3), (5, 4), (6, 5)] {
        catalyst.register_voter(account(n), role).unwrap();
    }
    assert_eq!(
        catalyst.register_voter(account(1), 1),
        Err(GovernanceError::VoterAlreadyExists(account(1)))
    );
    assert_eq!(
        catalyst.register_voter(account(7), 10),
        Err(GovernanceError::RoleNotFound(10))
    );

    // Issuance
    for n in 1..7 {
        assert_eq!(catalyst.balance_of(&account(n)), 0);
    }
    catalyst.set_voters().unwrap();
    for n in 1..7 {
        let role = catalyst.get_voter_role(&account(n)).unwrap();
        let weight = catalyst.get_role_weight(role.get()).unwrap();
        assert_eq!(catalyst.balance_of(&account(n)), weight.raw());
    }

    // Projects
    for name in ["ProjectA", "ProjectB", "ProjectC"] {
        catalyst.set_new_project(name).unwrap();
    }
    assert_eq!(
        catalyst.set_new_project("ProjectA"),
        Err(GovernanceError::ProjectAlreadyExists("ProjectA".into()))
    );

    // Voting
    let ballots = [
        (1, "ProjectA", 1),
        (2, "ProjectB", 1),
        (2, "ProjectC", 1),
        (3, "ProjectA", 1),
        (3, "ProjectB", 1),
        (6, "ProjectC", 1),
        (4, "ProjectA", 1),
        (4, "ProjectB", 2),
        (5, "ProjectC", 1),
    ];
    for (n, project, amount) in ballots {
        catalyst.vote(&account(n), project, amount).unwrap();
    }
    assert_eq!(catalyst.project("ProjectA").unwrap().tally, 3);
    assert_eq!(catalyst.project("ProjectB").unwrap().tally, 4);
    assert_eq!(catalyst.project("ProjectC").unwrap().tally, 3);
    assert_eq!(catalyst.balance_of(&account(5)), 3);

    // Failed updates and role creation
    assert_eq!(
        catalyst.update_voter(&account(1), 10),
        Err(GovernanceError::RoleNotFound(10))
    );
    assert_eq!(
        catalyst.update_voter(&account(8), 1),
        Err(GovernanceError::VoterNotFound(account(8)))
    );
    assert!(matches!(
        catalyst.set_new_role(1, 1),
        Err(GovernanceError::RoleAlreadyExists(_))
    ));
    assert_eq!(catalyst.set_new_role(0, 1), Err(GovernanceError::InvalidRoleId));

    // Role change
    assert_eq!(catalyst.get_voter_role_raw(&account(1)), 1);
    catalyst.update_voter(&account(1), 3).unwrap();
    assert_eq!(catalyst.get_voter_role_raw(&account(1)), 3);

    // Pruning
    catalyst.prune_voters().unwrap();
    for n in 1..7 {
        assert_eq!(catalyst.balance_of(&account(n)), 0);
    }
    assert_eq!(catalyst.total_supply(), 0);

    // Removal
    catalyst.remove_voter(&account(1)).unwrap();
    assert_eq!(catalyst.get_voter_role(&account(1)), None);
    assert_eq!(
        catalyst.remove_voter(&account(1)),
        Err(GovernanceError::VoterNotFound(account(1)))
    );

    // Closing
    catalyst.close_vote("ProjectA").unwrap();
    assert_eq!(
        catalyst.close_vote("ProjectA"),
        Err(GovernanceError::VoteClosed("ProjectA".into()))
    );

    // A fresh cycle cannot reopen a closed project.
    catalyst.set_voters().unwrap();
    assert_eq!(catalyst.balance_of(&account(4)), 3);
    assert_eq!(
        catalyst.vote(&account(4), "ProjectA", 1),
        Err(GovernanceError::VoteClosed("ProjectA".into()))
    );
    assert_eq!(catalyst.vote(&account(4), "ProjectB", 1), Ok(5));
}
