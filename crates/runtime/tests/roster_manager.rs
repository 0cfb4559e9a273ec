use std::sync::{Arc, Mutex};

use roster_core::{Outcome, RosterError, RosterSnapshot, SkipReason, Target};
use runtime::RosterManager;

fn scores(manager: &RosterManager) -> Vec<i64> {
    manager.snapshot().rows.iter().map(|row| row.score).collect()
}

/// Alice and Bob share a pool, Alice scores, leaves, and the board is reset.
#[test]
fn scoreboard_session_walkthrough() {
    let frames = Arc::new(Mutex::new(Vec::<RosterSnapshot>::new()));
    let sink = Arc::clone(&frames);
    let mut manager = RosterManager::builder()
        .renderer(move |snapshot: &RosterSnapshot| sink.lock().unwrap().push(snapshot.clone()))
        .build();

    manager.add_player("Alice", None);
    manager.add_player("Bob", None);

    manager.distribute_points(10);
    assert_eq!(scores(&manager), vec![5, 5]);

    manager.adjust_score(Target::At(0), 5).unwrap();
    assert_eq!(scores(&manager), vec![10, 5]);

    manager.remove_player(Target::At(0)).unwrap();
    let snapshot = manager.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.rows[0].position, 0);
    assert_eq!(snapshot.rows[0].name, "Bob");
    assert_eq!(snapshot.rows[0].score, 5);

    manager.reset_scores();
    assert_eq!(scores(&manager), vec![0]);

    // initial render + six applied mutations
    let frames = frames.lock().unwrap();
    assert_eq!(frames.len(), 7);
    assert_eq!(frames.last().unwrap(), &manager.snapshot());
}

#[test]
fn stale_positions_fail_without_side_effects() {
    let mut manager = RosterManager::in_memory();
    manager.add_player("Alice", Some(1));
    manager.add_player("Bob", Some(2));
    manager.remove_player(Target::At(1)).unwrap();
    let before = manager.snapshot();

    assert_eq!(
        manager.adjust_score(Target::At(1), 5),
        Err(RosterError::OutOfRange { position: 1, len: 1 })
    );
    assert!(manager.rename_player(Target::At(1), "").is_err());
    assert!(manager.remove_player(Target::At(1)).is_err());

    assert_eq!(manager.snapshot(), before);
}

#[test]
fn stable_ids_follow_players_through_removals() {
    let mut manager = RosterManager::in_memory();
    manager.add_player("Alice", None);
    manager.add_player("Bob", None);
    manager.add_player("Carol", None);

    let ids: Vec<_> = manager.snapshot().rows.iter().map(|row| row.id).collect();
    manager.remove_player(Target::Id(ids[0])).unwrap();

    manager.adjust_score(Target::Id(ids[2]), 4).unwrap();
    manager.rename_player(Target::Id(ids[1]), "Robert").unwrap();

    let snapshot = manager.snapshot();
    assert_eq!(snapshot.rows[0].name, "Robert");
    assert_eq!(snapshot.rows[1].name, "Carol");
    assert_eq!(snapshot.rows[1].score, 4);
    assert_eq!(
        manager.adjust_score(Target::Id(ids[0]), 1),
        Err(RosterError::UnknownPlayer(ids[0]))
    );
}

#[test]
fn distribution_over_various_roster_sizes() {
    for count in 1..=7i64 {
        for total in [-23i64, -1, 0, 1, 10, 99] {
            let mut manager = RosterManager::in_memory();
            for n in 0..count {
                manager.add_player(&format!("P{}", n), Some(n));
            }

            manager.distribute_points(total);

            let share = total.div_euclid(count);
            let expected: Vec<i64> = (0..count).map(|n| n + share).collect();
            assert_eq!(scores(&manager), expected, "total {} over {}", total, count);
        }
    }
}

#[test]
fn empty_roster_operations_are_forgiving() {
    let mut manager = RosterManager::in_memory();

    assert_eq!(
        manager.distribute_points(10),
        Outcome::Skipped(SkipReason::EmptyRoster)
    );
    assert!(manager.reset_scores().is_applied());
    assert!(matches!(
        manager.remove_player(Target::At(0)),
        Err(RosterError::OutOfRange { position: 0, len: 0 })
    ));
    assert!(manager.is_empty());
}
