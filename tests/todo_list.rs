// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Scenario tests for the shared list: ordering, ties, permissions,
//! tombstones, and replica merges.

use together_todo::Crdt;
use together_todo::Entry;
use together_todo::EntryId;
use together_todo::Timestamp;
use together_todo::ToDoList;
use together_todo::UserId;
use together_todo::crdt::op::Op;
use together_todo::script::parse_script;

// =============================================================================
// Helper functions
// =============================================================================

fn add(list: &mut ToDoList, entry: i32, user: i32, name: &str, time: i64) {
    list.add_entry(EntryId(entry), UserId(user), name, Timestamp(time));
}

fn remove(list: &mut ToDoList, entry: i32, user: i32, time: i64) {
    list.remove_entry(EntryId(entry), UserId(user), Timestamp(time));
}

fn entries(list: &ToDoList) -> Vec<Entry> {
    return list.iter().cloned().collect();
}

fn name_of(list: &ToDoList, entry: i32) -> Option<String> {
    return list.get(EntryId(entry)).map(|e| e.name.clone());
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn commutativity_across_entries() {
    let mut ab = ToDoList::new();
    add(&mut ab, 1, 7, "A", 10);
    add(&mut ab, 2, 3, "B", 4);

    let mut ba = ToDoList::new();
    add(&mut ba, 2, 3, "B", 4);
    add(&mut ba, 1, 7, "A", 10);

    assert_eq!(entries(&ab), entries(&ba));
}

#[test]
fn commutativity_across_fields() {
    let mut ab = ToDoList::new();
    add(&mut ab, 1, 7, "A", 10);
    ab.mark_done(EntryId(1), UserId(3), Timestamp(2));

    let mut ba = ToDoList::new();
    ba.mark_done(EntryId(1), UserId(3), Timestamp(2));
    add(&mut ba, 1, 7, "A", 10);

    assert_eq!(entries(&ab), entries(&ba));
    assert_eq!(entries(&ab), vec![Entry::done(EntryId(1), "A")]);
}

#[test]
fn idempotence() {
    let mut once = ToDoList::new();
    add(&mut once, 1, 7, "Buy milk", 10);

    let mut twice = ToDoList::new();
    add(&mut twice, 1, 7, "Buy milk", 10);
    add(&mut twice, 1, 7, "Buy milk", 10);

    assert_eq!(entries(&once), entries(&twice));
    assert_eq!(once.digest(), twice.digest());
    assert_eq!(twice.count(), 1);
}

#[test]
fn out_of_order_last_writer_wins() {
    let mut list = ToDoList::new();
    add(&mut list, 1, 7, "A", 10);
    add(&mut list, 1, 7, "B", 5);
    assert_eq!(name_of(&list, 1), Some("A".to_string()));
}

#[test]
fn later_timestamp_overrides_earlier() {
    let mut list = ToDoList::new();
    add(&mut list, 1, 7, "A", 5);
    add(&mut list, 1, 3, "B", 10);
    assert_eq!(name_of(&list, 1), Some("B".to_string()));
}

// =============================================================================
// Tie-breaks
// =============================================================================

#[test]
fn tie_break_is_deterministic() {
    let mut forward = ToDoList::new();
    add(&mut forward, 1, 7, "A", 10);
    add(&mut forward, 1, 3, "B", 10);

    let mut backward = ToDoList::new();
    add(&mut backward, 1, 3, "B", 10);
    add(&mut backward, 1, 7, "A", 10);

    // The greater name wins a timestamp tie, whoever wrote it.
    assert_eq!(name_of(&forward, 1), Some("B".to_string()));
    assert_eq!(entries(&forward), entries(&backward));
}

#[test]
fn removal_wins_timestamp_tie() {
    let mut list = ToDoList::new();
    add(&mut list, 1, 3, "A", 10);
    remove(&mut list, 1, 7, 10);
    assert!(list.get(EntryId(1)).is_none());

    let mut reversed = ToDoList::new();
    remove(&mut reversed, 1, 7, 10);
    add(&mut reversed, 1, 3, "A", 10);
    assert!(reversed.get(EntryId(1)).is_none());
}

#[test]
fn undone_wins_timestamp_tie() {
    let mut list = ToDoList::new();
    add(&mut list, 1, 1, "A", 1);
    list.mark_undone(EntryId(1), UserId(9), Timestamp(4));
    list.mark_done(EntryId(1), UserId(2), Timestamp(4));
    assert_eq!(list.get(EntryId(1)).map(|e| e.done), Some(false));
}

// =============================================================================
// Permissions
// =============================================================================

#[test]
fn permission_exclusion_and_restoration() {
    let mut list = ToDoList::new();
    add(&mut list, 1, 7, "A", 10);

    list.dismiss_user(UserId(7));
    assert!(entries(&list).is_empty());
    assert_eq!(list.count(), 0);

    list.allow_user(UserId(7));
    assert_eq!(entries(&list), vec![Entry::undone(EntryId(1), "A")]);
}

#[test]
fn minimum_user_id_is_an_ordinary_writer() {
    let mut list = ToDoList::new();
    add(&mut list, 1, i32::MIN, "A", 10);
    assert_eq!(list.count(), 1);

    list.dismiss_user(UserId(i32::MIN));
    assert_eq!(list.count(), 0);
    assert!(list.get(EntryId(1)).is_none());

    list.allow_user(UserId(i32::MIN));
    assert_eq!(name_of(&list, 1), Some("A".to_string()));
}

#[test]
fn dismissal_resurrects_older_writes() {
    let mut list = ToDoList::new();
    add(&mut list, 1, 1, "original", 1);
    add(&mut list, 1, 2, "vandalized", 2);
    remove(&mut list, 1, 2, 3);
    assert!(list.get(EntryId(1)).is_none());

    list.dismiss_user(UserId(2));
    assert_eq!(name_of(&list, 1), Some("original".to_string()));
}

#[test]
fn dismissed_user_can_still_write() {
    let mut list = ToDoList::new();
    list.dismiss_user(UserId(7));
    add(&mut list, 1, 7, "queued", 1);
    assert_eq!(list.count(), 0);

    list.allow_user(UserId(7));
    assert_eq!(name_of(&list, 1), Some("queued".to_string()));
}

#[test]
fn dismissal_hides_only_that_users_marks() {
    let mut list = ToDoList::new();
    add(&mut list, 1, 1, "A", 1);
    list.mark_done(EntryId(1), UserId(2), Timestamp(2));
    assert_eq!(list.get(EntryId(1)).map(|e| e.done), Some(true));

    list.dismiss_user(UserId(2));
    assert_eq!(list.get(EntryId(1)).map(|e| e.done), Some(false));
    assert_eq!(list.count(), 1);
}

// =============================================================================
// Tombstones
// =============================================================================

#[test]
fn tombstone_recreation() {
    let mut list = ToDoList::new();
    remove(&mut list, 1, 7, 10);
    add(&mut list, 1, 7, "A", 11);
    assert_eq!(entries(&list), vec![Entry::undone(EntryId(1), "A")]);
}

#[test]
fn stale_add_does_not_undo_removal() {
    let mut list = ToDoList::new();
    remove(&mut list, 1, 7, 10);
    add(&mut list, 1, 3, "A", 9);
    assert!(list.get(EntryId(1)).is_none());
    assert_eq!(list.section_count(), 1);
}

#[test]
fn recreated_entry_keeps_state() {
    let mut list = ToDoList::new();
    add(&mut list, 1, 1, "A", 1);
    list.mark_done(EntryId(1), UserId(1), Timestamp(2));
    remove(&mut list, 1, 1, 3);
    add(&mut list, 1, 1, "A again", 4);
    assert_eq!(entries(&list), vec![Entry::done(EntryId(1), "A again")]);
}

// =============================================================================
// Count and enumeration
// =============================================================================

#[test]
fn count_matches_enumeration() {
    let mut list = ToDoList::new();
    for id in 0..20 {
        add(&mut list, id, id % 3, "item", id as i64);
        assert_eq!(list.count(), list.iter().count());
    }
    for id in (0..20).step_by(2) {
        remove(&mut list, id, 5, 100);
        assert_eq!(list.count(), list.iter().count());
    }
    list.dismiss_user(UserId(5));
    assert_eq!(list.count(), 20);
    assert_eq!(list.count(), list.iter().count());
    list.dismiss_user(UserId(0));
    assert_eq!(list.count(), list.iter().count());
}

#[test]
fn enumeration_is_restartable() {
    let mut list = ToDoList::new();
    add(&mut list, 2, 1, "b", 1);
    add(&mut list, 1, 1, "a", 1);

    let first: Vec<_> = (&list).into_iter().map(|e| e.id).collect();
    let second: Vec<_> = list.iter().map(|e| e.id).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![EntryId(1), EntryId(2)]);
}

// =============================================================================
// Replicas
// =============================================================================

#[test]
fn replicas_converge_after_merge() {
    let mut alice = ToDoList::new();
    let mut bob = ToDoList::new();

    add(&mut alice, 1, 1, "milk", 1);
    add(&mut bob, 1, 2, "eggs", 1);
    bob.mark_done(EntryId(1), UserId(2), Timestamp(2));
    remove(&mut alice, 2, 1, 5);
    add(&mut bob, 2, 2, "bread", 4);

    let mut left = alice.clone();
    left.merge(&bob);
    let mut right = bob.clone();
    right.merge(&alice);

    assert_eq!(left.digest(), right.digest());
    assert_eq!(entries(&left), vec![Entry::done(EntryId(1), "milk")]);

    let before = left.digest();
    left.merge(&bob);
    assert_eq!(left.digest(), before);
}

#[test]
fn merge_matches_single_replica_history() {
    let ops = vec![
        Op::add(EntryId(1), UserId(1), "a", Timestamp(3)),
        Op::add(EntryId(1), UserId(2), "b", Timestamp(3)),
        Op::mark_done(EntryId(2), UserId(2), Timestamp(1)),
        Op::add(EntryId(2), UserId(3), "c", Timestamp(0)),
        Op::remove(EntryId(3), UserId(1), Timestamp(9)),
    ];

    let mut whole = ToDoList::new();
    whole.extend(ops.iter().cloned());

    let mut left = ToDoList::new();
    let mut right = ToDoList::new();
    for (i, op) in ops.iter().enumerate() {
        if i % 2 == 0 {
            left.apply(op);
        } else {
            right.apply(op);
        }
    }
    left.merge(&right);

    assert_eq!(entries(&left), entries(&whole));
}

#[test]
fn script_replay() {
    let log = parse_script(
        "add 1 7 10 Buy milk\n\
         add 2 3 10 Walk dog\n\
         done 2 3 11\n\
         # user 7 is revoked\n\
         dismiss 7\n",
    )
    .unwrap();

    let mut list = ToDoList::new();
    list.replay(&log);
    assert_eq!(entries(&list), vec![Entry::done(EntryId(2), "Walk dog")]);
}
