use super::*;
use crate::state::tents::test_helpers::tent;
use inventory::TentSize;

#[test]
fn empty_collection_lists_every_state_and_unit_at_zero() {
    let overview = TentOverview::compute(Movement::Eedf, &[]);
    assert_eq!(overview.total, 0);
    assert_eq!(overview.capacity, 0);
    assert_eq!(overview.by_state.len(), TentState::ALL.len());
    assert!(overview.by_state.iter().all(|(_, n)| *n == 0));
    let units: Vec<Unit> = overview.by_unit.iter().map(|(u, _)| *u).collect();
    assert_eq!(units, Movement::Eedf.units());
}

#[test]
fn counts_capacity_incomplete_and_groupings() {
    let mut a = tent("A");
    a.size = TentSize::new(8).unwrap();
    let mut b = tent("B");
    b.size = TentSize::new(0).unwrap();
    b.complete = false;
    b.state = TentState::Hs;
    b.unit = Unit::Lutins;
    let c = tent("C");

    let overview = TentOverview::compute(Movement::Eedf, &[a, b, c]);
    assert_eq!(overview.total, 3);
    assert_eq!(overview.capacity, 8 + 6);
    assert_eq!(overview.incomplete, 1);
    assert!(overview.by_state.contains(&(TentState::Bon, 2)));
    assert!(overview.by_state.contains(&(TentState::Hs, 1)));
    assert!(overview.by_unit.contains(&(Unit::Groupe, 2)));
    assert!(overview.by_unit.contains(&(Unit::Lutins, 1)));
}

#[test]
fn unit_outside_movement_is_still_counted() {
    let mut t = tent("Z");
    t.unit = Unit::Compagnons;
    let overview = TentOverview::compute(Movement::Suf, &[t]);
    assert_eq!(overview.by_unit.last(), Some(&(Unit::Compagnons, 1)));
}
