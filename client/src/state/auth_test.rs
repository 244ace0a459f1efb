use super::*;

fn group() -> Group {
    Group {
        id: "g1".to_owned(),
        name: "Saint-Michel".to_owned(),
        email: "chefs@stmichel.fr".to_owned(),
        movement: Movement::Eedf,
    }
}

#[test]
fn default_is_loading_without_group() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.group.is_none());
    assert_eq!(state.movement(), None);
}

#[test]
fn resolve_with_group_exposes_name_and_movement() {
    let mut state = AuthState::default();
    state.resolve(Some(group()));
    assert!(!state.loading);
    assert_eq!(state.group_name(), Some("Saint-Michel"));
    assert_eq!(state.movement(), Some(Movement::Eedf));
}

#[test]
fn resolve_without_group_stops_loading() {
    let mut state = AuthState::default();
    state.resolve(None);
    assert!(!state.loading);
    assert_eq!(state.group_name(), None);
}
