use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Loading, "a");
    let b = state.push(ToastKind::Success, "b");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn replace_keeps_single_toast() {
    let mut state = ToastState::default();
    let id = state.push(ToastKind::Loading, "Ajout en cours ...");
    let replaced = state.replace(id, ToastKind::Error, "Oups");
    assert_eq!(replaced, id);
    assert_eq!(state.toasts, vec![Toast { id, kind: ToastKind::Error, message: "Oups".to_owned() }]);
}

#[test]
fn replace_after_dismiss_pushes_new_toast() {
    let mut state = ToastState::default();
    let id = state.push(ToastKind::Loading, "x");
    state.dismiss(id);
    let replaced = state.replace(id, ToastKind::Success, "ok");
    assert_ne!(replaced, id);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "ok");
    state.dismiss(42);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn only_settled_toasts_expire() {
    assert_eq!(ToastKind::Loading.ttl_ms(), None);
    assert_eq!(ToastKind::Success.ttl_ms(), Some(SUCCESS_TTL_MS));
    assert_eq!(ToastKind::Error.ttl_ms(), Some(ERROR_TTL_MS));
}
