use super::*;
use crate::state::tents::test_helpers::tent;
use crate::state::ui::Modal;

fn form(existing: &[&str]) -> TentForm {
    TentForm::new(Movement::Sgdf, existing.iter().map(|s| (*s).to_owned()))
}

fn blacklist(form: &TentForm) -> Vec<&str> {
    form.blacklist().iter().map(String::as_str).collect()
}

// =============================================================================
// defaults
// =============================================================================

#[test]
fn new_form_uses_field_defaults() {
    let f = form(&[]);
    assert_eq!(f.identifier(), "");
    assert_eq!(f.state, TentState::Neuf);
    assert_eq!(f.unit, Unit::Groupe);
    assert_eq!(f.size.places(), 6);
    assert!(f.complete);
    assert!(!f.integrated);
    assert_eq!(f.tent_type, TentType::Canadienne);
    assert_eq!(f.comments, "");
    assert_eq!(f.phase(), SubmitPhase::Idle);
    assert_eq!(f.submit_label(), "Ajouter");
}

#[test]
fn unit_options_follow_movement() {
    let f = TentForm::new(Movement::Eedf, Vec::new());
    assert_eq!(f.unit_options(), Movement::Eedf.units());
    assert_eq!(f.unit_options()[0], Unit::Groupe);
}

// =============================================================================
// identifier + blacklist
// =============================================================================

#[test]
fn empty_identifier_disables_submit() {
    let mut f = form(&[]);
    assert_eq!(f.status(), IdentifierStatus::Empty);
    assert!(!f.can_submit());
    f.set_identifier("a");
    f.set_identifier("");
    assert_eq!(f.status(), IdentifierStatus::Empty);
    assert!(!f.can_submit());
}

#[test]
fn identifier_is_uppercased_on_every_keystroke() {
    let mut f = form(&[]);
    f.set_identifier("b7");
    assert_eq!(f.identifier(), "B7");
}

#[test]
fn lowercase_duplicate_is_taken() {
    let mut f = form(&["AB", "12"]);
    f.set_identifier("ab");
    assert_eq!(f.identifier(), "AB");
    assert_eq!(f.status(), IdentifierStatus::Taken);
    assert!(!f.can_submit());
}

#[test]
fn fresh_identifier_is_available() {
    let mut f = form(&["AB"]);
    f.set_identifier("CD");
    assert_eq!(f.status(), IdentifierStatus::Available);
    assert!(f.can_submit());
}

#[test]
fn numeric_duplicate_is_taken() {
    let mut f = form(&["AB", "12"]);
    f.set_identifier("12");
    assert_eq!(f.status(), IdentifierStatus::Taken);
}

#[test]
fn alphabetic_value_replaces_other_alphabetic_entries() {
    let mut f = form(&["AB", "12", "C3"]);
    f.set_identifier("x");
    assert_eq!(blacklist(&f), vec!["12", "C3", "X"]);
    f.set_identifier("xy");
    assert_eq!(blacklist(&f), vec!["12", "C3", "XY"]);
}

#[test]
fn non_alphabetic_value_leaves_blacklist_untouched() {
    let mut f = form(&["AB", "12"]);
    f.set_identifier("A1");
    assert_eq!(blacklist(&f), vec!["AB", "12"]);
    f.set_identifier("");
    assert_eq!(blacklist(&f), vec!["AB", "12"]);
}

#[test]
fn blacklist_holds_at_most_one_alphabetic_entry() {
    let mut f = form(&["AB", "CD", "12"]);
    for raw in ["e", "ef", "efg", "z"] {
        f.set_identifier(raw);
        let alpha = f.blacklist().iter().filter(|e| is_alpha(e)).count();
        assert_eq!(alpha, 1, "after typing {raw}");
    }
}

#[test]
fn non_ascii_letters_are_not_alphabetic() {
    assert!(is_alpha("AB"));
    assert!(!is_alpha(""));
    assert!(!is_alpha("É"));
    assert!(!is_alpha("A B"));
}

// =============================================================================
// submit lifecycle
// =============================================================================

#[test]
fn begin_submit_builds_request_and_disables_submit() {
    let mut f = form(&["AB"]);
    f.set_identifier("cd");
    f.size = TentSize::new(8).unwrap();
    f.unit = Unit::Compagnons;
    f.comments = "Sardines manquantes".to_owned();

    let req = f.begin_submit().expect("submit should be enabled");
    assert_eq!(req.identifying_string, "CD");
    assert_eq!(req.size.places(), 8);
    assert_eq!(req.unit, Unit::Compagnons);
    assert_eq!(req.comments, "Sardines manquantes");
    assert!(req.complete);

    assert_eq!(f.phase(), SubmitPhase::Submitting);
    assert_eq!(f.submit_label(), "Ajout ...");
    assert!(!f.can_submit());
    assert!(f.begin_submit().is_none());
}

#[test]
fn begin_submit_refuses_taken_identifier() {
    let mut f = form(&["AB"]);
    f.set_identifier("AB");
    assert!(f.begin_submit().is_none());
    assert_eq!(f.phase(), SubmitPhase::Idle);
}

#[test]
fn success_closes_modal_with_success_toast_and_one_invalidation() {
    let mut f = form(&["AB"]);
    let mut toasts = ToastState::default();
    let mut tents = TentsState::default();
    let mut ui = UiState::default();
    ui.open(Modal::AddTent);

    f.set_identifier("CD");
    f.begin_submit().unwrap();
    let loading = toasts.push(ToastKind::Loading, LOADING_MESSAGE);

    let settlement = f.settle(&Ok(tent("CD")));
    settlement.apply(&mut toasts, loading, &mut tents, &mut ui);

    assert_eq!(tents.generation, 1);
    assert!(!ui.is_open(Modal::AddTent));
    assert_eq!(toasts.toasts.len(), 1);
    assert_eq!(toasts.toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts.toasts[0].message, SUCCESS_MESSAGE);
    assert_eq!(f.phase(), SubmitPhase::Idle);
}

#[test]
fn failure_keeps_modal_open_with_single_error_toast() {
    let mut f = form(&["AB"]);
    let mut toasts = ToastState::default();
    let mut tents = TentsState::default();
    let mut ui = UiState::default();
    ui.open(Modal::AddTent);

    f.set_identifier("CD");
    f.begin_submit().unwrap();
    let loading = toasts.push(ToastKind::Loading, LOADING_MESSAGE);

    let settlement = f.settle(&Err("L'identifiant CD est déjà attribué à une tente.".to_owned()));
    settlement.apply(&mut toasts, loading, &mut tents, &mut ui);

    assert_eq!(tents.generation, 1);
    assert!(ui.is_open(Modal::AddTent));
    assert_eq!(toasts.toasts.len(), 1);
    assert_eq!(toasts.toasts[0].kind, ToastKind::Error);
    assert_eq!(toasts.toasts[0].message, "L'identifiant CD est déjà attribué à une tente.");
    assert!(f.can_submit());
}

#[test]
fn cancelled_request_success_leaves_reopened_modal_open() {
    let mut toasts = ToastState::default();
    let mut tents = TentsState::default();
    let mut ui = UiState::default();

    // Submitted, cancelled, then the modal was opened again for a new draft.
    let loading = toasts.push(ToastKind::Loading, LOADING_MESSAGE);
    ui.open(Modal::AddTent);

    let settlement = Settlement::detached(&Ok(tent("CD")));
    let id = settlement.apply(&mut toasts, loading, &mut tents, &mut ui);

    assert!(ui.is_open(Modal::AddTent));
    assert_eq!(tents.generation, 1);
    assert_eq!(toasts.toasts.len(), 1);
    assert_eq!(toasts.toasts[0].id, id);
    assert_eq!(toasts.toasts[0].kind, ToastKind::Success);
}

#[test]
fn cancelled_request_failure_still_reports_once() {
    let mut toasts = ToastState::default();
    let mut tents = TentsState::default();
    let mut ui = UiState::default();

    let loading = toasts.push(ToastKind::Loading, LOADING_MESSAGE);
    let settlement = Settlement::detached(&Err("Hors ligne".to_owned()));
    settlement.apply(&mut toasts, loading, &mut tents, &mut ui);

    assert_eq!(tents.generation, 1);
    assert_eq!(toasts.toasts.len(), 1);
    assert_eq!(toasts.toasts[0].kind, ToastKind::Error);
    assert_eq!(toasts.toasts[0].message, "Hors ligne");
}

#[test]
fn empty_error_message_falls_back_to_generic() {
    let settlement = Settlement::from_result(&Err("  ".to_owned()));
    assert_eq!(settlement.toast_message, GENERIC_ERROR_MESSAGE);
    assert!(!settlement.close_modal);
}

#[test]
fn identifier_status_css_modifiers() {
    assert_eq!(IdentifierStatus::Empty.css_modifier(), "is-empty");
    assert_eq!(IdentifierStatus::Available.css_modifier(), "is-available");
    assert_eq!(IdentifierStatus::Taken.css_modifier(), "is-taken");
}
