//! Acceptance tests: button-label sequences through classifier and session.
//!
//! Each test drives the same path a keypad click takes at runtime: read a
//! label, classify it, feed the key to the session, apply the emitted
//! commands to a display buffer.

use tcalc::model::classify;
use tcalc::state::{DisplayBuffer, Phase, Session};

/// Press a sequence of button labels and return the session and display.
fn press_sequence(labels: &[&str]) -> (Session, DisplayBuffer) {
    let mut session = Session::new();
    let mut buffer = DisplayBuffer::new();
    for label in labels {
        let key = classify(label).unwrap_or_else(|| panic!("label {:?} must classify", label));
        buffer.apply_all(&session.on_key(key));
    }
    (session, buffer)
}

#[test]
fn addition_round_trip() {
    // GIVEN a fresh calculator
    // WHEN the user presses 5 + 3 =
    // THEN the display shows 8 and the session is showing a result
    let (session, buffer) = press_sequence(&["5", "+", "3", "="]);
    assert_eq!(buffer.value(), "8");
    assert_eq!(session.phase(), Phase::ShowingResult);
}

#[test]
fn display_builds_incrementally_while_typing() {
    let (_, buffer) = press_sequence(&["1", "2", "+", "3", "4"]);
    assert_eq!(buffer.value(), "12+34");
}

#[test]
fn chaining_shows_the_intermediate_result() {
    // WHEN the user presses 5 + 3 *, the pending addition folds first
    let (session, buffer) = press_sequence(&["5", "+", "3", "*"]);
    assert_eq!(buffer.value(), "8*", "display shows the folded result");
    assert_eq!(session.left(), "8");

    // AND the chain continues against the fresh left operand
    let (_, buffer) = press_sequence(&["5", "+", "3", "*", "2", "="]);
    assert_eq!(buffer.value(), "16");
}

#[test]
fn operator_with_no_left_operand_acts_on_zero() {
    let (_, buffer) = press_sequence(&["+", "5", "="]);
    assert_eq!(buffer.value(), "5", "0+5 is 5");

    let (_, buffer) = press_sequence(&["-", "5", "="]);
    assert_eq!(buffer.value(), "-5", "0-5 is -5");
}

#[test]
fn division_by_zero_displays_infinity() {
    let (_, buffer) = press_sequence(&["5", "/", "0", "="]);
    assert_eq!(buffer.value(), "Infinity");

    let (_, buffer) = press_sequence(&["5", "/", "0", "=", "*", "2", "="]);
    assert_eq!(buffer.value(), "Infinity", "infinity propagates through chains");
}

#[test]
fn fresh_calculation_after_result() {
    // A digit in the result phase discards the finished calculation
    let (session, buffer) = press_sequence(&["5", "+", "3", "=", "4", "2", "*", "2", "="]);
    assert_eq!(buffer.value(), "84");
    assert_eq!(session.phase(), Phase::ShowingResult);
}

#[test]
fn point_after_result_continues_from_shown_value() {
    let (session, buffer) = press_sequence(&["5", "+", "3", "=", ".", "5", "+", "1", "="]);
    // 8.5 + 1
    assert_eq!(buffer.value(), "9.5");
    assert_eq!(session.phase(), Phase::ShowingResult);
}

#[test]
fn operator_after_result_chains() {
    let (_, buffer) = press_sequence(&["5", "+", "3", "=", "*", "2", "="]);
    assert_eq!(buffer.value(), "16");
}

#[test]
fn stray_equals_and_operators_are_ignored() {
    // Equals before any operator, equals with no right operand, operator
    // with no right operand: all silent no-ops
    let (_, buffer) = press_sequence(&["=", "5", "=", "+", "=", "*", "3", "="]);
    assert_eq!(buffer.value(), "8");
}

#[test]
fn clear_mid_entry_starts_over() {
    let (session, buffer) = press_sequence(&["5", "+", "3", "C", "2", "*", "2", "="]);
    assert_eq!(buffer.value(), "4");
    assert_eq!(session.phase(), Phase::ShowingResult);

    let (session, buffer) = press_sequence(&["5", "+", "3", "=", "C"]);
    assert_eq!(buffer.value(), "");
    assert_eq!(session.phase(), Phase::EnteringLeft);
}

#[test]
fn decimal_entry_keeps_a_single_point() {
    let (_, buffer) = press_sequence(&["3", ".", ".", "5", ".", "+", "1", "="]);
    // 3.5 + 1, with the stray points ignored
    assert_eq!(buffer.value(), "4.5");
}

#[test]
fn unrecognized_labels_never_reach_the_session() {
    for label in ["%", "x", "00", "±", ""] {
        assert!(
            classify(label).is_none(),
            "label {:?} must not classify; the caller may not dispatch it",
            label
        );
    }
}
