//! 세션 기록/통계 집계와 버튼 동작 테스트.
use advanced_calculator::error::ErrorKind;
use advanced_calculator::expr::EvalError;
use advanced_calculator::keypad::{self, find_key, KeyAction};
use advanced_calculator::ledger::{EntryKind, LedgerPaths};
use advanced_calculator::session::{format_number, MemoryEvent, Session};
use tempfile::tempdir;

fn press(session: &mut Session, label: &str) -> Result<Option<MemoryEvent>, EvalError> {
    let key = find_key(label).unwrap_or_else(|| panic!("no key {label}"));
    session.apply(key.action)
}

#[test]
fn format_number_outputs() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(4.0), "4");
    assert_eq!(format_number(-2.5), "-2.5");
    assert_eq!(format_number(1e20), "1e20");
    assert_eq!(format_number(1.5e-7), "1.5e-7");
}

#[test]
fn successful_calculation_is_recorded_once() {
    let mut session = Session::new();
    assert_eq!(session.calculate("2+3"), Ok(5.0));
    assert_eq!(session.history().len(), 1);
    let e = &session.history().entries()[0];
    assert_eq!(e.kind(), EntryKind::Calculation);
    assert_eq!(e.expression(), "2+3");
    assert_eq!(e.result(), "5");
    assert_eq!(session.statistics().calculations(), 1);
    assert_eq!(session.statistics().errors(), 0);
}

#[test]
fn failed_calculation_only_counts_error() {
    let mut session = Session::new();
    let err = session.calculate("1/0").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidExpression);
    assert!(session.history().is_empty());
    assert_eq!(session.statistics().calculations(), 0);
    assert_eq!(session.statistics().errors(), 1);
}

#[test]
fn conversion_is_recorded() {
    let mut session = Session::new();
    let r = session.convert("length", 1.0, "km", "m").unwrap();
    assert!((r.value - 1000.0).abs() < 1e-9);
    let e = &session.history().entries()[0];
    assert_eq!(e.kind(), EntryKind::Conversion);
    assert_eq!(e.expression(), "Convert: 1 km to m");
    assert_eq!(e.result(), "1000.0000 m");
    assert_eq!(session.statistics().conversions(), 1);

    let err = session.convert("length", 1.0, "km", "kg").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidUnit);
    assert_eq!(session.statistics().errors(), 1);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn keypad_builds_and_evaluates() {
    let mut session = Session::new();
    for label in ["1", "2", "+", "3", "="] {
        press(&mut session, label).unwrap();
    }
    assert_eq!(session.input().as_str(), "15");
    // 결과에 이어서 계산
    for label in ["*", "2", "="] {
        press(&mut session, label).unwrap();
    }
    assert_eq!(session.input().as_str(), "30");
    assert_eq!(session.statistics().calculations(), 2);
}

#[test]
fn scientific_keys_insert_evaluator_syntax() {
    let mut session = Session::new();
    for label in ["√", "9", ")", "x²", "="] {
        press(&mut session, label).unwrap();
    }
    assert_eq!(session.input().as_str(), "9");

    press(&mut session, "C").unwrap();
    for label in ["ln", "1", ")", "="] {
        press(&mut session, label).unwrap();
    }
    assert_eq!(session.input().as_str(), "0");
}

#[test]
fn failed_evaluate_clears_buffer() {
    let mut session = Session::new();
    for label in ["5", "/", "0"] {
        press(&mut session, label).unwrap();
    }
    assert!(press(&mut session, "=").is_err());
    assert!(session.input().is_empty());
    assert_eq!(session.input().display(), "0");
    assert_eq!(session.statistics().errors(), 1);
}

#[test]
fn clear_and_backspace() {
    let mut session = Session::new();
    session.type_text("123");
    press(&mut session, "←").unwrap();
    assert_eq!(session.input().as_str(), "12");
    press(&mut session, "C").unwrap();
    assert!(session.input().is_empty());
}

#[test]
fn memory_register() {
    let mut session = Session::new();
    session.type_text("6*7");
    assert_eq!(press(&mut session, "M+"), Ok(Some(MemoryEvent::Stored(42.0))));
    assert_eq!(session.memory(), 42.0);

    assert_eq!(press(&mut session, "C"), Ok(None));
    assert_eq!(press(&mut session, "MR"), Ok(Some(MemoryEvent::Recalled(42.0))));
    assert_eq!(session.input().as_str(), "42");

    assert_eq!(press(&mut session, "MC"), Ok(Some(MemoryEvent::Cleared)));
    assert_eq!(session.memory(), 0.0);

    // 빈 입력은 0, 잘못된 입력은 메모리를 바꾸지 않는다
    press(&mut session, "C").unwrap();
    assert_eq!(
        session.apply(KeyAction::MemoryStore),
        Ok(Some(MemoryEvent::Stored(0.0)))
    );
    session.type_text("+");
    assert_eq!(session.apply(KeyAction::MemoryStore), Ok(None));
    assert_eq!(session.memory(), 0.0);
    assert!(session.history().is_empty());
}

#[test]
fn factorial_shortcut_replaces_input() {
    let mut session = Session::new();
    session.type_text("5");
    press(&mut session, "n!").unwrap();
    assert_eq!(session.input().as_str(), "120");
    let e = &session.history().entries()[0];
    assert_eq!(e.expression(), "5!");
    assert_eq!(e.result(), "120");

    session.type_text(".5");
    assert!(session.factorial().is_err());
    assert_eq!(session.statistics().errors(), 1);
}

#[test]
fn reciprocal_shortcut() {
    let mut session = Session::new();
    session.type_text("4");
    assert_eq!(session.reciprocal(), Ok(0.25));
    assert_eq!(session.input().as_str(), "0.25");
    assert_eq!(session.history().entries()[0].expression(), "1/4");

    press(&mut session, "C").unwrap();
    session.type_text("0");
    assert_eq!(session.reciprocal(), Err(EvalError::DivisionByZero));
    assert_eq!(session.statistics().errors(), 1);
}

#[test]
fn persist_and_reopen() {
    let dir = tempdir().unwrap();
    let paths = LedgerPaths::in_dir(dir.path().join("data"));

    let mut session = Session::new();
    session.calculate("1+1").unwrap();
    session.convert("temperature", 100.0, "C", "F").unwrap();
    let _ = session.calculate("bogus");
    session.persist(&paths, 100).unwrap();

    let reopened = Session::open(&paths);
    assert_eq!(reopened.history().len(), 2);
    assert_eq!(reopened.statistics(), session.statistics());
    assert_eq!(reopened.history().entries()[1].result(), "212.0000 F");
}

#[test]
fn clear_history_keeps_counters() {
    let mut session = Session::new();
    session.calculate("2*2").unwrap();
    session.clear_history();
    assert!(session.history().is_empty());
    assert_eq!(session.statistics().calculations(), 1);
}

#[test]
fn keypad_tables() {
    assert_eq!(keypad::BASIC_PAD.len(), 4);
    assert_eq!(keypad::all_keys().count(), 40);
    assert_eq!(find_key("π").map(|k| k.action), Some(KeyAction::Insert("pi")));
    assert_eq!(find_key("log").map(|k| k.action), Some(KeyAction::Insert("log10(")));
    assert_eq!(find_key("%").map(|k| k.action), Some(KeyAction::Insert("/100")));
    assert_eq!(find_key("1/x").map(|k| k.action), Some(KeyAction::Reciprocal));
    assert!(find_key("hello").is_none());
}
