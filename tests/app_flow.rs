//! 대화형 루프의 종료 처리 테스트.
use std::io;
use std::process::Command;

use advanced_calculator::app::{end_on_eof, AppError};
use advanced_calculator::expr::EvalError;

#[test]
fn closed_input_ends_the_loop() {
    let eof = Err(AppError::Io(io::Error::from(io::ErrorKind::UnexpectedEof)));
    assert!(matches!(end_on_eof(eof), Ok(false)));
}

#[test]
fn normal_steps_pass_through() {
    assert!(matches!(end_on_eof(Ok(true)), Ok(true)));
    assert!(matches!(end_on_eof(Ok(false)), Ok(false)));
}

#[test]
fn other_errors_are_kept() {
    let denied = Err(AppError::Io(io::Error::from(io::ErrorKind::PermissionDenied)));
    match end_on_eof(denied) {
        Err(AppError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
        other => panic!("expected I/O error, got {other:?}"),
    }
    let eval = Err(AppError::Evaluation(EvalError::DivisionByZero));
    assert!(matches!(end_on_eof(eval), Err(AppError::Evaluation(_))));
}

#[test]
fn help_describes_the_calculator() {
    let output = Command::new(env!("CARGO_BIN_EXE_advanced_calculator"))
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());
    let help = String::from_utf8_lossy(&output.stdout);
    assert!(help.contains("과학 함수"), "{help}");
    assert!(!help.contains("공학 계산을 제공"), "{help}");
}
