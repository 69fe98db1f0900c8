//! 계산 엔진(단위 변환, 수식 평가)을 라이브러리로 분리하고, 기록과 표시 계층은
//! 그 위에 얹는다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod error;
pub mod expr;
pub mod i18n;
pub mod keypad;
pub mod ledger;
pub mod logging;
pub mod quantity;
pub mod session;
pub mod ui_cli;
pub mod units;
