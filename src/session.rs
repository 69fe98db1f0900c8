//! 표시 계층이 소유하는 실행 컨텍스트.
//!
//! 계산 엔진은 순수 함수로 남기고, 기록/통계/메모리/입력 버퍼 같은 변하는 상태는
//! 모두 [`Session`]이 가진다. 파일 저장은 [`Session::persist`]를 명시적으로 호출할
//! 때만 일어난다.

use log::{debug, info};

use crate::conversion::{self, ConversionError, ConversionResult};
use crate::expr::{self, EvalError};
use crate::keypad::KeyAction;
use crate::ledger::{History, HistoryEntry, LedgerError, LedgerPaths, Statistics};

/// 결과 값을 표시/재입력 가능한 문자열로 만든다.
///
/// 정수는 소수점 없이, 아주 크거나 작은 값은 지수 표기로 쓴다. 출력은 평가기가
/// 다시 읽을 수 있는 형식이다.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();
    if !(1e-6..1e15).contains(&abs) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

/// 메모리 버튼이 실제로 바꾼 내용. 화면 확인 메시지에 쓴다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MemoryEvent {
    Stored(f64),
    Recalled(f64),
    Cleared,
}

/// 사용자가 입력 중인 수식.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// 비어 있으면 "0"을 보여준다.
    pub fn display(&self) -> &str {
        if self.text.is_empty() {
            "0"
        } else {
            &self.text
        }
    }

    pub fn push(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub fn set(&mut self, s: impl Into<String>) {
        self.text = s.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    history: History,
    statistics: Statistics,
    memory: f64,
    input: InputBuffer,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 기록과 통계를 읽어 세션을 시작한다.
    pub fn open(paths: &LedgerPaths) -> Self {
        let session = Self {
            history: History::load(&paths.history),
            statistics: Statistics::load(&paths.statistics),
            ..Self::default()
        };
        info!(
            "event=session_open history_entries={} calculations={} conversions={} errors={}",
            session.history.len(),
            session.statistics.calculations(),
            session.statistics.conversions(),
            session.statistics.errors()
        );
        session
    }

    /// 기록(최근 `history_limit`건)과 통계를 파일에 쓴다.
    pub fn persist(&self, paths: &LedgerPaths, history_limit: usize) -> Result<(), LedgerError> {
        if let Some(dir) = paths.history.parent() {
            std::fs::create_dir_all(dir)?;
        }
        self.history.save(&paths.history, history_limit)?;
        self.statistics.save(&paths.statistics)?;
        debug!("event=session_persist entries={}", self.history.len());
        Ok(())
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        info!("event=history_clear");
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    /// 자유 입력 문자열을 입력 버퍼 뒤에 붙인다.
    pub fn type_text(&mut self, text: &str) {
        self.input.push(text);
    }

    /// 수식을 평가하고 결과를 기록한다. 실패하면 오류 카운터만 올린다.
    pub fn calculate(&mut self, expression: &str) -> Result<f64, EvalError> {
        match expr::evaluate(expression) {
            Ok(value) => {
                self.history
                    .record(HistoryEntry::calculation(expression, format_number(value)));
                self.statistics.record_calculation();
                Ok(value)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// 단위를 변환하고 결과를 기록한다.
    pub fn convert(
        &mut self,
        domain: &str,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<ConversionResult, ConversionError> {
        match conversion::convert_named(domain, from_unit, to_unit, value) {
            Ok(result) => {
                let description = format!(
                    "Convert: {} {} to {}",
                    format_number(value),
                    from_unit.trim(),
                    to_unit.trim()
                );
                self.history
                    .record(HistoryEntry::conversion(description, result.to_string()));
                self.statistics.record_conversion();
                Ok(result)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// 현재 입력 값의 계승을 계산해 입력 버퍼를 결과로 바꾼다.
    pub fn factorial(&mut self) -> Result<f64, EvalError> {
        let outcome = expr::evaluate(self.input.as_str()).and_then(|n| {
            expr::factorial_of(n).map(|r| (format!("{}!", format_number(n)), r))
        });
        self.finish_shortcut(outcome)
    }

    /// 현재 입력 값의 역수를 계산해 입력 버퍼를 결과로 바꾼다.
    pub fn reciprocal(&mut self) -> Result<f64, EvalError> {
        let outcome = expr::evaluate(self.input.as_str()).and_then(|x| {
            expr::reciprocal_of(x).map(|r| (format!("1/{}", format_number(x)), r))
        });
        self.finish_shortcut(outcome)
    }

    fn finish_shortcut(&mut self, outcome: Result<(String, f64), EvalError>) -> Result<f64, EvalError> {
        match outcome {
            Ok((description, value)) => {
                let shown = format_number(value);
                self.history
                    .record(HistoryEntry::calculation(description, shown.clone()));
                self.statistics.record_calculation();
                self.input.set(shown);
                Ok(value)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn fail<E: std::fmt::Display>(&mut self, error: E) -> E {
        self.statistics.record_error();
        info!("event=engine_error error={error}");
        error
    }

    /// 버튼 동작을 입력 버퍼에 적용한다.
    ///
    /// `=`가 성공하면 버퍼는 결과 값으로 바뀌어 이어서 계산할 수 있고, 실패하면
    /// 버퍼를 비운다. 메모리 버튼은 일어난 일을 [`MemoryEvent`]로 돌려주며, 입력을
    /// 평가할 수 없어 저장을 건너뛰면 `None`이다.
    pub fn apply(&mut self, action: KeyAction) -> Result<Option<MemoryEvent>, EvalError> {
        match action {
            KeyAction::Insert(text) => self.input.push(text),
            KeyAction::Clear => self.input.clear(),
            KeyAction::Backspace => self.input.backspace(),
            KeyAction::Evaluate => {
                let expression = self.input.as_str().to_string();
                match self.calculate(&expression) {
                    Ok(value) => self.input.set(format_number(value)),
                    Err(e) => {
                        self.input.clear();
                        return Err(e);
                    }
                }
            }
            KeyAction::MemoryStore => match expr::evaluate(self.input.display()) {
                Ok(value) => {
                    self.memory = value;
                    return Ok(Some(MemoryEvent::Stored(value)));
                }
                Err(e) => debug!("memory store skipped: {e}"),
            },
            KeyAction::MemoryRecall => {
                self.input.set(format_number(self.memory));
                return Ok(Some(MemoryEvent::Recalled(self.memory)));
            }
            KeyAction::MemoryClear => {
                self.memory = 0.0;
                return Ok(Some(MemoryEvent::Cleared));
            }
            KeyAction::Factorial => {
                self.factorial()?;
            }
            KeyAction::Reciprocal => {
                self.reciprocal()?;
            }
        }
        Ok(None)
    }
}
