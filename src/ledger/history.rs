use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::LedgerError;

/// 저장 시 남기는 최근 기록 수.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 기록 종류. JSON에는 소문자(`calculation`/`conversion`)로 저장된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Calculation,
    Conversion,
}

impl EntryKind {
    /// 화면/내보내기용 대문자 태그.
    pub fn tag(&self) -> &'static str {
        match self {
            EntryKind::Calculation => "CALCULATION",
            EntryKind::Conversion => "CONVERSION",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Calculation => "calculation",
            EntryKind::Conversion => "conversion",
        }
    }
}

/// 성공한 계산/변환 한 건. 생성 후에는 바뀌지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    expression: String,
    result: String,
    timestamp: String,
    #[serde(rename = "type", default)]
    kind: EntryKind,
}

impl HistoryEntry {
    /// 현재 로컬 시각으로 기록을 만든다.
    pub fn new(kind: EntryKind, expression: impl Into<String>, result: impl Into<String>) -> Self {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::with_timestamp(kind, expression, result, timestamp)
    }

    pub fn with_timestamp(
        kind: EntryKind,
        expression: impl Into<String>,
        result: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            timestamp: timestamp.into(),
            kind,
        }
    }

    pub fn calculation(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self::new(EntryKind::Calculation, expression, result)
    }

    pub fn conversion(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self::new(EntryKind::Conversion, expression, result)
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[{}] {}", self.kind.tag(), self.timestamp)?;
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// 시간순으로 쌓이는 계산 기록.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// 오래된 것부터 전체 기록.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// 최근 `n`건을 최신순으로 돌려준다.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev().take(n)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 기록 파일을 읽는다. 파일이 없거나 깨져 있으면 빈 기록으로 시작한다.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::new();
        }
        let parsed = fs::read_to_string(path)
            .map_err(LedgerError::from)
            .and_then(|content| {
                serde_json::from_str::<Vec<HistoryEntry>>(&content).map_err(LedgerError::from)
            });
        match parsed {
            Ok(entries) => Self { entries },
            Err(e) => {
                warn!(
                    "event=history_load status=fallback path={} error={e}",
                    path.display()
                );
                Self::new()
            }
        }
    }

    /// 최근 `limit`건만 JSON 배열로 저장한다. 메모리의 기록은 줄이지 않는다.
    pub fn save(&self, path: &Path, limit: usize) -> Result<(), LedgerError> {
        let start = self.entries.len().saturating_sub(limit);
        let content = serde_json::to_string_pretty(&self.entries[start..])?;
        fs::write(path, content)?;
        Ok(())
    }
}
