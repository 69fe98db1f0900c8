//! 계산 기록과 사용 통계를 담는 세션 원장. JSON 파일로 저장한다.

pub mod export;
pub mod history;
pub mod statistics;

pub use export::{export_history, ExportFormat};
pub use history::{EntryKind, History, HistoryEntry, DEFAULT_HISTORY_LIMIT};
pub use statistics::Statistics;

use std::path::{Path, PathBuf};

pub const HISTORY_FILE: &str = "calculator_history.json";
pub const STATISTICS_FILE: &str = "calculator_stats.json";

/// 원장 저장/내보내기 시 발생 가능한 오류.
#[derive(Debug)]
pub enum LedgerError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 직렬화 오류
    Json(serde_json::Error),
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::Io(e) => write!(f, "file I/O error: {e}"),
            LedgerError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<std::io::Error> for LedgerError {
    fn from(value: std::io::Error) -> Self {
        LedgerError::Io(value)
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(value: serde_json::Error) -> Self {
        LedgerError::Json(value)
    }
}

/// 기록/통계 파일 위치.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerPaths {
    pub history: PathBuf,
    pub statistics: PathBuf,
}

impl LedgerPaths {
    /// 데이터 디렉터리 아래 기본 파일명으로 경로를 만든다.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            history: dir.join(HISTORY_FILE),
            statistics: dir.join(STATISTICS_FILE),
        }
    }
}
