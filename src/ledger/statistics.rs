use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::LedgerError;

/// 사용 통계. 각 카운터는 해당 사건마다 정확히 한 번씩 증가한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    calculations: u64,
    #[serde(default)]
    conversions: u64,
    #[serde(default)]
    errors: u64,
}

impl Statistics {
    pub fn calculations(&self) -> u64 {
        self.calculations
    }

    pub fn conversions(&self) -> u64 {
        self.conversions
    }

    pub fn errors(&self) -> u64 {
        self.errors
    }

    pub fn record_calculation(&mut self) {
        self.calculations = self.calculations.saturating_add(1);
    }

    pub fn record_conversion(&mut self) {
        self.conversions = self.conversions.saturating_add(1);
    }

    pub fn record_error(&mut self) {
        self.errors = self.errors.saturating_add(1);
    }

    /// 통계 파일을 읽는다. 없거나 깨져 있으면 0부터 시작한다.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let parsed = fs::read_to_string(path)
            .map_err(LedgerError::from)
            .and_then(|content| serde_json::from_str::<Self>(&content).map_err(LedgerError::from));
        parsed.unwrap_or_else(|e| {
            warn!(
                "event=stats_load status=fallback path={} error={e}",
                path.display()
            );
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), LedgerError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
