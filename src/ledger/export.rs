use std::fs;
use std::path::Path;

use super::history::HistoryEntry;
use super::LedgerError;

/// 내보내기 형식. 확장자가 `.csv`이면 CSV, 그 외는 텍스트.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Text,
}

impl ExportFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Text,
        }
    }
}

/// 기록 전체를 파일로 내보낸다. 사용한 형식을 돌려준다.
pub fn export_history(entries: &[HistoryEntry], path: &Path) -> Result<ExportFormat, LedgerError> {
    let format = ExportFormat::for_path(path);
    let content = match format {
        ExportFormat::Csv => render_csv(entries),
        ExportFormat::Text => render_text(entries),
    };
    fs::write(path, content)?;
    Ok(format)
}

pub fn render_csv(entries: &[HistoryEntry]) -> String {
    let mut out = String::from("Timestamp,Type,Expression,Result\r\n");
    for e in entries {
        let row = [e.timestamp(), e.kind().as_str(), e.expression(), e.result()]
            .iter()
            .map(|field| csv_field(field))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&row);
        out.push_str("\r\n");
    }
    out
}

/// 구분자/따옴표/줄바꿈이 있는 필드만 따옴표로 감싼다.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn render_text(entries: &[HistoryEntry]) -> String {
    let mut out = String::from("Calculator History Export\n");
    out.push_str(&"=".repeat(60));
    out.push_str("\n\n");
    for e in entries {
        out.push_str(&format!("{e}\n\n"));
    }
    out
}
