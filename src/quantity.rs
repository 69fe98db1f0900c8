use serde::{Deserialize, Serialize};

/// 변환기가 다루는 물리량(도메인) 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConversionDomain {
    Length,
    Weight,
    Temperature,
    Currency,
}

impl ConversionDomain {
    /// 메뉴 표시 순서대로 나열한 전체 도메인.
    pub const ALL: [ConversionDomain; 4] = [
        ConversionDomain::Length,
        ConversionDomain::Weight,
        ConversionDomain::Temperature,
        ConversionDomain::Currency,
    ];

    /// 도메인 이름(대소문자 무시)을 enum으로 변환한다. 알 수 없으면 None.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "length" => Some(ConversionDomain::Length),
            "weight" | "mass" => Some(ConversionDomain::Weight),
            "temperature" | "temp" => Some(ConversionDomain::Temperature),
            "currency" => Some(ConversionDomain::Currency),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConversionDomain::Length => "length",
            ConversionDomain::Weight => "weight",
            ConversionDomain::Temperature => "temperature",
            ConversionDomain::Currency => "currency",
        }
    }
}

impl std::fmt::Display for ConversionDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
