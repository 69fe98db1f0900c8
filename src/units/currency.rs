use serde::{Deserialize, Serialize};

use super::ScaleUnit;

/// 통화 단위. 기준은 USD이다.
///
/// 환율은 배포 시점의 예시 값으로 고정되어 있으며 실시간으로 갱신되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrencyUnit {
    Usd,
    Eur,
    Ron,
    Gbp,
    Jpy,
}

impl ScaleUnit for CurrencyUnit {
    const ALL: &'static [Self] = &[
        CurrencyUnit::Usd,
        CurrencyUnit::Eur,
        CurrencyUnit::Ron,
        CurrencyUnit::Gbp,
        CurrencyUnit::Jpy,
    ];

    fn symbol(self) -> &'static str {
        match self {
            CurrencyUnit::Usd => "USD",
            CurrencyUnit::Eur => "EUR",
            CurrencyUnit::Ron => "RON",
            CurrencyUnit::Gbp => "GBP",
            CurrencyUnit::Jpy => "JPY",
        }
    }

    fn factor(self) -> f64 {
        match self {
            CurrencyUnit::Usd => 1.0,
            CurrencyUnit::Eur => 0.92,
            CurrencyUnit::Ron => 4.56,
            CurrencyUnit::Gbp => 0.79,
            CurrencyUnit::Jpy => 149.50,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "USD" | "$" => Some(CurrencyUnit::Usd),
            "EUR" | "€" => Some(CurrencyUnit::Eur),
            "RON" | "LEI" => Some(CurrencyUnit::Ron),
            "GBP" | "£" => Some(CurrencyUnit::Gbp),
            "JPY" | "¥" => Some(CurrencyUnit::Jpy),
            _ => None,
        }
    }
}
