//! 단위 정의 및 도메인별 변환표.
//!
//! 배율 도메인(길이/무게/통화)의 factor는 "기준 단위 1 당 해당 단위 수"를 뜻한다.
//! 예: length에서 km = 0.001 (1 m = 0.001 km).

pub mod currency;
pub mod length;
pub mod temperature;
pub mod weight;

pub use currency::CurrencyUnit;
pub use length::LengthUnit;
pub use temperature::{convert_temperature, from_celsius, to_celsius, TemperatureUnit};
pub use weight::WeightUnit;

use crate::quantity::ConversionDomain;

/// 배율 하나로 기준 단위와 연결되는 단위 집합.
pub trait ScaleUnit: Copy + PartialEq + 'static {
    /// 표시 순서대로 나열한 전체 단위.
    const ALL: &'static [Self];

    fn symbol(self) -> &'static str;

    /// 기준 단위 1 당 해당 단위 수.
    fn factor(self) -> f64;

    /// 기호 또는 이름(대소문자 무시)을 단위로 해석한다.
    fn parse(s: &str) -> Option<Self>;
}

/// 변환표 조회 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// 지원하지 않는 도메인 이름
    UnknownDomain(String),
    /// 해당 도메인에 등록되지 않은 단위
    UnknownUnit {
        domain: ConversionDomain,
        unit: String,
    },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::UnknownDomain(d) => write!(f, "unknown conversion domain: {d}"),
            TableError::UnknownUnit { domain, unit } => {
                write!(f, "unknown unit '{unit}' for {domain}")
            }
        }
    }
}

impl std::error::Error for TableError {}

fn symbols<U: ScaleUnit>() -> Vec<&'static str> {
    U::ALL.iter().map(|u| u.symbol()).collect()
}

/// 도메인에 등록된 단위 기호를 표시 순서대로 반환한다.
pub fn units_for(domain: ConversionDomain) -> Vec<&'static str> {
    match domain {
        ConversionDomain::Length => symbols::<LengthUnit>(),
        ConversionDomain::Weight => symbols::<WeightUnit>(),
        ConversionDomain::Currency => symbols::<CurrencyUnit>(),
        ConversionDomain::Temperature => {
            TemperatureUnit::ALL.iter().map(|u| u.symbol()).collect()
        }
    }
}

/// 도메인 이름으로 단위 목록을 조회한다.
pub fn units_for_name(domain: &str) -> Result<Vec<&'static str>, TableError> {
    ConversionDomain::from_name(domain)
        .map(units_for)
        .ok_or_else(|| TableError::UnknownDomain(domain.to_string()))
}

fn scale_factor<U: ScaleUnit>(domain: ConversionDomain, unit: &str) -> Result<f64, TableError> {
    U::parse(unit)
        .map(U::factor)
        .ok_or_else(|| TableError::UnknownUnit {
            domain,
            unit: unit.to_string(),
        })
}

/// 배율 도메인의 단위 배율을 반환한다. 온도는 배율이 없으므로 항상 `UnknownUnit`.
pub fn factor_for(domain: ConversionDomain, unit: &str) -> Result<f64, TableError> {
    match domain {
        ConversionDomain::Length => scale_factor::<LengthUnit>(domain, unit),
        ConversionDomain::Weight => scale_factor::<WeightUnit>(domain, unit),
        ConversionDomain::Currency => scale_factor::<CurrencyUnit>(domain, unit),
        ConversionDomain::Temperature => Err(TableError::UnknownUnit {
            domain,
            unit: unit.to_string(),
        }),
    }
}

fn parse_temperature(unit: &str) -> Result<TemperatureUnit, TableError> {
    TemperatureUnit::parse(unit).ok_or_else(|| TableError::UnknownUnit {
        domain: ConversionDomain::Temperature,
        unit: unit.to_string(),
    })
}

/// 주어진 온도 단위의 값을 섭씨(기준)로 환산한다.
pub fn temperature_to_base(unit: &str, value: f64) -> Result<f64, TableError> {
    Ok(to_celsius(value, parse_temperature(unit)?))
}

/// 섭씨 값을 목표 온도 단위로 환산한다.
pub fn temperature_from_base(unit: &str, value_c: f64) -> Result<f64, TableError> {
    Ok(from_celsius(value_c, parse_temperature(unit)?))
}
