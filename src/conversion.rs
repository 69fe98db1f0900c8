use log::debug;

use crate::error::ErrorKind;
use crate::quantity::ConversionDomain;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 알 수 없는 도메인 이름
    InvalidDomain(String),
    /// 도메인에 등록되지 않은 단위
    InvalidUnit {
        domain: ConversionDomain,
        unit: String,
    },
    /// NaN 또는 무한대 입력
    NonFiniteInput(f64),
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::InvalidDomain(_) => ErrorKind::InvalidDomain,
            ConversionError::InvalidUnit { .. } => ErrorKind::InvalidUnit,
            ConversionError::NonFiniteInput(_) => ErrorKind::NonFiniteInput,
        }
    }
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::InvalidDomain(d) => write!(f, "unsupported conversion type: {d}"),
            ConversionError::InvalidUnit { domain, unit } => {
                write!(f, "unit '{unit}' is not a {domain} unit")
            }
            ConversionError::NonFiniteInput(v) => write!(f, "value must be finite, got {v}"),
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<TableError> for ConversionError {
    fn from(value: TableError) -> Self {
        match value {
            TableError::UnknownDomain(d) => ConversionError::InvalidDomain(d),
            TableError::UnknownUnit { domain, unit } => ConversionError::InvalidUnit { domain, unit },
        }
    }
}

/// 변환 결과. 값과 목표 단위의 표준 기호를 담는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    pub value: f64,
    pub unit: &'static str,
}

impl std::fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} {}", self.value, self.unit)
    }
}

fn parse_unit<U: ScaleUnit>(domain: ConversionDomain, s: &str) -> Result<U, ConversionError> {
    U::parse(s).ok_or_else(|| ConversionError::InvalidUnit {
        domain,
        unit: s.to_string(),
    })
}

fn ensure_finite(value: f64) -> Result<(), ConversionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConversionError::NonFiniteInput(value))
    }
}

/// 배율 변환: 원 단위 배율로 나눠 기준 단위로 만든 뒤 목표 배율을 곱한다.
fn convert_scale<U: ScaleUnit>(
    domain: ConversionDomain,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<ConversionResult, ConversionError> {
    let from: U = parse_unit(domain, from_unit)?;
    let to: U = parse_unit(domain, to_unit)?;
    ensure_finite(value)?;
    let converted = if from == to {
        value
    } else {
        value / from.factor() * to.factor()
    };
    Ok(ConversionResult {
        value: converted,
        unit: to.symbol(),
    })
}

fn convert_temperature_units(
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<ConversionResult, ConversionError> {
    let unknown = |unit: &str| ConversionError::InvalidUnit {
        domain: ConversionDomain::Temperature,
        unit: unit.to_string(),
    };
    let from = TemperatureUnit::parse(from_unit).ok_or_else(|| unknown(from_unit))?;
    let to = TemperatureUnit::parse(to_unit).ok_or_else(|| unknown(to_unit))?;
    ensure_finite(value)?;
    Ok(ConversionResult {
        value: convert_temperature(value, from, to),
        unit: to.symbol(),
    })
}

/// 같은 도메인 안에서 값을 다른 단위로 환산한다.
///
/// 단위 문자열은 `m`, `km`, `lb`, `C`, `USD` 같은 기호나 `meter`, `kelvin` 같은
/// 이름을 대소문자 구분 없이 받는다. 입력과 출력 단위가 같으면 값을 그대로 돌려준다.
pub fn convert(
    domain: ConversionDomain,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<ConversionResult, ConversionError> {
    let result = match domain {
        ConversionDomain::Length => convert_scale::<LengthUnit>(domain, from_unit, to_unit, value),
        ConversionDomain::Weight => convert_scale::<WeightUnit>(domain, from_unit, to_unit, value),
        ConversionDomain::Currency => {
            convert_scale::<CurrencyUnit>(domain, from_unit, to_unit, value)
        }
        ConversionDomain::Temperature => convert_temperature_units(from_unit, to_unit, value),
    }?;
    debug!(
        "convert domain={} from={} to={} value={} result={}",
        domain, from_unit, to_unit, value, result.value
    );
    Ok(result)
}

/// 도메인 이름 문자열을 받아 변환한다. 표시 계층의 입력을 그대로 넘길 때 사용한다.
pub fn convert_named(
    domain: &str,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<ConversionResult, ConversionError> {
    let domain = ConversionDomain::from_name(domain)
        .ok_or_else(|| ConversionError::InvalidDomain(domain.to_string()))?;
    convert(domain, from_unit, to_unit, value)
}
