use serde::{Deserialize, Serialize};

use super::ScaleUnit;

/// 길이 단위. 내부 기준은 미터이며 배율은 "기준 1m 당 해당 단위 수"이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Foot,
    Inch,
}

impl ScaleUnit for LengthUnit {
    const ALL: &'static [Self] = &[
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Centimeter,
        LengthUnit::Millimeter,
        LengthUnit::Mile,
        LengthUnit::Foot,
        LengthUnit::Inch,
    ];

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Mile => "mi",
            LengthUnit::Foot => "ft",
            LengthUnit::Inch => "in",
        }
    }

    fn factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 0.001,
            LengthUnit::Centimeter => 100.0,
            LengthUnit::Millimeter => 1000.0,
            LengthUnit::Mile => 0.000621371,
            LengthUnit::Foot => 3.28084,
            LengthUnit::Inch => 39.3701,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "metre" => Some(LengthUnit::Meter),
            "km" | "kilometer" => Some(LengthUnit::Kilometer),
            "cm" | "centimeter" => Some(LengthUnit::Centimeter),
            "mm" | "millimeter" => Some(LengthUnit::Millimeter),
            "mi" | "mile" => Some(LengthUnit::Mile),
            "ft" | "foot" | "feet" => Some(LengthUnit::Foot),
            "in" | "inch" => Some(LengthUnit::Inch),
            _ => None,
        }
    }
}
