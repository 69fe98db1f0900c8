use serde::{Deserialize, Serialize};

use super::ScaleUnit;

/// 무게 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    Kilogram,
    Gram,
    Milligram,
    Pound,
    Ounce,
}

impl ScaleUnit for WeightUnit {
    const ALL: &'static [Self] = &[
        WeightUnit::Kilogram,
        WeightUnit::Gram,
        WeightUnit::Milligram,
        WeightUnit::Pound,
        WeightUnit::Ounce,
    ];

    fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kg",
            WeightUnit::Gram => "g",
            WeightUnit::Milligram => "mg",
            WeightUnit::Pound => "lb",
            WeightUnit::Ounce => "oz",
        }
    }

    fn factor(self) -> f64 {
        match self {
            WeightUnit::Kilogram => 1.0,
            WeightUnit::Gram => 1000.0,
            WeightUnit::Milligram => 1_000_000.0,
            WeightUnit::Pound => 2.20462,
            WeightUnit::Ounce => 35.274,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kilogram" => Some(WeightUnit::Kilogram),
            "g" | "gram" => Some(WeightUnit::Gram),
            "mg" | "milligram" => Some(WeightUnit::Milligram),
            "lb" | "lbs" | "pound" => Some(WeightUnit::Pound),
            "oz" | "ounce" => Some(WeightUnit::Ounce),
            _ => None,
        }
    }
}
