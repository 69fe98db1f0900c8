//! 단위 변환표와 변환기 회귀 테스트.
use advanced_calculator::conversion::{convert, convert_named, ConversionError};
use advanced_calculator::error::ErrorKind;
use advanced_calculator::quantity::ConversionDomain;
use advanced_calculator::units::{
    factor_for, temperature_from_base, temperature_to_base, units_for, units_for_name, TableError,
};

fn close(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn unit_lists_keep_display_order() {
    assert_eq!(
        units_for(ConversionDomain::Length),
        ["m", "km", "cm", "mm", "mi", "ft", "in"]
    );
    assert_eq!(units_for(ConversionDomain::Weight), ["kg", "g", "mg", "lb", "oz"]);
    assert_eq!(units_for(ConversionDomain::Temperature), ["C", "F", "K"]);
    assert_eq!(
        units_for(ConversionDomain::Currency),
        ["USD", "EUR", "RON", "GBP", "JPY"]
    );
}

#[test]
fn unknown_domain_name_is_rejected() {
    assert_eq!(
        units_for_name("volume"),
        Err(TableError::UnknownDomain("volume".to_string()))
    );
    assert!(units_for_name("Length").is_ok());
}

#[test]
fn factors_match_table() {
    assert_eq!(factor_for(ConversionDomain::Length, "km"), Ok(0.001));
    assert_eq!(factor_for(ConversionDomain::Weight, "lb"), Ok(2.20462));
    assert_eq!(factor_for(ConversionDomain::Currency, "JPY"), Ok(149.50));
    assert!(matches!(
        factor_for(ConversionDomain::Length, "kg"),
        Err(TableError::UnknownUnit { .. })
    ));
    // 온도는 배율이 없다
    assert!(matches!(
        factor_for(ConversionDomain::Temperature, "C"),
        Err(TableError::UnknownUnit { .. })
    ));
}

#[test]
fn temperature_base_formulas() {
    assert!((temperature_to_base("F", 212.0).unwrap() - 100.0).abs() < 1e-12);
    assert!((temperature_to_base("K", 0.0).unwrap() + 273.15).abs() < 1e-12);
    assert!((temperature_from_base("F", 100.0).unwrap() - 212.0).abs() < 1e-12);
    assert!((temperature_from_base("K", 0.0).unwrap() - 273.15).abs() < 1e-12);
    assert!(temperature_to_base("R", 0.0).is_err());
}

#[test]
fn scale_domains_round_trip() {
    let values = [0.0, 1.0, -3.5, 1234.5678, 1e-3];
    for domain in [
        ConversionDomain::Length,
        ConversionDomain::Weight,
        ConversionDomain::Currency,
    ] {
        let units = units_for(domain);
        for from in &units {
            for to in &units {
                for &x in &values {
                    let there = convert(domain, from, to, x).unwrap();
                    let back = convert(domain, to, from, there.value).unwrap();
                    assert!(
                        close(back.value, x, 1e-9),
                        "{domain} {from}->{to}->{from}: {x} became {}",
                        back.value
                    );
                }
            }
        }
    }
}

#[test]
fn temperature_known_points() {
    let t = ConversionDomain::Temperature;
    assert!((convert(t, "C", "F", 0.0).unwrap().value - 32.0).abs() < 1e-12);
    assert!((convert(t, "C", "K", 0.0).unwrap().value - 273.15).abs() < 1e-12);
    assert!((convert(t, "F", "C", 212.0).unwrap().value - 100.0).abs() < 1e-12);
    assert!((convert(t, "K", "F", 0.0).unwrap().value + 459.67).abs() < 1e-9);
}

#[test]
fn temperature_round_trip() {
    let t = ConversionDomain::Temperature;
    for x in [-40.0, 0.0, 36.6, 1000.0] {
        let k = convert(t, "F", "K", x).unwrap().value;
        let back = convert(t, "K", "F", k).unwrap().value;
        assert!(close(back, x, 1e-9));
    }
}

#[test]
fn identity_returns_input_exactly() {
    for domain in ConversionDomain::ALL {
        for unit in units_for(domain) {
            for x in [0.1, -7.25, 1e300] {
                assert_eq!(convert(domain, unit, unit, x).unwrap().value, x);
            }
        }
    }
}

#[test]
fn simple_conversions() {
    let km = convert(ConversionDomain::Length, "km", "m", 1.0).unwrap();
    assert!((km.value - 1000.0).abs() < 1e-9);
    assert_eq!(km.unit, "m");
    assert_eq!(km.to_string(), "1000.0000 m");

    let usd = convert(ConversionDomain::Currency, "EUR", "USD", 0.92).unwrap();
    assert!((usd.value - 1.0).abs() < 1e-12);

    let g = convert(ConversionDomain::Weight, "kg", "g", 2.5).unwrap();
    assert!((g.value - 2500.0).abs() < 1e-9);
}

#[test]
fn unit_aliases_are_case_insensitive() {
    let r = convert(ConversionDomain::Length, "Kilometer", "FT", 1.0).unwrap();
    assert_eq!(r.unit, "ft");
    assert!((r.value - 3280.84).abs() < 1e-6);
    let c = convert(ConversionDomain::Currency, "usd", "eur", 100.0).unwrap();
    assert_eq!(c.unit, "EUR");
    assert!((c.value - 92.0).abs() < 1e-9);
}

#[test]
fn conversion_errors_have_kinds() {
    let err = convert_named("volume", "l", "ml", 1.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDomain);

    let err = convert(ConversionDomain::Length, "kg", "m", 1.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidUnit);

    let err = convert(ConversionDomain::Temperature, "C", "X", 1.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidUnit);

    let err = convert(ConversionDomain::Length, "m", "km", f64::NAN).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NonFiniteInput);

    let err = convert(ConversionDomain::Temperature, "C", "K", f64::INFINITY).unwrap_err();
    assert!(matches!(err, ConversionError::NonFiniteInput(_)));
}

#[test]
fn unit_errors_win_over_bad_values() {
    let err = convert(ConversionDomain::Weight, "stone", "kg", f64::NAN).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidUnit);
}
