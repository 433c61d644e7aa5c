use super::*;

#[test]
fn test_default_is_dry_indoor() {
    assert_eq!(infer_environment("20w downlight"), Environment::DryIndoor);
    assert_eq!(Environment::default(), Environment::DryIndoor);
}

#[test]
fn test_wet_keywords_win_over_damp() {
    // "shower" (wet) appears alongside "bathroom" (damp); wet is earlier in
    // the detection order.
    assert_eq!(
        infer_environment("bathroom shower light"),
        Environment::WetIndoor
    );
}

#[test]
fn test_outdoor_detection() {
    assert_eq!(
        infer_environment("facade wash luminaire"),
        Environment::ExposedOutdoor
    );
    assert_eq!(
        infer_environment("balcony pendant"),
        Environment::CoveredOutdoor
    );
}

#[test]
fn test_min_ip_table() {
    assert_eq!(Environment::DryIndoor.min_ip().numeric_value(), 20);
    assert_eq!(Environment::DampIndoor.min_ip().numeric_value(), 44);
    assert_eq!(Environment::WetIndoor.min_ip().numeric_value(), 65);
    assert_eq!(Environment::CoveredOutdoor.min_ip().numeric_value(), 44);
    assert_eq!(Environment::ExposedOutdoor.min_ip().numeric_value(), 65);
    assert_eq!(Environment::Industrial.min_ip().numeric_value(), 65);
    assert_eq!(Environment::Hazardous.min_ip().numeric_value(), 66);
    assert_eq!(Environment::Submersible.min_ip().numeric_value(), 68);
}
