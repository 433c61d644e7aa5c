use super::*;

#[test]
fn test_parse_valid_ratings() {
    let ip20 = IpRating::parse("IP20").unwrap();
    assert_eq!(ip20.solid, 2);
    assert_eq!(ip20.liquid, 0);

    let ip65 = IpRating::parse("rated IP65 for wet areas").unwrap();
    assert_eq!(ip65.solid, 6);
    assert_eq!(ip65.liquid, 5);
    assert_eq!(ip65.numeric_value(), 65);
}

#[test]
fn test_parse_tolerates_case_and_spacing() {
    assert_eq!(IpRating::parse("ip44").unwrap().numeric_value(), 44);
    assert_eq!(IpRating::parse("IP 66").unwrap().numeric_value(), 66);
}

#[test]
fn test_parse_requires_both_digits() {
    assert!(IpRating::parse("IP6").is_none());
    assert!(IpRating::parse("no rating here").is_none());
    assert!(IpRating::parse("").is_none());
}

#[test]
fn test_meets_compares_digits_independently() {
    let ip20 = IpRating::new(2, 0);
    let ip65 = IpRating::new(6, 5);

    assert!(ip65.meets(&ip20));
    assert!(!ip20.meets(&ip65));

    // IP58 has a higher combined value than IP65's liquid digit alone would
    // suggest, but its solid digit fails the requirement.
    let ip58 = IpRating::new(5, 8);
    assert!(!ip58.meets(&ip65));
    assert!(!ip65.meets(&ip58));
}

#[test]
fn test_meets_is_reflexive() {
    for (solid, liquid) in [(2, 0), (4, 4), (6, 5), (6, 8)] {
        let rating = IpRating::new(solid, liquid);
        assert!(rating.meets(&rating));
    }
}

#[test]
fn test_display_normalizes_raw_text() {
    let rating = IpRating::parse("ip 65").unwrap();
    assert_eq!(rating.to_string(), "IP65");
    assert_eq!(rating.raw, "ip 65");
}
