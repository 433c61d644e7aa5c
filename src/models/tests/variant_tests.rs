use super::*;
use crate::models::ip::IpRating;

fn variant() -> Variant {
    Variant {
        row_id: 1,
        category: "LED DOWN LIGHT".to_string(),
        product_type: "downlight".to_string(),
        sku: "DL-20-44".to_string(),
        price: 100.0,
        power_w: Some(20.0),
        power_w_per_m: None,
        lumen: Some(2200.0),
        ip_rating: Some(IpRating::new(4, 4)),
        length_mm: None,
        width_mm: None,
        height_mm: None,
        diameter_mm: Some(90.0),
        dimming: String::new(),
        cct_k: Some(4000.0),
        beam_deg: Some(60.0),
        shape: Shape::Round,
        is_emergency: false,
        is_dali: false,
        search_text: "led downlight recessed".to_string(),
        raw_fields: Default::default(),
    }
}

#[test]
fn test_efficacy_derivation() {
    assert_eq!(variant().efficacy(), Some(110.0));

    let mut no_lumen = variant();
    no_lumen.lumen = None;
    assert!(no_lumen.efficacy().is_none());

    let mut zero_power = variant();
    zero_power.power_w = Some(0.0);
    assert!(zero_power.efficacy().is_none());
}

#[test]
fn test_display_name() {
    assert_eq!(variant().display_name(), "LED DOWN LIGHT | 20W | IP44");
}
