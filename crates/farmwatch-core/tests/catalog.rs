//! Region catalog lookup tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use farmwatch_core::error::ClientCode;
use farmwatch_core::region::{Region, RegionCatalog};

#[test]
fn builtin_has_three_regions() {
    let cat = RegionCatalog::builtin();
    assert_eq!(cat.len(), 3);
    assert_eq!(cat.ids(), vec!["coastal", "nagpur", "nashik"]);
}

#[test]
fn nashik_record_verbatim() {
    let cat = RegionCatalog::builtin();
    let r = cat.get("nashik").unwrap();
    let v = serde_json::to_value(r).unwrap();
    assert_eq!(
        v,
        serde_json::json!({
            "id": "nashik",
            "name": "Nashik Region",
            "ndvi": 0.72,
            "rain_forecast_48h": 15.0,
            "soil_moisture": 0.40,
            "drought_score": 2,
            "pest_risk": 0.1,
            "recommendation": "Good crop health. Rain predicted.",
            "action": "DELAY FERTILIZER"
        })
    );
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    let cat = RegionCatalog::builtin();
    for id in ["Nagpur", "NASHIK", "nag", "", "coastal "] {
        let err = cat.get(id).expect_err("must be not found");
        assert_eq!(err.client_code(), ClientCode::NotFound);
        assert_eq!(err.client_detail(), "Region not found");
    }
}

#[test]
fn metric_covers_numeric_fields_only() {
    let cat = RegionCatalog::builtin();
    let r = cat.get("nagpur").unwrap();
    assert_eq!(r.metric("ndvi"), Some(0.52));
    assert_eq!(r.metric("drought_score"), Some(7.0));
    assert_eq!(r.metric("rain_forecast_48h"), Some(0.0));
    assert_eq!(r.metric("name"), None);
    assert_eq!(r.metric("recommendation"), None);
    assert_eq!(r.metric("unknown_field"), None);
}

#[test]
fn duplicate_ids_rejected() {
    let cat = RegionCatalog::builtin();
    let a: Region = cat.get("coastal").unwrap().clone();
    let b = a.clone();
    let err = RegionCatalog::from_regions([a, b]).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn custom_catalog_lookup() {
    let mut r = RegionCatalog::builtin().get("nagpur").unwrap().clone();
    r.id = "akola".into();
    let cat = RegionCatalog::from_regions([r]).unwrap();
    assert_eq!(cat.get("akola").unwrap().name, "Nagpur Region");
    assert!(cat.get("nagpur").is_err());
}
