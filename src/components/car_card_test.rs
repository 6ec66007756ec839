use super::*;
use serde_json::json;

fn vehicle(value: serde_json::Value) -> Vehicle {
    serde_json::from_value(value).unwrap()
}

fn corolla() -> Vehicle {
    vehicle(json!({
        "id": 12,
        "model": "Corolla Cross",
        "trim": "Hybrid LE",
        "year": 2022,
        "km": 18250,
        "price": 10000,
        "transmission": "CVT",
        "fuel": "Hybrid",
        "origin": "Japan",
        "image": "img/cc.jpg",
        "grades": { "grade": "b" }
    }))
}

// =============================================================
// GradeClass
// =============================================================

#[test]
fn grade_lookup_is_case_insensitive() {
    assert_eq!(GradeClass::from_code("b"), GradeClass::from_code("B"));
    assert_eq!(GradeClass::from_code("b").css_class(), "grade-b");
    assert_eq!(GradeClass::from_code("s").css_class(), "grade-s");
    assert_eq!(GradeClass::from_code("R").css_class(), "grade-r");
}

#[test]
fn grade_lookup_falls_back_for_unknown_codes() {
    assert_eq!(GradeClass::from_code("Z"), GradeClass::NotAvailable);
    assert_eq!(GradeClass::from_code("AB").css_class(), "grade-na");
}

// =============================================================
// CarCardView
// =============================================================

#[test]
fn build_formats_full_record() {
    let card = CarCardView::build(&corolla(), false, &SiteConfig::default());
    assert_eq!(card.id, VehicleId::from(12));
    assert_eq!(card.href, "car-detail.html?id=12");
    assert_eq!(card.name, "Toyota Corolla Cross");
    assert_eq!(card.subtitle, "2022 · Hybrid LE");
    assert_eq!(card.image_alt, "2022 Toyota Corolla Cross");
    assert_eq!(card.km_label, "18,250 km");
    assert_eq!(card.transmission, "CVT");
    assert_eq!(card.origin, "Japan");
    assert_eq!(card.price_label, "$10,000");
    assert_eq!(card.price_khr_label, "≈ 41,000,000 KHR");
    assert_eq!(
        card.grade,
        Some(GradeBadge { class: GradeClass::B, label: "Grade b".into() })
    );
}

#[test]
fn build_substitutes_missing_fields() {
    let card = CarCardView::build(&vehicle(json!({ "id": "x1", "model": "Hiace", "year": 2015 })), false, &SiteConfig::default());
    assert_eq!(card.subtitle, "2015 · —");
    assert_eq!(card.transmission, MISSING);
    assert_eq!(card.fuel, MISSING);
    assert_eq!(card.origin, DEFAULT_ORIGIN);
    assert_eq!(card.km_label, "0 km");
    assert_eq!(card.price_label, "$0");
    assert_eq!(card.price_khr_label, "≈ 0 KHR");
    assert_eq!(card.href, "car-detail.html?id=x1");
}

#[test]
fn build_omits_badge_when_grade_absent() {
    let card = CarCardView::build(&vehicle(json!({ "id": 1, "grades": {} })), false, &SiteConfig::default());
    assert_eq!(card.grade, None);
    let card = CarCardView::build(&vehicle(json!({ "id": 1, "grades": { "grade": "" } })), false, &SiteConfig::default());
    assert_eq!(card.grade, None);
}

#[test]
fn build_keeps_badge_for_unrecognized_grade() {
    let card = CarCardView::build(&vehicle(json!({ "id": 1, "grades": { "grade": "Z" } })), false, &SiteConfig::default());
    let badge = card.grade.unwrap();
    assert_eq!(badge.class, GradeClass::NotAvailable);
    assert_eq!(badge.label, "Grade Z");
}

#[test]
fn build_reflects_favourite_flag() {
    let config = SiteConfig::default();
    assert!(CarCardView::build(&corolla(), true, &config).favourite);
    assert!(!CarCardView::build(&corolla(), false, &config).favourite);
}

#[test]
fn build_is_deterministic() {
    let config = SiteConfig::default();
    assert_eq!(CarCardView::build(&corolla(), true, &config), CarCardView::build(&corolla(), true, &config));
}

#[test]
fn build_uses_configured_rate_brand_and_placeholder() {
    let config = SiteConfig {
        khr_per_usd: 4000,
        brand: "Lexus".into(),
        detail_page: "detail.html".into(),
        placeholder_image: "img/none.png".into(),
        ..SiteConfig::default()
    };
    let card = CarCardView::build(&corolla(), false, &config);
    assert_eq!(card.price_khr_label, "≈ 40,000,000 KHR");
    assert_eq!(card.name, "Lexus Corolla Cross");
    assert_eq!(card.href, "detail.html?id=12");
    assert_eq!(card.fallback_image, "img/none.png");
}

// =============================================================
// Markup helpers
// =============================================================

#[test]
fn fav_id_matches_indicator_attribute_value() {
    assert_eq!(CarCardView::build(&corolla(), false, &SiteConfig::default()).fav_id(), "12");
    let card = CarCardView::build(&vehicle(json!({ "id": "rav4-x" })), false, &SiteConfig::default());
    assert_eq!(card.fav_id(), "rav4-x");
}

#[test]
fn fav_button_is_active_only_for_favourites() {
    assert_eq!(fav_button_class(true), "car-fav active");
    assert_eq!(fav_button_class(false), "car-fav");
}

#[test]
fn badge_class_attr_carries_grade_style() {
    let card = CarCardView::build(&corolla(), false, &SiteConfig::default());
    assert_eq!(card.grade.unwrap().class_attr(), "car-badge card-grade-badge grade-b");
    let badge = GradeBadge { class: GradeClass::NotAvailable, label: "Grade Z".into() };
    assert_eq!(badge.class_attr(), "car-badge card-grade-badge grade-na");
}

#[test]
fn image_fallback_swaps_to_placeholder_once() {
    let placeholder = SiteConfig::default().placeholder_image;
    assert_eq!(image_fallback("img/cc.jpg", &placeholder), Some(placeholder.as_str()));
    assert_eq!(image_fallback(&placeholder, &placeholder), None);
}

#[test]
fn image_fallback_covers_missing_image() {
    let card = CarCardView::build(&vehicle(json!({ "id": 1, "image": null })), false, &SiteConfig::default());
    assert_eq!(card.image_src, "");
    assert_eq!(image_fallback(&card.image_src, &card.fallback_image), Some(card.fallback_image.as_str()));
}
