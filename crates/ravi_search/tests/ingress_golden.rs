//! Golden-value integration tests for sign ingress refinement.

use ravi_search::{
    IngressConfig, ScanConfig, first_crossing_jd, next_specific_ingress, prev_specific_ingress,
    search_ingresses,
};
use ravi_time::UtcTime;
use ravi_zodiac::ZodiacSign;

/// Leo ingress 2024: 2024-07-22 ~09:44 UT
#[test]
fn leo_ingress_2024() {
    let from = UtcTime::date(2024, 7, 1);
    let event = next_specific_ingress(&from, ZodiacSign::Leo, &IngressConfig::default())
        .unwrap()
        .expect("should find Leo ingress");
    assert_eq!((event.instant.month, event.instant.day), (7, 22));
    assert_eq!(event.sign, ZodiacSign::Leo);
    assert!((event.longitude_deg - 120.0).abs() < 1e-5);
}

#[test]
fn twelve_ingresses_in_2024() {
    let events = search_ingresses(
        &UtcTime::start_of_year(2024),
        &UtcTime::start_of_year(2025),
        &IngressConfig::default(),
    )
    .unwrap();
    assert_eq!(events.len(), 12);
    assert_eq!(events[0].sign, ZodiacSign::Aquarius);
    assert_eq!(events[0].instant.month, 1);
    for pair in events.windows(2) {
        assert!(pair[1].jd > pair[0].jd);
        assert_eq!(pair[1].sign, pair[0].sign.next());
    }
}

#[test]
fn prev_specific_ingress_goes_back_a_year() {
    let from = UtcTime::date(2024, 3, 1);
    let event = prev_specific_ingress(&from, ZodiacSign::Cancer, &IngressConfig::default())
        .unwrap()
        .unwrap();
    assert_eq!((event.instant.year, event.instant.month), (2023, 6));
}

#[test]
fn range_midpoint_close_to_refined_crossing() {
    let from = UtcTime::start_of_year(2024);
    let refined = next_specific_ingress(&from, ZodiacSign::Libra, &IngressConfig::default())
        .unwrap()
        .unwrap();
    let midpoint = first_crossing_jd(180.0, 2024, &ScanConfig::hourly())
        .unwrap()
        .unwrap();
    assert!((refined.jd - midpoint).abs() < 1.0 / 24.0);
}
