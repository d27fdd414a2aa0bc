//! Golden-value tests for the Sun's zodiac position on known dates.
//!
//! Tropical ingress dates for 2024: Aries Mar 20, Cancer Jun 20,
//! Leo Jul 22, Libra Sep 22, Capricorn Dec 21.

use ravi_time::UtcTime;
use ravi_zodiac::{Planet, ZodiacSign, zodiac_position_for_date};

#[test]
fn leo_first_day_2024() {
    let pos = zodiac_position_for_date(&UtcTime::date(2024, 7, 23)).unwrap();
    assert_eq!(pos.sign, ZodiacSign::Leo);
    assert_eq!(pos.sign.name(), "leo");
    assert!(
        (0.0..1.0).contains(&pos.degree_in_sign),
        "expected 0-1 deg, got {:.4}",
        pos.degree_in_sign
    );
    assert_eq!(pos.decan, 1);
    assert_eq!(pos.decan_ruler, Planet::Sun);
    assert_eq!(pos.decan_ruler.name(), "Sun");
}

#[test]
fn late_pisces_before_equinox_2024() {
    let pos = zodiac_position_for_date(&UtcTime::date(2024, 3, 19)).unwrap();
    assert_eq!(pos.sign, ZodiacSign::Pisces);
    assert!(pos.degree_in_sign > 28.5, "got {:.4}", pos.degree_in_sign);
    assert_eq!(pos.decan, 3);
}

#[test]
fn aries_after_equinox_2024() {
    let pos = zodiac_position_for_date(&UtcTime::new(2024, 3, 20, 12, 0, 0.0)).unwrap();
    assert_eq!(pos.sign, ZodiacSign::Aries);
    assert!(pos.degree_in_sign < 1.0);
}

#[test]
fn mid_sign_dates_2024() {
    let cases = [
        (1, 15, ZodiacSign::Capricorn),
        (2, 10, ZodiacSign::Aquarius),
        (5, 5, ZodiacSign::Taurus),
        (6, 5, ZodiacSign::Gemini),
        (8, 15, ZodiacSign::Leo),
        (9, 10, ZodiacSign::Virgo),
        (10, 10, ZodiacSign::Libra),
        (11, 10, ZodiacSign::Scorpio),
        (12, 10, ZodiacSign::Sagittarius),
    ];
    for (month, day, sign) in cases {
        let pos = zodiac_position_for_date(&UtcTime::date(2024, month, day)).unwrap();
        assert_eq!(pos.sign, sign, "2024-{month:02}-{day:02}");
    }
}

#[test]
fn winter_solstice_capricorn_2024() {
    let pos = zodiac_position_for_date(&UtcTime::new(2024, 12, 21, 12, 0, 0.0)).unwrap();
    assert_eq!(pos.sign, ZodiacSign::Capricorn);
    assert_eq!(pos.decan_ruler, Planet::Saturn);
}

#[test]
fn invalid_date_is_rejected() {
    assert!(zodiac_position_for_date(&UtcTime::date(2024, 6, 31)).is_err());
}
