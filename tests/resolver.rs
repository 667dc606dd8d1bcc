//! End-to-end resolver scenarios, pinned against the bundled tables.

use tzresolve::{known_zones, CivilDateTime, LocalTimeKind, Resolver, TzError};

fn at(year: i32, month: u8, day: u8, hour: i64, minute: i64) -> CivilDateTime {
    CivilDateTime::new(year, month, day, hour * 3600 + minute * 60)
}

#[test]
fn bucharest_summer_noon_is_daylight() {
    let zone = Resolver::new("Europe/Bucharest").unwrap();
    let dt = at(2013, 6, 15, 12, 0);
    let record = zone.resolve(dt).unwrap();
    assert_eq!(record.kind, LocalTimeKind::Daylight);
    assert_eq!(record.std_offset, 7200);
    assert_eq!(record.savings, 3600);
    assert_eq!(zone.abbreviation(dt).unwrap(), "EEST");
}

#[test]
fn bucharest_winter_noon_is_standard() {
    let zone = Resolver::new("Europe/Bucharest").unwrap();
    let dt = at(2013, 1, 15, 12, 0);
    let record = zone.resolve(dt).unwrap();
    assert_eq!(record.kind, LocalTimeKind::Standard);
    assert_eq!(record.std_offset, 7200);
    assert_eq!(record.savings, 0);
    assert_eq!(zone.abbreviation(dt).unwrap(), "EET");
}

#[test]
fn bucharest_spring_forward_gap() {
    let zone = Resolver::new("Europe/Bucharest").unwrap();

    // Clocks jump from 3:00 to 4:00 on 2013-03-31.
    let record = zone.resolve(at(2013, 3, 31, 3, 30)).unwrap();
    assert_eq!(record.kind, LocalTimeKind::Invalid);
    assert_eq!(record.savings, 3600);

    assert_eq!(
        zone.resolve(at(2013, 3, 31, 2, 59)).unwrap().kind,
        LocalTimeKind::Standard
    );
    assert_eq!(
        zone.resolve(at(2013, 3, 31, 3, 0)).unwrap().kind,
        LocalTimeKind::Invalid
    );
    assert_eq!(
        zone.resolve(at(2013, 3, 31, 4, 0)).unwrap().kind,
        LocalTimeKind::Daylight
    );
}

#[test]
fn bucharest_fall_back_overlap() {
    let zone = Resolver::new("Europe/Bucharest").unwrap();

    // The hour from 3:00 to 4:00 repeats on 2013-10-27.
    let dt = at(2013, 10, 27, 3, 30);
    let record = zone.resolve(dt).unwrap();
    assert_eq!(record.kind, LocalTimeKind::Ambiguous);
    assert_eq!(record.savings, 3600);
    assert_eq!(zone.display_name(dt, false).unwrap(), "EET");
    assert_eq!(zone.display_name(dt, true).unwrap(), "EEST");

    assert_eq!(
        zone.resolve(at(2013, 10, 27, 2, 59)).unwrap().kind,
        LocalTimeKind::Daylight
    );
    assert_eq!(
        zone.resolve(at(2013, 10, 27, 3, 0)).unwrap().kind,
        LocalTimeKind::Ambiguous
    );
    assert_eq!(
        zone.resolve(at(2013, 10, 27, 4, 0)).unwrap().kind,
        LocalTimeKind::Standard
    );
}

#[test]
fn bucharest_before_standard_time() {
    let zone = Resolver::new("Europe/Bucharest").unwrap();
    let dt = at(1850, 1, 1, 12, 0);
    let record = zone.resolve(dt).unwrap();
    assert_eq!(record.kind, LocalTimeKind::Standard);
    assert_eq!(record.std_offset, 6264);
    assert_eq!(zone.abbreviation(dt).unwrap(), "LMT");
}

#[test]
fn los_angeles_rule_letters() {
    let zone = Resolver::new("America/Los_Angeles").unwrap();

    let summer = at(2013, 7, 4, 12, 0);
    let record = zone.resolve(summer).unwrap();
    assert_eq!(record.kind, LocalTimeKind::Daylight);
    assert_eq!(record.std_offset, -28_800);
    assert_eq!(record.savings, 3600);
    assert_eq!(zone.abbreviation(summer).unwrap(), "PDT");

    let winter = at(2013, 1, 15, 12, 0);
    assert_eq!(zone.resolve(winter).unwrap().kind, LocalTimeKind::Standard);
    assert_eq!(zone.abbreviation(winter).unwrap(), "PST");

    // War time from February 1942, peace time from August 1945.
    assert_eq!(zone.abbreviation(at(1942, 6, 1, 12, 0)).unwrap(), "PWT");
    assert_eq!(zone.abbreviation(at(1945, 9, 1, 12, 0)).unwrap(), "PPT");

    // War time also carries across into 1943.
    let carried = zone.resolve(at(1943, 6, 1, 12, 0)).unwrap();
    assert_eq!(carried.kind, LocalTimeKind::Daylight);
    assert_eq!(zone.abbreviation(at(1943, 6, 1, 12, 0)).unwrap(), "PWT");

    // 1943 itself has no rules, so nothing carries into 1944: the year
    // reads as standard time and the format substitutes an empty
    // letter.
    let bare = zone.resolve(at(1944, 6, 1, 12, 0)).unwrap();
    assert_eq!(bare.kind, LocalTimeKind::Standard);
    assert_eq!(bare.savings, 0);
    assert_eq!(zone.abbreviation(at(1944, 6, 1, 12, 0)).unwrap(), "PT");
}

#[test]
fn los_angeles_transition_windows() {
    let zone = Resolver::new("America/Los_Angeles").unwrap();

    // Wall-clock triggers place the skipped window in the hour before
    // the rule's start.
    let gap = zone.resolve(at(2013, 3, 10, 1, 30)).unwrap();
    assert_eq!(gap.kind, LocalTimeKind::Invalid);
    assert_eq!(gap.savings, 3600);

    let fold = at(2013, 11, 3, 2, 30);
    let record = zone.resolve(fold).unwrap();
    assert_eq!(record.kind, LocalTimeKind::Ambiguous);
    assert_eq!(record.savings, 3600);
    assert_eq!(zone.display_name(fold, false).unwrap(), "PST");
    assert_eq!(zone.display_name(fold, true).unwrap(), "PDT");
}

#[test]
fn sydney_daylight_spans_new_year() {
    let zone = Resolver::new("Australia/Sydney").unwrap();

    // Southern hemisphere: January is daylight saving carried over
    // from the previous October.
    let midsummer = at(2013, 1, 26, 12, 0);
    let record = zone.resolve(midsummer).unwrap();
    assert_eq!(record.kind, LocalTimeKind::Daylight);
    assert_eq!(record.std_offset, 36_000);
    assert_eq!(record.savings, 3600);
    assert_eq!(zone.abbreviation(midsummer).unwrap(), "AEDT");

    let midwinter = at(2013, 7, 1, 12, 0);
    assert_eq!(zone.resolve(midwinter).unwrap().kind, LocalTimeKind::Standard);
    assert_eq!(zone.abbreviation(midwinter).unwrap(), "AEST");

    // Fall back on 2013-04-07 repeats 2:00 to 3:00.
    let fold = at(2013, 4, 7, 2, 30);
    let record = zone.resolve(fold).unwrap();
    assert_eq!(record.kind, LocalTimeKind::Ambiguous);
    assert_eq!(zone.display_name(fold, false).unwrap(), "AEST");
    assert_eq!(zone.display_name(fold, true).unwrap(), "AEDT");

    // Spring forward on 2013-10-06 skips 2:00 to 3:00.
    let gap = zone.resolve(at(2013, 10, 6, 2, 30)).unwrap();
    assert_eq!(gap.kind, LocalTimeKind::Invalid);
    assert_eq!(
        zone.resolve(at(2013, 10, 6, 1, 59)).unwrap().kind,
        LocalTimeKind::Standard
    );
}

#[test]
fn utc_is_flat() {
    let zone = Resolver::new("Etc/UTC").unwrap();
    for dt in [at(1850, 1, 1, 0, 0), at(2013, 6, 15, 12, 0), at(9998, 12, 31, 23, 59)] {
        let record = zone.resolve(dt).unwrap();
        assert_eq!(record.kind, LocalTimeKind::Standard);
        assert_eq!(record.std_offset, 0);
        assert_eq!(zone.abbreviation(dt).unwrap(), "UTC");
    }
}

#[test]
fn alias_resolution_is_case_insensitive() {
    assert_eq!(Resolver::new("US/Pacific").unwrap().id(), "America/Los_Angeles");
    assert_eq!(Resolver::new("us/PACIFIC").unwrap().id(), "America/Los_Angeles");
    assert_eq!(Resolver::new("zulu").unwrap().id(), "Etc/UTC");
}

#[test]
fn unknown_zone_is_reported_with_its_id() {
    match Resolver::new("Mars/Olympus") {
        Err(TzError::UnknownZone(id)) => assert_eq!(id, "Mars/Olympus"),
        other => panic!("expected UnknownZone, got {other:?}"),
    }
}

#[test]
fn repeated_queries_are_identical() {
    let zone = Resolver::new("Europe/Bucharest").unwrap();
    let dt = at(2013, 10, 27, 3, 30);

    let first = zone.resolve(dt).unwrap();
    // Query a different year in between to shuffle the lazy caches.
    let _ = zone.resolve(at(1979, 7, 1, 12, 0)).unwrap();
    let second = zone.resolve(dt).unwrap();
    assert_eq!(first, second);

    // A fresh resolver agrees with a warmed one.
    let fresh = Resolver::new("Europe/Bucharest").unwrap();
    assert_eq!(fresh.resolve(dt).unwrap(), first);
    assert_eq!(fresh.display_name(dt, true).unwrap(), zone.display_name(dt, true).unwrap());
}

#[test]
fn offsets_are_constant_within_a_period() {
    let zone = Resolver::new("Europe/Bucharest").unwrap();
    for month in 1..=12 {
        let record = zone.resolve(at(2013, month, 15, 12, 0)).unwrap();
        assert_eq!(record.std_offset, 7200);
    }
}

#[test]
fn zone_listing_includes_aliases_after_zones() {
    let zones = known_zones(false);
    assert!(zones.contains(&"Europe/Bucharest"));
    assert!(!zones.contains(&"US/Pacific"));

    let all = known_zones(true);
    assert_eq!(all[..zones.len()], zones[..]);
    assert!(all.contains(&"US/Pacific"));
    assert!(all.contains(&"UTC"));
}

#[test]
fn concurrent_queries_share_one_resolver() {
    use std::sync::Arc;

    let zone = Arc::new(Resolver::new("Europe/Bucharest").unwrap());
    let expected = zone.resolve(at(2013, 6, 15, 12, 0)).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let zone = Arc::clone(&zone);
            std::thread::spawn(move || {
                // Start every worker in a different year so the lazy
                // caches race on distinct entries as well as shared
                // ones.
                for year in (2000 + worker)..2020 {
                    let record = zone.resolve(at(year, 6, 15, 12, 0)).unwrap();
                    assert_eq!(record.std_offset, 7200);
                }
                zone.resolve(at(2013, 6, 15, 12, 0)).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
