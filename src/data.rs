//! Bundled static zone tables.
//!
//! The arrays below are the data contract of the crate: an immutable,
//! pre-linked snapshot of the IANA time zone database covering the
//! bundled zones and every rule family they reference. Regeneration
//! from upstream release files happens out of band; the resolver only
//! reads these tables.
//!
//! Layout follows the upstream source files: one `Rule` per rule line,
//! wrapped in a `YearBoundRule` carrying the `FROM`/`TO` validity
//! range, grouped into named families; one `Period` per zone line with
//! the `UNTIL` columns kept verbatim. Open-ended ranges and the final
//! period of each zone use the sentinel year 9999.

use crate::civil::WeekDay;
use crate::types::{
    Alias, Period, RelativeDay, Rule, RuleFamily, TimeKind, YearBoundRule, Zone, YEAR_MAX,
};

const LAST_SUN: RelativeDay = RelativeDay::LastOfMonth { week_day: WeekDay::Sun };
const SUN_GE_1: RelativeDay = RelativeDay::NthOfMonth { week_day: WeekDay::Sun, after_day: 1 };
const SUN_GE_2: RelativeDay = RelativeDay::NthOfMonth { week_day: WeekDay::Sun, after_day: 2 };
const SUN_GE_8: RelativeDay = RelativeDay::NthOfMonth { week_day: WeekDay::Sun, after_day: 8 };
const SUN_GE_15: RelativeDay = RelativeDay::NthOfMonth { week_day: WeekDay::Sun, after_day: 15 };
const MON_GE_1: RelativeDay = RelativeDay::NthOfMonth { week_day: WeekDay::Mon, after_day: 1 };
const MON_GE_15: RelativeDay = RelativeDay::NthOfMonth { week_day: WeekDay::Mon, after_day: 15 };

const fn fixed(day: u8) -> RelativeDay {
    RelativeDay::Fixed { day }
}

// Rule Romania
static RULES_ROMANIA: [YearBoundRule; 9] = [
    YearBoundRule { from_year: 1932, to_year: 1932, rule: &Rule { in_month: 5, on_day: fixed(21), at: 0, at_kind: TimeKind::Standard, save: 3600, letter: "S" } },
    YearBoundRule { from_year: 1932, to_year: 1939, rule: &Rule { in_month: 10, on_day: SUN_GE_1, at: 0, at_kind: TimeKind::Standard, save: 0, letter: "" } },
    YearBoundRule { from_year: 1933, to_year: 1939, rule: &Rule { in_month: 4, on_day: SUN_GE_2, at: 0, at_kind: TimeKind::Standard, save: 3600, letter: "S" } },
    YearBoundRule { from_year: 1979, to_year: 1979, rule: &Rule { in_month: 5, on_day: fixed(27), at: 0, at_kind: TimeKind::Local, save: 3600, letter: "S" } },
    YearBoundRule { from_year: 1979, to_year: 1979, rule: &Rule { in_month: 9, on_day: LAST_SUN, at: 0, at_kind: TimeKind::Local, save: 0, letter: "" } },
    YearBoundRule { from_year: 1980, to_year: 1980, rule: &Rule { in_month: 4, on_day: fixed(5), at: 82_800, at_kind: TimeKind::Local, save: 3600, letter: "S" } },
    YearBoundRule { from_year: 1980, to_year: 1980, rule: &Rule { in_month: 9, on_day: LAST_SUN, at: 3600, at_kind: TimeKind::Local, save: 0, letter: "" } },
    YearBoundRule { from_year: 1991, to_year: 1993, rule: &Rule { in_month: 3, on_day: LAST_SUN, at: 0, at_kind: TimeKind::Standard, save: 3600, letter: "S" } },
    YearBoundRule { from_year: 1991, to_year: 1993, rule: &Rule { in_month: 9, on_day: LAST_SUN, at: 0, at_kind: TimeKind::Standard, save: 0, letter: "" } },
];
static FAMILY_ROMANIA: RuleFamily = RuleFamily { name: "Romania", rules: &RULES_ROMANIA };

// Rule C-Eur
static RULES_C_EUR: [YearBoundRule; 17] = [
    YearBoundRule { from_year: 1916, to_year: 1916, rule: &Rule { in_month: 4, on_day: fixed(30), at: 82_800, at_kind: TimeKind::Local, save: 3600, letter: "S" } },
    YearBoundRule { from_year: 1916, to_year: 1916, rule: &Rule { in_month: 10, on_day: fixed(1), at: 3600, at_kind: TimeKind::Local, save: 0, letter: "" } },
    YearBoundRule { from_year: 1917, to_year: 1918, rule: &Rule { in_month: 4, on_day: MON_GE_15, at: 7200, at_kind: TimeKind::Standard, save: 3600, letter: "S" } },
    YearBoundRule { from_year: 1917, to_year: 1918, rule: &Rule { in_month: 9, on_day: MON_GE_15, at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "" } },
    YearBoundRule { from_year: 1940, to_year: 1940, rule: &Rule { in_month: 4, on_day: fixed(1), at: 7200, at_kind: TimeKind::Standard, save: 3600, letter: "S" } },
    YearBoundRule { from_year: 1942, to_year: 1942, rule: &Rule { in_month: 11, on_day: fixed(2), at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "" } },
    YearBoundRule { from_year: 1943, to_year: 1943, rule: &Rule { in_month: 3, on_day: fixed(29), at: 7200, at_kind: TimeKind::Standard, save: 3600, letter: "S" } },
    YearBoundRule { from_year: 1943, to_year: 1943, rule: &Rule { in_month: 10, on_day: fixed(4), at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "" } },
    YearBoundRule { from_year: 1944, to_year: 1945, rule: &Rule { in_month: 4, on_day: MON_GE_1, at: 7200, at_kind: TimeKind::Standard, save: 3600, letter: "S" } },
    YearBoundRule { from_year: 1944, to_year: 1944, rule: &Rule { in_month: 10, on_day: fixed(2), at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "" } },
    YearBoundRule { from_year: 1945, to_year: 1945, rule: &Rule { in_month: 9, on_day: fixed(16), at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "" } },
    YearBoundRule { from_year: 1977, to_year: 1980, rule: &Rule { in_month: 4, on_day: SUN_GE_1, at: 7200, at_kind: TimeKind::Standard, save: 3600, letter: "S" } },
    YearBoundRule { from_year: 1977, to_year: 1977, rule: &Rule { in_month: 9, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "" } },
    YearBoundRule { from_year: 1978, to_year: 1978, rule: &Rule { in_month: 10, on_day: fixed(1), at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "" } },
    YearBoundRule { from_year: 1979, to_year: 1995, rule: &Rule { in_month: 9, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "" } },
    YearBoundRule { from_year: 1981, to_year: YEAR_MAX, rule: &Rule { in_month: 3, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Standard, save: 3600, letter: "S" } },
    YearBoundRule { from_year: 1996, to_year: YEAR_MAX, rule: &Rule { in_month: 10, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "" } },
];
static FAMILY_C_EUR: RuleFamily = RuleFamily { name: "C-Eur", rules: &RULES_C_EUR };

// Rule E-Eur
static RULES_E_EUR: [YearBoundRule; 6] = [
    YearBoundRule { from_year: 1977, to_year: 1980, rule: &Rule { in_month: 4, on_day: SUN_GE_1, at: 0, at_kind: TimeKind::Local, save: 3600, letter: "S" } },
    YearBoundRule { from_year: 1977, to_year: 1977, rule: &Rule { in_month: 9, on_day: LAST_SUN, at: 0, at_kind: TimeKind::Local, save: 0, letter: "" } },
    YearBoundRule { from_year: 1978, to_year: 1978, rule: &Rule { in_month: 10, on_day: fixed(1), at: 0, at_kind: TimeKind::Local, save: 0, letter: "" } },
    YearBoundRule { from_year: 1979, to_year: 1995, rule: &Rule { in_month: 9, on_day: LAST_SUN, at: 0, at_kind: TimeKind::Local, save: 0, letter: "" } },
    YearBoundRule { from_year: 1981, to_year: YEAR_MAX, rule: &Rule { in_month: 3, on_day: LAST_SUN, at: 0, at_kind: TimeKind::Local, save: 3600, letter: "S" } },
    YearBoundRule { from_year: 1996, to_year: YEAR_MAX, rule: &Rule { in_month: 10, on_day: LAST_SUN, at: 0, at_kind: TimeKind::Local, save: 0, letter: "" } },
];
static FAMILY_E_EUR: RuleFamily = RuleFamily { name: "E-Eur", rules: &RULES_E_EUR };

// Rule EU
static RULES_EU: [YearBoundRule; 6] = [
    YearBoundRule { from_year: 1977, to_year: 1980, rule: &Rule { in_month: 4, on_day: SUN_GE_1, at: 3600, at_kind: TimeKind::Universal, save: 3600, letter: "S" } },
    YearBoundRule { from_year: 1977, to_year: 1977, rule: &Rule { in_month: 9, on_day: LAST_SUN, at: 3600, at_kind: TimeKind::Universal, save: 0, letter: "" } },
    YearBoundRule { from_year: 1978, to_year: 1978, rule: &Rule { in_month: 10, on_day: fixed(1), at: 3600, at_kind: TimeKind::Universal, save: 0, letter: "" } },
    YearBoundRule { from_year: 1979, to_year: 1995, rule: &Rule { in_month: 9, on_day: LAST_SUN, at: 3600, at_kind: TimeKind::Universal, save: 0, letter: "" } },
    YearBoundRule { from_year: 1981, to_year: YEAR_MAX, rule: &Rule { in_month: 3, on_day: LAST_SUN, at: 3600, at_kind: TimeKind::Universal, save: 3600, letter: "S" } },
    YearBoundRule { from_year: 1996, to_year: YEAR_MAX, rule: &Rule { in_month: 10, on_day: LAST_SUN, at: 3600, at_kind: TimeKind::Universal, save: 0, letter: "" } },
];
static FAMILY_EU: RuleFamily = RuleFamily { name: "EU", rules: &RULES_EU };

// Rule US
static RULES_US: [YearBoundRule; 13] = [
    YearBoundRule { from_year: 1918, to_year: 1919, rule: &Rule { in_month: 3, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Local, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 1918, to_year: 1919, rule: &Rule { in_month: 10, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Local, save: 0, letter: "S" } },
    YearBoundRule { from_year: 1942, to_year: 1942, rule: &Rule { in_month: 2, on_day: fixed(9), at: 7200, at_kind: TimeKind::Local, save: 3600, letter: "W" } },
    YearBoundRule { from_year: 1945, to_year: 1945, rule: &Rule { in_month: 8, on_day: fixed(14), at: 82_800, at_kind: TimeKind::Universal, save: 3600, letter: "P" } },
    YearBoundRule { from_year: 1945, to_year: 1945, rule: &Rule { in_month: 9, on_day: fixed(30), at: 7200, at_kind: TimeKind::Local, save: 0, letter: "S" } },
    YearBoundRule { from_year: 1967, to_year: 2006, rule: &Rule { in_month: 10, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Local, save: 0, letter: "S" } },
    YearBoundRule { from_year: 1967, to_year: 1973, rule: &Rule { in_month: 4, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Local, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 1974, to_year: 1974, rule: &Rule { in_month: 1, on_day: fixed(6), at: 7200, at_kind: TimeKind::Local, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 1975, to_year: 1975, rule: &Rule { in_month: 2, on_day: fixed(23), at: 7200, at_kind: TimeKind::Local, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 1976, to_year: 1986, rule: &Rule { in_month: 4, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Local, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 1987, to_year: 2006, rule: &Rule { in_month: 4, on_day: SUN_GE_1, at: 7200, at_kind: TimeKind::Local, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 2007, to_year: YEAR_MAX, rule: &Rule { in_month: 3, on_day: SUN_GE_8, at: 7200, at_kind: TimeKind::Local, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 2007, to_year: YEAR_MAX, rule: &Rule { in_month: 11, on_day: SUN_GE_1, at: 7200, at_kind: TimeKind::Local, save: 0, letter: "S" } },
];
static FAMILY_US: RuleFamily = RuleFamily { name: "US", rules: &RULES_US };

// Rule CA
static RULES_CA: [YearBoundRule; 5] = [
    YearBoundRule { from_year: 1948, to_year: 1948, rule: &Rule { in_month: 3, on_day: fixed(14), at: 7260, at_kind: TimeKind::Local, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 1949, to_year: 1949, rule: &Rule { in_month: 1, on_day: fixed(1), at: 7200, at_kind: TimeKind::Local, save: 0, letter: "S" } },
    YearBoundRule { from_year: 1950, to_year: 1966, rule: &Rule { in_month: 4, on_day: LAST_SUN, at: 3600, at_kind: TimeKind::Local, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 1950, to_year: 1961, rule: &Rule { in_month: 9, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Local, save: 0, letter: "S" } },
    YearBoundRule { from_year: 1962, to_year: 1966, rule: &Rule { in_month: 10, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Local, save: 0, letter: "S" } },
];
static FAMILY_CA: RuleFamily = RuleFamily { name: "CA", rules: &RULES_CA };

// Rule Aus
static RULES_AUS: [YearBoundRule; 6] = [
    YearBoundRule { from_year: 1917, to_year: 1917, rule: &Rule { in_month: 1, on_day: fixed(1), at: 60, at_kind: TimeKind::Local, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 1942, to_year: 1942, rule: &Rule { in_month: 1, on_day: fixed(1), at: 7200, at_kind: TimeKind::Local, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 1942, to_year: 1942, rule: &Rule { in_month: 3, on_day: fixed(29), at: 7200, at_kind: TimeKind::Local, save: 0, letter: "S" } },
    YearBoundRule { from_year: 1942, to_year: 1942, rule: &Rule { in_month: 9, on_day: fixed(27), at: 7200, at_kind: TimeKind::Local, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 1943, to_year: 1944, rule: &Rule { in_month: 3, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Local, save: 0, letter: "S" } },
    YearBoundRule { from_year: 1943, to_year: 1943, rule: &Rule { in_month: 10, on_day: fixed(3), at: 7200, at_kind: TimeKind::Local, save: 3600, letter: "D" } },
];
static FAMILY_AUS: RuleFamily = RuleFamily { name: "Aus", rules: &RULES_AUS };

// Rule AN
static RULES_AN: [YearBoundRule; 16] = [
    YearBoundRule { from_year: 1971, to_year: 1985, rule: &Rule { in_month: 10, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Standard, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 1972, to_year: 1972, rule: &Rule { in_month: 2, on_day: fixed(27), at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "S" } },
    YearBoundRule { from_year: 1973, to_year: 1981, rule: &Rule { in_month: 3, on_day: SUN_GE_1, at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "S" } },
    YearBoundRule { from_year: 1982, to_year: 1982, rule: &Rule { in_month: 4, on_day: SUN_GE_1, at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "S" } },
    YearBoundRule { from_year: 1983, to_year: 1985, rule: &Rule { in_month: 3, on_day: SUN_GE_1, at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "S" } },
    YearBoundRule { from_year: 1986, to_year: 1989, rule: &Rule { in_month: 3, on_day: SUN_GE_15, at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "S" } },
    YearBoundRule { from_year: 1986, to_year: 1986, rule: &Rule { in_month: 10, on_day: fixed(19), at: 7200, at_kind: TimeKind::Standard, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 1987, to_year: 1999, rule: &Rule { in_month: 10, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Standard, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 1990, to_year: 1995, rule: &Rule { in_month: 3, on_day: SUN_GE_1, at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "S" } },
    YearBoundRule { from_year: 1996, to_year: 2005, rule: &Rule { in_month: 3, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "S" } },
    YearBoundRule { from_year: 2000, to_year: 2000, rule: &Rule { in_month: 8, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Standard, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 2001, to_year: 2007, rule: &Rule { in_month: 10, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Standard, save: 3600, letter: "D" } },
    YearBoundRule { from_year: 2006, to_year: 2006, rule: &Rule { in_month: 4, on_day: SUN_GE_1, at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "S" } },
    YearBoundRule { from_year: 2007, to_year: 2007, rule: &Rule { in_month: 3, on_day: LAST_SUN, at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "S" } },
    YearBoundRule { from_year: 2008, to_year: YEAR_MAX, rule: &Rule { in_month: 4, on_day: SUN_GE_1, at: 7200, at_kind: TimeKind::Standard, save: 0, letter: "S" } },
    YearBoundRule { from_year: 2008, to_year: YEAR_MAX, rule: &Rule { in_month: 10, on_day: SUN_GE_1, at: 7200, at_kind: TimeKind::Standard, save: 3600, letter: "D" } },
];
static FAMILY_AN: RuleFamily = RuleFamily { name: "AN", rules: &RULES_AN };

// Zone America/Los_Angeles
static PERIODS_AMERICA_LOS_ANGELES: [Period; 4] = [
    Period { std_offset: -28_378, family: None, format: "LMT", until_year: 1883, until_month: 11, until_day: Some(fixed(18)), until_time: 72_000, until_kind: TimeKind::Universal },
    Period { std_offset: -28_800, family: Some(&FAMILY_US), format: "P%sT", until_year: 1946, until_month: 1, until_day: None, until_time: 0, until_kind: TimeKind::Local },
    Period { std_offset: -28_800, family: Some(&FAMILY_CA), format: "P%sT", until_year: 1967, until_month: 1, until_day: None, until_time: 0, until_kind: TimeKind::Local },
    Period { std_offset: -28_800, family: Some(&FAMILY_US), format: "P%sT", until_year: YEAR_MAX, until_month: 1, until_day: None, until_time: 0, until_kind: TimeKind::Local },
];
static ZONE_AMERICA_LOS_ANGELES: Zone =
    Zone { name: "America/Los_Angeles", periods: &PERIODS_AMERICA_LOS_ANGELES };

// Zone Australia/Sydney
static PERIODS_AUSTRALIA_SYDNEY: [Period; 3] = [
    Period { std_offset: 36_292, family: None, format: "LMT", until_year: 1895, until_month: 2, until_day: None, until_time: 0, until_kind: TimeKind::Local },
    Period { std_offset: 36_000, family: Some(&FAMILY_AUS), format: "AE%sT", until_year: 1971, until_month: 1, until_day: None, until_time: 0, until_kind: TimeKind::Local },
    Period { std_offset: 36_000, family: Some(&FAMILY_AN), format: "AE%sT", until_year: YEAR_MAX, until_month: 1, until_day: None, until_time: 0, until_kind: TimeKind::Local },
];
static ZONE_AUSTRALIA_SYDNEY: Zone =
    Zone { name: "Australia/Sydney", periods: &PERIODS_AUSTRALIA_SYDNEY };

// Zone Etc/UTC
static PERIODS_ETC_UTC: [Period; 1] = [
    Period { std_offset: 0, family: None, format: "UTC", until_year: YEAR_MAX, until_month: 1, until_day: None, until_time: 0, until_kind: TimeKind::Local },
];
static ZONE_ETC_UTC: Zone = Zone { name: "Etc/UTC", periods: &PERIODS_ETC_UTC };

// Zone Europe/Bucharest
static PERIODS_EUROPE_BUCHAREST: [Period; 7] = [
    Period { std_offset: 6264, family: None, format: "LMT", until_year: 1891, until_month: 10, until_day: None, until_time: 0, until_kind: TimeKind::Local },
    Period { std_offset: 6264, family: None, format: "BMT", until_year: 1931, until_month: 7, until_day: Some(fixed(24)), until_time: 0, until_kind: TimeKind::Local },
    Period { std_offset: 7200, family: Some(&FAMILY_ROMANIA), format: "EE%sT", until_year: 1981, until_month: 3, until_day: Some(fixed(29)), until_time: 7200, until_kind: TimeKind::Standard },
    Period { std_offset: 7200, family: Some(&FAMILY_C_EUR), format: "EE%sT", until_year: 1991, until_month: 1, until_day: None, until_time: 0, until_kind: TimeKind::Local },
    Period { std_offset: 7200, family: Some(&FAMILY_ROMANIA), format: "EE%sT", until_year: 1994, until_month: 1, until_day: None, until_time: 0, until_kind: TimeKind::Local },
    Period { std_offset: 7200, family: Some(&FAMILY_E_EUR), format: "EE%sT", until_year: 1997, until_month: 1, until_day: None, until_time: 0, until_kind: TimeKind::Local },
    Period { std_offset: 7200, family: Some(&FAMILY_EU), format: "EE%sT", until_year: YEAR_MAX, until_month: 1, until_day: None, until_time: 0, until_kind: TimeKind::Local },
];
static ZONE_EUROPE_BUCHAREST: Zone =
    Zone { name: "Europe/Bucharest", periods: &PERIODS_EUROPE_BUCHAREST };

/// Every bundled zone, ordered by name.
pub(crate) static ZONES: [&Zone; 4] = [
    &ZONE_AMERICA_LOS_ANGELES,
    &ZONE_AUSTRALIA_SYDNEY,
    &ZONE_ETC_UTC,
    &ZONE_EUROPE_BUCHAREST,
];

/// Every bundled alias, ordered by name.
pub(crate) static ALIASES: [Alias; 7] = [
    Alias { name: "Australia/ACT", target: &ZONE_AUSTRALIA_SYDNEY },
    Alias { name: "Australia/Canberra", target: &ZONE_AUSTRALIA_SYDNEY },
    Alias { name: "Australia/NSW", target: &ZONE_AUSTRALIA_SYDNEY },
    Alias { name: "US/Pacific", target: &ZONE_AMERICA_LOS_ANGELES },
    Alias { name: "UTC", target: &ZONE_ETC_UTC },
    Alias { name: "Universal", target: &ZONE_ETC_UTC },
    Alias { name: "Zulu", target: &ZONE_ETC_UTC },
];

/// Looks up a zone by canonical name, ignoring ASCII case.
pub(crate) fn find_zone(id: &str) -> Option<&'static Zone> {
    ZONES
        .iter()
        .find(|zone| zone.name.eq_ignore_ascii_case(id))
        .copied()
}

/// Looks up an alias by name, ignoring ASCII case, returning its target.
pub(crate) fn find_alias(id: &str) -> Option<&'static Zone> {
    ALIASES
        .iter()
        .find(|alias| alias.name.eq_ignore_ascii_case(id))
        .map(|alias| alias.target)
}

pub(crate) fn zone_names() -> impl Iterator<Item = &'static str> {
    ZONES.iter().map(|zone| zone.name)
}

pub(crate) fn alias_names() -> impl Iterator<Item = &'static str> {
    ALIASES.iter().map(|alias| alias.name)
}
