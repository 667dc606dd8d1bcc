//! Static database model types.
//!
//! The bundled zone database is an immutable graph: zones own ordered
//! period lists, periods point at rule families, families own year-bound
//! rules, and rules carry a relative day-of-month. All links are plain
//! `'static` borrows into the table arrays, so the graph is shared
//! freely without copying.
//!
//! For more information on the upstream data shape, see
//! [How to Read tz Database Source Files][tz-how-to].
//!
//! [tz-how-to]: https://data.iana.org/time-zones/tz-how-to.html

use crate::civil::{self, CivilDateTime, WeekDay};

/// Sentinel year used for open-ended validity ranges and the final
/// period of every zone.
pub(crate) const YEAR_MAX: u16 = 9999;

/// Whether a trigger time is read against the local clock, the zone's
/// standard time, or universal time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeKind {
    Local,
    Standard,
    Universal,
}

/// A day-of-month selector.
///
/// The three cases mirror the upstream `ON` column: a literal day, the
/// last given week day of the month (`lastSun`), or the first given week
/// day on or after a lower bound (`Sun>=8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDay {
    Fixed { day: u8 },
    LastOfMonth { week_day: WeekDay },
    NthOfMonth { week_day: WeekDay, after_day: u8 },
}

/// Resolves a day selector to an absolute local date-time.
///
/// The result carries no time reference of its own; the caller applies
/// whatever local, standard, or universal adjustment its context
/// requires. An absent selector means the first of the month.
pub(crate) fn resolve_day(
    year: i32,
    month: u8,
    day: Option<RelativeDay>,
    time_of_day: i64,
) -> CivilDateTime {
    let epoch_days = match day {
        None => civil::epoch_days_from_ymd(year, month, 1),
        Some(RelativeDay::Fixed { day }) => civil::epoch_days_from_ymd(year, month, day),
        Some(RelativeDay::LastOfMonth { week_day }) => {
            let mut days =
                civil::epoch_days_from_ymd(year, month, civil::days_in_month(year, month));
            while civil::week_day_for_epoch_days(days) != week_day {
                days -= 1;
            }
            days
        }
        Some(RelativeDay::NthOfMonth { week_day, after_day }) => {
            let mut days = civil::epoch_days_from_ymd(year, month, 1);
            while civil::week_day_for_epoch_days(days) != week_day {
                days += 1;
            }
            loop {
                let (_, current_month, day_of_month) = civil::ymd_from_epoch_days(days);
                if current_month != month {
                    // Walked out of the month, the previous candidate wins.
                    days -= 7;
                    break;
                }
                if day_of_month >= after_day {
                    break;
                }
                days += 7;
            }
            days
        }
    };
    CivilDateTime::from_epoch_days(epoch_days).add_seconds(time_of_day)
}

/// A recurring transition instruction.
#[derive(Debug, PartialEq, Eq)]
pub struct Rule {
    /// Month the rule fires in (1-12).
    pub in_month: u8,
    /// Day selector within `in_month`.
    pub on_day: RelativeDay,
    /// Trigger time in seconds of day.
    pub at: i64,
    /// Reference frame of `at`.
    pub at_kind: TimeKind,
    /// Seconds of saving added to the zone's standard offset while the
    /// rule is in force.
    pub save: i64,
    /// Fragment substituted into a period's `%s` format.
    pub letter: &'static str,
}

/// A rule bounded to an inclusive validity range of years.
#[derive(Debug)]
pub struct YearBoundRule {
    pub from_year: u16,
    pub to_year: u16,
    pub rule: &'static Rule,
}

impl YearBoundRule {
    pub(crate) fn covers(&self, year: i32) -> bool {
        i32::from(self.from_year) <= year && year <= i32::from(self.to_year)
    }
}

/// A named, ordered collection of year-bound rules.
#[derive(Debug)]
pub struct RuleFamily {
    pub name: &'static str,
    pub rules: &'static [YearBoundRule],
}

/// One line of a zone's history: a standard offset, an optional rule
/// family, and a format, in force until the `until` columns.
#[derive(Debug)]
pub struct Period {
    /// Standard offset from UTC in seconds.
    pub std_offset: i64,
    pub family: Option<&'static RuleFamily>,
    /// Abbreviation format, possibly containing `%s`.
    pub format: &'static str,
    pub until_year: u16,
    pub until_month: u8,
    pub until_day: Option<RelativeDay>,
    pub until_time: i64,
    pub until_kind: TimeKind,
}

impl Period {
    /// Produces the display abbreviation for this period under the given
    /// active rule.
    ///
    /// A `%s` in the format is replaced by the rule's letter, or by the
    /// empty string when no rule is active. A format without `%s` is
    /// returned unchanged.
    pub fn format_abbrev(&self, rule: Option<&Rule>) -> String {
        if self.format.contains("%s") {
            self.format.replace("%s", rule.map_or("", |r| r.letter))
        } else {
            self.format.to_owned()
        }
    }
}

/// A zone and its complete, ordered period history.
#[derive(Debug)]
pub struct Zone {
    /// Canonical IANA identifier.
    pub name: &'static str,
    pub periods: &'static [Period],
}

/// An alternate spelling for a zone.
#[derive(Debug)]
pub struct Alias {
    pub name: &'static str,
    pub target: &'static Zone,
}
