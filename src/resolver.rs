//! Local instant classification and the resolver facade.
//!
//! A [`Resolver`] owns the compiled period list of one zone and answers
//! queries about local wall-clock instants. Classification has to cope
//! with the two boundary phenomena of daylight saving: an instant may
//! not exist at all (skipped by a forward jump) or may exist twice
//! (repeated by a fall back). Both are reported rather than papered
//! over; the caller decides how to disambiguate.

use core::fmt;

use log::debug;

use crate::civil::CivilDateTime;
use crate::compiler::{self, CompiledPeriod, RuleList};
use crate::data;
use crate::error::{TzError, TzResult};
use crate::types::Zone;

/// Classification of a local wall-clock instant within its zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocalTimeKind {
    /// Standard time, no saving in force.
    Standard,
    /// Daylight saving time.
    Daylight,
    /// The instant occurs twice, inside a fall-back overlap.
    Ambiguous,
    /// The instant does not exist, inside a spring-forward gap.
    Invalid,
}

impl fmt::Display for LocalTimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Standard => "standard",
            Self::Daylight => "daylight",
            Self::Ambiguous => "ambiguous",
            Self::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// The offsets in force at a local instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalTimeRecord {
    /// The zone's standard offset from UTC, in seconds.
    pub std_offset: i64,
    /// Additional daylight saving, in seconds.
    ///
    /// Meaningful only when `kind` is daylight, ambiguous, or invalid.
    /// Callers must ignore it otherwise.
    pub savings: i64,
    pub kind: LocalTimeKind,
}

/// Classifies `dt` against the rule at `index` and its neighbours,
/// returning the kind and the applicable saving.
pub(crate) fn classify(
    list: &RuleList,
    index: Option<usize>,
    dt: CivilDateTime,
) -> (LocalTimeKind, i64) {
    let Some(index) = index else {
        // No carry-over and nothing fired yet this year.
        return (LocalTimeKind::Standard, 0);
    };
    let rule = list.get(index);
    if let Some(next) = list.next(index) {
        // A jump to a larger saving skips the window right before the
        // next rule's start.
        if next.save > rule.save && dt >= next.starts_on.add_seconds(rule.save - next.save) {
            return (LocalTimeKind::Invalid, next.save - rule.save);
        }
    }
    match list.prev(index) {
        // Fold at the start of a year seeded by a negative carry-over.
        None if rule.save < 0 && dt < rule.starts_on.add_seconds(-rule.save) => {
            return (LocalTimeKind::Ambiguous, rule.save);
        }
        Some(prev)
            if prev.save > rule.save
                && dt < rule.starts_on.add_seconds(prev.save - rule.save) =>
        {
            return (LocalTimeKind::Ambiguous, prev.save - rule.save);
        }
        _ => {}
    }
    if rule.save != 0 {
        (LocalTimeKind::Daylight, rule.save)
    } else {
        (LocalTimeKind::Standard, 0)
    }
}

/// A compiled, queryable view of one zone.
///
/// Construction is eager for periods and lazy for rules; a resolver may
/// be shared and queried concurrently.
#[derive(Debug)]
pub struct Resolver {
    zone: &'static Zone,
    periods: Vec<CompiledPeriod>,
}

impl Resolver {
    /// Builds a resolver for `id`, matched case-insensitively against
    /// zone names first and alias names second.
    pub fn new(id: &str) -> TzResult<Self> {
        let zone = data::find_zone(id)
            .or_else(|| data::find_alias(id))
            .ok_or_else(|| TzError::UnknownZone(id.to_owned()))?;
        let periods = compiler::compile_periods(zone);
        debug!("compiled {} periods for zone {}", periods.len(), zone.name);
        Ok(Self { zone, periods })
    }

    /// The canonical zone name, also for resolvers built from an alias.
    pub fn id(&self) -> &'static str {
        self.zone.name
    }

    /// Returns the offsets and classification in force at `dt`.
    pub fn resolve(&self, dt: CivilDateTime) -> TzResult<LocalTimeRecord> {
        let period = self.find_period(dt)?;
        let (list, index) = period.find_matching_rule(dt);
        let (kind, savings) = classify(&list, index, dt);
        Ok(LocalTimeRecord {
            std_offset: period.period.std_offset,
            savings,
            kind,
        })
    }

    /// Returns the display abbreviation for `dt`.
    ///
    /// For an ambiguous instant the two occurrences usually carry
    /// different abbreviations; `force_daylight` selects the earlier,
    /// daylight reading instead of the default later one.
    pub fn display_name(&self, dt: CivilDateTime, force_daylight: bool) -> TzResult<String> {
        let period = self.find_period(dt)?;
        let (list, index) = period.find_matching_rule(dt);
        let (kind, _) = classify(&list, index, dt);
        if kind == LocalTimeKind::Ambiguous && force_daylight {
            if let Some(prev) = index.and_then(|index| list.prev(index)) {
                return Ok(period.period.format_abbrev(Some(prev.rule)));
            }
        }
        Ok(period.period.format_abbrev(index.map(|index| list.get(index).rule)))
    }

    /// Shorthand for [`display_name`](Self::display_name) with the
    /// default reading.
    pub fn abbreviation(&self, dt: CivilDateTime) -> TzResult<String> {
        self.display_name(dt, false)
    }

    /// Locates the period covering `dt`.
    ///
    /// Queries cluster near the present, so the scan runs newest first.
    fn find_period(&self, dt: CivilDateTime) -> TzResult<&CompiledPeriod> {
        self.periods
            .iter()
            .rev()
            .find(|period| period.contains(dt))
            .ok_or(TzError::OutOfRange {
                instant: dt,
                zone: self.zone.name,
            })
    }
}

/// The names of every bundled zone, optionally followed by every alias,
/// in table order.
pub fn known_zones(include_aliases: bool) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = data::zone_names().collect();
    if include_aliases {
        names.extend(data::alias_names());
    }
    names
}
