//! Per-zone compilation of the static tables.
//!
//! Resolver construction materialises a zone's period list eagerly:
//! every period gets a resolved half-open `[from, until)` interval of
//! local time, chained so that each period begins where the previous
//! one ends. Rule compilation is deferred: the transitions of a given
//! year are computed on first demand and memoised per period.

use std::sync::{Arc, Mutex, PoisonError};

use hashbrown::HashMap;
use log::trace;

use crate::civil::CivilDateTime;
use crate::types::{self, Period, Rule, RuleFamily, TimeKind, Zone};

/// A rule materialised for one year.
///
/// `starts_on` is the local wall-clock instant the rule takes effect,
/// expressed in the offset that holds once it is in force.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CompiledRule {
    pub(crate) rule: &'static Rule,
    pub(crate) starts_on: CivilDateTime,
    pub(crate) save: i64,
}

/// The date-ordered rules of a single year within one period.
///
/// Neighbour queries never cross a year boundary; each year's list is
/// self-contained, seeded with the carry-over state from the previous
/// year.
#[derive(Debug, Default)]
pub(crate) struct RuleList {
    rules: Vec<CompiledRule>,
}

impl RuleList {
    pub(crate) fn get(&self, index: usize) -> &CompiledRule {
        &self.rules[index]
    }

    pub(crate) fn prev(&self, index: usize) -> Option<&CompiledRule> {
        index.checked_sub(1).map(|prev| &self.rules[prev])
    }

    pub(crate) fn next(&self, index: usize) -> Option<&CompiledRule> {
        self.rules.get(index + 1)
    }

    /// Index of the rightmost rule with `starts_on <= dt`, if any.
    pub(crate) fn last_at_or_before(&self, dt: CivilDateTime) -> Option<usize> {
        match self.rules.partition_point(|rule| rule.starts_on <= dt) {
            0 => None,
            n => Some(n - 1),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.rules.len()
    }

    #[cfg(test)]
    pub(crate) fn from_rules(rules: Vec<CompiledRule>) -> Self {
        Self { rules }
    }
}

/// A period with its resolved local validity interval.
#[derive(Debug)]
pub(crate) struct CompiledPeriod {
    pub(crate) period: &'static Period,
    pub(crate) from: CivilDateTime,
    pub(crate) until: CivilDateTime,
    years: Mutex<HashMap<i32, Arc<RuleList>>>,
}

impl CompiledPeriod {
    pub(crate) fn contains(&self, dt: CivilDateTime) -> bool {
        self.from <= dt && dt < self.until
    }

    /// Returns the compiled rules of `year`, materialising them on the
    /// first request.
    ///
    /// The per-period lock is held across the miss check, compilation,
    /// and insert, so concurrent queries observe either nothing or the
    /// finished list.
    pub(crate) fn rules_for_year(&self, year: i32) -> Arc<RuleList> {
        let mut cache = self.years.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(list) = cache.get(&year) {
            return Arc::clone(list);
        }
        trace!("compiling rules of {year} for a period with format {}", self.period.format);
        let list = Arc::new(compile_rules_for_year(self.period, year));
        cache.insert(year, Arc::clone(&list));
        list
    }

    /// Finds the rule in force at `dt`, a rightmost-predecessor lookup
    /// in the year's list.
    ///
    /// `None` means no carry-over seeded the year and no rule has fired
    /// yet; the instant is then standard time under the period's base
    /// offset.
    pub(crate) fn find_matching_rule(&self, dt: CivilDateTime) -> (Arc<RuleList>, Option<usize>) {
        let list = self.rules_for_year(dt.year());
        let index = list.last_at_or_before(dt);
        (list, index)
    }
}

/// Materialises the period list of a zone.
pub(crate) fn compile_periods(zone: &'static Zone) -> Vec<CompiledPeriod> {
    let mut compiled = Vec::with_capacity(zone.periods.len());
    let mut from = CivilDateTime::MIN;
    for period in zone.periods {
        let until = resolve_until(period);
        compiled.push(CompiledPeriod {
            period,
            from,
            until,
            years: Mutex::new(HashMap::new()),
        });
        from = until;
    }
    // Well formed tables are already ordered; the sort is defensive.
    compiled.sort_by_key(|period| period.until);
    compiled
}

/// Resolves a period's `UNTIL` columns to a local instant.
///
/// When the until date names a day, its time is shifted out of the
/// declared reference frame using the saving of the last rule active in
/// that year. Without an active rule the time is taken as written.
fn resolve_until(period: &'static Period) -> CivilDateTime {
    if period.until_year == types::YEAR_MAX {
        // The final entry of every zone is open ended.
        return CivilDateTime::MAX;
    }
    let until = types::resolve_day(
        i32::from(period.until_year),
        period.until_month,
        period.until_day,
        period.until_time,
    );
    if period.until_day.is_none() {
        return until;
    }
    match last_rule_for_year(period.family, i32::from(period.until_year)) {
        None => until,
        Some(rule) => match period.until_kind {
            TimeKind::Local => until,
            TimeKind::Standard => until.add_seconds(rule.save),
            TimeKind::Universal => until.add_seconds(period.std_offset + rule.save),
        },
    }
}

/// The rule of `family` whose activation falls latest within `year`.
///
/// Activation instants are compared as resolved, with no reference
/// frame adjustment. Ties go to the later entry in the family.
pub(crate) fn last_rule_for_year(
    family: Option<&'static RuleFamily>,
    year: i32,
) -> Option<&'static Rule> {
    let family = family?;
    let mut selected: Option<(CivilDateTime, &'static Rule)> = None;
    for bound in family.rules {
        if !bound.covers(year) {
            continue;
        }
        let starts =
            types::resolve_day(year, bound.rule.in_month, Some(bound.rule.on_day), bound.rule.at);
        if selected.map_or(true, |(best, _)| starts >= best) {
            selected = Some((starts, bound.rule));
        }
    }
    selected.map(|(_, rule)| rule)
}

fn compile_rules_for_year(period: &'static Period, year: i32) -> RuleList {
    let mut rules = Vec::new();
    // The saving in force at local midnight of January 1 is whatever the
    // previous year last established.
    if let Some(carry) = last_rule_for_year(period.family, year - 1) {
        rules.push(CompiledRule {
            rule: carry,
            starts_on: CivilDateTime::from_ymd(year, 1, 1),
            save: carry.save,
        });
    }
    if let Some(family) = period.family {
        for bound in family.rules {
            if !bound.covers(year) {
                continue;
            }
            let rule = bound.rule;
            let resolved = types::resolve_day(year, rule.in_month, Some(rule.on_day), rule.at);
            let starts_on = match rule.at_kind {
                TimeKind::Local => resolved,
                TimeKind::Standard => resolved.add_seconds(rule.save),
                TimeKind::Universal => resolved.add_seconds(period.std_offset + rule.save),
            };
            rules.push(CompiledRule { rule, starts_on, save: rule.save });
        }
    }
    rules.sort_by_key(|rule| rule.starts_on);
    RuleList { rules }
}
