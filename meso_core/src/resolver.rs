//! Current-day resolution.
//!
//! Picks the single day a user should land on when opening a mesocycle:
//! 1. The first day already in progress
//! 2. Otherwise the first day not yet finished
//! 3. Otherwise week 1, day 1
//!
//! Days are scanned in (week, position) order and the first match wins.

use crate::{Day, Error, Mesocycle, StatusSets};
use std::fmt;
use std::str::FromStr;

/// A day's location, with 1-based week and day segments
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayRoute {
    pub key: String,
    pub week: usize,
    pub day: usize,
}

impl DayRoute {
    /// Route for a day, converting its zero-based indices
    pub fn for_day(key: &str, day: &Day) -> Self {
        Self {
            key: key.to_string(),
            week: day.week + 1,
            day: day.position + 1,
        }
    }

    /// Week 1, day 1 of a mesocycle
    pub fn first(key: &str) -> Self {
        Self {
            key: key.to_string(),
            week: 1,
            day: 1,
        }
    }
}

impl fmt::Display for DayRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/mesocycles/{}/weeks/{}/days/{}",
            self.key, self.week, self.day
        )
    }
}

impl FromStr for DayRoute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.trim_end_matches('/').split('/').collect();

        let (key, week, day) = match segments.as_slice() {
            ["", "mesocycles", key, "weeks", week, "days", day] if !key.is_empty() => {
                (*key, *week, *day)
            }
            _ => return Err(Error::Route(format!("unrecognized path {:?}", s))),
        };

        let parse_segment = |name: &str, raw: &str| -> Result<usize, Error> {
            match raw.parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(Error::Route(format!(
                    "{} segment must be a positive integer, got {:?}",
                    name, raw
                ))),
            }
        };

        Ok(Self {
            key: key.to_string(),
            week: parse_segment("week", week)?,
            day: parse_segment("day", day)?,
        })
    }
}

/// Determine the day to land on within a mesocycle
pub fn current_day(meso: &Mesocycle, statuses: &StatusSets) -> DayRoute {
    if let Some(day) = meso.days().find(|d| statuses.is_in_progress(d.status)) {
        tracing::debug!(
            "Mesocycle {}: resuming in-progress day (week {}, position {})",
            meso.key,
            day.week,
            day.position
        );
        return DayRoute::for_day(&meso.key, day);
    }

    if let Some(day) = meso.days().find(|d| !statuses.is_finished(d.status)) {
        tracing::debug!(
            "Mesocycle {}: first unfinished day is (week {}, position {})",
            meso.key,
            day.week,
            day.position
        );
        return DayRoute::for_day(&meso.key, day);
    }

    tracing::debug!(
        "Mesocycle {}: no open days, falling back to week 1 day 1",
        meso.key
    );
    DayRoute::first(&meso.key)
}

/// Route path for the current day, or an empty string without a mesocycle
pub fn resolve_with(meso: Option<&Mesocycle>, statuses: &StatusSets) -> String {
    match meso {
        Some(meso) => current_day(meso, statuses).to_string(),
        None => String::new(),
    }
}

/// [`resolve_with`] using the default status sets
pub fn resolve(meso: Option<&Mesocycle>) -> String {
    resolve_with(meso, &StatusSets::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DayStatus, Week};
    use DayStatus::*;

    fn day(week: usize, position: usize, status: DayStatus) -> Day {
        Day {
            status,
            week,
            position,
            label: None,
            slots: vec![],
        }
    }

    /// Build a mesocycle from a status grid, one row per week
    fn meso(key: &str, grid: &[&[DayStatus]]) -> Mesocycle {
        Mesocycle {
            key: key.into(),
            name: None,
            weeks: grid
                .iter()
                .enumerate()
                .map(|(w, row)| Week {
                    days: row
                        .iter()
                        .enumerate()
                        .map(|(p, status)| day(w, p, *status))
                        .collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_absent_mesocycle_is_empty() {
        assert_eq!(resolve(None), "");
    }

    #[test]
    fn test_zero_weeks_falls_back_to_first_day() {
        let m = meso("k1", &[]);
        assert_eq!(resolve(Some(&m)), "/mesocycles/k1/weeks/1/days/1");
    }

    #[test]
    fn test_weeks_without_days_fall_back_to_first_day() {
        let m = meso("k1", &[&[], &[]]);
        assert_eq!(resolve(Some(&m)), "/mesocycles/k1/weeks/1/days/1");
    }

    #[test]
    fn test_all_finished_falls_back_to_first_day() {
        let m = meso("done", &[&[Complete, Skipped], &[Complete, Complete]]);
        assert_eq!(resolve(Some(&m)), "/mesocycles/done/weeks/1/days/1");
    }

    #[test]
    fn test_in_progress_day_wins() {
        let m = meso("abc", &[&[Pending, Started], &[Pending, Pending]]);
        assert_eq!(resolve(Some(&m)), "/mesocycles/abc/weeks/1/days/2");
    }

    #[test]
    fn test_in_progress_beats_earlier_unfinished_day() {
        let m = meso("abc", &[&[Complete, Ready], &[Partial, Pending]]);
        assert_eq!(resolve(Some(&m)), "/mesocycles/abc/weeks/2/days/1");
    }

    #[test]
    fn test_first_unfinished_day_when_none_in_progress() {
        let m = meso("abc", &[&[Complete, Skipped], &[Pending, Pending]]);
        assert_eq!(resolve(Some(&m)), "/mesocycles/abc/weeks/2/days/1");
    }

    #[test]
    fn test_first_in_progress_in_scan_order_wins() {
        let m = meso("abc", &[&[Complete, Complete], &[Started, Started]]);
        let route = current_day(&m, &StatusSets::default());
        assert_eq!(route, DayRoute { key: "abc".into(), week: 2, day: 1 });
    }

    #[test]
    fn test_unknown_status_counts_as_unfinished() {
        let m = meso("abc", &[&[Complete, Unknown]]);
        assert_eq!(resolve(Some(&m)), "/mesocycles/abc/weeks/1/days/2");
    }

    #[test]
    fn test_custom_status_sets() {
        let m = meso("abc", &[&[Ready, Pending]]);
        let statuses = StatusSets {
            in_progress: vec![Pending],
            finished: vec![Complete],
        };
        assert_eq!(
            resolve_with(Some(&m), &statuses),
            "/mesocycles/abc/weeks/1/days/2"
        );
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let m = meso("abc", &[&[Complete, Ready], &[Pending, Pending]]);
        assert_eq!(resolve(Some(&m)), resolve(Some(&m)));
    }

    #[test]
    fn test_route_parses_back() {
        let route: DayRoute = "/mesocycles/abc/weeks/3/days/2".parse().unwrap();
        assert_eq!(route, DayRoute { key: "abc".into(), week: 3, day: 2 });
        assert_eq!(route.to_string(), "/mesocycles/abc/weeks/3/days/2");
    }

    #[test]
    fn test_route_rejects_bad_paths() {
        for bad in [
            "",
            "/mesocycles/abc/weeks/0/days/1",
            "/mesocycles/abc/weeks/1/days/x",
            "/mesocycles//weeks/1/days/1",
            "/plans/abc/weeks/1/days/1",
            "mesocycles/abc/weeks/1/days/1",
        ] {
            let result = bad.parse::<DayRoute>();
            assert!(matches!(result, Err(Error::Route(_))), "accepted {:?}", bad);
        }
    }
}
