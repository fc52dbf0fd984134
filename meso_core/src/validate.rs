//! Shape checks applied once, where mesocycle data enters the system.
//!
//! The resolver turns zero-based `week`/`position` fields straight into
//! route segments, so they must agree with where each day actually sits.

use crate::{Error, Mesocycle, Result};

impl Mesocycle {
    /// Validate the mesocycle's shape
    ///
    /// Returns a list of problems (empty if valid).
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.key.trim().is_empty() {
            errors.push("Mesocycle key is empty".to_string());
        }

        for (week_idx, week) in self.weeks.iter().enumerate() {
            for (day_idx, day) in week.days.iter().enumerate() {
                if day.week != week_idx {
                    errors.push(format!(
                        "Week {} day {} has week index {}",
                        week_idx, day_idx, day.week
                    ));
                }
                if day.position != day_idx {
                    errors.push(format!(
                        "Week {} day {} has position {}",
                        week_idx, day_idx, day.position
                    ));
                }
            }
        }

        errors
    }

    /// Like [`Mesocycle::validate`], folding any problems into one error
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }

        for error in &errors {
            tracing::warn!("Mesocycle {}: {}", self.key, error);
        }
        Err(Error::Validation(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Day, DayStatus, Error, Mesocycle, Week};

    fn day(week: usize, position: usize) -> Day {
        Day {
            status: DayStatus::Pending,
            week,
            position,
            label: None,
            slots: vec![],
        }
    }

    #[test]
    fn test_dense_mesocycle_is_valid() {
        let meso = Mesocycle {
            key: "abc".into(),
            name: Some("Hypertrophy block".into()),
            weeks: vec![
                Week { days: vec![day(0, 0), day(0, 1)] },
                Week { days: vec![day(1, 0), day(1, 1)] },
            ],
        };

        let errors = meso.validate();
        assert!(errors.is_empty(), "Validation errors: {:?}", errors);
        assert!(meso.ensure_valid().is_ok());
    }

    #[test]
    fn test_mismatched_indices_reported() {
        let meso = Mesocycle {
            key: "abc".into(),
            name: None,
            weeks: vec![Week { days: vec![day(0, 0), day(1, 3)] }],
        };

        let errors = meso.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("week index 1"));
        assert!(errors[1].contains("position 3"));
    }

    #[test]
    fn test_empty_key_rejected() {
        let meso = Mesocycle {
            key: "  ".into(),
            name: None,
            weeks: vec![],
        };

        assert!(matches!(meso.ensure_valid(), Err(Error::Validation(_))));
    }
}
