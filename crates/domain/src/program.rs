use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{SettingsError, SplitType};

pub const SUPPORTED_DURATIONS: [u32; 3] = [7, 14, 30];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSettings {
    pub duration_days: u32,
    pub split_preference: SplitType,
    pub start_date: NaiveDate,
    pub units: Units,
    pub include_warmup_cooldown: bool,
    pub progression_model: ProgressionModel,
    pub deload_rule: DeloadRule,
    pub auto_substitute_if_no_equipment: bool,
}

impl ProgramSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !SUPPORTED_DURATIONS.contains(&self.duration_days) {
            return Err(SettingsError::UnsupportedDuration(self.duration_days));
        }
        if self
            .start_date
            .checked_add_days(Days::new(u64::from(self.duration_days)))
            .is_none()
        {
            return Err(SettingsError::StartDateOutOfRange(self.start_date));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Units {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeloadRule {
    None,
    #[serde(rename = "every_3rd_week")]
    #[strum(serialize = "every_3rd_week")]
    Every3rdWeek,
    #[serde(rename = "every_4th_week")]
    #[strum(serialize = "every_4th_week")]
    Every4thWeek,
}

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProgressionModel {
    Linear,
    DoubleProgression,
    AmrapBased,
    Wave,
    #[serde(other)]
    Unknown,
}

pub const REST_DAY_NOTE: &str = "Rest and recovery";

/// Progression guidance for the training day at the zero-based `day_index`.
#[must_use]
pub fn progression_notes(model: ProgressionModel, day_index: u32) -> &'static str {
    match model {
        ProgressionModel::Linear => {
            "Linear progression: add +1 rep to every set once all sets are completed with good form."
        }
        ProgressionModel::DoubleProgression => {
            "Double progression: hit the top of the rep range on all sets, then move to a harder variation."
        }
        ProgressionModel::AmrapBased => {
            if day_index % 7 == 6 {
                "AMRAP test day: perform one max-effort set per exercise to recalibrate."
            } else {
                "Train at 60% of your latest AMRAP."
            }
        }
        ProgressionModel::Wave => match day_index % 3 {
            0 => "Wave: moderate day, train at the prescribed volume.",
            1 => "Wave: heavy day, push close to failure on the last set.",
            _ => "Wave: light day, reduce effort and focus on technique.",
        },
        ProgressionModel::Unknown => "",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    pub(crate) fn settings() -> ProgramSettings {
        ProgramSettings {
            duration_days: 7,
            split_preference: SplitType::FullBody,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            units: Units::Metric,
            include_warmup_cooldown: true,
            progression_model: ProgressionModel::Linear,
            deload_rule: DeloadRule::Every4thWeek,
            auto_substitute_if_no_equipment: true,
        }
    }

    #[rstest]
    #[case(7, Ok(()))]
    #[case(14, Ok(()))]
    #[case(30, Ok(()))]
    #[case(0, Err(SettingsError::UnsupportedDuration(0)))]
    #[case(21, Err(SettingsError::UnsupportedDuration(21)))]
    fn test_validate_settings(#[case] duration_days: u32, #[case] expected: Result<(), SettingsError>) {
        assert_eq!(
            ProgramSettings {
                duration_days,
                ..settings()
            }
            .validate(),
            expected
        );
    }

    #[test]
    fn test_validate_settings_start_date_out_of_range() {
        assert_eq!(
            ProgramSettings {
                start_date: NaiveDate::MAX,
                ..settings()
            }
            .validate(),
            Err(SettingsError::StartDateOutOfRange(NaiveDate::MAX))
        );
    }

    #[test]
    fn test_progression_notes_static_models() {
        for day in 0..14 {
            assert_eq!(
                progression_notes(ProgressionModel::Linear, day),
                progression_notes(ProgressionModel::Linear, 0)
            );
            assert_eq!(
                progression_notes(ProgressionModel::DoubleProgression, day),
                progression_notes(ProgressionModel::DoubleProgression, 0)
            );
            assert_eq!(progression_notes(ProgressionModel::Unknown, day), "");
        }
    }

    #[rstest]
    #[case(0, false)]
    #[case(5, false)]
    #[case(6, true)]
    #[case(13, true)]
    #[case(14, false)]
    fn test_progression_notes_amrap(#[case] day: u32, #[case] test_day: bool) {
        assert_eq!(
            progression_notes(ProgressionModel::AmrapBased, day).starts_with("AMRAP test day"),
            test_day
        );
    }

    #[test]
    fn test_progression_notes_wave_cycle() {
        let notes = (0..6)
            .map(|day| progression_notes(ProgressionModel::Wave, day))
            .collect::<Vec<_>>();
        assert!(notes[0].contains("moderate"));
        assert!(notes[1].contains("heavy"));
        assert!(notes[2].contains("light"));
        assert_eq!(notes[0..3], notes[3..6]);
    }

    #[test]
    fn test_unknown_progression_model() {
        assert_eq!(
            serde_json::from_str::<ProgressionModel>("\"periodized\"").unwrap(),
            ProgressionModel::Unknown
        );
        assert_eq!(
            serde_json::from_str::<ProgressionModel>("\"double_progression\"").unwrap(),
            ProgressionModel::DoubleProgression
        );
    }

    #[test]
    fn test_deload_rule_tags() {
        assert_eq!(
            serde_json::to_string(&DeloadRule::Every4thWeek).unwrap(),
            "\"every_4th_week\""
        );
        assert_eq!(DeloadRule::Every3rdWeek.to_string(), "every_3rd_week");
    }
}
