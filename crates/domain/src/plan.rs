use std::{collections::BTreeMap, fmt};

use chrono::NaiveDate;
use derive_more::Into;
use log::{debug, info};
use serde::Serialize;

use crate::{
    BaselineTests, ComplianceError, Drill, PlanError, ProgramSettings, RpeError, SplitType, Theme,
    UserProfile, WorkoutExercise,
    catalog::{self, Exercise},
    day_themes, day_volume, determine_split, metabolism,
    program::{REST_DAY_NOTE, progression_notes},
    session::{cooldown, select_exercises_for_theme, session_time, warmup},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutPlan {
    pub profile: UserProfile,
    pub baseline: BaselineTests,
    pub settings: ProgramSettings,
    pub split: SplitType,
    pub bmi: f64,
    pub bmr: i64,
    pub tdee: i64,
    pub days: Vec<DayPlan>,
    pub exercise_library: Vec<&'static Exercise>,
    pub summary: Summary,
}

impl WorkoutPlan {
    #[must_use]
    pub fn training_days(&self) -> impl Iterator<Item = &DayPlan> {
        self.days.iter().filter(|d| !d.theme.is_rest())
    }

    /// Fraction of the prescribed sets that have been recorded as completed.
    ///
    /// Returns `None` if the plan contains no prescribed sets.
    #[must_use]
    pub fn compliance_rate(&self) -> Option<f64> {
        let (completed, prescribed) = self
            .training_days()
            .flat_map(|day| {
                day.exercises.iter().map(|e| {
                    let completed = day
                        .compliance_fields
                        .completed_sets
                        .get(&e.name)
                        .copied()
                        .unwrap_or(0);
                    (completed.min(e.sets), e.sets)
                })
            })
            .fold((0u32, 0u32), |(c, p), (completed, prescribed)| {
                (c + completed, p + prescribed)
            });

        if prescribed == 0 {
            None
        } else {
            Some(f64::from(completed) / f64::from(prescribed))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub day_number: u32,
    pub theme: Theme,
    pub warmup: Vec<Drill>,
    pub exercises: Vec<WorkoutExercise>,
    pub cooldown: Vec<Drill>,
    pub est_time_min: u32,
    pub progression_notes: String,
    pub compliance_fields: ComplianceFields,
}

impl DayPlan {
    #[must_use]
    pub fn volume(&self) -> f64 {
        day_volume(&self.exercises)
    }

    pub fn record_completed_sets(
        &mut self,
        exercise_name: &str,
        sets: u32,
    ) -> Result<(), ComplianceError> {
        if self.theme.is_rest() {
            return Err(ComplianceError::RestDay);
        }
        let Some(exercise) = self.exercises.iter().find(|e| e.name == exercise_name) else {
            return Err(ComplianceError::UnknownExercise(exercise_name.to_string()));
        };
        if sets > exercise.sets {
            return Err(ComplianceError::TooManySets {
                completed: sets,
                prescribed: exercise.sets,
            });
        }
        self.compliance_fields
            .completed_sets
            .insert(exercise_name.to_string(), sets);
        Ok(())
    }

    pub fn record_rpe(&mut self, rpe: Rpe) -> Result<(), ComplianceError> {
        if self.theme.is_rest() {
            return Err(ComplianceError::RestDay);
        }
        self.compliance_fields.rpe = Some(rpe);
        Ok(())
    }

    pub fn flag_pain(&mut self, description: &str) {
        let description = description.trim();
        if !description.is_empty() {
            self.compliance_fields
                .pain_flags
                .push(description.to_string());
        }
    }
}

/// User-reported tracking data of a day. Never populated by the generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComplianceFields {
    pub completed_sets: BTreeMap<String, u32>,
    pub rpe: Option<Rpe>,
    pub pain_flags: Vec<String>,
}

/// Rate of perceived exertion in the range 0 to 10 with a resolution of 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Into, Serialize)]
#[serde(into = "f32")]
pub struct Rpe(u8);

impl Rpe {
    pub fn new(value: f32) -> Result<Self, RpeError> {
        if !(0.0..=10.0).contains(&value) {
            return Err(RpeError::OutOfRange);
        }

        if (value * 2.0).fract() != 0.0 {
            return Err(RpeError::InvalidResolution);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0).round() as u8;

        Ok(Self(v))
    }
}

impl From<Rpe> for f32 {
    fn from(value: Rpe) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl TryFrom<&str> for Rpe {
    type Error = RpeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => Rpe::new(parsed_value),
            Err(_) => Err(RpeError::ParseError),
        }
    }
}

impl fmt::Display for Rpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_days: u32,
    pub training_days: u32,
    pub rest_days: u32,
    pub total_volume: u64,
    pub avg_session_time: u32,
}

/// Generate a complete program for a user.
///
/// The result only depends on the arguments, so repeated calls with the same
/// input yield identical plans.
pub fn generate_workout_plan(
    profile: UserProfile,
    baseline: BaselineTests,
    settings: ProgramSettings,
) -> Result<WorkoutPlan, PlanError> {
    profile.validate()?;
    settings.validate()?;

    let bmi = metabolism::bmi(profile.weight_kg, profile.height_cm);
    let bmr = metabolism::bmr(&profile);
    let tdee = metabolism::tdee(bmr, profile.available_days_per_week);

    let split = determine_split(&profile);
    debug!(
        "using {split} split for {} days per week of {} min",
        profile.available_days_per_week, profile.session_duration_min
    );

    let exercise_library = catalog::safe_exercises(&profile.injuries_flags, &profile.equipment);
    let themes = day_themes(
        split,
        settings.duration_days,
        profile.available_days_per_week,
    );

    let mut days = Vec::with_capacity(themes.len());
    let mut training_days = 0u32;
    let mut total_time = 0u32;
    let mut total_volume = 0.0;

    for ((day_index, theme), date) in (0u32..)
        .zip(themes)
        .zip(settings.start_date.iter_days())
    {
        let day = if theme.is_rest() {
            DayPlan {
                date,
                day_number: day_index + 1,
                theme,
                warmup: vec![],
                exercises: vec![],
                cooldown: vec![],
                est_time_min: 0,
                progression_notes: REST_DAY_NOTE.to_string(),
                compliance_fields: ComplianceFields::default(),
            }
        } else {
            let exercises =
                select_exercises_for_theme(theme, &exercise_library, &profile, &baseline);
            let est_time_min = session_time(&exercises, settings.include_warmup_cooldown);
            let (warmup, cooldown) = if settings.include_warmup_cooldown {
                (warmup(), cooldown())
            } else {
                (vec![], vec![])
            };

            training_days += 1;
            total_time += est_time_min;

            DayPlan {
                date,
                day_number: day_index + 1,
                theme,
                warmup,
                exercises,
                cooldown,
                est_time_min,
                progression_notes: progression_notes(settings.progression_model, day_index)
                    .to_string(),
                compliance_fields: ComplianceFields::default(),
            }
        };

        total_volume += day.volume();
        days.push(day);
    }

    let total_days = u32::try_from(days.len()).unwrap_or(u32::MAX);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let avg_session_time = if training_days == 0 {
        0
    } else {
        (f64::from(total_time) / f64::from(training_days)).round() as u32
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let summary = Summary {
        total_days,
        training_days,
        rest_days: total_days - training_days,
        total_volume: total_volume.round() as u64,
        avg_session_time,
    };

    info!(
        "generated {}-day {split} plan with {} training days",
        summary.total_days, summary.training_days
    );

    Ok(WorkoutPlan {
        profile,
        baseline,
        settings,
        split,
        bmi,
        bmr,
        tdee,
        days,
        exercise_library,
        summary,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeSet;

    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        Category, Equipment, Goal, Injury, Level, Prescription, ProfileError, ProgressionModel,
        SettingsError, program::tests::settings, user::tests::baseline, user::tests::profile,
    };

    pub(crate) fn plan() -> WorkoutPlan {
        generate_workout_plan(profile(), baseline(), settings()).unwrap()
    }

    #[test]
    fn test_generate_beginner_full_body_week() {
        let plan = plan();

        assert_eq!(plan.split, SplitType::FullBody);
        assert_approx_eq!(plan.bmi, 22.9, 1e-9);
        assert_eq!(plan.bmr, 1659);
        assert_eq!(plan.tdee, 2281);
        assert_eq!(
            plan.days.iter().map(|d| d.theme).collect::<Vec<_>>(),
            vec![
                Theme::FullBody,
                Theme::FullBody,
                Theme::FullBody,
                Theme::Rest,
                Theme::Rest,
                Theme::Rest,
                Theme::Rest
            ]
        );
        assert_eq!(
            plan.days.iter().map(|d| d.day_number).collect::<Vec<_>>(),
            (1..=7).collect::<Vec<_>>()
        );
        for day in plan.training_days() {
            assert_eq!(
                day.exercises.iter().map(|e| e.category).collect::<Vec<_>>(),
                vec![Category::Push, Category::Pull, Category::Legs, Category::Core]
            );
            assert!(day.exercises.iter().all(|e| e.variation == Level::Beginner));
            assert!(day.exercises.iter().all(|e| e.sets == 3));
            assert_eq!(day.warmup.len(), 6);
            assert_eq!(day.cooldown.len(), 5);
            assert_eq!(day.est_time_min, 24);
            assert_eq!(day.compliance_fields, ComplianceFields::default());
        }
        assert_eq!(
            plan.summary,
            Summary {
                total_days: 7,
                training_days: 3,
                rest_days: 4,
                total_volume: 306,
                avg_session_time: 24,
            }
        );
    }

    #[test]
    fn test_generate_dates() {
        let plan = generate_workout_plan(
            profile(),
            baseline(),
            ProgramSettings {
                duration_days: 30,
                start_date: NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
                ..settings()
            },
        )
        .unwrap();
        assert_eq!(plan.days.len(), 30);
        assert_eq!(plan.days[0].date, NaiveDate::from_ymd_opt(2024, 2, 20).unwrap());
        assert_eq!(plan.days[9].date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(plan.days[29].date, NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
    }

    #[test]
    fn test_generate_rest_days() {
        let plan = plan();
        for day in plan.days.iter().filter(|d| d.theme.is_rest()) {
            assert!(day.exercises.is_empty());
            assert!(day.warmup.is_empty());
            assert!(day.cooldown.is_empty());
            assert_eq!(day.est_time_min, 0);
            assert_eq!(day.progression_notes, REST_DAY_NOTE);
        }
    }

    #[test]
    fn test_generate_without_warmup_cooldown() {
        let plan = generate_workout_plan(
            profile(),
            baseline(),
            ProgramSettings {
                include_warmup_cooldown: false,
                ..settings()
            },
        )
        .unwrap();
        for day in plan.training_days() {
            assert!(day.warmup.is_empty());
            assert!(day.cooldown.is_empty());
            assert_eq!(day.est_time_min, 13);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(plan(), plan());
    }

    #[test]
    fn test_generate_push_pull_legs_with_equipment() {
        let plan = generate_workout_plan(
            UserProfile {
                experience: Level::Intermediate,
                goal: Goal::Hypertrophy,
                available_days_per_week: 6,
                session_duration_min: 60,
                equipment: BTreeSet::from([Equipment::PullupBar, Equipment::DipBars]),
                injuries_flags: BTreeSet::from([Injury::Knee]),
                ..profile()
            },
            baseline(),
            ProgramSettings {
                duration_days: 14,
                progression_model: ProgressionModel::Wave,
                ..settings()
            },
        )
        .unwrap();

        assert_eq!(plan.split, SplitType::PushPullLegs);
        assert_eq!(plan.summary.training_days, 12);
        assert_eq!(plan.summary.rest_days, 2);
        assert!(
            plan.exercise_library
                .iter()
                .all(|e| !e.contraindications.contains(&Injury::Knee))
        );
        assert!(plan.exercise_library.iter().any(|e| e.id == "pullup"));
        assert!(plan.days[0].progression_notes.contains("moderate"));
        assert!(plan.days[1].progression_notes.contains("heavy"));
        assert!(
            plan.training_days()
                .flat_map(|d| &d.exercises)
                .all(|e| e.sets == 4 && e.rest_sec == 75)
        );
    }

    #[test]
    fn test_generate_fat_loss_adds_finisher() {
        let plan = generate_workout_plan(
            UserProfile {
                goal: Goal::FatLoss,
                ..profile()
            },
            baseline(),
            settings(),
        )
        .unwrap();
        for day in plan.training_days() {
            let last = day.exercises.last().unwrap();
            assert_eq!(last.category, Category::Metcon);
            assert_eq!(last.reps_per_set, Prescription::Reps(vec![15, 15]));
        }
    }

    #[test]
    fn test_compliance_rate_without_training_days() {
        let mut plan = plan();
        plan.days.retain(|d| d.theme.is_rest());
        assert_eq!(plan.training_days().count(), 0);
        assert_eq!(plan.compliance_rate(), None);
    }

    #[rstest]
    #[case::profile(
        UserProfile { height_cm: 0.0, ..profile() },
        settings(),
        PlanError::InvalidProfile(ProfileError::NonPositiveHeight(0.0))
    )]
    #[case::settings(
        profile(),
        ProgramSettings { duration_days: 0, ..settings() },
        PlanError::InvalidSettings(SettingsError::UnsupportedDuration(0))
    )]
    fn test_generate_rejects_invalid_input(
        #[case] profile: UserProfile,
        #[case] settings: ProgramSettings,
        #[case] expected: PlanError,
    ) {
        assert_eq!(
            generate_workout_plan(profile, baseline(), settings),
            Err(expected)
        );
    }

    #[test]
    fn test_record_completed_sets() {
        let mut plan = plan();
        let day = &mut plan.days[0];
        assert_eq!(day.record_completed_sets("Wall Push-Up", 3), Ok(()));
        assert_eq!(day.record_completed_sets("Plank", 1), Ok(()));
        assert_eq!(
            day.record_completed_sets("Wall Push-Up", 4),
            Err(ComplianceError::TooManySets {
                completed: 4,
                prescribed: 3
            })
        );
        assert_eq!(
            day.record_completed_sets("Pull-Up", 1),
            Err(ComplianceError::UnknownExercise("Pull-Up".to_string()))
        );
        assert_eq!(
            plan.days[3].record_completed_sets("Plank", 1),
            Err(ComplianceError::RestDay)
        );
        assert_approx_eq!(plan.compliance_rate().unwrap(), 4.0 / 36.0, 1e-9);
    }

    #[test]
    fn test_record_rpe_and_pain() {
        let mut plan = plan();
        let day = &mut plan.days[1];
        assert_eq!(day.record_rpe(Rpe::new(7.5).unwrap()), Ok(()));
        day.flag_pain("  left wrist ");
        day.flag_pain("   ");
        assert_eq!(day.compliance_fields.rpe, Some(Rpe::new(7.5).unwrap()));
        assert_eq!(day.compliance_fields.pain_flags, vec!["left wrist".to_string()]);
        assert_eq!(
            plan.days[6].record_rpe(Rpe::new(5.0).unwrap()),
            Err(ComplianceError::RestDay)
        );
    }

    #[rstest]
    #[case("0", Ok(0.0))]
    #[case("7.5", Ok(7.5))]
    #[case("10", Ok(10.0))]
    #[case("10.5", Err(RpeError::OutOfRange))]
    #[case("-1", Err(RpeError::OutOfRange))]
    #[case("7.2", Err(RpeError::InvalidResolution))]
    #[case("7.46", Err(RpeError::InvalidResolution))]
    #[case("9.97", Err(RpeError::InvalidResolution))]
    #[case("0.5", Ok(0.5))]
    #[case("hard", Err(RpeError::ParseError))]
    fn test_rpe_try_from(#[case] value: &str, #[case] expected: Result<f32, RpeError>) {
        assert_eq!(Rpe::try_from(value).map(f32::from), expected);
    }

    #[test]
    fn test_rpe_display_and_serialize() {
        let rpe = Rpe::new(8.5).unwrap();
        assert_eq!(rpe.to_string(), "8.5");
        assert_eq!(serde_json::to_string(&rpe).unwrap(), "8.5");
    }
}
