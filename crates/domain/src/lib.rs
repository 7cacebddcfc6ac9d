#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod metabolism;

mod error;
mod exercise;
mod plan;
mod program;
mod session;
mod split;
mod statistics;
mod user;

pub use catalog::Exercise;
pub use error::{
    CatalogError, ComplianceError, PlanError, ProfileError, RpeError, SettingsError,
};
pub use exercise::{Category, Equipment, Injury, Level, Muscle, Property};
pub use plan::{ComplianceFields, DayPlan, Rpe, Summary, WorkoutPlan, generate_workout_plan};
pub use program::{
    DeloadRule, ProgramSettings, ProgressionModel, REST_DAY_NOTE, SUPPORTED_DURATIONS, Units,
    progression_notes,
};
pub use session::{
    Drill, Prescription, WorkoutExercise, cooldown, day_volume, hold_sec, rep_range, rest_sec,
    select_exercise, select_exercises_for_theme, session_time, sets, starting_reps, tempo, warmup,
};
pub use split::{SplitType, Theme, day_themes, determine_split};
pub use statistics::{MuscleCount, VolumePoint, muscle_distribution, volume_chart_data};
pub use user::{BaselineTests, Goal, Sex, UserProfile};
