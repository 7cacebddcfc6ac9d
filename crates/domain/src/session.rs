use log::debug;
use serde::Serialize;

use crate::{
    BaselineTests, Category, Goal, Level, Theme, UserProfile,
    catalog::{self, Exercise},
};

pub const WARMUP_MIN: f64 = 6.0;
pub const COOLDOWN_MIN: f64 = 5.0;
pub const SECONDS_PER_REP: f64 = 3.0;
pub const MAX_HOLD_SEC: u32 = 60;
pub const CORE_DEFAULT_AMRAP: u32 = 12;

const FINISHER_SETS: u32 = 2;
const FINISHER_REPS: u32 = 15;
const FINISHER_REST_SEC: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutExercise {
    pub name: String,
    pub category: Category,
    pub variation: Level,
    pub sets: u32,
    pub reps_per_set: Prescription,
    pub rest_sec: u32,
    pub tempo: String,
    pub target_muscles: Vec<String>,
    pub notes: String,
}

impl WorkoutExercise {
    /// Number of repetitions performed over all sets, counting three seconds of a hold as one rep.
    #[must_use]
    pub fn total_reps(&self) -> f64 {
        match &self.reps_per_set {
            Prescription::Reps(reps) => reps.iter().map(|r| f64::from(*r)).sum(),
            Prescription::Hold { hold_sec } => self.hold_equivalent(*hold_sec),
        }
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        match &self.reps_per_set {
            Prescription::Reps(reps) => {
                if reps.is_empty() {
                    return 0.0;
                }
                #[allow(clippy::cast_precision_loss)]
                let avg = reps.iter().map(|r| f64::from(*r)).sum::<f64>() / reps.len() as f64;
                f64::from(self.sets) * avg
            }
            Prescription::Hold { hold_sec } => self.hold_equivalent(*hold_sec),
        }
    }

    #[must_use]
    pub fn duration_min(&self) -> f64 {
        (self.total_reps() * SECONDS_PER_REP
            + f64::from(self.sets.saturating_sub(1)) * f64::from(self.rest_sec))
            / 60.0
    }

    fn hold_equivalent(&self, hold_sec: u32) -> f64 {
        f64::from(self.sets) * (f64::from(hold_sec) / SECONDS_PER_REP)
    }
}

/// What to perform in each set: a rep count per set or an isometric hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Prescription {
    Reps(Vec<u32>),
    Hold { hold_sec: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drill {
    pub name: String,
    pub duration_sec: u32,
}

const WARMUP: [(&str, u32); 6] = [
    ("Jumping Jacks", 60),
    ("Arm Circles", 60),
    ("Hip Circles", 60),
    ("Scapular Push-Ups", 60),
    ("Bodyweight Squats", 60),
    ("Inchworms", 60),
];

const COOLDOWN: [(&str, u32); 5] = [
    ("Child's Pose", 60),
    ("Chest Doorway Stretch", 60),
    ("Standing Hamstring Stretch", 60),
    ("Standing Quad Stretch", 60),
    ("Box Breathing", 60),
];

#[must_use]
pub fn warmup() -> Vec<Drill> {
    drills(&WARMUP)
}

#[must_use]
pub fn cooldown() -> Vec<Drill> {
    drills(&COOLDOWN)
}

fn drills(items: &[(&str, u32)]) -> Vec<Drill> {
    items
        .iter()
        .map(|(name, duration_sec)| Drill {
            name: (*name).to_string(),
            duration_sec: *duration_sec,
        })
        .collect()
}

#[must_use]
pub fn rep_range(goal: Goal) -> (u32, u32) {
    match goal {
        Goal::Strength => (4, 8),
        Goal::Hypertrophy | Goal::GeneralFitness => (8, 15),
        Goal::Endurance | Goal::FatLoss => (12, 20),
        Goal::Skills => (5, 10),
    }
}

#[must_use]
pub fn rest_sec(goal: Goal) -> u32 {
    match goal {
        Goal::Strength => 120,
        Goal::Hypertrophy => 75,
        Goal::Endurance | Goal::FatLoss => 45,
        Goal::Skills => 90,
        Goal::GeneralFitness => 60,
    }
}

#[must_use]
pub fn tempo(goal: Goal) -> &'static str {
    if goal == Goal::Strength {
        "3-1-2"
    } else {
        "2-1-1"
    }
}

#[must_use]
pub fn sets(experience: Level, goal: Goal) -> u32 {
    let base = match experience {
        Level::Beginner => 3,
        Level::Intermediate => 4,
        Level::Advanced => 5,
    };
    match goal {
        Goal::Strength => (base + 1).min(5),
        Goal::Endurance | Goal::FatLoss => base.saturating_sub(1).max(2),
        Goal::Hypertrophy | Goal::Skills | Goal::GeneralFitness => base,
    }
}

/// Reps per set derived from an AMRAP test: 60 % of the test, clamped to the goal's rep range.
#[must_use]
pub fn starting_reps(amrap: u32, goal: Goal) -> u32 {
    let (min, max) = rep_range(goal);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let reps = (f64::from(amrap) * 0.6).ceil() as u32;
    reps.clamp(min, max)
}

#[must_use]
pub fn hold_sec(baseline: &BaselineTests) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let hold = (f64::from(baseline.max_plank_sec) * 0.6).round() as u32;
    hold.min(MAX_HOLD_SEC)
}

fn source_amrap(category: Category, baseline: &BaselineTests) -> u32 {
    match category {
        Category::Push => baseline.max_pushups,
        Category::Legs => baseline.max_bodyweight_squat,
        Category::Pull => baseline.pullups(),
        Category::Core | Category::Metcon => CORE_DEFAULT_AMRAP,
    }
}

fn pick_index(experience: Level, candidates: usize) -> usize {
    let last = candidates.saturating_sub(1);
    match experience {
        Level::Beginner => 0,
        Level::Intermediate => last.min(1),
        Level::Advanced => last.min(2),
    }
}

/// Pick one exercise for `category` among `safe_exercises`.
///
/// Candidates are restricted to the difficulty window of the user's experience
/// and ordered by ascending difficulty. The pick is deterministic.
#[must_use]
pub fn select_exercise(
    category: Category,
    safe_exercises: &[&'static Exercise],
    experience: Level,
) -> Option<&'static Exercise> {
    let mut candidates = safe_exercises
        .iter()
        .copied()
        .filter(|e| e.category == category && experience.allows(e.difficulty))
        .collect::<Vec<_>>();

    if candidates.is_empty() {
        return None;
    }

    candidates.sort_by_key(|e| e.difficulty);
    Some(candidates[pick_index(experience, candidates.len())])
}

#[must_use]
pub fn select_exercises_for_theme(
    theme: Theme,
    safe_exercises: &[&'static Exercise],
    profile: &UserProfile,
    baseline: &BaselineTests,
) -> Vec<WorkoutExercise> {
    let goal = profile.goal;
    let set_count = sets(profile.experience, goal);

    let mut exercises = theme
        .categories()
        .iter()
        .filter_map(|category| {
            let Some(exercise) = select_exercise(*category, safe_exercises, profile.experience)
            else {
                debug!("no safe {category} exercise available for {theme} day");
                return None;
            };

            let reps_per_set = if *category == Category::Core
                && exercise.name.to_lowercase().contains("plank")
            {
                Prescription::Hold {
                    hold_sec: hold_sec(baseline),
                }
            } else {
                let reps = starting_reps(source_amrap(*category, baseline), goal);
                Prescription::Reps(vec![reps; set_count as usize])
            };

            Some(WorkoutExercise {
                name: exercise.name.to_string(),
                category: *category,
                variation: exercise.difficulty,
                sets: set_count,
                reps_per_set,
                rest_sec: rest_sec(goal),
                tempo: tempo(goal).to_string(),
                target_muscles: target_muscles(exercise),
                notes: catalog::harder(exercise)
                    .map(|next| format!("Next progression: {}", next.name))
                    .unwrap_or_default(),
            })
        })
        .collect::<Vec<_>>();

    if matches!(goal, Goal::FatLoss | Goal::Endurance) && !theme.is_rest() {
        match safe_exercises
            .iter()
            .find(|e| e.category == Category::Metcon && e.difficulty == Level::Beginner)
        {
            Some(finisher) => exercises.push(WorkoutExercise {
                name: finisher.name.to_string(),
                category: Category::Metcon,
                variation: Level::Beginner,
                sets: FINISHER_SETS,
                reps_per_set: Prescription::Reps(vec![FINISHER_REPS; FINISHER_SETS as usize]),
                rest_sec: FINISHER_REST_SEC,
                tempo: "fast".to_string(),
                target_muscles: target_muscles(finisher),
                notes: "Finisher".to_string(),
            }),
            None => debug!("no safe finisher available for {theme} day"),
        }
    }

    exercises
}

fn target_muscles(exercise: &Exercise) -> Vec<String> {
    exercise
        .primary_muscles
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Estimated session duration in minutes.
#[must_use]
pub fn session_time(exercises: &[WorkoutExercise], include_warmup_cooldown: bool) -> u32 {
    let framing = if include_warmup_cooldown {
        WARMUP_MIN + COOLDOWN_MIN
    } else {
        0.0
    };
    let total = exercises
        .iter()
        .fold(framing, |total, e| total + e.duration_min());
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let minutes = total.round() as u32;
    minutes
}

/// Training volume of a day in reps, counting three seconds of a hold as one rep.
#[must_use]
pub fn day_volume(exercises: &[WorkoutExercise]) -> f64 {
    exercises.iter().map(WorkoutExercise::volume).sum()
}
