use std::{collections::BTreeSet, fmt, slice::Iter};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{Equipment, Injury, Level, ProfileError, Property};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub experience: Level,
    pub goal: Goal,
    pub available_days_per_week: u8,
    pub session_duration_min: u32,
    #[serde(default)]
    pub equipment: BTreeSet<Equipment>,
    #[serde(default)]
    pub injuries_flags: BTreeSet<Injury>,
}

impl UserProfile {
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.age == 0 {
            return Err(ProfileError::NonPositiveAge);
        }
        if self.height_cm.is_nan() || self.height_cm <= 0.0 {
            return Err(ProfileError::NonPositiveHeight(self.height_cm));
        }
        if self.weight_kg.is_nan() || self.weight_kg <= 0.0 {
            return Err(ProfileError::NonPositiveWeight(self.weight_kg));
        }
        if !(1..=7).contains(&self.available_days_per_week) {
            return Err(ProfileError::DaysPerWeekOutOfRange(
                self.available_days_per_week,
            ));
        }
        if self.session_duration_min == 0 {
            return Err(ProfileError::NonPositiveSessionDuration);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineTests {
    pub max_pushups: u32,
    pub max_bodyweight_squat: u32,
    pub max_plank_sec: u32,
    #[serde(default)]
    pub max_pullups: Option<u32>,
    pub rpe_preference: u8,
}

impl BaselineTests {
    pub const DEFAULT_PULLUPS: u32 = 6;

    /// Pull-up AMRAP used for prescriptions, substituting a default for a missing or zero test.
    #[must_use]
    pub fn pullups(&self) -> u32 {
        self.max_pullups
            .filter(|n| *n > 0)
            .unwrap_or(Self::DEFAULT_PULLUPS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    #[serde(other)]
    Other,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sex::Male => "male",
                Sex::Female => "female",
                Sex::Other => "other",
            }
        )
    }
}

#[derive(
    Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Goal {
    Strength,
    Hypertrophy,
    Endurance,
    FatLoss,
    Skills,
    GeneralFitness,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOAL: [Goal; 6] = [
            Goal::Strength,
            Goal::Hypertrophy,
            Goal::Endurance,
            Goal::FatLoss,
            Goal::Skills,
            Goal::GeneralFitness,
        ];
        GOAL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Strength => "Strength",
            Goal::Hypertrophy => "Hypertrophy",
            Goal::Endurance => "Endurance",
            Goal::FatLoss => "Fat Loss",
            Goal::Skills => "Skills",
            Goal::GeneralFitness => "General Fitness",
        }
    }
}
