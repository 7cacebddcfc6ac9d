use std::slice::Iter;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn iter_filter() -> Iter<'static, Self> {
        Self::iter()
    }
    fn name(self) -> &'static str;
}

#[derive(
    Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Push,
    Pull,
    Legs,
    Core,
    Metcon,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 5] = [
            Category::Push,
            Category::Pull,
            Category::Legs,
            Category::Core,
            Category::Metcon,
        ];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Push => "Push",
            Category::Pull => "Pull",
            Category::Legs => "Legs",
            Category::Core => "Core",
            Category::Metcon => "Metcon",
        }
    }
}

/// Difficulty of an exercise, also used as the experience tier of a user.
///
/// The declaration order defines the ordering from easiest to hardest.
#[derive(
    Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Whether an exercise of `difficulty` may be prescribed to a user at this level.
    ///
    /// Users see exercises at their own level or exactly one tier below it.
    #[must_use]
    pub fn allows(self, difficulty: Level) -> bool {
        matches!(
            (self, difficulty),
            (Level::Beginner, Level::Beginner)
                | (Level::Intermediate, Level::Intermediate | Level::Beginner)
                | (Level::Advanced, Level::Advanced | Level::Intermediate)
        )
    }
}

impl Property for Level {
    fn iter() -> Iter<'static, Level> {
        static LEVEL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
        LEVEL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

#[derive(
    Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Muscle {
    Chest,
    Shoulders,
    Triceps,
    Biceps,
    Forearms,
    Lats,
    UpperBack,
    LowerBack,
    Core,
    Obliques,
    HipFlexors,
    Glutes,
    Quads,
    Hamstrings,
    Calves,
    Cardio,
}

impl Muscle {
    pub const DEFAULT_COLOR: &'static str = "#9ca3af";

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Muscle::Chest => "#ef4444",
            Muscle::Shoulders => "#f59e0b",
            Muscle::Triceps => "#f97316",
            Muscle::Biceps => "#6366f1",
            Muscle::Forearms => "#0ea5e9",
            Muscle::Lats => "#3b82f6",
            Muscle::UpperBack => "#2563eb",
            Muscle::LowerBack => "#1e40af",
            Muscle::Core => "#a855f7",
            Muscle::Obliques => "#d946ef",
            Muscle::HipFlexors => "#ec4899",
            Muscle::Glutes => "#14b8a6",
            Muscle::Quads => "#22c55e",
            Muscle::Hamstrings => "#10b981",
            Muscle::Calves => "#84cc16",
            Muscle::Cardio => "#f43f5e",
        }
    }
}

impl Property for Muscle {
    fn iter() -> Iter<'static, Muscle> {
        static MUSCLES: [Muscle; 16] = [
            Muscle::Chest,
            Muscle::Shoulders,
            Muscle::Triceps,
            Muscle::Biceps,
            Muscle::Forearms,
            Muscle::Lats,
            Muscle::UpperBack,
            Muscle::LowerBack,
            Muscle::Core,
            Muscle::Obliques,
            Muscle::HipFlexors,
            Muscle::Glutes,
            Muscle::Quads,
            Muscle::Hamstrings,
            Muscle::Calves,
            Muscle::Cardio,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Muscle::Chest => "Chest",
            Muscle::Shoulders => "Shoulders",
            Muscle::Triceps => "Triceps",
            Muscle::Biceps => "Biceps",
            Muscle::Forearms => "Forearms",
            Muscle::Lats => "Lats",
            Muscle::UpperBack => "Upper Back",
            Muscle::LowerBack => "Lower Back",
            Muscle::Core => "Core",
            Muscle::Obliques => "Obliques",
            Muscle::HipFlexors => "Hip Flexors",
            Muscle::Glutes => "Glutes",
            Muscle::Quads => "Quads",
            Muscle::Hamstrings => "Hamstrings",
            Muscle::Calves => "Calves",
            Muscle::Cardio => "Cardio",
        }
    }
}

#[derive(
    Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Equipment {
    None,
    PullupBar,
    DipBars,
    Rings,
    ResistanceBand,
    Bench,
    Parallettes,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 6] = [
            Equipment::PullupBar,
            Equipment::DipBars,
            Equipment::Rings,
            Equipment::ResistanceBand,
            Equipment::Bench,
            Equipment::Parallettes,
        ];
        EQUIPMENT.iter()
    }

    fn iter_filter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 7] = [
            Equipment::PullupBar,
            Equipment::DipBars,
            Equipment::Rings,
            Equipment::ResistanceBand,
            Equipment::Bench,
            Equipment::Parallettes,
            Equipment::None,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::None => "No Equipment",
            Equipment::PullupBar => "Pull Up Bar",
            Equipment::DipBars => "Dip Bars",
            Equipment::Rings => "Gymnastic Rings",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::Bench => "Bench",
            Equipment::Parallettes => "Parallettes",
        }
    }
}

/// Injury tag reported by a user or listed as a contraindication of an exercise.
///
/// `None` is a valid member of a user's injury set and never matches a contraindication.
#[derive(
    Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Injury {
    None,
    Wrist,
    Elbow,
    Shoulder,
    Neck,
    LowerBack,
    Knee,
    Ankle,
}

impl Property for Injury {
    fn iter() -> Iter<'static, Injury> {
        static INJURY: [Injury; 7] = [
            Injury::Wrist,
            Injury::Elbow,
            Injury::Shoulder,
            Injury::Neck,
            Injury::LowerBack,
            Injury::Knee,
            Injury::Ankle,
        ];
        INJURY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Injury::None => "None",
            Injury::Wrist => "Wrist",
            Injury::Elbow => "Elbow",
            Injury::Shoulder => "Shoulder",
            Injury::Neck => "Neck",
            Injury::LowerBack => "Lower Back",
            Injury::Knee => "Knee",
            Injury::Ankle => "Ankle",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Level::Beginner, Level::Beginner, true)]
    #[case(Level::Beginner, Level::Intermediate, false)]
    #[case(Level::Beginner, Level::Advanced, false)]
    #[case(Level::Intermediate, Level::Beginner, true)]
    #[case(Level::Intermediate, Level::Intermediate, true)]
    #[case(Level::Intermediate, Level::Advanced, false)]
    #[case(Level::Advanced, Level::Beginner, false)]
    #[case(Level::Advanced, Level::Intermediate, true)]
    #[case(Level::Advanced, Level::Advanced, true)]
    fn test_level_allows(#[case] experience: Level, #[case] difficulty: Level, #[case] expected: bool) {
        assert_eq!(experience.allows(difficulty), expected);
    }

    #[test]
    fn test_level_order() {
        assert!(Level::Beginner < Level::Intermediate);
        assert!(Level::Intermediate < Level::Advanced);
    }

    #[rstest]
    #[case(Muscle::UpperBack, "upper_back")]
    #[case(Muscle::HipFlexors, "hip_flexors")]
    #[case(Muscle::Chest, "chest")]
    fn test_muscle_display_and_parse(#[case] muscle: Muscle, #[case] tag: &str) {
        assert_eq!(muscle.to_string(), tag);
        assert_eq!(Muscle::from_str(tag), Ok(muscle));
    }

    #[test]
    fn test_muscle_unknown_tag() {
        assert!(Muscle::from_str("neck").is_err());
    }

    #[test]
    fn test_muscle_colors_are_distinct() {
        let mut colors = Muscle::iter().map(|m| m.color()).collect::<Vec<_>>();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), Muscle::iter().len());
        assert!(!colors.contains(&Muscle::DEFAULT_COLOR));
    }

    #[test]
    fn test_equipment_filter_includes_none() {
        assert!(!Equipment::iter().any(|e| *e == Equipment::None));
        assert!(Equipment::iter_filter().any(|e| *e == Equipment::None));
    }

    #[test]
    fn test_injury_serde_tag() {
        assert_eq!(
            serde_json::to_string(&Injury::LowerBack).unwrap(),
            "\"lower_back\""
        );
        assert_eq!(
            serde_json::from_str::<Injury>("\"knee\"").unwrap(),
            Injury::Knee
        );
    }
}
