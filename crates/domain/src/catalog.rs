use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::{Category, CatalogError, Equipment, Injury, Level, Muscle};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub difficulty: Level,
    pub primary_muscles: &'static [Muscle],
    pub progressions: Progressions,
    pub contraindications: &'static [Injury],
    pub requires_equipment: &'static [Equipment],
}

impl Exercise {
    #[must_use]
    pub fn is_bodyweight(&self) -> bool {
        self.requires_equipment.contains(&Equipment::None)
    }

    /// Whether the exercise can be performed with `equipment`.
    ///
    /// The given set is expected to contain `Equipment::None` already.
    #[must_use]
    pub fn is_available_with(&self, equipment: &BTreeSet<Equipment>) -> bool {
        self.requires_equipment.iter().any(|e| equipment.contains(e))
    }

    #[must_use]
    pub fn is_safe_for(&self, injuries: &BTreeSet<Injury>) -> bool {
        !self.contraindications.iter().any(|i| injuries.contains(i))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Progressions {
    pub easier: Option<&'static str>,
    pub harder: Option<&'static str>,
}

impl Progressions {
    const fn none() -> Self {
        Self {
            easier: None,
            harder: None,
        }
    }

    const fn harder(id: &'static str) -> Self {
        Self {
            easier: None,
            harder: Some(id),
        }
    }

    const fn easier(id: &'static str) -> Self {
        Self {
            easier: Some(id),
            harder: None,
        }
    }

    const fn between(easier: &'static str, harder: &'static str) -> Self {
        Self {
            easier: Some(easier),
            harder: Some(harder),
        }
    }
}

static INDEX: std::sync::LazyLock<BTreeMap<&'static str, usize>> =
    std::sync::LazyLock::new(|| {
        EXERCISES
            .iter()
            .enumerate()
            .map(|(idx, e)| (e.id, idx))
            .collect()
    });

#[must_use]
pub fn exercise_by_id(id: &str) -> Option<&'static Exercise> {
    INDEX.get(id).map(|idx| &EXERCISES[*idx])
}

pub fn exercises_by_category(category: Category) -> impl Iterator<Item = &'static Exercise> {
    EXERCISES.iter().filter(move |e| e.category == category)
}

/// Exercises that can be performed with the given equipment.
///
/// Bodyweight exercises are always included.
pub fn exercises_for_equipment(
    equipment: &BTreeSet<Equipment>,
) -> impl Iterator<Item = &'static Exercise> + '_ {
    EXERCISES
        .iter()
        .filter(move |e| e.is_bodyweight() || e.is_available_with(equipment))
}

/// Exercises without a contraindication for `injuries` that can be performed with `equipment`.
///
/// The result follows the declaration order of the catalog.
#[must_use]
pub fn safe_exercises(
    injuries: &BTreeSet<Injury>,
    equipment: &BTreeSet<Equipment>,
) -> Vec<&'static Exercise> {
    let mut available = equipment.clone();
    available.insert(Equipment::None);

    EXERCISES
        .iter()
        .filter(|e| e.is_safe_for(injuries) && e.is_available_with(&available))
        .collect()
}

#[must_use]
pub fn easier(exercise: &Exercise) -> Option<&'static Exercise> {
    exercise.progressions.easier.and_then(exercise_by_id)
}

#[must_use]
pub fn harder(exercise: &Exercise) -> Option<&'static Exercise> {
    exercise.progressions.harder.and_then(exercise_by_id)
}

/// The progression line an exercise belongs to, from the easiest to the hardest variant.
#[must_use]
pub fn progression_chain(exercise: &'static Exercise) -> Vec<&'static Exercise> {
    let mut first = exercise;
    let mut seen = BTreeSet::from([first.id]);
    while let Some(e) = easier(first) {
        if !seen.insert(e.id) {
            break;
        }
        first = e;
    }

    let mut chain = vec![first];
    let mut seen = BTreeSet::from([first.id]);
    let mut current = first;
    while let Some(e) = harder(current) {
        if !seen.insert(e.id) {
            break;
        }
        chain.push(e);
        current = e;
    }
    chain
}

pub fn check_integrity() -> Result<(), CatalogError> {
    let mut ids = BTreeSet::new();
    for exercise in EXERCISES.iter() {
        if !ids.insert(exercise.id) {
            return Err(CatalogError::DuplicateId(exercise.id));
        }
    }

    for exercise in EXERCISES.iter() {
        for target in [exercise.progressions.easier, exercise.progressions.harder]
            .into_iter()
            .flatten()
        {
            if target == exercise.id {
                return Err(CatalogError::SelfReference(exercise.id));
            }
            if !ids.contains(target) {
                return Err(CatalogError::DanglingProgression {
                    id: exercise.id,
                    target,
                });
            }
        }
    }

    Ok(())
}

const NO_EQUIPMENT: &[Equipment] = &[Equipment::None];

static EXERCISES: [Exercise; 45] = [
    // Push
    Exercise {
        id: "wall_pushup",
        name: "Wall Push-Up",
        category: Category::Push,
        difficulty: Level::Beginner,
        primary_muscles: &[Muscle::Chest, Muscle::Triceps, Muscle::Shoulders],
        progressions: Progressions::harder("incline_pushup"),
        contraindications: &[],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "incline_pushup",
        name: "Incline Push-Up",
        category: Category::Push,
        difficulty: Level::Beginner,
        primary_muscles: &[Muscle::Chest, Muscle::Triceps, Muscle::Shoulders],
        progressions: Progressions::between("wall_pushup", "pushup"),
        contraindications: &[Injury::Wrist],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "bench_dip",
        name: "Bench Dip",
        category: Category::Push,
        difficulty: Level::Beginner,
        primary_muscles: &[Muscle::Triceps, Muscle::Chest],
        progressions: Progressions::harder("parallel_bar_dip"),
        contraindications: &[Injury::Shoulder],
        requires_equipment: &[Equipment::Bench],
    },
    Exercise {
        id: "pushup",
        name: "Push-Up",
        category: Category::Push,
        difficulty: Level::Intermediate,
        primary_muscles: &[Muscle::Chest, Muscle::Triceps, Muscle::Shoulders, Muscle::Core],
        progressions: Progressions::between("incline_pushup", "diamond_pushup"),
        contraindications: &[Injury::Wrist],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "diamond_pushup",
        name: "Diamond Push-Up",
        category: Category::Push,
        difficulty: Level::Intermediate,
        primary_muscles: &[Muscle::Triceps, Muscle::Chest],
        progressions: Progressions::between("pushup", "archer_pushup"),
        contraindications: &[Injury::Wrist, Injury::Elbow],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "pike_pushup",
        name: "Pike Push-Up",
        category: Category::Push,
        difficulty: Level::Intermediate,
        primary_muscles: &[Muscle::Shoulders, Muscle::Triceps],
        progressions: Progressions::harder("wall_handstand_pushup"),
        contraindications: &[Injury::Shoulder, Injury::Wrist],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "parallel_bar_dip",
        name: "Parallel Bar Dip",
        category: Category::Push,
        difficulty: Level::Intermediate,
        primary_muscles: &[Muscle::Triceps, Muscle::Chest, Muscle::Shoulders],
        progressions: Progressions::between("bench_dip", "ring_dip"),
        contraindications: &[Injury::Shoulder, Injury::Elbow],
        requires_equipment: &[Equipment::DipBars],
    },
    Exercise {
        id: "archer_pushup",
        name: "Archer Push-Up",
        category: Category::Push,
        difficulty: Level::Advanced,
        primary_muscles: &[Muscle::Chest, Muscle::Triceps, Muscle::Shoulders],
        progressions: Progressions::between("diamond_pushup", "pseudo_planche_pushup"),
        contraindications: &[Injury::Wrist, Injury::Shoulder],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "pseudo_planche_pushup",
        name: "Pseudo Planche Push-Up",
        category: Category::Push,
        difficulty: Level::Advanced,
        primary_muscles: &[Muscle::Shoulders, Muscle::Chest, Muscle::Triceps],
        progressions: Progressions::easier("archer_pushup"),
        contraindications: &[Injury::Wrist, Injury::Shoulder],
        requires_equipment: &[Equipment::None, Equipment::Parallettes],
    },
    Exercise {
        id: "wall_handstand_pushup",
        name: "Wall Handstand Push-Up",
        category: Category::Push,
        difficulty: Level::Advanced,
        primary_muscles: &[Muscle::Shoulders, Muscle::Triceps],
        progressions: Progressions::easier("pike_pushup"),
        contraindications: &[Injury::Shoulder, Injury::Wrist, Injury::Neck],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "ring_dip",
        name: "Ring Dip",
        category: Category::Push,
        difficulty: Level::Advanced,
        primary_muscles: &[Muscle::Triceps, Muscle::Chest, Muscle::Shoulders],
        progressions: Progressions::easier("parallel_bar_dip"),
        contraindications: &[Injury::Shoulder, Injury::Elbow],
        requires_equipment: &[Equipment::Rings],
    },
    // Pull
    Exercise {
        id: "doorway_row",
        name: "Doorway Row",
        category: Category::Pull,
        difficulty: Level::Beginner,
        primary_muscles: &[Muscle::UpperBack, Muscle::Biceps],
        progressions: Progressions::harder("inverted_row"),
        contraindications: &[],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "band_pull_apart",
        name: "Band Pull-Apart",
        category: Category::Pull,
        difficulty: Level::Beginner,
        primary_muscles: &[Muscle::UpperBack, Muscle::Shoulders],
        progressions: Progressions::none(),
        contraindications: &[],
        requires_equipment: &[Equipment::ResistanceBand],
    },
    Exercise {
        id: "scapular_pullup",
        name: "Scapular Pull-Up",
        category: Category::Pull,
        difficulty: Level::Beginner,
        primary_muscles: &[Muscle::Lats, Muscle::UpperBack],
        progressions: Progressions::harder("negative_pullup"),
        contraindications: &[Injury::Shoulder],
        requires_equipment: &[Equipment::PullupBar],
    },
    Exercise {
        id: "inverted_row",
        name: "Inverted Row",
        category: Category::Pull,
        difficulty: Level::Intermediate,
        primary_muscles: &[Muscle::UpperBack, Muscle::Lats, Muscle::Biceps],
        progressions: Progressions::easier("doorway_row"),
        contraindications: &[],
        requires_equipment: &[Equipment::None, Equipment::Rings],
    },
    Exercise {
        id: "negative_pullup",
        name: "Negative Pull-Up",
        category: Category::Pull,
        difficulty: Level::Intermediate,
        primary_muscles: &[Muscle::Lats, Muscle::Biceps],
        progressions: Progressions::between("scapular_pullup", "pullup"),
        contraindications: &[Injury::Shoulder, Injury::Elbow],
        requires_equipment: &[Equipment::PullupBar],
    },
    Exercise {
        id: "pullup",
        name: "Pull-Up",
        category: Category::Pull,
        difficulty: Level::Intermediate,
        primary_muscles: &[Muscle::Lats, Muscle::Biceps, Muscle::UpperBack],
        progressions: Progressions::between("negative_pullup", "archer_pullup"),
        contraindications: &[Injury::Shoulder, Injury::Elbow],
        requires_equipment: &[Equipment::PullupBar],
    },
    Exercise {
        id: "chin_up",
        name: "Chin-Up",
        category: Category::Pull,
        difficulty: Level::Intermediate,
        primary_muscles: &[Muscle::Biceps, Muscle::Lats],
        progressions: Progressions::between("negative_pullup", "archer_pullup"),
        contraindications: &[Injury::Elbow],
        requires_equipment: &[Equipment::PullupBar],
    },
    Exercise {
        id: "archer_pullup",
        name: "Archer Pull-Up",
        category: Category::Pull,
        difficulty: Level::Advanced,
        primary_muscles: &[Muscle::Lats, Muscle::Biceps, Muscle::UpperBack],
        progressions: Progressions::easier("pullup"),
        contraindications: &[Injury::Shoulder, Injury::Elbow],
        requires_equipment: &[Equipment::PullupBar],
    },
    Exercise {
        id: "l_sit_pullup",
        name: "L-Sit Pull-Up",
        category: Category::Pull,
        difficulty: Level::Advanced,
        primary_muscles: &[Muscle::Lats, Muscle::Core, Muscle::HipFlexors],
        progressions: Progressions::easier("pullup"),
        contraindications: &[Injury::Shoulder, Injury::LowerBack],
        requires_equipment: &[Equipment::PullupBar],
    },
    Exercise {
        id: "ring_row",
        name: "Ring Row",
        category: Category::Pull,
        difficulty: Level::Advanced,
        primary_muscles: &[Muscle::UpperBack, Muscle::Biceps, Muscle::Forearms],
        progressions: Progressions::easier("inverted_row"),
        contraindications: &[Injury::Elbow],
        requires_equipment: &[Equipment::Rings],
    },
    // Legs
    Exercise {
        id: "assisted_squat",
        name: "Assisted Squat",
        category: Category::Legs,
        difficulty: Level::Beginner,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes],
        progressions: Progressions::harder("bodyweight_squat"),
        contraindications: &[],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "glute_bridge",
        name: "Glute Bridge",
        category: Category::Legs,
        difficulty: Level::Beginner,
        primary_muscles: &[Muscle::Glutes, Muscle::Hamstrings],
        progressions: Progressions::harder("single_leg_glute_bridge"),
        contraindications: &[],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "bodyweight_squat",
        name: "Bodyweight Squat",
        category: Category::Legs,
        difficulty: Level::Beginner,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes, Muscle::Hamstrings],
        progressions: Progressions::between("assisted_squat", "jump_squat"),
        contraindications: &[Injury::Knee],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "reverse_lunge",
        name: "Reverse Lunge",
        category: Category::Legs,
        difficulty: Level::Beginner,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes],
        progressions: Progressions::harder("bulgarian_split_squat"),
        contraindications: &[Injury::Knee],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "calf_raise",
        name: "Calf Raise",
        category: Category::Legs,
        difficulty: Level::Beginner,
        primary_muscles: &[Muscle::Calves],
        progressions: Progressions::none(),
        contraindications: &[Injury::Ankle],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "bulgarian_split_squat",
        name: "Bulgarian Split Squat",
        category: Category::Legs,
        difficulty: Level::Intermediate,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes],
        progressions: Progressions::between("reverse_lunge", "shrimp_squat"),
        contraindications: &[Injury::Knee],
        requires_equipment: &[Equipment::None, Equipment::Bench],
    },
    Exercise {
        id: "single_leg_glute_bridge",
        name: "Single-Leg Glute Bridge",
        category: Category::Legs,
        difficulty: Level::Intermediate,
        primary_muscles: &[Muscle::Glutes, Muscle::Hamstrings],
        progressions: Progressions::between("glute_bridge", "nordic_curl"),
        contraindications: &[Injury::LowerBack],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "jump_squat",
        name: "Jump Squat",
        category: Category::Legs,
        difficulty: Level::Intermediate,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes, Muscle::Calves],
        progressions: Progressions::easier("bodyweight_squat"),
        contraindications: &[Injury::Knee, Injury::Ankle],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "shrimp_squat",
        name: "Shrimp Squat",
        category: Category::Legs,
        difficulty: Level::Advanced,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes],
        progressions: Progressions::between("bulgarian_split_squat", "pistol_squat"),
        contraindications: &[Injury::Knee],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "pistol_squat",
        name: "Pistol Squat",
        category: Category::Legs,
        difficulty: Level::Advanced,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes, Muscle::Hamstrings],
        progressions: Progressions::easier("shrimp_squat"),
        contraindications: &[Injury::Knee, Injury::Ankle],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "nordic_curl",
        name: "Nordic Curl",
        category: Category::Legs,
        difficulty: Level::Advanced,
        primary_muscles: &[Muscle::Hamstrings],
        progressions: Progressions::easier("single_leg_glute_bridge"),
        contraindications: &[Injury::Knee],
        requires_equipment: NO_EQUIPMENT,
    },
    // Core
    Exercise {
        id: "plank",
        name: "Plank",
        category: Category::Core,
        difficulty: Level::Beginner,
        primary_muscles: &[Muscle::Core, Muscle::Shoulders],
        progressions: Progressions::harder("side_plank"),
        contraindications: &[Injury::LowerBack],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "dead_bug",
        name: "Dead Bug",
        category: Category::Core,
        difficulty: Level::Beginner,
        primary_muscles: &[Muscle::Core, Muscle::HipFlexors],
        progressions: Progressions::harder("hollow_body_hold"),
        contraindications: &[],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "side_plank",
        name: "Side Plank",
        category: Category::Core,
        difficulty: Level::Intermediate,
        primary_muscles: &[Muscle::Obliques, Muscle::Core],
        progressions: Progressions::easier("plank"),
        contraindications: &[Injury::Shoulder],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "hollow_body_hold",
        name: "Hollow Body Hold",
        category: Category::Core,
        difficulty: Level::Intermediate,
        primary_muscles: &[Muscle::Core, Muscle::HipFlexors],
        progressions: Progressions::between("dead_bug", "l_sit"),
        contraindications: &[Injury::LowerBack],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "hanging_knee_raise",
        name: "Hanging Knee Raise",
        category: Category::Core,
        difficulty: Level::Intermediate,
        primary_muscles: &[Muscle::Core, Muscle::HipFlexors, Muscle::Forearms],
        progressions: Progressions::harder("hanging_leg_raise"),
        contraindications: &[Injury::Shoulder],
        requires_equipment: &[Equipment::PullupBar],
    },
    Exercise {
        id: "hanging_leg_raise",
        name: "Hanging Leg Raise",
        category: Category::Core,
        difficulty: Level::Advanced,
        primary_muscles: &[Muscle::Core, Muscle::HipFlexors, Muscle::Forearms],
        progressions: Progressions::easier("hanging_knee_raise"),
        contraindications: &[Injury::Shoulder, Injury::LowerBack],
        requires_equipment: &[Equipment::PullupBar],
    },
    Exercise {
        id: "l_sit",
        name: "L-Sit",
        category: Category::Core,
        difficulty: Level::Advanced,
        primary_muscles: &[Muscle::Core, Muscle::HipFlexors, Muscle::Triceps],
        progressions: Progressions::easier("hollow_body_hold"),
        contraindications: &[Injury::Wrist],
        requires_equipment: &[Equipment::None, Equipment::Parallettes],
    },
    Exercise {
        id: "dragon_flag",
        name: "Dragon Flag",
        category: Category::Core,
        difficulty: Level::Advanced,
        primary_muscles: &[Muscle::Core, Muscle::LowerBack],
        progressions: Progressions::easier("hollow_body_hold"),
        contraindications: &[Injury::LowerBack, Injury::Neck],
        requires_equipment: &[Equipment::Bench],
    },
    // Metcon
    Exercise {
        id: "jumping_jacks",
        name: "Jumping Jacks",
        category: Category::Metcon,
        difficulty: Level::Beginner,
        primary_muscles: &[Muscle::Cardio, Muscle::Calves],
        progressions: Progressions::none(),
        contraindications: &[Injury::Ankle],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "mountain_climbers",
        name: "Mountain Climbers",
        category: Category::Metcon,
        difficulty: Level::Beginner,
        primary_muscles: &[Muscle::Cardio, Muscle::Core, Muscle::Shoulders],
        progressions: Progressions::harder("burpee"),
        contraindications: &[Injury::Wrist],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "high_knees",
        name: "High Knees",
        category: Category::Metcon,
        difficulty: Level::Beginner,
        primary_muscles: &[Muscle::Cardio, Muscle::HipFlexors],
        progressions: Progressions::none(),
        contraindications: &[Injury::Knee],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "burpee",
        name: "Burpee",
        category: Category::Metcon,
        difficulty: Level::Intermediate,
        primary_muscles: &[Muscle::Cardio, Muscle::Chest, Muscle::Quads],
        progressions: Progressions::between("mountain_climbers", "burpee_pullup"),
        contraindications: &[Injury::Wrist, Injury::Knee],
        requires_equipment: NO_EQUIPMENT,
    },
    Exercise {
        id: "burpee_pullup",
        name: "Burpee Pull-Up",
        category: Category::Metcon,
        difficulty: Level::Advanced,
        primary_muscles: &[Muscle::Cardio, Muscle::Lats, Muscle::Quads],
        progressions: Progressions::easier("burpee"),
        contraindications: &[Injury::Shoulder, Injury::Wrist, Injury::Knee],
        requires_equipment: &[Equipment::PullupBar],
    },
];
