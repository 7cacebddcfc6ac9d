use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{Muscle, WorkoutPlan};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumePoint {
    pub date: NaiveDate,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MuscleCount {
    pub muscle: String,
    pub count: u32,
    pub color: &'static str,
}

/// Training volume of every program day, rest days included.
#[must_use]
pub fn volume_chart_data(plan: &WorkoutPlan) -> Vec<VolumePoint> {
    plan.days
        .iter()
        .map(|day| VolumePoint {
            date: day.date,
            volume: day.volume(),
        })
        .collect()
}

/// Number of exercises targeting each muscle over the whole program.
///
/// Every exercise counts once per listed muscle regardless of its sets and reps.
/// Muscles are sorted by descending count. Equal counts keep the order in
/// which the muscles first appear in the plan.
#[must_use]
pub fn muscle_distribution(plan: &WorkoutPlan) -> Vec<MuscleCount> {
    let mut counts: Vec<MuscleCount> = vec![];

    for muscle in plan
        .days
        .iter()
        .flat_map(|d| &d.exercises)
        .flat_map(|e| &e.target_muscles)
    {
        match counts.iter_mut().find(|c| &c.muscle == muscle) {
            Some(entry) => entry.count += 1,
            None => counts.push(MuscleCount {
                muscle: muscle.clone(),
                count: 1,
                color: Muscle::from_str(muscle).map_or(Muscle::DEFAULT_COLOR, Muscle::color),
            }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Category, Level, Prescription, Theme, WorkoutExercise, plan::tests::plan};

    #[test]
    fn test_volume_chart_data() {
        let plan = plan();
        let data = volume_chart_data(&plan);

        assert_eq!(data.len(), plan.days.len());
        for (point, day) in data.iter().zip(&plan.days) {
            assert_eq!(point.date, day.date);
            assert_eq!(point.volume.to_bits(), crate::day_volume(&day.exercises).to_bits());
        }
        assert_approx_eq!(data[0].volume, 102.0, 1e-9);
        assert_approx_eq!(data[6].volume, 0.0, 1e-9);
        assert_approx_eq!(
            data.iter().map(|p| p.volume).sum::<f64>(),
            f64::from(u32::try_from(plan.summary.total_volume).unwrap()),
            1e-9
        );
    }

    #[test]
    fn test_muscle_distribution() {
        let plan = plan();
        let distribution = muscle_distribution(&plan);
        let training_days = plan.summary.training_days;

        let expected_total = plan
            .days
            .iter()
            .flat_map(|d| &d.exercises)
            .map(|e| e.target_muscles.len())
            .sum::<usize>();
        assert_eq!(
            distribution.iter().map(|c| c.count as usize).sum::<usize>(),
            expected_total
        );
        assert!(
            distribution
                .windows(2)
                .all(|w| w[0].count >= w[1].count)
        );
        assert!(distribution.iter().all(|c| c.count % training_days == 0));
        assert!(
            distribution
                .iter()
                .all(|c| c.color != Muscle::DEFAULT_COLOR)
        );
    }

    #[test]
    fn test_muscle_distribution_unknown_muscle() {
        let mut plan = plan();
        plan.days[0].theme = Theme::FullBody;
        plan.days[0].exercises = vec![
            WorkoutExercise {
                name: "Towel Row".to_string(),
                category: Category::Pull,
                variation: Level::Beginner,
                sets: 3,
                reps_per_set: Prescription::Reps(vec![8, 8, 8]),
                rest_sec: 60,
                tempo: "2-1-1".to_string(),
                target_muscles: vec!["grip".to_string(), "lats".to_string()],
                notes: String::new(),
            };
            2
        ];
        plan.days.truncate(1);

        assert_eq!(
            muscle_distribution(&plan),
            vec![
                MuscleCount {
                    muscle: "grip".to_string(),
                    count: 2,
                    color: Muscle::DEFAULT_COLOR,
                },
                MuscleCount {
                    muscle: "lats".to_string(),
                    count: 2,
                    color: Muscle::Lats.color(),
                },
            ]
        );
    }

    #[test]
    fn test_muscle_distribution_empty_plan() {
        let mut plan = plan();
        plan.days.clear();
        assert!(muscle_distribution(&plan).is_empty());
        assert!(volume_chart_data(&plan).is_empty());
    }
}
