use std::fmt::Write;

use calisthenics_domain::{
    DayPlan, Exercise, Prescription, Property, SplitType, WorkoutExercise, WorkoutPlan, catalog,
};
use colored::Colorize;

pub fn plan(plan: &WorkoutPlan) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} for {}",
        format!("{}-day {} program", plan.summary.total_days, plan.split.name())
            .cyan()
            .bold(),
        plan.profile.name.green()
    );
    let _ = writeln!(
        out,
        "  BMI {:.1} · BMR {} kcal · TDEE {} kcal",
        plan.bmi, plan.bmr, plan.tdee
    );
    let _ = writeln!(
        out,
        "  {} training days · {} rest days · total volume {} · avg session {} min",
        plan.summary.training_days,
        plan.summary.rest_days,
        plan.summary.total_volume,
        plan.summary.avg_session_time
    );

    for day in &plan.days {
        out.push('\n');
        day_plan(&mut out, day);
    }

    out
}

fn day_plan(out: &mut String, day: &DayPlan) {
    let header = format!(
        "Day {} · {} · {}",
        day.day_number,
        day.date.format("%a %Y-%m-%d"),
        day.theme.name()
    );

    if day.theme.is_rest() {
        let _ = writeln!(out, "{}", header.dimmed());
        let _ = writeln!(out, "  {}", day.progression_notes.dimmed());
        return;
    }

    let _ = writeln!(out, "{} ({} min)", header.bold(), day.est_time_min);

    if !day.warmup.is_empty() {
        let _ = writeln!(
            out,
            "  {} {}",
            "warmup:".blue(),
            day.warmup
                .iter()
                .map(|d| d.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    for exercise in &day.exercises {
        workout_exercise(out, exercise);
    }

    if !day.cooldown.is_empty() {
        let _ = writeln!(
            out,
            "  {} {}",
            "cooldown:".blue(),
            day.cooldown
                .iter()
                .map(|d| d.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    if !day.progression_notes.is_empty() {
        let _ = writeln!(out, "  {}", day.progression_notes.italic());
    }
}

fn workout_exercise(out: &mut String, exercise: &WorkoutExercise) {
    let _ = writeln!(
        out,
        "  {} {} · {} · rest {} s · tempo {}",
        "•".green(),
        exercise.name.bold(),
        prescription(exercise.sets, &exercise.reps_per_set),
        exercise.rest_sec,
        exercise.tempo
    );
    if !exercise.notes.is_empty() {
        let _ = writeln!(out, "    {}", exercise.notes.dimmed());
    }
}

#[must_use]
pub fn prescription(sets: u32, reps_per_set: &Prescription) -> String {
    match reps_per_set {
        Prescription::Reps(reps) => {
            if !reps.is_empty() && reps.iter().all(|r| *r == reps[0]) {
                format!("{sets} × {}", reps[0])
            } else {
                reps.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("/")
            }
        }
        Prescription::Hold { hold_sec } => format!("{sets} × {hold_sec} s hold"),
    }
}

pub fn metabolism(name: &str, bmi: f64, bmr: i64, tdee: i64, split: SplitType) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", name.cyan().bold());
    let _ = writeln!(out, "  {:<6} {bmi:.1}", "BMI".green());
    let _ = writeln!(out, "  {:<6} {bmr} kcal", "BMR".green());
    let _ = writeln!(out, "  {:<6} {tdee} kcal", "TDEE".green());
    let _ = writeln!(out, "  {:<6} {}", "Split".green(), split.name());
    out
}

pub fn exercises(exercises: &[&'static Exercise]) -> String {
    if exercises.is_empty() {
        return format!("{}\n", "(no matching exercises)".dimmed());
    }

    let mut out = String::new();
    for exercise in exercises.iter().copied() {
        let _ = writeln!(
            out,
            "{:<24} {:<8} {:<12} {}",
            exercise.id.green(),
            exercise.category.name(),
            exercise.difficulty.name(),
            exercise.name
        );
        let chain = catalog::progression_chain(exercise);
        if chain.len() > 1 {
            let _ = writeln!(
                out,
                "{:<24} {}",
                "",
                chain
                    .iter()
                    .map(|e| {
                        if e.id == exercise.id {
                            e.name.bold().to_string()
                        } else {
                            e.name.dimmed().to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" → ")
            );
        }
    }
    out
}
