use std::{collections::BTreeSet, fs, path::Path};

use anyhow::{Context, Result};
use calisthenics_domain::{
    Equipment, Exercise, Injury, Property, WorkoutPlan, catalog, determine_split,
    generate_workout_plan, metabolism, muscle_distribution, volume_chart_data,
};
use colored::Colorize;
use log::info;

use crate::{
    chart,
    cli::{CatalogArgs, ChartArgs, ConfigCmd, Format, GenerateArgs},
    render,
    request::PlanRequest,
    settings::Settings,
};

fn plan(request: &Path) -> Result<WorkoutPlan> {
    let PlanRequest {
        profile,
        baseline,
        settings,
    } = PlanRequest::load(request)?;
    generate_workout_plan(profile, baseline, settings)
        .with_context(|| format!("cannot generate plan for {}", request.display()))
}

pub fn generate(args: GenerateArgs, settings: &Settings) -> Result<()> {
    let plan = plan(&args.request)?;

    let output = match args.format.unwrap_or(settings.format) {
        Format::Text => render::plan(&plan),
        Format::Json => {
            serde_json::to_string_pretty(&plan).context("failed to serialize plan")? + "\n"
        }
    };

    match args.output {
        Some(path) => {
            fs::write(&path, output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("{} wrote {}", "info:".blue().bold(), path.display());
        }
        None => print!("{output}"),
    }

    Ok(())
}

pub fn catalog(args: &CatalogArgs) {
    let equipment = if args.equipment.is_empty() {
        Equipment::iter_filter().copied().collect::<BTreeSet<_>>()
    } else {
        args.equipment.iter().copied().collect()
    };
    let injuries = args.injury.iter().copied().collect::<BTreeSet<Injury>>();

    print!("{}", render::exercises(&filter_catalog(args, &injuries, &equipment)));
}

fn filter_catalog(
    args: &CatalogArgs,
    injuries: &BTreeSet<Injury>,
    equipment: &BTreeSet<Equipment>,
) -> Vec<&'static Exercise> {
    catalog::safe_exercises(injuries, equipment)
        .into_iter()
        .filter(|e| args.category.is_none_or(|c| e.category == c))
        .filter(|e| args.level.is_none_or(|l| e.difficulty == l))
        .collect()
}

pub fn metabolism(request: &Path) -> Result<()> {
    let PlanRequest { profile, .. } = PlanRequest::load(request)?;
    profile
        .validate()
        .with_context(|| format!("invalid profile in {}", request.display()))?;

    let bmi = metabolism::bmi(profile.weight_kg, profile.height_cm);
    let bmr = metabolism::bmr(&profile);
    let tdee = metabolism::tdee(bmr, profile.available_days_per_week);

    print!(
        "{}",
        render::metabolism(&profile.name, bmi, bmr, tdee, determine_split(&profile))
    );
    Ok(())
}

pub fn chart(args: &ChartArgs, settings: &Settings) -> Result<()> {
    let plan = plan(&args.request)?;

    for (path, svg) in [
        (
            &args.volume,
            chart::plot_volume(&volume_chart_data(&plan), settings.theme)?,
        ),
        (
            &args.muscles,
            chart::plot_muscle_distribution(&muscle_distribution(&plan), settings.theme)?,
        ),
    ] {
        match svg {
            Some(svg) => {
                fs::write(path, svg)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!("wrote {}", path.display());
                println!("{} wrote {}", "info:".blue().bold(), path.display());
            }
            None => println!(
                "{} nothing to plot for {}",
                "warning:".yellow().bold(),
                path.display()
            ),
        }
    }

    Ok(())
}

pub fn config(cmd: &ConfigCmd, settings: &Settings, path: &Path) -> Result<()> {
    match cmd {
        ConfigCmd::Show => {
            println!("{}", "Config:".cyan().bold());
            for line in settings.to_toml()?.lines() {
                println!("  {line}");
            }
        }
        ConfigCmd::Path => println!("{}", path.display()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use calisthenics_domain::{Category, Level};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::request::tests::REQUEST_TOML;

    fn catalog_args() -> CatalogArgs {
        CatalogArgs {
            category: None,
            level: None,
            equipment: vec![],
            injury: vec![],
        }
    }

    #[test]
    fn test_filter_catalog_by_category_and_level() {
        let args = CatalogArgs {
            category: Some(Category::Pull),
            level: Some(Level::Beginner),
            ..catalog_args()
        };
        let all_equipment = Equipment::iter_filter().copied().collect();
        assert_eq!(
            filter_catalog(&args, &BTreeSet::new(), &all_equipment)
                .iter()
                .map(|e| e.id)
                .collect::<Vec<_>>(),
            vec!["doorway_row", "band_pull_apart", "scapular_pullup"]
        );
    }

    #[test]
    fn test_filter_catalog_by_injury() {
        let injuries = BTreeSet::from([Injury::Shoulder]);
        let exercises = filter_catalog(&catalog_args(), &injuries, &BTreeSet::new());
        assert!(!exercises.is_empty());
        assert!(exercises.iter().all(|e| e.is_safe_for(&injuries)));
        assert!(exercises.iter().all(|e| e.is_bodyweight()));
    }

    #[test]
    fn test_generate_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let request = dir.path().join("request.toml");
        let output = dir.path().join("plan.json");
        fs::write(&request, REQUEST_TOML).unwrap();

        generate(
            GenerateArgs {
                request,
                format: Some(Format::Json),
                output: Some(output.clone()),
            },
            &Settings::default(),
        )
        .unwrap();

        let plan: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(plan["split"], "full_body");
        assert_eq!(plan["days"].as_array().unwrap().len(), 7);
        assert_eq!(plan["days"][0]["date"], "2024-01-01");
        assert_eq!(plan["days"][0]["exercises"][3]["reps_per_set"]["hold_sec"], 18);
        assert_eq!(plan["days"][0]["exercises"][0]["reps_per_set"][0], 8);
        assert_eq!(plan["summary"]["total_volume"], 306);
    }

    #[test]
    fn test_generate_invalid_request() {
        let dir = tempfile::tempdir().unwrap();
        let request = dir.path().join("request.toml");
        fs::write(
            &request,
            REQUEST_TOML.replace("duration_days = 7", "duration_days = 10"),
        )
        .unwrap();

        let err = generate(
            GenerateArgs {
                request,
                format: None,
                output: None,
            },
            &Settings::default(),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("cannot generate plan for"));
        assert_eq!(
            err.root_cause().to_string(),
            "Program duration must be 7, 14 or 30 days (10)"
        );
    }

    #[test]
    fn test_chart_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let request = dir.path().join("request.toml");
        fs::write(&request, REQUEST_TOML).unwrap();
        let args = ChartArgs {
            request,
            volume: dir.path().join("volume.svg"),
            muscles: dir.path().join("muscles.svg"),
        };

        chart(&args, &Settings::default()).unwrap();

        assert!(fs::read_to_string(&args.volume).unwrap().starts_with("<svg"));
        assert!(fs::read_to_string(&args.muscles).unwrap().starts_with("<svg"));
    }
}
