use clap::{Parser, Subcommand};
use meso_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "meso")]
#[command(about = "Mesocycle planning helper", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route of the day to land on
    Current {
        /// Mesocycle payload (JSON)
        file: PathBuf,
    },

    /// Check muscle-group ordering of planned days
    Check {
        /// Mesocycle payload (JSON)
        file: PathBuf,

        /// Only check this week (1-based)
        #[arg(long)]
        week: Option<usize>,

        /// Only check this day of the selected week (1-based)
        #[arg(long, requires = "week")]
        day: Option<usize>,

        /// Fail if any day splits a muscle group
        #[arg(long)]
        strict: bool,
    },

    /// List weight or rep options around a target
    Picker {
        /// Target weight
        #[arg(long, required_unless_present = "reps", conflicts_with = "reps")]
        weight: Option<f64>,

        /// Target reps
        #[arg(long)]
        reps: Option<u32>,

        /// Weight unit (lb, kg)
        #[arg(long)]
        unit: Option<String>,

        /// Options on each side of the target
        #[arg(long)]
        spread: Option<usize>,
    },
}

fn main() -> Result<()> {
    meso_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Current { file } => cmd_current(&file, &config),
        Commands::Check {
            file,
            week,
            day,
            strict,
        } => cmd_check(&file, week, day, strict),
        Commands::Picker {
            weight,
            reps,
            unit,
            spread,
        } => cmd_picker(weight, reps, unit, spread, &config),
    }
}

fn cmd_current(file: &Path, config: &Config) -> Result<()> {
    let meso = load_mesocycle(file)?;
    if let Some(ref m) = meso {
        m.ensure_valid()?;
    }

    println!("{}", resolve_with(meso.as_ref(), &config.statuses));
    Ok(())
}

fn cmd_check(file: &Path, week: Option<usize>, day: Option<usize>, strict: bool) -> Result<()> {
    let meso = match load_mesocycle(file)? {
        Some(m) => m,
        None => {
            println!("No active mesocycle.");
            return Ok(());
        }
    };

    let errors = meso.validate();
    if !errors.is_empty() {
        eprintln!("Mesocycle validation errors:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::Validation("Invalid mesocycle".into()));
    }

    let selected: Vec<&Day> = meso
        .days()
        .filter(|d| week.map_or(true, |w| d.week + 1 == w))
        .filter(|d| day.map_or(true, |p| d.position + 1 == p))
        .collect();

    if selected.is_empty() {
        return Err(Error::Other(format!(
            "No matching day in mesocycle {}",
            meso.key
        )));
    }

    let mut split_days = 0;
    for d in selected {
        let route = DayRoute::for_day(&meso.key, d);
        if is_valid_grouping(&d.slots) {
            println!("Week {} Day {}: ok", route.week, route.day);
            continue;
        }

        split_days += 1;
        match first_split(&d.slots) {
            Some(split) => println!(
                "Week {} Day {}: muscle group {} split (slots {} and {})",
                route.week,
                route.day,
                describe_group(split.muscle_group_id),
                split.last_seen + 1,
                split.index + 1
            ),
            None => println!("Week {} Day {}: muscle group split", route.week, route.day),
        }
    }

    if strict && split_days > 0 {
        return Err(Error::Validation(format!(
            "{} day(s) split a muscle group",
            split_days
        )));
    }

    Ok(())
}

fn cmd_picker(
    weight: Option<f64>,
    reps: Option<u32>,
    unit: Option<String>,
    spread: Option<usize>,
    config: &Config,
) -> Result<()> {
    let spread = spread.unwrap_or(config.increments.spread);
    if spread > increments::MAX_SPREAD {
        return Err(Error::Other(format!(
            "Spread must be at most {}, got {}",
            increments::MAX_SPREAD,
            spread
        )));
    }

    if let Some(target) = weight {
        let unit = match unit {
            Some(u) => u.parse::<WeightUnit>()?,
            None => config.increments.default_unit,
        };
        let step = unit.increment(&config.increments);
        tracing::debug!("Weight picker: target {} {:?}, step {}", target, unit, step);

        for w in weight_options(target, step, spread) {
            println!("{}", w);
        }
    } else if let Some(target) = reps {
        let spread = u32::try_from(spread)
            .map_err(|_| Error::Other(format!("Spread too large: {}", spread)))?;
        for r in rep_options(target, spread) {
            println!("{}", r);
        }
    }

    Ok(())
}

fn describe_group(id: MuscleGroupId) -> String {
    match id {
        Some(id) => id.to_string(),
        None => "(none)".to_string(),
    }
}
