//! Tally CLI - reproducible mock analytics.
//!
//! Single binary that provides:
//! - `tally percentage` / `tally score` - raw generator access for any key
//! - `tally teacher` / `tally engagement` / `tally timetable` - dashboard data
//! - `tally week` / `tally chapters` - parent and administration views
//! - `tally config` - print the effective configuration

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use tally_analytics::calendar::{format_week_range, parse_iso_date};
use tally_analytics::engagement::average_progress;
use tally_analytics::{Analytics, AnalyticsConfig, EngagementFilter};
use tally_core::{generate_weighted_score, PercentRange, WeightTable};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Reproducible mock analytics", version)]
struct Cli {
    /// Project root directory (config is read from .tally/config.yaml)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Explicit config file, overrides the project config
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Single bounded value for a key
    Percentage {
        key: String,

        #[arg(long, default_value_t = 0)]
        min: u32,

        #[arg(long, default_value_t = 100)]
        max: u32,
    },

    /// Weighted composite score for a key
    Score {
        key: String,

        /// Metric weight as name=weight (repeatable, in draw order)
        #[arg(short, long = "weight", required = true)]
        weights: Vec<String>,

        /// Metric to report as 100 - raw (repeatable)
        #[arg(long = "invert")]
        inverted: Vec<String>,
    },

    /// Teacher performance for a week
    Teacher {
        #[arg(long)]
        id: String,

        /// Any day of the week (defaults to today)
        #[arg(long)]
        week: Option<String>,
    },

    /// Student engagement roster
    Engagement {
        #[arg(long)]
        date: Option<String>,

        #[arg(long = "class")]
        class_name: Option<String>,

        #[arg(long)]
        section: Option<String>,

        /// Print the sparkline values instead of the roster
        #[arg(long)]
        trend: bool,
    },

    /// Default timetable for a day
    Timetable {
        #[arg(long)]
        date: Option<String>,
    },

    /// Daily progress for a week
    Week {
        #[arg(long)]
        date: Option<String>,
    },

    /// Chapter coverage and mastery
    Chapters {
        #[arg(long)]
        grade: String,

        #[arg(long)]
        section: String,

        #[arg(long)]
        subject: String,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let project_root = match &cli.project {
        Some(p) => p.clone(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let config = load_config(&project_root, cli.config.as_deref())?;
    let json = cli.json;

    match cli.command {
        Some(Commands::Percentage { key, min, max }) => {
            let range = PercentRange::new(min, max);
            let analytics = Analytics::new(config);
            emit(json, &analytics.percentage(&key, range), |v| println!("{v}"))
        }
        Some(Commands::Score {
            key,
            weights,
            inverted,
        }) => show_score(json, &key, &weights, inverted),
        Some(Commands::Teacher { id, week }) => {
            let day = date_or_today(week.as_deref())?;
            show_teacher(json, Analytics::new(config), &id, day)
        }
        Some(Commands::Engagement {
            date,
            class_name,
            section,
            trend,
        }) => {
            let mut filter = EngagementFilter::new(date_or_today(date.as_deref())?);
            filter.class_name = class_name;
            filter.section = section;
            show_engagement(json, Analytics::new(config), &filter, trend)
        }
        Some(Commands::Timetable { date }) => {
            let day = date_or_today(date.as_deref())?;
            let mut analytics = Analytics::new(config);
            emit(json, analytics.timetable(day), |rows| {
                for r in rows {
                    println!(
                        "P{} {:<10} class {}-{}",
                        r.period, r.subject, r.class_name, r.section
                    );
                }
            })
        }
        Some(Commands::Week { date }) => {
            let day = date_or_today(date.as_deref())?;
            let analytics = Analytics::new(config);
            emit(json, &analytics.week_progress(day), |days| {
                println!("Week of {}", format_week_range(day));
                for d in days {
                    println!("  {} {:>3}%", d.weekday, d.progress);
                }
            })
        }
        Some(Commands::Chapters {
            grade,
            section,
            subject,
        }) => {
            let analytics = Analytics::new(config);
            let rows = analytics.chapter_performance(&grade, &section, &subject);
            if rows.is_empty() {
                tracing::warn!(subject = %subject, "No chapters configured for subject");
            }
            emit(json, &rows, |rows| {
                for r in rows {
                    println!(
                        "{:<24} coverage {:>3}%  mastery {:>3}%",
                        r.chapter, r.coverage, r.mastery
                    );
                }
            })
        }
        Some(Commands::Config) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", config.to_yaml()?);
            }
            Ok(())
        }
        None => {
            println!("Tally - Reproducible mock analytics");
            println!();
            println!("Usage: tally <COMMAND>");
            println!();
            println!("Commands:");
            println!("  percentage  Single bounded value for a key");
            println!("  score       Weighted composite score for a key");
            println!("  teacher     Teacher performance for a week");
            println!("  engagement  Student engagement roster");
            println!("  timetable   Default timetable for a day");
            println!("  week        Daily progress for a week");
            println!("  chapters    Chapter coverage and mastery");
            println!("  config      Print the effective configuration");
            println!();
            println!("Run 'tally --help' for more information.");
            Ok(())
        }
    }
}

fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<AnalyticsConfig> {
    let config = match explicit {
        Some(path) => AnalyticsConfig::load(path)?,
        None => AnalyticsConfig::load_from_project(project_root)?,
    };
    config.validate()?;
    tracing::debug!(project = %project_root.display(), "Loaded config");
    Ok(config)
}

fn date_or_today(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => parse_iso_date(s),
        None => Ok(Local::now().date_naive()),
    }
}

/// Print `value` as pretty JSON, or through `text` otherwise.
fn emit<T: Serialize + ?Sized>(json: bool, value: &T, text: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

fn parse_weight(arg: &str) -> Result<(String, f64)> {
    let (name, weight) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid weight '{}', expected name=weight", arg))?;
    let weight: f64 = weight
        .trim()
        .parse()
        .with_context(|| format!("Invalid weight value in '{}'", arg))?;
    Ok((name.trim().to_string(), weight))
}

fn show_score(json: bool, key: &str, weights: &[String], inverted: Vec<String>) -> Result<()> {
    let table = WeightTable::from_pairs(
        weights
            .iter()
            .map(|w| parse_weight(w))
            .collect::<Result<Vec<_>>>()?,
    );
    let inverted: BTreeSet<String> = inverted.into_iter().collect();
    let score = generate_weighted_score(key, &table, &inverted)?;

    emit(json, &score, |s| {
        for m in table.metrics() {
            println!("  {:<20} {:>3}", m.name, s.breakdown[&m.name]);
        }
        println!("Overall: {}", s.overall);
    })
}

fn show_teacher(json: bool, mut analytics: Analytics, id: &str, day: NaiveDate) -> Result<()> {
    let name = analytics
        .config()
        .teacher(id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| id.to_string());
    let classes = analytics.class_breakdown(id, day);
    let perf = analytics.teacher_performance(id, day).clone();

    if json {
        #[derive(Serialize)]
        struct Report<'a> {
            name: &'a str,
            #[serde(flatten)]
            performance: &'a tally_analytics::TeacherPerformance,
            classes: &'a [tally_analytics::ClassPerformance],
        }
        let report = Report {
            name: &name,
            performance: &perf,
            classes: &classes,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} - week of {}", name, format_week_range(day));
    println!();
    println!("Preparation fidelity: {}", perf.preparation.overall);
    for (metric, value) in &perf.preparation.breakdown {
        println!("  {:<20} {:>3}", metric, value);
    }
    println!("Assessment quality: {}", perf.assessment.overall);
    for (metric, value) in &perf.assessment.breakdown {
        println!("  {:<20} {:>3}", metric, value);
    }
    println!("Coverage: {}%  Mastery: {}%", perf.coverage_pct, perf.mastery_pct);
    if !classes.is_empty() {
        println!();
        println!("Classes handled:");
        for c in &classes {
            println!(
                "  {:<6} {:<10} coverage {:>3}%  mastery {:>3}%",
                c.class_name, c.subject, c.coverage, c.mastery
            );
        }
    }
    Ok(())
}

fn show_engagement(
    json: bool,
    mut analytics: Analytics,
    filter: &EngagementFilter,
    trend: bool,
) -> Result<()> {
    if trend {
        let values = analytics.engagement_trend(filter);
        return emit(json, &values, |v| {
            let line: Vec<String> = v.iter().map(|x| x.to_string()).collect();
            println!("{}", line.join(" "));
        });
    }

    let roster = analytics.engagement(filter);
    emit(json, roster, |rows| {
        println!("Engagement for {}", filter.seed_key());
        for s in rows {
            println!("  {:>2} {:<12} {:>3}%", s.roll_no, s.name, s.progress);
        }
        println!("Average: {}%", average_progress(rows));
    })
}
