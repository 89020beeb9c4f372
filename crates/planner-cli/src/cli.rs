use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Build a personal schedule from a course catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "PLANNER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the courses in a catalog file
    Catalog {
        /// Catalog file (default from config)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Build a schedule from catalog courses and events
    Schedule(ScheduleArgs),

    /// Show the active configuration
    Config {
        /// Only print the config file path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ScheduleArgs {
    /// Catalog file (default from config)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Schedule title (default from config: "My Schedule")
    #[arg(long)]
    pub title: Option<String>,

    /// Catalog course to add, e.g. "CSC 216:001"
    #[arg(long = "course", value_name = "NAME:SECTION")]
    pub courses: Vec<CourseRef>,

    /// Event to add, e.g. "Exercise;MWF;700;745;gym"
    #[arg(long = "event", value_name = "TITLE;DAYS;START;END[;DETAILS]")]
    pub events: Vec<EventArg>,

    /// Show credits, instructor and details
    #[arg(long)]
    pub full: bool,

    /// Report activities whose meeting times overlap
    #[arg(long)]
    pub conflicts: bool,

    /// Save the schedule as records (default path from config)
    #[arg(long, value_name = "FILE")]
    pub export: Option<Option<PathBuf>>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Catalog lookup key given as `NAME:SECTION`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRef {
    pub name: String,
    pub section: String,
}

impl FromStr for CourseRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, section) = s
            .rsplit_once(':')
            .ok_or_else(|| format!("expected NAME:SECTION, got '{s}'"))?;
        Ok(Self {
            name: name.trim().to_string(),
            section: section.trim().to_string(),
        })
    }
}

impl std::fmt::Display for CourseRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.section)
    }
}

/// Event fields separated by `;`; details may be omitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventArg {
    pub title: String,
    pub days: String,
    pub start: i32,
    pub end: i32,
    pub details: String,
}

impl FromStr for EventArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(5, ';').collect();
        let [title, days, start, end, rest @ ..] = parts.as_slice() else {
            return Err(format!("expected TITLE;DAYS;START;END[;DETAILS], got '{s}'"));
        };
        let time = |value: &str| {
            value
                .trim()
                .parse::<i32>()
                .map_err(|_| format!("'{value}' is not a military time"))
        };

        Ok(Self {
            title: title.to_string(),
            days: days.trim().to_string(),
            start: time(*start)?,
            end: time(*end)?,
            details: rest.first().map(|d| d.to_string()).unwrap_or_default(),
        })
    }
}
