use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "fitlog", version, about = "Personal fitness and nutrition log")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override the current date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    /// Print diagnostic events to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize profile and data directory
    Init {
        /// Skip interactive setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Log activity
    Log {
        #[command(subcommand)]
        action: LogAction,
    },

    /// Manage reminders and record completions
    Reminder {
        #[command(subcommand)]
        action: ReminderAction,
    },

    /// Show exercise and meal streaks
    Streak,

    /// Show personal records
    Pr {
        /// Exercise name or alias
        exercise: Option<String>,
    },

    /// Show badge progress
    Badges {
        /// Unlock any milestones reached before showing progress
        #[arg(long)]
        unlock: bool,

        /// List the unlock ledger instead of progress
        #[arg(long, conflicts_with = "unlock")]
        history: bool,
    },

    /// Weekly graded scorecard
    Scorecard {
        /// First day of the 7-day window (default: Monday of this week)
        #[arg(long)]
        start: Option<NaiveDate>,
    },

    /// Quick overview of today
    Status,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum LogAction {
    /// Log an exercise entry
    Exercise {
        /// Exercise name or alias (e.g. "bench press", bp)
        name: String,

        #[arg(long)]
        sets: u32,

        #[arg(long)]
        reps: u32,

        /// Load in kg
        #[arg(long)]
        weight: Option<f64>,

        /// Muscle group (e.g. chest, legs)
        #[arg(long)]
        muscle: Option<String>,

        /// Duration in minutes
        #[arg(long)]
        duration: Option<f64>,

        /// Free-text note
        #[arg(long)]
        note: Option<String>,
    },

    /// Log a meal
    Meal {
        /// Food name
        food: String,

        /// breakfast, lunch, dinner or snack
        #[arg(long = "type")]
        meal_type: String,

        #[arg(long)]
        calories: f64,

        /// Protein in grams
        #[arg(long, default_value_t = 0.0)]
        protein: f64,

        /// Carbohydrates in grams
        #[arg(long, default_value_t = 0.0)]
        carbs: f64,

        /// Fat in grams
        #[arg(long, default_value_t = 0.0)]
        fat: f64,
    },

    /// Log a JSON array of entries tagged with "kind": "exercise" | "meal"
    Batch {
        json: String,
    },

    /// Show recent exercise entries
    List {
        /// Maximum number of entries
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },

    /// Delete an exercise entry by id
    Remove {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ReminderAction {
    /// Add a reminder
    Add {
        title: String,

        /// daily, weekly or once
        #[arg(long = "freq")]
        frequency: String,

        /// Repeat days for weekly reminders (e.g. mon,wed,fri)
        #[arg(long)]
        days: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Start date (default: today)
        #[arg(long)]
        start: Option<NaiveDate>,

        #[arg(long)]
        end: Option<NaiveDate>,
    },

    /// List reminders
    List {
        /// Include inactive reminders
        #[arg(long)]
        all: bool,
    },

    /// Mark a reminder done for the day
    Done {
        id: String,

        /// Record as skipped instead of completed
        #[arg(long)]
        skipped: bool,
    },

    /// Deactivate a reminder
    Remove {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. calorie_target, protein_target, workout_days, alias.bp)
        key: String,
        /// Config value
        value: String,
    },
}
