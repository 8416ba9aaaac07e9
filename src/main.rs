mod cli;
mod cmd;

use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction, LogAction, ReminderAction};
use fitlog::db::StoreError;
use fitlog::output;
use std::process;

fn main() {
    let cli = Cli::parse();
    fitlog::telemetry::init(cli.verbose);

    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let human = cli.human;

    let result = match cli.command {
        Commands::Init { skip } => cmd::init::run(skip),
        Commands::Log { action } => match action {
            LogAction::Exercise {
                name,
                sets,
                reps,
                weight,
                muscle,
                duration,
                note,
            } => cmd::log::run_exercise(
                cmd::log::ExerciseArgs {
                    name,
                    sets,
                    reps,
                    weight,
                    muscle,
                    duration,
                    note,
                },
                today,
                human,
            ),
            LogAction::Meal {
                food,
                meal_type,
                calories,
                protein,
                carbs,
                fat,
            } => cmd::log::run_meal(
                cmd::log::MealArgs {
                    food,
                    meal_type,
                    calories,
                    protein,
                    carbs,
                    fat,
                },
                today,
                human,
            ),
            LogAction::Batch { json } => cmd::log::run_batch(&json, today, human),
            LogAction::List { limit } => cmd::log::run_list(limit, human),
            LogAction::Remove { id } => cmd::log::run_remove(&id, human),
        },
        Commands::Reminder { action } => match action {
            ReminderAction::Add {
                title,
                frequency,
                days,
                category,
                start,
                end,
            } => cmd::reminder::run_add(
                fitlog::core::reminder::AddReminderParams {
                    title: &title,
                    category: category.as_deref(),
                    frequency: &frequency,
                    days: days.as_deref(),
                    start: start.unwrap_or(today),
                    end,
                },
                human,
            ),
            ReminderAction::List { all } => cmd::reminder::run_list(all, human),
            ReminderAction::Done { id, skipped } => {
                cmd::reminder::run_done(&id, skipped, today, human)
            }
            ReminderAction::Remove { id } => cmd::reminder::run_remove(&id, human),
        },
        Commands::Streak => cmd::streak::run(today, human),
        Commands::Pr { exercise } => cmd::pr::run(exercise.as_deref(), human),
        Commands::Badges { unlock, history } => cmd::badges::run(unlock, history, today, human),
        Commands::Scorecard { start } => cmd::scorecard::run(start, today, human),
        Commands::Status => cmd::status::run(today, human),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Completions { shell } => cmd::completions::run(shell),
    };

    if let Err(e) = result {
        let code = match e.downcast_ref::<StoreError>() {
            Some(store_err) if store_err.is_retryable() => "conflict",
            _ => "general_error",
        };
        let err = output::error("", code, &e.to_string());
        eprintln!("{}", err);
        process::exit(1);
    }
}
