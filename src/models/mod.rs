pub mod activity;
pub mod badge;
pub mod config;
pub mod record;
pub mod reminder;

pub use activity::{ExerciseLog, MealLog, ReminderLog};
