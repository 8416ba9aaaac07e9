pub mod core;
pub mod db;
pub mod models;
pub mod output;
pub mod telemetry;
