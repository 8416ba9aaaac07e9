pub mod badges;
pub mod completions;
pub mod config;
pub mod init;
pub mod log;
pub mod pr;
pub mod reminder;
pub mod scorecard;
pub mod status;
pub mod streak;
