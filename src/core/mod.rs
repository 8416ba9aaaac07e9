pub mod badges;
pub mod grade;
pub mod logging;
pub mod records;
pub mod reminder;
pub mod scorecard;
pub mod status;
pub mod streak;
