pub mod planner;
pub mod search;
pub mod views;
