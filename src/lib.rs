pub mod config;
pub mod mean;
pub mod report;
