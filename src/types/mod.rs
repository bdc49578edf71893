pub mod candidate;
pub mod config;
pub mod report;
pub mod scoring;
