pub mod config;
pub mod fetch;
pub mod measurement;
pub mod output;
pub mod providers;
pub mod report;
pub mod scoring;
