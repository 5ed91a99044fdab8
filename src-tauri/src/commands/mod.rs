pub mod characters;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod graph;
